use serde::{Deserialize, Serialize};

/// The aggregate record describing the portfolio owner. This is both the wire
/// shape of the portfolio API and the payload persisted in the profile store,
/// so field names stay camelCase end to end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    /// Short keyword hint describing the profile image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_hint: Option<String>,
    pub about_me: String,
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
    pub contact_info: ContactInfo,
}

/// A single portfolio project. `name` doubles as the identity key for
/// edit/delete matching; uniqueness is assumed, not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_hint: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Lenient mirror of [`Profile`] used when parsing the cache slot. Records
/// written by earlier default generations may miss whole fields, so every
/// field is optional and absent keys deserialize to `None` instead of
/// failing the parse.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CachedProfile {
    pub name: Option<String>,
    pub title: Option<String>,
    pub profile_image: Option<String>,
    pub profile_image_hint: Option<String>,
    pub about_me: Option<String>,
    pub skills: Option<Vec<String>>,
    pub projects: Option<Vec<Project>>,
    pub contact_info: Option<CachedContactInfo>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CachedContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
}

// Only round-trip tests rebuild cache records from full profiles; the
// production path always goes through serde.
#[cfg(test)]
impl From<Profile> for CachedProfile {
    fn from(profile: Profile) -> Self {
        CachedProfile {
            name: profile.name,
            title: profile.title,
            profile_image: profile.profile_image,
            profile_image_hint: profile.profile_image_hint,
            about_me: Some(profile.about_me),
            skills: Some(profile.skills),
            projects: Some(profile.projects),
            contact_info: Some(CachedContactInfo {
                email: Some(profile.contact_info.email),
                phone: profile.contact_info.phone,
            }),
        }
    }
}
