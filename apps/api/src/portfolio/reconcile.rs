//! Merge of a previously cached profile with the current built-in defaults.
//!
//! Earlier deployments shipped literal placeholder content ("Your Name" and
//! friends). A cached record that still carries one of those literals was
//! never customized by the owner, so the field is refreshed from the current
//! defaults; every other cached value is trusted as-is, empty strings
//! included. Collection fields are kept or replaced whole — there is no
//! per-entry merge.

use crate::portfolio::models::{CachedProfile, ContactInfo, Profile};

/// Placeholder values shipped by earlier default generations. A cached field
/// equal to one of these means "never customized". Closed, hand-maintained
/// lists; extend them when a new generation retires its placeholder text.
const PLACEHOLDER_NAMES: &[&str] = &["Your Name", "Alex"];
const PLACEHOLDER_TITLES: &[&str] = &["Full-Stack Developer | UI/UX Enthusiast"];
const PLACEHOLDER_EMAILS: &[&str] = &["your.email@example.com"];

/// Image hosts that only ever served stand-in artwork. A cached profile image
/// pointing at one of these survived a deploy it should not have.
const PLACEHOLDER_IMAGE_HOSTS: &[&str] = &["placehold.co"];

/// Reconciles the cached profile (if any) against the current defaults and
/// returns the profile to serve. Pure; the caller persists the result.
///
/// A `None` cache slot (missing or unparseable) yields the defaults
/// verbatim.
pub fn reconcile(cached: Option<CachedProfile>, defaults: &Profile) -> Profile {
    let Some(cached) = cached else {
        return defaults.clone();
    };

    let name = keep_unless_placeholder(cached.name, PLACEHOLDER_NAMES, &defaults.name);
    let title = keep_unless_placeholder(cached.title, PLACEHOLDER_TITLES, &defaults.title);

    let cached_email = cached.contact_info.as_ref().and_then(|c| c.email.clone());
    let email = match cached_email {
        Some(email) if !PLACEHOLDER_EMAILS.contains(&email.as_str()) => email,
        _ => defaults.contact_info.email.clone(),
    };
    let phone = cached
        .contact_info
        .as_ref()
        .and_then(|c| c.phone.clone())
        .or_else(|| defaults.contact_info.phone.clone());

    let mut profile_image = cached
        .profile_image
        .clone()
        .or_else(|| defaults.profile_image.clone());
    let mut profile_image_hint = cached
        .profile_image_hint
        .or_else(|| defaults.profile_image_hint.clone());

    // A stale placeholder link takes the hint down with it: both are reset so
    // the pair stays coherent. Only applies when the defaults ship an image.
    if let Some(url) = cached.profile_image.as_deref() {
        if is_placeholder_image(url) && defaults.profile_image.is_some() {
            profile_image = defaults.profile_image.clone();
            profile_image_hint = defaults.profile_image_hint.clone();
        }
    }

    Profile {
        name,
        title,
        profile_image,
        profile_image_hint,
        about_me: cached
            .about_me
            .unwrap_or_else(|| defaults.about_me.clone()),
        skills: cached.skills.unwrap_or_else(|| defaults.skills.clone()),
        projects: cached
            .projects
            .unwrap_or_else(|| defaults.projects.clone()),
        contact_info: ContactInfo { email, phone },
    }
}

/// Keeps a cached scalar unless it is absent or a known placeholder literal.
/// Present non-placeholder values are trusted, including the empty string.
fn keep_unless_placeholder(
    cached: Option<String>,
    placeholders: &[&str],
    fallback: &Option<String>,
) -> Option<String> {
    match cached {
        Some(value) if !placeholders.contains(&value.as_str()) => Some(value),
        _ => fallback.clone(),
    }
}

fn is_placeholder_image(url: &str) -> bool {
    PLACEHOLDER_IMAGE_HOSTS.iter().any(|host| url.contains(host))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::defaults::default_profile;
    use crate::portfolio::models::{CachedContactInfo, Project};

    /// A cache record with every field customized and no placeholder values.
    fn customized_cache() -> CachedProfile {
        CachedProfile {
            name: Some("Robin Okafor".to_string()),
            title: Some("Embedded Engineer".to_string()),
            profile_image: Some("https://robin.dev/me.jpg".to_string()),
            profile_image_hint: Some("robin outdoors".to_string()),
            about_me: Some("I write firmware.".to_string()),
            skills: Some(vec!["C".to_string(), "Rust".to_string()]),
            projects: Some(vec![Project {
                name: "RTOS Scheduler".to_string(),
                description: "A priority scheduler for a hobby RTOS.".to_string(),
                link: Some("https://robin.dev/rtos".to_string()),
                image: None,
                image_hint: None,
            }]),
            contact_info: Some(CachedContactInfo {
                email: Some("robin@robin.dev".to_string()),
                phone: Some("+44 20 7946 0000".to_string()),
            }),
        }
    }

    #[test]
    fn test_missing_cache_returns_defaults_verbatim() {
        let defaults = default_profile();
        assert_eq!(reconcile(None, &defaults), defaults);
    }

    #[test]
    fn test_customized_cache_is_kept_unchanged_in_every_field() {
        let defaults = default_profile();
        let merged = reconcile(Some(customized_cache()), &defaults);

        assert_eq!(merged.name.as_deref(), Some("Robin Okafor"));
        assert_eq!(merged.title.as_deref(), Some("Embedded Engineer"));
        assert_eq!(merged.profile_image.as_deref(), Some("https://robin.dev/me.jpg"));
        assert_eq!(merged.profile_image_hint.as_deref(), Some("robin outdoors"));
        assert_eq!(merged.about_me, "I write firmware.");
        assert_eq!(merged.skills, vec!["C".to_string(), "Rust".to_string()]);
        assert_eq!(merged.projects.len(), 1);
        assert_eq!(merged.projects[0].name, "RTOS Scheduler");
        assert_eq!(merged.contact_info.email, "robin@robin.dev");
        assert_eq!(merged.contact_info.phone.as_deref(), Some("+44 20 7946 0000"));
    }

    #[test]
    fn test_placeholder_name_is_replaced_with_default() {
        let defaults = default_profile();
        let mut cached = customized_cache();
        cached.name = Some("Your Name".to_string());

        let merged = reconcile(Some(cached), &defaults);
        assert_eq!(merged.name, defaults.name);
        // Other customized fields are untouched by the substitution.
        assert_eq!(merged.title.as_deref(), Some("Embedded Engineer"));
    }

    #[test]
    fn test_retired_default_name_is_replaced() {
        let defaults = default_profile();
        let mut cached = customized_cache();
        cached.name = Some("Alex".to_string());

        let merged = reconcile(Some(cached), &defaults);
        assert_eq!(merged.name, defaults.name);
    }

    #[test]
    fn test_placeholder_title_is_replaced_with_default() {
        let defaults = default_profile();
        let mut cached = customized_cache();
        cached.title = Some("Full-Stack Developer | UI/UX Enthusiast".to_string());

        let merged = reconcile(Some(cached), &defaults);
        assert_eq!(merged.title, defaults.title);
    }

    #[test]
    fn test_placeholder_email_is_replaced_with_default() {
        let defaults = default_profile();
        let mut cached = customized_cache();
        cached.contact_info = Some(CachedContactInfo {
            email: Some("your.email@example.com".to_string()),
            phone: Some("+44 20 7946 0000".to_string()),
        });

        let merged = reconcile(Some(cached), &defaults);
        assert_eq!(merged.contact_info.email, defaults.contact_info.email);
        assert_eq!(merged.contact_info.phone.as_deref(), Some("+44 20 7946 0000"));
    }

    #[test]
    fn test_absent_scalars_fall_back_to_defaults() {
        let defaults = default_profile();
        let cached = CachedProfile::default();

        let merged = reconcile(Some(cached), &defaults);
        assert_eq!(merged, defaults);
    }

    #[test]
    fn test_empty_string_values_are_trusted() {
        let defaults = default_profile();
        let mut cached = customized_cache();
        cached.name = Some(String::new());
        cached.about_me = Some(String::new());

        let merged = reconcile(Some(cached), &defaults);
        assert_eq!(merged.name.as_deref(), Some(""));
        assert_eq!(merged.about_me, "");
    }

    #[test]
    fn test_present_empty_collections_are_kept() {
        let defaults = default_profile();
        let mut cached = customized_cache();
        cached.skills = Some(vec![]);
        cached.projects = Some(vec![]);

        let merged = reconcile(Some(cached), &defaults);
        assert!(merged.skills.is_empty());
        assert!(merged.projects.is_empty());
    }

    #[test]
    fn test_absent_collections_fall_back_to_defaults() {
        let defaults = default_profile();
        let mut cached = customized_cache();
        cached.skills = None;
        cached.projects = None;

        let merged = reconcile(Some(cached), &defaults);
        assert_eq!(merged.skills, defaults.skills);
        assert_eq!(merged.projects, defaults.projects);
    }

    #[test]
    fn test_placeholder_profile_image_swaps_image_and_hint() {
        let defaults = default_profile();
        let mut cached = customized_cache();
        cached.profile_image = Some("https://placehold.co/300x300.png?text=Me".to_string());
        cached.profile_image_hint = Some("stand-in artwork".to_string());

        let merged = reconcile(Some(cached), &defaults);
        assert_eq!(merged.profile_image, defaults.profile_image);
        assert_eq!(merged.profile_image_hint, defaults.profile_image_hint);
    }

    #[test]
    fn test_placeholder_image_kept_when_defaults_have_none() {
        let mut defaults = default_profile();
        defaults.profile_image = None;
        defaults.profile_image_hint = None;
        let mut cached = customized_cache();
        cached.profile_image = Some("https://placehold.co/300x300.png".to_string());

        let merged = reconcile(Some(cached), &defaults);
        assert_eq!(
            merged.profile_image.as_deref(),
            Some("https://placehold.co/300x300.png")
        );
    }

    #[test]
    fn test_absent_phone_restores_default_phone() {
        let defaults = default_profile();
        let mut cached = customized_cache();
        cached.contact_info = Some(CachedContactInfo {
            email: Some("robin@robin.dev".to_string()),
            phone: None,
        });

        let merged = reconcile(Some(cached), &defaults);
        assert_eq!(merged.contact_info.phone, defaults.contact_info.phone);
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let defaults = default_profile();

        let once = reconcile(Some(customized_cache()), &defaults);
        let twice = reconcile(Some(CachedProfile::from(once.clone())), &defaults);
        assert_eq!(twice, once);

        // Also holds when the first pass substituted placeholders.
        let mut cached = customized_cache();
        cached.name = Some("Your Name".to_string());
        cached.profile_image = Some("https://placehold.co/1.png".to_string());
        let once = reconcile(Some(cached), &defaults);
        let twice = reconcile(Some(CachedProfile::from(once.clone())), &defaults);
        assert_eq!(twice, once);
    }

    /// The placeholder lists and the current defaults must never overlap:
    /// a collision would make reconciliation discard fresh defaults (and
    /// break idempotence). Catches careless edits to either side.
    #[test]
    fn test_current_defaults_contain_no_placeholder_values() {
        let defaults = default_profile();

        let name = defaults.name.as_deref().unwrap();
        let title = defaults.title.as_deref().unwrap();
        assert!(!PLACEHOLDER_NAMES.contains(&name));
        assert!(!PLACEHOLDER_TITLES.contains(&title));
        assert!(!PLACEHOLDER_EMAILS.contains(&defaults.contact_info.email.as_str()));
        assert!(!is_placeholder_image(defaults.profile_image.as_deref().unwrap()));
    }
}
