//! Portfolio CRUD endpoints.
//!
//! The in-memory profile lives behind `state.profile`; every mutation writes
//! the full profile back through the store before replying, so the file and
//! memory never drift. The profile save endpoint owns the scalar fields and
//! skills; projects are managed only through their own endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::portfolio::models::{ContactInfo, Profile, Project};
use crate::state::AppState;
use crate::validation::{validate_profile, validate_project, ProfileForm, ProjectForm};

/// Stand-in artwork for projects submitted without an image.
const STOCK_PROJECT_IMAGE: &str = "https://placehold.co/600x400.png?text=Project";
const STOCK_PROJECT_IMAGE_HINT: &str = "project related";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub name: String,
    pub title: String,
    pub about_me: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub contact_info: UpdateContactInfo,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub profile_image_hint: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateContactInfo {
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRequest {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub image_hint: Option<String>,
}

/// GET /api/v1/portfolio
///
/// Returns the current reconciled profile.
pub async fn get_portfolio(State(state): State<AppState>) -> Json<Profile> {
    let profile = state.profile.read().await;
    Json(profile.clone())
}

/// PUT /api/v1/portfolio
///
/// Saves the profile scalars, skills and contact info exactly as submitted;
/// a cleared optional field is stored as the empty string so it stays
/// cleared across reloads instead of falling back to the defaults. Projects
/// are never touched here, whatever the client sent alongside.
pub async fn update_portfolio(
    State(state): State<AppState>,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<Profile>, AppError> {
    let form = ProfileForm {
        name: &req.name,
        title: &req.title,
        about_me: &req.about_me,
        email: &req.contact_info.email,
        profile_image: req.profile_image.as_deref().unwrap_or(""),
        profile_image_hint: req.profile_image_hint.as_deref().unwrap_or(""),
    };
    let errors = validate_profile(&form);
    if !errors.is_empty() {
        return Err(AppError::Form(errors));
    }

    let skills: Vec<String> = req
        .skills
        .iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    let mut profile = state.profile.write().await;
    profile.name = Some(req.name);
    profile.title = Some(req.title);
    profile.about_me = req.about_me;
    profile.skills = skills;
    profile.contact_info = ContactInfo {
        email: req.contact_info.email,
        phone: req.contact_info.phone,
    };
    profile.profile_image = req.profile_image;
    profile.profile_image_hint = req.profile_image_hint;

    state.store.save(&profile)?;
    info!("Profile updated");

    Ok(Json(profile.clone()))
}

/// POST /api/v1/portfolio/projects
///
/// Appends a project. A missing or blank image gets the stock placeholder
/// artwork and hint.
pub async fn add_project(
    State(state): State<AppState>,
    Json(req): Json<ProjectRequest>,
) -> Result<(StatusCode, Json<Project>), AppError> {
    let project = validated_project(&req)?;

    let mut profile = state.profile.write().await;
    profile.projects.push(project.clone());
    state.store.save(&profile)?;
    info!("Project \"{}\" added", project.name);

    Ok((StatusCode::CREATED, Json(project)))
}

/// PUT /api/v1/portfolio/projects/:name
///
/// Replaces every project whose name equals `:name` with the submitted
/// values. The submitted name may differ, which renames the project.
pub async fn update_project(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(req): Json<ProjectRequest>,
) -> Result<Json<Project>, AppError> {
    let project = validated_project(&req)?;

    let mut profile = state.profile.write().await;
    let mut replaced = false;
    for slot in profile.projects.iter_mut().filter(|p| p.name == name) {
        *slot = project.clone();
        replaced = true;
    }
    if !replaced {
        return Err(AppError::NotFound(format!("Project \"{name}\" not found")));
    }

    state.store.save(&profile)?;
    info!("Project \"{}\" updated", name);

    Ok(Json(project))
}

/// DELETE /api/v1/portfolio/projects/:name
///
/// Removes every project whose name equals `:name`.
pub async fn delete_project(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut profile = state.profile.write().await;
    let before = profile.projects.len();
    profile.projects.retain(|p| p.name != name);
    if profile.projects.len() == before {
        return Err(AppError::NotFound(format!("Project \"{name}\" not found")));
    }

    state.store.save(&profile)?;
    info!("Project \"{}\" deleted", name);

    Ok(StatusCode::NO_CONTENT)
}

/// Validates the request and builds the stored project, filling placeholder
/// artwork for blank image fields.
fn validated_project(req: &ProjectRequest) -> Result<Project, AppError> {
    let form = ProjectForm {
        name: &req.name,
        description: &req.description,
        link: req.link.as_deref().unwrap_or(""),
        image: req.image.as_deref().unwrap_or(""),
        image_hint: req.image_hint.as_deref().unwrap_or(""),
    };
    let errors = validate_project(&form);
    if !errors.is_empty() {
        return Err(AppError::Form(errors));
    }

    Ok(Project {
        name: req.name.clone(),
        description: req.description.clone(),
        link: none_if_blank(req.link.as_deref()),
        image: Some(
            none_if_blank(req.image.as_deref())
                .unwrap_or_else(|| STOCK_PROJECT_IMAGE.to_string()),
        ),
        image_hint: Some(
            none_if_blank(req.image_hint.as_deref())
                .unwrap_or_else(|| STOCK_PROJECT_IMAGE_HINT.to_string()),
        ),
    })
}

/// Normalizes an optional project field: absent and empty both mean "not
/// set". Project entries reload verbatim (no per-field fallback), so a
/// dropped key stays dropped.
fn none_if_blank(value: Option<&str>) -> Option<String> {
    match value {
        Some(v) if !v.is_empty() => Some(v.to_string()),
        _ => None,
    }
}
