//! Form validation for the public API.
//!
//! Each form has a pure validator returning field-level errors; handlers
//! reject on a non-empty list before doing any other work. Lengths are
//! counted in characters, not bytes. The email and URL shape helpers used
//! across forms live here too.

use serde::Serialize;
use url::Url;

pub const CONTACT_NAME_MIN: usize = 2;
pub const CONTACT_MESSAGE_MIN: usize = 10;
pub const PROFILE_ABOUT_MIN: usize = 10;
pub const PROJECT_DESCRIPTION_MIN: usize = 10;
pub const IMAGE_HINT_MAX: usize = 50;

/// One failed constraint on one form field. Field names use the wire-format
/// (camelCase) spelling so clients can map errors back to inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Contact form: `{ name, email, message }`.
pub fn validate_contact(name: &str, email: &str, message: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if name.chars().count() < CONTACT_NAME_MIN {
        errors.push(FieldError::new(
            "name",
            "Name must be at least 2 characters long",
        ));
    }
    if !is_valid_email(email) {
        errors.push(FieldError::new("email", "Invalid email address"));
    }
    if message.chars().count() < CONTACT_MESSAGE_MIN {
        errors.push(FieldError::new(
            "message",
            "Message must be at least 10 characters long",
        ));
    }
    errors
}

/// Borrowed view of a profile save request. `phone` and `skills` carry no
/// constraints and are absent here.
#[derive(Debug)]
pub struct ProfileForm<'a> {
    pub name: &'a str,
    pub title: &'a str,
    pub about_me: &'a str,
    pub email: &'a str,
    pub profile_image: &'a str,
    pub profile_image_hint: &'a str,
}

pub fn validate_profile(form: &ProfileForm) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if form.name.is_empty() {
        errors.push(FieldError::new("name", "Name is required"));
    }
    if form.title.is_empty() {
        errors.push(FieldError::new("title", "Title is required"));
    }
    if form.about_me.chars().count() < PROFILE_ABOUT_MIN {
        errors.push(FieldError::new(
            "aboutMe",
            "About me must be at least 10 characters",
        ));
    }
    if !is_valid_email(form.email) {
        errors.push(FieldError::new("email", "Invalid email address"));
    }
    // The profile image may also be served from the site itself, so a
    // `/`-rooted path passes alongside absolute URLs and the empty string.
    if !form.profile_image.is_empty()
        && !form.profile_image.starts_with('/')
        && !is_valid_url(form.profile_image)
    {
        errors.push(FieldError::new(
            "profileImage",
            "Must be a valid URL or a relative path e.g. /image.png",
        ));
    }
    if form.profile_image_hint.chars().count() > IMAGE_HINT_MAX {
        errors.push(FieldError::new("profileImageHint", "Hint too long"));
    }
    errors
}

/// Borrowed view of a project add/edit request.
#[derive(Debug)]
pub struct ProjectForm<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub link: &'a str,
    pub image: &'a str,
    pub image_hint: &'a str,
}

pub fn validate_project(form: &ProjectForm) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if form.name.is_empty() {
        errors.push(FieldError::new("name", "Project name is required"));
    }
    if form.description.chars().count() < PROJECT_DESCRIPTION_MIN {
        errors.push(FieldError::new(
            "description",
            "Description must be at least 10 characters",
        ));
    }
    if !form.link.is_empty() && !is_valid_url(form.link) {
        errors.push(FieldError::new("link", "Must be a valid URL"));
    }
    if !form.image.is_empty() && !is_valid_url(form.image) {
        errors.push(FieldError::new("image", "Must be a valid URL for image"));
    }
    if form.image_hint.chars().count() > IMAGE_HINT_MAX {
        errors.push(FieldError::new("imageHint", "Hint too long"));
    }
    errors
}

/// Accepts `local@domain.tld` shapes: no whitespace, exactly one `@`, and a
/// dotted domain with no empty labels.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}

/// Absolute URL with a scheme; relative paths do not qualify.
pub fn is_valid_url(value: &str) -> bool {
    Url::parse(value).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_contact_form_passes() {
        let errors = validate_contact("Robin", "robin@robin.dev", "I would like to talk.");
        assert!(errors.is_empty());
    }

    #[test]
    fn test_two_character_name_is_the_minimum() {
        let errors = validate_contact("Jo", "jo@example.com", "Hello there, checking in.");
        assert!(errors.is_empty());
    }

    #[test]
    fn test_short_contact_name_is_rejected() {
        let errors = validate_contact("R", "robin@robin.dev", "I would like to talk.");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "name");
        assert_eq!(errors[0].message, "Name must be at least 2 characters long");
    }

    #[test]
    fn test_short_contact_message_is_rejected() {
        let errors = validate_contact("Robin", "robin@robin.dev", "Hi");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "message");
        assert_eq!(
            errors[0].message,
            "Message must be at least 10 characters long"
        );
    }

    #[test]
    fn test_contact_errors_accumulate_per_field() {
        let errors = validate_contact("R", "nope", "Hi");
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "email", "message"]);
    }

    #[test]
    fn test_min_lengths_count_characters_not_bytes() {
        let at_limit = "à".repeat(CONTACT_MESSAGE_MIN);
        let under_limit = "à".repeat(CONTACT_MESSAGE_MIN - 1);
        assert!(validate_contact("Robin", "robin@robin.dev", &at_limit).is_empty());
        assert!(!validate_contact("Robin", "robin@robin.dev", &under_limit).is_empty());
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.domain.io"));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a@.co"));
        assert!(!is_valid_email("a@b..c"));
        assert!(!is_valid_email("a@sub..domain.io"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a b@c.co"));
        assert!(!is_valid_email("a@b@c.co"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_profile_image_accepts_url_rooted_path_or_empty() {
        let mut form = ProfileForm {
            name: "Robin",
            title: "Engineer",
            about_me: "I write firmware for a living.",
            email: "robin@robin.dev",
            profile_image: "https://robin.dev/me.jpg",
            profile_image_hint: "",
        };
        assert!(validate_profile(&form).is_empty());

        form.profile_image = "/me.jpg";
        assert!(validate_profile(&form).is_empty());

        form.profile_image = "";
        assert!(validate_profile(&form).is_empty());

        form.profile_image = "me.jpg";
        let errors = validate_profile(&form);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "profileImage");
    }

    #[test]
    fn test_blank_profile_name_and_title_are_rejected() {
        let form = ProfileForm {
            name: "",
            title: "",
            about_me: "I write firmware for a living.",
            email: "robin@robin.dev",
            profile_image: "",
            profile_image_hint: "",
        };
        let fields: Vec<&str> = validate_profile(&form).iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "title"]);
    }

    #[test]
    fn test_project_link_must_be_absolute_url_or_empty() {
        let mut form = ProjectForm {
            name: "RTOS Scheduler",
            description: "A priority scheduler for a hobby RTOS.",
            link: "https://robin.dev/rtos",
            image: "",
            image_hint: "",
        };
        assert!(validate_project(&form).is_empty());

        form.link = "";
        assert!(validate_project(&form).is_empty());

        form.link = "robin.dev/rtos";
        let errors = validate_project(&form);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "link");
    }

    #[test]
    fn test_long_image_hint_is_rejected() {
        let hint = "a".repeat(IMAGE_HINT_MAX + 1);
        let form = ProjectForm {
            name: "RTOS Scheduler",
            description: "A priority scheduler for a hobby RTOS.",
            link: "",
            image: "",
            image_hint: &hint,
        };
        let errors = validate_project(&form);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "imageHint");
        assert_eq!(errors[0].message, "Hint too long");
    }

    #[test]
    fn test_short_project_description_is_rejected() {
        let form = ProjectForm {
            name: "RTOS Scheduler",
            description: "Too short",
            link: "",
            image: "",
            image_hint: "",
        };
        let errors = validate_project(&form);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "description");
    }
}
