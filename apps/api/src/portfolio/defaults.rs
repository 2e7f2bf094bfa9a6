//! Built-in portfolio content. Shipped with each deployment and used as the
//! fallback side of reconciliation; immutable at runtime.
//!
//! Keep this in sync field-for-field with [`Profile`] — a new profile field
//! with no default here is a bug in this file, not a runtime condition.

use crate::portfolio::models::{ContactInfo, Profile, Project};

pub fn default_profile() -> Profile {
    Profile {
        name: Some("Alex Carter".to_string()),
        title: Some("Full-Stack Developer".to_string()),
        profile_image: Some("/profile-photo.png".to_string()),
        profile_image_hint: Some("developer portrait".to_string()),
        about_me: "I am a passionate and creative full-stack developer with a knack for \
            building beautiful and functional web applications. I enjoy turning complex \
            problems into simple, elegant solutions. When I'm not coding, you can find me \
            exploring new technologies or contributing to open-source projects."
            .to_string(),
        skills: vec![
            "Rust".to_string(),
            "TypeScript".to_string(),
            "React".to_string(),
            "Axum".to_string(),
            "Node.js".to_string(),
            "PostgreSQL".to_string(),
            "Docker".to_string(),
            "Git & GitHub".to_string(),
            "REST APIs".to_string(),
            "UI/UX Design Principles".to_string(),
        ],
        projects: vec![
            Project {
                name: "E-commerce Platform".to_string(),
                description: "A full-featured e-commerce platform with product listings, \
                    user authentication, shopping cart, and a checkout process. Built with \
                    Axum, Stripe, and PostgreSQL."
                    .to_string(),
                link: Some("https://example.com/ecommerce".to_string()),
                image: Some(
                    "https://placehold.co/600x400.png?text=E-commerce+Platform".to_string(),
                ),
                image_hint: Some("online store".to_string()),
            },
            Project {
                name: "Task Management App".to_string(),
                description: "A collaborative task management application that allows users \
                    to create, assign, and track tasks within teams. Features real-time \
                    updates and a drag-and-drop interface."
                    .to_string(),
                link: None,
                image: Some("https://placehold.co/600x400.png?text=Task+Manager".to_string()),
                image_hint: Some("productivity app".to_string()),
            },
            Project {
                name: "Personal Blog".to_string(),
                description: "A statically generated blog with Markdown content. Features a \
                    clean design, fast performance, and easy content management."
                    .to_string(),
                link: Some("https://example.com/blog".to_string()),
                image: Some("https://placehold.co/600x400.png?text=Personal+Blog".to_string()),
                image_hint: Some("writing online".to_string()),
            },
        ],
        contact_info: ContactInfo {
            email: "alex@alexcarter.dev".to_string(),
            phone: Some("+1 (555) 123-4567".to_string()),
        },
    }
}
