//! Contact form relay endpoint.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::SmtpConfig;
use crate::contact::mailer::OutboundEmail;
use crate::errors::AppError;
use crate::state::AppState;
use crate::validation::validate_contact;

#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

/// POST /api/v1/contact
///
/// Relays a contact form submission as two sends: a notification to the
/// portfolio owner with reply-to set to the submitter, then a confirmation
/// back to the submitter. Validation failures and missing SMTP
/// configuration reject before anything is sent. No retries; a failure on
/// either send fails the request.
pub async fn send_contact_message(
    State(state): State<AppState>,
    Json(req): Json<ContactRequest>,
) -> Result<Json<ContactResponse>, AppError> {
    let errors = validate_contact(&req.name, &req.email, &req.message);
    if !errors.is_empty() {
        return Err(AppError::Form(errors));
    }

    let (Some(mailer), Some(smtp)) = (&state.mailer, &state.config.smtp) else {
        return Err(AppError::MailNotConfigured);
    };

    info!("Received contact message from {} <{}>", req.name, req.email);

    mailer.send(&admin_notification(smtp, &req)).await?;
    mailer.send(&submitter_confirmation(smtp, &req)).await?;

    Ok(Json(ContactResponse {
        success: true,
        message: "Message sent successfully! A confirmation has been sent to your email."
            .to_string(),
    }))
}

/// Notification to the portfolio owner. The submitter's name is the display
/// name, but the envelope sender stays the configured mailbox; replies go
/// straight to the submitter.
fn admin_notification(smtp: &SmtpConfig, req: &ContactRequest) -> OutboundEmail {
    OutboundEmail {
        from_name: req.name.clone(),
        from_email: smtp.from_email.clone(),
        reply_to: Some(req.email.clone()),
        to: smtp.recipient.clone(),
        subject: format!("New contact message from {}", req.name),
        text_body: format!(
            "You received a message from {} ({}):\n\n{}",
            req.name, req.email, req.message
        ),
        html_body: format!(
            "<p>You received a message from:</p>\n\
             <p><strong>Name:</strong> {}</p>\n\
             <p><strong>Email:</strong> {}</p>\n\
             <p><strong>Message:</strong></p>\n\
             <p>{}</p>",
            req.name,
            req.email,
            req.message.replace('\n', "<br>")
        ),
    }
}

/// Confirmation back to the submitter, quoting the message. The display
/// name is the configured mailbox's local part.
fn submitter_confirmation(smtp: &SmtpConfig, req: &ContactRequest) -> OutboundEmail {
    let from_name = smtp
        .from_email
        .split('@')
        .next()
        .unwrap_or_default()
        .to_string();
    OutboundEmail {
        from_name,
        from_email: smtp.from_email.clone(),
        reply_to: None,
        to: req.email.clone(),
        subject: "Message Received - Thank you!".to_string(),
        text_body: format!(
            "Hi {},\n\nThank you for contacting us! We have received your message:\n\n\
             \"{}\"\n\nWe will get back to you shortly.\n\n\
             Best regards,\nThe Portfolio Team",
            req.name, req.message
        ),
        html_body: format!(
            "<p>Hi {},</p>\n\
             <p>Thank you for contacting us! We have received your message:</p>\n\
             <blockquote style=\"border-left: 2px solid #ccc; padding-left: 1em; \
             margin-left: 1em;\">{}</blockquote>\n\
             <p>We will get back to you shortly.</p>\n\
             <p>Best regards,<br/>The Portfolio Team</p>",
            req.name,
            req.message.replace('\n', "<br>")
        ),
    }
}
