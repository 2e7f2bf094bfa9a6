//! Outbound email over SMTP.
//!
//! A `Mailer` trait fronts the transport so handler tests can swap in a
//! recording double; `SmtpMailer` is the production implementation over
//! lettre's tokio transport. Every message carries a plain-text body plus an
//! HTML alternative.

use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;

use crate::config::SmtpConfig;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("failed to build mail message: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

impl MailError {
    /// Client-facing text for a failed send. The detailed cause stays in the
    /// server log.
    pub fn user_message(&self) -> &'static str {
        match self {
            MailError::Address(_) | MailError::Message(_) => "Invalid email address(es) provided.",
            MailError::Transport(e) if e.is_permanent() => {
                "Email authentication failed. Please check server credentials."
            }
            MailError::Transport(e) if e.is_timeout() || e.is_transient() => {
                "Could not connect to email server. Please try again later."
            }
            MailError::Transport(_) => "Failed to send message. Please try again later.",
        }
    }
}

/// One outbound message, transport-agnostic.
#[derive(Debug, Clone)]
pub struct OutboundEmail {
    pub from_name: String,
    pub from_email: String,
    pub reply_to: Option<String>,
    pub to: String,
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
}

/// Sends one message. Carried in `AppState` as `Option<Arc<dyn Mailer>>`;
/// `None` means SMTP was never configured and the contact route refuses
/// before building anything.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError>;
}

/// Production mailer over lettre's async SMTP transport.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    /// Builds the transport from config. `secure` selects implicit TLS on
    /// connect; otherwise the connection upgrades via STARTTLS.
    pub fn new(config: &SmtpConfig) -> Result<Self, MailError> {
        let builder = if config.secure {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
        };
        let transport = builder
            .port(config.port)
            .credentials(Credentials::new(config.user.clone(), config.pass.clone()))
            .build();
        Ok(Self { transport })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
        let mut builder = Message::builder()
            .from(Mailbox::new(
                Some(email.from_name.clone()),
                email.from_email.parse()?,
            ))
            .to(email.to.parse()?)
            .subject(email.subject.as_str());
        if let Some(reply_to) = &email.reply_to {
            builder = builder.reply_to(reply_to.parse()?);
        }
        let message = builder.multipart(MultiPart::alternative_plain_html(
            email.text_body.clone(),
            email.html_body.clone(),
        ))?;

        self.transport.send(message).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smtp_config(secure: bool) -> SmtpConfig {
        SmtpConfig {
            host: "smtp.example.com".to_string(),
            port: if secure { 465 } else { 587 },
            secure,
            user: "mailer".to_string(),
            pass: "hunter2".to_string(),
            from_email: "portfolio@example.com".to_string(),
            recipient: "owner@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_transport_builds_for_both_tls_modes() {
        assert!(SmtpMailer::new(&smtp_config(true)).is_ok());
        assert!(SmtpMailer::new(&smtp_config(false)).is_ok());
    }

    #[test]
    fn test_address_errors_map_to_the_invalid_address_message() {
        let err = MailError::from("not an address".parse::<lettre::Address>().unwrap_err());
        assert_eq!(err.user_message(), "Invalid email address(es) provided.");
    }
}
