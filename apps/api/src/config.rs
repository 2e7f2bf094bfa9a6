use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Everything is optional or defaulted; missing optional sections disable
/// the matching feature instead of failing startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Directory holding the profile store file.
    pub data_dir: String,
    /// Absent key disables the AI flows.
    pub gemini_api_key: Option<String>,
    /// Absent section disables the contact relay.
    pub smtp: Option<SmtpConfig>,
}

/// SMTP settings for the contact relay.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    /// `true` selects implicit TLS on connect, otherwise STARTTLS.
    pub secure: bool,
    pub user: String,
    pub pass: String,
    /// Mailbox both outbound messages are sent from.
    pub from_email: String,
    /// Address receiving contact form notifications.
    pub recipient: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            data_dir: std::env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()),
            gemini_api_key: std::env::var("GEMINI_API_KEY").ok(),
            smtp: SmtpConfig::from_env()?,
        })
    }
}

impl SmtpConfig {
    /// Reads the SMTP variable set. All seven must be present for mail to
    /// be configured; anything less counts as unconfigured and the contact
    /// endpoint reports the configuration error at request time.
    fn from_env() -> Result<Option<Self>> {
        let host = std::env::var("SMTP_HOST").ok();
        let port = std::env::var("SMTP_PORT").ok();
        let secure = std::env::var("SMTP_SECURE").ok();
        let user = std::env::var("SMTP_USER").ok();
        let pass = std::env::var("SMTP_PASS").ok();
        let from_email = std::env::var("SMTP_FROM_EMAIL").ok();
        let recipient = std::env::var("CONTACT_RECIPIENT").ok();

        match (host, port, secure, user, pass, from_email, recipient) {
            (
                Some(host),
                Some(port),
                Some(secure),
                Some(user),
                Some(pass),
                Some(from_email),
                Some(recipient),
            ) => Ok(Some(SmtpConfig {
                host,
                port: port
                    .parse::<u16>()
                    .context("SMTP_PORT must be a valid port number")?,
                secure: secure == "true",
                user,
                pass,
                from_email,
                recipient,
            })),
            _ => Ok(None),
        }
    }
}
