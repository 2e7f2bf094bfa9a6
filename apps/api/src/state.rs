use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::Config;
use crate::contact::mailer::Mailer;
use crate::llm_client::LlmClient;
use crate::portfolio::models::Profile;
use crate::portfolio::store::ProfileStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The reconciled profile served and mutated by the portfolio endpoints.
    pub profile: Arc<RwLock<Profile>>,
    /// Persistence sink; every profile mutation writes back through it.
    pub store: Arc<ProfileStore>,
    /// `None` when GEMINI_API_KEY is unset; AI endpoints answer with their
    /// degraded responses instead.
    pub llm: Option<LlmClient>,
    /// Pluggable mail transport. `None` when SMTP is unconfigured.
    pub mailer: Option<Arc<dyn Mailer>>,
    pub config: Config,
}
