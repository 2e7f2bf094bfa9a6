mod config;
mod contact;
mod errors;
mod flows;
mod llm_client;
mod portfolio;
mod routes;
mod state;
mod validation;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::Config;
use crate::contact::mailer::{Mailer, SmtpMailer};
use crate::llm_client::LlmClient;
use crate::portfolio::defaults::default_profile;
use crate::portfolio::reconcile::reconcile;
use crate::portfolio::store::ProfileStore;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Folio API v{}", env!("CARGO_PKG_VERSION"));

    // Load the cached profile, fold it over the current defaults, and write
    // the merged result back so the file is complete from the first boot.
    let store = ProfileStore::new(&config.data_dir);
    let defaults = default_profile();
    let profile = reconcile(store.load(), &defaults);
    store.save(&profile)?;
    info!(
        "Profile ready at {} ({} skills, {} projects)",
        store.path().display(),
        profile.skills.len(),
        profile.projects.len()
    );

    // Initialize LLM client
    let llm = match &config.gemini_api_key {
        Some(key) => {
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Some(LlmClient::new(key.clone()))
        }
        None => {
            warn!("GEMINI_API_KEY is not set; AI endpoints will return fallback responses");
            None
        }
    };

    // Initialize mail transport
    let mailer: Option<Arc<dyn Mailer>> = match &config.smtp {
        Some(smtp) => {
            let transport = SmtpMailer::new(smtp)?;
            info!("SMTP transport initialized (host: {})", smtp.host);
            Some(Arc::new(transport))
        }
        None => {
            warn!("SMTP is not configured; contact form sends are disabled");
            None
        }
    };

    // Build app state
    let state = AppState {
        profile: Arc::new(RwLock::new(profile)),
        store: Arc::new(store),
        llm,
        mailer,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
