use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use beautybird::config::AppConfig;
use beautybird::services::booking::{BookingPipeline, PipelineSettings};
use beautybird::services::messaging::messagebird::MessageBirdClient;
use beautybird::services::time_math::SystemClock;
use beautybird::state::AppState;
use beautybird::store::AppointmentStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    anyhow::ensure!(
        !config.messagebird_api_key.is_empty(),
        "MESSAGEBIRD_API_KEY must be set"
    );
    if config.country_code.is_empty() {
        tracing::warn!("COUNTRY_CODE not set, numbers must include an international prefix");
    }

    let messagebird = Arc::new(MessageBirdClient::new(
        config.messagebird_api_key.clone(),
        config.messagebird_base_url.clone(),
        config.provider_timeout,
    )?);

    let clock = Arc::new(SystemClock);
    let store = Arc::new(AppointmentStore::new());
    let pipeline = BookingPipeline::new(
        messagebird.clone(),
        messagebird,
        clock.clone(),
        store.clone(),
        PipelineSettings {
            country_code: config.country_code.clone(),
            originator: config.reminder_originator.clone(),
        },
    );

    let state = Arc::new(AppState {
        config: config.clone(),
        clock,
        store,
        pipeline,
    });

    let app = beautybird::build_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
