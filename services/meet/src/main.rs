use anyhow::Context;
use tracing::info;

use huddle_core::tracing::init_tracing;
use huddle_meet::config::MeetConfig;
use huddle_meet::router::build_router;
use huddle_meet::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = MeetConfig::from_env()?;
    let state = AppState::from_config(&config)?;

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.meet_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("meet service listening on {addr}");
    axum::serve(listener, router).await.context("server error")
}
