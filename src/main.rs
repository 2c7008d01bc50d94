//! GreenLend Scoring Service entrypoint

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use greenlend::config::Config;
use greenlend::logic::estimator::OnnxEstimator;
use greenlend::{create_router, AppState};

#[tokio::main]
async fn main() {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    // Initialize logging; production defaults to info, development to debug
    let default_filter = if config.is_production() {
        "greenlend=info,tower_http=info"
    } else {
        "greenlend=debug,tower_http=debug"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("GreenLend scoring service starting...");
    tracing::info!("Risk model: {}", config.model_path);

    // Model load is fatal on failure: the service cannot score without it
    let estimator = match OnnxEstimator::load(
        &config.model_path,
        config.model_input_dim,
        config.class_threshold,
    ) {
        Ok(estimator) => estimator,
        Err(err) => {
            tracing::error!("Failed to load risk model: {}", err);
            std::process::exit(1);
        }
    };

    let state = AppState {
        estimator: Arc::new(estimator),
        config: config.clone(),
    };

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind server address");
    axum::serve(listener, app).await.expect("Server error");
}
