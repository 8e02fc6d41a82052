use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use farelens_api::{app, AppState};
use farelens_core::pricing::PredictionContext;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "farelens_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = farelens_store::app_config::Config::load().expect("Failed to load config");
    tracing::info!("Starting Farelens API on port {}", config.server.port);

    // Both artifacts are load-once and read-only; a failure here is
    // fatal and the process must not serve.
    let routes = farelens_store::route_repo::load_route_table(Path::new(
        &config.artifacts.route_table_path,
    ))
    .expect("Failed to load route table");

    let model = farelens_store::LinearModel::load(Path::new(&config.artifacts.model_path))
        .expect("Failed to load pricing model");

    let app_state = AppState {
        ctx: PredictionContext::new(Arc::new(routes), Arc::new(model)),
    };

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
