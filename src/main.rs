use std::net::SocketAddr;

use school_cascade::lookup::stub::stub_router;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "school_cascade=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Serves the fixture-backed filter endpoints for local demos.
    let app = stub_router();

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    tracing::info!("listening on {}", addr);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(error) => {
            tracing::error!(%error, "failed to bind {}", addr);
            std::process::exit(1);
        }
    };
    if let Err(error) = axum::serve(listener, app).await {
        tracing::error!(%error, "server exited");
        std::process::exit(1);
    }
}
