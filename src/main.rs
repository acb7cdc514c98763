use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use yaas_server::config::Args;
use yaas_server::rate_limit::{RateLimiter, purge_worker};
use yaas_server::routes::router;
use yaas_server::state::AppState;

// this is main async function with tokio
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // parse cli arguments
    let args = Args::parse();

    // the limiter is built once here and handed to request-handling code,
    // so tests get their own instance and nothing leaks between them
    let limiter = Arc::new(RateLimiter::new(
        args.rate_limit,
        Duration::from_secs(args.rate_window),
    ));
    let state = Arc::new(AppState::new(limiter.clone(), args.trust_proxy));

    // spawn the background purge task
    tokio::spawn(purge_worker(
        limiter,
        Duration::from_secs(args.purge_interval),
    ));

    let app = router(state);

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("YaaS running at http://localhost:{}", args.port);
    info!(
        "Rate limit: {} requests per {} seconds",
        args.rate_limit, args.rate_window
    );
    if args.trust_proxy {
        info!("Trusting forwarded headers for client identity");
    }

    let shutdown_signal = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C signal handler");
        info!("Received shutdown signal, shutting down gracefully...");
    };

    // connect-info keeps the peer address available to the admission gate
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal)
    .await?;

    info!("Server shutdown complete");
    Ok(())
}
