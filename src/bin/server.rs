//! Static host for the built storefront client.
//!
//! Run with: cargo run --features server --bin storefront-host -- --dist dist --port 3000

use clap::Parser;

use isla_living_storefront::config::HostArgs;
use isla_living_storefront::host;
use isla_living_storefront::shared::logging::log_host_started;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = HostArgs::parse();
    args.validate()?;

    let app = host::router(&args.dist);
    let addr = args.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log_host_started(&addr, &args.dist);

    axum::serve(listener, app).await?;
    Ok(())
}
