use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use voice_ip_minter::server::{self, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "voice_ip_minter=info,minter_server=info,axum=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;
    server::run(config).await
}
