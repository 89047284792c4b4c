//! One-shot mint from the command line: one invocation is one submit.

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use voice_ip_minter::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "mint", about = "Mint a voice IP asset")]
struct Args {
    /// Voice character name, e.g. "Morgan Freeman"
    #[arg(long)]
    name: String,

    /// URL of the character's image
    #[arg(long)]
    image_url: String,

    /// URL of the voice sample (MP3)
    #[arg(long)]
    voice_url: String,

    /// HEAD-check both URLs before minting
    #[arg(long)]
    validate_urls: bool,

    /// Request timeout in seconds (0 disables the bound)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Attach commercial-use license terms
    #[arg(long)]
    with_license_terms: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "voice_ip_minter=warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let mut config = MinterConfig::from_env()?;
    if args.validate_urls {
        config.validate_urls = true;
    }
    if args.with_license_terms {
        config.license_terms = true;
    }
    if let Some(secs) = args.timeout_secs {
        config.timeout = (secs > 0).then(|| Duration::from_secs(secs));
    }

    let client = MinterClient::builder().config(config).build()?;
    let request = MintRequest::new(args.name, args.image_url, args.voice_url);

    match client.mint().mint_ip_asset(&request).await {
        Ok(response) => {
            println!("IP Asset minted successfully!");
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("Minting failed: {}", e.user_message());
            if e.is_retryable() {
                eprintln!("This error is usually temporary; re-run the command to retry.");
            }
            Ok(ExitCode::FAILURE)
        }
    }
}
