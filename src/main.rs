use std::error::Error;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use hr_console::api::{AppState, create_router};
use hr_console::config::ConfigLoader;

#[derive(Parser, Debug)]
#[command(name = "hr-console", about = "HR administration console API")]
struct CliArgs {
    /// Path to config file
    #[arg(short, long, default_value = "config/console.yaml")]
    config: String,

    /// Port to listen on (overrides config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Log level (overrides config file)
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = CliArgs::parse();
    let loader = ConfigLoader::load(&args.config)?;
    let config = loader.config();

    let level = args.log_level.as_deref().unwrap_or(&config.logging.level);
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let state = AppState::from_config(&loader)?;
    let app = create_router(state);

    let port = args.port.unwrap_or(config.server.port);
    let listener = tokio::net::TcpListener::bind((config.server.host.as_str(), port)).await?;
    info!(
        address = %listener.local_addr()?,
        storage_dir = %config.storage_dir.display(),
        "HR console listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
