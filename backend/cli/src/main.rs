mod api;
mod preview_cmd;
mod status_cmd;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, instrument};

use hellostay_channels::{ChannelAdapter, LineAdapter};
use hellostay_config::BotConfig;
use hellostay_routing::Dispatcher;

#[derive(Parser)]
#[command(name = "hellostay")]
#[command(about = "Hello Stay: LINE guest-service bot for 你好哇寓所 & 溝頂民宿")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the webhook server
    Serve {
        /// Port to bind the HTTP server to
        #[arg(short, long)]
        port: Option<u16>,
        /// YAML property profile overriding the built-in URLs, colors and contacts
        #[arg(long)]
        profile: Option<PathBuf>,
    },
    /// Query the health endpoint of a running server
    Status {
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Print the reply JSON for a template name or postback key
    Preview {
        /// e.g. `wifi`, `main_menu`, `FAQ_COOK`
        target: String,
        #[arg(long)]
        profile: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = BotConfig::from_env();
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, profile } => {
            logging::init_logger(config.log_dir.as_deref(), &config.log_level);
            let config = BotConfig {
                port: port.unwrap_or(config.port),
                profile_path: profile.or(config.profile_path),
                ..config
            };
            run_server(config).await?;
        }
        Commands::Status { port } => {
            status_cmd::run(port.unwrap_or(config.port)).await?;
        }
        Commands::Preview { target, profile } => {
            let path = profile.or(config.profile_path);
            let profile = hellostay_config::load_profile(path.as_deref()).await?;
            preview_cmd::run(&target, &profile)?;
        }
    }

    Ok(())
}

#[instrument(skip_all, fields(port = config.port))]
async fn run_server(config: BotConfig) -> Result<()> {
    info!(
        bind = %config.bind_address,
        webhook = %config.webhook_path,
        signature_check = config.verify_signature(),
        "Starting Hello Stay webhook"
    );
    debug!(config = %config.redacted(), "Effective configuration");

    let profile = hellostay_config::load_and_validate(&config).await?;
    let dispatcher = Dispatcher::from_profile(profile).context("compiling keyword rules")?;

    let line = LineAdapter::from_bot_config(&config, Arc::new(dispatcher))
        .context("configuring LINE channel")?;
    line.start().await?;
    let adapters: Vec<Arc<dyn ChannelAdapter>> = vec![Arc::new(line)];

    let app = api::build_router(&adapters)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());
    let addr = config.listen_addr();

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(addr = %addr, "HTTP API listening");

    axum::serve(listener, app).await?;

    Ok(())
}
