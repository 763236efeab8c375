use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use launchpad::{serve, Container, ContainerConfig, DEFAULT_APP_URL};

#[derive(Parser)]
#[command(name = "launchpad")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long)]
    verbose: bool,

    /// Port for the control panel
    #[arg(short, long, default_value = "7860")]
    port: u16,

    /// Bind to 0.0.0.0 instead of 127.0.0.1, exposing the panel on all network interfaces
    #[arg(long)]
    public: bool,

    /// Directory containing the Next.js application (where `npm start` runs)
    #[arg(short, long, default_value = ".")]
    app_dir: String,

    /// URL the launched application advertises
    #[arg(long, default_value = DEFAULT_APP_URL)]
    app_url: String,

    /// Record launches instead of spawning real processes
    #[arg(long)]
    dry_run: bool,

    /// After a launch, poll the application URL and log whether it came up
    #[arg(long)]
    wait_ready: bool,

    /// Deadline in seconds for the readiness poll
    #[arg(long, default_value = "15")]
    probe_deadline: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = ContainerConfig {
        app_dir: cli.app_dir,
        app_url: cli.app_url,
        dry_run: cli.dry_run,
        wait_ready: cli.wait_ready,
        probe_deadline: Duration::from_secs(cli.probe_deadline),
    };

    if config.dry_run {
        info!("Dry run: launches will be recorded, not spawned");
    }

    let container = Arc::new(Container::new(config)?);
    let host = if cli.public { "0.0.0.0" } else { "127.0.0.1" };

    serve(container, host, cli.port).await
}
