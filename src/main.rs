use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wasp::errors::FileAccessError;
use wasp::{render, BatchRunner, Config, LookupClient};

#[derive(Parser)]
#[command(name = "wasp")]
#[command(version)]
#[command(about = "WASP - Advanced Mobile Intelligence Tool")]
#[command(after_help = "Examples:
  wasp 9509972790          Scan single number
  wasp -f numbers.txt      Scan multiple numbers from file
  wasp                     Interactive mode")]
struct Cli {
    /// Mobile number to scan
    mobile: Option<String>,

    /// File containing mobile numbers (one per line)
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    // Initialize tracing; user-facing output stays on plain stdout.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wasp=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    // An interrupt outside the prompt loop ends the run cleanly with
    // status 0. Per-item output is already flushed by the renderer.
    tokio::spawn(async {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!("\n{}", "❌ Scan terminated by user".red());
            std::process::exit(0);
        }
    });

    render::print_banner();

    if let Err(e) = run(cli).await {
        let message = if e.downcast_ref::<FileAccessError>().is_some() {
            format!("❌ {}", e)
        } else {
            format!("💥 Critical error: {}", e)
        };
        println!("{}", message.red());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::default();
    let client = LookupClient::new(&config)?;
    let runner = BatchRunner::new(client, config.batch_delay);

    if let Some(path) = cli.file.as_deref() {
        runner.run_file(path).await?;
    } else if let Some(mobile) = cli.mobile.as_deref() {
        runner.run_single(mobile).await;
    } else {
        runner.run_interactive().await?;
    }

    Ok(())
}
