//! Main entry point for the Microsoft Translator CLI

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mstranslator::cli::commands::{self, Commands, ConnectionArgs};
use mstranslator::TranslationClient;

/// Microsoft Translator v3 client
#[derive(Parser, Debug)]
#[command(name = "mstranslator", version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    connection: ConnectionArgs,

    /// Write request/response trace to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    let log_level = if args.verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}={}", env!("CARGO_PKG_NAME"), log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let Some(command) = args.command else {
        println!("Please specify a command. Use --help for more information.");
        return Ok(());
    };

    let client = TranslationClient::new(args.connection.into_config(args.verbose)?);

    match command {
        Commands::Translate { text, to, from } => {
            commands::handle_translate(&client, text, from, to).await?;
        }
        Commands::Detect { text } => {
            commands::handle_detect(&client, text).await?;
        }
    }

    Ok(())
}
