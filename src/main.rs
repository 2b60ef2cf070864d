use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio::io::BufReader;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use account_plan_assistant::{
    completion::GroqClient,
    config::{Config, LogFormat},
    scenarios,
    voice::CommandSpeaker,
    Repl,
};

/// Conversational company research assistant
#[derive(Parser, Debug)]
#[command(name = "account-plan-assistant", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start an interactive research session (default)
    Chat {
        /// Directory for /export files (overrides EXPORT_DIR)
        #[arg(long)]
        export_dir: Option<PathBuf>,

        /// Start with voice mode on
        #[arg(long)]
        voice: bool,
    },

    /// List the models served by the completion endpoint
    Models,

    /// Print sample queries for trying the assistant
    Scenarios,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if matches!(cli.command, Some(Commands::Scenarios)) {
        print!("{}", scenarios::render());
        return Ok(());
    }

    // Load configuration
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            eprintln!("Set GROQ_API_KEY in the environment or a .env file.");
            eprintln!("Get a free API key at: https://console.groq.com/");
            std::process::exit(1);
        }
    };

    // Initialize logging
    init_logging(&config);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        model = %config.generation.model,
        "Account plan assistant starting..."
    );

    let client = match GroqClient::new(&config.groq, config.request.clone()) {
        Ok(c) => {
            info!(base_url = %config.groq.base_url, "Completion client initialized");
            c
        }
        Err(e) => {
            error!(error = %e, "Failed to initialize completion client");
            return Err(e.into());
        }
    };

    match cli.command.unwrap_or(Commands::Chat {
        export_dir: None,
        voice: false,
    }) {
        Commands::Models => list_models(&client).await,
        Commands::Chat { export_dir, voice } => {
            let export_dir = export_dir.unwrap_or_else(|| config.export.dir.clone());
            let mut repl = Repl::new(Arc::new(client), config.generation.clone(), export_dir);

            match config
                .voice
                .command
                .as_deref()
                .and_then(CommandSpeaker::from_command_line)
            {
                Some(speaker) => {
                    info!(program = %speaker.program(), "Voice playback available");
                    repl = repl.with_speaker(Arc::new(speaker));
                }
                None if voice => warn!("--voice given but TTS_COMMAND is not set"),
                None => {}
            }

            let mut repl = repl.with_voice_mode(voice);
            repl.run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
                .await?;

            info!("Session closed");
            Ok(())
        }
        Commands::Scenarios => Ok(()),
    }
}

async fn list_models(client: &GroqClient) -> anyhow::Result<()> {
    let models = client.list_models().await?;
    println!("Available models:\n");
    for model in models.data {
        println!("Model: {}", model.id);
        if let Some(owner) = model.owned_by {
            println!("  Owned by: {}", owner);
        }
        if let Some(window) = model.context_window {
            println!("  Context window: {}", window);
        }
        if let Some(active) = model.active {
            println!("  Active: {}", active);
        }
        println!();
    }
    Ok(())
}

/// Initialize tracing/logging
fn init_logging(config: &Config) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}
