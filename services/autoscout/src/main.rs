//! AutoScout CLI
//!
//! Describe what to track, in plain words, and get a monitor back.

use std::path::PathBuf;
use std::process::ExitCode;

use autoscout::error::FALLBACK_FAILURE_MESSAGE;
use autoscout::{
    build_controller, load_config, render, Config, IgnoreReason, RequestState, Submission,
};
use clap::Parser;
use tokio::io::BufReader;
use tracing::Level;

#[derive(Parser)]
#[command(name = "autoscout")]
#[command(about = "Create website monitors from natural-language descriptions")]
#[command(version)]
struct Args {
    /// What to track, e.g. "Track the price of this hoodie every 60 seconds".
    /// Omit to enter descriptions interactively.
    description: Option<String>,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Backend base URL (overrides config file)
    #[arg(long)]
    base_url: Option<String>,

    /// Request timeout in seconds (overrides config file)
    #[arg(long)]
    timeout: Option<u64>,

    /// Check that the backend is reachable and exit
    #[arg(long)]
    check: bool,

    /// Log level
    #[arg(short, long, default_value = "warn")]
    log_level: Level,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(
        "Parsed command line arguments: config={:?}, base_url={:?}, timeout={:?}, log_level={:?}",
        args.config,
        args.base_url,
        args.timeout,
        args.log_level
    );

    let mut config = if let Some(config_path) = &args.config {
        tracing::debug!("Loading configuration from {:?}", config_path);
        load_config(config_path)?
    } else {
        tracing::debug!("Using default configuration");
        Config::default()
    };

    if let Some(base_url) = args.base_url {
        config.server.base_url = base_url;
    }
    if let Some(timeout) = args.timeout {
        config.request.timeout_seconds = Some(timeout);
    }

    let mut controller = build_controller(&config)?;
    tracing::info!("Using backend at {}", config.server.base_url);

    if args.check {
        return match controller.manager().check_health().await {
            Ok(true) => {
                println!("Backend at {} is healthy", config.server.base_url);
                Ok(ExitCode::SUCCESS)
            }
            Ok(false) => {
                println!("Backend at {} is not healthy", config.server.base_url);
                Ok(ExitCode::FAILURE)
            }
            Err(e) => {
                println!("Backend at {} is unreachable: {}", config.server.base_url, e);
                Ok(ExitCode::FAILURE)
            }
        };
    }

    let Some(description) = args.description else {
        let stdin = BufReader::new(tokio::io::stdin());
        let mut stdout = tokio::io::stdout();
        autoscout::run_interactive(&mut controller, stdin, &mut stdout).await?;
        return Ok(ExitCode::SUCCESS);
    };

    controller.set_description(description);
    let submission = match controller.submit().await {
        Submission::Ignored(reason) => {
            match reason {
                IgnoreReason::Empty => eprintln!("Nothing to submit: the description is empty"),
                IgnoreReason::Pending => eprintln!("A monitor request is already in progress"),
            }
            return Ok(ExitCode::FAILURE);
        }
        started => started,
    };
    print!("{}", render::render(&RequestState::Pending, false));
    let state = submission
        .outcome()
        .await
        .unwrap_or_else(|| RequestState::Failed(FALLBACK_FAILURE_MESSAGE.to_string()));

    print!("{}", render::render(&state, controller.can_submit().await));
    Ok(match state {
        RequestState::Failed(_) => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    })
}
