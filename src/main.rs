//! crt-input-replay
//!
//! Plays a recorded input script through the input bridge and prints every
//! UI message it produces.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crt_input_bridge::config::{Config, LoggingConfig};
use crt_input_bridge::input::{InputTranslator, UiMessage};
use crt_input_bridge::replay::{ReplayScript, Replayer};
use crt_input_bridge::utils::format_user_error;

/// Command-line arguments for crt-input-replay
#[derive(Parser, Debug)]
#[command(name = "crt-input-replay")]
#[command(version, about = "Replay recorded host input through the input bridge", long_about = None)]
pub struct Args {
    /// Replay script (.toml or .json)
    #[arg(required_unless_present = "print_default_config")]
    pub script: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, env = "CRT_INPUT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Forward mouse button presses as well as releases
    #[arg(long)]
    pub no_filter_mouse_pressed: bool,

    /// Output format for messages (json|text)
    #[arg(short, long, default_value = "json")]
    pub output: String,

    /// Verbose logging (can be specified multiple times)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Log format (json|pretty|compact)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Write logs to file (in addition to stderr)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Print the default configuration and exit
    #[arg(long)]
    pub print_default_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.print_default_config {
        print!("{}", Config::default_config().to_toml()?);
        return Ok(());
    }

    if let Err(e) = run(args).await {
        eprintln!("{}", format_user_error(&e));
        return Err(e);
    }

    Ok(())
}

async fn run(args: Args) -> Result<()> {
    // Load configuration
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default_config(),
    };

    // Override config with CLI args
    let config = config.with_overrides(args.no_filter_mouse_pressed.then_some(false));

    let _log_guard = init_logging(&args, &config.logging)?;

    info!("crt-input-replay v{}", env!("CARGO_PKG_VERSION"));
    tracing::debug!("Config: {:?}", config);

    let script_path = args
        .script
        .as_ref()
        .context("No replay script given")?;
    let script = ReplayScript::load(script_path)?;
    info!(
        "Loaded replay script {} ({} frame(s))",
        script_path.display(),
        script.len()
    );

    let text_output = match args.output.as_str() {
        "json" => false,
        "text" => true,
        other => anyhow::bail!("Invalid output format: {} (expected json or text)", other),
    };

    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<UiMessage>();

    // UI side: drain messages until the translator is dropped
    let printer = tokio::spawn(async move {
        let mut printed = 0u64;

        while let Some(msg) = rx.recv().await {
            let line = if text_output {
                msg.to_string()
            } else {
                serde_json::to_string(&msg)?
            };
            writeln!(std::io::stdout().lock(), "{}", line)?;
            printed += 1;
        }

        std::io::stdout().flush()?;
        Ok::<u64, anyhow::Error>(printed)
    });

    let translator = InputTranslator::new(tx, config.translator_options());
    let mut replayer = Replayer::new(translator);
    let summary = replayer.play(&script);

    // Closes the channel
    drop(replayer);

    let printed = printer.await.context("Message printer task failed")??;
    info!(
        "Replayed {} frame(s): {} message(s) emitted, {} printed",
        summary.frames, summary.messages, printed
    );

    Ok(())
}

fn init_logging(
    args: &Args,
    logging: &LoggingConfig,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    use std::fs::File;

    let log_level = match args.verbose {
        0 => logging.level.as_str(),
        1 => "debug",
        _ => "trace",
    };

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "crt_input_bridge={level},crt_input_replay={level},warn",
            level = log_level
        ))
    });

    let log_format = args.log_format.as_deref().unwrap_or(logging.format.as_str());
    let log_file = args.log_file.as_ref().or(logging.log_file.as_ref());

    // stdout carries the replayed messages, so logs go to stderr
    if let Some(log_file_path) = log_file {
        let file = File::create(log_file_path)
            .context(format!("Failed to create log file: {}", log_file_path.display()))?;
        let (file_writer, guard) = tracing_appender::non_blocking(file);

        match log_format {
            "json" => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(
                        tracing_subscriber::fmt::layer()
                            .json()
                            .with_writer(std::io::stderr),
                    )
                    .with(
                        tracing_subscriber::fmt::layer()
                            .json()
                            .with_writer(file_writer)
                            .with_ansi(false),
                    )
                    .init();
            }
            "compact" => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(
                        tracing_subscriber::fmt::layer()
                            .compact()
                            .with_writer(std::io::stderr),
                    )
                    .with(
                        tracing_subscriber::fmt::layer()
                            .compact()
                            .with_writer(file_writer)
                            .with_ansi(false),
                    )
                    .init();
            }
            _ => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(
                        tracing_subscriber::fmt::layer()
                            .pretty()
                            .with_writer(std::io::stderr),
                    )
                    .with(
                        tracing_subscriber::fmt::layer()
                            .with_writer(file_writer)
                            .with_ansi(false),
                    )
                    .init();
            }
        }
        info!("Logging to file: {}", log_file_path.display());
        Ok(Some(guard))
    } else {
        match log_format {
            "json" => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                    .init();
            }
            "compact" => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(
                        tracing_subscriber::fmt::layer()
                            .compact()
                            .with_writer(std::io::stderr),
                    )
                    .init();
            }
            _ => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(
                        tracing_subscriber::fmt::layer()
                            .pretty()
                            .with_writer(std::io::stderr),
                    )
                    .init();
            }
        }
        Ok(None)
    }
}
