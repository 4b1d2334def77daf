mod console;

use anyhow::Context;
use clap::{Parser, Subcommand};
use console::{ConsoleNavigator, ConsoleSpeaker};
use gogo_engine::assistant::Assistant;
use gogo_engine::cli::{self, FileOptions, OutputHandlers, ReplOptions};
use gogo_engine::config::{AssistantConfig, ConfigLoader};
use gogo_engine::monitor::{JsonlStore, Monitor};
use gogo_engine::parser::process_text;
use gogo_engine::protocol::MetricsWindow;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gogo", version, about = "Go-Go Navigator assistant")]
struct Args {
    #[command(subcommand)]
    mode: Option<Mode>,

    /// Config file (defaults to ./gogo.yaml, then ~/.gogo/config.yaml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Interaction log file (overrides the config)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// User id attached to interaction logs
    #[arg(long, global = true)]
    user: Option<String>,

    /// Session id attached to interaction logs
    #[arg(long, global = true)]
    session: Option<String>,

    /// Speak replies (overrides the config)
    #[arg(long, global = true)]
    voice: bool,

    /// Page the simulated app starts on
    #[arg(long, global = true, default_value = "/")]
    start_page: String,
}

#[derive(Subcommand)]
enum Mode {
    /// Interactive assistant prompt (default)
    Repl,
    /// Run commands from a file, one per line
    Run {
        #[arg(long)]
        file: String,
        /// Continue after a failed command
        #[arg(long)]
        keep_going: bool,
    },
    /// Show how a command is classified without running it
    Classify {
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Aggregate metrics over the last N days
    Metrics {
        #[arg(long, default_value_t = 7, value_parser = clap::value_parser!(u32).range(1..=36_500))]
        days: u32,
    },
    /// Most recent interaction logs, newest first
    Logs {
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
}

async fn load_config(args: &Args) -> anyhow::Result<AssistantConfig> {
    let mut config = match &args.config {
        Some(path) => ConfigLoader::load_from(path)
            .await
            .with_context(|| format!("loading {}", path.display()))?,
        None => ConfigLoader::load_default().await?,
    };
    if let Some(path) = &args.log_file {
        config.log_path = path.clone();
    }
    if args.voice {
        config.features.voice_enabled = true;
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Log to stderr so stdout only carries assistant replies and reports.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = Args::parse();
    let mode = args.mode.take().unwrap_or(Mode::Repl);
    let config = load_config(&args).await?;
    let store = Arc::new(JsonlStore::new(&config.log_path));

    match mode {
        Mode::Classify { text } => {
            let classified = process_text(&text.join(" "));
            println!("{}: {}", classified.category, classified.detail);
        }
        Mode::Metrics { days } => {
            if MetricsWindow::from_days(days).is_none() {
                tracing::info!("Non-standard window of {} days", days);
            }
            let metrics = Monitor::new(store).metrics(days)?;
            println!("{}", serde_json::to_string_pretty(&metrics)?);
        }
        Mode::Logs { limit } => {
            for log in Monitor::new(store).recent(limit)? {
                println!("{}", serde_json::to_string(&log)?);
            }
        }
        Mode::Run { file, keep_going } => {
            let mut assistant = build_assistant(&config, &args, store);
            cli::run_file(
                &mut assistant,
                output(),
                &file,
                FileOptions {
                    stop_on_error: !keep_going,
                },
            )
            .await
            .with_context(|| format!("executing {}", file))?;
        }
        Mode::Repl => {
            let mut assistant = build_assistant(&config, &args, store);
            let repl_options = ReplOptions {
                banner_lines: &[
                    "Go-Go Navigator assistant. Try 'navigate to the airport', 'open the bus tab',",
                    "'go to the cargo page' or 'search the web for restaurants in Berlin'.",
                    "Type 'exit' or 'quit' to close.",
                ],
                prompt: "> ",
                exit_commands: &["exit", "quit"],
                handle_ctrl_c: true,
                ctrl_c_message: Some("Bye."),
            };
            cli::run_repl(&mut assistant, output(), repl_options).await?;
        }
    }

    Ok(())
}

fn output() -> OutputHandlers {
    OutputHandlers {
        out: |msg| println!("{}", msg),
        err: |msg| eprintln!("{}", msg),
    }
}

fn build_assistant(
    config: &AssistantConfig,
    args: &Args,
    store: Arc<JsonlStore>,
) -> Assistant<ConsoleNavigator> {
    let mut host_tabs: Vec<String> = config.tabs.values().cloned().collect();
    host_tabs.sort();
    host_tabs.dedup();

    let navigator = ConsoleNavigator::new(&args.start_page, &config.tab_host_path, host_tabs);
    Assistant::new(config, navigator, store)
        .with_speaker(Arc::new(ConsoleSpeaker))
        .with_identity(args.user.clone(), args.session.clone())
}
