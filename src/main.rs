//! LiteChat - terminal chat with a local keyword knowledge base and an
//! optional DeepSeek backend.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use litechat::chat::{ChatMode, ChatSession, Role};
use litechat::config::{ChatConfig, ConfigLoader};
use litechat::display;
use litechat::knowledge::KnowledgeBase;
use litechat::resolver::{is_exit_word, trim_input};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Local,
    Deepseek,
}

impl From<ModeArg> for ChatMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Local => ChatMode::Local,
            ModeArg::Deepseek => ChatMode::DeepSeek,
        }
    }
}

#[derive(Parser)]
#[command(
    name = "litechat",
    about = "Terminal chat with a local knowledge base and an optional DeepSeek backend",
    version
)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a config file (defaults to $LITECHAT_CONFIG, .litechat.toml, then the user config dir).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive chat.
    Chat {
        /// Response source (local, deepseek). Overrides the config file.
        #[arg(short, long, value_enum)]
        mode: Option<ModeArg>,
    },
    /// Answer a single message and exit.
    Ask {
        /// The message to answer.
        message: String,
        /// Response source (local, deepseek). Overrides the config file.
        #[arg(short, long, value_enum)]
        mode: Option<ModeArg>,
    },
    /// Show knowledge base statistics.
    Stats,
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn load_config(path: Option<PathBuf>) -> Option<ChatConfig> {
    let loader = path.map_or_else(ConfigLoader::new, ConfigLoader::with_path);
    match loader.load_with_origin() {
        Ok((config, origin)) => {
            tracing::info!(?origin, "Configuration ready");
            Some(config)
        }
        Err(e) => {
            display::print_error(&e.to_string());
            None
        }
    }
}

/// Parse a mode switch command typed at the prompt.
fn parse_mode_command(line: &str) -> Option<ChatMode> {
    match line.trim() {
        "/local" => Some(ChatMode::Local),
        "/deepseek" => Some(ChatMode::DeepSeek),
        _ => None,
    }
}

/// Blank lines are not sent to either response source.
fn is_blank_line(line: &str) -> bool {
    trim_input(line).is_empty()
}

async fn run_chat(mut session: ChatSession) -> std::io::Result<()> {
    display::print_banner(session.mode(), session.resolver().knowledge().len());
    for message in session.transcript() {
        display::print_message(message);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        display::print_prompt(session.mode());
        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };

        if let Some(mode) = parse_mode_command(&line) {
            session.set_mode(mode);
            display::print_mode_switch(mode);
            continue;
        }
        if is_blank_line(&line) {
            continue;
        }

        let reply = session.send(&line).await;
        display::print_message(reply);

        if is_exit_word(&line) {
            break;
        }
    }

    tracing::info!(messages = session.transcript().len(), "Chat ended");
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(mut config) = load_config(cli.config) else {
        return ExitCode::FAILURE;
    };

    match cli.command {
        Commands::Chat { mode } => {
            if let Some(mode) = mode {
                config.mode = mode.into();
            }
            tracing::info!(mode = ?config.mode, "Starting chat");
            if let Err(e) = run_chat(ChatSession::from_config(&config)).await {
                display::print_error(&format!("Failed to read input: {e}"));
                return ExitCode::FAILURE;
            }
        }
        Commands::Ask { message, mode } => {
            if let Some(mode) = mode {
                config.mode = mode.into();
            }
            if is_blank_line(&message) {
                display::print_error("Message is empty");
                return ExitCode::FAILURE;
            }
            let mut session =
                ChatSession::from_config(&config).with_local_delay(Duration::ZERO);
            let reply = session.send(&message).await;
            if reply.role == Role::System {
                display::print_error(&reply.content);
                return ExitCode::FAILURE;
            }
            println!("{}", reply.content);
        }
        Commands::Stats => {
            display::print_stats(&KnowledgeBase::build(&config.knowledge));
        }
    }

    ExitCode::SUCCESS
}
