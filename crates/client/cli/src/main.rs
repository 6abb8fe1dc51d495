//! Terminal driver for the usable-item engine.
mod config;
mod session;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use config::CliConfig;
use session::Session;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use usable_content::{Content, ContentFactory};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();

    setup_logging(config.session_id.as_deref())?;

    let content = load_content(&config)?;
    let mut session = Session::new(&content, config.player_name.as_deref())?;

    run(&mut session)
}

fn load_content(config: &CliConfig) -> Result<Content> {
    match &config.data_dir {
        Some(dir) => ContentFactory::new(dir.clone()).load_all(),
        None => ContentFactory::embedded(),
    }
}

fn run(session: &mut Session<'_>) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "Welcome, {}. Type 'help' for commands.", session.player())?;

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let reply = session.handle_line(&line);
        for text in &reply.lines {
            writeln!(stdout, "{}", text)?;
        }
        if reply.quit {
            break;
        }
    }

    tracing::info!("Session ended");
    Ok(())
}

/// Setup logging to a per-session file
fn setup_logging(session_id: Option<&str>) -> Result<()> {
    use std::time::{SystemTime, UNIX_EPOCH};

    let session_id = match session_id {
        Some(id) => id.to_string(),
        None => {
            let timestamp = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_secs())
                .unwrap_or_default();
            format!("session_{}", timestamp)
        }
    };

    // Create session-specific log directory
    let session_log_dir = log_dir().join(&session_id);
    std::fs::create_dir_all(&session_log_dir)?;

    // Setup file appender
    let file_appender = tracing_appender::rolling::never(&session_log_dir, "usable.log");
    let (non_blocking_file, _guard) = tracing_appender::non_blocking(file_appender);

    // Create env filter
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    // File only; stdout belongs to the game
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    // Leak the guard to keep file writer alive
    std::mem::forget(_guard);

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}/usable.log", session_log_dir.display());

    Ok(())
}

/// Platform cache directory for logs, e.g. `~/.cache/usable/logs` on Linux.
fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "usable")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/usable"))
        .join("logs")
}
