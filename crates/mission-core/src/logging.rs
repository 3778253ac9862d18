use std::fs::OpenOptions;
use tracing_subscriber::EnvFilter;

/// Environment variable naming a file that receives DEBUG-level logs.
pub const DEBUG_LOG_ENV: &str = "MISSION_DEBUG_LOG";

/// Install the global tracing subscriber.
///
/// With `MISSION_DEBUG_LOG` set, everything at DEBUG and above is appended to
/// that file. Otherwise logs go to stderr, filtered by `RUST_LOG` or
/// `default_level`.
pub fn init(default_level: &str) -> std::io::Result<()> {
    if let Ok(log_path) = std::env::var(DEBUG_LOG_ENV) {
        let log_file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let _ = tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .try_init();
    } else {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
            )
            .with_writer(std::io::stderr)
            .try_init();
    }
    Ok(())
}
