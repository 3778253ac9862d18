use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use mission_core::{logging, AppConfig, ServerSettings};
use mission_server::{build_router, AppState};
use mission_store::JsonSnapshotFile;

#[derive(Parser, Debug)]
#[command(name = "mission-server")]
#[command(about = "Serve the mission board API", long_about = None)]
#[command(version)]
struct Args {
    /// Address to bind
    #[arg(long, env = "MISSION_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "MISSION_PORT")]
    port: Option<u16>,

    /// JSON snapshot file; omit to keep data in memory only
    #[arg(long, env = "MISSION_DATA_FILE")]
    data_file: Option<PathBuf>,
}

impl Args {
    fn resolve(self, config: ServerSettings) -> ServerSettings {
        ServerSettings {
            host: self.host.unwrap_or(config.host),
            port: self.port.unwrap_or(config.port),
            data_file: self.data_file.or(config.data_file),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init("info").context("Failed to open debug log file")?;

    let settings = Args::parse().resolve(AppConfig::load().server);

    let state = match &settings.data_file {
        Some(path) => AppState::with_snapshot(JsonSnapshotFile::new(path))
            .await
            .with_context(|| format!("Failed to load snapshot {}", path.display()))?,
        None => AppState::in_memory(),
    };
    let app = build_router(Arc::new(state));

    let addr = format!("{}:{}", settings.host, settings.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    let local_addr = listener.local_addr()?;
    tracing::info!("Mission board API listening on http://{}", local_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down...");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let args = Args {
            host: None,
            port: Some(9000),
            data_file: None,
        };
        let config = ServerSettings {
            host: "0.0.0.0".to_string(),
            port: 7118,
            data_file: Some(PathBuf::from("/tmp/missions.json")),
        };
        let settings = args.resolve(config);
        assert_eq!(settings.host, "0.0.0.0");
        assert_eq!(settings.port, 9000);
        assert_eq!(settings.data_file, Some(PathBuf::from("/tmp/missions.json")));
    }
}
