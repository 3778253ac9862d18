mod cli;
mod handlers;
mod output;

use clap::Parser;
use cli::{Cli, Commands};
use mission_client::KanbanClient;
use mission_core::{logging, AppConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init("warn")?;

    let cli = Cli::parse();
    let api_url = cli
        .api_url
        .unwrap_or_else(|| AppConfig::load().effective_api_url());
    tracing::debug!("Using API at {}", api_url);

    let client = KanbanClient::new(&api_url);
    let result = match cli.command {
        Commands::Board(board_cmd) => handlers::board::handle(&client, board_cmd.action).await,
        Commands::Mission(mission_cmd) => {
            handlers::mission::handle(&client, mission_cmd.action).await
        }
        Commands::View(view_cmd) => handlers::view::handle(&client, view_cmd.action).await,
    };

    if let Err(e) = result {
        output::output_error(&e.to_string());
    }
    Ok(())
}
