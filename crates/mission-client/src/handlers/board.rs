use mission_client::KanbanClient;

use crate::cli::BoardAction;
use crate::output;

pub async fn handle(client: &KanbanClient, action: BoardAction) -> anyhow::Result<()> {
    match action {
        BoardAction::List => {
            let boards = client.get_boards().await?;
            output::output_list(boards);
        }
        BoardAction::Get { id } => {
            let board = client.get_board(id).await?;
            output::output_success(&board);
        }
        BoardAction::Create { name } => {
            let board = client.add_board(&name).await?;
            output::output_success(&board);
        }
        BoardAction::Rename { id, name } => {
            client.update_board(id, &name).await?;
            let board = client.get_board(id).await?;
            output::output_success(&board);
        }
        BoardAction::Delete { id } => {
            client.delete_board(id).await?;
            output::output_success(serde_json::json!({"deleted": id.to_string()}));
        }
        BoardAction::Reorder { ids } => {
            let outcome = client.reorder_boards(&ids).await?;
            output::output_success(&outcome);
        }
    }
    Ok(())
}
