use mission_client::KanbanClient;
use mission_domain::filter::{BoardFilter, CompositeFilter, StatusFilter};
use mission_domain::views::gantt::{drag_days, resize_mission, shift_mission};
use mission_domain::{MissionPatch, MissionStatus, NewMission};

use super::parse_choice;
use crate::cli::{MissionAction, MissionCreateArgs, MissionDragArgs, MissionUpdateArgs};
use crate::output;

const STATUS_VALUES: &str = "todo, inProgress, done";

pub async fn handle(client: &KanbanClient, action: MissionAction) -> anyhow::Result<()> {
    match action {
        MissionAction::List { board_id, status } => {
            let mut filter = CompositeFilter::new();
            if let Some(board_id) = board_id {
                filter = filter.with_filter(Box::new(BoardFilter::new(board_id)));
            }
            if let Some(status) = &status {
                filter = filter.with_filter(Box::new(StatusFilter::new(parse_status(status)?)));
            }
            let missions = client.get_missions().await?;
            output::output_list(filter.apply(&missions));
        }
        MissionAction::Get { id } => {
            let mission = client.get_mission(id).await?;
            output::output_success(&mission);
        }
        MissionAction::Create(args) => {
            let board_id = args.board_id;
            let new = build_new_mission(args)?;
            let mission = client.add_mission(board_id, new).await?;
            output::output_success(&mission);
        }
        MissionAction::Move { id, board_id } => {
            client.move_mission(id, board_id).await?;
            let mission = client.get_mission(id).await?;
            output::output_success(&mission);
        }
        MissionAction::Update(args) => {
            let id = args.id;
            let patch = build_patch(args)?;
            if patch.is_empty() {
                return Err(anyhow::anyhow!("Nothing to update: pass at least one field"));
            }
            client.update_mission(id, patch).await?;
            let mission = client.get_mission(id).await?;
            output::output_success(&mission);
        }
        MissionAction::Shift(args) => {
            let days = drag_offset(&args)?;
            let mission = client.get_mission(args.id).await?;
            client.update_mission(args.id, shift_mission(&mission, days)?).await?;
            let mission = client.get_mission(args.id).await?;
            output::output_success(&mission);
        }
        MissionAction::Resize(args) => {
            let days = drag_offset(&args)?;
            let mission = client.get_mission(args.id).await?;
            client.update_mission(args.id, resize_mission(&mission, days)?).await?;
            let mission = client.get_mission(args.id).await?;
            output::output_success(&mission);
        }
        MissionAction::Delete { id } => {
            client.delete_mission(id).await?;
            output::output_success(serde_json::json!({"deleted": id.to_string()}));
        }
    }
    Ok(())
}

fn build_new_mission(args: MissionCreateArgs) -> anyhow::Result<NewMission> {
    let mut new = NewMission::new(args.title, args.board_id);
    if let Some(category) = args.category {
        new.category = category;
    }
    if let Some(urgency) = args.urgency {
        new.urgency = urgency;
    }
    if let Some(content) = args.content {
        new.content = content;
    }
    if let Some(time_need) = args.time_need {
        new.time_need = time_need;
    }
    new.due_date = args.due_date;
    if let Some(status) = &args.status {
        new.status = parse_status(status)?;
    }
    Ok(new)
}

fn build_patch(args: MissionUpdateArgs) -> anyhow::Result<MissionPatch> {
    let status = match &args.status {
        Some(s) => Some(parse_status(s)?),
        None => None,
    };
    Ok(MissionPatch {
        id: None,
        title: args.title,
        category: args.category,
        board_id: args.board_id,
        urgency: args.urgency,
        content: args.content,
        created_date: args.created_date,
        due_date: args.due_date,
        time_need: args.time_need,
        status,
    })
}

fn drag_offset(args: &MissionDragArgs) -> anyhow::Result<i64> {
    match (args.days, args.pixels, args.track_width, args.window_days) {
        (Some(days), _, _, _) => Ok(days),
        (None, Some(pixels), Some(track_width), Some(window_days)) => {
            Ok(drag_days(pixels, track_width, window_days))
        }
        _ => Err(anyhow::anyhow!(
            "Pass --days, or --pixels with --track-width and --window-days"
        )),
    }
}

fn parse_status(raw: &str) -> anyhow::Result<MissionStatus> {
    parse_choice("status", raw, STATUS_VALUES)
}
