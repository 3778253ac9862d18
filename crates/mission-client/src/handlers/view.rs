use chrono::Utc;
use mission_client::{KanbanClient, ListParams};
use mission_domain::views::gantt::step_anchor;

use super::parse_choice;
use crate::cli::ViewAction;
use crate::output;

pub async fn handle(client: &KanbanClient, action: ViewAction) -> anyhow::Result<()> {
    match action {
        ViewAction::List {
            filter,
            sort,
            direction,
        } => {
            let params = ListParams {
                q: filter,
                sort: sort
                    .map(|s| parse_choice("sort field", &s, "title, category, urgency, dueDate"))
                    .transpose()?,
                direction: direction
                    .map(|d| parse_choice("direction", &d, "asc, desc"))
                    .transpose()?,
            };
            let rows = client.list_view(&params).await?;
            output::output_list(rows);
        }
        ViewAction::Calendar { year, month } => {
            let grid = client.calendar_view(year, month).await?;
            output::output_success(&grid);
        }
        ViewAction::Gantt {
            scale,
            anchor,
            step,
        } => {
            let scale = scale
                .map(|s| parse_choice("scale", &s, "day, week, month, quarter, year"))
                .transpose()?;
            let anchor = match step {
                Some(steps) => {
                    let from = anchor.unwrap_or_else(|| Utc::now().date_naive());
                    let moved = step_anchor(from, steps).ok_or_else(|| {
                        anyhow::anyhow!("Stepping {} weeks from {} leaves the calendar range", steps, from)
                    })?;
                    Some(moved)
                }
                None => anchor,
            };
            let chart = client.gantt_view(scale, anchor).await?;
            output::output_success(&chart);
        }
        ViewAction::Dashboard { policy } => {
            let policy = policy
                .map(|p| parse_choice("policy", &p, "explicit, inferred"))
                .transpose()?;
            let summary = client.dashboard_view(policy).await?;
            output::output_success(&summary);
        }
    }
    Ok(())
}
