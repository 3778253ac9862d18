use chrono::{DateTime, Utc};
use mission_core::{Entity, MissionError, MissionResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::board::BoardId;
use crate::dates::add_days_utc;

pub type MissionId = Uuid;

/// Longest accepted `time_need`, roughly a century.
pub const MAX_TIME_NEED_DAYS: i64 = 36_500;

pub fn validate_time_need(time_need: i64) -> MissionResult<()> {
    if (1..=MAX_TIME_NEED_DAYS).contains(&time_need) {
        return Ok(());
    }
    Err(MissionError::Validation(format!(
        "timeNeed must be between 1 and {} days, got {}",
        MAX_TIME_NEED_DAYS, time_need
    )))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MissionStatus {
    #[default]
    Todo,
    InProgress,
    Done,
}

/// A task card belonging to exactly one board.
///
/// `urgency` is stored as given; values outside 1..=4 are kept and rendered
/// with the fallback color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mission {
    pub id: MissionId,
    pub title: String,
    #[serde(default)]
    pub category: String,
    pub board_id: BoardId,
    pub urgency: i32,
    #[serde(default)]
    pub content: String,
    pub created_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    /// Estimated duration in days.
    pub time_need: i64,
    #[serde(default)]
    pub status: MissionStatus,
}

impl Mission {
    pub fn from_new(new: NewMission, now: DateTime<Utc>) -> Self {
        let due_date = new
            .due_date
            .unwrap_or_else(|| saturating_add_days(now, new.time_need));
        Self {
            id: Uuid::new_v4(),
            title: new.title,
            category: new.category,
            board_id: new.board_id,
            urgency: new.urgency,
            content: new.content,
            created_date: now,
            due_date,
            time_need: new.time_need,
            status: new.status,
        }
    }

    /// `created_date + time_need` days, clamped to the representable range.
    pub fn planned_end(&self) -> DateTime<Utc> {
        saturating_add_days(self.created_date, self.time_need)
    }

    pub fn move_to_board(&mut self, board_id: BoardId) {
        self.board_id = board_id;
    }

    pub fn is_done(&self) -> bool {
        self.status == MissionStatus::Done
    }
}

fn saturating_add_days(start: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    match add_days_utc(start, days) {
        Some(end) => end,
        None if days < 0 => DateTime::<Utc>::MIN_UTC,
        None => DateTime::<Utc>::MAX_UTC,
    }
}

impl Entity for Mission {
    fn id(&self) -> Uuid {
        self.id
    }
}

fn default_urgency() -> i32 {
    3
}

fn default_time_need() -> i64 {
    1
}

/// Body of a mission create request: every field but the id and creation date.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMission {
    pub title: String,
    #[serde(default)]
    pub category: String,
    pub board_id: BoardId,
    #[serde(default = "default_urgency")]
    pub urgency: i32,
    #[serde(default)]
    pub content: String,
    /// Defaults to creation time plus `time_need` days.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default = "default_time_need")]
    pub time_need: i64,
    #[serde(default)]
    pub status: MissionStatus,
}

impl NewMission {
    pub fn new(title: impl Into<String>, board_id: BoardId) -> Self {
        Self {
            title: title.into(),
            category: String::new(),
            board_id,
            urgency: default_urgency(),
            content: String::new(),
            due_date: None,
            time_need: default_time_need(),
            status: MissionStatus::default(),
        }
    }
}

/// Partial mission update. Absent fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<MissionId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board_id: Option<BoardId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgency: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_need: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<MissionStatus>,
}

impl MissionPatch {
    pub fn check_id(&self, path_id: MissionId) -> MissionResult<()> {
        match self.id {
            Some(body_id) if body_id != path_id => Err(MissionError::IdMismatch {
                path: path_id,
                body: body_id,
            }),
            _ => Ok(()),
        }
    }

    pub fn move_to(board_id: BoardId) -> Self {
        Self {
            board_id: Some(board_id),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.category.is_none()
            && self.board_id.is_none()
            && self.urgency.is_none()
            && self.content.is_none()
            && self.created_date.is_none()
            && self.due_date.is_none()
            && self.time_need.is_none()
            && self.status.is_none()
    }

    pub fn apply_to(self, mission: &mut Mission) {
        if let Some(title) = self.title {
            mission.title = title;
        }
        if let Some(category) = self.category {
            mission.category = category;
        }
        if let Some(board_id) = self.board_id {
            mission.move_to_board(board_id);
        }
        if let Some(urgency) = self.urgency {
            mission.urgency = urgency;
        }
        if let Some(content) = self.content {
            mission.content = content;
        }
        if let Some(created_date) = self.created_date {
            mission.created_date = created_date;
        }
        if let Some(due_date) = self.due_date {
            mission.due_date = due_date;
        }
        if let Some(time_need) = self.time_need {
            mission.time_need = time_need;
        }
        if let Some(status) = self.status {
            mission.status = status;
        }
    }
}

impl From<Mission> for MissionPatch {
    fn from(mission: Mission) -> Self {
        Self {
            id: Some(mission.id),
            title: Some(mission.title),
            category: Some(mission.category),
            board_id: Some(mission.board_id),
            urgency: Some(mission.urgency),
            content: Some(mission.content),
            created_date: Some(mission.created_date),
            due_date: Some(mission.due_date),
            time_need: Some(mission.time_need),
            status: Some(mission.status),
        }
    }
}
