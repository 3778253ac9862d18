use mission_core::{Entity, MissionError, MissionResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type BoardId = Uuid;

/// A named column grouping missions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: BoardId,
    pub name: String,
}

impl Board {
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
        }
    }

    pub fn update_name(&mut self, name: String) {
        self.name = name;
    }
}

impl Entity for Board {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Body of a board create request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBoard {
    pub name: String,
}

/// Body of a board update request.
///
/// `id` may be omitted, in which case the update targets the path id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<BoardId>,
    pub name: String,
}

impl BoardUpdate {
    pub fn check_id(&self, path_id: BoardId) -> MissionResult<()> {
        match self.id {
            Some(body_id) if body_id != path_id => Err(MissionError::IdMismatch {
                path: path_id,
                body: body_id,
            }),
            _ => Ok(()),
        }
    }
}

impl From<Board> for BoardUpdate {
    fn from(board: Board) -> Self {
        Self {
            id: Some(board.id),
            name: board.name,
        }
    }
}
