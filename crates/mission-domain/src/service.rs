//! Board and mission orchestration over two entity stores.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use mission_core::{MissionError, MissionResult, Repository};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::filter::{BoardFilter, MissionFilter};
use crate::mission::validate_time_need;
use crate::{Board, BoardId, BoardUpdate, Mission, MissionId, MissionPatch, NewBoard, NewMission};

/// What a reorder did with the ids it was given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderOutcome {
    /// Resulting board order.
    pub order: Vec<BoardId>,
    /// Requested ids that matched no board.
    pub unknown_ids: Vec<Uuid>,
    /// Ids repeated in the request; only the first occurrence counts.
    pub duplicate_ids: Vec<Uuid>,
    /// Existing boards left out of the request, now deleted.
    pub removed_board_ids: Vec<BoardId>,
    /// Missions deleted along with `removed_board_ids`.
    pub removed_mission_count: usize,
}

impl ReorderOutcome {
    pub fn is_lossless(&self) -> bool {
        self.unknown_ids.is_empty() && self.removed_board_ids.is_empty()
    }
}

pub struct KanbanService {
    boards: Arc<dyn Repository<Board>>,
    missions: Arc<dyn Repository<Mission>>,
}

impl KanbanService {
    pub fn new(boards: Arc<dyn Repository<Board>>, missions: Arc<dyn Repository<Mission>>) -> Self {
        Self { boards, missions }
    }

    pub fn list_boards(&self) -> MissionResult<Vec<Board>> {
        self.boards.get_all()
    }

    pub fn get_board(&self, id: BoardId) -> MissionResult<Board> {
        self.boards.get_by_id(id)
    }

    pub fn create_board(&self, new: NewBoard) -> MissionResult<Board> {
        let board = Board::new(new.name);
        self.boards.add(board.clone())?;
        tracing::info!("Created board: {} (id: {})", board.name, board.id);
        Ok(board)
    }

    pub fn update_board(&self, id: BoardId, update: BoardUpdate) -> MissionResult<Board> {
        update.check_id(id)?;
        let mut board = self.boards.get_by_id(id)?;
        board.update_name(update.name);
        self.boards.update(board.clone())?;
        tracing::info!("Renamed board {} to: {}", board.id, board.name);
        Ok(board)
    }

    /// Delete a board and every mission on it. Returns the number of
    /// missions removed with it.
    pub fn delete_board(&self, id: BoardId) -> MissionResult<usize> {
        self.boards.get_by_id(id)?;
        self.boards.delete(id)?;
        let removed = self.delete_missions_on(id)?;
        tracing::info!("Deleted board {} and {} mission(s)", id, removed);
        Ok(removed)
    }

    /// Rewrite the board sequence in the order of `ids`.
    ///
    /// Unknown and repeated ids are skipped. Boards missing from `ids` are
    /// dropped together with their missions. Everything skipped or dropped
    /// is reported in the outcome.
    pub fn reorder_boards(&self, ids: &[BoardId]) -> MissionResult<ReorderOutcome> {
        let current = self.boards.get_all()?;
        let mut lookup: HashMap<BoardId, Board> =
            current.iter().map(|b| (b.id, b.clone())).collect();

        self.boards.clear()?;

        let mut outcome = ReorderOutcome::default();
        let mut seen = HashSet::new();
        for id in ids {
            if !seen.insert(*id) {
                outcome.duplicate_ids.push(*id);
                continue;
            }
            match lookup.remove(id) {
                Some(board) => {
                    self.boards.add(board)?;
                    outcome.order.push(*id);
                }
                None => outcome.unknown_ids.push(*id),
            }
        }

        for board in current.iter().filter(|b| lookup.contains_key(&b.id)) {
            outcome.removed_board_ids.push(board.id);
            outcome.removed_mission_count += self.delete_missions_on(board.id)?;
        }

        if !outcome.unknown_ids.is_empty() {
            tracing::warn!("Reorder skipped unknown board ids: {:?}", outcome.unknown_ids);
        }
        if !outcome.removed_board_ids.is_empty() {
            tracing::warn!(
                "Reorder dropped boards missing from the request: {:?}",
                outcome.removed_board_ids
            );
        }
        tracing::info!("Reordered {} board(s)", outcome.order.len());
        Ok(outcome)
    }

    pub fn list_missions(&self) -> MissionResult<Vec<Mission>> {
        self.missions.get_all()
    }

    pub fn get_mission(&self, id: MissionId) -> MissionResult<Mission> {
        self.missions.get_by_id(id)
    }

    pub fn missions_on_board(&self, board_id: BoardId) -> MissionResult<Vec<Mission>> {
        let filter = BoardFilter::new(board_id);
        Ok(self
            .missions
            .get_all()?
            .into_iter()
            .filter(|m| filter.matches(m))
            .collect())
    }

    pub fn create_mission(&self, new: NewMission, now: DateTime<Utc>) -> MissionResult<Mission> {
        validate_time_need(new.time_need)?;
        self.ensure_board_exists(new.board_id)?;
        let mission = Mission::from_new(new, now);
        self.missions.add(mission.clone())?;
        tracing::info!("Created mission: {} (id: {})", mission.title, mission.id);
        Ok(mission)
    }

    pub fn update_mission(&self, id: MissionId, patch: MissionPatch) -> MissionResult<Mission> {
        patch.check_id(id)?;
        if let Some(time_need) = patch.time_need {
            validate_time_need(time_need)?;
        }
        let mut mission = self.missions.get_by_id(id)?;
        if let Some(board_id) = patch.board_id {
            if board_id != mission.board_id {
                self.ensure_board_exists(board_id)?;
            }
        }
        patch.apply_to(&mut mission);
        self.missions.update(mission.clone())?;
        tracing::info!("Updated mission {}", mission.id);
        Ok(mission)
    }

    pub fn delete_mission(&self, id: MissionId) -> MissionResult<()> {
        self.missions.delete(id)?;
        tracing::info!("Deleted mission {}", id);
        Ok(())
    }

    /// Replace the contents of both stores, e.g. from a saved snapshot.
    pub fn restore(&self, boards: Vec<Board>, missions: Vec<Mission>) -> MissionResult<()> {
        self.boards.clear()?;
        self.missions.clear()?;
        for board in boards {
            self.boards.add(board)?;
        }
        for mission in missions {
            self.missions.add(mission)?;
        }
        tracing::info!(
            "Restored {} board(s) and {} mission(s)",
            self.boards.len(),
            self.missions.len()
        );
        Ok(())
    }

    fn ensure_board_exists(&self, board_id: BoardId) -> MissionResult<()> {
        match self.boards.get_by_id(board_id) {
            Ok(_) => Ok(()),
            Err(e) if e.is_not_found() => Err(MissionError::Validation(format!(
                "board {} does not exist",
                board_id
            ))),
            Err(e) => Err(e),
        }
    }

    fn delete_missions_on(&self, board_id: BoardId) -> MissionResult<usize> {
        let doomed = self.missions_on_board(board_id)?;
        for mission in &doomed {
            self.missions.delete(mission.id)?;
        }
        Ok(doomed.len())
    }
}
