//! Mission filtering.
//!
//! Provides the `MissionFilter` trait and filters by board, status and text.

use crate::{BoardId, Mission, MissionStatus};

/// Trait for filtering missions by various criteria.
pub trait MissionFilter {
    /// Returns true if the mission matches the filter criteria.
    fn matches(&self, mission: &Mission) -> bool;
}

/// Case-insensitive substring match on title or category.
pub struct TextFilter {
    query: String,
}

impl TextFilter {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into().to_lowercase(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}

impl MissionFilter for TextFilter {
    fn matches(&self, mission: &Mission) -> bool {
        if self.query.is_empty() {
            return true;
        }
        mission.title.to_lowercase().contains(&self.query)
            || mission.category.to_lowercase().contains(&self.query)
    }
}

/// Missions that sit on one board.
pub struct BoardFilter {
    board_id: BoardId,
}

impl BoardFilter {
    pub fn new(board_id: BoardId) -> Self {
        Self { board_id }
    }
}

impl MissionFilter for BoardFilter {
    fn matches(&self, mission: &Mission) -> bool {
        mission.board_id == self.board_id
    }
}

pub struct StatusFilter {
    status: MissionStatus,
}

impl StatusFilter {
    pub fn new(status: MissionStatus) -> Self {
        Self { status }
    }
}

impl MissionFilter for StatusFilter {
    fn matches(&self, mission: &Mission) -> bool {
        mission.status == self.status
    }
}

/// Combine multiple filters with AND logic.
#[derive(Default)]
pub struct CompositeFilter {
    filters: Vec<Box<dyn MissionFilter + Send + Sync>>,
}

impl CompositeFilter {
    /// Create an empty composite filter (matches all missions).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter(mut self, filter: Box<dyn MissionFilter + Send + Sync>) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn apply<'a>(&self, missions: &'a [Mission]) -> Vec<&'a Mission> {
        missions.iter().filter(|m| self.matches(m)).collect()
    }
}

impl MissionFilter for CompositeFilter {
    fn matches(&self, mission: &Mission) -> bool {
        self.filters.iter().all(|f| f.matches(mission))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NewMission;
    use chrono::Utc;
    use uuid::Uuid;

    fn mission(title: &str, category: &str, board_id: BoardId) -> Mission {
        let mut new = NewMission::new(title, board_id);
        new.category = category.to_string();
        Mission::from_new(new, Utc::now())
    }

    #[test]
    fn test_text_filter_is_case_insensitive() {
        let board = Uuid::new_v4();
        let m = mission("Deploy Backend", "Ops", board);

        assert!(TextFilter::new("backend").matches(&m));
        assert!(TextFilter::new("OPS").matches(&m));
        assert!(TextFilter::new("").matches(&m));
        assert!(!TextFilter::new("frontend").matches(&m));
    }

    #[test]
    fn test_board_filter() {
        let board = Uuid::new_v4();
        let on_board = mission("A", "x", board);
        let elsewhere = mission("B", "x", Uuid::new_v4());

        let filter = BoardFilter::new(board);
        assert!(filter.matches(&on_board));
        assert!(!filter.matches(&elsewhere));
    }

    #[test]
    fn test_composite_filter() {
        let board = Uuid::new_v4();
        let mut done = mission("Release notes", "Docs", board);
        done.status = MissionStatus::Done;
        let todo = mission("Release build", "Ops", board);
        let missions = vec![done.clone(), todo];

        assert_eq!(CompositeFilter::new().apply(&missions).len(), 2);

        let composite = CompositeFilter::new()
            .with_filter(Box::new(BoardFilter::new(board)))
            .with_filter(Box::new(StatusFilter::new(MissionStatus::Done)));
        let matched = composite.apply(&missions);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, done.id);
    }
}
