pub mod board;
pub mod dates;
pub mod filter;
pub mod mission;
pub mod service;
pub mod sort;
pub mod urgency;
pub mod views;

pub use board::{Board, BoardId, BoardUpdate, NewBoard};
pub use mission::{
    validate_time_need, Mission, MissionId, MissionPatch, MissionStatus, NewMission,
    MAX_TIME_NEED_DAYS,
};
pub use service::{KanbanService, ReorderOutcome};
pub use sort::{ListSortField, SortDirection};
pub use urgency::{UrgencyColor, UrgencyLevel};
