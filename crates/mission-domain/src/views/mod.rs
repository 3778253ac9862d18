//! Derived projections over a mission snapshot.
//!
//! Every projection is a pure function of the missions it is given plus an
//! explicit reference date, so callers can recompute them freely.

pub mod calendar;
pub mod dashboard;
pub mod gantt;
pub mod list;

pub use calendar::{CalendarDay, CalendarEntry, CalendarGrid, CalendarMonth};
pub use dashboard::{CompletionPolicy, DashboardSummary, HealthBand};
pub use gantt::{GanttBar, GanttChart, GanttScale, GanttWindow};
pub use list::{ListRow, ListView};
