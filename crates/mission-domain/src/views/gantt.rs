//! Gantt layout math.
//!
//! Bars are positioned as percentages of the visible window so the caller
//! can render them at any pixel width.

use chrono::NaiveDate;
use mission_core::{MissionError, MissionResult};
use serde::{Deserialize, Serialize};

use crate::dates::{
    add_days, add_days_utc, days_between, each_day, end_of_month, end_of_quarter, end_of_week,
    end_of_year, start_of_month, start_of_quarter, start_of_week, start_of_year,
};
use crate::mission::MAX_TIME_NEED_DAYS;
use crate::sort::{OrderedSorter, SortBy};
use crate::urgency::urgency_color;
use crate::{Mission, MissionId, MissionPatch, SortDirection, UrgencyColor};

/// Days the window moves per navigation step.
pub const NAVIGATION_STEP_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GanttScale {
    Day,
    #[default]
    Week,
    Month,
    Quarter,
    Year,
}

/// Inclusive date range shown on the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl GanttWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// Window for `scale` around `anchor`, `None` when it would leave the
    /// calendar range.
    pub fn for_scale(scale: GanttScale, anchor: NaiveDate) -> Option<Self> {
        let (start, end) = match scale {
            GanttScale::Day => (start_of_week(anchor)?, end_of_week(anchor)?),
            GanttScale::Week => (start_of_week(anchor)?, add_days(end_of_week(anchor)?, 21)?),
            GanttScale::Month => (start_of_month(anchor), add_days(end_of_month(anchor)?, 60)?),
            GanttScale::Quarter => (
                start_of_quarter(anchor)?,
                add_days(end_of_quarter(anchor)?, 90)?,
            ),
            GanttScale::Year => (start_of_year(anchor)?, end_of_year(anchor)?),
        };
        Self::new(start, end)
    }

    /// Number of day columns, both ends included.
    pub fn len_days(&self) -> i64 {
        days_between(self.start, self.end) + 1
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        each_day(self.start, self.end)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GanttBar {
    pub mission_id: MissionId,
    pub title: String,
    pub urgency: i32,
    pub color: UrgencyColor,
    /// Offset from the window start, percent of the window.
    pub left_pct: f64,
    /// Bar length, percent of the window.
    pub width_pct: f64,
    pub visible: bool,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GanttChart {
    pub scale: GanttScale,
    pub window: GanttWindow,
    pub days: i64,
    pub bars: Vec<GanttBar>,
}

/// Place one mission in `window`.
///
/// A mission starting before the window is pinned to its left edge; the bar
/// is cut at the right edge.
pub fn bar_for(window: &GanttWindow, mission: &Mission) -> GanttBar {
    let len = window.len_days();
    let created = mission.created_date.date_naive();
    let offset = days_between(window.start, created).max(0);
    let width = (len - offset).min(mission.time_need).max(0);

    GanttBar {
        mission_id: mission.id,
        title: mission.title.clone(),
        urgency: mission.urgency,
        color: urgency_color(mission.urgency),
        left_pct: percent(offset, len),
        width_pct: percent(width, len),
        visible: width > 0,
        start: created,
        end: mission.planned_end().date_naive(),
    }
}

/// Bars for every mission, ordered by creation date.
pub fn layout(scale: GanttScale, window: GanttWindow, missions: &[Mission]) -> GanttChart {
    let mut ordered: Vec<&Mission> = missions.iter().collect();
    OrderedSorter::new(SortBy::CreatedDate, SortDirection::Ascending).sort(&mut ordered);

    GanttChart {
        scale,
        window,
        days: window.len_days(),
        bars: ordered.into_iter().map(|m| bar_for(&window, m)).collect(),
    }
}

/// Convert a horizontal pointer movement into whole days.
pub fn drag_days(pixel_delta: f64, track_width: f64, window_days: i64) -> i64 {
    if track_width <= 0.0 || window_days <= 0 {
        return 0;
    }
    let day_width = track_width / window_days as f64;
    (pixel_delta / day_width).round() as i64
}

/// Move a mission by `days`, keeping its duration.
pub fn shift_mission(mission: &Mission, days: i64) -> MissionResult<MissionPatch> {
    let created_date = add_days_utc(mission.created_date, days).ok_or_else(|| out_of_range(days))?;
    let due_date =
        add_days_utc(created_date, mission.time_need).ok_or_else(|| out_of_range(days))?;
    Ok(MissionPatch {
        created_date: Some(created_date),
        due_date: Some(due_date),
        ..Default::default()
    })
}

/// Stretch or shrink a mission by `days`. Duration stays within one day and
/// [`MAX_TIME_NEED_DAYS`].
pub fn resize_mission(mission: &Mission, days: i64) -> MissionResult<MissionPatch> {
    let time_need = mission
        .time_need
        .saturating_add(days)
        .clamp(1, MAX_TIME_NEED_DAYS);
    let due_date =
        add_days_utc(mission.created_date, time_need).ok_or_else(|| out_of_range(days))?;
    Ok(MissionPatch {
        time_need: Some(time_need),
        due_date: Some(due_date),
        ..Default::default()
    })
}

/// Move `anchor` by `steps` navigation steps; negative steps go back.
pub fn step_anchor(anchor: NaiveDate, steps: i64) -> Option<NaiveDate> {
    add_days(anchor, steps.checked_mul(NAVIGATION_STEP_DAYS)?)
}

fn out_of_range(days: i64) -> MissionError {
    MissionError::Validation(format!("Moving by {} days leaves the calendar range", days))
}

fn percent(days: i64, len: i64) -> f64 {
    if len <= 0 {
        return 0.0;
    }
    days as f64 / len as f64 * 100.0
}
