use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::dates::{each_day, end_of_month, end_of_week, start_of_week};
use crate::urgency::urgency_color;
use crate::{Mission, MissionId, UrgencyColor};

/// A displayed month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarMonth {
    first_day: NaiveDate,
}

impl CalendarMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first_day| Self { first_day })
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first_day: crate::dates::start_of_month(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// `None` only for the final month of the calendar range.
    pub fn last_day(&self) -> Option<NaiveDate> {
        end_of_month(self.first_day)
    }

    pub fn prev(&self) -> Option<Self> {
        self.first_day
            .checked_sub_months(Months::new(1))
            .map(|first_day| Self { first_day })
    }

    pub fn next(&self) -> Option<Self> {
        self.first_day
            .checked_add_months(Months::new(1))
            .map(|first_day| Self { first_day })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// Whole weeks covering the month, padded with days of the adjacent months.
    ///
    /// `None` when the padding would leave the calendar range.
    pub fn grid_days(&self) -> Option<Vec<NaiveDate>> {
        Some(each_day(
            start_of_week(self.first_day)?,
            end_of_week(self.last_day()?)?,
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEntry {
    pub id: MissionId,
    pub title: String,
    pub urgency: i32,
    pub color: UrgencyColor,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub in_month: bool,
    pub missions: Vec<CalendarEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarGrid {
    pub year: i32,
    pub month: u32,
    /// Sunday-first rows of seven days.
    pub weeks: Vec<Vec<CalendarDay>>,
}

impl CalendarGrid {
    pub fn days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.weeks.iter().flatten()
    }

    pub fn day(&self, date: NaiveDate) -> Option<&CalendarDay> {
        self.days().find(|d| d.date == date)
    }
}

/// Bucket missions by due date into the grid of `month`.
pub fn build_calendar(month: CalendarMonth, missions: &[Mission]) -> Option<CalendarGrid> {
    let days: Vec<CalendarDay> = month
        .grid_days()?
        .into_iter()
        .map(|date| CalendarDay {
            date,
            in_month: month.contains(date),
            missions: missions
                .iter()
                .filter(|m| m.due_date.date_naive() == date)
                .map(|m| CalendarEntry {
                    id: m.id,
                    title: m.title.clone(),
                    urgency: m.urgency,
                    color: urgency_color(m.urgency),
                })
                .collect(),
        })
        .collect();

    Some(CalendarGrid {
        year: month.year(),
        month: month.month(),
        weeks: days.chunks(7).map(|week| week.to_vec()).collect(),
    })
}
