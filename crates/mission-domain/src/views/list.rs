use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::filter::{MissionFilter, TextFilter};
use crate::sort::{OrderedSorter, SortBy};
use crate::urgency::{urgency_color, urgency_label};
use crate::{ListSortField, Mission, MissionId, MissionStatus, SortDirection, UrgencyColor};

/// Sortable, filterable table of missions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListView {
    #[serde(default)]
    pub filter: String,
    #[serde(default)]
    pub sort_field: ListSortField,
    #[serde(default)]
    pub direction: SortDirection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRow {
    pub id: MissionId,
    pub title: String,
    pub category: String,
    pub urgency: i32,
    pub urgency_label: String,
    pub urgency_color: UrgencyColor,
    pub due_date: DateTime<Utc>,
    pub status: MissionStatus,
}

impl From<&Mission> for ListRow {
    fn from(mission: &Mission) -> Self {
        Self {
            id: mission.id,
            title: mission.title.clone(),
            category: mission.category.clone(),
            urgency: mission.urgency,
            urgency_label: urgency_label(mission.urgency).to_string(),
            urgency_color: urgency_color(mission.urgency),
            due_date: mission.due_date,
            status: mission.status,
        }
    }
}

impl ListView {
    /// Re-selecting the current column flips the direction; picking a new
    /// column sorts it ascending.
    pub fn select_sort(&mut self, field: ListSortField) {
        if field == self.sort_field {
            self.direction = self.direction.toggled();
        } else {
            self.sort_field = field;
            self.direction = SortDirection::Ascending;
        }
    }

    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
    }

    pub fn apply<'a>(&self, missions: &'a [Mission]) -> Vec<&'a Mission> {
        let text = TextFilter::new(self.filter.as_str());
        let mut visible: Vec<&Mission> = missions.iter().filter(|m| text.matches(m)).collect();
        OrderedSorter::new(SortBy::from(self.sort_field), self.direction).sort(&mut visible);
        visible
    }

    pub fn rows(&self, missions: &[Mission]) -> Vec<ListRow> {
        self.apply(missions).into_iter().map(ListRow::from).collect()
    }
}
