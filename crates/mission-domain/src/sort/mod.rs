//! Mission sorting.
//!
//! Used by the list view and by the API so both order missions the same way.

use crate::Mission;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::cmp::Ordering;

/// Columns the list view can be sorted by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ListSortField {
    Title,
    Category,
    Urgency,
    #[default]
    DueDate,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Enum dispatch for comparing missions by one field.
pub enum SortBy {
    Title,
    Category,
    Urgency,
    DueDate,
    CreatedDate,
}

impl SortBy {
    pub fn compare(&self, a: &Mission, b: &Mission) -> Ordering {
        match self {
            Self::Title => a.title.cmp(&b.title),
            Self::Category => a.category.cmp(&b.category),
            Self::Urgency => a.urgency.cmp(&b.urgency),
            Self::DueDate => a.due_date.cmp(&b.due_date),
            Self::CreatedDate => a.created_date.cmp(&b.created_date),
        }
    }
}

impl From<ListSortField> for SortBy {
    fn from(field: ListSortField) -> Self {
        match field {
            ListSortField::Title => Self::Title,
            ListSortField::Category => Self::Category,
            ListSortField::Urgency => Self::Urgency,
            ListSortField::DueDate => Self::DueDate,
        }
    }
}

/// Applies a direction on top of a field comparison.
pub struct OrderedSorter {
    sorter: SortBy,
    direction: SortDirection,
}

impl OrderedSorter {
    pub fn new(sorter: SortBy, direction: SortDirection) -> Self {
        Self { sorter, direction }
    }

    /// Stable in-place sort. Works with both `&Mission` and `Mission` elements.
    pub fn sort<T: Borrow<Mission>>(&self, missions: &mut [T]) {
        missions.sort_by(|a, b| {
            let cmp = self.sorter.compare(a.borrow(), b.borrow());
            match self.direction {
                SortDirection::Ascending => cmp,
                SortDirection::Descending => cmp.reverse(),
            }
        });
    }
}
