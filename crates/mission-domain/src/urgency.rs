use serde::{Deserialize, Serialize};

/// Known urgency levels. Missions store the raw integer, so not every stored
/// value maps to a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum UrgencyLevel {
    Low = 1,
    Medium = 2,
    High = 3,
    Critical = 4,
}

impl UrgencyLevel {
    pub const ALL: [UrgencyLevel; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];

    pub fn from_value(value: i32) -> Option<Self> {
        match value {
            1 => Some(Self::Low),
            2 => Some(Self::Medium),
            3 => Some(Self::High),
            4 => Some(Self::Critical),
            _ => None,
        }
    }

    pub fn value(self) -> i32 {
        self as i32
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }

    pub fn color(self) -> UrgencyColor {
        match self {
            Self::Low => UrgencyColor::Green,
            Self::Medium => UrgencyColor::Yellow,
            Self::High => UrgencyColor::Orange,
            Self::Critical => UrgencyColor::Red,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UrgencyColor {
    Green,
    Yellow,
    Orange,
    Red,
    /// Fallback for values outside the known levels.
    Gray,
}

pub fn urgency_color(value: i32) -> UrgencyColor {
    UrgencyLevel::from_value(value)
        .map(UrgencyLevel::color)
        .unwrap_or(UrgencyColor::Gray)
}

pub fn urgency_label(value: i32) -> &'static str {
    UrgencyLevel::from_value(value)
        .map(UrgencyLevel::label)
        .unwrap_or("Unknown")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_levels() {
        assert_eq!(urgency_color(1), UrgencyColor::Green);
        assert_eq!(urgency_color(2), UrgencyColor::Yellow);
        assert_eq!(urgency_color(3), UrgencyColor::Orange);
        assert_eq!(urgency_color(4), UrgencyColor::Red);
        assert_eq!(urgency_label(4), "Critical");
    }

    #[test]
    fn test_out_of_range_falls_back() {
        for value in [0, 5, -1, 99] {
            assert_eq!(urgency_color(value), UrgencyColor::Gray);
            assert_eq!(urgency_label(value), "Unknown");
            assert!(UrgencyLevel::from_value(value).is_none());
        }
    }

    #[test]
    fn test_value_round_trip() {
        for level in UrgencyLevel::ALL {
            assert_eq!(UrgencyLevel::from_value(level.value()), Some(level));
        }
    }
}
