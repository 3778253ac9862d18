use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Mission, MissionId, UrgencyColor, UrgencyLevel};

/// Missions shown in the upcoming preview.
pub const UPCOMING_PREVIEW_LEN: usize = 5;

/// How a mission counts as completed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CompletionPolicy {
    /// Completed means status `done`. Only unfinished missions can be
    /// delayed, ongoing or upcoming.
    #[default]
    Explicit,
    /// Completed means the due date has passed, regardless of status.
    Inferred,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HealthBand {
    Good,
    Fair,
    AtRisk,
    Critical,
}

impl HealthBand {
    pub fn for_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => Self::Good,
            60..=79 => Self::Fair,
            40..=59 => Self::AtRisk,
            _ => Self::Critical,
        }
    }
}

#[derive(Debug, Default)]
pub struct Partition<'a> {
    pub completed: Vec<&'a Mission>,
    pub delayed: Vec<&'a Mission>,
    pub ongoing: Vec<&'a Mission>,
    pub upcoming: Vec<&'a Mission>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrgencyShare {
    pub level: UrgencyLevel,
    pub label: String,
    pub color: UrgencyColor,
    pub count: usize,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingMission {
    pub id: MissionId,
    pub title: String,
    pub created_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub urgency: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub policy: CompletionPolicy,
    pub total: usize,
    pub completed: usize,
    pub delayed: usize,
    pub ongoing: usize,
    pub upcoming: usize,
    pub completed_pct: f64,
    pub delayed_pct: f64,
    pub ongoing_pct: f64,
    pub health: u8,
    pub health_band: HealthBand,
    pub urgency_distribution: Vec<UrgencyShare>,
    pub upcoming_preview: Vec<UpcomingMission>,
}

/// Sort missions into completed, delayed, ongoing and upcoming as of `now`.
///
/// The groups may overlap: under the inferred policy every delayed mission
/// is also completed.
pub fn partition(missions: &[Mission], now: DateTime<Utc>, policy: CompletionPolicy) -> Partition<'_> {
    let mut parts = Partition::default();
    for mission in missions {
        let due_passed = mission.due_date < now;
        let plan_passed = mission.planned_end() < now;
        let not_started = mission.created_date > now;

        let completed = match policy {
            CompletionPolicy::Explicit => mission.is_done(),
            CompletionPolicy::Inferred => due_passed,
        };
        if completed {
            parts.completed.push(mission);
        }
        if policy == CompletionPolicy::Explicit && completed {
            continue;
        }
        if due_passed && plan_passed {
            parts.delayed.push(mission);
        }
        if !due_passed && !not_started {
            parts.ongoing.push(mission);
        }
        if not_started {
            parts.upcoming.push(mission);
        }
    }
    parts
}

/// `100 - delayed% + completed% / 2`, clamped to 0..=100 and rounded.
///
/// An empty board scores 100.
pub fn health_score(total: usize, delayed: usize, completed: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    let delayed_pct = share(delayed, total);
    let completed_pct = share(completed, total);
    (100.0 - delayed_pct + completed_pct / 2.0).clamp(0.0, 100.0).round() as u8
}

pub fn summarize(missions: &[Mission], now: DateTime<Utc>, policy: CompletionPolicy) -> DashboardSummary {
    let parts = partition(missions, now, policy);
    let total = missions.len();
    let health = health_score(total, parts.delayed.len(), parts.completed.len());

    let urgency_distribution = UrgencyLevel::ALL
        .iter()
        .map(|level| {
            let count = missions
                .iter()
                .filter(|m| m.urgency == level.value())
                .count();
            UrgencyShare {
                level: *level,
                label: level.label().to_string(),
                color: level.color(),
                count,
                percent: share(count, total),
            }
        })
        .collect();

    let upcoming_preview = parts
        .upcoming
        .iter()
        .take(UPCOMING_PREVIEW_LEN)
        .map(|m| UpcomingMission {
            id: m.id,
            title: m.title.clone(),
            created_date: m.created_date,
            due_date: m.due_date,
            urgency: m.urgency,
        })
        .collect();

    DashboardSummary {
        policy,
        total,
        completed: parts.completed.len(),
        delayed: parts.delayed.len(),
        ongoing: parts.ongoing.len(),
        upcoming: parts.upcoming.len(),
        completed_pct: share(parts.completed.len(), total),
        delayed_pct: share(parts.delayed.len(), total),
        ongoing_pct: share(parts.ongoing.len(), total),
        health,
        health_band: HealthBand::for_score(health),
        urgency_distribution,
        upcoming_preview,
    }
}

fn share(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 * 100.0 / total as f64
}
