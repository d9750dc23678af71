//! Dashboard view models
//!
//! Dashboards fetch several independent resources at once. Each resource
//! settles into its own [`Section`] so one failure never blanks the others.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::utils::helpers;

/// Outcome of one read on a dashboard
#[derive(Debug, Clone, PartialEq)]
pub enum Section<T> {
    Loaded(T),
    /// The backend answered but had nothing to show
    Empty,
    /// The read failed; holds a message fit for display
    Failed(String),
}

impl<T> Section<T> {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Section::Loaded(_))
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Section::Loaded(value) => Some(value),
            _ => None,
        }
    }

    /// Display text for anything that is not loaded
    pub fn placeholder<'a>(&'a self, empty: &'a str) -> Option<&'a str> {
        match self {
            Section::Loaded(_) => None,
            Section::Empty => Some(empty),
            Section::Failed(message) => Some(message),
        }
    }
}

/// Member portal landing page data
#[derive(Debug, Clone)]
pub struct MemberOverview {
    pub profile: Section<Value>,
    pub trainer: Section<Value>,
    pub workout_plan: Section<Value>,
}

impl MemberOverview {
    /// Assigned trainer's name, or the no-trainer placeholder
    pub fn trainer_summary(&self) -> String {
        match &self.trainer {
            Section::Loaded(trainer) => helpers::display_field(trainer, "name"),
            other => other.placeholder(helpers::NO_TRAINER_ASSIGNED).unwrap_or_default().to_string(),
        }
    }

    /// Workout plan name, or the no-plan placeholder
    pub fn workout_summary(&self) -> String {
        match &self.workout_plan {
            Section::Loaded(plan) => helpers::display_field(plan, "name"),
            other => other.placeholder(helpers::NO_WORKOUT_PLAN).unwrap_or_default().to_string(),
        }
    }
}

/// Headline numbers on the trainer dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrainerStats {
    pub total_members: u64,
    pub active_sessions: u64,
    pub upcoming_sessions: u64,
    pub performance: f64,
}

impl TrainerStats {
    /// Read stats leniently: counts may arrive as numbers or numeric strings
    pub fn from_payload(body: &Value) -> Self {
        Self {
            total_members: helpers::count_field(body, "totalMembers"),
            active_sessions: helpers::count_field(body, "activeSessions"),
            upcoming_sessions: helpers::count_field(body, "upcomingSessions"),
            performance: body
                .get("performance")
                .and_then(|v| v.as_f64().or_else(|| v.as_str().and_then(|s| s.parse().ok())))
                .unwrap_or(0.0),
        }
    }
}

/// Trainer portal landing page data
#[derive(Debug, Clone)]
pub struct TrainerOverview {
    /// Zero-filled when the dashboard read fails
    pub stats: TrainerStats,
    /// Empty when the member list read fails
    pub members: Vec<Value>,
}

/// Admin portal landing page data
#[derive(Debug, Clone)]
pub struct AdminOverview {
    pub dashboard: Section<Value>,
    pub member_count: usize,
    pub trainer_count: usize,
    pub plan_count: usize,
}
