//! Dashboard loaders
//!
//! Each portal's landing page needs several independent reads. They are
//! issued together and the loader returns once every one has settled. A
//! failed or empty read becomes a placeholder for its own section only. An
//! expired session is the exception: it is returned as an error so the
//! caller can send the user to the login page.

use serde_json::Value;
use tracing::warn;
use super::admin::AdminApi;
use super::trainer::TrainerApi;
use super::user::UserApi;
use crate::models::{AdminOverview, MemberOverview, Section, TrainerOverview, TrainerStats};
use crate::utils::errors::{ApexError, Result, GENERIC_FAILURE_MESSAGE};
use crate::utils::helpers::{as_list, unwrap_envelope};

/// Loads the data behind each portal's landing page
#[derive(Debug, Clone)]
pub struct DashboardService {
    user: UserApi,
    trainer: TrainerApi,
    admin: AdminApi,
}

impl DashboardService {
    pub fn new(user: UserApi, trainer: TrainerApi, admin: AdminApi) -> Self {
        Self { user, trainer, admin }
    }

    /// Member profile, assigned trainer and workout plan, fetched concurrently
    pub async fn member_overview(&self) -> Result<MemberOverview> {
        let (profile, trainer, workout_plan) = tokio::join!(
            self.user.get_dashboard(),
            self.user.get_assigned_trainer(),
            self.user.get_current_workout_plan(),
        );

        Ok(MemberOverview {
            profile: settle("dashboard", profile)?,
            trainer: settle("trainer", trainer)?,
            workout_plan: settle("workout-plan", workout_plan)?,
        })
    }

    /// Trainer stats and assigned members, fetched concurrently
    pub async fn trainer_overview(&self) -> Result<TrainerOverview> {
        let (dashboard, members) = tokio::join!(self.trainer.get_dashboard(), self.trainer.list_members());

        let stats = match settle("trainer dashboard", dashboard)? {
            Section::Loaded(body) => TrainerStats::from_payload(&body),
            _ => TrainerStats::default(),
        };

        Ok(TrainerOverview {
            stats,
            members: list_or_empty("trainer members", members)?,
        })
    }

    /// Admin dashboard plus member, trainer and plan counts
    pub async fn admin_overview(&self) -> Result<AdminOverview> {
        let (dashboard, members, trainers, plans) = tokio::join!(
            self.admin.get_dashboard(),
            self.admin.list_members(),
            self.admin.list_trainers(),
            self.admin.list_plans(),
        );

        Ok(AdminOverview {
            dashboard: settle("admin dashboard", dashboard)?,
            member_count: list_or_empty("members", members)?.len(),
            trainer_count: list_or_empty("trainers", trainers)?.len(),
            plan_count: list_or_empty("plans", plans)?.len(),
        })
    }
}

/// Turn one read into a section. Only an expired session escapes.
fn settle(name: &str, result: Result<Value>) -> Result<Section<Value>> {
    match result {
        Ok(body) => Ok(match unwrap_envelope(body) {
            Some(value) => Section::Loaded(value),
            None => Section::Empty,
        }),
        Err(e) if e.is_auth_expired() => Err(e),
        // The backend answers 404 when there is nothing assigned yet
        Err(ApexError::Api { status: 404, .. }) => Ok(Section::Empty),
        Err(e) => {
            warn!(section = name, error = %e, "Dashboard read failed");
            Ok(Section::Failed(e.user_message(GENERIC_FAILURE_MESSAGE)))
        }
    }
}

fn list_or_empty(name: &str, result: Result<Value>) -> Result<Vec<Value>> {
    match result {
        Ok(body) => Ok(as_list(body)),
        Err(e) if e.is_auth_expired() => Err(e),
        Err(e) => {
            warn!(section = name, error = %e, "List read failed, showing none");
            Ok(Vec::new())
        }
    }
}
