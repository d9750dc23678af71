//! Member portal API
//!
//! Read-only views for a signed-in member, bound to the member client.

use serde_json::Value;
use super::http::ApiClient;
use crate::utils::errors::Result;

#[derive(Debug, Clone)]
pub struct UserApi {
    client: ApiClient,
}

impl UserApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub async fn get_dashboard(&self) -> Result<Value> {
        self.client.get("/dashboard").await
    }

    pub async fn get_assigned_trainer(&self) -> Result<Value> {
        self.client.get("/trainer").await
    }

    pub async fn get_current_workout_plan(&self) -> Result<Value> {
        self.client.get("/workout-plan").await
    }
}
