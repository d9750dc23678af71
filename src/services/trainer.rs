//! Trainer portal API

use serde_json::Value;
use super::http::ApiClient;
use crate::utils::errors::Result;

/// Read-only trainer views, bound to the trainer client
#[derive(Debug, Clone)]
pub struct TrainerApi {
    client: ApiClient,
}

impl TrainerApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub async fn get_dashboard(&self) -> Result<Value> {
        self.client.get("/dashboard").await
    }

    /// Members assigned to the signed-in trainer
    pub async fn list_members(&self) -> Result<Value> {
        self.client.get("/members").await
    }
}
