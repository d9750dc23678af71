//! Admin portal API
//!
//! CRUD over members, trainers, plans and guidelines, plus assigning a
//! trainer to a member. All calls go through the admin client, so a 401
//! clears only the admin session.

use std::fmt::Display;
use serde::Serialize;
use serde_json::Value;
use tracing::info;
use super::http::{segment, ApiClient};
use crate::models::AssignTrainerRequest;
use crate::utils::errors::Result;

/// A resource collection under the admin root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminResource {
    Members,
    Trainers,
    Plans,
    Guidelines,
}

impl AdminResource {
    pub fn path(&self) -> &'static str {
        match self {
            AdminResource::Members => "/members",
            AdminResource::Trainers => "/trainers",
            AdminResource::Plans => "/plans",
            AdminResource::Guidelines => "/guidelines",
        }
    }

    fn item_path(&self, id: impl Display) -> String {
        format!("{}/{}", self.path(), segment(id))
    }
}

/// Admin API bound to the admin client
#[derive(Debug, Clone)]
pub struct AdminApi {
    client: ApiClient,
}

impl AdminApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub async fn get_dashboard(&self) -> Result<Value> {
        self.client.get("/dashboard").await
    }

    // Generic collection operations

    pub async fn list(&self, resource: AdminResource) -> Result<Value> {
        self.client.get(resource.path()).await
    }

    pub async fn create<B: Serialize + ?Sized>(&self, resource: AdminResource, data: &B) -> Result<Value> {
        let created = self.client.post(resource.path(), data).await?;
        info!(resource = resource.path(), "Admin created record");
        Ok(created)
    }

    pub async fn update<B: Serialize + ?Sized>(
        &self,
        resource: AdminResource,
        id: impl Display,
        data: &B,
    ) -> Result<Value> {
        self.client.put(&resource.item_path(id), data).await
    }

    pub async fn delete(&self, resource: AdminResource, id: impl Display) -> Result<Value> {
        let path = resource.item_path(id);
        let deleted = self.client.delete(&path).await?;
        info!(path = %path, "Admin deleted record");
        Ok(deleted)
    }

    // Members

    pub async fn list_members(&self) -> Result<Value> {
        self.list(AdminResource::Members).await
    }

    pub async fn create_member<B: Serialize + ?Sized>(&self, data: &B) -> Result<Value> {
        self.create(AdminResource::Members, data).await
    }

    pub async fn get_member_by_id(&self, id: impl Display) -> Result<Value> {
        self.client.get(&AdminResource::Members.item_path(id)).await
    }

    pub async fn update_member<B: Serialize + ?Sized>(&self, id: impl Display, data: &B) -> Result<Value> {
        self.update(AdminResource::Members, id, data).await
    }

    pub async fn delete_member(&self, id: impl Display) -> Result<Value> {
        self.delete(AdminResource::Members, id).await
    }

    /// Link a member to a trainer. `trainer_id` is sent as given (number or string).
    pub async fn assign_trainer_to_member(
        &self,
        member_id: impl Display,
        trainer_id: impl Into<Value>,
    ) -> Result<Value> {
        let path = format!("{}/assign-trainer", AdminResource::Members.item_path(member_id));
        let body = AssignTrainerRequest { trainer_id: trainer_id.into() };
        self.client.post(&path, &body).await
    }

    // Trainers

    pub async fn list_trainers(&self) -> Result<Value> {
        self.list(AdminResource::Trainers).await
    }

    pub async fn create_trainer<B: Serialize + ?Sized>(&self, data: &B) -> Result<Value> {
        self.create(AdminResource::Trainers, data).await
    }

    pub async fn update_trainer<B: Serialize + ?Sized>(&self, id: impl Display, data: &B) -> Result<Value> {
        self.update(AdminResource::Trainers, id, data).await
    }

    pub async fn delete_trainer(&self, id: impl Display) -> Result<Value> {
        self.delete(AdminResource::Trainers, id).await
    }

    // Plans

    pub async fn list_plans(&self) -> Result<Value> {
        self.list(AdminResource::Plans).await
    }

    pub async fn create_plan<B: Serialize + ?Sized>(&self, data: &B) -> Result<Value> {
        self.create(AdminResource::Plans, data).await
    }

    pub async fn update_plan<B: Serialize + ?Sized>(&self, id: impl Display, data: &B) -> Result<Value> {
        self.update(AdminResource::Plans, id, data).await
    }

    pub async fn delete_plan(&self, id: impl Display) -> Result<Value> {
        self.delete(AdminResource::Plans, id).await
    }

    // Guidelines

    pub async fn list_guidelines(&self) -> Result<Value> {
        self.list(AdminResource::Guidelines).await
    }

    pub async fn create_guideline<B: Serialize + ?Sized>(&self, data: &B) -> Result<Value> {
        self.create(AdminResource::Guidelines, data).await
    }

    pub async fn update_guideline<B: Serialize + ?Sized>(&self, id: impl Display, data: &B) -> Result<Value> {
        self.update(AdminResource::Guidelines, id, data).await
    }

    pub async fn delete_guideline(&self, id: impl Display) -> Result<Value> {
        self.delete(AdminResource::Guidelines, id).await
    }
}
