//! Data models module
//!
//! Domain entities (members, trainers, plans, guidelines) belong to the
//! backend and travel as opaque JSON. This module only types what the
//! client itself builds or inspects.

pub mod auth;
pub mod dashboard;
pub mod role;

// Re-export commonly used models
pub use auth::{AssignTrainerRequest, Credentials, GoogleCredentialRequest, LoginOutcome, LoginRequest, LoginResponse};
pub use dashboard::{AdminOverview, MemberOverview, Section, TrainerOverview, TrainerStats};
pub use role::{Role, TokenScope};
