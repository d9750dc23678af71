//! Services module
//!
//! HTTP clients and the domain APIs built on them

pub mod admin;
pub mod auth;
pub mod dashboard;
pub mod http;
pub mod navigation;
pub mod trainer;
pub mod user;

// Re-export commonly used services
pub use admin::{AdminApi, AdminResource};
pub use auth::{ActiveSession, AuthApi, AuthService};
pub use dashboard::DashboardService;
pub use http::{ApiClient, BodyKind, ClientBuilder};
pub use navigation::{AuthExpiryHandler, Navigator, RecordingNavigator, TerminalNavigator};
pub use trainer::TrainerApi;
pub use user::UserApi;

use crate::config::{ApiConfig, Settings};
use crate::models::Role;
use crate::state::{self, SessionContext};
use crate::utils::errors::Result;

/// Every client and API, wired to one session
#[derive(Debug, Clone)]
pub struct ApiServices {
    pub session: SessionContext,
    /// Unscoped facade for auth and public endpoints
    pub api: ApiClient,
    /// Multipart twin of the facade, for uploads
    pub form_data_api: ApiClient,
    pub auth: AuthService,
    pub admin: AdminApi,
    pub trainer: TrainerApi,
    pub user: UserApi,
    pub dashboard: DashboardService,
}

impl ApiServices {
    /// Build all clients from configuration around an existing session
    pub fn new(config: &ApiConfig, session: SessionContext) -> Result<Self> {
        let builder = |name: &'static str, base_url: &str| {
            ClientBuilder::new(name, base_url, session.clone())
                .timeout(config.timeout())
                .user_agent(config.user_agent.as_str())
        };

        let api = builder("api", &config.public_url)
            .priority(Role::PRIORITY.to_vec())
            .build()?;
        let form_data_api = builder("form-data-api", &config.public_url)
            .priority(Role::PRIORITY.to_vec())
            .multipart()
            .build()?;
        let admin_client = builder("admin", &config.admin_url).role(Role::Admin).build()?;
        let trainer_client = builder("trainer", &config.trainer_url).role(Role::Trainer).build()?;
        let user_client = builder("user", &config.member_url).role(Role::User).build()?;

        let admin = AdminApi::new(admin_client);
        let trainer = TrainerApi::new(trainer_client);
        let user = UserApi::new(user_client);

        Ok(Self {
            auth: AuthService::new(AuthApi::new(api.clone()), session.clone()),
            dashboard: DashboardService::new(user.clone(), trainer.clone(), admin.clone()),
            session,
            api,
            form_data_api,
            admin,
            trainer,
            user,
        })
    }

    /// Open the configured session store and build all clients
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let session = state::open_session(&settings.session)?;
        Self::new(&settings.api, session)
    }
}
