//! Command line interface
//!
//! Every command maps onto one library call. Results are printed as pretty
//! JSON on stdout; logs and session notices go to stderr.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use apex_portal::models::{Credentials, Role, Section};
use apex_portal::services::{AdminResource, ApiServices, AuthExpiryHandler};

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Configuration file, extension optional
    #[arg(long, short, global = true, env = "APEX_CONFIG", default_value = "config")]
    pub config: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sign in and store the session token
    Login {
        /// admin, trainer or member
        #[arg(long, default_value = "member")]
        role: Role,
        #[arg(long)]
        email: String,
        #[arg(long, env = "APEX_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Exchange a Google Identity credential for a member session
    GoogleLogin { credential: String },
    /// Create a member account
    Register {
        /// JSON body, or @path to a JSON file
        #[arg(long)]
        data: String,
    },
    /// Sign out and forget the session token
    Logout {
        #[arg(long, default_value = "member")]
        role: Role,
    },
    /// Show which roles are signed in
    Status,
    /// Member portal views
    Member {
        #[command(subcommand)]
        view: MemberView,
    },
    /// Trainer portal views
    Trainer {
        #[command(subcommand)]
        view: TrainerView,
    },
    /// Admin portal
    Admin {
        #[command(subcommand)]
        command: AdminCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum MemberView {
    Dashboard,
    Trainer,
    Workout,
    /// Dashboard, trainer and workout plan together
    Overview,
}

#[derive(Subcommand, Debug)]
pub enum TrainerView {
    Dashboard,
    Members,
    Overview,
}

#[derive(Subcommand, Debug)]
pub enum AdminCommand {
    Dashboard,
    Overview,
    Members {
        #[command(subcommand)]
        action: MemberAction,
    },
    Trainers {
        #[command(subcommand)]
        action: CrudAction,
    },
    Plans {
        #[command(subcommand)]
        action: CrudAction,
    },
    Guidelines {
        #[command(subcommand)]
        action: CrudAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum CrudAction {
    List,
    Create {
        #[arg(long)]
        data: String,
    },
    Update {
        id: String,
        #[arg(long)]
        data: String,
    },
    Delete { id: String },
}

#[derive(Subcommand, Debug)]
pub enum MemberAction {
    List,
    Get { id: String },
    Create {
        #[arg(long)]
        data: String,
    },
    Update {
        id: String,
        #[arg(long)]
        data: String,
    },
    Delete { id: String },
    AssignTrainer { member_id: String, trainer_id: String },
}

/// Run one command against the backend
pub async fn execute(command: Command, services: &ApiServices, handler: &AuthExpiryHandler) -> Result<()> {
    match command {
        Command::Login { role, email, password } => {
            let credentials = Credentials::new(email, password);
            let outcome = handler.run(services.auth.login(role, &credentials)).await?;
            print_json(&json!({
                "role": outcome.role,
                "profile": outcome.profile,
                "next": outcome.redirect,
            }))
        }
        Command::GoogleLogin { credential } => {
            let outcome = handler.run(services.auth.login_with_google(&credential)).await?;
            print_json(&json!({
                "role": outcome.role,
                "profile": outcome.profile,
                "next": outcome.redirect,
            }))
        }
        Command::Register { data } => {
            let body = parse_data(&data)?;
            let (response, outcome) = handler.run(services.auth.register(&body)).await?;
            print_json(&json!({
                "response": response,
                "signed_in": outcome.is_some(),
                "next": outcome.map(|o| o.redirect).unwrap_or(Role::User.login_route()),
            }))
        }
        Command::Logout { role } => {
            let next = services.auth.logout(role).await?;
            print_json(&json!({ "signed_out": role, "next": next }))
        }
        Command::Status => {
            let sessions: Vec<Value> = services
                .auth
                .active_sessions()?
                .into_iter()
                .map(|s| json!({ "role": s.role, "profile": s.profile }))
                .collect();
            print_json(&json!({ "sessions": sessions }))
        }
        Command::Member { view } => member(view, services, handler).await,
        Command::Trainer { view } => trainer(view, services, handler).await,
        Command::Admin { command } => admin(command, services, handler).await,
    }
}

async fn member(view: MemberView, services: &ApiServices, handler: &AuthExpiryHandler) -> Result<()> {
    let user = &services.user;
    let value = match view {
        MemberView::Dashboard => handler.run(user.get_dashboard()).await?,
        MemberView::Trainer => handler.run(user.get_assigned_trainer()).await?,
        MemberView::Workout => handler.run(user.get_current_workout_plan()).await?,
        MemberView::Overview => {
            let overview = handler.run(services.dashboard.member_overview()).await?;
            json!({
                "profile": section_json(&overview.profile),
                "trainer": section_json(&overview.trainer),
                "workout_plan": section_json(&overview.workout_plan),
                "trainer_summary": overview.trainer_summary(),
                "workout_summary": overview.workout_summary(),
            })
        }
    };
    print_json(&value)
}

async fn trainer(view: TrainerView, services: &ApiServices, handler: &AuthExpiryHandler) -> Result<()> {
    let value = match view {
        TrainerView::Dashboard => handler.run(services.trainer.get_dashboard()).await?,
        TrainerView::Members => handler.run(services.trainer.list_members()).await?,
        TrainerView::Overview => {
            let overview = handler.run(services.dashboard.trainer_overview()).await?;
            json!({ "stats": overview.stats, "members": overview.members })
        }
    };
    print_json(&value)
}

async fn admin(command: AdminCommand, services: &ApiServices, handler: &AuthExpiryHandler) -> Result<()> {
    let api = &services.admin;
    let value = match command {
        AdminCommand::Dashboard => handler.run(api.get_dashboard()).await?,
        AdminCommand::Overview => {
            let overview = handler.run(services.dashboard.admin_overview()).await?;
            json!({
                "dashboard": section_json(&overview.dashboard),
                "members": overview.member_count,
                "trainers": overview.trainer_count,
                "plans": overview.plan_count,
            })
        }
        AdminCommand::Members { action } => match action {
            MemberAction::List => handler.run(api.list_members()).await?,
            MemberAction::Get { id } => handler.run(api.get_member_by_id(&id)).await?,
            MemberAction::Create { data } => handler.run(api.create_member(&parse_data(&data)?)).await?,
            MemberAction::Update { id, data } => {
                handler.run(api.update_member(&id, &parse_data(&data)?)).await?
            }
            MemberAction::Delete { id } => handler.run(api.delete_member(&id)).await?,
            MemberAction::AssignTrainer { member_id, trainer_id } => {
                handler
                    .run(api.assign_trainer_to_member(&member_id, id_value(&trainer_id)))
                    .await?
            }
        },
        AdminCommand::Trainers { action } => crud(AdminResource::Trainers, action, services, handler).await?,
        AdminCommand::Plans { action } => crud(AdminResource::Plans, action, services, handler).await?,
        AdminCommand::Guidelines { action } => crud(AdminResource::Guidelines, action, services, handler).await?,
    };
    print_json(&value)
}

async fn crud(
    resource: AdminResource,
    action: CrudAction,
    services: &ApiServices,
    handler: &AuthExpiryHandler,
) -> Result<Value> {
    let api = &services.admin;
    let value = match action {
        CrudAction::List => handler.run(api.list(resource)).await?,
        CrudAction::Create { data } => handler.run(api.create(resource, &parse_data(&data)?)).await?,
        CrudAction::Update { id, data } => handler.run(api.update(resource, &id, &parse_data(&data)?)).await?,
        CrudAction::Delete { id } => handler.run(api.delete(resource, &id)).await?,
    };
    Ok(value)
}

/// Parse a `--data` argument: inline JSON, or `@path` to a JSON file
fn parse_data(raw: &str) -> Result<Value> {
    let text = match raw.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path).with_context(|| format!("reading {}", path))?,
        None => raw.to_string(),
    };
    serde_json::from_str(&text).context("--data must be valid JSON")
}

/// Numeric ids go out as numbers, anything else as a string
fn id_value(raw: &str) -> Value {
    raw.parse::<u64>().map(Value::from).unwrap_or_else(|_| Value::from(raw))
}

fn section_json(section: &Section<Value>) -> Value {
    match section {
        Section::Loaded(value) => json!({ "status": "loaded", "data": value }),
        Section::Empty => json!({ "status": "empty" }),
        Section::Failed(message) => json!({ "status": "failed", "message": message }),
    }
}

fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_login_command() {
        let cli = Cli::try_parse_from([
            "apex", "login", "--role", "trainer", "--email", "sam@apex.fit", "--password", "pw",
        ])
        .unwrap();
        match cli.command {
            Command::Login { role, email, .. } => {
                assert_eq!(role, Role::Trainer);
                assert_eq!(email, "sam@apex.fit");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_assign_trainer() {
        let cli = Cli::try_parse_from(["apex", "admin", "members", "assign-trainer", "12", "4"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Admin { command: AdminCommand::Members { action: MemberAction::AssignTrainer { .. } } }
        ));
    }

    #[test]
    fn test_id_value() {
        assert_eq!(id_value("4"), json!(4));
        assert_eq!(id_value("tr-4"), json!("tr-4"));
    }

    #[test]
    fn test_parse_data() {
        assert_eq!(parse_data(r#"{"name":"Gold"}"#).unwrap(), json!({"name": "Gold"}));
        assert!(parse_data("{oops").is_err());
    }
}
