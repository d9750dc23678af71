//! APEX Portal CLI
//!
//! Main application entry point

mod cli;

use std::process::ExitCode;
use std::sync::Arc;
use clap::Parser;
use tracing::{debug, error};

use apex_portal::{
    config::Settings,
    services::{ApiServices, AuthExpiryHandler, TerminalNavigator},
    utils::{errors::GENERIC_FAILURE_MESSAGE, logging},
    ApexError,
};

use cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Load configuration
    let settings = Settings::from_file(&cli.config)?;
    settings.validate()?;

    // Initialize logging; the guard keeps the file writer flushing
    let _guard = logging::init_logging(&settings.logging)?;
    debug!("{} starting", apex_portal::info());

    let services = ApiServices::from_settings(&settings)?;
    let handler = AuthExpiryHandler::new(Arc::new(TerminalNavigator));

    cli::execute(cli.command, &services, &handler).await
}

fn report(err: &anyhow::Error) {
    match err.downcast_ref::<ApexError>() {
        // Already reported by the navigator
        Some(ApexError::AuthExpired { .. }) => {}
        Some(apex) => {
            error!(error = %apex, severity = %apex.severity(), "Command failed");
            let fallback = match apex {
                ApexError::Authentication(_) | ApexError::InvalidInput(_) => apex.to_string(),
                _ => format!("{} ({})", GENERIC_FAILURE_MESSAGE, apex),
            };
            eprintln!("error: {}", apex.user_message(&fallback));
        }
        None => eprintln!("error: {:#}", err),
    }
}
