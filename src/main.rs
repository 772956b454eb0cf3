//! Contact Book - Main entry point
//!
//! Runs the contact form and list as a command shell over stdin/stdout.

use anyhow::Result;
use contact_book::shell::{run_shell, Session};
use contact_book::{Config, ContactRepository};
use tokio::io::{stdin, stdout, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config_result = Config::from_env();
    let default_level = config_result
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "warn".to_string());

    // Logs go to stderr, stdout is reserved for command replies
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config_result {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        trim_name = config.trim_name,
        reset_form_on_delete = config.reset_form_on_delete,
        id_strategy = ?config.id_strategy,
        "Starting contact book shell"
    );

    let mut session = Session::from_config(&config);
    run_shell(&mut session, BufReader::new(stdin()), stdout()).await?;

    info!(
        contacts = session.store().contacts().len(),
        "Contact book shutdown complete"
    );
    Ok(())
}
