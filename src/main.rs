use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod domain;
mod services;

pub use cli::*;
pub use commands::*;
pub use domain::catalog::Catalog;
pub use domain::constants::*;
pub use domain::models::*;
pub use domain::unit_type::{unit_type_table, UnitType};
pub use services::classify::{describe, detect_unit_type};
pub use services::editor::{check_catalog, Document};
pub use services::output::{print_line, print_one, print_out};
pub use services::session::{Action, ActionKind, Dispatcher, EditorSession, Outcome};
pub use services::storage::{audit, load_config, load_unit, resolve_save_name, save_unit};
pub use services::validate::{validate_directive, DirectiveRule};

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    tracing::debug!("command: {:?}", cli.command);

    if handle_catalog_commands(&cli)? {
        return Ok(());
    }
    if handle_edit_commands(&cli, &config)? {
        return Ok(());
    }
    handle_session_command(&cli, &config)?;
    Ok(())
}
