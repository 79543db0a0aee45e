//! Phase lookup commands: today, week, and custom date.

use std::sync::Arc;

use moonwatch::app::{AppConfig, MoonApp};
use moonwatch::config::ConfigFile;

use crate::error::CliError;
use crate::render::TerminalSink;

/// Which lookup the user asked for.
pub enum Lookup {
    /// Today's phase.
    Today,
    /// Tomorrow through seven days out.
    Week,
    /// A specific date, as typed by the user.
    Date(String),
}

/// Run a phase lookup against the configured API and cache.
pub async fn run(lookup: Lookup) -> Result<(), CliError> {
    let config = ConfigFile::load()?;
    let app_config = AppConfig::from_config_file(&config)?;
    let app = MoonApp::start(app_config, Arc::new(TerminalSink::new()))?;

    match lookup {
        Lookup::Today => app.load_today().await,
        Lookup::Week => app.load_next_seven_days().await,
        Lookup::Date(raw) => app.load_custom_date(&raw).await?,
    }

    Ok(())
}
