//! Application bootstrap and trigger surface.
//!
//! `MoonApp` owns the wiring: HTTP client → provider → cache →
//! orchestrator → presentation sink. Hosts invoke one of three triggers:
//!
//! - [`MoonApp::load_today`] — today's phase
//! - [`MoonApp::load_next_seven_days`] — tomorrow through seven days out
//! - [`MoonApp::load_custom_date`] — a user-supplied date
//!
//! Each trigger runs Idle → Loading → Completed: the sink's loading state
//! brackets the whole operation, results (including per-date failures) are
//! rendered when every date has one. Custom-date validation happens before
//! any loading signal or I/O.

mod bootstrap;
mod config;
mod error;

pub use bootstrap::MoonApp;
pub use config::AppConfig;
pub use error::AppError;
