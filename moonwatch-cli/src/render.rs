//! Terminal presentation adapter.
//!
//! Implements the library's [`PresentationSink`] for an interactive
//! terminal: a spinner while an operation is loading, one line per result
//! once it completes. Failures are rendered in red with their reason;
//! batches print in the order the dates were submitted.

use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use parking_lot::Mutex;

use moonwatch::orchestrator::FetchResult;
use moonwatch::presentation::PresentationSink;

/// Presentation sink for an interactive terminal.
pub struct TerminalSink {
    spinner: Mutex<Option<ProgressBar>>,
}

impl TerminalSink {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    /// One output line per result.
    fn format_result(result: &FetchResult) -> String {
        match &result.outcome {
            Ok(record) => {
                let cached = if result.from_cache {
                    format!("  {}", style("(cached)").dim())
                } else {
                    String::new()
                };
                format!(
                    "{}  {}  {}{}",
                    record.phase_emoji,
                    style(&result.date).bold(),
                    record.phase,
                    cached
                )
            }
            Err(error) => format!(
                "{}  {}  {}",
                style("✗").red(),
                style(&result.date).bold(),
                style(error).red()
            ),
        }
    }

    /// Print a line, above the spinner if one is running.
    fn print_line(&self, line: String) {
        match &*self.spinner.lock() {
            Some(spinner) => spinner.println(line),
            None => println!("{}", line),
        }
    }
}

impl Default for TerminalSink {
    fn default() -> Self {
        Self::new()
    }
}

impl PresentationSink for TerminalSink {
    fn loading_started(&self) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message("Fetching moon phases...");
        spinner.enable_steady_tick(Duration::from_millis(100));
        *self.spinner.lock() = Some(spinner);
    }

    fn loading_ended(&self) {
        if let Some(spinner) = self.spinner.lock().take() {
            spinner.finish_and_clear();
        }
    }

    fn render_one(&self, result: &FetchResult) {
        self.print_line(Self::format_result(result));
    }

    fn render_many(&self, results: &[FetchResult]) {
        for result in results {
            self.print_line(Self::format_result(result));
        }
    }
}
