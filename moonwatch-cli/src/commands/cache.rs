//! Cache management CLI commands.
//!
//! Entries never expire on their own, so `cache clear` is the way to force
//! a refetch.

use clap::Subcommand;
use moonwatch::cache::{JsonFileCache, PhaseCache};
use moonwatch::config::ConfigFile;

use crate::error::CliError;

/// Cache action subcommands.
#[derive(Debug, Subcommand)]
pub enum CacheAction {
    /// Show the cache file location and entry count
    Stats,
    /// Delete the cache file, removing all stored phases
    Clear,
}

/// Run a cache subcommand.
pub fn run(action: CacheAction) -> Result<(), CliError> {
    let config = ConfigFile::load().unwrap_or_default();
    let cache_file = &config.cache.file;

    match action {
        CacheAction::Stats => {
            let cache = JsonFileCache::open(cache_file)?;
            println!("Phase cache: {}", cache.path().display());
            println!("  Entries: {}", cache.len());
            Ok(())
        }
        CacheAction::Clear => {
            let cache = JsonFileCache::open(cache_file)?;
            let entries = cache.len();
            cache.clear()?;
            println!(
                "Cleared {} cached phase{} at {}",
                entries,
                if entries == 1 { "" } else { "s" },
                cache.path().display()
            );
            Ok(())
        }
    }
}
