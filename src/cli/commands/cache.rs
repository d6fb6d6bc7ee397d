//! Cache command implementation.
//!
//! Provides `skycast cache info`, `skycast cache clear` and
//! `skycast cache remove`.

use chrono::Utc;
use clap::{Args, Subcommand};
use serde_json::json;

use crate::cache::{format_age, CacheStore};
use crate::cli::context::AppContext;
use crate::error::{Result, SkycastError};
use crate::location::LocationKey;
use crate::ui::{hints, Prompt, Table, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// Arguments for the cache command.
#[derive(Debug, Clone, Args)]
pub struct CacheArgs {
    #[command(subcommand)]
    pub command: CacheSubcommand,
}

/// Cache subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum CacheSubcommand {
    /// Show cached locations and their age.
    Info {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Clear the cache.
    Clear {
        /// Don't prompt for confirmation.
        #[arg(short, long)]
        force: bool,
    },
    /// Remove one cached location by key (as shown by `cache info`).
    Remove {
        /// Cache key, e.g. "45.815,15.982".
        key: String,
    },
}

/// The cache command implementation.
pub struct CacheCommand<'a> {
    context: &'a AppContext,
    args: CacheArgs,
}

impl<'a> CacheCommand<'a> {
    /// Create a new cache command.
    pub fn new(context: &'a AppContext, args: CacheArgs) -> Self {
        Self { context, args }
    }
}

impl Command for CacheCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let store = self.context.cache_store();

        match &self.args.command {
            CacheSubcommand::Info { json } => {
                show_info(&store, self.context.settings.ttl()?, *json, ui)
            }
            CacheSubcommand::Clear { force } => clear_cache(&store, *force, ui),
            CacheSubcommand::Remove { key } => remove_entry(&store, key, ui),
        }
    }
}

fn show_info(
    store: &CacheStore,
    ttl: chrono::Duration,
    json: bool,
    ui: &mut dyn UserInterface,
) -> Result<CommandResult> {
    let now = Utc::now();
    let entries = store.list();

    if json {
        let rows: Vec<_> = entries
            .iter()
            .map(|e| {
                json!({
                    "key": e.key,
                    "location": e.location.display_name(),
                    "fetched_at": e.fetched_at,
                    "fresh": e.is_fresh(now, ttl),
                })
            })
            .collect();
        let value = json!({
            "path": store.path(),
            "size_bytes": store.size_bytes(),
            "entries": rows,
        });
        let out =
            serde_json::to_string_pretty(&value).map_err(|e| SkycastError::Other(e.into()))?;
        ui.data(&out);
        return Ok(CommandResult::success());
    }

    ui.show_header("Forecast cache");
    ui.show_field("Location", &store.path().display().to_string());
    ui.show_field("Size", &format!("{} bytes", store.size_bytes()));
    ui.show_field("Entries", &entries.len().to_string());

    if entries.is_empty() {
        ui.message("");
        ui.message("Cache is empty");
        return Ok(CommandResult::success());
    }

    let mut table = Table::new(vec!["Key", "Location", "Fetched", "Status"]);
    for entry in &entries {
        let status = if entry.is_fresh(now, ttl) {
            "fresh"
        } else {
            "stale"
        };
        table.add_row(&[
            entry.key.to_string(),
            entry.location.display_name(),
            format_age(entry.age(now)),
            status.to_string(),
        ]);
    }
    ui.message("");
    ui.message(&table.render());

    Ok(CommandResult::success())
}

fn clear_cache(
    store: &CacheStore,
    force: bool,
    ui: &mut dyn UserInterface,
) -> Result<CommandResult> {
    let count = store.list().len();
    if count == 0 && !store.path().exists() {
        ui.message("Cache is already empty");
        return Ok(CommandResult::success());
    }

    if !force {
        let prompt = Prompt::confirm(
            "clear_cache",
            format!("Clear {} cached forecasts?", count),
            false,
        );
        if !ui.prompt(&prompt)?.as_bool() {
            ui.message("Cancelled");
            return Ok(CommandResult::success());
        }
    }

    let cleared = store.clear()?;
    ui.success(&format!("Cleared {} entries", cleared));
    ui.show_hint(hints::after_cache_clear());
    Ok(CommandResult::success())
}

fn remove_entry(
    store: &CacheStore,
    key: &str,
    ui: &mut dyn UserInterface,
) -> Result<CommandResult> {
    let key = LocationKey::new(key.trim());
    if store.remove(&key)? {
        ui.success(&format!("Removed {}", key));
        Ok(CommandResult::success())
    } else {
        ui.warning(&format!("No cache entry for {}", key));
        Ok(CommandResult::failure(1))
    }
}
