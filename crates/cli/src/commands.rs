use std::fs;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use serde_json::json;
use tracing::{info, warn};

use stockwise_inventory::{ReorderEngine, ReorderSummary, StockItem, reorder_alerts};
use stockwise_storage::{AuditAction, AuditLog, JsonFileStore, SettingsStore};

use crate::args::{Cli, Command, ItemsArgs, SettingsCommand};
use crate::render;

const STORE_FILE: &str = "stockwise.json";

/// Load stock items from a JSON array, skipping (and logging) invalid records.
pub fn load_items(path: &Path) -> anyhow::Result<Vec<StockItem>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read items file {}", path.display()))?;
    let items: Vec<StockItem> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse items file {}", path.display()))?;

    let total = items.len();
    let valid: Vec<StockItem> = items
        .into_iter()
        .filter(|item| match item.validate() {
            Ok(()) => true,
            Err(err) => {
                warn!(item_id = %item.id, error = %err, "skipping invalid stock item");
                false
            }
        })
        .collect();

    info!(path = %path.display(), total, valid = valid.len(), "loaded stock items");
    Ok(valid)
}

/// Execute one CLI invocation, writing user-facing output to `out`.
pub fn run<W: Write>(cli: Cli, out: &mut W) -> anyhow::Result<()> {
    let store_path = cli.data_dir.join(STORE_FILE);
    let store = Arc::new(
        JsonFileStore::open(&store_path)
            .with_context(|| format!("failed to open data store {}", store_path.display()))?,
    );
    let settings_store = SettingsStore::new(store.clone());
    let audit = AuditLog::new(store);

    let settings = settings_store.load().context("failed to load settings")?;
    let engine = ReorderEngine::new(settings.reorder_policy);

    match cli.command {
        Command::Calculate(ItemsArgs { items, format }) => {
            let items = load_items(&items)?;
            render::calculations(out, &engine.calculate_bulk(&items), format)
        }
        Command::Suggest(ItemsArgs { items: path, format }) => {
            let items = load_items(&path)?;
            let suggestions = engine.suggestions(&items);
            audit
                .record(
                    AuditAction::Reorder,
                    "report",
                    "suggestions",
                    json!({
                        "items": path.display().to_string(),
                        "suggested": suggestions.len(),
                    }),
                )
                .context("failed to record audit entry")?;
            render::calculations(out, &suggestions, format)
        }
        Command::Alerts(ItemsArgs { items, format }) => {
            if !settings.low_stock_alerts {
                info!("low stock alerts are disabled in settings");
                return render::alerts(out, &[], format);
            }
            let items = load_items(&items)?;
            let alerts = reorder_alerts(&engine.suggestions(&items));
            render::alerts(out, &alerts, format)
        }
        Command::Summary(ItemsArgs { items, format }) => {
            let items = load_items(&items)?;
            let summary = ReorderSummary::from_calculations(&engine.calculate_bulk(&items));
            render::summary(out, &summary, format)
        }
        Command::Audit { limit } => {
            let total = audit.len().context("failed to read audit log")?;
            let entries = audit.recent(limit).context("failed to read audit log")?;
            render::audit_entries(out, &entries, total)
        }
        Command::Settings(SettingsCommand::Show) => render::json(out, &settings),
        Command::Settings(SettingsCommand::Set {
            safety_stock_days,
            coverage_buffer_days,
            low_stock_alerts,
        }) => {
            let updated = settings_store
                .update(|s| {
                    if let Some(days) = safety_stock_days {
                        s.reorder_policy.safety_stock_days = days;
                    }
                    if let Some(days) = coverage_buffer_days {
                        s.reorder_policy.coverage_buffer_days = days;
                    }
                    if let Some(enabled) = low_stock_alerts {
                        s.low_stock_alerts = enabled;
                    }
                })
                .context("failed to save settings")?;
            audit
                .record(
                    AuditAction::SettingsChange,
                    "settings",
                    "settings",
                    serde_json::to_value(&updated)?,
                )
                .context("failed to record audit entry")?;
            render::json(out, &updated)
        }
    }
}
