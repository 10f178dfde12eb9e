//! Persisted user settings.

use serde::{Deserialize, Serialize};

use stockwise_inventory::ReorderPolicy;

use crate::error::StorageResult;
use crate::kv::{KeyValueStore, load_json, save_json};

const SETTINGS_KEY: &str = "settings";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub reorder_policy: ReorderPolicy,
    /// Whether critical/high reorder alerts should be surfaced to the user.
    pub low_stock_alerts: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            reorder_policy: ReorderPolicy::default(),
            low_stock_alerts: true,
        }
    }
}

#[derive(Debug)]
pub struct SettingsStore<S>
where
    S: KeyValueStore,
{
    store: S,
}

impl<S> SettingsStore<S>
where
    S: KeyValueStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stored settings, or defaults when nothing has been saved yet.
    ///
    /// A stored value that does not parse, or carries an invalid policy, is an error.
    pub fn load(&self) -> StorageResult<Settings> {
        let settings: Settings = load_json(&self.store, SETTINGS_KEY)?.unwrap_or_default();
        settings.reorder_policy.validate()?;
        Ok(settings)
    }

    pub fn save(&self, settings: &Settings) -> StorageResult<()> {
        settings.reorder_policy.validate()?;
        save_json(&self.store, SETTINGS_KEY, settings)?;
        tracing::debug!(?settings, "settings saved");
        Ok(())
    }

    /// Load, modify, save; returns the saved settings.
    pub fn update(&self, f: impl FnOnce(&mut Settings)) -> StorageResult<Settings> {
        let mut settings = self.load()?;
        f(&mut settings);
        self.save(&settings)?;
        Ok(settings)
    }
}
