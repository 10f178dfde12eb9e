//! Append-only audit log kept in a [`KeyValueStore`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use stockwise_core::AuditEntryId;

use crate::error::StorageResult;
use crate::kv::{KeyValueStore, load_json, save_json};

const AUDIT_LOG_KEY: &str = "audit_log";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    Create,
    Update,
    Delete,
    AdjustStock,
    Reorder,
    Export,
    SettingsChange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    pub id: AuditEntryId,
    pub action: AuditAction,
    pub entity_type: String,
    pub entity_id: String,
    #[serde(default)]
    pub details: JsonValue,
    pub occurred_at: DateTime<Utc>,
}

impl AuditEntry {
    pub fn new(
        action: AuditAction,
        entity_type: impl Into<String>,
        entity_id: impl Into<String>,
        details: JsonValue,
    ) -> Self {
        Self {
            id: AuditEntryId::new(),
            action,
            entity_type: entity_type.into(),
            entity_id: entity_id.into(),
            details,
            occurred_at: Utc::now(),
        }
    }

    pub fn with_occurred_at(mut self, occurred_at: DateTime<Utc>) -> Self {
        self.occurred_at = occurred_at;
        self
    }
}

/// Audit log over an injected store.
///
/// Entries are kept oldest-first under a single key and capped at `max_entries`
/// (oldest dropped first).
#[derive(Debug)]
pub struct AuditLog<S>
where
    S: KeyValueStore,
{
    store: S,
    max_entries: usize,
}

impl<S> AuditLog<S>
where
    S: KeyValueStore,
{
    pub const DEFAULT_MAX_ENTRIES: usize = 1000;

    pub fn new(store: S) -> Self {
        Self {
            store,
            max_entries: Self::DEFAULT_MAX_ENTRIES,
        }
    }

    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries.max(1);
        self
    }

    /// Record a new entry stamped with the current time.
    pub fn record(
        &self,
        action: AuditAction,
        entity_type: impl Into<String>,
        entity_id: impl Into<String>,
        details: JsonValue,
    ) -> StorageResult<AuditEntry> {
        let entry = AuditEntry::new(action, entity_type, entity_id, details);
        self.append(entry.clone())?;
        Ok(entry)
    }

    /// Append a prepared entry (trims to `max_entries`).
    pub fn append(&self, entry: AuditEntry) -> StorageResult<()> {
        let mut entries = self.entries()?;
        let (action, entity_type, entity_id) =
            (entry.action, entry.entity_type.clone(), entry.entity_id.clone());

        entries.push(entry);
        if entries.len() > self.max_entries {
            let excess = entries.len() - self.max_entries;
            entries.drain(..excess);
        }

        save_json(&self.store, AUDIT_LOG_KEY, &entries)?;
        tracing::debug!(?action, %entity_type, %entity_id, "audit entry recorded");
        Ok(())
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> StorageResult<Vec<AuditEntry>> {
        Ok(load_json(&self.store, AUDIT_LOG_KEY)?.unwrap_or_default())
    }

    /// Number of stored entries.
    pub fn len(&self) -> StorageResult<usize> {
        Ok(self.entries()?.len())
    }

    pub fn is_empty(&self) -> StorageResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Up to `limit` entries, newest first.
    pub fn recent(&self, limit: usize) -> StorageResult<Vec<AuditEntry>> {
        Ok(self.entries()?.into_iter().rev().take(limit).collect())
    }

    /// Entries about one entity, oldest first.
    pub fn for_entity(&self, entity_type: &str, entity_id: &str) -> StorageResult<Vec<AuditEntry>> {
        Ok(self
            .entries()?
            .into_iter()
            .filter(|e| e.entity_type == entity_type && e.entity_id == entity_id)
            .collect())
    }

    pub fn clear(&self) -> StorageResult<()> {
        self.store.remove(AUDIT_LOG_KEY)
    }
}
