//! `stockwise-storage`
//!
//! **Responsibility:** local key/value persistence as an injected capability.
//!
//! Nothing in here is a process-wide singleton: callers construct a store and hand
//! it to the audit log or settings store that needs it. The reorder engine never
//! touches this crate.

pub mod audit;
pub mod error;
pub mod file;
pub mod kv;
pub mod settings;

pub use audit::{AuditAction, AuditEntry, AuditLog};
pub use error::{StorageError, StorageResult};
pub use file::JsonFileStore;
pub use kv::{InMemoryStore, KeyValueStore, load_json, save_json};
pub use settings::{Settings, SettingsStore};
