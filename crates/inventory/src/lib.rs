//! Inventory domain module.
//!
//! This crate contains business rules for stock replenishment, implemented purely
//! as deterministic domain logic (no IO, no storage, no hidden state).

pub mod alert;
pub mod item;
pub mod policy;
pub mod reorder;

pub use alert::{ReorderAlert, ReorderSummary, reorder_alerts};
pub use item::StockItem;
pub use policy::ReorderPolicy;
pub use reorder::{
    ReorderCalculation, ReorderEngine, Urgency, calculate_bulk_reorder_points,
    calculate_reorder_point, get_reorder_suggestions, rank_by_urgency,
};
