//! Reorder-point calculation engine.
//!
//! Model, per item (quantities in the item's own unit):
//! - safety stock = `ceil(sales/day × safety_stock_days)`
//! - reorder point = `ceil(sales/day × lead_time + safety_stock)`
//! - reorder quantity = `max(ceil(sales/day × (lead_time + coverage_buffer_days)), min_quantity)`
//! - runway = `floor((quantity - reorder_point) / sales/day)`
//!
//! Every call recomputes from the given snapshot; nothing is cached.

use serde::{Deserialize, Serialize};

use stockwise_core::ItemId;

use crate::item::StockItem;
use crate::policy::ReorderPolicy;

/// Reorder urgency, ordered by severity: `Critical < High < Medium < Low`.
///
/// Sorting ascending therefore puts the most urgent items first.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Critical,
    High,
    Medium,
    Low,
}

impl Urgency {
    pub const ALL: [Urgency; 4] = [Urgency::Critical, Urgency::High, Urgency::Medium, Urgency::Low];

    /// Sort rank: 0 for critical through 3 for low.
    pub fn rank(self) -> u8 {
        match self {
            Urgency::Critical => 0,
            Urgency::High => 1,
            Urgency::Medium => 2,
            Urgency::Low => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Urgency::Critical => "critical",
            Urgency::High => "high",
            Urgency::Medium => "medium",
            Urgency::Low => "low",
        }
    }
}

impl core::fmt::Display for Urgency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reorder recommendation for one item (derived, never persisted).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderCalculation {
    pub item_id: ItemId,
    /// Display name carried over from the item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub safety_stock: u64,
    pub reorder_point: u64,
    pub reorder_quantity: u64,
    /// Days until stock falls to the reorder point (negative once past it).
    ///
    /// `None` when the item has stock but no sales velocity: with no
    /// consumption the runway is not defined.
    pub days_until_reorder: Option<i64>,
    pub should_reorder: bool,
    pub urgency: Urgency,
}

impl ReorderCalculation {
    /// Critical or high urgency: worth a user-facing notification.
    pub fn needs_attention(&self) -> bool {
        matches!(self.urgency, Urgency::Critical | Urgency::High)
    }

    /// Label for display: `name (id)` when the item is named, the id otherwise.
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => format!("{name} ({})", self.item_id),
            None => self.item_id.to_string(),
        }
    }
}

/// Reorder engine parameterised by a [`ReorderPolicy`].
///
/// Stateless: an engine is a copy of its policy and nothing else, so one value can
/// be shared freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ReorderEngine {
    policy: ReorderPolicy,
}

impl ReorderEngine {
    pub fn new(policy: ReorderPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ReorderPolicy {
        &self.policy
    }

    /// Compute the reorder recommendation for a single item.
    pub fn calculate(&self, item: &StockItem) -> ReorderCalculation {
        let sales = item.average_daily_sales;
        let lead = item.lead_time_days;

        // `as` saturates: NaN and negatives land on 0, never panic.
        let safety_stock = (sales * self.policy.safety_stock_days).ceil() as u64;
        let reorder_point = (sales * lead + safety_stock as f64).ceil() as u64;
        let cover = (sales * (lead + self.policy.coverage_buffer_days)).ceil() as u64;
        let reorder_quantity = cover.max(item.min_quantity.ceil() as u64);

        let quantity = item.quantity;
        let days_until_reorder = if quantity > 0.0 {
            if sales.is_finite() && sales > 0.0 {
                Some(((quantity - reorder_point as f64) / sales).floor() as i64)
            } else {
                None
            }
        } else {
            Some(0)
        };

        let should_reorder = quantity <= reorder_point as f64;

        // Order matters: an empty item is critical whatever the thresholds are.
        let urgency = if quantity <= 0.0 {
            Urgency::Critical
        } else if quantity <= safety_stock as f64 {
            Urgency::High
        } else if quantity <= reorder_point as f64 {
            Urgency::Medium
        } else {
            Urgency::Low
        };

        ReorderCalculation {
            item_id: item.id.clone(),
            name: item.display_name().map(str::to_string),
            safety_stock,
            reorder_point,
            reorder_quantity,
            days_until_reorder,
            should_reorder,
            urgency,
        }
    }

    /// Calculate every item, preserving input order.
    pub fn calculate_bulk(&self, items: &[StockItem]) -> Vec<ReorderCalculation> {
        items.iter().map(|item| self.calculate(item)).collect()
    }

    /// Items that should be reordered, most urgent first.
    pub fn suggestions(&self, items: &[StockItem]) -> Vec<ReorderCalculation> {
        rank_by_urgency(self.calculate_bulk(items))
    }
}

/// [`ReorderEngine::calculate`] with the default policy.
pub fn calculate_reorder_point(item: &StockItem) -> ReorderCalculation {
    ReorderEngine::default().calculate(item)
}

/// [`ReorderEngine::calculate_bulk`] with the default policy.
pub fn calculate_bulk_reorder_points(items: &[StockItem]) -> Vec<ReorderCalculation> {
    ReorderEngine::default().calculate_bulk(items)
}

/// [`ReorderEngine::suggestions`] with the default policy.
pub fn get_reorder_suggestions(items: &[StockItem]) -> Vec<ReorderCalculation> {
    ReorderEngine::default().suggestions(items)
}

/// Keep calculations with `should_reorder` and sort them by urgency.
///
/// The sort is stable: equal urgencies keep their relative input order.
pub fn rank_by_urgency(
    calculations: impl IntoIterator<Item = ReorderCalculation>,
) -> Vec<ReorderCalculation> {
    let mut ranked: Vec<ReorderCalculation> = calculations
        .into_iter()
        .filter(|c| c.should_reorder)
        .collect();
    ranked.sort_by_key(|c| c.urgency.rank());
    ranked
}
