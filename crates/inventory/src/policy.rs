use serde::{Deserialize, Serialize};

use stockwise_core::{DomainError, DomainResult};

/// Buffer constants of the reorder model.
///
/// `ReorderPolicy::default()` is the standard model: a 7-day safety stock and a
/// 2-week coverage buffer on top of the lead time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReorderPolicy {
    /// Days of sales held back as safety stock.
    pub safety_stock_days: f64,
    /// Days of sales an order should cover beyond the lead time.
    pub coverage_buffer_days: f64,
}

impl ReorderPolicy {
    pub const DEFAULT_SAFETY_STOCK_DAYS: f64 = 7.0;
    pub const DEFAULT_COVERAGE_BUFFER_DAYS: f64 = 14.0;

    pub fn new(safety_stock_days: f64, coverage_buffer_days: f64) -> DomainResult<Self> {
        let policy = Self {
            safety_stock_days,
            coverage_buffer_days,
        };
        policy.validate()?;
        Ok(policy)
    }

    pub fn validate(&self) -> DomainResult<()> {
        if !(self.safety_stock_days.is_finite() && self.safety_stock_days >= 0.0) {
            return Err(DomainError::validation(
                "safetyStockDays must be a finite non-negative number",
            ));
        }
        if !(self.coverage_buffer_days.is_finite() && self.coverage_buffer_days >= 0.0) {
            return Err(DomainError::validation(
                "coverageBufferDays must be a finite non-negative number",
            ));
        }
        Ok(())
    }
}

impl Default for ReorderPolicy {
    fn default() -> Self {
        Self {
            safety_stock_days: Self::DEFAULT_SAFETY_STOCK_DAYS,
            coverage_buffer_days: Self::DEFAULT_COVERAGE_BUFFER_DAYS,
        }
    }
}
