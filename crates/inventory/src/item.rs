use serde::{Deserialize, Serialize};

use stockwise_core::{DomainError, DomainResult, ItemId};

/// Stock item snapshot, as owned by the inventory state.
///
/// The reorder engine reads these records and never mutates them. Keys are
/// camelCase so records exported by the web client deserialize unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockItem {
    pub id: ItemId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Current on-hand count.
    pub quantity: f64,
    /// Configured reorder floor (minimum order size).
    pub min_quantity: f64,
    /// Estimated sales velocity, units per day.
    pub average_daily_sales: f64,
    /// Expected supplier lead time, in days.
    pub lead_time_days: f64,
}

impl StockItem {
    pub fn new(
        id: impl Into<ItemId>,
        quantity: f64,
        min_quantity: f64,
        average_daily_sales: f64,
        lead_time_days: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: None,
            quantity,
            min_quantity,
            average_daily_sales,
            lead_time_days,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Display name, when one is set and not blank.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().map(str::trim).filter(|n| !n.is_empty())
    }

    /// Schema-level validation.
    ///
    /// The reorder engine does not call this; it is the gate callers apply before
    /// handing records to the engine.
    pub fn validate(&self) -> DomainResult<()> {
        if self.id.is_blank() {
            return Err(DomainError::validation("id cannot be empty"));
        }

        let fields = [
            ("quantity", self.quantity),
            ("minQuantity", self.min_quantity),
            ("averageDailySales", self.average_daily_sales),
            ("leadTimeDays", self.lead_time_days),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(DomainError::validation(format!("{field} must be a finite number")));
            }
            if value < 0.0 {
                return Err(DomainError::validation(format!("{field} cannot be negative")));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_item() -> StockItem {
        StockItem::new("sku-1", 50.0, 10.0, 5.0, 3.0)
    }

    #[test]
    fn validate_accepts_well_formed_item() {
        assert!(valid_item().validate().is_ok());
    }

    #[test]
    fn validate_accepts_zero_sales_velocity() {
        let item = StockItem { average_daily_sales: 0.0, ..valid_item() };
        assert!(item.validate().is_ok());
    }

    #[test]
    fn validate_rejects_blank_id() {
        let item = StockItem { id: ItemId::new("  "), ..valid_item() };
        assert_eq!(
            item.validate().unwrap_err(),
            DomainError::validation("id cannot be empty")
        );
    }

    #[test]
    fn validate_rejects_negative_quantity() {
        let item = StockItem { quantity: -1.0, ..valid_item() };
        match item.validate().unwrap_err() {
            DomainError::Validation(msg) => assert!(msg.contains("quantity")),
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn validate_rejects_non_finite_sales() {
        let item = StockItem { average_daily_sales: f64::NAN, ..valid_item() };
        match item.validate().unwrap_err() {
            DomainError::Validation(msg) => assert!(msg.contains("averageDailySales")),
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn deserializes_camel_case_record() {
        let json = r#"{
            "id": "sku-9",
            "name": "Blue widget",
            "quantity": 12,
            "minQuantity": 10,
            "averageDailySales": 1.5,
            "leadTimeDays": 4
        }"#;
        let item: StockItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, ItemId::new("sku-9"));
        assert_eq!(item.display_name(), Some("Blue widget"));
        assert_eq!(item.min_quantity, 10.0);
        assert_eq!(item.average_daily_sales, 1.5);
    }

    #[test]
    fn blank_name_is_no_name() {
        assert_eq!(valid_item().display_name(), None);
        assert_eq!(valid_item().with_name(" ").display_name(), None);
        assert_eq!(valid_item().with_name(" Bolt ").display_name(), Some("Bolt"));
    }
}
