//! Views over reorder calculations for the alerting/reporting layer.

use serde::{Deserialize, Serialize};

use stockwise_core::ItemId;

use crate::reorder::{ReorderCalculation, Urgency};

/// User-facing reorder notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderAlert {
    pub item_id: ItemId,
    pub urgency: Urgency,
    pub reorder_quantity: u64,
    pub days_until_reorder: Option<i64>,
    pub message: String,
}

impl ReorderAlert {
    fn from_calculation(calc: &ReorderCalculation) -> Option<Self> {
        if !calc.should_reorder || !calc.needs_attention() {
            return None;
        }
        let condition = match calc.urgency {
            Urgency::Critical => "is out of stock",
            _ => "is below safety stock",
        };
        Some(Self {
            item_id: calc.item_id.clone(),
            urgency: calc.urgency,
            reorder_quantity: calc.reorder_quantity,
            days_until_reorder: calc.days_until_reorder,
            message: format!(
                "{} {condition}; reorder {} units",
                calc.label(),
                calc.reorder_quantity
            ),
        })
    }
}

/// Alerts for every calculation that should be reordered and is critical or high.
///
/// Input order is preserved; rank first with `get_reorder_suggestions` if the
/// alerts should come out most-urgent first.
pub fn reorder_alerts<'a>(
    calculations: impl IntoIterator<Item = &'a ReorderCalculation>,
) -> Vec<ReorderAlert> {
    calculations
        .into_iter()
        .filter_map(ReorderAlert::from_calculation)
        .collect()
}

/// Per-urgency counts for dashboards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderSummary {
    pub total: usize,
    pub to_reorder: usize,
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl ReorderSummary {
    pub fn from_calculations<'a>(
        calculations: impl IntoIterator<Item = &'a ReorderCalculation>,
    ) -> Self {
        calculations
            .into_iter()
            .fold(Self::default(), |mut summary, calc| {
                summary.total += 1;
                if calc.should_reorder {
                    summary.to_reorder += 1;
                }
                match calc.urgency {
                    Urgency::Critical => summary.critical += 1,
                    Urgency::High => summary.high += 1,
                    Urgency::Medium => summary.medium += 1,
                    Urgency::Low => summary.low += 1,
                }
                summary
            })
    }

    pub fn count(&self, urgency: Urgency) -> usize {
        match urgency {
            Urgency::Critical => self.critical,
            Urgency::High => self.high,
            Urgency::Medium => self.medium,
            Urgency::Low => self.low,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::StockItem;
    use crate::reorder::calculate_bulk_reorder_points;

    fn sample() -> Vec<ReorderCalculation> {
        calculate_bulk_reorder_points(&[
            StockItem::new("plenty", 500.0, 10.0, 5.0, 3.0),
            StockItem::new("empty", 0.0, 10.0, 5.0, 3.0),
            StockItem::new("medium", 45.0, 10.0, 5.0, 3.0),
            StockItem::new("low-buffer", 30.0, 10.0, 5.0, 3.0),
        ])
    }

    #[test]
    fn alerts_cover_critical_and_high_only() {
        let alerts = reorder_alerts(&sample());
        assert_eq!(alerts.len(), 2);

        assert_eq!(alerts[0].item_id, ItemId::new("empty"));
        assert_eq!(alerts[0].urgency, Urgency::Critical);
        assert_eq!(alerts[0].message, "empty is out of stock; reorder 85 units");

        assert_eq!(alerts[1].item_id, ItemId::new("low-buffer"));
        assert_eq!(alerts[1].urgency, Urgency::High);
        assert_eq!(alerts[1].message, "low-buffer is below safety stock; reorder 85 units");
        assert_eq!(alerts[1].days_until_reorder, Some(-4));
    }

    #[test]
    fn alert_message_uses_item_name() {
        let calcs = calculate_bulk_reorder_points(&[
            StockItem::new("sku-77", 0.0, 1.0, 1.0, 1.0).with_name("Blue widget"),
        ]);
        let alerts = reorder_alerts(&calcs);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].item_id, ItemId::new("sku-77"));
        assert_eq!(
            alerts[0].message,
            "Blue widget (sku-77) is out of stock; reorder 15 units"
        );
    }

    #[test]
    fn no_alerts_for_healthy_stock() {
        let calcs = calculate_bulk_reorder_points(&[StockItem::new("ok", 100.0, 1.0, 1.0, 1.0)]);
        assert!(reorder_alerts(&calcs).is_empty());
    }

    #[test]
    fn summary_counts_each_urgency() {
        let summary = ReorderSummary::from_calculations(&sample());
        assert_eq!(summary.total, 4);
        assert_eq!(summary.to_reorder, 3);
        assert_eq!(summary.count(Urgency::Critical), 1);
        assert_eq!(summary.count(Urgency::High), 1);
        assert_eq!(summary.count(Urgency::Medium), 1);
        assert_eq!(summary.count(Urgency::Low), 1);
    }

    #[test]
    fn summary_of_nothing_is_zero() {
        assert_eq!(ReorderSummary::from_calculations(&Vec::<ReorderCalculation>::new()), ReorderSummary::default());
    }
}
