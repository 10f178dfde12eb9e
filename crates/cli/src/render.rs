//! Plain-text and JSON output.

use std::io::Write;

use serde::Serialize;

use stockwise_inventory::{ReorderAlert, ReorderCalculation, ReorderSummary, Urgency};
use stockwise_storage::AuditEntry;

use crate::args::OutputFormat;

pub fn json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn days(days: Option<i64>) -> String {
    days.map_or_else(|| "-".to_string(), |d| d.to_string())
}

pub fn calculations<W: Write>(
    out: &mut W,
    calculations: &[ReorderCalculation],
    format: OutputFormat,
) -> anyhow::Result<()> {
    if format == OutputFormat::Json {
        return json(out, calculations);
    }

    writeln!(
        out,
        "{:<20} {:<9} {:>7} {:>8} {:>8} {:>9} {:>6}",
        "ITEM", "URGENCY", "REORDER", "SAFETY", "POINT", "QUANTITY", "DAYS"
    )?;
    for c in calculations {
        writeln!(
            out,
            "{:<20} {:<9} {:>7} {:>8} {:>8} {:>9} {:>6}",
            c.label(),
            c.urgency.as_str(),
            if c.should_reorder { "yes" } else { "no" },
            c.safety_stock,
            c.reorder_point,
            c.reorder_quantity,
            days(c.days_until_reorder),
        )?;
    }
    Ok(())
}

pub fn alerts<W: Write>(out: &mut W, alerts: &[ReorderAlert], format: OutputFormat) -> anyhow::Result<()> {
    if format == OutputFormat::Json {
        return json(out, alerts);
    }
    if alerts.is_empty() {
        writeln!(out, "no reorder alerts")?;
    }
    for alert in alerts {
        writeln!(out, "[{}] {}", alert.urgency, alert.message)?;
    }
    Ok(())
}

pub fn summary<W: Write>(out: &mut W, summary: &ReorderSummary, format: OutputFormat) -> anyhow::Result<()> {
    if format == OutputFormat::Json {
        return json(out, summary);
    }
    writeln!(out, "items: {}  to reorder: {}", summary.total, summary.to_reorder)?;
    for urgency in Urgency::ALL {
        writeln!(out, "  {:<9} {}", urgency.as_str(), summary.count(urgency))?;
    }
    Ok(())
}

/// Audit entries, newest first; `total` is the size of the whole log.
pub fn audit_entries<W: Write>(out: &mut W, entries: &[AuditEntry], total: usize) -> anyhow::Result<()> {
    if total == 0 {
        writeln!(out, "audit log is empty")?;
    } else if entries.is_empty() {
        writeln!(out, "no entries shown ({total} in log)")?;
    }
    for e in entries {
        writeln!(
            out,
            "{} {:?} {}/{} {}",
            e.occurred_at.to_rfc3339(),
            e.action,
            e.entity_type,
            e.entity_id,
            e.details
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockwise_inventory::{StockItem, calculate_bulk_reorder_points};

    fn render_table(calcs: &[ReorderCalculation]) -> String {
        let mut buf = Vec::new();
        calculations(&mut buf, calcs, OutputFormat::Table).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn table_has_header_and_one_row_per_item() {
        let calcs = calculate_bulk_reorder_points(&[
            StockItem::new("sku-1", 50.0, 10.0, 5.0, 3.0),
            StockItem::new("idle", 40.0, 5.0, 0.0, 3.0),
        ]);
        let text = render_table(&calcs);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ITEM"));
        assert!(lines[1].starts_with("sku-1"));
        assert!(lines[1].contains("medium"));
        assert!(lines[2].trim_end().ends_with('-'));
    }

    #[test]
    fn table_shows_item_name_with_id() {
        let calcs = calculate_bulk_reorder_points(&[
            StockItem::new("sku-77", 0.0, 1.0, 1.0, 1.0).with_name("Blue widget"),
        ]);
        let text = render_table(&calcs);
        assert!(text.lines().nth(1).unwrap().starts_with("Blue widget (sku-77)"));
    }

    #[test]
    fn audit_listing_distinguishes_empty_log_from_zero_limit() {
        let mut buf = Vec::new();
        audit_entries(&mut buf, &[], 0).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap().trim(), "audit log is empty");

        let mut buf = Vec::new();
        audit_entries(&mut buf, &[], 4).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap().trim(), "no entries shown (4 in log)");
    }

    #[test]
    fn json_output_is_an_array() {
        let calcs = calculate_bulk_reorder_points(&[StockItem::new("sku-1", 0.0, 1.0, 1.0, 1.0)]);
        let mut buf = Vec::new();
        calculations(&mut buf, &calcs, OutputFormat::Json).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(v[0]["urgency"], "critical");
    }
}
