//! Monthly overview table

use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};

use crate::export::overview_columns;
use crate::models::MonthlySnapshot;

/// Format snapshots with one column per category
///
/// Columns follow the same order as the CSV export.
pub fn format_snapshot_table(
    snapshots: &[MonthlySnapshot],
    configured: &[String],
    symbol: &str,
) -> String {
    if snapshots.is_empty() {
        return "No snapshots recorded.".to_string();
    }

    // Only show categories that have money in at least one month
    let columns: Vec<String> = overview_columns(snapshots, configured)
        .into_iter()
        .filter(|c| snapshots.iter().any(|s| !s.amount_for(c).is_zero()))
        .collect();

    let mut builder = Builder::default();

    let mut header = vec!["Month".to_string(), "Income".to_string()];
    header.extend(columns.iter().cloned());
    header.push("Total".to_string());
    header.push("Savings".to_string());
    builder.push_record(header);

    for snapshot in snapshots {
        let mut row = vec![
            snapshot.month.clone(),
            snapshot.income.format_with_symbol(symbol),
        ];
        row.extend(
            columns
                .iter()
                .map(|c| snapshot.amount_for(c).format_with_symbol(symbol)),
        );
        row.push(snapshot.total_expenses().format_with_symbol(symbol));
        row.push(snapshot.savings().format_with_symbol(symbol));
        builder.push_record(row);
    }

    builder
        .build()
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .to_string()
}
