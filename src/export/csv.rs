//! CSV export of monthly snapshots
//!
//! Produces one row per snapshot under the header
//! `Month,Income,<categories...>,Total Expenses,Savings`.

use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::models::MonthlySnapshot;

/// Category columns for the overview: configured categories first, then any
/// other category found in the snapshots, in first-seen order
pub fn overview_columns(snapshots: &[MonthlySnapshot], configured: &[String]) -> Vec<String> {
    let mut columns: Vec<String> = configured.to_vec();

    for snapshot in snapshots {
        for expense in &snapshot.expenses {
            if !columns.contains(&expense.category) {
                columns.push(expense.category.clone());
            }
        }
    }

    columns
}

/// Export snapshots to CSV
pub fn export_snapshots_csv<W: Write>(
    snapshots: &[MonthlySnapshot],
    configured: &[String],
    writer: W,
) -> TrackerResult<()> {
    let columns = overview_columns(snapshots, configured);
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    let mut header = vec!["Month".to_string(), "Income".to_string()];
    header.extend(columns.iter().cloned());
    header.push("Total Expenses".to_string());
    header.push("Savings".to_string());
    csv_writer.write_record(&header)?;

    for snapshot in snapshots {
        let mut row = vec![
            snapshot.month.clone(),
            snapshot.income.to_decimal_string(),
        ];
        row.extend(
            columns
                .iter()
                .map(|c| snapshot.amount_for(c).to_decimal_string()),
        );
        row.push(snapshot.total_expenses().to_decimal_string());
        row.push(snapshot.savings().to_decimal_string());
        csv_writer.write_record(&row)?;
    }

    csv_writer
        .flush()
        .map_err(|e| TrackerError::Export(e.to_string()))
}
