//! Category and income summary formatting

use crate::models::{CategoryTotals, IncomeSummary};

use super::report::{format_bar, format_percentage, separator, truncate};

const BAR_WIDTH: usize = 20;

/// Format category totals with their share of the grand total
pub fn format_category_totals(title: &str, totals: &CategoryTotals, symbol: &str) -> String {
    let name_width = totals
        .iter()
        .map(|(c, _)| c.chars().count().min(24))
        .max()
        .unwrap_or(8)
        .max(8);

    let grand_total = totals.grand_total();
    let positive_total: f64 = totals
        .iter()
        .filter(|(_, a)| a.is_positive())
        .map(|(_, a)| a.as_f64())
        .sum();

    let mut output = String::new();
    output.push_str(&format!("{}\n", title));
    output.push_str(&separator(name_width + BAR_WIDTH + 28));
    output.push('\n');

    for (category, amount) in totals.iter() {
        let share = if positive_total > 0.0 && amount.is_positive() {
            amount.as_f64() / positive_total * 100.0
        } else {
            0.0
        };

        output.push_str(&format!(
            "{:<name_width$}  {:>12}  {}  {:>6}\n",
            truncate(category, 24),
            amount.format_with_symbol(symbol),
            format_bar(amount.as_f64(), positive_total, BAR_WIDTH),
            format_percentage(share),
            name_width = name_width,
        ));
    }

    output.push_str(&separator(name_width + BAR_WIDTH + 28));
    output.push('\n');
    output.push_str(&format!(
        "{:<name_width$}  {:>12}\n",
        "Total",
        grand_total.format_with_symbol(symbol),
        name_width = name_width,
    ));

    if totals.skipped_records > 0 {
        output.push_str(&format!(
            "\nNote: {} unreadable record(s) were skipped.\n",
            totals.skipped_records
        ));
    }

    output
}

/// Format base salary and side income
pub fn format_income_summary(summary: &IncomeSummary, symbol: &str) -> String {
    let salary = match summary.base_salary {
        Some(amount) => amount.format_with_symbol(symbol),
        None => "not set".to_string(),
    };

    let mut output = String::new();
    output.push_str(&format!("  Base salary:  {:>12}\n", salary));
    output.push_str(&format!(
        "  Side income:  {:>12}\n",
        summary.side_income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Total:        {:>12}\n",
        summary.total().format_with_symbol(symbol)
    ));
    output
}
