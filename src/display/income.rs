//! Side income display formatting

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::IncomeEntry;

use super::report::format_entry_date;

#[derive(Tabled)]
struct IncomeRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Source")]
    source: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format the income log as a table, oldest entry first
pub fn format_income_list(entries: &[IncomeEntry], symbol: &str, date_format: &str) -> String {
    if entries.is_empty() {
        return "No side income logged.".to_string();
    }

    let rows = entries.iter().map(|e| IncomeRow {
        date: format_entry_date(e.date, date_format),
        source: e.source.clone(),
        amount: e.amount.format_with_symbol(symbol),
    });

    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::single(2)).with(Alignment::right()))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    #[test]
    fn test_empty_income_list() {
        assert_eq!(format_income_list(&[], "$", "%Y-%m-%d"), "No side income logged.");
    }

    #[test]
    fn test_income_list_table() {
        let entries = vec![
            IncomeEntry::new(
                NaiveDate::from_ymd_opt(2026, 2, 3).unwrap(),
                "Tutoring, evenings",
                Money::from_cents(4000),
            )
            .unwrap(),
            IncomeEntry {
                date: None,
                source: "freelance".into(),
                amount: Money::from_cents(125050),
            },
        ];

        let output = format_income_list(&entries, "€", "%d.%m.%Y");
        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[0].starts_with('╭'));
        assert!(lines[1].contains("Date") && lines[1].contains("Source"));
        assert!(output.contains("03.02.2026"));
        assert!(output.contains("Tutoring, evenings"));
        assert!(output.contains("unknown"));
        assert!(output.contains("€1250.50"));
        // every row has the same rendered width
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|l| l.chars().count() == width));
    }
}
