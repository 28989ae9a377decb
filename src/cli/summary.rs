//! Overall spending summary command

use crate::config::settings::Settings;
use crate::display::format_category_totals;
use crate::error::{TrackerError, TrackerResult};
use crate::models::snapshot::{month_bounds, parse_year_month};
use crate::services::AggregationService;
use crate::storage::Storage;

/// Print category totals across every budget, optionally for one month
pub fn handle_summary_command(
    storage: &Storage,
    settings: &Settings,
    month: Option<String>,
) -> TrackerResult<()> {
    let service = AggregationService::new(storage);

    let (title, totals) = match month {
        Some(month) => {
            let (start, end) = parse_year_month(&month)
                .and_then(|(y, m)| month_bounds(y, m))
                .ok_or_else(|| {
                    TrackerError::Validation(format!(
                        "Invalid month '{}', expected YYYY-MM",
                        month
                    ))
                })?;
            (
                format!("Spending across all budgets, {}", start.format("%B %Y")),
                service.overall_summary_between(start, end)?,
            )
        }
        None => (
            "Spending across all budgets".to_string(),
            service.overall_summary()?,
        ),
    };

    print!(
        "{}",
        format_category_totals(&title, &totals, &settings.currency_symbol)
    );
    Ok(())
}
