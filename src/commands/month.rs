use anyhow::{Context, Result};
use chorecal_core::DateRange;
use chorecal_core::date::{is_same_month, is_today, month_days, month_name, today};
use chorecal_core::store::group_by_date;
use chrono::{Datelike, NaiveDate};
use owo_colors::OwoColorize;

use super::Store;
use crate::render::{paint, render_chore};

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub fn run(store: &Store, month: Option<&str>) -> Result<()> {
    let reference = match month {
        Some(s) => parse_month(s)?,
        None => today().with_day(1).context("Could not determine the current month")?,
    };

    let days = month_days(reference.year(), reference.month())?;
    let window = DateRange::visible_window(reference.year(), reference.month())?;
    let by_date = group_by_date(store.chores_for_date_range(window));

    let title = format!(
        "{} {}",
        month_name(reference.month()).unwrap_or_default(),
        reference.year()
    );
    println!("{}", title.bold());

    for week in days.chunks(7) {
        println!();
        println!("{}", render_week_header(week, reference));

        for day in week {
            let Some(chores) = by_date.get(day) else {
                continue;
            };

            for chore in chores {
                let assignee = store.team_member(&chore.assignee_id);
                let dot = match assignee {
                    Some(member) => paint("●", &member.color),
                    None => "●".dimmed().to_string(),
                };
                println!(
                    "  {} {} {}",
                    dot,
                    day.format("%a %-d").dimmed(),
                    render_chore(chore, assignee)
                );
            }
        }
    }

    Ok(())
}

/// A week row: weekday names with day numbers, today highlighted and
/// days outside the month dimmed.
fn render_week_header(week: &[NaiveDate], reference: NaiveDate) -> String {
    week.iter()
        .zip(WEEKDAYS)
        .map(|(day, weekday)| {
            let cell = format!("{} {:>2}", weekday, day.day());
            if is_today(*day) {
                cell.reversed().bold().to_string()
            } else if is_same_month(*day, reference) {
                cell
            } else {
                cell.dimmed().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Parse "YYYY-MM" into the first day of that month.
fn parse_month(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
        .with_context(|| format!("Invalid month '{}'. Expected YYYY-MM", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_year_month() {
        assert_eq!(
            parse_month("2024-02").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
        );
        assert!(parse_month("2024-13").is_err());
        assert!(parse_month("february").is_err());
    }
}
