use anyhow::Result;
use chorecal_core::DateRange;
use chorecal_core::date::today;
use chorecal_core::store::group_by_date;
use chrono::NaiveDate;
use owo_colors::OwoColorize;

use super::Store;
use crate::render::render_chore;

pub fn run(store: &Store, from: Option<&str>, to: Option<&str>) -> Result<()> {
    let range = DateRange::from_args(from, to)?;

    if range.is_empty() {
        anyhow::bail!("--from {} is after --to {}", range.start, range.end);
    }

    let by_date = group_by_date(store.chores_for_date_range(range));

    if by_date.is_empty() {
        println!("{}", "No chores found".dimmed());
        return Ok(());
    }

    for (i, (date, chores)) in by_date.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", format_date_label(*date).bold());

        for chore in chores {
            let assignee = store.team_member(&chore.assignee_id);
            println!("  {} {}", render_chore(chore, assignee), chore.id.dimmed());
        }
    }

    Ok(())
}

/// Format a date as a human-readable label (e.g. "Today", "Tomorrow", "Wed Feb 25")
fn format_date_label(date: NaiveDate) -> String {
    let diff = (date - today()).num_days();
    match diff {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%a %b %-d").to_string(),
    }
}
