//! Recurrence expansion for repeating chores.
//!
//! Expands a base chore into the occurrences that fall within a date range.
//! Occurrences are computed on demand and never stored.

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::chore::{Chore, Recurrence};
use crate::date_range::DateRange;

/// Step from one occurrence date to the next.
///
/// Returns `None` for non-recurring chores, or when the next date would fall
/// outside chrono's representable range.
///
/// Monthly steps keep the day of month and let days missing from the target
/// month overflow into the month after it: Jan 31 steps to Mar 2 in a leap
/// year and to Mar 3 otherwise. Later steps continue from the overflowed date.
pub fn next_occurrence(date: NaiveDate, recurrence: Recurrence) -> Option<NaiveDate> {
    match recurrence {
        Recurrence::None => None,
        Recurrence::Daily => date.checked_add_days(Days::new(1)),
        Recurrence::Weekly => date.checked_add_days(Days::new(7)),
        Recurrence::Monthly => add_month_overflowing(date),
    }
}

fn add_month_overflowing(date: NaiveDate) -> Option<NaiveDate> {
    let first_of_next = date.with_day(1)?.checked_add_months(Months::new(1))?;
    first_of_next.checked_add_days(Days::new(u64::from(date.day0())))
}

/// Lazy iterator over the occurrences of one base chore within a range.
///
/// Yields occurrences in strictly increasing date order and never yields the
/// base chore's own date; the base chore is surfaced by the store instead.
pub struct Occurrences<'a> {
    base: &'a Chore,
    end: NaiveDate,
    cursor: Option<NaiveDate>,
}

impl<'a> Occurrences<'a> {
    pub fn new(base: &'a Chore, range: DateRange) -> Self {
        let mut cursor = base.recurrence.is_recurring().then_some(base.date);

        // Walk forward to the first date on or after the range start
        while let Some(date) = cursor {
            if date >= range.start {
                break;
            }
            cursor = next_occurrence(date, base.recurrence);
        }

        Occurrences {
            base,
            end: range.end,
            cursor,
        }
    }
}

impl Iterator for Occurrences<'_> {
    type Item = Chore;

    fn next(&mut self) -> Option<Chore> {
        loop {
            let date = self.cursor.filter(|d| *d <= self.end)?;
            self.cursor = next_occurrence(date, self.base.recurrence);

            if date != self.base.date {
                return Some(self.base.occurrence_on(date));
            }
        }
    }
}

/// Expand `chore` into its occurrences within `[start, end]`.
///
/// - Non-recurring chores expand to nothing.
/// - The base chore's own date is skipped.
/// - An inverted range (`start > end`) expands to nothing.
pub fn generate_recurring_chores(chore: &Chore, start: NaiveDate, end: NaiveDate) -> Vec<Chore> {
    Occurrences::new(chore, DateRange::new(start, end)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make_test_chore(date: NaiveDate, recurrence: Recurrence) -> Chore {
        Chore {
            id: "c1".to_string(),
            title: "Water plants".to_string(),
            date,
            assignee_id: "m1".to_string(),
            completed: false,
            recurrence,
            parent_id: None,
        }
    }

    fn dates(chores: &[Chore]) -> Vec<NaiveDate> {
        chores.iter().map(|c| c.date).collect()
    }

    #[test]
    fn weekly_occurrences_skip_base_date() {
        let chore = make_test_chore(ymd(2024, 1, 1), Recurrence::Weekly);
        let occurrences = generate_recurring_chores(&chore, ymd(2024, 1, 1), ymd(2024, 1, 22));

        assert_eq!(
            dates(&occurrences),
            vec![ymd(2024, 1, 8), ymd(2024, 1, 15), ymd(2024, 1, 22)]
        );
        for occ in &occurrences {
            assert_eq!(occ.parent_id.as_deref(), Some("c1"));
            assert_eq!(occ.id, format!("c1-{}", occ.date.format("%Y-%m-%d")));
            assert!(!occ.completed);
        }
    }

    #[test]
    fn none_expands_to_nothing() {
        let chore = make_test_chore(ymd(2024, 1, 1), Recurrence::None);
        assert!(generate_recurring_chores(&chore, ymd(2000, 1, 1), ymd(2100, 1, 1)).is_empty());
    }

    #[test]
    fn daily_aligns_to_range_start() {
        let chore = make_test_chore(ymd(2024, 1, 1), Recurrence::Daily);
        let occurrences = generate_recurring_chores(&chore, ymd(2024, 3, 30), ymd(2024, 4, 2));

        assert_eq!(
            dates(&occurrences),
            vec![ymd(2024, 3, 30), ymd(2024, 3, 31), ymd(2024, 4, 1), ymd(2024, 4, 2)]
        );
    }

    #[test]
    fn weekly_alignment_keeps_weekday() {
        // Base on a Monday, range starts on a Wednesday
        let chore = make_test_chore(ymd(2024, 1, 1), Recurrence::Weekly);
        let occurrences = generate_recurring_chores(&chore, ymd(2024, 1, 10), ymd(2024, 1, 31));

        assert_eq!(
            dates(&occurrences),
            vec![ymd(2024, 1, 15), ymd(2024, 1, 22), ymd(2024, 1, 29)]
        );
    }

    #[test]
    fn base_after_range_start_expands_from_base() {
        let chore = make_test_chore(ymd(2024, 1, 10), Recurrence::Daily);
        let occurrences = generate_recurring_chores(&chore, ymd(2024, 1, 1), ymd(2024, 1, 12));

        assert_eq!(dates(&occurrences), vec![ymd(2024, 1, 11), ymd(2024, 1, 12)]);
    }

    #[test]
    fn base_after_range_end_expands_to_nothing() {
        let chore = make_test_chore(ymd(2024, 6, 1), Recurrence::Weekly);
        assert!(generate_recurring_chores(&chore, ymd(2024, 1, 1), ymd(2024, 5, 31)).is_empty());
    }

    #[test]
    fn inverted_range_expands_to_nothing() {
        let chore = make_test_chore(ymd(2024, 1, 1), Recurrence::Daily);
        assert!(generate_recurring_chores(&chore, ymd(2024, 2, 1), ymd(2024, 1, 15)).is_empty());
    }

    #[test]
    fn monthly_overflows_short_months() {
        let chore = make_test_chore(ymd(2024, 1, 31), Recurrence::Monthly);
        let occurrences = generate_recurring_chores(&chore, ymd(2024, 2, 1), ymd(2024, 3, 1));
        assert!(occurrences.is_empty());

        let occurrences = generate_recurring_chores(&chore, ymd(2024, 2, 1), ymd(2024, 5, 31));
        assert_eq!(
            dates(&occurrences),
            vec![ymd(2024, 3, 2), ymd(2024, 4, 2), ymd(2024, 5, 2)]
        );
    }

    #[test]
    fn monthly_step_rules() {
        let step = |d| next_occurrence(d, Recurrence::Monthly).unwrap();
        assert_eq!(step(ymd(2024, 1, 31)), ymd(2024, 3, 2));
        assert_eq!(step(ymd(2023, 1, 31)), ymd(2023, 3, 3));
        assert_eq!(step(ymd(2024, 1, 29)), ymd(2024, 2, 29));
        assert_eq!(step(ymd(2024, 3, 31)), ymd(2024, 5, 1));
        assert_eq!(step(ymd(2024, 12, 15)), ymd(2025, 1, 15));
    }

    #[test]
    fn expansion_is_pure() {
        let chore = make_test_chore(ymd(2024, 1, 5), Recurrence::Monthly);
        let before = chore.clone();

        let first = generate_recurring_chores(&chore, ymd(2024, 1, 1), ymd(2024, 12, 31));
        let second = generate_recurring_chores(&chore, ymd(2024, 1, 1), ymd(2024, 12, 31));

        assert_eq!(first, second);
        assert_eq!(chore, before);
    }

    #[test]
    fn occurrences_strictly_increase_and_skip_base() {
        for recurrence in [Recurrence::Daily, Recurrence::Weekly, Recurrence::Monthly] {
            let chore = make_test_chore(ymd(2024, 1, 31), recurrence);
            let occurrences = generate_recurring_chores(&chore, ymd(2023, 12, 1), ymd(2024, 12, 31));

            assert!(!occurrences.is_empty());
            assert!(occurrences.windows(2).all(|w| w[0].date < w[1].date));
            assert!(occurrences.iter().all(|o| o.date != chore.date));
        }
    }

    #[test]
    fn iterator_is_lazy() {
        let chore = make_test_chore(ymd(2024, 1, 1), Recurrence::Daily);
        let range = DateRange::new(ymd(2024, 1, 1), NaiveDate::MAX);

        let first_three: Vec<_> = Occurrences::new(&chore, range).take(3).collect();
        assert_eq!(
            dates(&first_three),
            vec![ymd(2024, 1, 2), ymd(2024, 1, 3), ymd(2024, 1, 4)]
        );
    }
}
