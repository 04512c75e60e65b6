//! Chore and team member types.
//!
//! A chore is either a *base chore*, stored by id, or a generated
//! *occurrence* of a recurring base chore. Occurrences are never stored;
//! they carry `parent_id` and an id derived from the base id and their date.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date::{format_date, parse_date};

/// A member of the team that chores get assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    /// Palette color token, e.g. `#3B82F6`
    pub color: String,
}

/// How often a base chore repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Recurrence {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
}

impl Recurrence {
    pub const ALL: [Recurrence; 4] = [
        Recurrence::None,
        Recurrence::Daily,
        Recurrence::Weekly,
        Recurrence::Monthly,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Recurrence::None => "none",
            Recurrence::Daily => "daily",
            Recurrence::Weekly => "weekly",
            Recurrence::Monthly => "monthly",
        }
    }

    pub fn is_recurring(self) -> bool {
        self != Recurrence::None
    }
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Recurrence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Recurrence::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!("Unknown recurrence '{s}'. Expected one of: none, daily, weekly, monthly")
            })
    }
}

/// Stored payloads with an unrecognized rule load as `None`.
impl From<String> for Recurrence {
    fn from(s: String) -> Self {
        s.parse().unwrap_or_default()
    }
}

/// A chore on the calendar (base chore or generated occurrence).
///
/// Field names serialize in camelCase so stored blobs match the browser
/// app's `localStorage` layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chore {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub assignee_id: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub recurrence: Recurrence,
    /// Set only on generated occurrences
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

impl Chore {
    pub fn is_base(&self) -> bool {
        self.parent_id.is_none()
    }

    pub fn is_occurrence(&self) -> bool {
        self.parent_id.is_some()
    }

    /// Build the occurrence of this chore that falls on `date`.
    pub fn occurrence_on(&self, date: NaiveDate) -> Chore {
        Chore {
            id: occurrence_id(&self.id, date),
            date,
            parent_id: Some(self.id.clone()),
            completed: false,
            ..self.clone()
        }
    }
}

impl fmt::Display for Chore {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Id of the occurrence of `base_id` on `date`: `{base_id}-{YYYY-MM-DD}`.
pub fn occurrence_id(base_id: &str, date: NaiveDate) -> String {
    format!("{}-{}", base_id, format_date(date))
}

/// Split an id shaped like an occurrence id into its base id and date.
///
/// Shape only; whether the base exists is up to the caller.
pub fn split_occurrence_id(id: &str) -> Option<(&str, NaiveDate)> {
    // "-YYYY-MM-DD"
    const SUFFIX_LEN: usize = 11;

    let split_at = id.len().checked_sub(SUFFIX_LEN)?;
    if split_at == 0 || !id.is_char_boundary(split_at) {
        return None;
    }

    let (base_id, suffix) = id.split_at(split_at);
    let date = parse_date(suffix.strip_prefix('-')?).ok()?;
    Some((base_id, date))
}

/// Fields for a new base chore. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChore {
    pub title: String,
    pub date: NaiveDate,
    pub assignee_id: String,
    pub completed: bool,
    pub recurrence: Recurrence,
}

impl NewChore {
    pub fn new(title: &str, date: NaiveDate, assignee_id: &str) -> Self {
        NewChore {
            title: title.to_string(),
            date,
            assignee_id: assignee_id.to_string(),
            completed: false,
            recurrence: Recurrence::None,
        }
    }

    pub fn repeating(mut self, recurrence: Recurrence) -> Self {
        self.recurrence = recurrence;
        self
    }

    pub(crate) fn into_chore(self, id: String) -> Chore {
        Chore {
            id,
            title: self.title,
            date: self.date,
            assignee_id: self.assignee_id,
            completed: self.completed,
            recurrence: self.recurrence,
            parent_id: None,
        }
    }
}

/// Partial update merged into a stored chore. `None` fields are left alone.
///
/// Identity fields (`id`, `parent_id`) cannot be updated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChoreUpdate {
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
    pub assignee_id: Option<String>,
    pub completed: Option<bool>,
    pub recurrence: Option<Recurrence>,
}

impl ChoreUpdate {
    pub fn is_empty(&self) -> bool {
        *self == ChoreUpdate::default()
    }

    pub fn apply(self, chore: &mut Chore) {
        if let Some(title) = self.title {
            chore.title = title;
        }
        if let Some(date) = self.date {
            chore.date = date;
        }
        if let Some(assignee_id) = self.assignee_id {
            chore.assignee_id = assignee_id;
        }
        if let Some(completed) = self.completed {
            chore.completed = completed;
        }
        if let Some(recurrence) = self.recurrence {
            chore.recurrence = recurrence;
        }
    }
}

/// What a chore id refers to within a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoreRef<'a> {
    /// A chore held in the stored collection
    Stored(&'a Chore),
    /// A generated occurrence of a stored recurring base chore
    Occurrence { base: &'a Chore, date: NaiveDate },
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make_test_chore() -> Chore {
        NewChore::new("Take out trash", ymd(2024, 1, 1), "m1")
            .repeating(Recurrence::Weekly)
            .into_chore("c1".to_string())
    }

    #[test]
    fn recurrence_parses_case_insensitively() {
        assert_eq!("Weekly".parse::<Recurrence>(), Ok(Recurrence::Weekly));
        assert_eq!(" daily ".parse::<Recurrence>(), Ok(Recurrence::Daily));
        assert!("fortnightly".parse::<Recurrence>().is_err());
    }

    #[test]
    fn unknown_stored_recurrence_reads_as_none() {
        let json = r#"{"id":"c1","title":"x","date":"2024-01-01","assigneeId":"m1","recurrence":"yearly"}"#;
        let chore: Chore = serde_json::from_str(json).unwrap();
        assert_eq!(chore.recurrence, Recurrence::None);
        assert!(!chore.completed);
    }

    #[test]
    fn chore_serializes_in_browser_layout() {
        let json = serde_json::to_value(make_test_chore()).unwrap();
        assert_eq!(json["assigneeId"], "m1");
        assert_eq!(json["date"], "2024-01-01");
        assert_eq!(json["recurrence"], "weekly");
        assert!(json.get("parentId").is_none());
    }

    #[test]
    fn occurrence_copies_base_and_resets_completion() {
        let mut base = make_test_chore();
        base.completed = true;

        let occ = base.occurrence_on(ymd(2024, 1, 8));
        assert_eq!(occ.id, "c1-2024-01-08");
        assert_eq!(occ.parent_id.as_deref(), Some("c1"));
        assert!(!occ.completed);
        assert_eq!(occ.title, base.title);
        assert_eq!(occ.recurrence, Recurrence::Weekly);
        assert!(occ.is_occurrence());
        assert!(base.is_base());
    }

    #[test]
    fn split_occurrence_id_handles_hyphenated_base_ids() {
        let base = "1d3c7a52-9f0e-4b1a-8c55-0f3e2d1c0b9a";
        let id = occurrence_id(base, ymd(2024, 2, 29));
        assert_eq!(split_occurrence_id(&id), Some((base, ymd(2024, 2, 29))));
    }

    #[test]
    fn split_occurrence_id_rejects_other_shapes() {
        assert_eq!(split_occurrence_id("c1"), None);
        assert_eq!(split_occurrence_id("-2024-01-01"), None);
        assert_eq!(split_occurrence_id("c1-2024-13-01"), None);
        assert_eq!(split_occurrence_id("c1_2024-01-01"), None);
    }

    #[test]
    fn update_merges_only_given_fields() {
        let mut chore = make_test_chore();
        let update = ChoreUpdate {
            title: Some("Recycling".to_string()),
            completed: Some(true),
            ..Default::default()
        };
        assert!(!update.is_empty());

        update.apply(&mut chore);
        assert_eq!(chore.title, "Recycling");
        assert!(chore.completed);
        assert_eq!(chore.assignee_id, "m1");
        assert_eq!(chore.recurrence, Recurrence::Weekly);
    }
}
