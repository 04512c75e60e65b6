//! The chore store: owns the stored chores and team members.
//!
//! Collections are read from a [`KeyValueStore`] when the store is loaded and
//! written back after every mutation. Only base chores are ever written by
//! this store; occurrences come from the recurrence engine at query time.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::chore::{Chore, ChoreRef, ChoreUpdate, NewChore, TeamMember, split_occurrence_id};
use crate::date_range::DateRange;
use crate::error::{ChoreCalError, ChoreCalResult};
use crate::palette::next_color;
use crate::recurrence::Occurrences;
use crate::storage::{
    CHORES_KEY, KeyValueStore, TEAM_MEMBERS_KEY, load_collection, save_collection,
};

/// Fresh opaque identifier for chores and members.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

pub struct ChoreStore<S: KeyValueStore> {
    storage: S,
    chores: Vec<Chore>,
    team_members: Vec<TeamMember>,
}

impl<S: KeyValueStore> ChoreStore<S> {
    /// Load both collections from `storage`. Missing or corrupt data loads empty.
    pub fn load(storage: S) -> Self {
        let chores: Vec<Chore> = load_collection(&storage, CHORES_KEY);
        let team_members: Vec<TeamMember> = load_collection(&storage, TEAM_MEMBERS_KEY);

        tracing::debug!(
            "Loaded {} chores and {} team members",
            chores.len(),
            team_members.len()
        );

        ChoreStore {
            storage,
            chores,
            team_members,
        }
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Stored chores, in insertion order.
    pub fn chores(&self) -> &[Chore] {
        &self.chores
    }

    pub fn team_members(&self) -> &[TeamMember] {
        &self.team_members
    }

    pub fn team_member(&self, id: &str) -> Option<&TeamMember> {
        self.team_members.iter().find(|m| m.id == id)
    }

    /// Look a member up by id, falling back to a case-insensitive name match.
    pub fn find_team_member(&self, id_or_name: &str) -> Option<&TeamMember> {
        self.team_member(id_or_name).or_else(|| {
            self.team_members
                .iter()
                .find(|m| m.name.eq_ignore_ascii_case(id_or_name.trim()))
        })
    }

    /// Work out what `id` refers to.
    ///
    /// An id only resolves to an occurrence when it is not stored itself, has
    /// the `{base_id}-{YYYY-MM-DD}` shape, and the named base chore actually
    /// recurs on that date.
    pub fn resolve(&self, id: &str) -> ChoreRef<'_> {
        if let Some(chore) = self.chores.iter().find(|c| c.id == id) {
            return ChoreRef::Stored(chore);
        }

        let Some((base_id, date)) = split_occurrence_id(id) else {
            return ChoreRef::Unknown;
        };

        self.chores
            .iter()
            .find(|c| c.id == base_id && c.is_base())
            .filter(|base| recurs_on(base, date))
            .map_or(ChoreRef::Unknown, |base| ChoreRef::Occurrence { base, date })
    }

    // =========================================================================
    // Chore operations
    // =========================================================================

    /// Store a new base chore under a fresh id.
    ///
    /// Title and assignee are not validated here.
    pub fn add_chore(&mut self, new_chore: NewChore) -> ChoreCalResult<Chore> {
        let chore = new_chore.into_chore(generate_id());
        tracing::debug!("Adding chore {} ({})", chore.id, chore.title);

        self.chores.push(chore.clone());
        self.save_chores()?;
        Ok(chore)
    }

    /// Merge `update` into the stored chore `id`. Unknown ids are a no-op.
    ///
    /// Occurrence ids are rejected with [`ChoreCalError::OccurrenceNotMutable`].
    pub fn update_chore(&mut self, id: &str, update: ChoreUpdate) -> ChoreCalResult<()> {
        self.ensure_not_occurrence(id)?;

        if let Some(chore) = self.chores.iter_mut().find(|c| c.id == id) {
            update.apply(chore);
        } else {
            tracing::debug!("update_chore: no chore {}", id);
        }

        self.save_chores()
    }

    /// Remove chore `id` and every stored chore whose parent it is.
    pub fn delete_chore(&mut self, id: &str) -> ChoreCalResult<()> {
        let before = self.chores.len();
        self.chores.retain(|c| c.id != id && c.parent_id.as_deref() != Some(id));
        tracing::debug!("Deleted {} chores for {}", before - self.chores.len(), id);

        self.save_chores()
    }

    /// Flip `completed` on the stored chore `id`. Unknown ids are a no-op.
    ///
    /// Occurrence ids are rejected with [`ChoreCalError::OccurrenceNotMutable`].
    pub fn toggle_chore_complete(&mut self, id: &str) -> ChoreCalResult<()> {
        self.ensure_not_occurrence(id)?;

        if let Some(chore) = self.chores.iter_mut().find(|c| c.id == id) {
            chore.completed = !chore.completed;
        } else {
            tracing::debug!("toggle_chore_complete: no chore {}", id);
        }

        self.save_chores()
    }

    fn ensure_not_occurrence(&self, id: &str) -> ChoreCalResult<()> {
        match self.resolve(id) {
            ChoreRef::Occurrence { base, .. } => Err(ChoreCalError::OccurrenceNotMutable {
                id: id.to_string(),
                parent_id: base.id.clone(),
            }),
            ChoreRef::Stored(_) | ChoreRef::Unknown => Ok(()),
        }
    }

    /// All chores on days within `range`: stored chores plus the occurrences
    /// generated from every base chore.
    ///
    /// Order is unspecified; use [`group_by_date`] to lay results out by day.
    pub fn chores_for_date_range(&self, range: DateRange) -> Vec<Chore> {
        let generated = self
            .chores
            .iter()
            .filter(|c| c.is_base())
            .flat_map(|c| Occurrences::new(c, range));

        self.chores
            .iter()
            .cloned()
            .chain(generated)
            .filter(|c| range.contains(c.date))
            .collect()
    }

    // =========================================================================
    // Team member operations
    // =========================================================================

    /// Add a member with the next free palette color.
    pub fn add_team_member(&mut self, name: &str) -> ChoreCalResult<TeamMember> {
        let existing: Vec<&str> = self.team_members.iter().map(|m| m.color.as_str()).collect();

        let member = TeamMember {
            id: generate_id(),
            name: name.to_string(),
            color: next_color(&existing).to_string(),
        };
        tracing::debug!("Adding team member {} ({})", member.id, member.name);

        self.team_members.push(member.clone());
        self.save_team_members()?;
        Ok(member)
    }

    /// Remove member `id` along with every chore assigned to them.
    pub fn remove_team_member(&mut self, id: &str) -> ChoreCalResult<()> {
        self.team_members.retain(|m| m.id != id);

        let before = self.chores.len();
        self.chores.retain(|c| c.assignee_id != id);
        tracing::debug!(
            "Removed team member {} and {} assigned chores",
            id,
            before - self.chores.len()
        );

        self.save_team_members()?;
        self.save_chores()
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    fn save_chores(&mut self) -> ChoreCalResult<()> {
        save_collection(&mut self.storage, CHORES_KEY, &self.chores)
    }

    fn save_team_members(&mut self) -> ChoreCalResult<()> {
        save_collection(&mut self.storage, TEAM_MEMBERS_KEY, &self.team_members)
    }
}

fn recurs_on(base: &Chore, date: NaiveDate) -> bool {
    Occurrences::new(base, DateRange::new(date, date))
        .next()
        .is_some()
}

/// Group chores by day, days in ascending order.
pub fn group_by_date(chores: Vec<Chore>) -> BTreeMap<NaiveDate, Vec<Chore>> {
    let mut by_date: BTreeMap<NaiveDate, Vec<Chore>> = BTreeMap::new();
    for chore in chores {
        by_date.entry(chore.date).or_default().push(chore);
    }
    by_date
}
