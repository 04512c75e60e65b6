pub mod chore;
pub mod list;
pub mod member;
pub mod month;

use anyhow::Result;
use chorecal_core::config::ChoreCalConfig;
use chorecal_core::storage::JsonFileStore;
use chorecal_core::{ChoreStore, TeamMember};

pub type Store = ChoreStore<JsonFileStore>;

pub fn open_store(config: &ChoreCalConfig) -> Store {
    let storage = config.storage();
    tracing::debug!("Using data directory {}", storage.dir().display());
    ChoreStore::load(storage)
}

/// Find a member by id or name, listing the available ones on failure.
pub fn resolve_member<'a>(store: &'a Store, id_or_name: &str) -> Result<&'a TeamMember> {
    if let Some(member) = store.find_team_member(id_or_name) {
        return Ok(member);
    }

    if store.team_members().is_empty() {
        anyhow::bail!(
            "No team members yet.\n\n\
            Add one with:\n  \
            chorecal member add <name>"
        );
    }

    let available: Vec<_> = store.team_members().iter().map(|m| m.name.as_str()).collect();
    anyhow::bail!(
        "Team member '{}' not found. Available: {}",
        id_or_name,
        available.join(", ")
    )
}
