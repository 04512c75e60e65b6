use anyhow::Result;
use owo_colors::OwoColorize;

use super::{Store, resolve_member};
use crate::render::Render;

pub fn add(store: &mut Store, name: &str) -> Result<()> {
    let name = name.trim();
    if name.is_empty() {
        anyhow::bail!("Member name cannot be empty");
    }

    let member = store.add_team_member(name)?;
    println!("{} {}", "Added".green(), member.render());
    Ok(())
}

pub fn remove(store: &mut Store, id_or_name: &str) -> Result<()> {
    let member = resolve_member(store, id_or_name)?.clone();
    let assigned = store
        .chores()
        .iter()
        .filter(|c| c.assignee_id == member.id)
        .count();

    store.remove_team_member(&member.id)?;

    println!("{} {}", "Removed".red(), member.render());
    if assigned > 0 {
        let label = format!("({} assigned {} removed)", assigned, pluralize("chore", assigned));
        println!("   {}", label.dimmed());
    }
    Ok(())
}

pub fn list(store: &Store) -> Result<()> {
    if store.team_members().is_empty() {
        println!("{}", "No team members yet".dimmed());
        return Ok(());
    }

    for member in store.team_members() {
        println!("{} {}", member.render(), member.id.dimmed());
    }
    Ok(())
}

/// Simple pluralization helper
fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
