use anyhow::Result;
use chorecal_core::date::{parse_date, today};
use chorecal_core::{ChoreRef, ChoreUpdate, NewChore, Recurrence};
use owo_colors::OwoColorize;

use super::{Store, resolve_member};
use crate::render::render_chore;

pub fn add(
    store: &mut Store,
    title: &str,
    date: Option<&str>,
    assignee: Option<&str>,
    repeat: Recurrence,
) -> Result<()> {
    let title = title.trim();
    if title.is_empty() {
        anyhow::bail!("Chore title cannot be empty");
    }

    let date = match date {
        Some(s) => parse_date(s)?,
        None => today(),
    };

    let assignee_id = match assignee {
        Some(name) => resolve_member(store, name)?.id.clone(),
        None => match store.team_members() {
            [only] => only.id.clone(),
            [] => anyhow::bail!(
                "No team members yet.\n\n\
                Add one with:\n  \
                chorecal member add <name>"
            ),
            _ => anyhow::bail!(
                "Several team members exist. Use --assignee or set default_assignee in config.toml"
            ),
        },
    };

    let chore = store.add_chore(NewChore::new(title, date, &assignee_id).repeating(repeat))?;

    println!(
        "{} {}",
        "Added".green(),
        render_chore(&chore, store.team_member(&chore.assignee_id))
    );
    println!("  {} {}", "id".dimmed(), chore.id);
    Ok(())
}

pub fn edit(
    store: &mut Store,
    id: &str,
    title: Option<String>,
    date: Option<&str>,
    assignee: Option<&str>,
    repeat: Option<Recurrence>,
) -> Result<()> {
    if title.as_deref().is_some_and(|t| t.trim().is_empty()) {
        anyhow::bail!("Chore title cannot be empty");
    }

    let update = ChoreUpdate {
        title: title.map(|t| t.trim().to_string()),
        date: date.map(parse_date).transpose()?,
        assignee_id: match assignee {
            Some(name) => Some(resolve_member(store, name)?.id.clone()),
            None => None,
        },
        completed: None,
        recurrence: repeat,
    };

    if update.is_empty() {
        anyhow::bail!("Nothing to change. Pass --title, --date, --assignee or --repeat");
    }

    store.update_chore(id, update)?;
    report(store, id, "Updated");
    Ok(())
}

pub fn toggle(store: &mut Store, id: &str) -> Result<()> {
    store.toggle_chore_complete(id)?;
    report(store, id, "Toggled");
    Ok(())
}

pub fn delete(store: &mut Store, id: &str) -> Result<()> {
    let known = matches!(store.resolve(id), ChoreRef::Stored(_));
    store.delete_chore(id)?;

    if known {
        println!("{} {}", "Deleted".red(), id);
    } else {
        println!("{}", format!("No stored chore '{}'", id).dimmed());
    }
    Ok(())
}

fn report(store: &Store, id: &str, verb: &str) {
    match store.resolve(id) {
        ChoreRef::Stored(chore) => {
            let assignee = store.team_member(&chore.assignee_id);
            println!("{} {}", verb.green(), render_chore(chore, assignee));
        }
        _ => println!("{}", format!("No chore '{}'", id).dimmed()),
    }
}
