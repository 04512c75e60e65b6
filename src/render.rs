//! Terminal rendering for chorecal types.
//!
//! Member colors come from their palette token and are drawn as truecolor.

use chorecal_core::palette::hex_to_rgb;
use chorecal_core::{Chore, TeamMember};
use owo_colors::OwoColorize;

/// Marker shown next to repeating chores and their occurrences.
const REPEAT_MARKER: &str = "↻";

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for TeamMember {
    fn render(&self) -> String {
        format!("{} {}", paint("●", &self.color), self.name)
    }
}

/// Paint `text` in a `#RRGGBB` palette color, leaving it plain if unparseable.
pub fn paint(text: &str, color: &str) -> String {
    match hex_to_rgb(color) {
        Some((r, g, b)) => text.truecolor(r, g, b).to_string(),
        None => text.to_string(),
    }
}

/// One-line rendering of a chore with its assignee.
pub fn render_chore(chore: &Chore, assignee: Option<&TeamMember>) -> String {
    let check = if chore.completed { "[x]" } else { "[ ]" };

    let title = if chore.completed {
        chore.title.strikethrough().dimmed().to_string()
    } else {
        chore.title.clone()
    };

    let who = match assignee {
        Some(member) => paint(&member.name, &member.color),
        None => "(unassigned)".dimmed().to_string(),
    };

    let mut line = format!("{} {} {}", check, title, who);

    if chore.recurrence.is_recurring() {
        let repeat = format!("{} {}", REPEAT_MARKER, chore.recurrence);
        line.push_str(&format!(" {}", repeat.dimmed()));
    }

    line
}
