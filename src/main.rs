mod commands;
mod render;

use anyhow::Result;
use chorecal_core::Recurrence;
use chorecal_core::config::ChoreCalConfig;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "chorecal")]
#[command(about = "Schedule shared chores for your team on a monthly calendar")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a month grid with everyone's chores
    Month {
        /// Month to show (YYYY-MM), defaults to the current month
        month: Option<String>,
    },
    /// List chores day by day
    List {
        /// First day to list (YYYY-MM-DD), defaults to today
        #[arg(long)]
        from: Option<String>,

        /// Last day to list (YYYY-MM-DD), defaults to a week after --from
        #[arg(long)]
        to: Option<String>,
    },
    /// Add a chore
    Add {
        title: String,

        /// Day of the chore (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,

        /// Member name or id, defaults to default_assignee from config
        #[arg(short, long)]
        assignee: Option<String>,

        /// none, daily, weekly or monthly
        #[arg(short, long, default_value = "none")]
        repeat: Recurrence,
    },
    /// Change fields of a stored chore
    Edit {
        id: String,

        #[arg(long)]
        title: Option<String>,

        /// New day (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        /// Member name or id
        #[arg(short, long)]
        assignee: Option<String>,

        #[arg(short, long)]
        repeat: Option<Recurrence>,
    },
    /// Toggle a chore between done and not done
    Done { id: String },
    /// Delete a chore (and, for repeating chores, every occurrence)
    Delete { id: String },
    /// Manage team members
    Member {
        #[command(subcommand)]
        command: MemberCommands,
    },
}

#[derive(Subcommand)]
enum MemberCommands {
    /// Add a team member
    Add { name: String },
    /// Remove a team member and every chore assigned to them
    Remove {
        /// Member name or id
        member: String,
    },
    /// List team members
    List,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ChoreCalConfig::load()?;
    let mut store = commands::open_store(&config);

    match cli.command {
        Commands::Month { month } => commands::month::run(&store, month.as_deref()),
        Commands::List { from, to } => commands::list::run(&store, from.as_deref(), to.as_deref()),
        Commands::Add {
            title,
            date,
            assignee,
            repeat,
        } => {
            let assignee = assignee.or(config.default_assignee.clone());
            commands::chore::add(&mut store, &title, date.as_deref(), assignee.as_deref(), repeat)
        }
        Commands::Edit {
            id,
            title,
            date,
            assignee,
            repeat,
        } => commands::chore::edit(
            &mut store,
            &id,
            title,
            date.as_deref(),
            assignee.as_deref(),
            repeat,
        ),
        Commands::Done { id } => commands::chore::toggle(&mut store, &id),
        Commands::Delete { id } => commands::chore::delete(&mut store, &id),
        Commands::Member { command } => match command {
            MemberCommands::Add { name } => commands::member::add(&mut store, &name),
            MemberCommands::Remove { member } => commands::member::remove(&mut store, &member),
            MemberCommands::List => commands::member::list(&store),
        },
    }
}
