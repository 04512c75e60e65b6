//! Core types and logic for chorecal.
//!
//! This crate provides everything the chorecal front end needs:
//! - `chore` types for base chores, occurrences and team members
//! - `recurrence` expansion of repeating chores into date-bounded occurrences
//! - `store` holding the chore and member collections with their cascades
//! - `storage` key-value persistence for those collections

pub mod chore;
pub mod config;
pub mod date;
pub mod date_range;
pub mod error;
pub mod palette;
pub mod recurrence;
pub mod storage;
pub mod store;

pub use chore::{Chore, ChoreRef, ChoreUpdate, NewChore, Recurrence, TeamMember};
pub use date_range::DateRange;
pub use error::{ChoreCalError, ChoreCalResult};
pub use store::ChoreStore;
