//! Selection and word-lookup state machines.
//!
//! Both machines publish whole-state snapshots through a [`StateCell`] and
//! tag each request with the generation it was issued under, so replies that
//! arrive after a newer transition are dropped instead of applied.

pub mod cell;
pub mod lookup;
pub mod selection;

pub use cell::{Generation, StateCell, Versioned};
pub use lookup::{normalize_word, LookupMachine};
pub use selection::SelectionMachine;
