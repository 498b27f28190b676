//! Dashboard core for instructor feedback sessions
//!
//! This crate derives the display state of time-bounded feedback sessions
//! and builds the selectable option sets for the new-session form:
//! - Time-window classification (waiting / open / closed, visibility,
//!   results publication)
//! - Bounded greedy admission of closed sessions for statistics
//! - Permission-filtered, default-selected option lists
//! - Assembly of the form, listing, and copy-from view models
//!
//! One assembly call processes one (courses, instructors, sessions)
//! snapshot and returns immutable output; nothing is shared across calls.

mod actions;
mod assembler;
mod classify;
mod options;
mod recent;

pub use actions::*;
pub use assembler::*;
pub use classify::*;
pub use options::*;
pub use recent::*;
