//! Plain serializable types for coursedeck
//!
//! This crate defines the stable data surface of the dashboard core:
//! - Domain inputs (sessions, courses, instructor privileges)
//! - Temporal state enums produced by classification
//! - View models handed to template rendering or JSON transport
//!
//! Everything here is behavior-free and request-scoped: built once per
//! assembly call, never cached or mutated afterwards.

mod types;
mod views;

pub use types::*;
pub use views::*;
