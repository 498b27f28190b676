//! Shared utilities for coursedeck
//!
//! This crate provides:
//! - ID types (CourseId, SessionKey)
//! - Time helpers (display formatting, slot truncation, recency checks)
//! - Error types

mod error;
mod ids;
mod time;

pub use error::*;
pub use ids::*;
pub use time::*;
