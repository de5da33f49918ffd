//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic. Creation input
//! travels in separate `New*` structs (`NewLink`, `NewVisit`); stored rows
//! come back as [`Link`] and [`Visit`].

pub mod link;
pub mod visit;

pub use link::{Link, NewLink};
pub use visit::{NewVisit, Visit, VISIT_TIME_FORMAT};
