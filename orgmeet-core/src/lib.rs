//! Core types for orgmeet.
//!
//! This crate answers "which upcoming meetings concern my organizational
//! area?" from a flat `;`-delimited roster:
//! - `date` for strict `dd/mm/yyyy` validation and parsing
//! - `catalog` for one-shot roster ingestion into an ordered collection
//! - `schedule` for the area-scoped query facade

pub mod area;
pub mod catalog;
pub mod date;
pub mod error;
pub mod meeting;
pub mod schedule;

// Re-export the main types at crate root for convenience
pub use area::{AREAS, is_valid_area};
pub use catalog::MeetingCatalog;
pub use error::{ScheduleError, ScheduleResult};
pub use meeting::Meeting;
pub use schedule::{NO_MEETINGS, Schedule};
