//! Data models for activities, days and schedules.
//!
//! These are plain data types. All state transitions live in
//! [`crate::store`]; markdown formatting lives in [`crate::display`].
//!
//! # Identity
//!
//! An [`Activity`] carries an [`ActivityId`] minted when the instance is
//! created. Templates ([`ActivityTemplate`]) have no id: catalog entries,
//! theme items and accepted suggestions are all templates until they are
//! instantiated.
//!
//! ```rust
//! use weekendly_core::models::{ActivityTemplate, Category, Icon, Mood};
//!
//! let template = ActivityTemplate::new(
//!     "Sleep In",
//!     Category::Relaxation,
//!     "No alarms, just rest.",
//!     Icon::BookOpen,
//! );
//! let first = template.instantiate();
//! let second = template.instantiate();
//! assert_ne!(first.id, second.id);
//! assert_eq!(first.mood, Mood::Happy);
//! ```

pub mod activity;
pub mod schedule;
pub mod slot;
pub mod status;
pub mod theme;

#[cfg(test)]
mod tests;

pub use activity::{Activity, ActivityId, ActivityTemplate, Suggestion};
pub use schedule::{DaySchedule, Schedule};
pub use slot::TimeSlot;
pub use status::{Category, Icon, Mood};
pub use theme::Theme;
