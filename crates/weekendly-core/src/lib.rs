//! Core library for the Weekendly weekend planner.
//!
//! This crate holds everything except the terminal front-end: calendar
//! helpers, the activity catalog, the schedule model, the pure state
//! transitions, persistence and the optional suggestion service.
//!
//! # Architecture
//!
//! - **State** ([`store`]): an explicit [`store::PlannerState`] value and pure
//!   functions in [`store::ops`] that compute the next state
//! - **Planner** ([`planner`]): owns the one mutable state, applies operations
//!   and saves after each of them
//! - **Persistence** ([`persistence`], [`storage`]): one JSON blob in a
//!   key-value slot, backed by SQLite on disk or memory in tests
//! - **Suggestions** ([`suggestions`]): an async source of activity ideas;
//!   failures always degrade to "no suggestions"
//! - **Display** ([`display`]): markdown rendering of plans, the picker, themes
//!   and the week calendar
//!
//! # Quick Start
//!
//! ```rust
//! use weekendly_core::{
//!     PlannerBuilder,
//!     display::DayPlans,
//!     models::TimeSlot,
//!     storage::MemoryStorage,
//!     store::SlotRef,
//! };
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut planner = PlannerBuilder::new()
//!     .with_storage(MemoryStorage::new())
//!     .build()?;
//!
//! // Lay out a theme over the selected weekend, then add one more activity
//! planner.apply_theme_named("Foodie Fiesta")?;
//! let sunday = planner.selected_days().as_slice()[1];
//! planner.add_from_picker(2, SlotRef::new(sunday, TimeSlot::Evening))?;
//!
//! println!("{}", DayPlans::new(planner.state().selected_plan()));
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod dates;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod persistence;
pub mod planner;
pub mod storage;
pub mod store;
pub mod suggestions;

// Re-export commonly used types
pub use catalog::Catalog;
pub use dates::DateKey;
pub use display::{DayPlans, OperationStatus, Picker, Themes, WeekView};
pub use error::{Result, WeekendlyError};
pub use models::{
    Activity, ActivityId, ActivityTemplate, Category, DaySchedule, Mood, Schedule, Suggestion,
    Theme, TimeSlot,
};
pub use params::{AddActivity, MoveActivity, RemoveActivity, SetMood, WeekWindow};
pub use planner::{Planner, PlannerBuilder, SuggestionTicket};
pub use store::{PlannerState, SelectedDays, SlotPosition, SlotRef};
