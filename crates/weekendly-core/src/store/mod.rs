//! In-memory planner state and its transitions.
//!
//! [`PlannerState`] is a plain value. The functions in [`ops`] compute a new
//! schedule (or selection, or picker pool) from the previous one; the owner
//! of the state, normally [`crate::Planner`], swaps the result in.
//!
//! ```rust
//! use weekendly_core::{
//!     catalog::Catalog,
//!     dates::DateKey,
//!     models::{Schedule, TimeSlot},
//!     store::{SlotPosition, SlotRef, ops},
//! };
//!
//! let catalog = Catalog::builtin();
//! let picker = catalog.seed_picker();
//! let saturday = DateKey::parse("2024-06-01").unwrap();
//!
//! let schedule = ops::add(
//!     &Schedule::new(),
//!     &picker[0],
//!     &SlotRef::new(saturday, TimeSlot::Morning),
//! );
//! let schedule = ops::move_activity(
//!     &schedule,
//!     &SlotPosition::new(saturday, TimeSlot::Morning, 0),
//!     &SlotRef::new(saturday, TimeSlot::Evening),
//! );
//! assert_eq!(schedule.get(&saturday).unwrap().evening.len(), 1);
//! ```

use serde::{Deserialize, Serialize};

use crate::{
    dates::DateKey,
    models::{Activity, DaySchedule, Schedule, TimeSlot},
};

pub mod ops;
mod selection;


pub use selection::SelectedDays;

/// A day and one of its slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRef {
    pub date: DateKey,
    pub slot: TimeSlot,
}

impl SlotRef {
    pub fn new(date: DateKey, slot: TimeSlot) -> Self {
        Self { date, slot }
    }
}

/// A position inside a slot, as seen when a drag started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotPosition {
    pub date: DateKey,
    pub slot: TimeSlot,
    pub index: usize,
}

impl SlotPosition {
    pub fn new(date: DateKey, slot: TimeSlot, index: usize) -> Self {
        Self { date, slot, index }
    }
}

/// Everything the planner keeps in memory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlannerState {
    /// Placed activities by day
    pub schedule: Schedule,

    /// Days being planned, sorted
    pub selected_days: SelectedDays,

    /// Picker pool of activities not yet placed
    pub available: Vec<Activity>,

    /// True while a suggestion request is outstanding
    pub is_loading_suggestions: bool,
}

impl PlannerState {
    pub fn new(schedule: Schedule, selected_days: SelectedDays, available: Vec<Activity>) -> Self {
        Self {
            schedule,
            selected_days,
            available,
            is_loading_suggestions: false,
        }
    }

    /// The plan for a day; days without a plan read as empty.
    pub fn day(&self, date: &DateKey) -> DaySchedule {
        self.schedule.get(date).cloned().unwrap_or_default()
    }

    /// Selected days paired with their plans, in date order.
    pub fn selected_plan(&self) -> Vec<(DateKey, DaySchedule)> {
        self.selected_days
            .iter()
            .map(|date| (*date, self.day(date)))
            .collect()
    }
}
