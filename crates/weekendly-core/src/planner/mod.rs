//! High-level planner API.
//!
//! The [`Planner`] owns the one mutable copy of the planner state. Every
//! operation computes the next state with the pure functions in
//! [`crate::store::ops`], swaps it in, and writes the saved plan back to
//! storage before returning.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Front-end     │    │    Planner      │    │   store::ops    │
//! │ (CLI commands)  │───▶│ (state owner,   │───▶│ (pure state     │
//! │                 │    │  persistence)   │    │  transitions)   │
//! └─────────────────┘    └────────┬────────┘    └─────────────────┘
//!                                 │
//!                                 ▼
//!                        ┌─────────────────┐
//!                        │     Storage     │
//!                        └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Planner`] instances
//! - `schedule_ops`: placing, moving and removing activities, themes
//! - `day_ops`: selecting days
//! - `suggestion_ops`: the suggestion request lifecycle
//!
//! Persistence failures are logged and otherwise ignored: the in-memory
//! plan stays authoritative for the rest of the session.
//!
//! # Example
//!
//! ```rust
//! use weekendly_core::{
//!     PlannerBuilder,
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
//! let saturday = planner.selected_days().as_slice()[0];
//! let placed = planner.add_from_picker(0, SlotRef::new(saturday, TimeSlot::Morning))?;
//! println!("Planned {}", placed.name);
//! # Ok(())
//! # }
//! ```

use log::error;

use crate::{
    catalog::Catalog,
    models::{Activity, ActivityTemplate, Schedule},
    persistence,
    storage::Storage,
    store::{PlannerState, SelectedDays},
};

pub mod builder;
mod day_ops;
mod schedule_ops;
mod suggestion_ops;


pub use builder::PlannerBuilder;
pub use suggestion_ops::SuggestionTicket;

/// Main planner interface.
pub struct Planner {
    pub(crate) state: PlannerState,
    pub(crate) catalog: Catalog,
    pub(crate) storage: Box<dyn Storage>,
    /// Suggestions accepted so far, newest first
    pub(crate) accepted: Vec<ActivityTemplate>,
    /// Token of the newest suggestion request
    pub(crate) current_request: u64,
}

impl Planner {
    pub(crate) fn new(
        state: PlannerState,
        catalog: Catalog,
        storage: Box<dyn Storage>,
        accepted: Vec<ActivityTemplate>,
    ) -> Self {
        Self {
            state,
            catalog,
            storage,
            accepted,
            current_request: 0,
        }
    }

    pub fn state(&self) -> &PlannerState {
        &self.state
    }

    pub fn schedule(&self) -> &Schedule {
        &self.state.schedule
    }

    pub fn selected_days(&self) -> &SelectedDays {
        &self.state.selected_days
    }

    pub fn available(&self) -> &[Activity] {
        &self.state.available
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn is_loading_suggestions(&self) -> bool {
        self.state.is_loading_suggestions
    }

    /// Writes the plan slot; failures are logged, never returned.
    pub(crate) fn persist(&mut self) {
        if let Err(e) = persistence::save_plan(
            self.storage.as_mut(),
            &self.state.schedule,
            &self.state.selected_days,
        ) {
            error!("Failed to save plan: {e}");
        }
    }

    /// Writes the accepted-suggestions slot; failures are logged.
    pub(crate) fn persist_suggestions(&mut self) {
        if let Err(e) = persistence::save_suggestions(self.storage.as_mut(), &self.accepted) {
            error!("Failed to save suggestions: {e}");
        }
    }
}
