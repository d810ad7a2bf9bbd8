//! Day selection operations for the Planner.

use super::Planner;
use crate::{dates::DateKey, store::ops};

impl Planner {
    /// Selects or deselects a day. Returns whether the day is selected
    /// afterwards.
    pub fn toggle_day(&mut self, day: DateKey) -> bool {
        self.state.selected_days = self.state.selected_days.toggle(day);
        self.persist();
        self.state.selected_days.contains(&day)
    }

    /// Replaces the selection.
    pub fn set_selected_days(&mut self, days: impl IntoIterator<Item = DateKey>) {
        self.state.selected_days = ops::select_days(days);
        self.persist();
    }
}
