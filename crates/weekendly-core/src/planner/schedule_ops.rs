//! Schedule operations for the Planner.

use log::debug;

use super::Planner;
use crate::{
    error::{Result, WeekendlyError},
    models::{Activity, ActivityId, Mood, Schedule, Theme},
    store::{SlotPosition, SlotRef, ops},
};

impl Planner {
    fn commit_schedule(&mut self, next: Schedule) {
        self.state.schedule = next;
        self.persist();
    }

    /// Places a copy of `activity` at the end of `target` under a new id and
    /// returns the placed copy.
    pub fn add_activity(&mut self, activity: &Activity, target: SlotRef) -> Activity {
        let next = ops::add(&self.state.schedule, activity, &target);
        let placed = next
            .get(&target.date)
            .and_then(|day| day.slot(target.slot).last())
            .cloned()
            .unwrap_or_else(|| activity.clone());
        debug!("Added '{}' to {} {}", placed.name, target.date, target.slot.as_str());
        self.commit_schedule(next);
        placed
    }

    /// Places the picker activity at `index`. The picker itself keeps the
    /// entry, so it can be placed again.
    pub fn add_from_picker(&mut self, index: usize, target: SlotRef) -> Result<Activity> {
        let activity = self
            .state
            .available
            .get(index)
            .cloned()
            .ok_or(WeekendlyError::PickerIndexOutOfRange {
                index,
                len: self.state.available.len(),
            })?;
        Ok(self.add_activity(&activity, target))
    }

    /// Removes an activity from a slot. Returns whether anything was removed.
    pub fn remove_activity(&mut self, id: &ActivityId, target: SlotRef) -> bool {
        let next = ops::remove(&self.state.schedule, id, &target);
        let removed = next.total_activities() < self.state.schedule.total_activities();
        self.commit_schedule(next);
        removed
    }

    /// Moves the activity at `source` to the end of `destination`. Returns
    /// false, changing nothing, when `source` no longer points at an
    /// activity.
    pub fn move_activity(&mut self, source: SlotPosition, destination: SlotRef) -> bool {
        let located = self
            .state
            .schedule
            .get(&source.date)
            .is_some_and(|day| source.index < day.slot(source.slot).len());
        if !located {
            debug!(
                "Ignoring move from stale position {} {} #{}",
                source.date,
                source.slot.as_str(),
                source.index
            );
            return false;
        }

        let next = ops::move_activity(&self.state.schedule, &source, &destination);
        self.commit_schedule(next);
        true
    }

    /// Replaces the whole plan with the theme laid out over the selected
    /// days.
    pub fn apply_theme(&mut self, theme: &Theme) {
        let next = ops::apply_theme(theme, &self.state.selected_days);
        debug!(
            "Applied theme '{}': {} of {} activities placed",
            theme.name,
            next.total_activities(),
            theme.activities.len()
        );
        self.commit_schedule(next);
    }

    /// Applies the catalog theme with this name.
    pub fn apply_theme_named(&mut self, name: &str) -> Result<()> {
        let theme = self
            .catalog
            .theme(name)
            .cloned()
            .ok_or_else(|| WeekendlyError::ThemeNotFound {
                name: name.to_string(),
            })?;
        self.apply_theme(&theme);
        Ok(())
    }

    /// Sets the mood of a placed activity. Returns whether it was found.
    pub fn set_mood(&mut self, id: &ActivityId, target: SlotRef, mood: Mood) -> bool {
        let found = self
            .state
            .schedule
            .get(&target.date)
            .is_some_and(|day| day.slot(target.slot).iter().any(|a| &a.id == id));
        let next = ops::set_mood(&self.state.schedule, id, &target, mood);
        self.commit_schedule(next);
        found
    }
}
