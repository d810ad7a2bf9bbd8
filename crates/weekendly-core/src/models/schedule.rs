//! Day and schedule containers.

use std::collections::{BTreeMap, btree_map};

use serde::{Deserialize, Serialize};

use super::{Activity, TimeSlot};
use crate::dates::DateKey;

/// The activities planned for one day, one ordered list per slot.
///
/// All three slots always exist; an empty list means nothing is planned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    #[serde(default)]
    pub morning: Vec<Activity>,
    #[serde(default)]
    pub afternoon: Vec<Activity>,
    #[serde(default)]
    pub evening: Vec<Activity>,
}

impl DaySchedule {
    pub fn slot(&self, slot: TimeSlot) -> &[Activity] {
        match slot {
            TimeSlot::Morning => &self.morning,
            TimeSlot::Afternoon => &self.afternoon,
            TimeSlot::Evening => &self.evening,
        }
    }

    pub fn slot_mut(&mut self, slot: TimeSlot) -> &mut Vec<Activity> {
        match slot {
            TimeSlot::Morning => &mut self.morning,
            TimeSlot::Afternoon => &mut self.afternoon,
            TimeSlot::Evening => &mut self.evening,
        }
    }

    /// Iterates over `(slot, activities)` in time order.
    pub fn slots(&self) -> impl Iterator<Item = (TimeSlot, &[Activity])> {
        TimeSlot::ALL.into_iter().map(move |slot| (slot, self.slot(slot)))
    }

    /// Mutable access to every activity of the day.
    pub fn activities_mut(&mut self) -> impl Iterator<Item = &mut Activity> {
        self.morning
            .iter_mut()
            .chain(self.afternoon.iter_mut())
            .chain(self.evening.iter_mut())
    }

    pub fn len(&self) -> usize {
        self.morning.len() + self.afternoon.len() + self.evening.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Planned days keyed by date. A missing day is the same as an empty one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule(BTreeMap<DateKey, DaySchedule>);

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, date: &DateKey) -> Option<&DaySchedule> {
        self.0.get(date)
    }

    /// Returns the day, creating it with empty slots when absent.
    pub fn day_mut(&mut self, date: DateKey) -> &mut DaySchedule {
        self.0.entry(date).or_default()
    }

    pub fn get_mut(&mut self, date: &DateKey) -> Option<&mut DaySchedule> {
        self.0.get_mut(date)
    }

    pub fn contains(&self, date: &DateKey) -> bool {
        self.0.contains_key(date)
    }

    pub fn dates(&self) -> impl Iterator<Item = &DateKey> {
        self.0.keys()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, DateKey, DaySchedule> {
        self.0.iter()
    }

    pub fn days_mut(&mut self) -> btree_map::ValuesMut<'_, DateKey, DaySchedule> {
        self.0.values_mut()
    }

    /// Number of planned days, including empty ones.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of activities across every day and slot.
    pub fn total_activities(&self) -> usize {
        self.0.values().map(DaySchedule::len).sum()
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = (&'a DateKey, &'a DaySchedule);
    type IntoIter = btree_map::Iter<'a, DateKey, DaySchedule>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(DateKey, DaySchedule)> for Schedule {
    fn from_iter<I: IntoIterator<Item = (DateKey, DaySchedule)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
