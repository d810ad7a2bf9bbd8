//! The set of days the user is currently planning.

use serde::{Deserialize, Serialize};

use crate::dates::DateKey;

/// Selected days, always sorted ascending and free of duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<DateKey>", into = "Vec<DateKey>")]
pub struct SelectedDays(Vec<DateKey>);

impl SelectedDays {
    pub fn new(days: impl IntoIterator<Item = DateKey>) -> Self {
        let mut days: Vec<DateKey> = days.into_iter().collect();
        days.sort();
        days.dedup();
        Self(days)
    }

    /// Adds the day if absent, drops it if present.
    ///
    /// Schedule entries of a dropped day are not touched; they show up again
    /// when the day is selected again.
    pub fn toggle(&self, day: DateKey) -> Self {
        let mut days = self.0.clone();
        match days.binary_search(&day) {
            Ok(pos) => {
                days.remove(pos);
            }
            Err(pos) => days.insert(pos, day),
        }
        Self(days)
    }

    pub fn contains(&self, day: &DateKey) -> bool {
        self.0.binary_search(day).is_ok()
    }

    pub fn as_slice(&self) -> &[DateKey] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DateKey> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<DateKey>> for SelectedDays {
    fn from(days: Vec<DateKey>) -> Self {
        Self::new(days)
    }
}

impl From<SelectedDays> for Vec<DateKey> {
    fn from(days: SelectedDays) -> Self {
        days.0
    }
}

impl<'a> IntoIterator for &'a SelectedDays {
    type Item = &'a DateKey;
    type IntoIter = std::slice::Iter<'a, DateKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
