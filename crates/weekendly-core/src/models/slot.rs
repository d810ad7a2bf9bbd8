//! The three fixed parts of a day.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the three fixed slots every planned day has.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum TimeSlot {
    Morning,
    Afternoon,
    Evening,
}

impl TimeSlot {
    /// Slots in the order they happen during a day.
    pub const ALL: [TimeSlot; 3] = [TimeSlot::Morning, TimeSlot::Afternoon, TimeSlot::Evening];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeSlot::Morning => "morning",
            TimeSlot::Afternoon => "afternoon",
            TimeSlot::Evening => "evening",
        }
    }

    /// Capitalized name for headings.
    pub fn title(&self) -> &'static str {
        match self {
            TimeSlot::Morning => "Morning",
            TimeSlot::Afternoon => "Afternoon",
            TimeSlot::Evening => "Evening",
        }
    }
}

impl FromStr for TimeSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "morning" | "m" => Ok(TimeSlot::Morning),
            "afternoon" | "a" => Ok(TimeSlot::Afternoon),
            "evening" | "e" => Ok(TimeSlot::Evening),
            _ => Err(format!("Invalid time slot: {s}")),
        }
    }
}
