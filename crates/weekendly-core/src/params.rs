//! Parameter structures for planner operations.
//!
//! Front-ends describe a request with these plain structs and convert them
//! into the planner's slot addresses. They carry no framework derives; the CLI
//! wraps each one in a clap `Args` struct and converts with `.into()`.
//!
//! ```ignore
//! #[derive(Args)]
//! pub struct AddArgs { pub index: usize, pub date: DateKey, pub slot: TimeSlot }
//!
//! impl From<AddArgs> for AddActivity {
//!     fn from(args: AddArgs) -> Self {
//!         AddActivity { picker_index: args.index, date: args.date, slot: args.slot }
//!     }
//! }
//! ```

use jiff::civil::Date;

use crate::{
    dates::{DateKey, add_days},
    models::{ActivityId, Mood, TimeSlot},
    store::{SlotPosition, SlotRef},
};

/// Place a copy of a picker entry.
#[derive(Debug, Clone)]
pub struct AddActivity {
    pub picker_index: usize,
    pub date: DateKey,
    pub slot: TimeSlot,
}

impl AddActivity {
    pub fn target(&self) -> SlotRef {
        SlotRef::new(self.date, self.slot)
    }
}

/// Remove an activity by id from one slot.
#[derive(Debug, Clone)]
pub struct RemoveActivity {
    pub id: ActivityId,
    pub date: DateKey,
    pub slot: TimeSlot,
}

impl RemoveActivity {
    pub fn target(&self) -> SlotRef {
        SlotRef::new(self.date, self.slot)
    }
}

/// Move the activity at a position to the end of another slot.
#[derive(Debug, Clone)]
pub struct MoveActivity {
    pub from_date: DateKey,
    pub from_slot: TimeSlot,
    pub index: usize,
    pub to_date: DateKey,
    pub to_slot: TimeSlot,
}

impl MoveActivity {
    pub fn source(&self) -> SlotPosition {
        SlotPosition::new(self.from_date, self.from_slot, self.index)
    }

    pub fn destination(&self) -> SlotRef {
        SlotRef::new(self.to_date, self.to_slot)
    }
}

/// Change the mood tag of a planned activity.
#[derive(Debug, Clone)]
pub struct SetMood {
    pub id: ActivityId,
    pub date: DateKey,
    pub slot: TimeSlot,
    pub mood: Mood,
}

impl SetMood {
    pub fn target(&self) -> SlotRef {
        SlotRef::new(self.date, self.slot)
    }
}

/// Which seven days the calendar view shows.
///
/// Without a start date the week begins today; `offset` shifts it by whole
/// weeks, negative values going back.
#[derive(Debug, Clone, Default)]
pub struct WeekWindow {
    pub from: Option<DateKey>,
    pub offset: i64,
}

impl WeekWindow {
    pub fn start(&self, today: Date) -> Date {
        let base = self.from.map_or(today, |key| key.date());
        add_days(base, self.offset.saturating_mul(7))
    }
}
