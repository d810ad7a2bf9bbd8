//! Pure schedule transitions.
//!
//! Each function takes the prior state by reference and returns the next
//! state. Callers never observe a half-applied change.

use crate::{
    catalog::Catalog,
    dates::DateKey,
    models::{Activity, ActivityId, ActivityTemplate, Mood, Schedule, Suggestion, Theme, TimeSlot},
};

use super::{SelectedDays, SlotPosition, SlotRef};

/// Places a copy of `activity` at the end of the target slot.
///
/// The copy gets a freshly minted id, so a picker entry can be placed any
/// number of times without its instances sharing an identity.
pub fn add(schedule: &Schedule, activity: &Activity, target: &SlotRef) -> Schedule {
    let mut next = schedule.clone();
    next.day_mut(target.date)
        .slot_mut(target.slot)
        .push(activity.with_fresh_id());
    next
}

/// Removes the activity with `id` from one slot. Unknown days and ids leave
/// the schedule as it was.
pub fn remove(schedule: &Schedule, id: &ActivityId, target: &SlotRef) -> Schedule {
    let mut next = schedule.clone();
    if let Some(day) = next.get_mut(&target.date) {
        let activities = day.slot_mut(target.slot);
        if let Some(pos) = activities.iter().position(|a| &a.id == id) {
            activities.remove(pos);
        }
    }
    next
}

/// Moves the activity at `source` to the end of `destination`, keeping its
/// id.
///
/// A stale source index returns the prior schedule unchanged. The source
/// removal happens before the destination is looked up, so moving within a
/// single slot sends the activity to the tail without duplicating it.
pub fn move_activity(schedule: &Schedule, source: &SlotPosition, destination: &SlotRef) -> Schedule {
    let Some(activity) = schedule
        .get(&source.date)
        .and_then(|day| day.slot(source.slot).get(source.index))
        .cloned()
    else {
        return schedule.clone();
    };

    let mut next = schedule.clone();
    next.day_mut(source.date)
        .slot_mut(source.slot)
        .remove(source.index);
    next.day_mut(destination.date)
        .slot_mut(destination.slot)
        .push(activity);
    next
}

/// Builds a brand-new schedule from a theme.
///
/// Every selected day starts empty and everything else is dropped. Template
/// `k` goes to day `k / 3`, slot `k % 3`; templates that do not fit are
/// dropped without notice.
pub fn apply_theme(theme: &Theme, selected: &SelectedDays) -> Schedule {
    let mut next: Schedule = selected
        .iter()
        .map(|day| (*day, Default::default()))
        .collect();

    let cells = selected
        .iter()
        .flat_map(|day| TimeSlot::ALL.into_iter().map(move |slot| (*day, slot)));
    for (template, (day, slot)) in theme.activities.iter().zip(cells) {
        next.day_mut(day).slot_mut(slot).push(template.instantiate());
    }
    next
}

/// Changes the mood of one placed activity, keeping its position and id.
pub fn set_mood(schedule: &Schedule, id: &ActivityId, target: &SlotRef, mood: Mood) -> Schedule {
    let mut next = schedule.clone();
    if let Some(activity) = next
        .get_mut(&target.date)
        .and_then(|day| day.slot_mut(target.slot).iter_mut().find(|a| &a.id == id))
    {
        activity.mood = mood;
    }
    next
}

/// Replaces the selection with `days`, sorted and de-duplicated.
pub fn select_days(days: impl IntoIterator<Item = DateKey>) -> SelectedDays {
    SelectedDays::new(days)
}

/// Turns suggestions into picker activities and puts them in front of the
/// existing pool, keeping their order.
pub fn accept_suggestions(
    available: &[Activity],
    suggestions: &[Suggestion],
    catalog: &Catalog,
) -> Vec<Activity> {
    suggestions
        .iter()
        .map(|s| suggestion_template(s, catalog).instantiate())
        .chain(available.iter().cloned())
        .collect()
}

/// Template for a suggestion, with the category defaulted and the icon
/// resolved through the catalog.
pub fn suggestion_template(suggestion: &Suggestion, catalog: &Catalog) -> ActivityTemplate {
    let category = suggestion.category.unwrap_or_default();
    ActivityTemplate {
        name: suggestion.name.clone(),
        category,
        description: suggestion.description.clone(),
        icon: catalog.icon_for(&suggestion.name, category),
    }
}
