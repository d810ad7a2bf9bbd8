//! Saving and restoring planner state.
//!
//! The plan lives in one slot as `{"schedule": ..., "selectedDays": [...]}`.
//! Icons are not written; they are looked up in the catalog when the plan is
//! read back. Anything unreadable is discarded in favour of a fresh default
//! weekend, so loading never fails.

use jiff::civil::Date;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::{
    catalog::Catalog,
    dates::default_selected_days,
    error::Result,
    models::{ActivityTemplate, Schedule},
    storage::Storage,
    store::SelectedDays,
};

/// Slot holding the schedule and the selected days.
pub const PLAN_KEY: &str = "weekendly-plan-v3";

/// Slot holding suggestions accepted into the picker.
pub const SUGGESTIONS_KEY: &str = "weekendly-suggestions-v1";

/// The part of the planner state that is saved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPlan {
    pub schedule: Schedule,
    pub selected_days: SelectedDays,
}

impl SavedPlan {
    /// A new, empty plan for the upcoming weekend.
    pub fn fresh(today: Date) -> Self {
        Self {
            schedule: Schedule::new(),
            selected_days: SelectedDays::new(default_selected_days(today)),
        }
    }
}

/// Reads the saved plan, restoring icons, or returns a fresh plan when the
/// slot is empty, unreadable or malformed.
pub fn load_plan(storage: &dyn Storage, catalog: &Catalog, today: Date) -> SavedPlan {
    let raw = match storage.get(PLAN_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!("No saved plan, starting with the upcoming weekend");
            return SavedPlan::fresh(today);
        }
        Err(e) => {
            warn!("Failed to read saved plan: {e}");
            return SavedPlan::fresh(today);
        }
    };

    match serde_json::from_str::<SavedPlan>(&raw) {
        Ok(mut plan) => {
            rehydrate_icons(&mut plan.schedule, catalog);
            debug!(
                "Loaded plan with {} days and {} activities",
                plan.schedule.len(),
                plan.schedule.total_activities()
            );
            plan
        }
        Err(e) => {
            warn!("Discarding malformed saved plan: {e}");
            SavedPlan::fresh(today)
        }
    }
}

/// Overwrites the plan slot with the given schedule and selection.
pub fn save_plan(
    storage: &mut dyn Storage,
    schedule: &Schedule,
    selected_days: &SelectedDays,
) -> Result<()> {
    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct SavedPlanRef<'a> {
        schedule: &'a Schedule,
        selected_days: &'a SelectedDays,
    }

    let text = serde_json::to_string(&SavedPlanRef {
        schedule,
        selected_days,
    })?;
    storage.set(PLAN_KEY, &text)
}

/// Reads previously accepted suggestions; bad content yields an empty list.
pub fn load_suggestions(storage: &dyn Storage, catalog: &Catalog) -> Vec<ActivityTemplate> {
    let raw = match storage.get(SUGGESTIONS_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!("Failed to read saved suggestions: {e}");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<ActivityTemplate>>(&raw) {
        Ok(mut templates) => {
            for template in &mut templates {
                template.icon = catalog.icon_for(&template.name, template.category);
            }
            templates
        }
        Err(e) => {
            warn!("Discarding malformed saved suggestions: {e}");
            Vec::new()
        }
    }
}

/// Overwrites the suggestions slot.
pub fn save_suggestions(storage: &mut dyn Storage, templates: &[ActivityTemplate]) -> Result<()> {
    let text = serde_json::to_string(templates)?;
    storage.set(SUGGESTIONS_KEY, &text)
}

fn rehydrate_icons(schedule: &mut Schedule, catalog: &Catalog) {
    for day in schedule.days_mut() {
        for activity in day.activities_mut() {
            catalog.rehydrate(activity);
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::{
        dates::DateKey,
        error::WeekendlyError,
        models::{Icon, Mood, TimeSlot},
        storage::MemoryStorage,
        store::{SlotRef, ops},
    };

    fn key(s: &str) -> DateKey {
        DateKey::parse(s).unwrap()
    }

    struct BrokenStorage;

    impl Storage for BrokenStorage {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(WeekendlyError::Configuration {
                message: "disk on fire".to_string(),
            })
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(WeekendlyError::Configuration {
                message: "quota exceeded".to_string(),
            })
        }

        fn remove(&mut self, _key: &str) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_roundtrip_restores_icons() {
        let catalog = Catalog::builtin();
        let picker = catalog.seed_picker();
        let sat = key("2024-06-01");
        let schedule = ops::add(&Schedule::new(), &picker[1], &SlotRef::new(sat, TimeSlot::Morning));
        let schedule = ops::add(&schedule, &picker[7], &SlotRef::new(sat, TimeSlot::Evening));
        let selected = SelectedDays::new([sat, key("2024-06-02")]);

        let mut storage = MemoryStorage::new();
        save_plan(&mut storage, &schedule, &selected).unwrap();
        let loaded = load_plan(&storage, &catalog, date(2024, 5, 29));

        assert_eq!(loaded.schedule, schedule);
        assert_eq!(loaded.selected_days, selected);
        let day = loaded.schedule.get(&sat).unwrap();
        assert_eq!(day.morning[0].icon, Icon::Mountain);
        assert_eq!(day.evening[0].icon, Icon::Dumbbell);
    }

    #[test]
    fn test_saved_blob_shape() {
        let selected = SelectedDays::new([key("2024-06-01")]);
        let mut storage = MemoryStorage::new();
        save_plan(&mut storage, &Schedule::new(), &selected).unwrap();
        assert_eq!(
            storage.get(PLAN_KEY).unwrap().as_deref(),
            Some(r#"{"schedule":{},"selectedDays":["2024-06-01"]}"#)
        );
    }

    #[test]
    fn test_unknown_activity_gets_placeholder_icon() {
        let raw = r#"{"schedule":{"2024-06-01":{"morning":[{"id":"1","name":"Stargazing","category":"AI Generated","description":"Look up.","mood":"🚀"}],"afternoon":[],"evening":[]}},"selectedDays":["2024-06-01"]}"#;
        let storage = MemoryStorage::new().with_slot(PLAN_KEY, raw);
        let loaded = load_plan(&storage, &Catalog::builtin(), date(2024, 5, 29));
        let activity = &loaded.schedule.get(&key("2024-06-01")).unwrap().morning[0];
        assert_eq!(activity.icon, Icon::Sparkles);
        assert_eq!(activity.mood, Mood::Adventurous);
    }

    #[test]
    fn test_missing_slot_uses_upcoming_weekend() {
        let loaded = load_plan(&MemoryStorage::new(), &Catalog::builtin(), date(2024, 5, 29));
        assert!(loaded.schedule.is_empty());
        assert_eq!(
            loaded.selected_days,
            SelectedDays::new([key("2024-06-01"), key("2024-06-02")])
        );
    }

    #[test]
    fn test_malformed_blobs_fall_back_to_defaults() {
        let fresh = SavedPlan::fresh(date(2024, 5, 29));
        for raw in [
            "not json",
            r#"{"schedule":{}}"#,
            r#"{"selectedDays":["2024-06-01"]}"#,
            r#"{"schedule":null,"selectedDays":[]}"#,
            r#"{"schedule":{"someday":{}},"selectedDays":[]}"#,
            r#"{"schedule":{},"selectedDays":["06/01/2024"]}"#,
        ] {
            let storage = MemoryStorage::new().with_slot(PLAN_KEY, raw);
            let loaded = load_plan(&storage, &Catalog::builtin(), date(2024, 5, 29));
            assert_eq!(loaded, fresh, "did not fall back for {raw}");
        }
    }

    #[test]
    fn test_unreadable_storage_falls_back() {
        let loaded = load_plan(&BrokenStorage, &Catalog::builtin(), date(2024, 5, 29));
        assert_eq!(loaded, SavedPlan::fresh(date(2024, 5, 29)));
    }

    #[test]
    fn test_save_surfaces_write_errors() {
        let mut storage = BrokenStorage;
        assert!(save_plan(&mut storage, &Schedule::new(), &SelectedDays::default()).is_err());
    }

    #[test]
    fn test_suggestions_roundtrip() {
        let catalog = Catalog::builtin();
        let templates = vec![
            ActivityTemplate::new("Stargazing", crate::models::Category::Outdoor, "Look up.", Icon::Sparkles),
            catalog.activities()[0].clone(),
        ];
        let mut storage = MemoryStorage::new();
        save_suggestions(&mut storage, &templates).unwrap();

        let loaded = load_suggestions(&storage, &catalog);
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].name, "Stargazing");
        assert_eq!(loaded[1].icon, Icon::Utensils);

        let broken = MemoryStorage::new().with_slot(SUGGESTIONS_KEY, "{");
        assert!(load_suggestions(&broken, &catalog).is_empty());
    }
}
