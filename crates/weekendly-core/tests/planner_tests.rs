mod common;

use async_trait::async_trait;
use common::{create_test_environment, key, open_planner};
use weekendly_core::{
    AddActivity, Category, DayPlans, Mood, MoveActivity, RemoveActivity, SetMood, SlotPosition,
    SlotRef, Suggestion, TimeSlot, WeekendlyError, suggestions::SuggestionSource,
};

struct Ideas;

#[async_trait]
impl SuggestionSource for Ideas {
    async fn fetch_suggestions(&self, theme_name: &str) -> Vec<Suggestion> {
        vec![Suggestion {
            name: format!("{theme_name} Picnic"),
            description: "Pack a basket.".to_string(),
            category: None,
        }]
    }
}

#[test]
fn test_complete_weekend_workflow() {
    let (_temp_dir, db_path) = create_test_environment();
    let mut planner = open_planner(&db_path);
    let sat = key("2024-06-01");
    let sun = key("2024-06-02");

    planner.apply_theme_named("Relax & Recharge").expect("theme exists");
    assert_eq!(planner.schedule().get(&sat).unwrap().len(), 3);
    assert_eq!(planner.schedule().get(&sun).unwrap().len(), 1);

    let add = AddActivity {
        picker_index: 2,
        date: sun,
        slot: TimeSlot::Evening,
    };
    let movie = planner
        .add_from_picker(add.picker_index, add.target())
        .expect("Failed to add activity");

    let sleep_in = planner.schedule().get(&sat).unwrap().morning[0].clone();
    let moved = MoveActivity {
        from_date: sat,
        from_slot: TimeSlot::Morning,
        index: 0,
        to_date: sun,
        to_slot: TimeSlot::Afternoon,
    };
    assert!(planner.move_activity(moved.source(), moved.destination()));
    assert_eq!(planner.schedule().get(&sun).unwrap().afternoon[0].id, sleep_in.id);
    assert_eq!(planner.schedule().total_activities(), 5);

    let mood = SetMood {
        id: movie.id.clone(),
        date: sun,
        slot: TimeSlot::Evening,
        mood: Mood::Cozy,
    };
    assert!(planner.set_mood(&mood.id, mood.target(), mood.mood));

    let remove = RemoveActivity {
        id: sleep_in.id.clone(),
        date: sun,
        slot: TimeSlot::Afternoon,
    };
    assert!(planner.remove_activity(&remove.id, remove.target()));
    assert_eq!(planner.schedule().total_activities(), 4);

    let export = DayPlans::new(planner.state().selected_plan())
        .without_ids()
        .to_string();
    assert!(export.contains("## Saturday, Jun 1"));
    assert!(export.contains("## Sunday, Jun 2"));
    assert!(export.contains("**Movie Night** _(Entertainment)_ ☕️"));
    assert!(!export.contains("Sleep In"));
}

#[test]
fn test_persistence_across_connections() {
    let (_temp_dir, db_path) = create_test_environment();
    let sat = key("2024-06-01");

    let placed = {
        let mut planner = open_planner(&db_path);
        planner.set_selected_days([key("2024-06-07"), sat, key("2024-06-08")]);
        planner
            .add_from_picker(4, SlotRef::new(sat, TimeSlot::Afternoon))
            .expect("Failed to add activity")
    };

    let planner = open_planner(&db_path);
    assert_eq!(
        planner.selected_days().as_slice(),
        &[sat, key("2024-06-07"), key("2024-06-08")]
    );
    let restored = &planner.schedule().get(&sat).unwrap().afternoon[0];
    assert_eq!(restored.id, placed.id);
    assert_eq!(restored.name, "Paint or Draw");
    assert_eq!(restored.mood, Mood::Happy);
    assert_eq!(restored.icon, placed.icon);
}

#[test]
fn test_error_handling_invalid_operations() {
    let (_temp_dir, db_path) = create_test_environment();
    let mut planner = open_planner(&db_path);

    let err = planner.apply_theme_named("Nope").unwrap_err();
    assert!(matches!(err, WeekendlyError::ThemeNotFound { ref name } if name == "Nope"));

    let err = planner
        .add_from_picker(10, SlotRef::new(key("2024-06-01"), TimeSlot::Morning))
        .unwrap_err();
    assert!(err.to_string().contains("10"));

    assert!(!planner.move_activity(
        SlotPosition::new(key("2024-06-01"), TimeSlot::Evening, 0),
        SlotRef::new(key("2024-06-02"), TimeSlot::Evening),
    ));
    assert!(planner.schedule().is_empty());
}

#[tokio::test]
async fn test_suggestions_feed_the_picker() {
    let (_temp_dir, db_path) = create_test_environment();
    {
        let mut planner = open_planner(&db_path);
        let added = planner.add_suggested_activities(&Ideas, "Adventure Time").await;
        assert_eq!(added, 1);
        assert!(!planner.is_loading_suggestions());
    }

    let mut planner = open_planner(&db_path);
    assert_eq!(planner.available()[0].name, "Adventure Time Picnic");
    let placed = planner
        .add_from_picker(0, SlotRef::new(key("2024-06-02"), TimeSlot::Morning))
        .expect("Failed to add suggestion");
    assert_eq!(placed.category, Category::AiGenerated);
}
