#[cfg(test)]
mod model_tests {
    use serde_json::json;

    use crate::{
        dates::DateKey,
        models::{
            Activity, ActivityId, ActivityTemplate, Category, DaySchedule, Icon, Mood, Schedule,
            TimeSlot,
        },
    };

    fn create_test_activity() -> Activity {
        Activity {
            id: ActivityId::from("a-1"),
            name: "Movie Night".to_string(),
            category: Category::Entertainment,
            description: "Watch a new blockbuster or an old classic.".to_string(),
            icon: Icon::Clapperboard,
            mood: Mood::Cozy,
        }
    }

    #[test]
    fn test_activity_serializes_without_icon() {
        let value = serde_json::to_value(create_test_activity()).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "a-1",
                "name": "Movie Night",
                "category": "Entertainment",
                "description": "Watch a new blockbuster or an old classic.",
                "mood": "☕️",
            })
        );
    }

    #[test]
    fn test_activity_deserializes_with_placeholder_icon() {
        let activity: Activity = serde_json::from_value(json!({
            "id": "x",
            "name": "Stargazing",
            "category": "AI Generated",
            "description": "Look up.",
            "mood": "🚀",
        }))
        .unwrap();
        assert_eq!(activity.category, Category::AiGenerated);
        assert_eq!(activity.mood, Mood::Adventurous);
        assert_eq!(activity.icon, Icon::Sparkles);
    }

    #[test]
    fn test_missing_mood_defaults_to_happy() {
        let activity: Activity = serde_json::from_value(json!({
            "id": "x",
            "name": "Nap",
            "category": "Relaxation",
            "description": "",
        }))
        .unwrap();
        assert_eq!(activity.mood, Mood::Happy);
    }

    #[test]
    fn test_day_schedule_always_has_three_slots() {
        let day: DaySchedule = serde_json::from_value(json!({ "morning": [] })).unwrap();
        assert!(day.afternoon.is_empty());
        assert!(day.evening.is_empty());

        let value = serde_json::to_value(DaySchedule::default()).unwrap();
        assert_eq!(value, json!({ "morning": [], "afternoon": [], "evening": [] }));
    }

    #[test]
    fn test_schedule_keys_are_date_keys() {
        let mut schedule = Schedule::new();
        schedule
            .day_mut(DateKey::parse("2024-06-01").unwrap())
            .slot_mut(TimeSlot::Evening)
            .push(create_test_activity());

        let text = serde_json::to_string(&schedule).unwrap();
        assert!(text.starts_with("{\"2024-06-01\":"));

        let back: Schedule = serde_json::from_str(&text).unwrap();
        assert_eq!(back.total_activities(), 1);

        let bad = serde_json::from_value::<Schedule>(json!({ "tomorrow": {} }));
        assert!(bad.is_err());
    }

    #[test]
    fn test_instantiate_mints_distinct_ids() {
        let template = ActivityTemplate::new(
            "Go for a Hike",
            Category::Outdoor,
            "Explore a scenic trail.",
            Icon::Mountain,
        );
        let a = template.instantiate();
        let b = template.instantiate();
        assert_ne!(a.id, b.id);
        assert_eq!(a.icon, Icon::Mountain);
        assert_eq!(a.with_fresh_id().name, a.name);
        assert_ne!(a.with_fresh_id().id, a.id);
    }

    #[test]
    fn test_enum_parsing() {
        assert_eq!("Morning".parse::<TimeSlot>(), Ok(TimeSlot::Morning));
        assert_eq!("e".parse::<TimeSlot>(), Ok(TimeSlot::Evening));
        assert!("noon".parse::<TimeSlot>().is_err());
        assert_eq!("AI Generated".parse::<Category>(), Ok(Category::AiGenerated));
        assert_eq!("social".parse::<Category>(), Ok(Category::Social));
        assert_eq!("cozy".parse::<Mood>(), Ok(Mood::Cozy));
        assert_eq!("😌".parse::<Mood>(), Ok(Mood::Relaxed));
    }
}
