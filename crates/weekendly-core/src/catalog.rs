//! Built-in activities and theme bundles.
//!
//! The catalog is immutable reference data. Icons are not stored with saved
//! plans, so the catalog also owns the `(name, category) -> icon` table used
//! to restore them. The table is built once, when the catalog is created.

use std::collections::HashMap;

use crate::models::{
    Activity, ActivityTemplate, Category, Category::*, Icon, Icon::*, Theme,
};

/// Topic offered for suggestions when no particular theme is chosen.
pub const ANY_TOPIC: &str = "Anything";

/// Reference data: predefined activities, themes and the icon table.
#[derive(Debug, Clone)]
pub struct Catalog {
    activities: Vec<ActivityTemplate>,
    themes: Vec<Theme>,
    icons: HashMap<(String, Category), Icon>,
}

impl Catalog {
    /// The catalog shipped with the application.
    pub fn builtin() -> Self {
        Self::new(predefined_activities(), weekend_themes())
    }

    /// Builds a catalog and indexes the icons of its predefined activities.
    pub fn new(activities: Vec<ActivityTemplate>, themes: Vec<Theme>) -> Self {
        let icons = activities
            .iter()
            .map(|a| ((a.name.clone(), a.category), a.icon))
            .collect();
        Self {
            activities,
            themes,
            icons,
        }
    }

    pub fn activities(&self) -> &[ActivityTemplate] {
        &self.activities
    }

    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    /// Finds a theme by name, ignoring case.
    pub fn theme(&self, name: &str) -> Option<&Theme> {
        self.themes
            .iter()
            .find(|theme| theme.name.eq_ignore_ascii_case(name))
    }

    /// Icon of the predefined activity with this name and category, or the
    /// placeholder when there is none.
    pub fn icon_for(&self, name: &str, category: Category) -> Icon {
        self.icons
            .get(&(name.to_string(), category))
            .copied()
            .unwrap_or_default()
    }

    /// Restores the icon of a deserialized activity.
    pub fn rehydrate(&self, activity: &mut Activity) {
        activity.icon = self.icon_for(&activity.name, activity.category);
    }

    /// Fresh picker pool: one instance of every predefined activity.
    pub fn seed_picker(&self) -> Vec<Activity> {
        self.activities
            .iter()
            .map(ActivityTemplate::instantiate)
            .collect()
    }

    /// Topics the suggestion service can be asked about.
    pub fn suggestion_topics(&self) -> Vec<&str> {
        std::iter::once(ANY_TOPIC)
            .chain(self.themes.iter().map(|theme| theme.name.as_str()))
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn template(name: &str, category: Category, description: &str, icon: Icon) -> ActivityTemplate {
    ActivityTemplate::new(name, category, description, icon)
}

fn predefined_activities() -> Vec<ActivityTemplate> {
    vec![
        template("Brunch with Friends", Food, "Enjoy a delicious mid-morning meal.", Utensils),
        template("Go for a Hike", Outdoor, "Explore a scenic trail.", Mountain),
        template("Movie Night", Entertainment, "Watch a new blockbuster or an old classic.", Clapperboard),
        template("Read a Book", Relaxation, "Get lost in a good story.", BookOpen),
        template("Paint or Draw", Creative, "Unleash your inner artist.", Palette),
        template("Visit a Museum", Entertainment, "Soak in some culture and history.", Clapperboard),
        template("Board Game Cafe", Social, "Challenge friends to a friendly competition.", Users),
        template("Workout Session", Outdoor, "Get the blood pumping.", Dumbbell),
        template("Farmers Market", Food, "Shop for fresh, local produce.", Utensils),
        template("Yoga & Meditation", Relaxation, "Find your inner peace.", BookOpen),
    ]
}

fn weekend_themes() -> Vec<Theme> {
    vec![
        Theme {
            name: "Relax & Recharge".to_string(),
            description: "A slow-paced weekend to de-stress.".to_string(),
            activities: vec![
                template("Sleep In", Relaxation, "No alarms, just rest.", BookOpen),
                template("Cozy Brunch at Home", Food, "Pancakes and coffee.", Utensils),
                template("Read in the Park", Relaxation, "Enjoy a book under a tree.", BookOpen),
                template("Binge-watch a Series", Entertainment, "Catch up on your favorite show.", Clapperboard),
            ],
        },
        Theme {
            name: "Adventure Time".to_string(),
            description: "An active weekend full of exploration.".to_string(),
            activities: vec![
                template("Morning Hike", Outdoor, "Conquer a nearby peak.", Mountain),
                template("Try a New Restaurant", Food, "Explore new culinary horizons.", Utensils),
                template("Kayaking or Canoeing", Outdoor, "Get out on the water.", Mountain),
                template("Explore a New Neighborhood", Social, "Discover hidden gems in your city.", Users),
            ],
        },
        Theme {
            name: "Foodie Fiesta".to_string(),
            description: "A weekend dedicated to delicious food.".to_string(),
            activities: vec![
                template("Visit a Farmers Market", Food, "Gather fresh ingredients.", Utensils),
                template("Take a Cooking Class", Creative, "Learn a new recipe.", Palette),
                template("Dinner at a Fancy Restaurant", Food, "Indulge in a gourmet meal.", Utensils),
                template("Bake Cookies at Home", Food, "Fill your home with sweet smells.", Utensils),
            ],
        },
    ]
}
