//! Closed enumerations describing an activity: category, mood and icon.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of activity categories.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, Default,
)]
pub enum Category {
    Food,
    Outdoor,
    Entertainment,
    Relaxation,
    Creative,
    Social,
    /// Activities that came back from the suggestion service
    #[default]
    #[serde(rename = "AI Generated")]
    AiGenerated,
}

impl Category {
    /// Categories a suggestion service may assign.
    pub const SUGGESTABLE: [Category; 6] = [
        Category::Food,
        Category::Outdoor,
        Category::Entertainment,
        Category::Relaxation,
        Category::Creative,
        Category::Social,
    ];

    /// Stored string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Outdoor => "Outdoor",
            Category::Entertainment => "Entertainment",
            Category::Relaxation => "Relaxation",
            Category::Creative => "Creative",
            Category::Social => "Social",
            Category::AiGenerated => "AI Generated",
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "food" => Ok(Category::Food),
            "outdoor" => Ok(Category::Outdoor),
            "entertainment" => Ok(Category::Entertainment),
            "relaxation" => Ok(Category::Relaxation),
            "creative" => Ok(Category::Creative),
            "social" => Ok(Category::Social),
            "ai generated" | "ai" | "ai_generated" => Ok(Category::AiGenerated),
            _ => Err(format!("Invalid category: {s}")),
        }
    }
}

/// How the user feels about a planned activity.
///
/// Stored as the mood emoji so saved plans stay readable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Mood {
    #[default]
    #[serde(rename = "😄", alias = "Happy")]
    Happy,
    #[serde(rename = "😌", alias = "Relaxed")]
    Relaxed,
    #[serde(rename = "⚡️", alias = "Energetic")]
    Energetic,
    #[serde(rename = "☕️", alias = "Cozy")]
    Cozy,
    #[serde(rename = "🚀", alias = "Adventurous")]
    Adventurous,
}

impl Mood {
    /// All moods in selector order.
    pub const ALL: [Mood; 5] = [
        Mood::Happy,
        Mood::Relaxed,
        Mood::Energetic,
        Mood::Cozy,
        Mood::Adventurous,
    ];

    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Happy => "😄",
            Mood::Relaxed => "😌",
            Mood::Energetic => "⚡️",
            Mood::Cozy => "☕️",
            Mood::Adventurous => "🚀",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Relaxed => "relaxed",
            Mood::Energetic => "energetic",
            Mood::Cozy => "cozy",
            Mood::Adventurous => "adventurous",
        }
    }
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mood::ALL
            .into_iter()
            .find(|mood| mood.as_str().eq_ignore_ascii_case(s) || mood.emoji() == s)
            .ok_or_else(|| format!("Invalid mood: {s}"))
    }
}

/// Icon shown next to an activity.
///
/// Icons are never persisted; they are resolved from the catalog when a plan
/// is loaded. [`Icon::Sparkles`] is the placeholder for anything the catalog
/// does not know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Icon {
    Utensils,
    Mountain,
    Clapperboard,
    BookOpen,
    Palette,
    Users,
    Dumbbell,
    #[default]
    Sparkles,
}

impl Icon {
    /// Terminal glyph for the icon.
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Utensils => "🍴",
            Icon::Mountain => "⛰️",
            Icon::Clapperboard => "🎬",
            Icon::BookOpen => "📖",
            Icon::Palette => "🎨",
            Icon::Users => "👥",
            Icon::Dumbbell => "🏋️",
            Icon::Sparkles => "✨",
        }
    }
}
