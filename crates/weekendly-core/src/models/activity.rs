//! Activity model definitions.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Category, Icon, Mood};

/// Opaque activity identifier.
///
/// Ids are minted once, when an activity instance is created, and never
/// change afterwards. They only need to be unique within a single slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityId(String);

impl ActivityId {
    /// Mints a fresh random id.
    pub fn mint() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ActivityId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ActivityId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// An activity without identity: catalog entries, theme items and accepted
/// suggestions all start out as templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityTemplate {
    pub name: String,
    pub category: Category,
    pub description: String,
    #[serde(skip)]
    pub icon: Icon,
}

impl ActivityTemplate {
    pub fn new(name: &str, category: Category, description: &str, icon: Icon) -> Self {
        Self {
            name: name.to_string(),
            category,
            description: description.to_string(),
            icon,
        }
    }

    /// Creates an instance with a fresh id and the default mood.
    pub fn instantiate(&self) -> Activity {
        Activity {
            id: ActivityId::mint(),
            name: self.name.clone(),
            category: self.category,
            description: self.description.clone(),
            icon: self.icon,
            mood: Mood::default(),
        }
    }
}

/// A concrete activity, either waiting in the picker or placed in a slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Identifier, stable across moves
    pub id: ActivityId,

    pub name: String,

    pub category: Category,

    pub description: String,

    /// Resolved from the catalog on load, never serialized
    #[serde(skip)]
    pub icon: Icon,

    #[serde(default)]
    pub mood: Mood,
}

impl Activity {
    /// Copy of this activity under a newly minted id.
    pub fn with_fresh_id(&self) -> Self {
        Self {
            id: ActivityId::mint(),
            ..self.clone()
        }
    }
}

/// One activity idea returned by the suggestion service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub name: String,
    pub description: String,
    /// Missing categories are treated as [`Category::AiGenerated`]
    #[serde(default)]
    pub category: Option<Category>,
}
