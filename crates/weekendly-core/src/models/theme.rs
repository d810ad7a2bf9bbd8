//! Theme bundles.

use super::ActivityTemplate;

/// A named bundle of activity templates that can be laid out over the
/// selected days in one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub activities: Vec<ActivityTemplate>,
}
