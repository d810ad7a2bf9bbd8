//! Display implementations for domain models.
//!
//! All output is markdown so the CLI renderer can style it; plain terminals
//! still read it fine.

use std::fmt;

use crate::models::{Activity, ActivityTemplate, Category, DaySchedule, Mood, Theme, TimeSlot};

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.emoji(), self.as_str())
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

impl Activity {
    /// Writes the activity as a list item, optionally followed by its id.
    pub(crate) fn fmt_item(&self, f: &mut fmt::Formatter<'_>, show_id: bool) -> fmt::Result {
        write!(
            f,
            "- {} **{}** _({})_ {}",
            self.icon.glyph(),
            self.name,
            self.category,
            self.mood.emoji()
        )?;
        if show_id {
            write!(f, " `{}`", self.id.as_str())?;
        }
        writeln!(f)?;
        writeln!(f, "  {}", self.description)
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_item(f, true)
    }
}

impl DaySchedule {
    pub(crate) fn fmt_slots(&self, f: &mut fmt::Formatter<'_>, show_ids: bool) -> fmt::Result {
        for (slot, activities) in self.slots() {
            writeln!(f, "### {slot}")?;
            writeln!(f)?;
            if activities.is_empty() {
                writeln!(f, "_Nothing planned_")?;
            }
            for activity in activities {
                activity.fmt_item(f, show_ids)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for DaySchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_slots(f, true)
    }
}

impl fmt::Display for ActivityTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- {} **{}** _({})_: {}",
            self.icon.glyph(),
            self.name,
            self.category,
            self.description
        )
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.name)?;
        writeln!(f)?;
        writeln!(f, "{}", self.description)?;
        writeln!(f)?;
        for template in &self.activities {
            write!(f, "{template}")?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use crate::{catalog::Catalog, models::Icon};

    use super::*;

    #[test]
    fn test_activity_item() {
        let catalog = Catalog::builtin();
        let mut activity = catalog.activities()[1].instantiate();
        activity.mood = Mood::Adventurous;
        let output = activity.to_string();
        assert!(output.starts_with("- ⛰️ **Go for a Hike** _(Outdoor)_ 🚀"));
        assert!(output.contains(activity.id.as_str()));
        assert!(output.contains("Explore a scenic trail."));
    }

    #[test]
    fn test_empty_day_lists_every_slot() {
        let output = DaySchedule::default().to_string();
        assert!(output.contains("### Morning"));
        assert!(output.contains("### Afternoon"));
        assert!(output.contains("### Evening"));
        assert_eq!(output.matches("_Nothing planned_").count(), 3);
    }

    #[test]
    fn test_theme_lists_templates() {
        let catalog = Catalog::builtin();
        let output = catalog.themes()[0].to_string();
        assert!(output.starts_with("## Relax & Recharge"));
        assert!(output.contains("Sleep In"));
        assert_eq!(output.matches("- ").count(), 4);
        assert_eq!(Icon::default().glyph(), "✨");
    }
}
