//! Collection wrapper types for displaying groups of domain objects.
//!
//! Each wrapper owns its items and handles the empty case itself.

use std::{fmt, ops::Index};

use crate::{
    dates::{DateKey, format_for_display},
    models::{Activity, DaySchedule, Theme},
};

/// Newtype wrapper for displaying the picker pool.
///
/// Entries are numbered from 0; the number is what `add` takes.
///
/// # Examples
///
/// ```rust
/// use weekendly_core::{catalog::Catalog, display::Picker};
///
/// let picker = Picker(Catalog::builtin().seed_picker());
/// let output = picker.to_string();
/// assert!(output.contains("0. 🍴 **Brunch with Friends**"));
/// ```
pub struct Picker(pub Vec<Activity>);

impl Picker {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, index: usize) -> Option<&Activity> {
        self.0.get(index)
    }
}

impl Index<usize> for Picker {
    type Output = Activity;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl fmt::Display for Picker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No activities available.");
        }
        for (index, activity) in self.0.iter().enumerate() {
            writeln!(
                f,
                "{index}. {} **{}** _({})_: {}",
                activity.icon.glyph(),
                activity.name,
                activity.category,
                activity.description
            )?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying the theme list.
pub struct Themes(pub Vec<Theme>);

impl fmt::Display for Themes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No themes found.");
        }
        for theme in &self.0 {
            write!(f, "{theme}")?;
        }
        Ok(())
    }
}

/// The plan for a run of days, one section per day.
///
/// This is also the export format; [`DayPlans::without_ids`] drops the
/// activity ids that only matter for editing.
///
/// # Examples
///
/// ```rust
/// use weekendly_core::{dates::DateKey, display::DayPlans, models::DaySchedule};
///
/// let saturday = DateKey::parse("2024-06-01").unwrap();
/// let plans = DayPlans::new(vec![(saturday, DaySchedule::default())]);
/// assert!(plans.to_string().contains("## Saturday, Jun 1"));
/// ```
pub struct DayPlans {
    pub days: Vec<(DateKey, DaySchedule)>,
    title: Option<String>,
    show_ids: bool,
}

impl DayPlans {
    pub fn new(days: Vec<(DateKey, DaySchedule)>) -> Self {
        Self {
            days,
            title: None,
            show_ids: true,
        }
    }

    /// Adds a top-level heading.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn without_ids(mut self) -> Self {
        self.show_ids = false;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl fmt::Display for DayPlans {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(title) = &self.title {
            writeln!(f, "# {title}")?;
            writeln!(f)?;
        }

        if self.days.is_empty() {
            return writeln!(f, "No days selected.");
        }

        for (date, day) in &self.days {
            writeln!(f, "## {}", format_for_display(date))?;
            writeln!(f)?;
            day.fmt_slots(f, self.show_ids)?;
        }
        Ok(())
    }
}
