//! Week calendar view.

use std::fmt;

use jiff::civil::Date;

use crate::{
    dates::{DateKey, month_label, short_weekday, week_dates},
    models::Schedule,
    store::SelectedDays,
};

/// Seven-day calendar table starting at a given date.
///
/// Selected days are marked, and every day shows how many activities it has
/// planned, selected or not.
pub struct WeekView {
    pub start: Date,
    days: Vec<WeekDay>,
}

struct WeekDay {
    date: Date,
    selected: bool,
    planned: usize,
}

impl WeekView {
    pub fn new(start: Date, selected: &SelectedDays, schedule: &Schedule) -> Self {
        let days = week_dates(start)
            .into_iter()
            .map(|date| {
                let key = DateKey::from_date(date);
                WeekDay {
                    date,
                    selected: selected.contains(&key),
                    planned: schedule.get(&key).map_or(0, |day| day.len()),
                }
            })
            .collect();
        Self { start, days }
    }
}

impl fmt::Display for WeekView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", month_label(self.start))?;
        writeln!(f)?;
        writeln!(f, "| Day | Date | Selected | Planned |")?;
        writeln!(f, "|:-|:-|:-:|-:|")?;
        for day in &self.days {
            writeln!(
                f,
                "| {} | {} | {} | {} |",
                short_weekday(day.date),
                DateKey::from_date(day.date),
                if day.selected { "✔" } else { "" },
                day.planned
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::{
        catalog::Catalog,
        models::TimeSlot,
        store::{SlotRef, ops},
    };

    #[test]
    fn test_week_view_marks_selection_and_counts() {
        let sat = DateKey::from_date(date(2024, 6, 1));
        let picker = Catalog::builtin().seed_picker();
        let schedule = ops::add(&Schedule::new(), &picker[0], &SlotRef::new(sat, TimeSlot::Morning));
        let schedule = ops::add(&schedule, &picker[1], &SlotRef::new(sat, TimeSlot::Evening));
        let selected = SelectedDays::new([sat]);

        let output = WeekView::new(date(2024, 5, 29), &selected, &schedule).to_string();

        assert!(output.starts_with("## May 2024\n"));
        assert!(output.contains("| Wed | 2024-05-29 |  | 0 |"));
        assert!(output.contains("| Sat | 2024-06-01 | ✔ | 2 |"));
        assert!(output.contains("| Tue | 2024-06-04 |  | 0 |"));
        assert_eq!(output.lines().count(), 11);
    }
}
