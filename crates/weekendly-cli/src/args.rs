//! Command-line argument definitions using clap.
//!
//! Each command's clap struct converts into the matching core parameter type
//! with `From`, so help text and parsing stay here and the core stays free of
//! clap:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner
//! ```

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use weekendly_core::{
    ActivityId, AddActivity, DateKey, Mood, MoveActivity, RemoveActivity, SetMood, TimeSlot,
    WeekWindow, catalog::ANY_TOPIC,
};

/// Plan your weekend from the terminal
///
/// Pick the days you want to plan, drop activities into their morning,
/// afternoon and evening slots, apply a ready-made theme or ask for fresh
/// ideas, then export the result. Without a command the current plan is
/// shown.
#[derive(Parser)]
#[command(version, about, name = "weekendly")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/weekendly/weekendly.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// API key for activity suggestions
    #[arg(long, global = true, env = "WEEKENDLY_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the plan for the selected days
    #[command(alias = "s")]
    Show,
    /// Choose which days are planned
    #[command(alias = "d")]
    Days {
        #[command(subcommand)]
        command: DayCommands,
    },
    /// Show a seven-day calendar
    #[command(alias = "w")]
    Week(WeekArgs),
    /// List the activities that can be added
    #[command(alias = "p")]
    Picker,
    /// Add a picker activity to a slot
    #[command(alias = "a")]
    Add(AddArgs),
    /// Remove an activity from a slot
    #[command(alias = "rm")]
    Remove(RemoveArgs),
    /// Move an activity to the end of another slot
    #[command(alias = "mv")]
    Move(MoveArgs),
    /// Tag a planned activity with a mood
    Mood(MoodArgs),
    /// List or apply weekend themes
    #[command(alias = "t")]
    Theme {
        #[command(subcommand)]
        command: ThemeCommands,
    },
    /// Ask for new activity ideas and add them to the picker
    Suggest(SuggestArgs),
    /// Write the plan as markdown
    Export(ExportArgs),
}

#[derive(Subcommand)]
pub enum DayCommands {
    /// List the selected days
    #[command(alias = "l")]
    List,
    /// Select a day, or deselect it when already selected
    #[command(alias = "t")]
    Toggle(ToggleDayArgs),
    /// Replace the selection with the given days
    Set(SetDaysArgs),
}

#[derive(ClapArgs)]
pub struct ToggleDayArgs {
    #[arg(help = "Day to toggle (YYYY-MM-DD)")]
    pub date: DateKey,
}

#[derive(ClapArgs)]
pub struct SetDaysArgs {
    #[arg(required = true, help = "Days to select (YYYY-MM-DD)")]
    pub dates: Vec<DateKey>,
}

/// Show seven days starting today, or at `--from`
#[derive(ClapArgs)]
pub struct WeekArgs {
    #[arg(long, help = "First day of the week shown (YYYY-MM-DD)")]
    pub from: Option<DateKey>,
    #[arg(
        long,
        default_value_t = 0,
        allow_hyphen_values = true,
        help = "Shift by this many weeks; negative goes back"
    )]
    pub offset: i64,
}

impl From<WeekArgs> for WeekWindow {
    fn from(val: WeekArgs) -> Self {
        WeekWindow {
            from: val.from,
            offset: val.offset,
        }
    }
}

/// Add a copy of a picker activity
///
/// The picker entry stays available; the planned copy gets its own id.
#[derive(ClapArgs)]
pub struct AddArgs {
    #[arg(help = "Picker position, as shown by `weekendly picker`")]
    pub index: usize,
    #[arg(help = "Day (YYYY-MM-DD)")]
    pub date: DateKey,
    #[arg(help = "Slot: morning, afternoon or evening")]
    pub slot: TimeSlot,
}

impl From<AddArgs> for AddActivity {
    fn from(val: AddArgs) -> Self {
        AddActivity {
            picker_index: val.index,
            date: val.date,
            slot: val.slot,
        }
    }
}

#[derive(ClapArgs)]
pub struct RemoveArgs {
    #[arg(help = "Id of the planned activity")]
    pub id: ActivityId,
    #[arg(help = "Day (YYYY-MM-DD)")]
    pub date: DateKey,
    #[arg(help = "Slot: morning, afternoon or evening")]
    pub slot: TimeSlot,
}

impl From<RemoveArgs> for RemoveActivity {
    fn from(val: RemoveArgs) -> Self {
        RemoveActivity {
            id: val.id,
            date: val.date,
            slot: val.slot,
        }
    }
}

/// Move the activity at a slot position
///
/// The activity keeps its id and goes to the end of the target slot.
#[derive(ClapArgs)]
pub struct MoveArgs {
    #[arg(help = "Current day (YYYY-MM-DD)")]
    pub from_date: DateKey,
    #[arg(help = "Current slot")]
    pub from_slot: TimeSlot,
    #[arg(help = "Position within the current slot, starting at 0")]
    pub index: usize,
    #[arg(help = "Target day (YYYY-MM-DD)")]
    pub to_date: DateKey,
    #[arg(help = "Target slot")]
    pub to_slot: TimeSlot,
}

impl From<MoveArgs> for MoveActivity {
    fn from(val: MoveArgs) -> Self {
        MoveActivity {
            from_date: val.from_date,
            from_slot: val.from_slot,
            index: val.index,
            to_date: val.to_date,
            to_slot: val.to_slot,
        }
    }
}

#[derive(ClapArgs)]
pub struct MoodArgs {
    #[arg(help = "Id of the planned activity")]
    pub id: ActivityId,
    #[arg(help = "Day (YYYY-MM-DD)")]
    pub date: DateKey,
    #[arg(help = "Slot: morning, afternoon or evening")]
    pub slot: TimeSlot,
    #[arg(help = "happy, relaxed, energetic, cozy or adventurous")]
    pub mood: Mood,
}

impl From<MoodArgs> for SetMood {
    fn from(val: MoodArgs) -> Self {
        SetMood {
            id: val.id,
            date: val.date,
            slot: val.slot,
            mood: val.mood,
        }
    }
}

#[derive(Subcommand)]
pub enum ThemeCommands {
    /// List the available themes
    #[command(alias = "l")]
    List,
    /// Replace the plan with a theme laid out over the selected days
    #[command(alias = "a")]
    Apply(ApplyThemeArgs),
}

#[derive(ClapArgs)]
pub struct ApplyThemeArgs {
    #[arg(help = "Theme name, case-insensitive")]
    pub name: String,
}

#[derive(ClapArgs)]
pub struct SuggestArgs {
    #[arg(default_value = ANY_TOPIC, help = "Theme to get ideas for")]
    pub theme: String,
    #[arg(long, help = "Model used for suggestions")]
    pub model: Option<String>,
}

#[derive(ClapArgs)]
pub struct ExportArgs {
    #[arg(short, long, help = "Write to this file instead of stdout")]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_move_args_convert() {
        let args = Args::parse_from([
            "weekendly", "move", "2024-06-01", "morning", "1", "2024-06-02", "e",
        ]);
        let Some(Commands::Move(args)) = args.command else {
            panic!("expected move command");
        };
        let params = MoveActivity::from(args);
        assert_eq!(params.index, 1);
        assert_eq!(params.to_slot, TimeSlot::Evening);
    }

    #[test]
    fn test_rejects_bad_date() {
        assert!(Args::try_parse_from(["weekendly", "days", "toggle", "2024-6-1"]).is_err());
    }

    #[test]
    fn test_negative_week_offset() {
        let args = Args::parse_from(["weekendly", "week", "--offset", "-2"]);
        let Some(Commands::Week(week)) = args.command else {
            panic!("expected week command");
        };
        assert_eq!(WeekWindow::from(week).offset, -2);
    }
}
