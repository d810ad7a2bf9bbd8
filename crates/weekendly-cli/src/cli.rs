//! Command handlers.
//!
//! Every handler turns its arguments into core parameters, calls the planner
//! and renders the outcome as markdown. Planner errors are wrapped with
//! `anyhow` context; "nothing to do" outcomes are reported, not failed.

use std::fs;

use anyhow::{Context, Result};
use log::{debug, info};
use weekendly_core::{
    AddActivity, DayPlans, MoveActivity, OperationStatus, Picker, Planner, RemoveActivity, SetMood,
    Themes, WeekView, WeekWindow,
    dates::{self, format_for_display},
    suggestions::{GeminiClient, GeminiConfig, NoSuggestions, SuggestionSource},
};

use crate::{
    args::{ApplyThemeArgs, DayCommands, ExportArgs, SuggestArgs, ThemeCommands},
    renderer::TerminalRenderer,
};

const PLAN_TITLE: &str = "Weekend Plan";

pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    pub fn show(&self) -> Result<()> {
        let plans = DayPlans::new(self.planner.state().selected_plan()).with_title(PLAN_TITLE);
        self.renderer.render(&plans.to_string())
    }

    pub fn handle_day_command(&mut self, command: DayCommands) -> Result<()> {
        match command {
            DayCommands::List => {
                let mut output = String::from("# Selected Days\n\n");
                if self.planner.selected_days().is_empty() {
                    output.push_str("No days selected.\n");
                }
                for day in self.planner.selected_days() {
                    output.push_str(&format!("- {} `{day}`\n", format_for_display(day)));
                }
                self.renderer.render(&output)
            }
            DayCommands::Toggle(args) => {
                let selected = self.planner.toggle_day(args.date);
                let label = format_for_display(&args.date);
                let status = if selected {
                    OperationStatus::success(format!("Selected {label}"))
                } else {
                    OperationStatus::success(format!("Deselected {label}"))
                };
                self.renderer.render(&status.to_string())
            }
            DayCommands::Set(args) => {
                self.planner.set_selected_days(args.dates);
                let status = OperationStatus::success(format!(
                    "Planning {} day(s)",
                    self.planner.selected_days().len()
                ));
                self.renderer.render(&status.to_string())
            }
        }
    }

    pub fn week(&self, window: WeekWindow) -> Result<()> {
        let start = window.start(dates::today());
        let view = WeekView::new(start, self.planner.selected_days(), self.planner.schedule());
        self.renderer.render(&view.to_string())
    }

    pub fn picker(&self) -> Result<()> {
        let picker = Picker(self.planner.available().to_vec());
        self.renderer.render(&format!("# Activities\n\n{picker}"))
    }

    pub fn add(&mut self, params: AddActivity) -> Result<()> {
        let target = params.target();
        let placed = self
            .planner
            .add_from_picker(params.picker_index, target)
            .context("Failed to add activity")?;
        let status = OperationStatus::success(format!(
            "Added {} to {} {}",
            placed.name,
            format_for_display(&target.date),
            target.slot.as_str()
        ));
        self.renderer.render(&format!("{status}\n{placed}"))
    }

    pub fn remove(&mut self, params: RemoveActivity) -> Result<()> {
        let removed = self.planner.remove_activity(&params.id, params.target());
        let status = OperationStatus::from_outcome(
            removed,
            format!("Removed {}", params.id.as_str()),
            format!(
                "{} is not planned for {} {}",
                params.id.as_str(),
                params.date,
                params.slot.as_str()
            ),
        );
        self.renderer.render(&status.to_string())
    }

    pub fn move_activity(&mut self, params: MoveActivity) -> Result<()> {
        let moved = self
            .planner
            .move_activity(params.source(), params.destination());
        let status = OperationStatus::from_outcome(
            moved,
            format!(
                "Moved to {} {}",
                format_for_display(&params.to_date),
                params.to_slot.as_str()
            ),
            format!(
                "Nothing at {} {} position {}",
                params.from_date,
                params.from_slot.as_str(),
                params.index
            ),
        );
        self.renderer.render(&status.to_string())
    }

    pub fn set_mood(&mut self, params: SetMood) -> Result<()> {
        let changed = self
            .planner
            .set_mood(&params.id, params.target(), params.mood);
        let status = OperationStatus::from_outcome(
            changed,
            format!("Mood set to {}", params.mood),
            format!("{} is not planned there", params.id.as_str()),
        );
        self.renderer.render(&status.to_string())
    }

    pub fn handle_theme_command(&mut self, command: ThemeCommands) -> Result<()> {
        match command {
            ThemeCommands::List => {
                let themes = Themes(self.planner.catalog().themes().to_vec());
                self.renderer.render(&format!("# Themes\n\n{themes}"))
            }
            ThemeCommands::Apply(ApplyThemeArgs { name }) => {
                self.planner
                    .apply_theme_named(&name)
                    .with_context(|| format!("Failed to apply theme '{name}'"))?;
                info!("Applied theme {name}");
                let status = OperationStatus::success(format!("Applied {name}"));
                let plans = DayPlans::new(self.planner.state().selected_plan());
                self.renderer.render(&format!("{status}\n{plans}"))
            }
        }
    }

    pub async fn suggest(&mut self, args: SuggestArgs, api_key: Option<String>) -> Result<()> {
        let mut config = GeminiConfig::new(api_key);
        if let Some(model) = args.model {
            config = config.with_model(model);
        }
        let client = GeminiClient::new(config).context("Failed to set up suggestions")?;

        let source: &dyn SuggestionSource = if client.has_credential() {
            &client
        } else {
            debug!("No API key, using the empty suggestion source");
            &NoSuggestions
        };

        let added = self
            .planner
            .add_suggested_activities(source, &args.theme)
            .await;

        if added == 0 {
            let status = OperationStatus::unchanged(if client.has_credential() {
                "No suggestions came back"
            } else {
                "Set WEEKENDLY_API_KEY or pass --api-key to get suggestions"
            });
            return self.renderer.render(&status.to_string());
        }

        let picker = Picker(self.planner.available()[..added].to_vec());
        let status = OperationStatus::success(format!(
            "Added {added} idea(s) for {} to the picker",
            args.theme
        ));
        self.renderer.render(&format!("{status}\n{picker}"))
    }

    pub fn export(&self, args: ExportArgs) -> Result<()> {
        let markdown = DayPlans::new(self.planner.state().selected_plan())
            .with_title(PLAN_TITLE)
            .without_ids()
            .to_string();

        match args.output {
            Some(path) => {
                fs::write(&path, markdown)
                    .with_context(|| format!("Failed to export plan to {}", path.display()))?;
                let status = OperationStatus::success(format!("Exported to {}", path.display()));
                self.renderer.render(&status.to_string())
            }
            None => {
                print!("{markdown}");
                Ok(())
            }
        }
    }
}
