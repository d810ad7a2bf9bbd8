//! Weekendly CLI Application
//!
//! Command-line front-end for the weekend planner.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use weekendly_core::PlannerBuilder;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        api_key,
        command,
    } = Args::parse();

    let planner = PlannerBuilder::new()
        .with_database_path(database_file)
        .build()
        .context("Failed to initialize planner")?;

    let renderer = TerminalRenderer::new(!no_color);
    let mut cli = Cli::new(planner, renderer);

    info!("Weekendly started");

    match command {
        Some(Show) | None => cli.show(),
        Some(Days { command }) => cli.handle_day_command(command),
        Some(Week(args)) => cli.week(args.into()),
        Some(Picker) => cli.picker(),
        Some(Add(args)) => cli.add(args.into()),
        Some(Remove(args)) => cli.remove(args.into()),
        Some(Move(args)) => cli.move_activity(args.into()),
        Some(Mood(args)) => cli.set_mood(args.into()),
        Some(Theme { command }) => cli.handle_theme_command(command),
        Some(Suggest(args)) => cli.suggest(args, api_key).await,
        Some(Export(args)) => cli.export(args),
    }
}
