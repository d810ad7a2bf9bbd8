//! Builder for creating and configuring Planner instances.

use std::path::{Path, PathBuf};

use jiff::civil::Date;
use log::info;

use super::Planner;
use crate::{
    catalog::Catalog,
    dates,
    error::{Result, WeekendlyError},
    models::ActivityTemplate,
    persistence,
    storage::{SqliteStorage, Storage},
    store::PlannerState,
};

/// Builder for creating and configuring Planner instances.
pub struct PlannerBuilder {
    database_path: Option<PathBuf>,
    storage: Option<Box<dyn Storage>>,
    catalog: Option<Catalog>,
    today: Option<Date>,
}

impl PlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            storage: None,
            catalog: None,
            today: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/weekendly/weekendly.db` or
    /// `~/.local/share/weekendly/weekendly.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses the given storage instead of opening a database file.
    pub fn with_storage(mut self, storage: impl Storage + 'static) -> Self {
        self.storage = Some(Box::new(storage));
        self
    }

    /// Replaces the built-in catalog.
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Fixes the date the default weekend is computed from.
    pub fn with_today(mut self, today: Date) -> Self {
        self.today = Some(today);
        self
    }

    /// Builds the planner, restoring any saved plan.
    ///
    /// # Errors
    ///
    /// Returns `WeekendlyError::FileSystem` if the database directory cannot
    /// be created, `WeekendlyError::XdgDirectory` if no default location
    /// exists and `WeekendlyError::Storage` if the database cannot be opened
    pub fn build(self) -> Result<Planner> {
        let storage = match self.storage {
            Some(storage) => storage,
            None => Box::new(Self::open_database(self.database_path)?),
        };
        let catalog = self.catalog.unwrap_or_default();
        let today = self.today.unwrap_or_else(dates::today);

        let saved = persistence::load_plan(storage.as_ref(), &catalog, today);
        let accepted = persistence::load_suggestions(storage.as_ref(), &catalog);

        let available = accepted
            .iter()
            .map(ActivityTemplate::instantiate)
            .chain(catalog.seed_picker())
            .collect();

        info!(
            "Planner ready: {} selected days, {} planned activities",
            saved.selected_days.len(),
            saved.schedule.total_activities()
        );

        let state = PlannerState::new(saved.schedule, saved.selected_days, available);
        Ok(Planner::new(state, catalog, storage, accepted))
    }

    fn open_database(path: Option<PathBuf>) -> Result<SqliteStorage> {
        let db_path = match path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| WeekendlyError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        SqliteStorage::open(&db_path)
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("weekendly")
            .place_data_file("weekendly.db")
            .map_err(|e| WeekendlyError::XdgDirectory(e.to_string()))
    }
}

impl Default for PlannerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
