use std::path::{Path, PathBuf};

use jiff::civil::{Date, date};
use tempfile::TempDir;
use weekendly_core::{DateKey, Planner, PlannerBuilder};

/// Wednesday; the default weekend is 2024-06-01 and 2024-06-02.
pub const TODAY: Date = date(2024, 5, 29);

/// Helper function to create a temporary directory and database path
pub fn create_test_environment() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let db_path = temp_dir.path().join("weekendly.db");
    (temp_dir, db_path)
}

/// Opens a planner on the given database file.
pub fn open_planner(db_path: &Path) -> Planner {
    PlannerBuilder::new()
        .with_database_path(Some(db_path))
        .with_today(TODAY)
        .build()
        .expect("Failed to create planner")
}

pub fn key(s: &str) -> DateKey {
    DateKey::parse(s).expect("valid date key")
}
