//! Display formatting for the planner's data.
//!
//! Domain models implement [`std::fmt::Display`] directly; collections and
//! views that need context (numbering, a start date, whether ids are shown)
//! get newtype wrappers. Everything renders to markdown.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │    Wrappers     │    │   Markdown      │
//! │ (Activity, Day) │───▶│ (Picker, Week,  │───▶│ (terminal or    │
//! │                 │    │  DayPlans)      │    │  export file)   │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: [`Picker`], [`Themes`] and [`DayPlans`]
//! - [`calendar`]: the seven-day [`WeekView`]
//! - [`status`]: [`OperationStatus`] feedback lines
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage
//!
//! ```rust
//! use weekendly_core::{
//!     PlannerBuilder,
//!     display::{DayPlans, OperationStatus},
//!     storage::MemoryStorage,
//! };
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_storage(MemoryStorage::new())
//!     .build()?;
//!
//! let plan = DayPlans::new(planner.state().selected_plan()).with_title("My Weekend");
//! println!("{plan}");
//! println!("{}", OperationStatus::success("Plan shown"));
//! # Ok(())
//! # }
//! ```

pub mod calendar;
pub mod collections;
pub mod models;
pub mod status;

pub use calendar::WeekView;
pub use collections::{DayPlans, Picker, Themes};
pub use status::OperationStatus;
