pub mod commands;
pub mod controller;
pub mod state;

pub use controller::{local_today, Clock, DashboardController, DashboardSnapshot};
pub use state::{PeriodError, PeriodSelection, PeriodState};
