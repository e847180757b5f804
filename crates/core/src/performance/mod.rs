//! NAV history bookkeeping - calculation and per-day recording.

pub mod nav_calculator;
mod performance_model;
mod performance_tracker;

pub use nav_calculator::*;
pub use performance_model::*;
pub use performance_tracker::*;
