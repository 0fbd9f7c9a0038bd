//! Pre-race stint-plan generation and in-race pit/compound decisions.

pub mod constants;
pub mod decision;
pub mod plan;

pub use decision::{compound_on_release, evaluate_pit_decision};
pub use plan::generate_pre_race_plan;
