//! Painting suitability scoring.
//!
//! All domain rules live here: ordered tier tables per weather factor
//! ([`rules`]) and the pure engine that applies them ([`engine`]).

pub mod engine;
pub mod rules;

pub use engine::{calc_failure_rate, calc_forecasts};
