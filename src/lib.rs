//! paintday — weather-driven advisory tool for hobby paint work.
//!
//! Fetches a multi-day forecast, scores each day's suitability for applying
//! hobby paint (0–100, per paint system), and renders day-by-day advice.

pub mod advice;
pub mod config;
pub mod error;
pub mod logger;
pub mod render;
pub mod scoring;
pub mod weather;
