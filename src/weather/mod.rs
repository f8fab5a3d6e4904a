//! Core data types shared by the forecast adapter and the scoring engine.

pub mod client;

use std::fmt;

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// One calendar day of raw forecast data, normalized from the provider's
/// parallel daily arrays. Immutable once produced by the adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDayData {
    pub date: NaiveDate,
    /// Daily maximum temperature, °C.
    pub temp_max: f64,
    /// Daily minimum temperature, °C.
    pub temp_min: f64,
    /// Mean relative humidity, percent.
    pub humidity: f64,
    /// Maximum precipitation probability, percent.
    pub precip_prob: f64,
    /// Maximum wind speed, km/h.
    pub windspeed: f64,
    /// WMO weather code. Passed through unvalidated.
    pub weather_code: i32,
}

/// Paint/solvent system. Selects the humidity threshold profile and the
/// narrative phrasing used by the scoring engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PaintType {
    Lacquer,
    Waterbase,
    Enamel,
}

impl PaintType {
    pub const ALL: [PaintType; 3] = [PaintType::Lacquer, PaintType::Waterbase, PaintType::Enamel];

    /// Human-readable name used in reason strings.
    pub fn label(self) -> &'static str {
        match self {
            PaintType::Lacquer => "lacquer",
            PaintType::Waterbase => "water-based acrylic",
            PaintType::Enamel => "enamel",
        }
    }
}

impl fmt::Display for PaintType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Bucketed view of a painting score for quick display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreLabel {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ScoreLabel {
    /// Derive the label from a clamped 0–100 score. The label is never set
    /// independently of the score.
    pub fn from_score(score: i32) -> Self {
        if score >= 80 {
            ScoreLabel::Excellent
        } else if score >= 60 {
            ScoreLabel::Good
        } else if score >= 40 {
            ScoreLabel::Fair
        } else {
            ScoreLabel::Poor
        }
    }
}

impl fmt::Display for ScoreLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ScoreLabel::Excellent => "excellent",
            ScoreLabel::Good => "good",
            ScoreLabel::Fair => "fair",
            ScoreLabel::Poor => "poor",
        };
        f.write_str(s)
    }
}

/// Scored result for one day. Constructed once per (raw day, paint type)
/// pair and never mutated; switching paint type recomputes the whole
/// sequence from the raw data already in hand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayForecast {
    pub date: NaiveDate,
    pub temperature_max: f64,
    pub temperature_min: f64,
    pub humidity: f64,
    pub precipitation_probability_max: f64,
    pub windspeed_max: f64,
    pub weather_code: i32,
    /// 0–100, clamped.
    pub painting_score: i32,
    /// Always equals `ScoreLabel::from_score(painting_score)`.
    pub score_label: ScoreLabel,
    /// One line per scoring factor in fixed order: humidity, temperature,
    /// precipitation, wind, then weather code (the last may be absent).
    pub reasons: Vec<String>,
}

/// Where to fetch the forecast for.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationInfo {
    pub latitude: f64,
    pub longitude: f64,
    /// Best-effort place name from reverse geocoding.
    pub place: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_cutoffs() {
        assert_eq!(ScoreLabel::from_score(100), ScoreLabel::Excellent);
        assert_eq!(ScoreLabel::from_score(80), ScoreLabel::Excellent);
        assert_eq!(ScoreLabel::from_score(79), ScoreLabel::Good);
        assert_eq!(ScoreLabel::from_score(60), ScoreLabel::Good);
        assert_eq!(ScoreLabel::from_score(59), ScoreLabel::Fair);
        assert_eq!(ScoreLabel::from_score(40), ScoreLabel::Fair);
        assert_eq!(ScoreLabel::from_score(39), ScoreLabel::Poor);
        assert_eq!(ScoreLabel::from_score(0), ScoreLabel::Poor);
    }

    #[test]
    fn test_paint_type_from_toml() {
        #[derive(serde::Deserialize)]
        struct Wrapper {
            paint: PaintType,
        }
        let w: Wrapper = toml::from_str("paint = \"enamel\"").unwrap();
        assert_eq!(w.paint, PaintType::Enamel);
    }
}
