//! Ordered scoring rule tables.
//!
//! Each factor is an ordered list of tiers scanned top-down; the first
//! matching tier wins. Thresholds are fixed, hand-tuned constants — no
//! calibration from data.

use crate::weather::PaintType;

/// One tier of a scoring factor: a predicate over the factor value, the
/// penalty it contributes, and which phrasing band applies.
pub struct Tier<B: 'static> {
    pub matches: fn(f64) -> bool,
    pub penalty: i32,
    pub band: B,
}

/// Scan a tier table top-down. Tables end with a catch-all tier.
pub fn classify<B: Copy>(tiers: &[Tier<B>], value: f64) -> (B, i32) {
    let tier = tiers
        .iter()
        .find(|t| (t.matches)(value))
        .expect("tier tables end with a catch-all");
    (tier.band, tier.penalty)
}

// --- Humidity ---

/// Humidity thresholds and penalties for one paint type. Checked in the
/// order very_high > high > slightly > ok > low.
#[derive(Debug, Clone, Copy)]
pub struct HumidityProfile {
    pub very_high: f64,
    pub high: f64,
    pub slightly: f64,
    pub low: f64,
    pub penalty_very_high: i32,
    pub penalty_high: i32,
    pub penalty_slightly: i32,
    /// Below-`low` penalty. Low humidity stresses solvent-based paints
    /// (static, overly fast drying) more than water-based ones.
    pub penalty_low: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HumidityBand {
    VeryHigh,
    High,
    Slightly,
    Ok,
    Low,
}

const LACQUER_HUMIDITY: HumidityProfile = HumidityProfile {
    very_high: 70.0,
    high: 60.0,
    slightly: 50.0,
    low: 30.0,
    penalty_very_high: 40,
    penalty_high: 20,
    penalty_slightly: 5,
    penalty_low: 10,
};

const ENAMEL_HUMIDITY: HumidityProfile = HumidityProfile {
    very_high: 75.0,
    high: 65.0,
    slightly: 55.0,
    low: 30.0,
    penalty_very_high: 40,
    penalty_high: 20,
    penalty_slightly: 5,
    penalty_low: 10,
};

const WATERBASE_HUMIDITY: HumidityProfile = HumidityProfile {
    very_high: 85.0,
    high: 75.0,
    slightly: 65.0,
    low: 35.0,
    penalty_very_high: 35,
    penalty_high: 15,
    penalty_slightly: 5,
    penalty_low: 5,
};

pub fn humidity_profile(paint: PaintType) -> &'static HumidityProfile {
    match paint {
        PaintType::Lacquer => &LACQUER_HUMIDITY,
        PaintType::Enamel => &ENAMEL_HUMIDITY,
        PaintType::Waterbase => &WATERBASE_HUMIDITY,
    }
}

impl HumidityProfile {
    /// First matching band and its penalty. Exactly one band applies to any
    /// humidity reading, including out-of-range ones.
    pub fn classify(&self, humidity: f64) -> (HumidityBand, i32) {
        if humidity > self.very_high {
            (HumidityBand::VeryHigh, self.penalty_very_high)
        } else if humidity > self.high {
            (HumidityBand::High, self.penalty_high)
        } else if humidity > self.slightly {
            (HumidityBand::Slightly, self.penalty_slightly)
        } else if humidity >= self.low {
            (HumidityBand::Ok, 0)
        } else {
            (HumidityBand::Low, self.penalty_low)
        }
    }
}

// --- Temperature (evaluated on the daily average) ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TempBand {
    Frigid,
    Cool,
    Scorching,
    Warm,
    Fine,
}

pub const TEMP_TIERS: &[Tier<TempBand>] = &[
    Tier { matches: |avg| avg < 5.0, penalty: 35, band: TempBand::Frigid },
    Tier { matches: |avg| avg < 10.0, penalty: 20, band: TempBand::Cool },
    Tier { matches: |avg| avg > 35.0, penalty: 30, band: TempBand::Scorching },
    Tier { matches: |avg| avg > 30.0, penalty: 10, band: TempBand::Warm },
    Tier { matches: |_| true, penalty: 0, band: TempBand::Fine },
];

// --- Precipitation probability ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrecipBand {
    VeryLikely,
    Likely,
    Possible,
    Unlikely,
}

pub const PRECIP_TIERS: &[Tier<PrecipBand>] = &[
    Tier { matches: |p| p > 70.0, penalty: 30, band: PrecipBand::VeryLikely },
    Tier { matches: |p| p > 40.0, penalty: 15, band: PrecipBand::Likely },
    Tier { matches: |p| p > 20.0, penalty: 5, band: PrecipBand::Possible },
    Tier { matches: |_| true, penalty: 0, band: PrecipBand::Unlikely },
];

// --- Wind speed ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindBand {
    Strong,
    Breezy,
    Calm,
}

pub const WIND_TIERS: &[Tier<WindBand>] = &[
    Tier { matches: |w| w > 30.0, penalty: 20, band: WindBand::Strong },
    Tier { matches: |w| w > 20.0, penalty: 10, band: WindBand::Breezy },
    Tier { matches: |_| true, penalty: 0, band: WindBand::Calm },
];

// --- WMO weather code ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkyPenalty {
    Thunderstorm,
    Rain,
    Snow,
}

/// Weather-code penalty. Unlike the other factors this may fire no tier at
/// all, in which case the day gets no weather-code reason line.
pub fn classify_weather_code(code: i32) -> Option<(SkyPenalty, i32)> {
    if code >= 95 {
        Some((SkyPenalty::Thunderstorm, 15))
    } else if (61..=67).contains(&code) {
        Some((SkyPenalty::Rain, 10))
    } else if (71..=77).contains(&code) {
        Some((SkyPenalty::Snow, 15))
    } else {
        None
    }
}
