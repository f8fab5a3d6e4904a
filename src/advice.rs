//! Advisory selectors: small pure classification tables derived from a
//! single day's data. They share the scoring engine's inputs but never feed
//! back into the score.

use crate::weather::{DayForecast, PaintType, RawDayData, ScoreLabel};

/// Quick go/no-go verdict for one kind of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkVerdict {
    Go,
    Caution,
    Avoid,
}

/// Whether a clear-coat finishing pass is likely to fail at this humidity.
/// Lacquer clears blush much earlier than other systems.
pub fn topcoat_risk(humidity: f64, paint: PaintType) -> bool {
    match paint {
        PaintType::Lacquer => humidity > 60.0,
        _ => humidity > 75.0,
    }
}

/// Quick verdict for spraying lacquer today.
pub fn lacquer_verdict(day: &RawDayData) -> WorkVerdict {
    if day.humidity > 70.0 {
        WorkVerdict::Avoid
    } else if day.humidity > 60.0 {
        WorkVerdict::Caution
    } else {
        WorkVerdict::Go
    }
}

/// Quick verdict for brushing or spraying water-based acrylic today.
pub fn waterbase_verdict(day: &RawDayData) -> WorkVerdict {
    if day.humidity > 85.0 {
        WorkVerdict::Avoid
    } else if day.humidity > 75.0 {
        WorkVerdict::Caution
    } else {
        WorkVerdict::Go
    }
}

/// Quick verdict for a clear topcoat today.
pub fn topcoat_verdict(day: &RawDayData) -> WorkVerdict {
    if day.humidity > 70.0 {
        WorkVerdict::Avoid
    } else if day.humidity > 60.0 {
        WorkVerdict::Caution
    } else {
        WorkVerdict::Go
    }
}

/// What to work on today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Technique {
    ApplyDryBrush,
    ApplyTopcoat,
    ApplyDecals,
    FocusGateCleanup,
}

impl Technique {
    pub fn description(self) -> &'static str {
        match self {
            Technique::ApplyDryBrush => "good day for brush work and dry-brushing; skip the spray can",
            Technique::ApplyTopcoat => "conditions are right to seal your work with a topcoat",
            Technique::ApplyDecals => "stay indoors and apply decals",
            Technique::FocusGateCleanup => "focus on gate cleanup and surface prep",
        }
    }
}

/// Recommend a technique for the day, first match wins: too humid for any
/// spraying, rain keeps work indoors, wind rules out spray work, cold stops
/// paint curing, otherwise seal with a topcoat.
pub fn recommend_technique(day: &RawDayData) -> Technique {
    let temp_avg = (day.temp_max + day.temp_min) / 2.0;
    if day.humidity > 75.0 {
        Technique::FocusGateCleanup
    } else if day.precip_prob > 70.0 {
        Technique::ApplyDecals
    } else if day.windspeed > 30.0 {
        Technique::ApplyDryBrush
    } else if temp_avg < 5.0 {
        Technique::FocusGateCleanup
    } else {
        Technique::ApplyTopcoat
    }
}

/// Verdict for a planned painting session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionVerdict {
    Ideal,
    PaintButSkipTopcoat,
    ShortSessionsOnly,
    SkipPainting,
}

impl SessionVerdict {
    pub fn description(self) -> &'static str {
        match self {
            SessionVerdict::Ideal => "ideal painting weather; plan a full session",
            SessionVerdict::PaintButSkipTopcoat => "paint away, but hold the topcoat for a drier day",
            SessionVerdict::ShortSessionsOnly => "workable in short sessions; watch the conditions",
            SessionVerdict::SkipPainting => "skip painting; build or plan instead",
        }
    }
}

/// Combine the bucketed score with the paint-specific topcoat risk.
pub fn session_verdict(forecast: &DayForecast, paint: PaintType) -> SessionVerdict {
    let risky_topcoat = topcoat_risk(forecast.humidity, paint);
    match forecast.score_label {
        ScoreLabel::Excellent | ScoreLabel::Good if !risky_topcoat => SessionVerdict::Ideal,
        ScoreLabel::Excellent | ScoreLabel::Good => SessionVerdict::PaintButSkipTopcoat,
        ScoreLabel::Fair => SessionVerdict::ShortSessionsOnly,
        ScoreLabel::Poor => SessionVerdict::SkipPainting,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(humidity: f64, temp_max: f64, temp_min: f64, precip: f64, wind: f64) -> RawDayData {
        RawDayData {
            date: NaiveDate::from_ymd_opt(2026, 9, 5).unwrap(),
            temp_max,
            temp_min,
            humidity,
            precip_prob: precip,
            windspeed: wind,
            weather_code: 1,
        }
    }

    #[test]
    fn test_topcoat_risk_thresholds_differ_by_paint() {
        assert!(topcoat_risk(61.0, PaintType::Lacquer));
        assert!(!topcoat_risk(61.0, PaintType::Waterbase));
        assert!(!topcoat_risk(61.0, PaintType::Enamel));
        assert!(topcoat_risk(76.0, PaintType::Enamel));
        assert!(!topcoat_risk(60.0, PaintType::Lacquer));
    }

    #[test]
    fn test_quick_verdicts() {
        let humid = day(72.0, 22.0, 16.0, 10.0, 5.0);
        assert_eq!(lacquer_verdict(&humid), WorkVerdict::Avoid);
        assert_eq!(waterbase_verdict(&humid), WorkVerdict::Go);
        assert_eq!(topcoat_verdict(&humid), WorkVerdict::Avoid);

        let mild = day(62.0, 22.0, 16.0, 10.0, 5.0);
        assert_eq!(lacquer_verdict(&mild), WorkVerdict::Caution);
        assert_eq!(topcoat_verdict(&mild), WorkVerdict::Caution);

        let dry = day(45.0, 22.0, 16.0, 10.0, 5.0);
        assert_eq!(lacquer_verdict(&dry), WorkVerdict::Go);
        assert_eq!(waterbase_verdict(&dry), WorkVerdict::Go);
    }

    #[test]
    fn test_technique_priority_chain() {
        // Humidity outranks everything else.
        assert_eq!(
            recommend_technique(&day(80.0, 22.0, 16.0, 90.0, 40.0)),
            Technique::FocusGateCleanup
        );
        assert_eq!(
            recommend_technique(&day(50.0, 22.0, 16.0, 90.0, 40.0)),
            Technique::ApplyDecals
        );
        assert_eq!(
            recommend_technique(&day(50.0, 22.0, 16.0, 10.0, 40.0)),
            Technique::ApplyDryBrush
        );
        assert_eq!(
            recommend_technique(&day(50.0, 6.0, 2.0, 10.0, 5.0)),
            Technique::FocusGateCleanup
        );
        assert_eq!(
            recommend_technique(&day(50.0, 22.0, 16.0, 10.0, 5.0)),
            Technique::ApplyTopcoat
        );
    }

    #[test]
    fn test_session_verdict_combines_label_and_risk() {
        use crate::scoring::calc_forecasts;

        // Strong score but humid enough to endanger a lacquer topcoat.
        let raw = day(65.0, 22.0, 16.0, 10.0, 5.0);
        let f = &calc_forecasts(std::slice::from_ref(&raw), PaintType::Lacquer)[0];
        assert_eq!(f.score_label, ScoreLabel::Excellent);
        assert_eq!(
            session_verdict(f, PaintType::Lacquer),
            SessionVerdict::PaintButSkipTopcoat
        );
        // The same day is fine for enamel's higher threshold.
        let f = &calc_forecasts(std::slice::from_ref(&raw), PaintType::Enamel)[0];
        assert_eq!(session_verdict(f, PaintType::Enamel), SessionVerdict::Ideal);

        // A washed-out day is a skip regardless of paint.
        let bad = day(90.0, 25.0, 20.0, 85.0, 35.0);
        let f = &calc_forecasts(std::slice::from_ref(&bad), PaintType::Waterbase)[0];
        assert_eq!(
            session_verdict(f, PaintType::Waterbase),
            SessionVerdict::SkipPainting
        );
    }
}
