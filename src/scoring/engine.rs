//! The painting suitability scoring engine.
//!
//! Pure, deterministic, and total: every day of raw data produces a scored
//! forecast, out-of-range inputs flow through the threshold comparisons
//! unvalidated, and the only output is freshly allocated — inputs are never
//! mutated.

use crate::scoring::rules::{
    self, HumidityBand, PrecipBand, SkyPenalty, TempBand, WindBand,
};
use crate::weather::{DayForecast, PaintType, RawDayData, ScoreLabel};

/// Score every day of raw data for the given paint type.
///
/// Output preserves input order and length. Re-running with identical input
/// yields identical output, so switching paint types only needs the raw
/// data that was already fetched.
pub fn calc_forecasts(raw_days: &[RawDayData], paint: PaintType) -> Vec<DayForecast> {
    raw_days.iter().map(|day| score_day(day, paint)).collect()
}

/// Presentation-only complement of the score, framed as the risk of a
/// failed paint job. Derived on demand, never stored as separate state.
pub fn calc_failure_rate(score: i32) -> i32 {
    100 - score
}

fn score_day(day: &RawDayData, paint: PaintType) -> DayForecast {
    let (score, reasons) = calc_painting_score(day, paint);
    DayForecast {
        date: day.date,
        temperature_max: day.temp_max,
        temperature_min: day.temp_min,
        humidity: day.humidity,
        precipitation_probability_max: day.precip_prob,
        windspeed_max: day.windspeed,
        weather_code: day.weather_code,
        painting_score: score,
        score_label: ScoreLabel::from_score(score),
        reasons,
    }
}

/// Apply the factor rule tables in fixed order: humidity, temperature,
/// precipitation, wind, weather code. The reason order is a display
/// contract; only the weather-code factor may contribute no line.
fn calc_painting_score(day: &RawDayData, paint: PaintType) -> (i32, Vec<String>) {
    let mut penalty_total = 0;
    let mut reasons = Vec::with_capacity(5);

    let (band, penalty) = rules::humidity_profile(paint).classify(day.humidity);
    penalty_total += penalty;
    reasons.push(humidity_reason(band, day.humidity, paint));

    let temp_avg = (day.temp_max + day.temp_min) / 2.0;
    let (band, penalty) = rules::classify(rules::TEMP_TIERS, temp_avg);
    penalty_total += penalty;
    reasons.push(temp_reason(band, day.temp_max));

    let (band, penalty) = rules::classify(rules::PRECIP_TIERS, day.precip_prob);
    penalty_total += penalty;
    reasons.push(precip_reason(band, day.precip_prob));

    let (band, penalty) = rules::classify(rules::WIND_TIERS, day.windspeed);
    penalty_total += penalty;
    reasons.push(wind_reason(band, day.windspeed));

    if let Some((sky, penalty)) = rules::classify_weather_code(day.weather_code) {
        penalty_total += penalty;
        reasons.push(sky_reason(sky));
    }

    let score = (100 - penalty_total).clamp(0, 100);
    (score, reasons)
}

fn humidity_reason(band: HumidityBand, humidity: f64, paint: PaintType) -> String {
    let label = paint.label();
    match band {
        HumidityBand::VeryHigh => match paint {
            PaintType::Waterbase => format!(
                "Humidity is far too high ({humidity}%). Even water-based acrylic dries much slower and the finish will suffer"
            ),
            _ => format!(
                "Humidity is far too high ({humidity}%). Serious drying and finish problems for {label} paint"
            ),
        },
        HumidityBand::High => match paint {
            PaintType::Lacquer => format!(
                "Humidity is somewhat high ({humidity}%). Lacquer paint risks blushing (moisture clouding)"
            ),
            PaintType::Waterbase => format!(
                "Humidity is somewhat high ({humidity}%). Water-based acrylic tolerates this fairly well but dries slower"
            ),
            PaintType::Enamel => format!(
                "Humidity is somewhat high ({humidity}%). Enamel paint will dry slower"
            ),
        },
        HumidityBand::Slightly => match paint {
            PaintType::Waterbase => format!(
                "Humidity is within tolerance ({humidity}%). Water-based acrylic can be used without trouble"
            ),
            _ => format!(
                "Humidity is slightly high ({humidity}%). Work carefully with {label} paint"
            ),
        },
        HumidityBand::Ok => format!("Humidity is good ({humidity}%)"),
        HumidityBand::Low => format!(
            "Humidity is on the low side ({humidity}%). Watch for static and overly fast drying"
        ),
    }
}

// Temperature messages quote the daily high even though tiers are picked on
// the daily average — the high is what people check against.
fn temp_reason(band: TempBand, temp_max: f64) -> String {
    match band {
        TempBand::Frigid => format!(
            "Temperature is too low (high of {temp_max}°C). Paint will dry very slowly"
        ),
        TempBand::Cool => format!(
            "Temperature is a little low (high of {temp_max}°C). Expect longer drying times"
        ),
        TempBand::Scorching => format!(
            "Temperature is too high (high of {temp_max}°C). Risk of flash drying and clogged airbrushes"
        ),
        TempBand::Warm => format!(
            "Temperature is a little high (high of {temp_max}°C). Watch for airbrush tip dry"
        ),
        TempBand::Fine => format!("Temperature is good (high of {temp_max}°C)"),
    }
}

fn precip_reason(band: PrecipBand, precip_prob: f64) -> String {
    match band {
        PrecipBand::VeryLikely => format!(
            "High chance of rain ({precip_prob}%). Outdoor work is not advisable"
        ),
        PrecipBand::Likely => format!("Chance of rain is somewhat high ({precip_prob}%)"),
        PrecipBand::Possible => format!("Chance of rain is low ({precip_prob}%)"),
        PrecipBand::Unlikely => format!("Chance of rain is minimal ({precip_prob}%)"),
    }
}

fn wind_reason(band: WindBand, windspeed: f64) -> String {
    match band {
        WindBand::Strong => format!(
            "Strong wind ({windspeed} km/h). Spray and airbrush work will be affected"
        ),
        WindBand::Breezy => format!("Wind is somewhat strong ({windspeed} km/h)"),
        WindBand::Calm => format!("Wind is calm ({windspeed} km/h)"),
    }
}

fn sky_reason(sky: SkyPenalty) -> String {
    match sky {
        SkyPenalty::Thunderstorm => "Thunderstorms are possible".to_string(),
        SkyPenalty::Rain => "Rain is forecast".to_string(),
        SkyPenalty::Snow => "Snow is forecast".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(humidity: f64, temp_max: f64, temp_min: f64, precip: f64, wind: f64, code: i32) -> RawDayData {
        RawDayData {
            date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            temp_max,
            temp_min,
            humidity,
            precip_prob: precip,
            windspeed: wind,
            weather_code: code,
        }
    }

    #[test]
    fn test_perfect_day_scores_100() {
        let forecasts = calc_forecasts(&[day(45.0, 22.0, 15.0, 10.0, 8.0, 1)], PaintType::Lacquer);
        let f = &forecasts[0];
        assert_eq!(f.painting_score, 100);
        assert_eq!(f.score_label, ScoreLabel::Excellent);
        assert_eq!(f.reasons.len(), 4);
    }

    #[test]
    fn test_terrible_day_clamps_to_zero() {
        // 40 (humidity) + 0 (temp avg 22.5) + 30 (precip) + 20 (wind)
        // + 15 (storm) = 105 penalties, clamped.
        let forecasts = calc_forecasts(&[day(85.0, 25.0, 20.0, 80.0, 35.0, 97)], PaintType::Lacquer);
        let f = &forecasts[0];
        assert_eq!(f.painting_score, 0);
        assert_eq!(f.score_label, ScoreLabel::Poor);
        assert_eq!(f.reasons.len(), 5);
    }

    #[test]
    fn test_reason_order_is_fixed() {
        let forecasts = calc_forecasts(&[day(85.0, 3.0, -2.0, 80.0, 35.0, 73)], PaintType::Enamel);
        let reasons = &forecasts[0].reasons;
        assert_eq!(reasons.len(), 5);
        assert!(reasons[0].starts_with("Humidity"));
        assert!(reasons[1].starts_with("Temperature"));
        assert!(reasons[2].contains("rain"));
        assert!(reasons[3].starts_with("Strong wind"));
        assert_eq!(reasons[4], "Snow is forecast");
    }

    #[test]
    fn test_temp_reason_quotes_daily_high() {
        // Average 2.5 picks the frigid tier, but the message quotes the high.
        let forecasts = calc_forecasts(&[day(45.0, 8.0, -3.0, 0.0, 0.0, 0)], PaintType::Lacquer);
        assert!(forecasts[0].reasons[1].contains("high of 8°C"));
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(calc_forecasts(&[], PaintType::Waterbase).is_empty());
    }

    #[test]
    fn test_failure_rate_is_score_complement() {
        assert_eq!(calc_failure_rate(100), 0);
        assert_eq!(calc_failure_rate(73), 27);
        assert_eq!(calc_failure_rate(0), 100);
    }

    #[test]
    fn test_humidity_reason_names_the_paint() {
        let forecasts = calc_forecasts(&[day(72.0, 22.0, 15.0, 0.0, 0.0, 0)], PaintType::Lacquer);
        assert!(forecasts[0].reasons[0].contains("far too high"));

        let forecasts = calc_forecasts(&[day(58.0, 22.0, 15.0, 0.0, 0.0, 0)], PaintType::Enamel);
        assert!(forecasts[0].reasons[0].contains("enamel paint"));
    }
}
