//! Terminal rendering of scored forecasts.
//!
//! Thin presentation layer over [`DayForecast`]: per-day cards, a best-day
//! banner, and the score legend. Holds no decision logic beyond picking the
//! highest-scoring day.

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::advice;
use crate::scoring::calc_failure_rate;
use crate::weather::{DayForecast, LocationInfo, PaintType, ScoreLabel};

pub struct ForecastReport<'a> {
    pub location: &'a LocationInfo,
    pub paint: PaintType,
    pub forecasts: &'a [DayForecast],
    pub today: NaiveDate,
}

impl ForecastReport<'_> {
    /// Highest-scoring day; the first one wins ties.
    fn best_day(&self) -> Option<&DayForecast> {
        self.forecasts
            .iter()
            .reduce(|best, d| if d.painting_score > best.painting_score { d } else { best })
    }
}

impl fmt::Display for ForecastReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let place = match &self.location.place {
            Some(name) => name.clone(),
            None => format!(
                "{:.2}, {:.2}",
                self.location.latitude, self.location.longitude
            ),
        };
        writeln!(f, "Painting forecast for {place} ({} paint)", self.paint)?;
        writeln!(f)?;

        if let Some(best) = self.best_day() {
            // Mirror the badge suppression: no banner when even the best
            // day is a poor one.
            if best.score_label != ScoreLabel::Poor {
                writeln!(
                    f,
                    "Best day to paint: {} (score {})",
                    format_date(best.date),
                    best.painting_score
                )?;
                writeln!(f)?;
            }
        }

        for day in self.forecasts {
            let marker = if day.date == self.today { "*" } else { " " };
            writeln!(
                f,
                "{marker} {}  {:>5.1}~{:<5.1}°C  RH {:>3.0}%  rain {:>3.0}%  wind {:>4.1} km/h  [{:>3} {}]",
                format_date(day.date),
                day.temperature_min,
                day.temperature_max,
                day.humidity,
                day.precipitation_probability_max,
                day.windspeed_max,
                day.painting_score,
                day.score_label,
            )?;
            for reason in &day.reasons {
                writeln!(f, "      - {reason}")?;
            }
            writeln!(
                f,
                "      failure risk {}%; {}",
                calc_failure_rate(day.painting_score),
                advice::session_verdict(day, self.paint).description()
            )?;
            if is_weekend(day.date) {
                writeln!(
                    f,
                    "      weekend tip: {}",
                    technique_line(day)
                )?;
            }
        }

        writeln!(f)?;
        writeln!(f, "Legend: excellent 80-100, good 60-79, fair 40-59, poor 0-39")?;
        Ok(())
    }
}

fn technique_line(day: &DayForecast) -> &'static str {
    // The technique selector works on raw-day fields; the forecast embeds
    // them all, so rebuild the input shape it expects.
    let raw = crate::weather::RawDayData {
        date: day.date,
        temp_max: day.temperature_max,
        temp_min: day.temperature_min,
        humidity: day.humidity,
        precip_prob: day.precipitation_probability_max,
        windspeed: day.windspeed_max,
        weather_code: day.weather_code,
    };
    advice::recommend_technique(&raw).description()
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

fn format_date(date: NaiveDate) -> String {
    format!("{}/{} ({})", date.month(), date.day(), weekday_short(date))
}

fn weekday_short(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}
