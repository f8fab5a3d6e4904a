//! Open-Meteo forecast adapter and Nominatim reverse geocoding.
//!
//! Pure data reshaping: the provider's parallel daily arrays are decoded
//! strictly and zipped index-wise into per-day records, preserving the
//! provider's day ordering. No decision logic lives here.

use std::time::Duration;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::config::{ForecastConfig, GeocodeConfig};
use crate::error::WeatherError;
use crate::weather::{LocationInfo, RawDayData};

/// Daily variables requested from the forecast provider, in wire order.
const DAILY_FIELDS: &[&str] = &[
    "temperature_2m_max",
    "temperature_2m_min",
    "relative_humidity_2m_mean",
    "precipitation_probability_max",
    "windspeed_10m_max",
    "weathercode",
];

pub struct WeatherClient {
    http: reqwest::Client,
    forecast: ForecastConfig,
    geocode: GeocodeConfig,
}

impl WeatherClient {
    pub fn new(forecast: ForecastConfig, geocode: GeocodeConfig) -> Self {
        let http = reqwest::Client::builder()
            .user_agent("paintday/0.1 (hobby painting weather advisor)")
            .timeout(Duration::from_secs(forecast.timeout_seconds))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http,
            forecast,
            geocode,
        }
    }

    /// Fetch the daily forecast and reshape it into per-day records.
    ///
    /// One attempt, no retry, no caching; the caller owns any retry policy.
    /// Transport failures and non-2xx statuses are logged in full but only
    /// surface as the fixed [`WeatherError::Fetch`] message.
    pub async fn fetch_forecast(
        &self,
        location: &LocationInfo,
    ) -> Result<Vec<RawDayData>, WeatherError> {
        let response = self
            .http
            .get(&self.forecast.base_url)
            .query(&[
                ("latitude", location.latitude.to_string()),
                ("longitude", location.longitude.to_string()),
                ("daily", DAILY_FIELDS.join(",")),
                ("timezone", "auto".to_string()),
                ("forecast_days", self.forecast.forecast_days.to_string()),
            ])
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Forecast request failed");
                WeatherError::Fetch
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%status, body, "Forecast provider returned an error");
            return Err(WeatherError::Fetch);
        }

        let payload: OpenMeteoResponse = response.json().await.map_err(|e| {
            tracing::error!(error = %e, "Forecast response was not the expected JSON shape");
            WeatherError::Decode(e.to_string())
        })?;

        payload.daily.into_days()
    }

    /// Best-effort place name lookup, preferring city > town > village >
    /// county. Degrades to an empty string on any failure; never errors and
    /// never blocks the rest of the pipeline.
    pub async fn reverse_geocode(&self, lat: f64, lon: f64) -> String {
        let result: Result<NominatimResponse, reqwest::Error> = async {
            self.http
                .get(&self.geocode.base_url)
                .query(&[
                    ("lat", lat.to_string()),
                    ("lon", lon.to_string()),
                    ("format", "json".to_string()),
                    ("accept-language", self.geocode.language.clone()),
                ])
                .send()
                .await?
                .error_for_status()?
                .json()
                .await
        }
        .await;

        match result {
            Ok(response) => {
                let addr = response.address.unwrap_or_default();
                addr.city
                    .or(addr.town)
                    .or(addr.village)
                    .or(addr.county)
                    .unwrap_or_default()
            }
            Err(e) => {
                tracing::warn!(error = %e, "Reverse geocoding failed; continuing without a place name");
                String::new()
            }
        }
    }
}

// --- Open-Meteo response types ---

#[derive(Debug, Deserialize)]
struct OpenMeteoResponse {
    daily: DailyBlock,
}

#[derive(Debug, Deserialize)]
struct DailyBlock {
    time: Vec<NaiveDate>,
    temperature_2m_max: Vec<f64>,
    temperature_2m_min: Vec<f64>,
    relative_humidity_2m_mean: Vec<f64>,
    precipitation_probability_max: Vec<f64>,
    windspeed_10m_max: Vec<f64>,
    weathercode: Vec<i32>,
}

impl DailyBlock {
    /// Zip the parallel arrays into per-day records. Every array must have
    /// the same length as `time`; a mismatch is a decode error, not a
    /// silently short result.
    fn into_days(self) -> Result<Vec<RawDayData>, WeatherError> {
        let n = self.time.len();
        let lengths = [
            ("temperature_2m_max", self.temperature_2m_max.len()),
            ("temperature_2m_min", self.temperature_2m_min.len()),
            ("relative_humidity_2m_mean", self.relative_humidity_2m_mean.len()),
            (
                "precipitation_probability_max",
                self.precipitation_probability_max.len(),
            ),
            ("windspeed_10m_max", self.windspeed_10m_max.len()),
            ("weathercode", self.weathercode.len()),
        ];
        if let Some((field, len)) = lengths.iter().find(|(_, len)| *len != n) {
            return Err(WeatherError::Decode(format!(
                "daily.{field} has {len} entries, expected {n}"
            )));
        }

        Ok((0..n)
            .map(|i| RawDayData {
                date: self.time[i],
                temp_max: self.temperature_2m_max[i],
                temp_min: self.temperature_2m_min[i],
                humidity: self.relative_humidity_2m_mean[i],
                precip_prob: self.precipitation_probability_max[i],
                windspeed: self.windspeed_10m_max[i],
                weather_code: self.weathercode[i],
            })
            .collect())
    }
}

// --- Nominatim response types ---

#[derive(Debug, Deserialize)]
struct NominatimResponse {
    address: Option<NominatimAddress>,
}

#[derive(Debug, Default, Deserialize)]
struct NominatimAddress {
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    county: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_fields_wire_order() {
        assert_eq!(
            DAILY_FIELDS.join(","),
            "temperature_2m_max,temperature_2m_min,relative_humidity_2m_mean,\
             precipitation_probability_max,windspeed_10m_max,weathercode"
        );
    }

    #[test]
    fn test_into_days_preserves_order() {
        let block = DailyBlock {
            time: vec![
                NaiveDate::from_ymd_opt(2026, 8, 29).unwrap(),
                NaiveDate::from_ymd_opt(2026, 8, 30).unwrap(),
            ],
            temperature_2m_max: vec![22.0, 25.0],
            temperature_2m_min: vec![15.0, 18.0],
            relative_humidity_2m_mean: vec![45.0, 60.0],
            precipitation_probability_max: vec![10.0, 30.0],
            windspeed_10m_max: vec![8.0, 12.0],
            weathercode: vec![1, 3],
        };
        let days = block.into_days().unwrap();
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2026, 8, 29).unwrap());
        assert_eq!(days[0].humidity, 45.0);
        assert_eq!(days[1].weather_code, 3);
    }

    #[test]
    fn test_into_days_rejects_length_mismatch() {
        let block = DailyBlock {
            time: vec![
                NaiveDate::from_ymd_opt(2026, 8, 29).unwrap(),
                NaiveDate::from_ymd_opt(2026, 8, 30).unwrap(),
            ],
            temperature_2m_max: vec![22.0, 25.0],
            temperature_2m_min: vec![15.0, 18.0],
            relative_humidity_2m_mean: vec![45.0],
            precipitation_probability_max: vec![10.0, 30.0],
            windspeed_10m_max: vec![8.0, 12.0],
            weathercode: vec![1, 3],
        };
        let err = block.into_days().unwrap_err();
        assert!(matches!(err, WeatherError::Decode(_)));
        assert!(err.to_string().contains("relative_humidity_2m_mean"));
    }
}
