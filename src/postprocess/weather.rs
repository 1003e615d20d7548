use crate::config::{Config, DEFAULT_FORECAST_WINDOW};
use crate::errors::ValidationError;
use crate::models::weather::{HourlyEntry, WeatherRecord};
use crate::postprocess::Postprocessor;
use crate::util;
use chrono::{DateTime, Utc};
use log::info;
use serde_json::Value;

pub const OUTPUT_FILE: &str = "taipei-weather-postprocessed.json";
pub const LOCATION: &str = "Taipei, Taiwan";
pub const SOURCE_URL: &str =
    "https://api.open-meteo.com/v1/forecast?latitude=25.04&longitude=121.56&hourly=temperature_2m";
pub const DEFAULT_TIMEZONE: &str = "UTC";
pub const DEFAULT_TEMPERATURE_UNIT: &str = "°C";

/// Open-Meteo 逐小时气温预报的后处理器
pub struct WeatherPostprocessor {
    forecast_window: usize,
}

impl WeatherPostprocessor {
    pub fn new(config: &Config) -> Self {
        Self {
            forecast_window: config.forecast_window,
        }
    }

    /// 校验并截取预报窗口，任一条目不合法则整体失败
    fn hourly_entries(&self, hourly: &Value) -> Result<Vec<HourlyEntry>, ValidationError> {
        let times = array_or_empty(hourly.get("time"));
        let temperatures = array_or_empty(hourly.get("temperature_2m"));

        if times.is_empty() || temperatures.is_empty() {
            return Err(ValidationError::EmptyHourlyArrays);
        }

        let forecast_length = times.len().min(temperatures.len()).min(self.forecast_window);
        if forecast_length == 0 {
            return Err(ValidationError::NoOverlappingEntries);
        }

        let mut entries = Vec::with_capacity(forecast_length);
        for index in 0..forecast_length {
            let time = util::non_empty_str(times.get(index))
                .ok_or(ValidationError::MissingTime { index })?;
            let temperature_c = util::finite_number(temperatures.get(index))
                .ok_or(ValidationError::MissingTemperature { index })?;

            entries.push(HourlyEntry {
                time: time.to_string(),
                temperature_c,
            });
        }

        Ok(entries)
    }
}

impl Default for WeatherPostprocessor {
    fn default() -> Self {
        Self {
            forecast_window: DEFAULT_FORECAST_WINDOW,
        }
    }
}

impl Postprocessor for WeatherPostprocessor {
    type Output = Vec<WeatherRecord>;

    fn name(&self) -> &'static str {
        "Open-Meteo"
    }

    fn output_file(&self) -> &'static str {
        OUTPUT_FILE
    }

    fn transform_at(
        &self,
        raw: &Value,
        fetched_at: &DateTime<Utc>,
    ) -> Result<Vec<WeatherRecord>, ValidationError> {
        let payload = raw.as_object().ok_or(ValidationError::MissingObjectPayload)?;

        let (latitude, longitude) = match (
            payload.get("latitude").and_then(Value::as_f64),
            payload.get("longitude").and_then(Value::as_f64),
        ) {
            (Some(latitude), Some(longitude)) => (latitude, longitude),
            _ => return Err(ValidationError::MissingCoordinates),
        };

        let hourly = payload
            .get("hourly")
            .filter(|h| h.is_object())
            .ok_or(ValidationError::MissingHourlyForecast)?;

        let entries = self.hourly_entries(hourly)?;

        let timezone = util::non_empty_str(payload.get("timezone"))
            .unwrap_or(DEFAULT_TIMEZONE)
            .to_string();
        let temperature_unit = payload
            .get("hourly_units")
            .and_then(|units| units.get("temperature_2m"))
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_TEMPERATURE_UNIT)
            .to_string();
        let fetched_at = util::format_timestamp(fetched_at);

        let records: Vec<WeatherRecord> = entries
            .into_iter()
            .map(|entry| WeatherRecord {
                location: LOCATION.to_string(),
                latitude,
                longitude,
                timezone: timezone.clone(),
                temperature_unit: temperature_unit.clone(),
                fetched_at: fetched_at.clone(),
                source: SOURCE_URL.to_string(),
                time: entry.time,
                temperature_c: entry.temperature_c,
            })
            .collect();

        info!("Processed {} hourly forecast entries", records.len());
        Ok(records)
    }
}

fn array_or_empty(value: Option<&Value>) -> &[Value] {
    value
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}
