use serde::Serialize;

/// 预报窗口内经过校验的一小时数据
#[derive(Debug, Clone, PartialEq)]
pub struct HourlyEntry {
    pub time: String,
    pub temperature_c: f64,
}

/// Postprocessed forecast row, one per hour
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherRecord {
    pub location: String,
    #[serde(serialize_with = "crate::util::serialize_number")]
    pub latitude: f64,
    #[serde(serialize_with = "crate::util::serialize_number")]
    pub longitude: f64,
    pub timezone: String,
    pub temperature_unit: String,
    pub fetched_at: String,
    pub source: String,
    pub time: String,
    #[serde(serialize_with = "crate::util::serialize_number")]
    pub temperature_c: f64,
}
