use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serializer;
use serde_json::Value;

// 2^53，超过这个范围的整数无法用 f64 精确表示
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

// 时间戳统一格式化为带毫秒的 UTC ISO-8601，例如 2024-05-16T08:00:00.000Z
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn now_timestamp() -> DateTime<Utc> {
    Utc::now()
}

/// 整数值输出为 `64000` 而不是 `64000.0`，其它值按浮点数输出
pub fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() < MAX_SAFE_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// 非空字符串，否则返回 None
pub fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

/// 只接受 JSON 数字且必须是有限值
pub fn finite_number(value: Option<&Value>) -> Option<f64> {
    match value {
        Some(Value::Number(n)) => n.as_f64().filter(|f| f.is_finite()),
        _ => None,
    }
}

/// 将行情价格转换为浮点数。数字原样返回，数字字符串按十进制解析
/// （同时支持 0x/0o/0b 前缀的整数），其它输入一律得到 NaN。
pub fn coerce_number(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) => parse_numeric_str(s),
        _ => f64::NAN,
    }
}

fn parse_numeric_str(s: &str) -> f64 {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return f64::NAN;
    }

    let radix = match trimmed.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return u64::from_str_radix(&trimmed[2..], radix)
            .map(|v| v as f64)
            .unwrap_or(f64::NAN);
    }

    // Rust 的 f64 解析接受 "inf"/"nan" 等写法，这里只放行 Infinity 这一种非有限拼写
    let unsigned = trimmed.trim_start_matches(['+', '-']);
    if unsigned.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        return match unsigned {
            "Infinity" if trimmed.starts_with('-') => f64::NEG_INFINITY,
            "Infinity" => f64::INFINITY,
            _ => f64::NAN,
        };
    }

    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

// JSON 文件读写
pub mod json_io {
    use crate::errors::{PostprocessError, Result};
    use log::info;
    use serde::Serialize;
    use serde_json::Value;
    use std::fs;
    use std::io::Write;
    use std::path::Path;
    use tempfile::NamedTempFile;

    // 读取下载好的 JSON 文件
    pub fn read_json(path: &Path) -> Result<Value> {
        let text = fs::read_to_string(path).map_err(|e| PostprocessError::LoadError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&text).map_err(|e| PostprocessError::LoadError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    // 先写入同目录下的临时文件再重命名，失败时不会留下半截文件
    pub fn write_json<T: Serialize + ?Sized>(path: &Path, data: &T) -> Result<()> {
        let body = serde_json::to_string(data)?;
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(body.as_bytes())?;
        file.persist(path).map_err(|e| e.error)?;
        info!("Saved {} bytes to {}", fs::metadata(path)?.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn timestamp_has_millis_and_z_suffix() {
        let at = Utc.with_ymd_and_hms(2024, 5, 16, 8, 0, 0).unwrap();
        assert_eq!(format_timestamp(&at), "2024-05-16T08:00:00.000Z");
    }

    #[test]
    fn coerce_number_handles_strings_and_numbers() {
        assert_eq!(coerce_number(Some(&json!("64000.5"))), 64000.5);
        assert_eq!(coerce_number(Some(&json!(" 42 "))), 42.0);
        assert_eq!(coerce_number(Some(&json!("1e3"))), 1000.0);
        assert_eq!(coerce_number(Some(&json!("0x1A"))), 26.0);
        assert_eq!(coerce_number(Some(&json!(7))), 7.0);
    }

    #[test]
    fn coerce_number_rejects_non_numeric_input() {
        assert!(coerce_number(Some(&json!("abc"))).is_nan());
        assert!(coerce_number(Some(&json!("inf"))).is_nan());
        assert!(coerce_number(Some(&json!(""))).is_nan());
        assert!(coerce_number(Some(&json!(null))).is_nan());
        assert!(coerce_number(Some(&json!(true))).is_nan());
        assert!(coerce_number(None).is_nan());
        assert!(coerce_number(Some(&json!("Infinity"))).is_infinite());
    }

    #[test]
    fn overflowing_numbers_are_not_finite() {
        let value: Value = serde_json::from_str(r#"{"a":1e400,"b":"1e400"}"#).unwrap();
        assert_eq!(finite_number(value.get("a")), None);
        assert!(coerce_number(value.get("a")).is_nan());
        assert!(coerce_number(value.get("b")).is_infinite());
    }

    #[test]
    fn integral_values_serialize_without_fraction() {
        #[derive(serde::Serialize)]
        struct Sample {
            #[serde(serialize_with = "serialize_number")]
            whole: f64,
            #[serde(serialize_with = "serialize_number")]
            fraction: f64,
        }

        let text = serde_json::to_string(&Sample { whole: 64000.0, fraction: 21.5 }).unwrap();
        assert_eq!(text, r#"{"whole":64000,"fraction":21.5}"#);
    }

    #[test]
    fn write_json_leaves_only_the_target_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("out.json");
        json_io::write_json(&path, &json!({ "a": 1 })).unwrap();

        let names: Vec<_> = std::fs::read_dir(temp.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("out.json")]);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), r#"{"a":1}"#);
    }

    #[test]
    fn failed_write_cleans_up_temp_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("out.json");
        // 目标是目录时 rename 失败
        std::fs::create_dir(&path).unwrap();

        assert!(json_io::write_json(&path, &json!({ "a": 1 })).is_err());
        assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 1);
        assert!(path.is_dir());
    }

    #[test]
    fn non_empty_str_and_finite_number() {
        assert_eq!(non_empty_str(Some(&json!("a"))), Some("a"));
        assert_eq!(non_empty_str(Some(&json!(""))), None);
        assert_eq!(non_empty_str(Some(&json!(1))), None);
        assert_eq!(finite_number(Some(&json!(21.5))), Some(21.5));
        assert_eq!(finite_number(Some(&json!("21.5"))), None);
        assert_eq!(finite_number(None), None);
    }
}
