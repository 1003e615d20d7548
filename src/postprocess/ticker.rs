use crate::errors::ValidationError;
use crate::models::ticker::PriceRecord;
use crate::postprocess::Postprocessor;
use crate::util;
use chrono::{DateTime, Utc};
use log::info;
use serde_json::Value;

pub const OUTPUT_FILE: &str = "btc-price-postprocessed.json";

/// Binance 单交易对最新价格的后处理器
#[derive(Default)]
pub struct TickerPostprocessor;

impl TickerPostprocessor {
    pub fn new() -> Self {
        Self
    }
}

/// Binance 出错时返回 `{ code, msg }`，code 既可能是数字也可能是字符串
fn upstream_error(payload: &serde_json::Map<String, Value>) -> Option<ValidationError> {
    let code = payload.get("code")?;
    let msg = payload.get("msg")?.as_str()?;

    let code = match code {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        _ => "unknown".to_string(),
    };

    Some(ValidationError::UpstreamError {
        code,
        msg: msg.to_string(),
    })
}

impl Postprocessor for TickerPostprocessor {
    type Output = PriceRecord;

    fn name(&self) -> &'static str {
        "Binance"
    }

    fn output_file(&self) -> &'static str {
        OUTPUT_FILE
    }

    fn transform_at(
        &self,
        raw: &Value,
        fetched_at: &DateTime<Utc>,
    ) -> Result<PriceRecord, ValidationError> {
        let payload = raw.as_object().ok_or(ValidationError::MissingObjectPayload)?;

        // 错误响应优先，即使同时带有 symbol/price 也按错误处理
        if let Some(err) = upstream_error(payload) {
            return Err(err);
        }

        let price_usd = util::coerce_number(payload.get("price"));
        let symbol = util::non_empty_str(payload.get("symbol")).ok_or(ValidationError::MissingSymbol)?;

        if !price_usd.is_finite() {
            return Err(ValidationError::PriceNotNumeric);
        }

        info!("{} priced at {} USD", symbol, price_usd);
        Ok(PriceRecord {
            symbol: symbol.to_string(),
            price_usd,
            fetched_at: util::format_timestamp(fetched_at),
        })
    }
}
