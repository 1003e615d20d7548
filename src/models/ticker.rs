use serde::Serialize;

/// 单个交易对的报价快照
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceRecord {
    pub symbol: String,
    #[serde(rename = "priceUSD", serialize_with = "crate::util::serialize_number")]
    pub price_usd: f64,
    #[serde(rename = "fetchedAt")]
    pub fetched_at: String,
}
