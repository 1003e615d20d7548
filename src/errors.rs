use thiserror::Error;

/// 上游响应不符合预期结构时的校验错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing object payload")]
    MissingObjectPayload,

    #[error("missing coordinates")]
    MissingCoordinates,

    #[error("missing hourly forecast")]
    MissingHourlyForecast,

    #[error("hourly arrays are empty")]
    EmptyHourlyArrays,

    #[error("no overlapping hourly entries")]
    NoOverlappingEntries,

    #[error("missing time at index {index}")]
    MissingTime { index: usize },

    #[error("missing temperature at index {index}")]
    MissingTemperature { index: usize },

    #[error("Binance API responded with an error ({code}): {msg}")]
    UpstreamError { code: String, msg: String },

    #[error("missing symbol")]
    MissingSymbol,

    #[error("price is not numeric")]
    PriceNotNumeric,
}

#[derive(Error, Debug)]
pub enum PostprocessError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to load {path}: {reason}")]
    LoadError { path: String, reason: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type Result<T> = std::result::Result<T, PostprocessError>;
