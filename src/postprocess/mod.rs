pub mod ticker;
pub mod weather;

use crate::config::Config;
use crate::errors::{PostprocessError, Result, ValidationError};
use crate::util::{self, json_io};
use chrono::{DateTime, Utc};
use log::{debug, error, info};
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Base trait for Flat Data postprocessors
pub trait Postprocessor {
    type Output: Serialize;

    /// Upstream API name, used in log lines
    fn name(&self) -> &'static str;

    /// File name the processed result is written to
    fn output_file(&self) -> &'static str;

    /// Validate the raw payload and reshape it, stamping every record with `fetched_at`
    fn transform_at(
        &self,
        raw: &Value,
        fetched_at: &DateTime<Utc>,
    ) -> std::result::Result<Self::Output, ValidationError>;

    fn transform(&self, raw: &Value) -> std::result::Result<Self::Output, ValidationError> {
        self.transform_at(raw, &util::now_timestamp())
    }
}

/// 读取输入文件、校验整形并写出结果，返回输出文件路径。
/// 任何一步失败都不会写出文件。
pub fn run<P: Postprocessor>(processor: &P, input: &Path, config: &Config) -> Result<PathBuf> {
    info!("Loading {} payload from {}", processor.name(), input.display());
    let raw = json_io::read_json(input)?;
    debug!("{}", raw);

    let output = processor.transform(&raw).map_err(|e| {
        error!("Unexpected {} response: {}", processor.name(), e);
        PostprocessError::from(e)
    })?;

    let path = config.output_dir.join(processor.output_file());
    json_io::write_json(&path, &output)?;
    Ok(path)
}
