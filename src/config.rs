use std::path::PathBuf;

/// 天气预报最多保留的小时数
pub const DEFAULT_FORECAST_WINDOW: usize = 24;

pub struct Config {
    pub output_dir: PathBuf,
    pub forecast_window: usize,
}

impl Config {
    pub fn new() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            forecast_window: DEFAULT_FORECAST_WINDOW,
        }
    }

    pub fn with_output_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_forecast_window(mut self, window: usize) -> Self {
        self.forecast_window = window;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
