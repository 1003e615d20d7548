pub mod config;
pub mod errors;
pub mod models;
pub mod postprocess;
pub mod util;

pub use config::Config;
pub use errors::{PostprocessError, Result, ValidationError};
pub use models::ticker::PriceRecord;
pub use models::weather::{HourlyEntry, WeatherRecord};
pub use postprocess::ticker::TickerPostprocessor;
pub use postprocess::weather::WeatherPostprocessor;
pub use postprocess::{run, Postprocessor};
