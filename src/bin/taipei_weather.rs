use flat_postprocess::config::Config;
use flat_postprocess::postprocess::{self, weather::WeatherPostprocessor};

use clap::{Arg, Command};
use log::info;
use std::path::Path;

fn main() {
    env_logger::init();

    let matches = Command::new("taipei_weather")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Postprocess a downloaded Open-Meteo hourly forecast for Taipei")
        .arg(
            Arg::new("input")
                .value_name("INPUT")
                .help("Downloaded Open-Meteo JSON file")
                .required(true)
                .takes_value(true),
        )
        .get_matches();

    // required(true) 保证参数存在
    let input = matches.value_of("input").unwrap_or_default();

    let config = Config::new();
    let processor = WeatherPostprocessor::new(&config);

    match postprocess::run(&processor, Path::new(input), &config) {
        Ok(path) => {
            info!("Forecast written to {}", path.display());
            println!("Wrote a post process file");
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
