use flat_postprocess::config::Config;
use flat_postprocess::postprocess::{self, ticker::TickerPostprocessor};

use clap::{Arg, Command};
use log::info;
use std::path::Path;

fn main() {
    env_logger::init();

    let matches = Command::new("btc_price")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Postprocess a downloaded Binance ticker price")
        .arg(
            Arg::new("input")
                .value_name("INPUT")
                .help("Downloaded Binance ticker JSON file")
                .required(true)
                .takes_value(true),
        )
        .get_matches();

    // required(true) 保证参数存在
    let input = matches.value_of("input").unwrap_or_default();

    let config = Config::new();
    let processor = TickerPostprocessor::new();

    match postprocess::run(&processor, Path::new(input), &config) {
        Ok(path) => {
            info!("Price written to {}", path.display());
            println!("Wrote a post process file");
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
