use std::error::Error;

use candles_to_csv::{convert, ConverterConfig};
use log::LevelFilter;
use simple_logger::SimpleLogger;

fn main() -> Result<(), Box<dyn Error>> {
  // load env vars (optional, only carries logger settings)
  dotenv::dotenv().ok();
  // logger
  SimpleLogger::new().with_level(LevelFilter::Warn).env().init()?;
  // config
  let config = ConverterConfig::default();
  // convert
  let summary = convert(&config)?;
  log::info!("converted {} candles, open interest = {}", summary.num_candles, summary.header.has_open_interest());
  println!("CSV file saved as {}", config.output_filename);
  return Ok(());
}
