use std::fs::File;
use std::io::BufWriter;

use crate::candles::{read_candles_from_file, CandleHeader};
use crate::config::ConverterConfig;
use crate::error::ConvertError;
use crate::formatter::write_candles_csv;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
  pub num_candles: usize,
  pub header: CandleHeader,
}

/// Reads `data.candles` from the input JSON and writes it to the output CSV.
/// The input is fully parsed before the output file is touched.
pub fn convert(config: &ConverterConfig) -> Result<ConversionSummary, ConvertError> {
  // load candles
  let candles = read_candles_from_file(&config.input_filename)?;
  // build header from the first candle
  let header = CandleHeader::from_candles(&candles);
  // write csv
  let file = File::create(&config.output_filename)?;
  let num_candles = write_candles_csv(BufWriter::new(file), &header, &candles)?;
  log::info!("wrote {} rows ({} columns) to {}", num_candles, header.len(), config.output_filename);
  return Ok(ConversionSummary { num_candles, header });
}
