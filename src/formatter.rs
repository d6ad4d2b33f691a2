use std::io::Write;

use csv::{Terminator, WriterBuilder};
use serde_json::Value;

use crate::candles::{CandleHeader, CandleRecord};
use crate::error::ConvertError;

/// Renders one JSON value the way it should appear in a CSV cell.
pub fn format_field(value: &Value) -> String {
  match value {
    Value::Null => String::new(),
    Value::String(string) => string.clone(),
    // numbers, booleans and nested values keep their JSON text
    other => other.to_string(),
  }
}

pub fn format_record(candle: &CandleRecord) -> Vec<String> {
  return candle.iter().map(format_field).collect();
}

/// Writes the header then one row per candle. Returns the number of rows written.
/// Rows are written with whatever width the candle has, even if it disagrees with the header.
pub fn write_candles_csv<W: Write>(writer: W, header: &CandleHeader, candles: &[CandleRecord]) -> Result<usize, ConvertError> {
  let mut csv_writer = WriterBuilder::new()
    .flexible(true)
    .terminator(Terminator::Any(b'\n'))
    .from_writer(writer);
  log::debug!("header = {:?}", header.columns());
  csv_writer.write_record(header.columns())?;
  let header_len = header.len();
  for (index, candle) in candles.iter().enumerate() {
    if candle.len() != header_len {
      log::warn!("candle {index} has {} fields, header has {header_len}", candle.len());
    }
    csv_writer.write_record(format_record(candle))?;
  }
  csv_writer.flush()?;
  return Ok(candles.len());
}
