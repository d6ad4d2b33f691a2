use thiserror::Error;

/// Everything that can abort a conversion.
#[derive(Debug, Error)]
pub enum ConvertError {
  /// Reading the input or writing the output failed (includes a missing input file).
  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),

  /// The input is not valid JSON, or `data.candles` is not a list of records.
  #[error("invalid JSON: {0}")]
  Json(#[from] serde_json::Error),

  #[error("CSV error: {0}")]
  Csv(#[from] csv::Error),
}
