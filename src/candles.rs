use serde::de::Error as _;
use serde_json::{Map, Value};

use crate::error::ConvertError;

/// One candle row exactly as the broker sent it: `[date, open, high, low, close, volume(, oi)]`.
pub type CandleRecord = Vec<Value>;

pub const BASE_COLUMNS: [&str; 6] = ["date", "open", "high", "low", "close", "volume"];
pub const OPEN_INTEREST_COLUMN: &str = "oi";

fn shape_error(message: String) -> ConvertError {
  return ConvertError::Json(serde_json::Error::custom(message));
}

#[derive(Debug)]
pub struct HistoricalData {
  pub candles: Option<Vec<CandleRecord>>,
}

#[derive(Debug)]
pub struct HistoricalResponse {
  /// Informational only, any JSON type is accepted.
  pub status: Option<Value>,
  pub data: Option<HistoricalData>,
}

impl HistoricalData {
  fn from_map(mut data: Map<String, Value>) -> Result<Self, ConvertError> {
    let candles = match data.remove("candles") {
      None | Some(Value::Null) => None,
      Some(Value::Array(values)) => {
        let mut candles = Vec::with_capacity(values.len());
        for (index, value) in values.into_iter().enumerate() {
          match value {
            Value::Array(candle) => candles.push(candle),
            other => return Err(shape_error(format!("candle {index} is not an array: {other}"))),
          }
        }
        Some(candles)
      }
      Some(other) => return Err(shape_error(format!("data.candles is not an array: {other}"))),
    };
    return Ok(Self { candles });
  }
}

impl HistoricalResponse {
  /// Parses the document and checks that `data` is an object and `data.candles` a list of arrays.
  pub fn from_json(stringified_value: &str) -> Result<Self, ConvertError> {
    let value: Value = serde_json::from_str(stringified_value)?;
    let mut root = match value {
      Value::Object(root) => root,
      other => return Err(shape_error(format!("document is not an object: {other}"))),
    };
    let status = root.remove("status");
    let data = match root.remove("data") {
      None | Some(Value::Null) => None,
      Some(Value::Object(data)) => Some(HistoricalData::from_map(data)?),
      Some(other) => return Err(shape_error(format!("data is not an object: {other}"))),
    };
    return Ok(Self { status, data });
  }

  /// Candles under `data.candles`, empty when either key is missing.
  pub fn into_candles(self) -> Vec<CandleRecord> {
    if let Some(Value::String(status)) = &self.status {
      if status != "success" {
        log::warn!("response status = {status}, converting whatever candles are present");
      }
    }
    let data = match self.data {
      Some(data) => data,
      None => {
        log::warn!("no data in response, defaulting to no candles");
        return vec![];
      }
    };
    match data.candles {
      Some(candles) => candles,
      None => {
        log::warn!("no data.candles in response, defaulting to no candles");
        vec![]
      }
    }
  }
}

pub fn read_candles_from_file(filename: &str) -> Result<Vec<CandleRecord>, ConvertError> {
  let stringified_value = std::fs::read_to_string(filename)?;
  let candles = HistoricalResponse::from_json(&stringified_value)?.into_candles();
  log::info!("read {} candles from {}", candles.len(), filename);
  return Ok(candles);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandleHeader {
  columns: Vec<&'static str>,
}

impl CandleHeader {
  /// Only the first candle decides whether the `oi` column is present.
  pub fn from_candles(candles: &[CandleRecord]) -> Self {
    let mut columns = BASE_COLUMNS.to_vec();
    let has_open_interest = candles
      .first()
      .map(|first_candle| first_candle.len() == BASE_COLUMNS.len() + 1)
      .unwrap_or(false);
    if has_open_interest {
      columns.push(OPEN_INTEREST_COLUMN);
    }
    return Self { columns };
  }

  pub fn columns(&self) -> &[&'static str] {
    return &self.columns;
  }

  pub fn len(&self) -> usize {
    return self.columns.len();
  }

  pub fn has_open_interest(&self) -> bool {
    return self.columns.last() == Some(&OPEN_INTEREST_COLUMN);
  }
}
