pub mod candles;
pub mod config;
pub mod converter;
pub mod error;
pub mod formatter;

pub use config::ConverterConfig;
pub use converter::{convert, ConversionSummary};
pub use error::ConvertError;
