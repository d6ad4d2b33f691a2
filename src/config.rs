#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterConfig {
  pub input_filename: String,
  pub output_filename: String,
}

impl Default for ConverterConfig {
  fn default() -> Self {
    Self {
      input_filename: String::from("reliance_historical.json"),
      output_filename: String::from("reliance_historical.csv"),
    }
  }
}
