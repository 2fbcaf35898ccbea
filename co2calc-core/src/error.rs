use thiserror::Error;

#[derive(Debug, Error)]
pub enum Co2Error {
    #[error("Unknown emission category '{0}'")]
    UnknownCategory(String),

    #[error("Unsupported input file format for '{0}' (expected .yaml, .yml or .json)")]
    UnsupportedInputFormat(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error for file '{0}': {1}")]
    FileIO(String, #[source] std::io::Error),

    #[error("Failed to parse YAML from '{0}': {1}")]
    YamlParsing(String, #[source] serde_yaml::Error),

    #[error("Failed to parse JSON from '{0}': {1}")]
    JsonParsing(String, #[source] serde_json::Error),

    #[error("Failed to write CSV: {0}")]
    CsvError(#[from] csv::Error),
}
