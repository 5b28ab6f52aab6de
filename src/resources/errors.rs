use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to access config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Error, Debug)]
pub enum MenuError {
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Telemetry I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to encode telemetry record: {0}")]
    Encode(#[from] serde_json::Error),
}
