#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config.missing_variable: {0}")]
    MissingVariable(&'static str),
    #[error("config.invalid_value: {0}")]
    InvalidValue(&'static str),
}
