use thiserror::Error;

#[derive(Error, Debug)]
pub enum CpfApiError {
    #[error("Registry request failed: {0}")]
    RegistryError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, CpfApiError>;
