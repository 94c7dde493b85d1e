use charprobe_dsa::ModelError;
use thiserror::Error;

/// Setup failures. Input bytes never produce one of these.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("malformed transition table: {0}")]
    Model(ModelError),
}

impl From<ModelError> for ProbeError {
    fn from(e: ModelError) -> Self {
        ProbeError::Model(e)
    }
}
