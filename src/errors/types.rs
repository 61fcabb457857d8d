use thiserror::Error;

#[derive(Debug, Error)]
pub enum VexError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid scan input: {0}")]
    InvalidInput(String),

    #[error("Failed to render VEX document: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to write VEX document: {0}")]
    Write(#[source] std::io::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl VexError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            VexError::Config(_) | VexError::Yaml(_) => 2,
            VexError::InvalidInput(_) => 3,
            VexError::Serialize(_) | VexError::Write(_) => 4,
            _ => 1,
        }
    }
}
