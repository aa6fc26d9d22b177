#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Question generation failed: {0}")]
    GenerationFailed(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
