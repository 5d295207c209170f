use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScopeError {
    #[error("scope configuration error: {0}")]
    Config(String),
    #[error("scope IO error: {0}")]
    Io(#[from] std::io::Error),
}
