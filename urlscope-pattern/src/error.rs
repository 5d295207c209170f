use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("pattern does not follow the match pattern grammar: {0}")]
    Grammar(String),
    #[error("path glob did not translate to a regex: {0}")]
    Glob(String),
}

#[derive(Debug, Error)]
pub enum UrlError {
    #[error("invalid url: {0}")]
    Parse(#[from] url::ParseError),
}
