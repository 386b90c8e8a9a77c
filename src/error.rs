use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("missing api key")]
    MissingCredential,
    #[error("upstream: {0}")]
    Upstream(String),
    #[error("malformed response: {0}")]
    Malformed(String),
    #[error("a fix request is already in flight")]
    Busy,
}
