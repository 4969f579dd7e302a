use thiserror::Error;

/// Responses or resolver urls violating DNS-over-HTTPS
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProtocolError {
  #[error("scheme not https: {0:?}")]
  SchemeNotHttps(String),
  #[error("missing body")]
  MissingBody,
  #[error("unexpected status: {0}")]
  UnexpectedStatus(reqwest::StatusCode),
  #[error("unexpected content-type: {0:?}")]
  UnexpectedContentType(String),
  #[error("empty body")]
  EmptyBody,
}
