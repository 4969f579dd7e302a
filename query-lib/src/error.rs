pub use crate::{
  dns_message::{DecodingError, EncodingError},
  doh_client::ProtocolError,
};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DohQueryError>;

/// Describes things that can go wrong in a DoH query
#[derive(Debug, Error)]
pub enum DohQueryError {
  /// Question cannot be represented in wire format
  #[error(transparent)]
  Encoding(#[from] EncodingError),
  /// Malformed or truncated DNS message
  #[error(transparent)]
  Decoding(#[from] DecodingError),
  /// Violation of the DoH protocol by either side
  #[error(transparent)]
  Protocol(#[from] ProtocolError),

  #[error("Unknown record type: {0}")]
  UnknownRecordType(String),
  #[error("Unknown record class: {0}")]
  UnknownRecordClass(String),

  #[error("HttpClient error: {0}")]
  HttpClientError(#[from] reqwest::Error),
  #[error("Url error: {0}")]
  UrlError(#[from] url::ParseError),

  #[error("Bootstrap resolver error: {0}")]
  BootstrapResolverError(#[from] hickory_resolver::error::ResolveError),
  #[error("Bootstrap dns is disabled, cannot resolve {0}")]
  BootstrapDisabled(String),
  #[error("Failed to resolve ips for HTTP client: {0}")]
  FailedToResolveIpsForHttpClient(String),
}
