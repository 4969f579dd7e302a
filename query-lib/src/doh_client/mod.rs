mod doh_client_main;
mod error;
mod request;
mod response;

use crate::constants::{CONTENT_TYPE_DNS_MESSAGE, CONTENT_TYPE_DNS_UDPWIREFORMAT};

pub use doh_client_main::DoHClient;
pub use error::ProtocolError;
pub use request::build_request;
pub use response::{decode_response, DoHResponse};

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
/// DoH method, GET or POST
pub enum DoHMethod {
  Get,
  Post,
}

impl std::fmt::Display for DoHMethod {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      DoHMethod::Get => write!(f, "GET"),
      DoHMethod::Post => write!(f, "POST"),
    }
  }
}

#[derive(PartialEq, Eq, Debug, Clone, Copy, Default)]
/// Media type of DNS messages exchanged with the resolver
pub enum DoHContentType {
  /// RFC 8484
  #[default]
  DnsMessage,
  /// Pre-standard draft type
  DnsUdpWireFormat,
}

impl DoHContentType {
  pub fn as_str(&self) -> &'static str {
    match self {
      DoHContentType::DnsMessage => CONTENT_TYPE_DNS_MESSAGE,
      DoHContentType::DnsUdpWireFormat => CONTENT_TYPE_DNS_UDPWIREFORMAT,
    }
  }
}

impl std::fmt::Display for DoHContentType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}
