mod bootstrap;
mod config;
mod constants;
pub mod dns_message;
mod doh_client;
mod error;
mod http_client;
mod log;

pub use bootstrap::Bootstrap;
pub use config::ClientConfig;
pub use constants::BOOTSTRAP_DNS_PORT;
pub use dns_message::{
  format_body, format_header, Message, Question, RecordBody, RecordClass, RecordType, ResourceRecord, ResponseCode,
};
pub use doh_client::{build_request, decode_response, DoHClient, DoHContentType, DoHMethod, DoHResponse, ProtocolError};
pub use error::{DecodingError, DohQueryError, EncodingError, Result};
pub use reqwest::Request;
