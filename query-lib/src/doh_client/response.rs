use super::{DoHContentType, ProtocolError};
use crate::{
  dns_message::{self, Message},
  error::*,
  log::*,
};
use bytes::Bytes;
use reqwest::{
  header::{self, HeaderMap},
  StatusCode,
};

#[derive(Debug, Clone)]
/// Fully read http response of a DoH resolver
pub struct DoHResponse {
  status: StatusCode,
  headers: HeaderMap,
  body: Option<Bytes>,
}

impl DoHResponse {
  pub fn new(status: StatusCode, headers: &HeaderMap, body: Option<Bytes>) -> Self {
    Self {
      status,
      headers: headers.clone(),
      body,
    }
  }

  /// Read the whole body of the response.
  /// The body is always `Some` here, `ProtocolError::MissingBody` only arises from responses built by `new`.
  pub async fn read(response: reqwest::Response) -> Result<Self> {
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.bytes().await?;
    debug!("[DoH] response {} with {} bytes", status, body.len());
    Ok(Self {
      status,
      headers,
      body: Some(body),
    })
  }

  pub fn status(&self) -> StatusCode {
    self.status
  }

  pub fn headers(&self) -> &HeaderMap {
    &self.headers
  }

  pub fn body(&self) -> Option<&Bytes> {
    self.body.as_ref()
  }
}

/// Validate the response against the negotiated content type and unpack the DNS message
pub fn decode_response(response: &DoHResponse, content_type: DoHContentType) -> Result<Message> {
  let Some(body) = response.body() else {
    return Err(ProtocolError::MissingBody.into());
  };
  if response.status() != StatusCode::OK {
    return Err(ProtocolError::UnexpectedStatus(response.status()).into());
  }

  let actual = response
    .headers()
    .get(header::CONTENT_TYPE)
    .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
    .unwrap_or_default();
  if !actual.eq_ignore_ascii_case(content_type.as_str()) {
    return Err(ProtocolError::UnexpectedContentType(actual).into());
  }

  if body.is_empty() {
    return Err(ProtocolError::EmptyBody.into());
  }

  let message = dns_message::unpack(body)?;
  if message.header.truncated {
    warn!("[DoH] response has TC flag set, answers may be incomplete");
  }
  Ok(message)
}
