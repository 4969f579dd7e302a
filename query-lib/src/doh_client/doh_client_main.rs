use super::{request, response, DoHContentType, DoHMethod, DoHResponse, ProtocolError};
use crate::{
  config::ClientConfig,
  constants::SCHEME_HTTPS,
  dns_message::{Message, Question},
  error::*,
  http_client::HttpClient,
  log::*,
};
use reqwest::Request;
use url::Url;

/// DoH client bound to a single resolver
pub struct DoHClient {
  /// http client to make doh query
  http_client: HttpClient,
  /// url of the resolver
  resolver_url: Url,
  /// DoH method
  doh_method: DoHMethod,
  /// content type negotiated with the resolver
  content_type: DoHContentType,
}

impl DoHClient {
  /// Create a new DoH client
  pub async fn new(config: &ClientConfig) -> Result<Self> {
    // 1. refuse anything but https before touching the network
    if config.resolver_url.scheme() != SCHEME_HTTPS {
      return Err(ProtocolError::SchemeNotHttps(config.resolver_url.to_string()).into());
    }

    // 2. resolve the resolver host name by the bootstrap policy
    let resolved_ips = config
      .bootstrap
      .resolve_endpoints(std::slice::from_ref(&config.resolver_url))
      .await?;
    debug!("Bootstrap ({}) resolved: {:?}", config.bootstrap, resolved_ips);

    // 3. http client pinned to the resolved addresses
    let http_client = HttpClient::new(config.http_timeout_sec, &config.http_user_agent, &resolved_ips)?;

    Ok(Self {
      http_client,
      resolver_url: config.resolver_url.clone(),
      doh_method: config.method,
      content_type: config.content_type,
    })
  }

  pub fn resolver_url(&self) -> &Url {
    &self.resolver_url
  }

  pub fn method(&self) -> DoHMethod {
    self.doh_method
  }

  pub fn content_type(&self) -> DoHContentType {
    self.content_type
  }

  /// Build the http request for the question
  pub fn build_request(&self, question: &Question) -> Result<Request> {
    request::build_request(&self.resolver_url, question, self.doh_method, self.content_type)
  }

  /// Exchange the request with the resolver and read the whole response
  pub async fn send(&self, request: Request) -> Result<DoHResponse> {
    let response = self.http_client.execute(request).await?;
    DoHResponse::read(response).await
  }

  /// Decode the response as a DNS message
  pub fn decode(&self, response: &DoHResponse) -> Result<Message> {
    response::decode_response(response, self.content_type)
  }

  /// Build, send and decode in one go
  pub async fn query(&self, question: &Question) -> Result<Message> {
    let request = self.build_request(question)?;
    let response = self.send(request).await?;
    self.decode(&response)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    bootstrap::Bootstrap,
    dns_message::{RecordClass, RecordType},
  };
  use bytes::Bytes;
  use reqwest::{header, StatusCode};

  #[tokio::test]
  async fn non_https_resolver_is_refused() {
    let config = ClientConfig::new(Url::parse("http://dns.google/dns-query").unwrap());
    let res = DoHClient::new(&config).await;
    assert!(matches!(res, Err(DohQueryError::Protocol(ProtocolError::SchemeNotHttps(_)))));
  }

  #[tokio::test]
  async fn disabled_bootstrap_refuses_domain_resolver() {
    let mut config = ClientConfig::new(Url::parse("https://dns.google/dns-query").unwrap());
    config.bootstrap = Bootstrap::Disabled;
    let res = DoHClient::new(&config).await;
    assert!(matches!(res, Err(DohQueryError::BootstrapDisabled(_))));

    config.resolver_url = Url::parse("https://8.8.8.8/dns-query").unwrap();
    assert!(DoHClient::new(&config).await.is_ok());
  }

  #[tokio::test]
  async fn build_and_decode_without_network() {
    let config = ClientConfig::new(Url::parse("https://dns.example/dns-query").unwrap());
    let client = DoHClient::new(&config).await.unwrap();
    assert_eq!(client.method(), DoHMethod::Get);
    assert_eq!(client.content_type(), DoHContentType::DnsMessage);

    let question = Question::new("example.com", RecordType::A, RecordClass::IN, true);
    let request = client.build_request(&question).unwrap();
    assert_eq!(request.url().host_str(), client.resolver_url().host_str());
    assert_eq!(request.url().path(), "/dns-query");
    assert!(request.url().query().unwrap().starts_with("dns="));

    let answer: &[u8] = &[
      0x00, 0x00, 0x81, 0x80, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, // header
      0x07, b'e', b'x', b'a', b'm', b'p', b'l', b'e', 0x03, b'c', b'o', b'm', 0x00, 0x00, 0x01, 0x00, 0x01, // question
      0xc0, 0x0c, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x01, 0x2c, 0x00, 0x04, 93, 184, 216, 34, // answer
    ];
    let mut headers = header::HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, header::HeaderValue::from_static("application/dns-message"));
    let response = DoHResponse::new(StatusCode::OK, &headers, Some(Bytes::copy_from_slice(answer)));

    let message = client.decode(&response).unwrap();
    let answer = &message.answers[0];
    assert_eq!(crate::dns_message::format_header(&answer.header), "example.com. 300 A");
    assert_eq!(crate::dns_message::format_body(&answer.body), "93.184.216.34");

    // a failed decode leaves the client usable
    let broken = DoHResponse::new(StatusCode::SERVICE_UNAVAILABLE, &headers, Some(Bytes::new()));
    assert!(client.decode(&broken).is_err());
    assert!(client.decode(&response).is_ok());
  }
}
