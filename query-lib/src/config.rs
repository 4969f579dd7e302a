use crate::{bootstrap::Bootstrap, constants::*, doh_client::DoHContentType, doh_client::DoHMethod};
use tokio::time::Duration;
use url::Url;

#[derive(PartialEq, Eq, Debug, Clone)]
/// Configuration of a DoH client instance
pub struct ClientConfig {
  /// url of the DoH resolver
  pub resolver_url: Url,
  /// GET or POST
  pub method: DoHMethod,
  /// content type negotiated with the resolver, fixed for the client lifetime
  pub content_type: DoHContentType,
  /// resolution of the resolver host name
  pub bootstrap: Bootstrap,
  /// timeout for HTTP requests
  pub http_timeout_sec: Duration,
  /// http user agent
  pub http_user_agent: String,
}

impl ClientConfig {
  /// Config for the given resolver with default values otherwise
  pub fn new(resolver_url: Url) -> Self {
    Self {
      resolver_url,
      method: DoHMethod::Get,
      content_type: DoHContentType::default(),
      bootstrap: Bootstrap::default(),
      http_timeout_sec: Duration::from_secs(HTTP_TIMEOUT_SEC),
      http_user_agent: format!("{}/{}", HTTP_USER_AGENT, env!("CARGO_PKG_VERSION")),
    }
  }
}
