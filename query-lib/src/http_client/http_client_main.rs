use super::ResolveIpResponse;
use crate::{error::*, log::*};
use reqwest::{Client, Request, Response};
use tokio::time::Duration;

#[derive(Debug, Clone)]
/// HttpClient that is a wrapper of reqwest::Client
pub struct HttpClient {
  /// client inner
  inner: Client,
}

impl HttpClient {
  /// Build HttpClient, overriding the addresses of pre-resolved endpoints
  pub fn new(timeout_sec: Duration, user_agent: &str, resolved_ips: &[ResolveIpResponse]) -> Result<Self> {
    let mut client = Client::builder().user_agent(user_agent).timeout(timeout_sec);

    // Override pre-resolved ip addresses
    client = resolved_ips.iter().fold(client, |client, resolve_ip| {
      debug!("Pin {} to {:?}", resolve_ip.hostname, resolve_ip.addresses);
      client.resolve_to_addrs(&resolve_ip.hostname, &resolve_ip.addresses)
    });

    Ok(Self { inner: client.build()? })
  }

  /// Send a request built elsewhere
  pub async fn execute(&self, request: Request) -> Result<Response> {
    let response = self.inner.execute(request).await?;
    Ok(response)
  }
}
