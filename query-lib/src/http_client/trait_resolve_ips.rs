use crate::error::*;
use async_trait::async_trait;
use std::net::SocketAddr;
use url::{Host, Url};

#[async_trait]
/// Trait that resolves ip addresses from a given url.
/// Implemented by the bootstrap DNS resolver.
pub trait ResolveIps {
  async fn resolve_ips(&self, target_url: &Url) -> Result<ResolveIpResponse>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Response of ResolveIps trait
pub struct ResolveIpResponse {
  /// hostname of target url
  pub hostname: String,
  /// resolved socket addresses
  pub addresses: Vec<SocketAddr>,
}

/// Resolve ip addresses for given endpoints.
/// Endpoints with an ip literal host are passed through without lookup.
pub(crate) async fn resolve_ips(endpoints: &[Url], resolver_ips: impl ResolveIps) -> Result<Vec<ResolveIpResponse>> {
  let resolver_ips = &resolver_ips;
  let resolve_ips_fut = endpoints.iter().map(|endpoint| async move {
    match endpoint.host() {
      Some(Host::Domain(_)) => resolver_ips.resolve_ips(endpoint).await,
      Some(_) => {
        let addresses = endpoint
          .socket_addrs(|| None)
          .map_err(|_| DohQueryError::FailedToResolveIpsForHttpClient(endpoint.to_string()))?;
        Ok(ResolveIpResponse {
          hostname: endpoint.host_str().unwrap_or_default().to_string(),
          addresses,
        })
      }
      None => Err(DohQueryError::FailedToResolveIpsForHttpClient(endpoint.to_string())),
    }
  });
  futures::future::try_join_all(resolve_ips_fut).await
}
