use crate::{
  error::*,
  http_client::{ResolveIpResponse, ResolveIps},
  log::*,
};
use async_trait::async_trait;
use hickory_resolver::{
  config::{NameServerConfigGroup, ResolverConfig, ResolverOpts},
  TokioAsyncResolver,
};
use std::net::SocketAddr;
use url::{Host, Url};

#[derive(PartialEq, Eq, Debug, Clone, Default)]
/// How the host name of the DoH resolver itself is resolved
pub enum Bootstrap {
  /// Leave it to the platform resolver of the HTTP client
  #[default]
  System,
  /// Resolve via the given plain DNS server
  Resolver(SocketAddr),
  /// Never resolve, only IP literal hosts can be reached
  Disabled,
}

impl std::fmt::Display for Bootstrap {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::System => write!(f, "system"),
      Self::Resolver(addr) => write!(f, "udp://{addr}"),
      Self::Disabled => write!(f, "disabled"),
    }
  }
}

impl Bootstrap {
  /// Resolve endpoints whose host is a domain name.
  /// The result is empty when the platform resolver is used.
  pub(crate) async fn resolve_endpoints(&self, endpoints: &[Url]) -> Result<Vec<ResolveIpResponse>> {
    let domain_endpoints = endpoints
      .iter()
      .filter(|endpoint| matches!(endpoint.host(), Some(Host::Domain(_))))
      .cloned()
      .collect::<Vec<_>>();

    match self {
      Self::System => Ok(vec![]),
      Self::Disabled => match domain_endpoints.first().and_then(|endpoint| endpoint.host_str()) {
        Some(host) => Err(DohQueryError::BootstrapDisabled(host.to_string())),
        None => Ok(vec![]),
      },
      Self::Resolver(addr) => {
        let resolver = BootstrapDnsResolver::new(addr);
        crate::http_client::resolve_ips(&domain_endpoints, resolver).await
      }
    }
  }
}

/* ---------------------------------------- */
/// stub resolver using bootstrap DNS resolver
pub(crate) struct BootstrapDnsResolver {
  /// wrapper of hickory-resolver
  inner: TokioAsyncResolver,
}

impl BootstrapDnsResolver {
  /// Build stub resolver using a single plain dns server
  pub(crate) fn new(addr: &SocketAddr) -> Self {
    let name_servers = NameServerConfigGroup::from_ips_clear(&[addr.ip()], addr.port(), true);
    let resolver_config = ResolverConfig::from_parts(None, vec![], name_servers);
    Self {
      inner: TokioAsyncResolver::tokio(resolver_config, ResolverOpts::default()),
    }
  }
}

#[async_trait]
impl ResolveIps for BootstrapDnsResolver {
  /// Lookup the IP addresses associated with a name using the bootstrap resolver
  async fn resolve_ips(&self, target_url: &Url) -> Result<ResolveIpResponse> {
    let host_str = target_url
      .host_str()
      .ok_or_else(|| DohQueryError::FailedToResolveIpsForHttpClient(target_url.to_string()))?;
    let port = target_url.port_or_known_default().unwrap_or(443);
    // The final dot forces this to be an FQDN, otherwise the search rules as specified
    // in `ResolverOpts` will take effect. FQDN's are generally cheaper queries.
    let response = self.inner.lookup_ip(format!("{}.", host_str)).await?;

    // There can be many addresses associated with the name,
    // this can return IPv4 and/or IPv6 addresses
    let target_addrs = response.iter().map(|addr| SocketAddr::new(addr, port)).collect::<Vec<_>>();
    if target_addrs.is_empty() {
      return Err(DohQueryError::FailedToResolveIpsForHttpClient(host_str.to_string()));
    }
    debug!("Resolved {} by bootstrap dns: {:?}", host_str, target_addrs);

    Ok(ResolveIpResponse {
      hostname: host_str.to_string(),
      addresses: target_addrs,
    })
  }
}
