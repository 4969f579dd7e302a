mod http_client_main;
mod trait_resolve_ips;

pub use http_client_main::HttpClient;
pub(crate) use trait_resolve_ips::resolve_ips;
pub use trait_resolve_ips::{ResolveIpResponse, ResolveIps};
