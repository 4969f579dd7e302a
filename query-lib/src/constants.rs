////////////////////////////////
// Default Values for Config  //
////////////////////////////////
// Can override by specifying values in config.toml or cli options

/// Time out secs for HTTP requests
pub const HTTP_TIMEOUT_SEC: u64 = 10;

/// HTTP User-Agent, followed by the crate version
pub const HTTP_USER_AGENT: &str = "doh-query";

/// Port of the plain DNS server used as bootstrap resolver
pub const BOOTSTRAP_DNS_PORT: u16 = 53;

///////////////////////////////
// Constant Values for DoH   //
///////////////////////////////
// Cannot override below

/// DoH is defined only over https (RFC 8484 5)
pub const SCHEME_HTTPS: &str = "https";

/// Content type of RFC 8484
pub const CONTENT_TYPE_DNS_MESSAGE: &str = "application/dns-message";
/// Content type of the earlier drafts, still served by some resolvers
pub const CONTENT_TYPE_DNS_UDPWIREFORMAT: &str = "application/dns-udpwireformat";

/// Query parameter carrying the base64url encoded message of GET requests
pub const QUERY_PARAM_DNS: &str = "dns";
/// Query parameter hinting the content type, left empty for the udpwireformat draft
pub const QUERY_PARAM_CT: &str = "ct";
