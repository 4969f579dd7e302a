use super::{
  parse::Opts,
  toml::ConfigToml,
  utils_verifier::{verify_ip_addr, verify_target_url},
};
use crate::error::*;
use doh_query_lib::{Bootstrap, ClientConfig, DoHContentType, DoHMethod, RecordClass, RecordType, BOOTSTRAP_DNS_PORT};
use std::net::{IpAddr, SocketAddr};
use tokio::time::Duration;
use url::Url;

#[derive(PartialEq, Eq, Clone, Debug)]
/// Everything needed to run the lookups, merged from cli options, config file and defaults
pub struct QueryConfig {
  /// DoH client settings
  pub client_config: ClientConfig,
  /// names to look up, in order
  pub names: Vec<String>,
  pub record_type: RecordType,
  pub record_class: RecordClass,
  pub recursion_desired: bool,
  /// print answer bodies only
  pub short: bool,
  /// dump http exchange to stderr
  pub dump_http: bool,
}

impl TryFrom<&Opts> for QueryConfig {
  type Error = anyhow::Error;

  fn try_from(opts: &Opts) -> Result<Self> {
    let config_toml = match &opts.config_file_path {
      Some(path) => ConfigToml::new(path).map_err(|e| anyhow!("Invalid toml file {path}: {e}"))?,
      None => ConfigToml::default(),
    };
    QueryConfig::merge(opts, &config_toml)
  }
}

impl QueryConfig {
  /// Command line options override the config file, and the config file overrides defaults
  fn merge(opts: &Opts, config_toml: &ConfigToml) -> Result<Self> {
    /////////////////////////////
    // resolver
    let Some(resolver) = opts.resolver.as_ref().or(config_toml.resolver.as_ref()) else {
      bail!("DoH resolver url must be given by --resolver or in the config file");
    };
    if let Err(e) = verify_target_url(resolver) {
      bail!("Invalid resolver url: {e}");
    }
    let mut client_config = ClientConfig::new(Url::parse(resolver)?);

    /////////////////////////////
    // http exchange
    if opts.post || config_toml.use_post.unwrap_or(false) {
      client_config.method = DoHMethod::Post;
    }
    if opts.legacy_content_type || config_toml.legacy_content_type.unwrap_or(false) {
      client_config.content_type = DoHContentType::DnsUdpWireFormat;
    }
    if let Some(user_agent) = &config_toml.user_agent {
      client_config.http_user_agent = user_agent.clone();
    }
    if let Some(timeout_sec) = config_toml.timeout_sec {
      client_config.http_timeout_sec = Duration::from_secs(timeout_sec);
    }

    /////////////////////////////
    // bootstrap
    client_config.bootstrap = if let Some(ip) = &opts.bootstrap_resolver {
      bootstrap_resolver(ip)?
    } else if opts.no_bootstrap {
      Bootstrap::Disabled
    } else {
      match (&config_toml.bootstrap_resolver, config_toml.no_bootstrap.unwrap_or(false)) {
        (Some(_), true) => bail!("bootstrap_resolver and no_bootstrap cannot be set at the same time"),
        (Some(ip), false) => bootstrap_resolver(ip)?,
        (None, true) => Bootstrap::Disabled,
        (None, false) => Bootstrap::System,
      }
    };

    /////////////////////////////
    // question
    let record_type = match opts.record_type.as_ref().or(config_toml.record_type.as_ref()) {
      Some(v) => v.parse::<RecordType>()?,
      None => RecordType::A,
    };
    let record_class = match opts.record_class.as_ref().or(config_toml.record_class.as_ref()) {
      Some(v) => v.parse::<RecordClass>()?,
      None => RecordClass::IN,
    };
    let recursion_desired = !opts.no_recurse && config_toml.recursion_desired.unwrap_or(true);

    Ok(Self {
      client_config,
      names: opts.names.clone(),
      record_type,
      record_class,
      recursion_desired,
      short: opts.short,
      dump_http: opts.dump_http,
    })
  }
}

fn bootstrap_resolver(ip: &str) -> Result<Bootstrap> {
  if let Err(e) = verify_ip_addr(ip) {
    bail!("Invalid bootstrap resolver: {e}");
  }
  let ip = ip.parse::<IpAddr>()?;
  Ok(Bootstrap::Resolver(SocketAddr::new(ip, BOOTSTRAP_DNS_PORT)))
}
