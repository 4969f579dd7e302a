use super::utils_verifier::{verify_ip_addr, verify_target_url};
use clap::{Arg, ArgAction, ArgMatches, Command};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
/// Parsed options
pub struct Opts {
  /// Names to look up, in order
  pub names: Vec<String>,
  /// Configuration file path
  pub config_file_path: Option<String>,
  /// DoH resolver url
  pub resolver: Option<String>,
  pub record_type: Option<String>,
  pub record_class: Option<String>,
  /// Use POST instead of GET
  pub post: bool,
  /// Negotiate application/dns-udpwireformat
  pub legacy_content_type: bool,
  /// Clear the recursion desired flag
  pub no_recurse: bool,
  /// Plain DNS server resolving the resolver host
  pub bootstrap_resolver: Option<String>,
  /// Never resolve the resolver host name
  pub no_bootstrap: bool,
  /// Print answer bodies only
  pub short: bool,
  /// Dump http exchange to stderr
  pub dump_http: bool,
}

fn build_command() -> Command {
  let _ = include_str!("../../Cargo.toml");
  clap::command!()
    .arg(
      Arg::new("names")
        .value_name("NAMES")
        .num_args(1..)
        .required(true)
        .help("Domain names to look up"),
    )
    .arg(
      Arg::new("resolver")
        .long("resolver")
        .short('r')
        .value_name("URL")
        .value_parser(verify_target_url_parser)
        .help("DoH resolver url like https://dns.google/dns-query. Required here or in the config file."),
    )
    .arg(
      Arg::new("type")
        .long("type")
        .short('t')
        .value_name("TYPE")
        .help("Record type, A unless specified"),
    )
    .arg(
      Arg::new("class")
        .long("class")
        .value_name("CLASS")
        .help("Record class, IN unless specified"),
    )
    .arg(
      Arg::new("post")
        .long("post")
        .short('p')
        .action(ArgAction::SetTrue)
        .help("Send queries by POST instead of GET"),
    )
    .arg(
      Arg::new("legacy_content_type")
        .long("legacy-content-type")
        .short('l')
        .action(ArgAction::SetTrue)
        .help("Use application/dns-udpwireformat instead of application/dns-message"),
    )
    .arg(
      Arg::new("no_recurse")
        .long("no-recurse")
        .action(ArgAction::SetTrue)
        .help("Clear the recursion desired flag"),
    )
    .arg(
      Arg::new("bootstrap_resolver")
        .long("bootstrap-resolver")
        .value_name("IP")
        .value_parser(verify_ip_addr_parser)
        .help("Resolve the resolver host name via this plain DNS server"),
    )
    .arg(
      Arg::new("no_bootstrap")
        .long("no-bootstrap")
        .action(ArgAction::SetTrue)
        .conflicts_with("bootstrap_resolver")
        .help("Never resolve the resolver host name. Only ip address hosts can be used."),
    )
    .arg(
      Arg::new("short")
        .long("short")
        .short('s')
        .action(ArgAction::SetTrue)
        .help("Print answer bodies only"),
    )
    .arg(
      Arg::new("dump_http")
        .long("dump-http")
        .action(ArgAction::SetTrue)
        .help("Dump request and response headers and hex bodies to stderr"),
    )
    .arg(
      Arg::new("config_file")
        .long("config")
        .short('c')
        .value_name("FILE")
        .help("Configuration file path like ./config.toml"),
    )
}

fn verify_target_url_parser(arg_val: &str) -> Result<String, String> {
  verify_target_url(arg_val).map(|_| arg_val.to_string())
}

fn verify_ip_addr_parser(arg_val: &str) -> Result<String, String> {
  verify_ip_addr(arg_val).map(|_| arg_val.to_string())
}

fn opts_from_matches(matches: &ArgMatches) -> Opts {
  let flag = |id: &str| matches.get_flag(id);
  let value = |id: &str| matches.get_one::<String>(id).map(|s| s.to_owned());

  Opts {
    names: matches
      .get_many::<String>("names")
      .map(|v| v.cloned().collect())
      .unwrap_or_default(),
    config_file_path: value("config_file"),
    resolver: value("resolver"),
    record_type: value("type"),
    record_class: value("class"),
    post: flag("post"),
    legacy_content_type: flag("legacy_content_type"),
    no_recurse: flag("no_recurse"),
    bootstrap_resolver: value("bootstrap_resolver"),
    no_bootstrap: flag("no_bootstrap"),
    short: flag("short"),
    dump_http: flag("dump_http"),
  }
}

/// Parse arg values passed from cli
pub fn parse_opts() -> Opts {
  let matches = build_command().get_matches();
  opts_from_matches(&matches)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn try_parse(args: &[&str]) -> Result<Opts, clap::Error> {
    let matches = build_command().try_get_matches_from(std::iter::once("doh-query").chain(args.iter().copied()))?;
    Ok(opts_from_matches(&matches))
  }

  #[test]
  fn command_is_well_formed() {
    build_command().debug_assert();
  }

  #[test]
  fn parse_full_command_line() {
    let opts = try_parse(&[
      "-r",
      "https://dns.google/dns-query",
      "-t",
      "mx",
      "--class",
      "ch",
      "-p",
      "-l",
      "--no-recurse",
      "--bootstrap-resolver",
      "8.8.8.8",
      "-s",
      "--dump-http",
      "example.com",
      "example.org",
    ])
    .unwrap();
    assert_eq!(opts.names, vec!["example.com", "example.org"]);
    assert_eq!(opts.resolver.as_deref(), Some("https://dns.google/dns-query"));
    assert_eq!(opts.record_type.as_deref(), Some("mx"));
    assert_eq!(opts.record_class.as_deref(), Some("ch"));
    assert!(opts.post && opts.legacy_content_type && opts.no_recurse);
    assert_eq!(opts.bootstrap_resolver.as_deref(), Some("8.8.8.8"));
    assert!(!opts.no_bootstrap);
    assert!(opts.short && opts.dump_http);
    assert_eq!(opts.config_file_path, None);
  }

  #[test]
  fn defaults_are_off() {
    let opts = try_parse(&["example.com"]).unwrap();
    assert_eq!(
      opts,
      Opts {
        names: vec!["example.com".to_string()],
        ..Default::default()
      }
    );
  }

  #[test]
  fn invalid_command_lines() {
    // no names
    assert!(try_parse(&["-r", "https://dns.google/dns-query"]).is_err());
    // plain http resolver
    assert!(try_parse(&["-r", "http://dns.google/dns-query", "example.com"]).is_err());
    // bootstrap resolver must be an ip address
    assert!(try_parse(&["--bootstrap-resolver", "dns.google", "example.com"]).is_err());
    // bootstrap resolver and no bootstrap are exclusive
    assert!(try_parse(&["--bootstrap-resolver", "1.1.1.1", "--no-bootstrap", "example.com"]).is_err());
  }
}
