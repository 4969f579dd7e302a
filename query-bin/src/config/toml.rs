use crate::error::*;
use serde::Deserialize;
use std::fs;

#[derive(Deserialize, Debug, Default, PartialEq, Eq, Clone)]
pub struct ConfigToml {
  pub resolver: Option<String>,
  pub record_type: Option<String>,
  pub record_class: Option<String>,
  pub use_post: Option<bool>,
  pub legacy_content_type: Option<bool>,
  pub recursion_desired: Option<bool>,
  pub user_agent: Option<String>,
  pub timeout_sec: Option<u64>,
  pub bootstrap_resolver: Option<String>,
  pub no_bootstrap: Option<bool>,
}

impl ConfigToml {
  pub fn new(config_file: &str) -> Result<Self> {
    let config_str = fs::read_to_string(config_file)?;

    toml::from_str(&config_str).map_err(|e| anyhow!(e))
  }
}
