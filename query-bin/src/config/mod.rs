mod parse;
mod query_config;
mod toml;
mod utils_verifier;

pub use {
  parse::parse_opts,
  query_config::QueryConfig,
};
