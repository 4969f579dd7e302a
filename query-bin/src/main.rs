#[global_allocator]
static ALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;

mod config;
mod dump;
mod error;
mod log;

use crate::{
  config::{parse_opts, QueryConfig},
  error::*,
  log::*,
};
use doh_query_lib::{format_body, format_header, DoHClient, Question, ResponseCode};
use std::io::Write;

fn main() {
  init_logger();

  let parsed_opts = parse_opts();
  let query_config = match QueryConfig::try_from(&parsed_opts) {
    Ok(v) => v,
    Err(e) => {
      error!("Invalid configuration: {e}");
      std::process::exit(1);
    }
  };

  let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
  runtime_builder.enable_all();
  runtime_builder.thread_name("doh-query");
  let runtime = match runtime_builder.build() {
    Ok(v) => v,
    Err(e) => {
      error!("Failed to build tokio runtime: {e}");
      std::process::exit(1);
    }
  };

  if !runtime.block_on(query_all(&query_config)) {
    std::process::exit(1);
  }
}

/// Look up every name in order, returns false if any of them failed
async fn query_all(query_config: &QueryConfig) -> bool {
  let doh_client = match DoHClient::new(&query_config.client_config).await {
    Ok(v) => v,
    Err(e) => {
      error!("Failed to build DoH client: {e}");
      return false;
    }
  };

  let mut all_succeeded = true;
  for name in &query_config.names {
    if let Err(e) = query_name(&doh_client, query_config, name).await {
      error!("{name}: {e}");
      all_succeeded = false;
    }
  }
  all_succeeded
}

async fn query_name(doh_client: &DoHClient, query_config: &QueryConfig, name: &str) -> Result<()> {
  let question = Question::new(
    name,
    query_config.record_type,
    query_config.record_class,
    query_config.recursion_desired,
  );

  let request = doh_client.build_request(&question)?;
  if query_config.dump_http {
    eprint!("{}", dump::dump_request(&request));
  }
  let response = doh_client.send(request).await?;
  if query_config.dump_http {
    eprint!("{}", dump::dump_response(&response));
  }
  let message = doh_client.decode(&response)?;

  if message.header.rcode != ResponseCode::NO_ERROR {
    warn!("{}: {}", question.name, message.header.rcode);
  }

  let mut stdout = std::io::stdout().lock();
  for answer in &message.answers {
    if query_config.short {
      writeln!(stdout, "{}", format_body(&answer.body))?;
    } else {
      writeln!(stdout, "{} {}", format_header(&answer.header), format_body(&answer.body))?;
    }
  }
  Ok(())
}
