// Human readable dump of the http exchange, written to stderr by --dump-http
use doh_query_lib::{DoHResponse, Request};

const BYTES_PER_LINE: usize = 16;

/// Request line, headers and body of a request built for the resolver.
/// Headers added by the http client itself, like User-Agent, are not part of it.
pub fn dump_request(request: &Request) -> String {
  let mut out = format!("> {} {}\n", request.method(), request.url());
  for (name, value) in request.headers() {
    out.push_str(&format!("> {}: {}\n", name, String::from_utf8_lossy(value.as_bytes())));
  }
  if let Some(body) = request.body().and_then(|b| b.as_bytes()) {
    out.push_str(&hex_dump(body));
  }
  out
}

/// Status line, headers and body of a response
pub fn dump_response(response: &DoHResponse) -> String {
  let mut out = format!("< {}\n", response.status());
  for (name, value) in response.headers() {
    out.push_str(&format!("< {}: {}\n", name, String::from_utf8_lossy(value.as_bytes())));
  }
  if let Some(body) = response.body() {
    out.push_str(&hex_dump(body));
  }
  out
}

/// `offset  xx xx ..  xx xx ..  |ascii|` lines of 16 bytes
pub fn hex_dump(buf: &[u8]) -> String {
  let mut out = String::new();
  for (line, chunk) in buf.chunks(BYTES_PER_LINE).enumerate() {
    out.push_str(&format!("{:08x}  ", line * BYTES_PER_LINE));
    for i in 0..BYTES_PER_LINE {
      match chunk.get(i) {
        Some(b) => out.push_str(&format!("{:02x} ", b)),
        None => out.push_str("   "),
      }
      if i == 7 {
        out.push(' ');
      }
    }
    let ascii = chunk
      .iter()
      .map(|&b| if b.is_ascii_graphic() || b == b' ' { b as char } else { '.' })
      .collect::<String>();
    out.push_str(&format!(" |{}|\n", ascii));
  }
  out
}
