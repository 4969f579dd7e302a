// Presentation of decoded records, close to dig's output with less whitespace
use super::{RecordBody, RecordHeader, ResourceRecord};
use std::fmt;

/// Render `name ttl type`
pub fn format_header(header: &RecordHeader) -> String {
  header.to_string()
}

/// Render the type specific part of a record, `(unknown)` for types without a decoder
pub fn format_body(body: &RecordBody) -> String {
  body.to_string()
}

impl fmt::Display for RecordHeader {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} {} {}", self.name, self.ttl, self.record_type)
  }
}

impl fmt::Display for RecordBody {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      RecordBody::A(addr) => write!(f, "{addr}"),
      RecordBody::AAAA(addr) => write!(f, "{addr}"),
      RecordBody::NS(name) | RecordBody::CNAME(name) | RecordBody::PTR(name) => write!(f, "{name}"),
      RecordBody::SOA(soa) => write!(
        f,
        "{} {} {} {} {} {} {}",
        soa.mname, soa.rname, soa.serial, soa.refresh, soa.retry, soa.expire, soa.minimum
      ),
      RecordBody::MX { preference, exchange } => write!(f, "{preference} {exchange}"),
      RecordBody::TXT(strings) => write_quoted(f, &strings.join(&b' ')),
      RecordBody::Unknown(_) => write!(f, "(unknown)"),
    }
  }
}

/// Quote and escape like a string literal, bytes that are not valid UTF-8 become `\xNN`
fn write_quoted(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
  f.write_str("\"")?;
  for chunk in bytes.utf8_chunks() {
    let escaped = format!("{:?}", chunk.valid());
    f.write_str(&escaped[1..escaped.len() - 1])?;
    for b in chunk.invalid() {
      write!(f, "\\x{b:02x}")?;
    }
  }
  f.write_str("\"")
}

impl fmt::Display for ResourceRecord {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} {}", self.header, self.body)
  }
}
