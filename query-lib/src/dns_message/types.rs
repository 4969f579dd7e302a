use super::name::canonicalize;
use crate::error::DohQueryError;
use std::{
  fmt,
  net::{Ipv4Addr, Ipv6Addr},
  str::FromStr,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Resource record type code
pub struct RecordType(pub u16);

impl RecordType {
  pub const A: Self = Self(1);
  pub const NS: Self = Self(2);
  pub const CNAME: Self = Self(5);
  pub const SOA: Self = Self(6);
  pub const PTR: Self = Self(12);
  pub const MX: Self = Self(15);
  pub const TXT: Self = Self(16);
  pub const AAAA: Self = Self(28);
  pub const SRV: Self = Self(33);
  pub const OPT: Self = Self(41);
}

/// Symbolic names of record types accepted as query types
const RECORD_TYPES: &[(&str, RecordType)] = &[
  ("A", RecordType::A),
  ("NS", RecordType::NS),
  ("CNAME", RecordType::CNAME),
  ("SOA", RecordType::SOA),
  ("PTR", RecordType::PTR),
  ("MX", RecordType::MX),
  ("TXT", RecordType::TXT),
  ("AAAA", RecordType::AAAA),
  ("SRV", RecordType::SRV),
  ("OPT", RecordType::OPT),
];

impl FromStr for RecordType {
  type Err = DohQueryError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    RECORD_TYPES
      .iter()
      .find(|(symbol, _)| symbol.eq_ignore_ascii_case(s))
      .map(|(_, record_type)| *record_type)
      .ok_or_else(|| DohQueryError::UnknownRecordType(s.to_string()))
  }
}

impl fmt::Display for RecordType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match RECORD_TYPES.iter().find(|(_, record_type)| record_type == self) {
      Some((symbol, _)) => write!(f, "{symbol}"),
      None => write!(f, "TYPE{}", self.0),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Resource record class code
pub struct RecordClass(pub u16);

impl RecordClass {
  pub const IN: Self = Self(1);
  pub const CS: Self = Self(2);
  pub const CH: Self = Self(3);
  pub const HS: Self = Self(4);
  pub const ANY: Self = Self(255);
}

/// Symbolic names of record classes accepted as query classes
const RECORD_CLASSES: &[(&str, RecordClass)] = &[
  ("IN", RecordClass::IN),
  ("CS", RecordClass::CS),
  ("CH", RecordClass::CH),
  ("HS", RecordClass::HS),
  ("ANY", RecordClass::ANY),
];

impl FromStr for RecordClass {
  type Err = DohQueryError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    RECORD_CLASSES
      .iter()
      .find(|(symbol, _)| symbol.eq_ignore_ascii_case(s))
      .map(|(_, record_class)| *record_class)
      .ok_or_else(|| DohQueryError::UnknownRecordClass(s.to_string()))
  }
}

impl fmt::Display for RecordClass {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match RECORD_CLASSES.iter().find(|(_, record_class)| record_class == self) {
      Some((symbol, _)) => write!(f, "{symbol}"),
      None => write!(f, "CLASS{}", self.0),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Response code, including the extended bits carried by OPT
pub struct ResponseCode(pub u16);

const RESPONSE_CODES: &[&str] = &["NOERROR", "FORMERR", "SERVFAIL", "NXDOMAIN", "NOTIMP", "REFUSED"];

impl ResponseCode {
  pub const NO_ERROR: Self = Self(0);
}

impl fmt::Display for ResponseCode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match RESPONSE_CODES.get(self.0 as usize) {
      Some(symbol) => write!(f, "{symbol}"),
      None => write!(f, "RCODE{}", self.0),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A single entry of the question section
pub struct Question {
  /// Fully qualified name, always ending with a dot
  pub name: String,
  pub record_type: RecordType,
  pub record_class: RecordClass,
  /// Recursion desired flag of the message carrying this question
  pub recursion_desired: bool,
}

impl Question {
  /// Build a question with the name in canonical presentation format.
  /// The trailing dot is appended if missing and internationalized names are converted to punycode.
  pub fn new(name: &str, record_type: RecordType, record_class: RecordClass, recursion_desired: bool) -> Self {
    Self {
      name: canonicalize(name),
      record_type,
      record_class,
      recursion_desired,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Message header without the section counts
pub struct Header {
  pub id: u16,
  pub response: bool,
  pub opcode: u8,
  pub authoritative: bool,
  pub truncated: bool,
  pub recursion_desired: bool,
  pub recursion_available: bool,
  pub authentic_data: bool,
  pub checking_disabled: bool,
  pub rcode: ResponseCode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Header part of a resource record
pub struct RecordHeader {
  pub name: String,
  pub record_type: RecordType,
  pub record_class: RecordClass,
  pub ttl: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// SOA rdata
pub struct Soa {
  pub mname: String,
  pub rname: String,
  pub serial: u32,
  pub refresh: u32,
  pub retry: u32,
  pub expire: u32,
  pub minimum: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Type specific payload of a resource record.
/// The variant always agrees with the type in the record header, anything
/// not listed here is kept as raw rdata in `Unknown`.
#[allow(clippy::upper_case_acronyms)]
pub enum RecordBody {
  A(Ipv4Addr),
  AAAA(Ipv6Addr),
  NS(String),
  CNAME(String),
  SOA(Soa),
  PTR(String),
  MX { preference: u16, exchange: String },
  /// Character strings as raw bytes
  TXT(Vec<Vec<u8>>),
  Unknown(Vec<u8>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Resource record of answer, authority or additional sections
pub struct ResourceRecord {
  pub header: RecordHeader,
  pub body: RecordBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Decoded DNS message
pub struct Message {
  pub header: Header,
  pub questions: Vec<Question>,
  pub answers: Vec<ResourceRecord>,
  pub authorities: Vec<ResourceRecord>,
  pub additionals: Vec<ResourceRecord>,
}
