use super::RecordType;
use hickory_proto::error::{ProtoError, ProtoErrorKind};
use thiserror::Error;

/// Describes why a question cannot be represented in wire format
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodingError {
  #[error("Name is not fully qualified: {0:?}")]
  NotFullyQualified(String),
  #[error("Empty label in name {0:?}")]
  EmptyLabel(String),
  #[error("Label {label:?} is {len} octets, exceeding 63")]
  LabelTooLong { label: String, len: usize },
  #[error("Name {name:?} is {len} octets in wire format, exceeding 255")]
  NameTooLong { name: String, len: usize },
  #[error("Character {ch:?} in name {name:?} must be written as \\DDD")]
  InvalidCharacter { name: String, ch: char },
  #[error("Invalid escape sequence in name {0:?}")]
  InvalidEscape(String),
  #[error("Failed to encode DNS message: {0}")]
  Unencodable(String),
}

impl From<ProtoError> for EncodingError {
  fn from(e: ProtoError) -> Self {
    Self::Unencodable(e.to_string())
  }
}

/// Describes things that can go wrong while parsing a DNS message
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodingError {
  #[error("Message of {0} bytes is shorter than the DNS header")]
  ShortHeader(usize),
  #[error("Compression pointer at offset {offset} to {target} does not point backwards")]
  BadPointer { offset: usize, target: u16 },
  #[error("Reserved label type {octet:#04x}")]
  ReservedLabelType { octet: u8 },
  #[error("Name exceeds 255 octets")]
  NameTooLong,
  #[error("Record declares {declared} bytes of rdata, but {consumed} were decoded")]
  RdataLength { declared: usize, consumed: usize },
  #[error("{0} record without rdata")]
  EmptyRdata(RecordType),
  /// Truncated input, inconsistent section counts and anything else the parser rejects
  #[error("Malformed DNS message: {0}")]
  Malformed(String),
}

impl From<ProtoError> for DecodingError {
  fn from(e: ProtoError) -> Self {
    match e.kind() {
      ProtoErrorKind::PointerNotPriorToLabel { idx, ptr } => Self::BadPointer {
        offset: *idx,
        target: *ptr,
      },
      ProtoErrorKind::UnrecognizedLabelCode(octet) => Self::ReservedLabelType { octet: *octet },
      ProtoErrorKind::DomainNameTooLong(_) => Self::NameTooLong,
      ProtoErrorKind::IncorrectRDataLengthRead { read, len } => Self::RdataLength {
        declared: *len,
        consumed: *read,
      },
      _ => Self::Malformed(e.to_string()),
    }
  }
}
