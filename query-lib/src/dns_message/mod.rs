// Handle packet buffer of DNS message (encode/decode/format)
// The wire format is handled by hickory-proto, names and bodies are projected onto our own types.
mod error;
mod format;
mod name;
mod pack;
mod types;
mod unpack;

pub use error::{DecodingError, EncodingError};
pub use format::{format_body, format_header};
pub use pack::pack;
pub use types::{Header, Message, Question, RecordBody, RecordClass, RecordHeader, RecordType, ResourceRecord, ResponseCode, Soa};
pub use unpack::unpack;

/// Size of the fixed DNS message header
const HEADER_LEN: usize = 12;
/// RFC 1035: maximum length of a single label
const MAX_LABEL_LEN: usize = 63;
/// RFC 1035: maximum length of a name in wire format, including the root label
const MAX_NAME_LEN: usize = 255;
