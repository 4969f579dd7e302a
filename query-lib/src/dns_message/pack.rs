use super::{error::EncodingError, name::parse_name, Question};
use hickory_proto::{
  op::{Message, MessageType, OpCode, Query},
  rr::{DNSClass, Name, RecordType},
};

/// Serialize a query message carrying the single given question.
/// The transaction id is always 0 so that responses stay cache friendly (RFC 8484 4.1).
pub fn pack(question: &Question) -> Result<Vec<u8>, EncodingError> {
  let qname = Name::from_labels(parse_name(&question.name)?)?;
  let mut query = Query::query(qname, RecordType::from(question.record_type.0));
  query.set_query_class(DNSClass::from(question.record_class.0));

  let mut msg = Message::new();
  msg
    .add_query(query)
    .set_id(0)
    .set_message_type(MessageType::Query)
    .set_op_code(OpCode::Query)
    .set_recursion_desired(question.recursion_desired);
  Ok(msg.to_vec()?)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::dns_message::{RecordClass, RecordType, HEADER_LEN};
  use hickory_proto::rr;

  #[test]
  fn pack_example_query() {
    let q = Question::new("example.com", RecordType::A, RecordClass::IN, true);
    let packed = pack(&q).unwrap();
    let expected = [
      0x00, 0x00, 0x01, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // header
      0x07, b'e', b'x', b'a', b'm', b'p', b'l', b'e', 0x03, b'c', b'o', b'm', 0x00, // qname
      0x00, 0x01, 0x00, 0x01, // qtype, qclass
    ];
    assert_eq!(packed, expected);
  }

  #[test]
  fn pack_without_recursion() {
    let q = Question::new("example.com.", RecordType::MX, RecordClass::CH, false);
    let packed = pack(&q).unwrap();
    assert_eq!(&packed[2..4], &[0x00, 0x00]);
    assert_eq!(&packed[packed.len() - 4..], &[0x00, 0x0f, 0x00, 0x03]);
  }

  #[test]
  fn pack_root() {
    let q = Question::new(".", RecordType::NS, RecordClass::IN, true);
    let packed = pack(&q).unwrap();
    assert_eq!(packed.len(), HEADER_LEN + 1 + 4);
    assert_eq!(packed[HEADER_LEN], 0);
  }

  #[test]
  fn unrepresentable_names_are_rejected() {
    let q = Question::new("www..example.com", RecordType::A, RecordClass::IN, true);
    assert!(matches!(pack(&q), Err(EncodingError::EmptyLabel(_))));

    let q = Question::new(".example.com", RecordType::A, RecordClass::IN, true);
    assert!(matches!(pack(&q), Err(EncodingError::EmptyLabel(_))));

    let long_label = "a".repeat(64);
    let q = Question::new(&format!("{long_label}.com"), RecordType::A, RecordClass::IN, true);
    assert!(matches!(pack(&q), Err(EncodingError::LabelTooLong { len: 64, .. })));

    let ok_label = "a".repeat(63);
    let q = Question::new(&format!("{ok_label}.com"), RecordType::A, RecordClass::IN, true);
    assert!(pack(&q).is_ok());

    // 4 * (63 + 1) + 1 = 257
    let long_name = vec![ok_label.as_str(); 4].join(".");
    let q = Question::new(&long_name, RecordType::A, RecordClass::IN, true);
    assert!(matches!(pack(&q), Err(EncodingError::NameTooLong { len: 257, .. })));

    let q = Question {
      name: "example.com".to_string(),
      record_type: RecordType::A,
      record_class: RecordClass::IN,
      recursion_desired: true,
    };
    assert!(matches!(pack(&q), Err(EncodingError::NotFullyQualified(_))));
  }

  #[test]
  fn packed_query_is_parsable_by_hickory() {
    let q = Question::new("www.example.org", RecordType::AAAA, RecordClass::IN, true);
    let packed = pack(&q).unwrap();

    let msg = hickory_proto::op::Message::from_vec(&packed).unwrap();
    assert_eq!(msg.id(), 0);
    assert_eq!(msg.message_type(), MessageType::Query);
    assert!(msg.recursion_desired());
    assert_eq!(msg.queries().len(), 1);
    let query = &msg.queries()[0];
    assert_eq!(query.name().to_string(), "www.example.org.");
    assert_eq!(query.query_type(), rr::RecordType::AAAA);
    assert_eq!(query.query_class(), rr::DNSClass::IN);
  }

  #[test]
  fn escaped_labels_are_packed_as_raw_bytes() {
    let q = Question::new("a\\.b\\\\.x\\032y", RecordType::TXT, RecordClass::IN, true);
    assert_eq!(q.name, "a\\.b\\\\.x\\032y.");
    let packed = pack(&q).unwrap();
    assert_eq!(
      &packed[HEADER_LEN..packed.len() - 4],
      &[0x04, b'a', b'.', b'b', b'\\', 0x03, b'x', b' ', b'y', 0x00]
    );

    let q = Question::new("\\255\\000.example.", RecordType::A, RecordClass::IN, true);
    let packed = pack(&q).unwrap();
    assert_eq!(&packed[HEADER_LEN..HEADER_LEN + 3], &[0x02, 0xff, 0x00]);
  }

  #[test]
  fn raw_unprintable_characters_are_rejected() {
    let q = Question::new("x y.example", RecordType::A, RecordClass::IN, true);
    assert!(matches!(pack(&q), Err(EncodingError::InvalidCharacter { ch: ' ', .. })));

    let q = Question::new("tab\\tname.example", RecordType::A, RecordClass::IN, true);
    assert!(matches!(pack(&q), Err(EncodingError::InvalidEscape(_))));
  }

  #[test]
  fn international_names_are_packed_as_punycode() {
    let q = Question::new("bücher.example", RecordType::A, RecordClass::IN, true);
    assert_eq!(q.name, "xn--bcher-kva.example.");
    let msg = hickory_proto::op::Message::from_vec(&pack(&q).unwrap()).unwrap();
    assert_eq!(msg.queries()[0].name().to_ascii(), "xn--bcher-kva.example.");
  }
}
