use super::{
  error::DecodingError, name::render_name, Header, Message, Question, RecordBody, RecordClass, RecordHeader, RecordType,
  ResourceRecord, ResponseCode, Soa, HEADER_LEN,
};
use hickory_proto::{
  op::{self, MessageType},
  rr::{RData, Record},
  serialize::binary::BinEncodable,
};

/// Parse a DNS message in wire format.
/// Bytes following the declared sections are ignored.
pub fn unpack(packet_buf: &[u8]) -> Result<Message, DecodingError> {
  if packet_buf.len() < HEADER_LEN {
    return Err(DecodingError::ShortHeader(packet_buf.len()));
  }
  let msg = op::Message::from_vec(packet_buf)?;

  let header = Header {
    id: msg.id(),
    response: msg.message_type() == MessageType::Response,
    opcode: u8::from(msg.op_code()),
    authoritative: msg.authoritative(),
    truncated: msg.truncated(),
    recursion_desired: msg.recursion_desired(),
    recursion_available: msg.recursion_available(),
    authentic_data: msg.authentic_data(),
    checking_disabled: msg.checking_disabled(),
    // includes the upper bits carried by OPT
    rcode: ResponseCode(u16::from(msg.response_code())),
  };

  let questions = msg
    .queries()
    .iter()
    .map(|query| Question {
      name: render_name(query.name()),
      record_type: RecordType(u16::from(query.query_type())),
      record_class: RecordClass(u16::from(query.query_class())),
      recursion_desired: header.recursion_desired,
    })
    .collect();
  let answers = to_resource_records(msg.answers())?;
  let authorities = to_resource_records(msg.name_servers())?;
  let mut additionals = to_resource_records(msg.additionals())?;
  // the parser lifts OPT and SIG(0) out of the additional section
  if let Some(edns) = msg.extensions() {
    additionals.push(to_resource_record(&Record::from(edns))?);
  }
  additionals.extend(to_resource_records(msg.signature())?);

  Ok(Message {
    header,
    questions,
    answers,
    authorities,
    additionals,
  })
}

fn to_resource_records(records: &[Record]) -> Result<Vec<ResourceRecord>, DecodingError> {
  records.iter().map(to_resource_record).collect()
}

fn to_resource_record(record: &Record) -> Result<ResourceRecord, DecodingError> {
  let record_type = RecordType(u16::from(record.record_type()));
  let body = match record.data() {
    Some(rdata) => to_record_body(rdata)?,
    None => match record_type {
      RecordType::TXT => RecordBody::TXT(vec![]),
      RecordType::A
      | RecordType::AAAA
      | RecordType::NS
      | RecordType::CNAME
      | RecordType::SOA
      | RecordType::PTR
      | RecordType::MX => return Err(DecodingError::EmptyRdata(record_type)),
      _ => RecordBody::Unknown(vec![]),
    },
  };

  Ok(ResourceRecord {
    header: RecordHeader {
      name: render_name(record.name()),
      record_type,
      record_class: RecordClass(u16::from(record.dns_class())),
      ttl: record.ttl(),
    },
    body,
  })
}

/// Project hickory's rdata onto the closed set of bodies, with raw rdata for everything else
fn to_record_body(rdata: &RData) -> Result<RecordBody, DecodingError> {
  let body = match rdata {
    RData::A(a) => RecordBody::A(a.0),
    RData::AAAA(aaaa) => RecordBody::AAAA(aaaa.0),
    RData::NS(ns) => RecordBody::NS(render_name(&ns.0)),
    RData::CNAME(cname) => RecordBody::CNAME(render_name(&cname.0)),
    RData::PTR(ptr) => RecordBody::PTR(render_name(&ptr.0)),
    // refresh, retry and expire are stored signed, the wire value is unsigned
    RData::SOA(soa) => RecordBody::SOA(Soa {
      mname: render_name(soa.mname()),
      rname: render_name(soa.rname()),
      serial: soa.serial(),
      refresh: soa.refresh() as u32,
      retry: soa.retry() as u32,
      expire: soa.expire() as u32,
      minimum: soa.minimum(),
    }),
    RData::MX(mx) => RecordBody::MX {
      preference: mx.preference(),
      exchange: render_name(mx.exchange()),
    },
    RData::TXT(txt) => RecordBody::TXT(txt.txt_data().iter().map(|segment| segment.to_vec()).collect()),
    RData::Unknown { rdata, .. } => RecordBody::Unknown(rdata.anything().to_vec()),
    other => RecordBody::Unknown(BinEncodable::to_bytes(other).map_err(|e| DecodingError::Malformed(e.to_string()))?),
  };
  Ok(body)
}
