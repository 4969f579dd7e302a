// Presentation format of domain names (RFC 1035 5.1)
//
// Label bytes other than printable ASCII are written as `\DDD` (decimal), and `.`/`\` inside a
// label as `\.`/`\\`. Parsing accepts exactly these escapes, so rendering a parsed name gives back
// the same string.
use super::{error::EncodingError, MAX_LABEL_LEN, MAX_NAME_LEN};
use hickory_proto::rr::Name;

/// Split a fully qualified name into raw label bytes, with length limits checked
pub(super) fn parse_name(name: &str) -> Result<Vec<Vec<u8>>, EncodingError> {
  if name == "." {
    return Ok(vec![]);
  }

  let mut labels = vec![];
  let mut label = vec![];
  let mut chars = name.chars();
  while let Some(ch) = chars.next() {
    match ch {
      '.' => {
        if label.is_empty() {
          return Err(EncodingError::EmptyLabel(name.to_string()));
        }
        if label.len() > MAX_LABEL_LEN {
          return Err(EncodingError::LabelTooLong {
            label: render_label(&label),
            len: label.len(),
          });
        }
        labels.push(std::mem::take(&mut label));
      }
      '\\' => label.push(parse_escape(&mut chars).ok_or_else(|| EncodingError::InvalidEscape(name.to_string()))?),
      '!'..='~' => label.push(ch as u8),
      _ => return Err(EncodingError::InvalidCharacter { name: name.to_string(), ch }),
    }
  }
  // the last label must have been closed by the root
  if !label.is_empty() || labels.is_empty() {
    return Err(EncodingError::NotFullyQualified(name.to_string()));
  }

  let wire_len = labels.iter().map(|l| l.len() + 1).sum::<usize>() + 1;
  if wire_len > MAX_NAME_LEN {
    return Err(EncodingError::NameTooLong {
      name: name.to_string(),
      len: wire_len,
    });
  }
  Ok(labels)
}

/// `\.`, `\\` or `\DDD` with the leading backslash already consumed
fn parse_escape(chars: &mut std::str::Chars<'_>) -> Option<u8> {
  match chars.next()? {
    c @ ('.' | '\\') => Some(c as u8),
    d0 @ '0'..='9' => {
      let d1 = chars.next()?.to_digit(10)?;
      let d2 = chars.next()?.to_digit(10)?;
      let value = d0.to_digit(10)? * 100 + d1 * 10 + d2;
      u8::try_from(value).ok()
    }
    _ => None,
  }
}

/// Render the labels of a name, with a trailing dot
pub(super) fn render_name(name: &Name) -> String {
  render_labels(name.iter())
}

fn render_labels<'a>(labels: impl IntoIterator<Item = &'a [u8]>) -> String {
  let s = labels.into_iter().fold(String::new(), |mut s, label| {
    s.push_str(&render_label(label));
    s.push('.');
    s
  });
  match s.is_empty() {
    true => ".".to_string(),
    false => s,
  }
}

fn render_label(label: &[u8]) -> String {
  let mut s = String::with_capacity(label.len());
  for &b in label {
    match b {
      b'.' | b'\\' => {
        s.push('\\');
        s.push(b as char);
      }
      0x21..=0x7e => s.push(b as char),
      _ => s.push_str(&format!("\\{b:03}")),
    }
  }
  s
}

/// Bring a user supplied name into the form `parse_name`/`render_name` round-trip on.
/// A missing trailing dot is appended and internationalized labels are converted to punycode.
/// Names that cannot be parsed are only given the trailing dot.
pub(super) fn canonicalize(name: &str) -> String {
  // hickory writes its own escapes in octal, such results are not taken over
  let mut name = match name.is_ascii() {
    true => name.to_string(),
    false => Name::from_utf8(name)
      .map(|n| n.to_ascii())
      .ok()
      .filter(|ascii| !ascii.contains('\\'))
      .unwrap_or_else(|| name.to_string()),
  };
  let labels = match parse_name(&name) {
    Err(EncodingError::NotFullyQualified(_)) => {
      name.push('.');
      parse_name(&name)
    }
    res => res,
  };
  match labels {
    Ok(labels) => render_labels(labels.iter().map(Vec::as_slice)),
    Err(_) => {
      if !name.ends_with('.') {
        name.push('.');
      }
      name
    }
  }
}
