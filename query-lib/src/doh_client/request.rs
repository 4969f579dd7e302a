use super::{DoHContentType, DoHMethod, ProtocolError};
use crate::{
  constants::{QUERY_PARAM_CT, QUERY_PARAM_DNS, SCHEME_HTTPS},
  dns_message::{self, Question},
  error::*,
  log::*,
};
use data_encoding::BASE64URL_NOPAD;
use reqwest::{
  header::{self, HeaderValue},
  Body, Method, Request,
};
use url::Url;

/// Build the http request carrying the given question in one of the two RFC 8484 shapes.
/// Nothing but `Accept` and, for POST, `Content-Type` is set here.
pub fn build_request(resolver_url: &Url, question: &Question, method: DoHMethod, content_type: DoHContentType) -> Result<Request> {
  let packed = dns_message::pack(question)?;

  if resolver_url.scheme() != SCHEME_HTTPS {
    return Err(ProtocolError::SchemeNotHttps(resolver_url.to_string()).into());
  }
  let ct = HeaderValue::from_static(content_type.as_str());

  let request = match method {
    DoHMethod::Get => {
      let query_b64u = BASE64URL_NOPAD.encode(&packed);
      let mut target_url = resolver_url.clone();
      let kept_pairs = resolver_url
        .query_pairs()
        .filter(|(k, _)| k != QUERY_PARAM_DNS && k != QUERY_PARAM_CT)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect::<Vec<_>>();
      {
        let mut pairs = target_url.query_pairs_mut();
        pairs.clear().extend_pairs(kept_pairs);
        if content_type == DoHContentType::DnsUdpWireFormat {
          pairs.append_pair(QUERY_PARAM_CT, "");
        }
        pairs.append_pair(QUERY_PARAM_DNS, &query_b64u);
      }

      let mut request = Request::new(Method::GET, target_url);
      request.headers_mut().insert(header::ACCEPT, ct);
      request
    }
    DoHMethod::Post => {
      let mut request = Request::new(Method::POST, resolver_url.clone());
      request.headers_mut().insert(header::CONTENT_TYPE, ct.clone());
      request.headers_mut().insert(header::ACCEPT, ct);
      *request.body_mut() = Some(Body::from(packed));
      request
    }
  };
  debug!("[DoH] {} {}", request.method(), request.url());

  Ok(request)
}
