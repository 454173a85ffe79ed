// src/infrastructure/publishers/oauth1.rs
//! OAuth 1.0a request signing (HMAC-SHA1) for user-context Twitter calls.
use super::error::PublishError;
use base64::{Engine, engine::general_purpose::STANDARD};
use hmac::{Hmac, Mac};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

/// Everything but the RFC 3986 unreserved characters is escaped.
const RFC3986: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

#[derive(Debug, Clone, Copy)]
pub struct OAuth1Keys<'a> {
    pub consumer_key: &'a str,
    pub consumer_secret: &'a str,
    pub token: &'a str,
    pub token_secret: &'a str,
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, RFC3986).to_string()
}

/// `Authorization` header for one request, with a fresh nonce and the
/// current time. `params` are form or query parameters that take part in
/// the signature; JSON and multipart bodies never do.
pub fn authorization_header(
    keys: OAuth1Keys<'_>,
    method: &str,
    url: &str,
    params: &[(&str, &str)],
) -> Result<String, PublishError> {
    let nonce = uuid::Uuid::new_v4().simple().to_string();
    let timestamp = chrono::Utc::now().timestamp().to_string();
    signed_header(keys, method, url, params, &nonce, &timestamp)
}

pub fn signed_header(
    keys: OAuth1Keys<'_>,
    method: &str,
    url: &str,
    params: &[(&str, &str)],
    nonce: &str,
    timestamp: &str,
) -> Result<String, PublishError> {
    let mut oauth_params = vec![
        ("oauth_consumer_key", keys.consumer_key.to_string()),
        ("oauth_nonce", nonce.to_string()),
        ("oauth_signature_method", "HMAC-SHA1".to_string()),
        ("oauth_timestamp", timestamp.to_string()),
        ("oauth_token", keys.token.to_string()),
        ("oauth_version", "1.0".to_string()),
    ];

    let mut signed: Vec<(String, String)> = oauth_params
        .iter()
        .map(|(k, v)| ((*k).to_string(), v.clone()))
        .chain(params.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())))
        .collect();
    let base_url = match url.split_once('?') {
        Some((base, query)) => {
            let query: Vec<(String, String)> = serde_urlencoded::from_str(query).map_err(|err| {
                PublishError::unexpected(format!("invalid query string in {url}: {err}"))
            })?;
            signed.extend(query);
            base
        }
        None => url,
    };

    let signature = signature(keys, method, base_url, &signed)?;
    oauth_params.push(("oauth_signature", signature));
    oauth_params.sort_by(|a, b| a.0.cmp(b.0));

    let fields: Vec<String> = oauth_params
        .iter()
        .map(|(k, v)| format!("{}=\"{}\"", encode(k), encode(v)))
        .collect();
    Ok(format!("OAuth {}", fields.join(", ")))
}

/// Base64 HMAC-SHA1 of the signature base string.
pub fn signature(
    keys: OAuth1Keys<'_>,
    method: &str,
    base_url: &str,
    params: &[(String, String)],
) -> Result<String, PublishError> {
    let mut encoded: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (encode(k), encode(v)))
        .collect();
    encoded.sort();
    let parameter_string = encoded
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    let base = format!(
        "{}&{}&{}",
        method.to_ascii_uppercase(),
        encode(base_url),
        encode(&parameter_string)
    );
    let key = format!("{}&{}", encode(keys.consumer_secret), encode(keys.token_secret));

    let mut mac = HmacSha1::new_from_slice(key.as_bytes())
        .map_err(|err| PublishError::unexpected(format!("cannot sign request: {err}")))?;
    mac.update(base.as_bytes());
    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}
