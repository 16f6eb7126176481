//! Default headers required by the Analytics API.

use crate::credentials::Credentials;
use crate::error::TransportError;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

pub const API_KEY_HEADER: &str = "x-api-key";
pub const COMPANY_ID_HEADER: &str = "x-proxy-global-company-id";

/// Set the API key, company id, bearer token and JSON content type.
///
/// Each header is only set when absent, so caller-supplied values win and
/// repeated calls change nothing.
pub fn inject_default_headers(
    headers: &mut HeaderMap,
    credentials: &Credentials,
) -> Result<(), TransportError> {
    set_if_absent(
        headers,
        HeaderName::from_static(API_KEY_HEADER),
        credentials.api_key(),
        API_KEY_HEADER,
    )?;
    set_if_absent(
        headers,
        HeaderName::from_static(COMPANY_ID_HEADER),
        credentials.company_id(),
        COMPANY_ID_HEADER,
    )?;
    set_if_absent(
        headers,
        AUTHORIZATION,
        &format!("Bearer {}", credentials.token()),
        "authorization",
    )?;
    set_if_absent(headers, CONTENT_TYPE, "application/json", "content-type")
}

fn set_if_absent(
    headers: &mut HeaderMap,
    name: HeaderName,
    value: &str,
    label: &'static str,
) -> Result<(), TransportError> {
    if headers.contains_key(&name) {
        return Ok(());
    }
    let mut value = HeaderValue::from_str(value).map_err(|_| TransportError::InvalidHeader(label))?;
    if name == AUTHORIZATION || name.as_str() == API_KEY_HEADER {
        value.set_sensitive(true);
    }
    headers.insert(name, value);
    Ok(())
}
