//! Generic executor for operations listed in the API description.

use crate::credentials::Credentials;
use crate::description::{ApiDescription, Operation};
use crate::error::TransportError;
use crate::headers::inject_default_headers;
use crate::request::{Params, RequestDescriptor};
use crate::response::ApiResponse;
use reqwest::Client as HttpClient;
use serde_json::Value;
use tracing::{debug, instrument, Span};
use url::Url;

/// Resolves an operation, performs one HTTP round-trip and returns the response.
///
/// There is no retry: any network failure or non-2xx status is returned as a
/// [`TransportError`].
#[derive(Debug)]
pub struct Transport {
    http: HttpClient,
    description: ApiDescription,
    credentials: Credentials,
}

impl Transport {
    pub fn new(http: HttpClient, description: ApiDescription, credentials: Credentials) -> Self {
        Self {
            http,
            description,
            credentials,
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn description(&self) -> &ApiDescription {
        &self.description
    }

    #[instrument(
        name = "analytics_request",
        skip(self, tag, operation_id, params, request),
        fields(
            operation = %format!("{}.{}", tag, operation_id),
            http.method = tracing::field::Empty,
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
        )
    )]
    pub async fn execute(
        &self,
        tag: &str,
        operation_id: &str,
        params: &Params,
        request: RequestDescriptor,
    ) -> Result<ApiResponse, TransportError> {
        let op = self
            .description
            .operation(tag, operation_id)
            .ok_or_else(|| TransportError::UnknownOperation {
                tag: tag.to_string(),
                operation_id: operation_id.to_string(),
            })?;
        let method = op.method.to_reqwest();
        Span::current().record("http.method", method.as_str());

        let url = build_url(op, params, &request)?;
        Span::current().record("http.url", url.as_str());

        let RequestDescriptor {
            body, mut headers, ..
        } = request;
        inject_default_headers(&mut headers, &self.credentials)?;

        let mut req = self.http.request(method, url).headers(headers);
        if let Some(body) = body {
            req = req.body(serde_json::to_vec(&body).map_err(TransportError::Encode)?);
        }

        let res = req.send().await?;
        let status = res.status();
        Span::current().record("http.status_code", status.as_u16());
        let text = res.text().await?;

        if !status.is_success() {
            let otel_status = if status.is_server_error() {
                "ERROR"
            } else {
                "UNSET"
            };
            Span::current().record("otel.status_code", otel_status);
            let data: Option<Value> = serde_json::from_str(&text).ok();
            let message = data
                .as_ref()
                .and_then(|d| d.get("errorDescription").or_else(|| d.get("message")))
                .and_then(|m| m.as_str())
                .or_else(|| status.canonical_reason())
                .unwrap_or("API request failed")
                .to_string();
            return Err(TransportError::status(status.as_u16(), message, data));
        }

        Span::current().record("otel.status_code", "OK");
        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).map_err(TransportError::Decode)?
        };
        debug!(http.status_code = status.as_u16(), "Received API response");
        Ok(ApiResponse {
            status: status.as_u16(),
            body,
        })
    }
}

/// Server URL + operation path with path parameters filled in, plus the
/// query parameters the operation declares. Undeclared params are dropped.
fn build_url(
    op: &Operation,
    params: &Params,
    request: &RequestDescriptor,
) -> Result<Url, TransportError> {
    let mut path = op.path.clone();
    for p in op.path_parameters() {
        let value = params
            .get(&p.name)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| TransportError::MissingPathParameter(p.name.clone()))?;
        // `.` and `..` are dot segments even when percent-encoded; the URL
        // parser would resolve them onto a different resource.
        if value == "." || value == ".." {
            return Err(TransportError::InvalidPathParameter {
                name: p.name.clone(),
                value: value.to_string(),
            });
        }
        path = path.replace(&format!("{{{}}}", p.name), &urlencoding::encode(value));
    }

    let mut url = request.server_url()?.join(&path)?;
    let query: Vec<(&str, &str)> = op
        .query_parameters()
        .filter_map(|p| params.get(&p.name).map(|v| (p.name.as_str(), v)))
        .collect();
    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(query);
    }
    Ok(url)
}
