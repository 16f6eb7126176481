//! Per-call request construction: parameters and the request descriptor.

use reqwest::header::HeaderMap;
use serde_json::Value;
use url::Url;

/// Default server URL template; `{companyId}` is filled in per request.
pub const DEFAULT_SERVER: &str = "https://analytics.adobe.io/api/{companyId}/";

const COMPANY_ID_VAR: &str = "{companyId}";

/// Named request parameters in insertion order.
///
/// Values are kept as strings; the API description decides whether each one
/// goes into the path or the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(&'static str, String)>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a parameter.
    pub fn with(mut self, name: &'static str, value: impl ToString) -> Self {
        self.insert(name, value.to_string());
        self
    }

    /// Add a parameter only when a value is present.
    pub fn with_opt<T: ToString>(self, name: &'static str, value: Option<T>) -> Self {
        match value {
            Some(v) => self.with(name, v),
            None => self,
        }
    }

    pub fn insert(&mut self, name: &'static str, value: String) {
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.0.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(n, v)| (*n, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Values substituted into the server URL template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerVariables {
    pub company_id: String,
}

/// Everything a single call sends besides its parameters.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub body: Option<Value>,
    pub server: String,
    pub server_variables: ServerVariables,
    /// Caller-set headers; defaults are injected only where these are absent.
    pub headers: HeaderMap,
}

impl RequestDescriptor {
    pub fn new(server: impl Into<String>, company_id: impl Into<String>) -> Self {
        Self {
            body: None,
            server: server.into(),
            server_variables: ServerVariables {
                company_id: company_id.into(),
            },
            headers: HeaderMap::new(),
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Resolve the server template into a base URL ending in `/`.
    pub fn server_url(&self) -> Result<Url, url::ParseError> {
        let company_id = urlencoding::encode(&self.server_variables.company_id);
        let mut resolved = self.server.replace(COMPANY_ID_VAR, &company_id);
        if !resolved.ends_with('/') {
            resolved.push('/');
        }
        Url::parse(&resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_keep_order_and_replace() {
        let p = Params::new()
            .with("limit", 10)
            .with("page", 0)
            .with_opt("rsids", None::<String>)
            .with_opt("name", Some("visits"))
            .with("limit", 5);
        let pairs: Vec<_> = p.iter().collect();
        assert_eq!(pairs, vec![("limit", "5"), ("page", "0"), ("name", "visits")]);
        assert_eq!(p.get("rsids"), None);
        assert_eq!(p.len(), 3);
    }

    #[test]
    fn server_url_substitutes_company_id() {
        let req = RequestDescriptor::new(DEFAULT_SERVER, "acme");
        assert_eq!(
            req.server_url().unwrap().as_str(),
            "https://analytics.adobe.io/api/acme/"
        );
    }

    #[test]
    fn server_url_encodes_company_id_and_appends_slash() {
        let req = RequestDescriptor::new("http://localhost:1234/api/{companyId}", "a b/c");
        assert_eq!(
            req.server_url().unwrap().as_str(),
            "http://localhost:1234/api/a%20b%2Fc/"
        );
    }
}
