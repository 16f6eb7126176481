//! API description: the catalogue of operations the transport can dispatch.
//!
//! The description ships with the crate (`api/analytics_api.json`) and is
//! parsed once when a client is built. Operations are addressed by resource
//! tag and operation id, e.g. `metrics` / `getMetrics`.

use serde::Deserialize;

static EMBEDDED: &str = include_str!("../api/analytics_api.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Path,
    Query,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "in")]
    pub location: ParameterLocation,
    #[serde(default)]
    pub required: bool,
}

/// One remote operation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub tag: String,
    pub operation_id: String,
    pub method: HttpMethod,
    /// Path relative to the server URL, with `{name}` placeholders.
    pub path: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

impl Operation {
    pub fn path_parameters(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters
            .iter()
            .filter(|p| p.location == ParameterLocation::Path)
    }

    pub fn query_parameters(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters
            .iter()
            .filter(|p| p.location == ParameterLocation::Query)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiDescription {
    pub title: String,
    pub version: String,
    #[serde(default)]
    pub servers: Vec<String>,
    pub operations: Vec<Operation>,
}

impl ApiDescription {
    /// Parse the description bundled with the crate.
    pub fn embedded() -> Result<Self, serde_json::Error> {
        Self::from_json(EMBEDDED)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn operation(&self, tag: &str, operation_id: &str) -> Option<&Operation> {
        self.operations
            .iter()
            .find(|op| op.tag == tag && op.operation_id == operation_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_description_parses() {
        let d = ApiDescription::embedded().unwrap();
        assert_eq!(d.servers, vec![crate::request::DEFAULT_SERVER.to_string()]);
        assert_eq!(d.operations.len(), 16);
    }

    #[test]
    fn finds_operation_by_tag_and_id() {
        let d = ApiDescription::embedded().unwrap();
        let op = d.operation("dimensions", "dimensions_getDimension").unwrap();
        assert_eq!(op.method, HttpMethod::Get);
        assert_eq!(op.path, "dimensions/{dimensionId}");
        let path: Vec<_> = op.path_parameters().map(|p| p.name.as_str()).collect();
        assert_eq!(path, vec!["dimensionId"]);
        assert!(op.query_parameters().any(|p| p.name == "rsid" && p.required));

        assert!(d.operation("dimensions", "nope").is_none());
        assert!(d.operation("metrics", "dimensions_getDimension").is_none());
    }

    #[test]
    fn post_operations() {
        let d = ApiDescription::embedded().unwrap();
        assert_eq!(d.operation("reports", "runReport").unwrap().method, HttpMethod::Post);
        assert_eq!(
            d.operation("segments", "segments_validateSegment")
                .unwrap()
                .method,
            HttpMethod::Post
        );
    }

    #[test]
    fn rejects_malformed_description() {
        assert!(ApiDescription::from_json("{\"operations\": 3}").is_err());
    }
}
