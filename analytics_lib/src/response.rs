//! Value returned by every successful endpoint call.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Raw API response: HTTP status and the decoded JSON body, unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    /// Deserialize the body into a typed value.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        T::deserialize(&self.body)
    }

    pub fn into_body(self) -> Value {
        self.body
    }
}
