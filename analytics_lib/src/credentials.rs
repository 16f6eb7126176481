//! Credentials required by every Analytics API call.

use crate::error::Error;

/// Company id, API key and bearer token, validated once at initialization.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    company_id: String,
    api_key: String,
    token: String,
}

impl Credentials {
    /// Validate the three credentials.
    ///
    /// Empty values count as missing. The error names every
    /// missing field in declaration order, not just the first one.
    pub fn new(
        company_id: impl Into<String>,
        api_key: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self, Error> {
        let company_id = company_id.into();
        let api_key = api_key.into();
        let token = token.into();

        let missing: Vec<&'static str> = [
            ("companyId", &company_id),
            ("apiKey", &api_key),
            ("token", &token),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect();
        if !missing.is_empty() {
            return Err(Error::Initialization { missing });
        }

        Ok(Self {
            company_id,
            api_key,
            token,
        })
    }

    pub fn company_id(&self) -> &str {
        &self.company_id
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

// Secrets stay out of logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("company_id", &self.company_id)
            .field("api_key", &"<redacted>")
            .field("token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing_of(company_id: &str, api_key: &str, token: &str) -> Vec<&'static str> {
        match Credentials::new(company_id, api_key, token) {
            Err(Error::Initialization { missing }) => missing,
            other => panic!("expected initialization error, got {:?}", other),
        }
    }

    #[test]
    fn valid_credentials() {
        let c = Credentials::new("acme", "key1", "tok1").unwrap();
        assert_eq!(c.company_id(), "acme");
        assert_eq!(c.api_key(), "key1");
        assert_eq!(c.token(), "tok1");
    }

    #[test]
    fn each_missing_field_is_named() {
        assert_eq!(missing_of("", "key1", "tok1"), vec!["companyId"]);
        assert_eq!(missing_of("acme", "", "tok1"), vec!["apiKey"]);
        assert_eq!(missing_of("acme", "key1", ""), vec!["token"]);
    }

    #[test]
    fn whitespace_values_are_present() {
        let c = Credentials::new(" ", "key1", "\t").unwrap();
        assert_eq!(c.company_id(), " ");
        assert_eq!(c.token(), "\t");
    }

    #[test]
    fn all_missing_fields_in_declaration_order() {
        assert_eq!(missing_of("", "key1", ""), vec!["companyId", "token"]);
        assert_eq!(missing_of("", "", ""), vec!["companyId", "apiKey", "token"]);
        let err = Credentials::new("", "", "tok1").unwrap_err();
        assert!(err
            .to_string()
            .ends_with("Missing arguments: companyId, apiKey"));
    }

    #[test]
    fn debug_redacts_secrets() {
        let c = Credentials::new("acme", "key1", "tok1").unwrap();
        let dbg = format!("{:?}", c);
        assert!(dbg.contains("acme"));
        assert!(!dbg.contains("key1"));
        assert!(!dbg.contains("tok1"));
    }
}
