use crate::error::ClientError;

/// Connection details for one remote service, resolved once at process start
/// and passed into the client that talks to it.
///
/// An absent API key means requests go out without the auth header; an absent
/// base URL is a configuration error for any call that needs one.
#[derive(Debug, Clone, Default)]
pub struct RemoteEndpoint {
    base_url: Option<String>,
    api_key: Option<String>,
}

impl RemoteEndpoint {
    /// Builds an endpoint, treating empty-after-trim values as absent.
    #[must_use]
    pub fn new(base_url: Option<String>, api_key: Option<String>) -> Self {
        Self {
            base_url: base_url.filter(|value| !value.trim().is_empty()),
            api_key: api_key.filter(|value| !value.trim().is_empty()),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.base_url.is_some()
    }

    pub(crate) fn require_base_url(&self, setting: &'static str) -> Result<&str, ClientError> {
        self.base_url
            .as_deref()
            .ok_or_else(|| ClientError::Configuration(format!("{setting} not configured")))
    }

    pub(crate) fn require_api_key(&self, setting: &'static str) -> Result<&str, ClientError> {
        self.api_key
            .as_deref()
            .ok_or_else(|| ClientError::Configuration(format!("{setting} not configured")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_are_treated_as_absent() {
        let endpoint = RemoteEndpoint::new(Some("   ".to_string()), Some(String::new()));

        assert!(!endpoint.is_configured());
        assert!(endpoint.api_key().is_none());
        assert!(endpoint.require_base_url("ATHENA_BASE_URL").is_err());
    }

    #[test]
    fn configured_values_pass_through() {
        let endpoint = RemoteEndpoint::new(
            Some("http://localhost:9000".to_string()),
            Some("secret".to_string()),
        );

        assert_eq!(endpoint.base_url(), Some("http://localhost:9000"));
        assert_eq!(
            endpoint.require_api_key("ATHENA_API_KEY").ok(),
            Some("secret")
        );
    }
}
