use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Request parameters, name to value
pub type Params = BTreeMap<String, String>;

/// API key used when no credentials are supplied
pub const SANDBOX_API_KEY: &str = "testapi";

/// Password used when no credentials are supplied
pub const SANDBOX_PASSWORD: &str = "testpass";

/// Registrar endpoint paths
pub mod endpoints {
    pub const DOMAIN_CHECK: &str = "/Domain/Check";
    pub const DOMAIN_CREATE: &str = "/Domain/Create";
    pub const DOMAIN_UPDATE: &str = "/Domain/Update";
    pub const DOMAIN_INFO: &str = "/Domain/Info";
    pub const HOST_CREATE: &str = "/Domain/Host/Create";
    pub const HOST_INFO: &str = "/Domain/Host/Info";
    pub const HOST_DELETE: &str = "/Domain/Host/Delete";
    pub const HOST_UPDATE: &str = "/Domain/Host/Update";
    pub const DNS_ADD: &str = "/Domain/DnsRecord/Add";
    pub const DNS_REMOVE: &str = "/Domain/DnsRecord/Remove";
    pub const DNS_UPDATE: &str = "/Domain/DnsRecord/Update";
}

/// Registrar environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Live, billing API
    Production,
    /// Non-billing mirror for integration testing
    Sandbox,
}

impl Environment {
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Production => "https://api.internet.bs",
            Environment::Sandbox => "https://testapi.internet.bs",
        }
    }
}

/// API key and password pair sent with every request
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub password: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            password: password.into(),
        }
    }

    /// Public sandbox credentials
    pub fn sandbox() -> Self {
        Self::new(SANDBOX_API_KEY, SANDBOX_PASSWORD)
    }

    /// Resolve optional credentials into a pair and the environment they target.
    ///
    /// Both values must be present and non-empty to reach production. Anything
    /// less falls back to the sandbox pair as a whole, never a mix of the two.
    pub fn resolve(api_key: Option<&str>, password: Option<&str>) -> (Self, Environment) {
        match (api_key, password) {
            (Some(key), Some(pass)) if !key.is_empty() && !pass.is_empty() => {
                (Self::new(key, pass), Environment::Production)
            }
            _ => (Self::sandbox(), Environment::Sandbox),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("password", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_both_present() {
        let (creds, env) = Credentials::resolve(Some("key"), Some("secret"));
        assert_eq!(env, Environment::Production);
        assert_eq!(creds, Credentials::new("key", "secret"));
    }

    #[test]
    fn test_resolve_partial_falls_back_entirely() {
        for (key, pass) in [
            (Some("key"), None),
            (None, Some("secret")),
            (None, None),
            (Some(""), Some("secret")),
        ] {
            let (creds, env) = Credentials::resolve(key, pass);
            assert_eq!(env, Environment::Sandbox);
            assert_eq!(creds, Credentials::sandbox());
        }
    }

    #[test]
    fn test_debug_hides_password() {
        let out = format!("{:?}", Credentials::new("key", "hunter2"));
        assert!(out.contains("key"));
        assert!(!out.contains("hunter2"));
    }
}
