//! Viafirma API client.
//!
//! The main entry point for interacting with the Viafirma Documents API v3.

use crate::documents::DocumentsClient;
use crate::error::Result;
use crate::messages::MessagesClient;
use crate::sets::SetsClient;
use reqwest::Client as HttpClient;
use std::fmt;
use std::time::Duration;
use tracing::debug;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Deployment environment of the Viafirma service.
///
/// Each environment maps to a subdomain of `viafirma.com`; the client derives
/// its base URL from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Testing environment (`sandbox` subdomain). The default.
    #[default]
    Sandbox,
    /// Live environment (`services` subdomain).
    Production,
}

impl Environment {
    /// Subdomain of `viafirma.com` serving this environment.
    pub fn subdomain(&self) -> &'static str {
        match self {
            Environment::Sandbox => "sandbox",
            Environment::Production => "services",
        }
    }

    /// Full base URL of the Documents API v3 for this environment.
    pub fn base_url(&self) -> String {
        format!("https://{}.viafirma.com/documents/api/v3", self.subdomain())
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.subdomain())
    }
}

/// Viafirma API client.
///
/// Credentials are fixed at construction; the underlying HTTP connection is
/// reused across calls.
///
/// # Example
///
/// ```rust,no_run
/// use viafirma::{Client, Document};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = Client::new("api-user", "api-password");
///
///     let doc = Document::base64_from_bytes(b"%PDF-1.4 ...");
///     let response = client.messages().dispatch("GROUP-1", &doc).await?;
///     println!("dispatched: {response}");
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct Client {
    pub(crate) http: HttpClient,
    pub(crate) base_url: String,
    pub(crate) user: String,
    pub(crate) password: String,
    environment: Environment,
}

/// Configuration options for the client.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Target environment (default: sandbox).
    pub environment: Environment,
    /// Base URL override; when set it wins over the environment-derived URL.
    pub base_url: Option<String>,
    /// Request timeout (default: 30 seconds).
    pub timeout: Option<Duration>,
    /// User-Agent header value.
    pub user_agent: Option<String>,
}

impl Client {
    /// Create a new sandbox client with default configuration.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use viafirma::Client;
    ///
    /// let client = Client::new("api-user", "api-password");
    /// assert!(client.is_sandbox());
    /// ```
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self::with_config(user, password, ClientConfig::default())
    }

    /// Create a client against a specific environment.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use viafirma::{Client, Environment};
    ///
    /// let client = Client::with_environment("api-user", "api-password", Environment::Production);
    /// assert!(!client.is_sandbox());
    /// ```
    pub fn with_environment(
        user: impl Into<String>,
        password: impl Into<String>,
        environment: Environment,
    ) -> Self {
        Self::with_config(
            user,
            password,
            ClientConfig {
                environment,
                ..Default::default()
            },
        )
    }

    /// Create a client with custom configuration.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use viafirma::{Client, ClientConfig, Environment};
    /// use std::time::Duration;
    ///
    /// let client = Client::with_config("api-user", "api-password", ClientConfig {
    ///     environment: Environment::Production,
    ///     timeout: Some(Duration::from_secs(60)),
    ///     ..Default::default()
    /// });
    /// ```
    pub fn with_config(
        user: impl Into<String>,
        password: impl Into<String>,
        config: ClientConfig,
    ) -> Self {
        let timeout = config
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        let user_agent = config
            .user_agent
            .unwrap_or_else(|| format!("viafirma-rust/{}", env!("CARGO_PKG_VERSION")));

        let http = HttpClient::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            base_url: config
                .base_url
                .unwrap_or_else(|| config.environment.base_url()),
            user: user.into(),
            password: password.into(),
            environment: config.environment,
        }
    }

    /// Get the base URL for the API.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the environment this client targets.
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Whether this client targets the sandbox environment.
    pub fn is_sandbox(&self) -> bool {
        self.environment == Environment::Sandbox
    }

    /// Get the sets client for signature-set operations.
    pub fn sets(&self) -> SetsClient {
        SetsClient::new(self.clone())
    }

    /// Get the messages client for single-message operations.
    pub fn messages(&self) -> MessagesClient {
        MessagesClient::new(self.clone())
    }

    /// Get the documents client for signed/trail downloads.
    pub fn documents(&self) -> DocumentsClient {
        DocumentsClient::new(self.clone())
    }

    /// Liveness probe: GET `system/alive`.
    ///
    /// Returns the raw HTTP response; the service signals liveness through
    /// the status code alone, so no body decoding happens here.
    pub async fn is_alive(&self) -> Result<reqwest::Response> {
        self.get_raw("system/alive").await
    }

    /// Make an authenticated GET request, returning the raw response.
    pub(crate) async fn get_raw(&self, path: &str) -> Result<reqwest::Response> {
        let url = format!("{}/{}", self.base_url, path);
        debug!(method = "GET", %url, "viafirma request");

        let response = self
            .http
            .get(&url)
            .basic_auth(&self.user, Some(&self.password))
            .send()
            .await?;

        Ok(response)
    }

    /// Make an authenticated GET request and decode the JSON body.
    pub(crate) async fn get<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.get_raw(path).await?;
        Ok(response.json().await?)
    }

    /// Make an authenticated POST request with a JSON body and decode the
    /// JSON response.
    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize,
    {
        let url = format!("{}/{}", self.base_url, path);
        debug!(method = "POST", %url, "viafirma request");

        let response = self
            .http
            .post(&url)
            .basic_auth(&self.user, Some(&self.password))
            .json(body)
            .send()
            .await?;

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_new_defaults_to_sandbox() {
        let client = Client::new("user", "pass");
        assert!(client.is_sandbox());
        assert_eq!(
            client.base_url(),
            "https://sandbox.viafirma.com/documents/api/v3"
        );
    }

    #[test]
    fn test_client_production_environment() {
        let client = Client::with_environment("user", "pass", Environment::Production);
        assert!(!client.is_sandbox());
        assert_eq!(
            client.base_url(),
            "https://services.viafirma.com/documents/api/v3"
        );
    }

    #[test]
    fn test_client_with_base_url_override() {
        let client = Client::with_config(
            "user",
            "pass",
            ClientConfig {
                base_url: Some("http://localhost:9999".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(client.base_url(), "http://localhost:9999");
    }

    #[test]
    fn test_environment_subdomains() {
        assert_eq!(Environment::Sandbox.subdomain(), "sandbox");
        assert_eq!(Environment::Production.subdomain(), "services");
        assert_eq!(Environment::default(), Environment::Sandbox);
    }
}
