//! Credentials and endpoint derivation for a Fibery workspace.
//!
//! A [`Session`] holds the API token and workspace name, derives the command
//! endpoint URL once at construction, and offers a boolean authentication
//! probe. It is immutable after construction and shared by reference with
//! the command client.

use crate::error::{FiberyError, Result};
use reqwest::blocking::Client;
use std::time::Duration;

/// Environment variable holding the API token.
pub const TOKEN_ENV: &str = "FIBERY_TOKEN";
/// Environment variable holding the workspace name.
pub const WORKSPACE_ENV: &str = "FIBERY_WORKSPACE";

const AUTH_PROBE_TIMEOUT: Duration = Duration::from_secs(30);

/// An authenticated pointer at one workspace's command endpoint.
///
/// The endpoint URL is derived from the workspace name exactly once, in the
/// constructor; it is never recomputed or mutated afterwards, so it cannot
/// drift from the workspace it was derived from.
#[derive(Debug, Clone)]
pub struct Session {
    token: String,
    workspace: String,
    endpoint_url: String,
}

impl Session {
    /// Create a session for `https://{workspace}.fibery.io/api/commands`.
    ///
    /// Both values must be non-empty; an empty token or workspace fails with
    /// a validation error before any network activity.
    pub fn new(token: impl Into<String>, workspace: impl Into<String>) -> Result<Self> {
        let token = token.into();
        let workspace = workspace.into();
        validate_credential("token", &token)?;
        validate_credential("workspace", &workspace)?;

        let endpoint_url = format!("https://{}.fibery.io/api/commands", workspace);
        Ok(Self {
            token,
            workspace,
            endpoint_url,
        })
    }

    /// Create a session with an explicit endpoint URL.
    ///
    /// For self-hosted instances and test servers; the standard constructor
    /// derives the URL from the workspace name.
    pub fn with_endpoint(
        token: impl Into<String>,
        workspace: impl Into<String>,
        endpoint_url: impl Into<String>,
    ) -> Result<Self> {
        let token = token.into();
        let workspace = workspace.into();
        let endpoint_url = endpoint_url.into();
        validate_credential("token", &token)?;
        validate_credential("workspace", &workspace)?;
        validate_credential("endpoint URL", &endpoint_url)?;

        Ok(Self {
            token,
            workspace,
            endpoint_url,
        })
    }

    /// Create a session from `FIBERY_TOKEN` and `FIBERY_WORKSPACE`.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var(TOKEN_ENV).unwrap_or_default();
        let workspace = std::env::var(WORKSPACE_ENV).unwrap_or_default();
        if token.is_empty() {
            return Err(FiberyError::Validation {
                message: format!("{} is not set", TOKEN_ENV),
            });
        }
        if workspace.is_empty() {
            return Err(FiberyError::Validation {
                message: format!("{} is not set", WORKSPACE_ENV),
            });
        }
        Self::new(token, workspace)
    }

    /// The API token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The workspace name.
    pub fn workspace(&self) -> &str {
        &self.workspace
    }

    /// The command endpoint URL.
    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    /// The `Authorization` header value for this session's token.
    ///
    /// This is the single place the credential header is formatted; both the
    /// auth probe and the command client use it.
    pub fn authorization_header(&self) -> String {
        format!("Token {}", self.token)
    }

    /// Probe whether the remote service accepts this session's credentials.
    ///
    /// Sends an authenticated POST with no command body and returns `true`
    /// only on HTTP 200. Every other status collapses to `false` — the
    /// service does not distinguish a bad token from a bad workspace, so
    /// neither does this probe. Only transport-level failures surface as
    /// errors; this is the sole operation that swallows non-200 statuses.
    pub fn authenticate(&self) -> Result<bool> {
        let client = Client::builder()
            .user_agent("fibery-client")
            .timeout(AUTH_PROBE_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");

        let response = client
            .post(&self.endpoint_url)
            .header("Authorization", self.authorization_header())
            .header("Content-Type", "application/json")
            .send()?;

        let status = response.status();
        tracing::debug!("Auth probe against {} returned {}", self.endpoint_url, status);
        Ok(status == reqwest::StatusCode::OK)
    }
}

fn validate_credential(what: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FiberyError::Validation {
            message: format!("{} must not be empty", what),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn endpoint_url_is_derived_from_workspace() {
        let session = Session::new("secret", "acme").unwrap();
        assert_eq!(session.endpoint_url(), "https://acme.fibery.io/api/commands");
    }

    #[test]
    fn changing_workspace_changes_url() {
        let a = Session::new("secret", "acme").unwrap();
        let b = Session::new("secret", "globex").unwrap();
        assert_ne!(a.endpoint_url(), b.endpoint_url());
    }

    #[test]
    fn changing_token_never_changes_url() {
        let a = Session::new("token-one", "acme").unwrap();
        let b = Session::new("token-two", "acme").unwrap();
        assert_eq!(a.endpoint_url(), b.endpoint_url());
    }

    #[test]
    fn empty_token_is_rejected() {
        let result = Session::new("", "acme");
        assert!(matches!(result, Err(FiberyError::Validation { .. })));
    }

    #[test]
    fn empty_workspace_is_rejected() {
        let result = Session::new("secret", "  ");
        assert!(matches!(result, Err(FiberyError::Validation { .. })));
    }

    #[test]
    fn authorization_header_uses_token_scheme() {
        let session = Session::new("secret", "acme").unwrap();
        assert_eq!(session.authorization_header(), "Token secret");
    }

    #[test]
    fn authenticate_returns_true_on_200() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/commands")
                .header("Authorization", "Token secret");
            then.status(200).body("[]");
        });

        let session =
            Session::with_endpoint("secret", "acme", server.url("/api/commands")).unwrap();
        assert!(session.authenticate().unwrap());
        mock.assert();
    }

    #[test]
    fn authenticate_returns_false_on_error_statuses() {
        for status in [401u16, 403, 404, 500] {
            let server = MockServer::start();
            server.mock(|when, then| {
                when.method(POST).path("/api/commands");
                then.status(status).body("denied");
            });

            let session =
                Session::with_endpoint("bad-token", "acme", server.url("/api/commands")).unwrap();
            assert!(
                !session.authenticate().unwrap(),
                "status {} should probe false",
                status
            );
        }
    }
}
