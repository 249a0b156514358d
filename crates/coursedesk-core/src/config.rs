// ── Runtime connection configuration ──
//
// Describes *how* to reach the course API. Never touches disk: the TUI
// builds a `ServerConfig` from `coursedesk-config` and hands it in.

use std::time::Duration;

use url::Url;

pub use coursedesk_api::DEFAULT_BASE_URL;

/// Configuration for talking to a single API server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// API base URL (e.g., `http://localhost:3000`).
    pub url: Url,
    /// Request timeout. `None` defers to the HTTP client default.
    pub timeout: Option<Duration>,
}

impl ServerConfig {
    pub fn new(url: Url) -> Self {
        Self { url, timeout: None }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
