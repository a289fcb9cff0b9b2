use std::time::Duration;

/// Endpoint and pacing settings, constructed explicitly and passed by value.
///
/// There is no file or environment lookup here on purpose: the tool talks to
/// one fixed endpoint with fixed headers. Tests override `api_url` to point
/// at a mock server and shrink `request_timeout`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Full URL of the lookup endpoint; the identifier is appended as a
    /// query parameter.
    pub api_url: String,
    /// Value sent as the `User-Agent` header on every request.
    pub user_agent: String,
    /// Per-request timeout; a request past this deadline is reported as a
    /// timeout failure.
    pub request_timeout: Duration,
    /// Pause between consecutive requests in file mode.
    pub batch_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "https://dwxxyopsbstmftjbgmpt.supabase.co/functions/v1/fetch-mobile-details"
                .to_string(),
            user_agent: "WASP/1.0".to_string(),
            request_timeout: Duration::from_secs(40),
            batch_delay: Duration::from_secs(2),
        }
    }
}
