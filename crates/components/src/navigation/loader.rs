use gloo_net::http::Request;
use portal_navigation::ConfigurationData;

/// Fetches and parses the remote configuration document.
pub async fn fetch_configuration(src: &str) -> Result<ConfigurationData, String> {
    Request::get(src)
        .send()
        .await
        .map_err(|e| e.to_string())?
        .json::<ConfigurationData>()
        .await
        .map_err(|e| e.to_string())
}

/// Monotonic token dispenser guarding against out-of-order fetch
/// completions. Every request takes a fresh token; only the completion
/// holding the most recently issued token may commit its result, so a slow
/// stale response can never overwrite a newer configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestGuard {
    latest: u64,
}

impl RequestGuard {
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.latest == token
    }
}
