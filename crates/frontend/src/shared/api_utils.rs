//! Helpers for reading the static data files served next to the app.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Failure to obtain a data file
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Network(String),

    #[error("HTTP error: {0}")]
    Status(u16),

    #[error("failed to parse response: {0}")]
    Parse(String),
}

/// Resolve a data path against the current origin
///
/// Absolute URLs are returned unchanged. Without a window the path is
/// returned as-is.
pub fn data_url(path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let origin = web_sys::window().and_then(|w| w.location().origin().ok());
    match origin {
        Some(origin) => join_url(&origin, path),
        None => path.to_string(),
    }
}

fn join_url(origin: &str, path: &str) -> String {
    format!(
        "{}/{}",
        origin.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// GET a JSON document and deserialize it
pub async fn fetch_json<T: DeserializeOwned>(path: &str) -> Result<T, LoadError> {
    let url = data_url(path);
    log::debug!("Fetching {}", url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(LoadError::Status(response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| LoadError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("https://calauan.gov.ph/", "/data/dpwh-projects.json"),
            "https://calauan.gov.ph/data/dpwh-projects.json"
        );
        assert_eq!(join_url("http://localhost:8080", "data/x.json"), "http://localhost:8080/data/x.json");
    }

    #[test]
    fn test_absolute_url_unchanged() {
        assert_eq!(data_url("https://example.org/a.json"), "https://example.org/a.json");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(LoadError::Status(404).to_string(), "HTTP error: 404");
        assert_eq!(
            LoadError::Parse("expected value".into()).to_string(),
            "failed to parse response: expected value"
        );
    }
}
