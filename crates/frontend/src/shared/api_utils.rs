//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Port the backend listens on (see `config.toml`)
pub const BACKEND_PORT: u16 = 3000;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using [`BACKEND_PORT`] for the backend server. During development the
/// client is served by trunk on another port, in production by the backend itself.
///
/// # Returns
/// - API base URL like "http://localhost:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

/// Build a full API URL from a path
///
/// # Example
/// ```ignore
/// let url = api_url("/api/configuration");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Error text for a non-2xx status, `None` on success
pub fn status_error(status: u16) -> Option<String> {
    (!(200..300).contains(&status)).then(|| format!("HTTP {}", status))
}

/// Pass a successful response through; turn any other status into `HTTP <status>`
pub fn ensure_ok(response: gloo_net::http::Response) -> Result<gloo_net::http::Response, String> {
    match status_error(response.status()) {
        Some(e) => Err(e),
        None => Ok(response),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_success_status_is_an_error() {
        assert_eq!(status_error(200), None);
        assert_eq!(status_error(204), None);
        assert_eq!(status_error(404), Some("HTTP 404".to_string()));
        assert_eq!(status_error(500), Some("HTTP 500".to_string()));
    }
}
