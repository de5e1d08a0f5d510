use axum::body::{to_bytes, Body};
use axum::http::{header, response::Parts, Request};
use axum::middleware::Next;
use axum::response::Response;
use chrono::Local;

/// Formats a number with dot thousands separators
///
/// # Examples
/// ```ignore
/// assert_eq!(format_number(1234567), "1.234.567");
/// assert_eq!(format_number(42), "42");
/// ```
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// One coloured console line per request: time, duration, body size, status, method, path.
/// Cyan time for 200, yellow for everything else.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Buffer the body to report its real size
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            println!(
                "\x1b[33m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
                Local::now().format("%H:%M:%S"),
                start.elapsed().as_millis(),
                "error",
                parts.status.as_u16(),
                method,
                uri.path()
            );
            tracing::warn!("Failed to buffer response body for {}: {}", uri.path(), e);
            return empty_body_response(parts);
        }
    };

    let color_code = if parts.status.as_u16() == 200 { "36" } else { "33" };

    println!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
        color_code,
        Local::now().format("%H:%M:%S"),
        start.elapsed().as_millis(),
        format_number(bytes.len()),
        parts.status.as_u16(),
        method,
        uri.path()
    );

    Response::from_parts(parts, Body::from(bytes))
}

/// Response with an empty body; the original length header no longer applies
fn empty_body_response(mut parts: Parts) -> Response {
    parts.headers.remove(header::CONTENT_LENGTH);
    Response::from_parts(parts, Body::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_drops_content_length() {
        let (parts, _) = axum::http::Response::builder()
            .header(header::CONTENT_LENGTH, "42")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::empty())
            .unwrap()
            .into_parts();

        let response = empty_body_response(parts);
        assert!(response.headers().get(header::CONTENT_LENGTH).is_none());
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1.000");
        assert_eq!(format_number(1234567), "1.234.567");
    }
}
