use axum::body::{to_bytes, Body};
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;

/// Human readable byte count: 512 B, 1.5 KB, 2.0 MB.
pub fn format_size(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;

    let b = bytes as f64;
    if b < KB {
        format!("{} B", bytes)
    } else if b < MB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{:.1} MB", b / MB)
    }
}

/// Body size announced by the response, if any.
pub fn content_length(headers: &HeaderMap) -> Option<usize> {
    headers
        .get(header::CONTENT_LENGTH)?
        .to_str()
        .ok()?
        .parse()
        .ok()
}

fn log_response(status: StatusCode, elapsed_ms: u64, size: usize, method: &Method, path: &str) {
    if status.is_success() {
        tracing::info!(status = status.as_u16(), elapsed_ms, size = %format_size(size), "{} {}", method, path);
    } else {
        tracing::warn!(status = status.as_u16(), elapsed_ms, size = %format_size(size), "{} {}", method, path);
    }
}

/// Logs method, path, status, body size and duration of every request.
///
/// Static files announce their size in `Content-Length` and stream through;
/// only bodies without it are buffered to be measured.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;

    if let Some(size) = content_length(response.headers()) {
        log_response(response.status(), start.elapsed().as_millis() as u64, size, &method, uri.path());
        return response;
    }

    let (parts, body) = response.into_parts();

    // Read the body to learn its real size
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!(
                status = parts.status.as_u16(),
                elapsed_ms = start.elapsed().as_millis() as u64,
                "{} {} body error: {}",
                method,
                uri.path(),
                e
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    log_response(parts.status, start.elapsed().as_millis() as u64, bytes.len(), &method, uri.path());

    Response::from_parts(parts, Body::from(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(2 * 1024 * 1024), "2.0 MB");
    }

    #[test]
    fn test_content_length() {
        let mut headers = HeaderMap::new();
        assert_eq!(content_length(&headers), None);

        headers.insert(header::CONTENT_LENGTH, "2048".parse().unwrap());
        assert_eq!(content_length(&headers), Some(2048));

        headers.insert(header::CONTENT_LENGTH, "lots".parse().unwrap());
        assert_eq!(content_length(&headers), None);
    }
}
