use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use std::time::Duration;

use crate::shared::format::format_size;

fn log_line(status: StatusCode, method: &str, path: &str, elapsed: Duration, size: &str) {
    let line = format!(
        "{:>5}ms | {:>9} | {} {:>6} {}",
        elapsed.as_millis(),
        size,
        status.as_u16(),
        method,
        path
    );
    if status.is_server_error() {
        tracing::error!("{}", line);
    } else if status.is_client_error() {
        tracing::warn!("{}", line);
    } else {
        tracing::info!("{}", line);
    }
}

/// Журнал запросов API: метод, путь, статус, длительность и размер ответа.
///
/// Статика фронтенда (всё, что не `/api`) не логируется.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let path = req.uri().path().to_string();
    if !path.starts_with("/api") {
        return next.run(req).await;
    }
    let method = req.method().to_string();
    let started = std::time::Instant::now();

    let (parts, body) = next.run(req).await.into_parts();
    match to_bytes(body, usize::MAX).await {
        Ok(bytes) => {
            log_line(parts.status, &method, &path, started.elapsed(), &format_size(bytes.len()));
            Response::from_parts(parts, Body::from(bytes))
        }
        Err(e) => {
            tracing::warn!("{} {}: response body not readable: {}", method, path, e);
            Response::from_parts(parts, Body::empty())
        }
    }
}
