//! Обращения фронтенда к REST API бэкенда.
//!
//! Все функции возвращают `Result<_, String>`: текст ошибки сразу пригоден
//! для тоста. Для ответов 4xx/5xx берётся поле `message` из тела ошибки.

use contracts::shared::api::ErrorResponse;
use gloo_net::http::{Request, Response};
use serde::{de::DeserializeOwned, Serialize};

/// Базовый URL API: тот же хост, порт 3000.
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
    format!("{}//{}:3000", protocol, hostname)
}

/// Полный URL по пути вида "/api/..."
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Путь с параметрами запроса; пустые (None) поля не попадают в строку
pub fn with_query<Q: Serialize>(path: &str, query: &Q) -> String {
    match serde_qs::to_string(query) {
        Ok(qs) if !qs.is_empty() => format!("{}?{}", path, qs),
        _ => path.to_string(),
    }
}

/// Текст ошибки из тела неуспешного ответа
pub fn error_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(err) if !err.message.trim().is_empty() => err.message,
        _ if body.trim().is_empty() => format!("HTTP {}", status),
        _ => format!("HTTP {}: {}", status, body.trim()),
    }
}

async fn check(resp: Response) -> Result<Response, String> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(error_message(status, &body))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let resp = Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    check(resp).await?.json().await.map_err(|e| e.to_string())
}

/// Метод отправки тела запроса
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendMethod {
    Post,
    Put,
}

pub async fn send_json<B, T>(method: SendMethod, path: &str, body: &B) -> Result<T, String>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let url = api_url(path);
    let builder = match method {
        SendMethod::Post => Request::post(&url),
        SendMethod::Put => Request::put(&url),
    };
    let resp = builder
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    check(resp).await?.json().await.map_err(|e| e.to_string())
}

/// POST без тела
pub async fn post_empty<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let resp = Request::post(&api_url(path))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    check(resp).await?.json().await.map_err(|e| e.to_string())
}

pub async fn delete(path: &str) -> Result<(), String> {
    let resp = Request::delete(&api_url(path))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    check(resp).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_backend_message() {
        let body = r#"{"error":"validation_error","message":"Discount price must not exceed price"}"#;
        assert_eq!(error_message(400, body), "Discount price must not exceed price");
    }

    #[test]
    fn test_error_message_without_json_body() {
        assert_eq!(error_message(502, ""), "HTTP 502");
        assert_eq!(error_message(500, "boom\n"), "HTTP 500: boom");
    }

    #[test]
    fn test_with_query_skips_unset_params() {
        use contracts::domain::a002_subcategory::SubCategoryQuery;
        use contracts::enums::ContentType;

        assert_eq!(
            with_query("/api/subcategories", &SubCategoryQuery::default()),
            "/api/subcategories"
        );
        let only_type = SubCategoryQuery {
            content_type: Some(ContentType::TestSeries),
            category_id: None,
        };
        assert_eq!(
            with_query("/api/subcategories", &only_type),
            "/api/subcategories?contentType=TEST_SERIES"
        );
    }
}
