//! Fetch Transport
//!
//! JSON over the browser `fetch` API.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use super::{ApiError, ApiResult};
use crate::config::ApiConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Method {
    Get,
    Post,
    Put,
}

impl Method {
    fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Resource {
    Users,
    Tasks,
    Achievements,
}

/// Error body sent by the backend with non-2xx responses
#[derive(Deserialize)]
struct ErrorEnvelope {
    error: String,
}

/// HTTP implementation of [`super::TaskMasterApi`]
#[derive(Debug, Clone)]
pub struct HttpApi {
    config: ApiConfig,
}

impl HttpApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// `{base}/{endpoint}[/{id}][?k=v&...]` with percent-encoded values
    pub(super) fn url(&self, resource: Resource, id: Option<&str>, query: &[(&str, String)]) -> String {
        let endpoint = match resource {
            Resource::Users => &self.config.users_endpoint,
            Resource::Tasks => &self.config.tasks_endpoint,
            Resource::Achievements => &self.config.achievements_endpoint,
        };
        let mut url = format!("{}/{}", self.config.base_url.trim_end_matches('/'), endpoint);
        if let Some(id) = id {
            url.push('/');
            url.extend(utf8_percent_encode(id, NON_ALPHANUMERIC));
        }
        for (i, (key, value)) in query.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            url.extend(utf8_percent_encode(value, NON_ALPHANUMERIC));
        }
        url
    }

    pub(super) async fn get<T: DeserializeOwned>(&self, url: String) -> ApiResult<T> {
        let (status, text) = fetch_text(Method::Get, &url, None).await?;
        decode(status, &text)
    }

    pub(super) async fn send<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        url: String,
        body: &B,
    ) -> ApiResult<T> {
        let body = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        let (status, text) = fetch_text(method, &url, Some(body)).await?;
        decode(status, &text)
    }
}

async fn fetch_text(method: Method, url: &str, body: Option<String>) -> ApiResult<(u16, String)> {
    log::debug!("[API] {} {}", method.as_str(), url);

    let init = RequestInit::new();
    init.set_method(method.as_str());
    init.set_mode(RequestMode::Cors);
    let has_body = body.is_some();
    if let Some(body) = body {
        init.set_body(&body.into());
    }

    let request = Request::new_with_str_and_init(url, &init).map_err(ApiError::transport)?;
    if has_body {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(ApiError::transport)?;
    }

    let window = web_sys::window().ok_or_else(|| ApiError::Transport("no window".to_string()))?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(ApiError::transport)?
        .dyn_into()
        .map_err(ApiError::transport)?;
    let text = JsFuture::from(response.text().map_err(ApiError::transport)?)
        .await
        .map_err(ApiError::transport)?;

    log::debug!("[API] {} {} -> {}", method.as_str(), url, response.status());
    Ok((response.status(), text.as_string().unwrap_or_default()))
}

/// Map a raw response to a typed result
pub(super) fn decode<T: DeserializeOwned>(status: u16, text: &str) -> ApiResult<T> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ErrorEnvelope>(text)
            .map(|e| e.error)
            .unwrap_or_else(|_| text.to_string());
        return Err(match status {
            404 => ApiError::NotFound(message),
            _ => ApiError::Status { status, message },
        });
    }
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> HttpApi {
        HttpApi::new(ApiConfig {
            base_url: "https://example.test/".to_string(),
            users_endpoint: "users-fn".to_string(),
            tasks_endpoint: "tasks-fn".to_string(),
            achievements_endpoint: "ach-fn".to_string(),
        })
    }

    #[test]
    fn test_url_with_query() {
        let url = api().url(
            Resource::Tasks,
            None,
            &[("user_id", "1".to_string()), ("status", "active".to_string())],
        );
        assert_eq!(url, "https://example.test/tasks-fn?user_id=1&status=active");
    }

    #[test]
    fn test_url_with_id_and_encoding() {
        assert_eq!(api().url(Resource::Tasks, Some("17"), &[]), "https://example.test/tasks-fn/17");
        assert_eq!(
            api().url(Resource::Users, None, &[("telegram_id", "a b&c".to_string())]),
            "https://example.test/users-fn?telegram_id=a%20b%26c"
        );
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Payload {
        ok: bool,
    }

    #[test]
    fn test_decode_success() {
        let payload: Payload = decode(201, r#"{"ok": true}"#).unwrap();
        assert_eq!(payload, Payload { ok: true });
    }

    #[test]
    fn test_decode_not_found() {
        let err = decode::<Payload>(404, r#"{"error": "User not found"}"#).unwrap_err();
        assert_eq!(err, ApiError::NotFound("User not found".to_string()));
    }

    #[test]
    fn test_decode_server_error_without_envelope() {
        let err = decode::<Payload>(502, "Bad Gateway").unwrap_err();
        assert_eq!(
            err,
            ApiError::Status { status: 502, message: "Bad Gateway".to_string() }
        );
    }

    #[test]
    fn test_decode_malformed() {
        assert!(matches!(decode::<Payload>(200, "<html>"), Err(ApiError::Decode(_))));
        assert!(matches!(decode::<Payload>(200, r#"{"ok": "yes"}"#), Err(ApiError::Decode(_))));
    }
}
