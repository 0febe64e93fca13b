//! HTTP plumbing between the dashboard and the SIMANJA backend.
//!
//! Every call goes through [`ApiClient`], which carries the session token explicitly and
//! aborts requests that exceed the configured timeout.

use std::cell::Cell;
use std::rc::Rc;

use contracts::shared::api::ApiMessage;
use gloo_net::http::{Request, RequestBuilder};
use gloo_timers::callback::Timeout;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::config::AppConfig;

const GENERIC_SERVER_ERROR: &str = "Terjadi kesalahan pada server.";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("Tidak dapat terhubung ke server: {0}")]
    Network(String),
    #[error("Server tidak merespons dalam {0} detik. Silakan coba lagi.")]
    Timeout(u32),
    #[error("Sesi Anda telah berakhir. Silakan login kembali.")]
    Unauthorized,
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("Respons server tidak dapat dibaca: {0}")]
    Decode(String),
    #[error("Data tidak dapat disiapkan untuk dikirim: {0}")]
    Encode(String),
}

impl ApiError {
    /// Maps a non-2xx response, preferring the backend's own `message`.
    pub fn from_status(status: u16, body: &str) -> Self {
        if status == 401 {
            return ApiError::Unauthorized;
        }
        let message = serde_json::from_str::<ApiMessage>(body)
            .ok()
            .and_then(|m| m.message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| GENERIC_SERVER_ERROR.to_string());
        ApiError::Server { status, message }
    }

    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Network(_) | ApiError::Timeout(_) => true,
            ApiError::Server { status, .. } => *status >= 500,
            ApiError::Unauthorized | ApiError::Decode(_) | ApiError::Encode(_) => false,
        }
    }
}

/// Decodes a JSON body, mapping serde errors to [`ApiError::Decode`].
pub fn decode_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Post,
    Put,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
    timeout_ms: u32,
}

impl ApiClient {
    pub fn new(config: &AppConfig, token: Option<String>) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            token,
            timeout_ms: config.fetch_timeout_ms,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let body = self.execute(Request::get(&self.url(path)), None).await?;
        decode_json(&body)
    }

    pub async fn send_json<B, T>(&self, verb: Verb, path: &str, payload: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let payload =
            serde_json::to_string(payload).map_err(|e| ApiError::Encode(e.to_string()))?;
        let url = self.url(path);
        let builder = match verb {
            Verb::Post => Request::post(&url),
            Verb::Put => Request::put(&url),
        };
        let body = self.execute(builder, Some(payload)).await?;
        if body.trim().is_empty() {
            return decode_json("null");
        }
        decode_json(&body)
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute(Request::delete(&self.url(path)), None).await?;
        Ok(())
    }

    async fn execute(&self, builder: RequestBuilder, payload: Option<String>) -> Result<String, ApiError> {
        let controller = web_sys::AbortController::new()
            .map_err(|e| ApiError::Network(format!("{:?}", e)))?;
        let timed_out = Rc::new(Cell::new(false));
        let timeout_secs = self.timeout_ms / 1000;

        let mut builder = builder.abort_signal(Some(&controller.signal()));
        if let Some(token) = &self.token {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }
        let request = match payload {
            Some(payload) => builder
                .header("Content-Type", "application/json")
                .body(payload),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        // Held until the body is read; dropping it disarms the abort.
        let _deadline = {
            let timed_out = Rc::clone(&timed_out);
            Timeout::new(self.timeout_ms, move || {
                timed_out.set(true);
                controller.abort();
            })
        };

        let to_error = |e: gloo_net::Error| {
            if timed_out.get() {
                ApiError::Timeout(timeout_secs)
            } else {
                ApiError::Network(e.to_string())
            }
        };

        let response = request.send().await.map_err(&to_error)?;
        let status = response.status();
        let body = response.text().await.map_err(&to_error)?;

        if !(200..300).contains(&status) {
            return Err(ApiError::from_status(status, &body));
        }
        Ok(body)
    }
}

/// `?page=..&limit=..` plus an url-encoded `keyword` when searching.
pub fn paged_query(keyword: Option<&str>, page: usize, limit: usize) -> String {
    match keyword {
        Some(keyword) => format!(
            "?keyword={}&page={}&limit={}",
            urlencoding::encode(keyword),
            page,
            limit
        ),
        None => format!("?page={}&limit={}", page, limit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_status() {
        assert_eq!(ApiError::from_status(401, ""), ApiError::Unauthorized);
    }

    #[test]
    fn test_server_message_is_used() {
        let err = ApiError::from_status(422, r#"{"message":"Stok tidak cukup"}"#);
        assert_eq!(err.to_string(), "Stok tidak cukup");
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_generic_message_when_body_is_not_json() {
        let err = ApiError::from_status(502, "<html>Bad Gateway</html>");
        assert_eq!(
            err,
            ApiError::Server {
                status: 502,
                message: GENERIC_SERVER_ERROR.to_string()
            }
        );
        assert!(err.is_retryable());
        assert!(ApiError::Timeout(15).is_retryable());
    }

    #[test]
    fn test_decode_error() {
        let err = decode_json::<Vec<u32>>("{").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_paged_query() {
        assert_eq!(paged_query(None, 2, 10), "?page=2&limit=10");
        assert_eq!(
            paged_query(Some("kertas a4/hvs"), 1, 10),
            "?keyword=kertas%20a4%2Fhvs&page=1&limit=10"
        );
    }

    #[test]
    fn test_client_url() {
        let client = ApiClient::new(&AppConfig::with_base_url("http://localhost:3000/"), None);
        assert_eq!(client.url("/api/items"), "http://localhost:3000/api/items");
    }
}
