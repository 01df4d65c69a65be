//! Settings API client
//!
//! Categories are read, updated and reverted as units:
//! - GET    /api/v2/settings/{category}/   current values
//! - PATCH  /api/v2/settings/all/          write the full payload
//! - DELETE /api/v2/settings/{category}/   revert to system defaults
//!
//! Screens depend on the `SettingsApi` trait so tests can substitute a
//! scripted client.

use contracts::settings::SettingsMap;
use gloo_net::http::{Request, Response};

use crate::shared::api_utils::api_url;

/// Error returned by the settings API client
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    /// HTTP status, if a response was received
    pub status: Option<u16>,
    pub message: String,
    /// Server-supplied explanation from the response body, when present
    pub detail: Option<String>,
}

impl ApiError {
    fn transport(err: gloo_net::Error) -> Self {
        Self {
            status: None,
            message: err.to_string(),
            detail: None,
        }
    }

    async fn from_response(resp: Response) -> Self {
        let status = resp.status();
        // Error bodies carry {"detail": "..."} when the server has one
        let detail = resp
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|body| {
                body.get("detail")
                    .and_then(|d| d.as_str())
                    .map(str::to_string)
            });
        Self {
            status: Some(status),
            message: format!("HTTP {status}"),
            detail,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.detail {
            Some(detail) => write!(f, "{}: {}", self.message, detail),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Client contract for the settings API
#[allow(async_fn_in_trait)]
pub trait SettingsApi {
    /// Read the current values of a category
    async fn read_category(&self, category: &str) -> Result<SettingsMap, ApiError>;
    /// Write a complete payload of editable settings
    async fn update_all(&self, payload: &SettingsMap) -> Result<(), ApiError>;
    /// Reset every setting of a category to its system default
    async fn revert_category(&self, category: &str) -> Result<(), ApiError>;
}

/// Production client talking to the console backend
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpSettingsApi;

impl SettingsApi for HttpSettingsApi {
    async fn read_category(&self, category: &str) -> Result<SettingsMap, ApiError> {
        let url = api_url(&format!("/api/v2/settings/{category}/"));
        let resp = Request::get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(ApiError::transport)?;
        if !resp.ok() {
            return Err(ApiError::from_response(resp).await);
        }
        resp.json::<SettingsMap>().await.map_err(ApiError::transport)
    }

    async fn update_all(&self, payload: &SettingsMap) -> Result<(), ApiError> {
        let url = api_url("/api/v2/settings/all/");
        let resp = Request::patch(&url)
            .header("Accept", "application/json")
            .json(payload)
            .map_err(ApiError::transport)?
            .send()
            .await
            .map_err(ApiError::transport)?;
        if !resp.ok() {
            return Err(ApiError::from_response(resp).await);
        }
        Ok(())
    }

    async fn revert_category(&self, category: &str) -> Result<(), ApiError> {
        let url = api_url(&format!("/api/v2/settings/{category}/"));
        let resp = Request::delete(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(ApiError::transport)?;
        if !resp.ok() {
            return Err(ApiError::from_response(resp).await);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_server_detail() {
        let err = ApiError {
            status: Some(400),
            message: "HTTP 400".to_string(),
            detail: Some("An error occurred".to_string()),
        };
        assert_eq!(err.to_string(), "HTTP 400: An error occurred");
    }

    #[test]
    fn display_without_detail() {
        let err = ApiError {
            status: None,
            message: "network error".to_string(),
            detail: None,
        };
        assert_eq!(err.to_string(), "network error");
    }
}
