use crate::{ClientError, ClientResult};

use pf_core::{Credentials, PageType};

use std::panic::Location;

use error_location::ErrorLocation;
use log::debug;
use reqwest::{
    Client as ReqwestClient, Method, Url,
    multipart::{Form, Part},
};
use serde_json::Value;

/// HTTP client for the portfolio server REST API
pub struct Client {
    pub base_url: String,
    /// Sent as `Authorization: Bearer <token>` when present
    pub token: Option<String>,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:3000")
    /// * `token` - Optional bearer token for owner-gated routes
    pub fn new(base_url: &str, token: Option<&str>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.map(String::from),
            client: ReqwestClient::new(),
        }
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.request_url(method, &url)
    }

    /// Request to `base_url` plus `segments`, each percent-encoded as one
    /// path segment so names cannot reach into another route or the query.
    fn request_segments(
        &self,
        method: Method,
        segments: &[&str],
    ) -> ClientResult<reqwest::RequestBuilder> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            ClientError::invalid_url(format!("'{}': {}", self.base_url, e))
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                ClientError::invalid_url(format!("'{}' cannot take a path", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);

        Ok(self.request_url(method, url.as_str()))
    }

    fn request_url(&self, method: Method, url: &str) -> reqwest::RequestBuilder {
        let mut req = self.client.request(method, url);

        if let Some(ref token) = self.token {
            req = req.bearer_auth(token);
        }

        req
    }

    /// Execute a request and turn error bodies into `ClientError::Api`.
    ///
    /// Non-success responses without an `error` object (a failed login
    /// reports `auth: false` with a 403/404) are returned as-is.
    async fn execute(&self, req: reqwest::RequestBuilder) -> ClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        let body: Value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)?
        };

        debug!("Server answered {} ({} bytes)", status, bytes.len());

        if status.is_success() {
            return Ok(body);
        }

        if let Some(error) = body.get("error") {
            let code = error
                .get("code")
                .and_then(|v| v.as_str())
                .unwrap_or("UNKNOWN")
                .to_string();
            let message = error
                .get("message")
                .and_then(|v| v.as_str())
                .unwrap_or("Unknown error")
                .to_string();
            return Err(ClientError::Api {
                code,
                status: status.as_u16(),
                message,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if body.is_null() {
            return Err(ClientError::api_error(
                "HTTP_ERROR",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Request failed"),
            ));
        }

        Ok(body)
    }

    // =========================================================================
    // Pages
    // =========================================================================

    /// Fetch whatever page lives at `/api{route}`
    pub async fn page(&self, route: &str) -> ClientResult<Value> {
        let route = if route.starts_with('/') {
            route.to_string()
        } else {
            format!("/{}", route)
        };
        let req = self.request(Method::POST, &format!("/api{}", route));
        self.execute(req).await
    }

    /// Private dashboard of `user_name`; needs that user's token
    pub async fn user_page(&self, user_name: &str) -> ClientResult<Value> {
        let req = self.request_segments(Method::POST, &["api", "user", user_name])?;
        self.execute(req).await
    }

    // =========================================================================
    // Auth and names
    // =========================================================================

    pub async fn auth(&self, credentials: &Credentials) -> ClientResult<Value> {
        let req = self
            .request(Method::POST, "/api/user/auth")
            .json(credentials);
        self.execute(req).await
    }

    pub async fn query_name(&self, page_type: PageType, name: &str) -> ClientResult<Value> {
        let req =
            self.request_segments(Method::POST, &["api", page_type.as_str(), "query", name])?;
        self.execute(req).await
    }

    // =========================================================================
    // Manage
    // =========================================================================

    pub async fn create(&self, page_type: PageType, name: &str, data: &Value) -> ClientResult<Value> {
        let req = self
            .request_segments(Method::POST, &manage_segments(page_type, name))?
            .json(data);
        self.execute(req).await
    }

    pub async fn update(&self, page_type: PageType, name: &str, data: &Value) -> ClientResult<Value> {
        let req = self
            .request_segments(Method::PUT, &manage_segments(page_type, name))?
            .json(data);
        self.execute(req).await
    }

    pub async fn delete(&self, page_type: PageType, name: &str, data: &Value) -> ClientResult<Value> {
        let req = self
            .request_segments(Method::DELETE, &manage_segments(page_type, name))?
            .json(data);
        self.execute(req).await
    }

    // =========================================================================
    // Upload
    // =========================================================================

    /// Upload an image as the `file` part of a multipart body
    pub async fn upload(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> ClientResult<Value> {
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(content_type)?;
        let form = Form::new().part("file", part);

        let req = self.request(Method::POST, "/api/upload").multipart(form);
        self.execute(req).await
    }
}

fn manage_segments(page_type: PageType, name: &str) -> [&str; 4] {
    ["api", "manage", page_type.as_str(), name]
}
