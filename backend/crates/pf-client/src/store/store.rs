use crate::{Client, ClientResult, StoreState};

use pf_core::{AuthResponse, Credentials, PageType};

use log::{debug, info, warn};
use serde::Deserialize;
use serde_json::{Value, json};

const LOGIN_FAILED_MESSAGE: &str = "Login failed.";

#[derive(Deserialize)]
struct UploadedImage {
    url: String,
}

/// State store whose actions proxy the server API and commit the results.
///
/// Actions never retry. Page loads record failures in `StoreState::error`;
/// writes surface them as `ClientError`.
pub struct Store {
    client: Client,
    state: StoreState,
}

impl Store {
    /// A token already held by `client` is taken as the logged-in session.
    pub fn new(client: Client) -> Self {
        let mut state = StoreState::default();
        if let Some(ref token) = client.token {
            state.set_token(token.clone());
        }
        Self { client, state }
    }

    pub fn state(&self) -> &StoreState {
        &self.state
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Store the session token and send it on every following request
    pub fn set_token(&mut self, token: String) {
        self.client.token = if token.is_empty() {
            None
        } else {
            Some(token.clone())
        };
        self.state.set_token(token);
    }

    pub fn set_user_name(&mut self, name: impl Into<String>) {
        self.state.set_user_name(name);
    }

    // =========================================================================
    // Page loads
    // =========================================================================

    /// Load the page at `/api{route}`. Returns whether a page was committed.
    pub async fn get_portfolio_json(&mut self, route: &str) -> bool {
        match self.client.page(route).await {
            Ok(page) => {
                self.state.set_page(page);
                true
            }
            Err(e) => {
                warn!("Loading page '{}' failed: {}", route, e);
                self.state.set_fail_state(e.user_message());
                false
            }
        }
    }

    /// Load the private dashboard with the stored token. `false` means the
    /// caller should send the user to the login page.
    pub async fn get_user_page(&mut self, user_name: &str) -> bool {
        match self.client.user_page(user_name).await {
            Ok(page) if !page.is_null() => {
                self.state.set_page(page);
                true
            }
            Ok(_) => {
                self.state.set_fail_state("Empty user page");
                false
            }
            Err(e) => {
                warn!("Loading user page '{}' failed: {}", user_name, e);
                self.state.set_fail_state(e.user_message());
                false
            }
        }
    }

    // =========================================================================
    // Auth and names
    // =========================================================================

    /// Log in. A rejected login is `Ok(false)` with the server's message in
    /// the fail state.
    pub async fn auth_user(&mut self, credentials: Credentials) -> ClientResult<bool> {
        let body = self.client.auth(&credentials).await?;
        let response: AuthResponse = serde_json::from_value(body)?;

        if !response.auth {
            info!("Login for '{}' rejected ({})", credentials.user_name, response.code);
            self.state.set_authorized(false);
            self.state.set_fail_state(
                response
                    .message
                    .unwrap_or_else(|| LOGIN_FAILED_MESSAGE.to_string()),
            );
            return Ok(false);
        }

        self.set_token(response.token.unwrap_or_default());
        self.state
            .set_user_name(response.user_name.unwrap_or(credentials.user_name));
        self.state.set_authorized(true);
        info!("Logged in as '{}'", self.state.user());
        Ok(true)
    }

    /// Ask the server whether `name` is free. The flag is cleared first so a
    /// failed check never leaves a stale "available".
    pub async fn check_name_available(
        &mut self,
        name: &str,
        page_type: PageType,
    ) -> ClientResult<bool> {
        self.state.set_name_available(false);

        let body = self.client.query_name(page_type, name).await?;
        let available = body
            .get("available")
            .and_then(Value::as_bool)
            .unwrap_or(false);

        self.state.set_name_available(available);
        Ok(available)
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Create a user or portfolio named `name`. Refused (`Ok(false)`) unless
    /// the last name check reported it available.
    pub async fn add_user_or_portfolio(
        &mut self,
        name: &str,
        data: Value,
        page_type: PageType,
    ) -> ClientResult<bool> {
        if !self.state.name_available() {
            debug!("Refusing to create {} '{}': name not confirmed free", page_type, name);
            return Ok(false);
        }

        // A new user owns itself; anything else belongs to the session user
        let owner = match page_type {
            PageType::User => name.to_string(),
            PageType::Portfolio | PageType::Project => self.state.user().to_string(),
        };

        self.client
            .create(page_type, name, &with_owner(data, &owner))
            .await?;
        self.state.set_name_available(false);
        Ok(true)
    }

    pub async fn add_project(&mut self, portfolio_name: &str, data: Value) -> ClientResult<bool> {
        let data = with_owner(data, self.state.user());
        self.client
            .create(PageType::Project, portfolio_name, &data)
            .await?;
        Ok(true)
    }

    /// `name` is the user or portfolio name, or the project id
    pub async fn update_element(
        &mut self,
        name: &str,
        data: Value,
        page_type: PageType,
    ) -> ClientResult<bool> {
        let data = with_owner(data, self.state.user());
        self.client.update(page_type, name, &data).await?;
        Ok(true)
    }

    pub async fn delete_element(&mut self, name: &str, page_type: PageType) -> ClientResult<bool> {
        let body = json!({ "userName": self.state.user() });
        self.client.delete(page_type, name, &body).await?;
        Ok(true)
    }

    /// Upload an image and return the URL it is served from
    pub async fn upload_image(
        &mut self,
        file_name: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> ClientResult<String> {
        let body = self.client.upload(file_name, bytes, content_type).await?;
        let uploaded: UploadedImage = serde_json::from_value(body)?;
        Ok(uploaded.url)
    }
}

/// Add `userName` to an object body unless the caller already set it
fn with_owner(mut data: Value, owner: &str) -> Value {
    if let Value::Object(ref mut map) = data {
        map.entry("userName")
            .or_insert_with(|| Value::String(owner.to_string()));
    }
    data
}
