use serde::Serialize;
use serde_json::Value;

/// Client-side mirror of the server state the UI renders from.
///
/// Fields change only through the mutation methods below; `Store` actions
/// call them after each HTTP round trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StoreState {
    pub user_logged_in: bool,
    pub user_name: String,
    pub user_token: String,
    pub user_authorized: bool,
    pub current_page_json: Value,
    pub name_available: bool,
    /// Last failure message shown to the user
    pub error: String,
}

impl StoreState {
    // =========================================================================
    // Mutations
    // =========================================================================

    pub fn set_page(&mut self, page: Value) {
        self.current_page_json = page;
    }

    pub fn set_name_available(&mut self, available: bool) {
        self.name_available = available;
    }

    pub fn set_authorized(&mut self, authorized: bool) {
        self.user_authorized = authorized;
    }

    pub fn set_fail_state(&mut self, error: impl Into<String>) {
        self.error = error.into();
    }

    /// Storing a non-empty token also marks the user as logged in
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.user_token = token.into();
        self.user_logged_in = !self.user_token.is_empty();
    }

    pub fn set_user_name(&mut self, name: impl Into<String>) {
        self.user_name = name.into();
    }

    // =========================================================================
    // Getters
    // =========================================================================

    pub fn page_info(&self) -> &Value {
        &self.current_page_json
    }

    /// True when the loaded page is flagged non-public. Portfolio pages carry
    /// the flag under `portfolio.public`; pages without one are visible.
    pub fn page_hidden(&self) -> bool {
        let public = self
            .current_page_json
            .get("public")
            .or_else(|| self.current_page_json.pointer("/portfolio/public"))
            .and_then(Value::as_bool)
            .unwrap_or(true);
        !public
    }

    pub fn name_available(&self) -> bool {
        self.name_available
    }

    pub fn user(&self) -> &str {
        &self.user_name
    }

    pub fn token(&self) -> Option<&str> {
        if self.user_token.is_empty() {
            None
        } else {
            Some(&self.user_token)
        }
    }
}
