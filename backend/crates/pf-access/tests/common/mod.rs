#![allow(dead_code)]

use pf_access::AccessLayer;
use pf_auth::{HashParams, PasswordHasher, TokenService};
use pf_core::{Credentials, NewPortfolio, NewProject, NewUser};
use pf_db::{TableStore, connect_in_memory};

use serde_json::json;

pub const TEST_SECRET: &[u8] = b"test-secret-that-is-at-least-32-bytes-long";
pub const TEST_ISSUER: &str = "https://portfolio.test";
pub const TEST_PASSWORD: &str = "correct horse battery staple";

/// Access layer over a fresh in-memory database with cheap hashing
pub async fn create_test_access() -> AccessLayer {
    let pool = connect_in_memory()
        .await
        .expect("Failed to create test pool");
    let hasher = PasswordHasher::new(HashParams {
        memory_kib: 64,
        iterations: 1,
        parallelism: 1,
    })
    .expect("Failed to build hasher");
    AccessLayer::new(
        TableStore::new(pool),
        TokenService::new(TEST_SECRET, TEST_ISSUER, 3600),
        hasher,
    )
}

pub fn new_user(name: &str) -> NewUser {
    NewUser {
        user_name: name.to_string(),
        email: format!("{}@example.com", name),
        password: TEST_PASSWORD.to_string(),
        preferences: json!({ "theme": "dark" }),
        location: Some("Porto".to_string()),
        user_image: None,
        firstname: Some("Test".to_string()),
        lastname: Some("User".to_string()),
        linkedin: None,
        usergithuburl: Some(format!("https://github.com/{}", name)),
        userbio: Some("Writes software.".to_string()),
    }
}

pub fn new_portfolio(name: &str) -> NewPortfolio {
    NewPortfolio {
        portfolio_name: name.to_string(),
        description: Some("My work".to_string()),
        technologies: vec!["rust".to_string(), "sql".to_string()],
        config: json!({ "layout": "grid" }),
        template: Some("classic".to_string()),
        public: true,
    }
}

pub fn new_project(portfolioid: i64, name: &str) -> NewProject {
    NewProject {
        portfolioid,
        projectname: Some(name.to_string()),
        description: Some(format!("About {}", name)),
        imageurl: None,
        githuburl: Some(format!("https://github.com/example/{}", name)),
        liveurl: None,
    }
}

/// Registers `name` and logs in, returning the token
pub async fn register_and_login(access: &AccessLayer, name: &str) -> String {
    access
        .add_new_user(new_user(name))
        .await
        .expect("Failed to register user");
    let response = access
        .auth_user(Credentials {
            user_name: name.to_string(),
            password: TEST_PASSWORD.to_string(),
        })
        .await
        .expect("Failed to log in");
    response.token.expect("Login returned no token")
}
