#![allow(dead_code)]

use pf_db::{SqlValue, Table, TableStore, connect_in_memory};

use serde_json::json;

/// In-memory store with the schema applied
pub async fn create_test_store() -> TableStore {
    let pool = connect_in_memory()
        .await
        .expect("Failed to create test pool");
    TableStore::new(pool)
}

/// Inserts a user with a placeholder hash, returning its id
pub async fn create_test_user(store: &TableStore, username: &str) -> i64 {
    store
        .insert_one(
            Table::Users,
            &["username", "pw", "email", "preferences"],
            vec![
                SqlValue::from(username),
                SqlValue::from("not-a-real-hash"),
                SqlValue::from(format!("{}@example.com", username)),
                SqlValue::from(json!({ "theme": "dark" })),
            ],
        )
        .await
        .expect("Failed to create test user")
        .last_insert_id
}

pub async fn create_test_portfolio(store: &TableStore, usersid: i64, name: &str) -> i64 {
    store
        .insert_one(
            Table::Portfolios,
            &["name", "usersid", "description", "technologies", "config", "template"],
            vec![
                SqlValue::from(name),
                SqlValue::from(usersid),
                SqlValue::from("Test portfolio description"),
                SqlValue::from(json!(["rust", "sqlite"])),
                SqlValue::from(json!({ "layout": "grid" })),
                SqlValue::from("classic"),
            ],
        )
        .await
        .expect("Failed to create test portfolio")
        .last_insert_id
}

pub async fn create_test_project(
    store: &TableStore,
    usersid: i64,
    portfolioid: i64,
    name: &str,
) -> i64 {
    store
        .insert_one(
            Table::Projects,
            &["portfolioid", "usersid", "projectname", "githuburl"],
            vec![
                SqlValue::from(portfolioid),
                SqlValue::from(usersid),
                SqlValue::from(name),
                SqlValue::from("https://github.com/example/project"),
            ],
        )
        .await
        .expect("Failed to create test project")
        .last_insert_id
}
