mod common;

use common::{create_test_portfolio, create_test_project, create_test_store, create_test_user};

use pf_db::{DbError, Filter, JoinSide, SqlValue, Table};

use googletest::prelude::*;
use serde_json::{Value, json};

#[tokio::test]
async fn given_inserted_user_when_selected_by_username_then_returns_requested_columns() {
    // Given: A stored user
    let store = create_test_store().await;
    let id = create_test_user(&store, "alice").await;

    // When: Selecting a subset of columns
    let rows = store
        .select_some_where(
            Table::Users,
            Filter::eq("username", "alice"),
            &["id", "email", "preferences", "location"],
        )
        .await
        .unwrap();

    // Then: One row with exactly those columns, JSON decoded
    assert_that!(rows, len(eq(1)));
    let row = &rows[0];
    assert_that!(row.len(), eq(4_usize));
    assert_that!(row["id"], eq(&json!(id)));
    assert_that!(row["email"], eq(&json!("alice@example.com")));
    assert_that!(row["preferences"], eq(&json!({ "theme": "dark" })));
    assert_that!(row["location"], eq(&Value::Null));

    let keys: Vec<&str> = row.keys().map(String::as_str).collect();
    assert_that!(keys, eq(&vec!["id", "email", "preferences", "location"]));
}

#[tokio::test]
async fn given_no_match_when_selecting_then_returns_empty() {
    let store = create_test_store().await;

    let rows = store
        .select_some_where(Table::Users, Filter::eq("username", "ghost"), &["id"])
        .await
        .unwrap();

    assert_that!(rows, is_empty());
}

#[tokio::test]
async fn given_unknown_column_when_selecting_then_rejected_before_query() {
    let store = create_test_store().await;

    let result = store
        .select_some_where(
            Table::Users,
            Filter::eq("username", "alice"),
            &["id", "password; DROP TABLE users"],
        )
        .await;

    assert!(matches!(result, Err(DbError::UnknownColumn { .. })));
}

#[tokio::test]
async fn given_injection_attempt_in_value_when_selecting_then_treated_as_data() {
    // Given: A stored user
    let store = create_test_store().await;
    create_test_user(&store, "alice").await;

    // When: The filter value carries SQL
    let rows = store
        .select_some_where(
            Table::Users,
            Filter::eq("username", "alice' OR '1'='1"),
            &["id"],
        )
        .await
        .unwrap();

    // Then: Nothing matches and the table is intact
    assert_that!(rows, is_empty());
    let still_there = store
        .select_some_where(Table::Users, Filter::eq("username", "alice"), &["id"])
        .await
        .unwrap();
    assert_that!(still_there, len(eq(1)));
}

#[tokio::test]
async fn given_mismatched_counts_when_inserting_then_returns_invalid_statement() {
    let store = create_test_store().await;

    let result = store
        .insert_one(
            Table::Users,
            &["username", "pw", "email"],
            vec![SqlValue::from("alice")],
        )
        .await;

    assert!(matches!(result, Err(DbError::InvalidStatement { .. })));
}

#[tokio::test]
async fn given_wrong_value_type_when_inserting_then_returns_type_mismatch() {
    let store = create_test_store().await;

    let result = store
        .insert_one(
            Table::Portfolios,
            &["name", "usersid"],
            vec![SqlValue::from("folio"), SqlValue::from("not-an-id")],
        )
        .await;

    assert!(matches!(result, Err(DbError::TypeMismatch { .. })));
}

#[tokio::test]
async fn given_taken_username_when_inserting_then_returns_unique_violation() {
    let store = create_test_store().await;
    create_test_user(&store, "alice").await;

    let result = store
        .insert_one(
            Table::Users,
            &["username", "pw", "email"],
            vec![
                SqlValue::from("alice"),
                SqlValue::from("hash"),
                SqlValue::from("other@example.com"),
            ],
        )
        .await;

    assert!(matches!(result, Err(DbError::UniqueViolation { .. })));
}

#[tokio::test]
async fn given_missing_required_column_when_inserting_then_returns_missing_field() {
    let store = create_test_store().await;

    let result = store
        .insert_one(
            Table::Users,
            &["username", "pw"],
            vec![SqlValue::from("bob"), SqlValue::from("hash")],
        )
        .await;

    assert!(matches!(result, Err(DbError::MissingField { .. })));
}

#[tokio::test]
async fn given_unknown_owner_when_inserting_portfolio_then_returns_missing_parent() {
    let store = create_test_store().await;

    let result = store
        .insert_one(
            Table::Portfolios,
            &["name", "usersid"],
            vec![SqlValue::from("orphan"), SqlValue::from(999_i64)],
        )
        .await;

    assert!(matches!(result, Err(DbError::MissingParent { .. })));
}

#[tokio::test]
async fn given_overlong_portfolio_name_when_inserting_then_check_constraint_fails() {
    let store = create_test_store().await;
    let usersid = create_test_user(&store, "alice").await;

    let result = store
        .insert_one(
            Table::Portfolios,
            &["name", "usersid"],
            vec![
                SqlValue::from("a-name-well-over-twenty-characters"),
                SqlValue::from(usersid),
            ],
        )
        .await;

    assert!(matches!(result, Err(DbError::CheckViolation { .. })));
}

#[tokio::test]
async fn given_portfolio_with_projects_when_joined_then_rows_merge_both_sides() {
    // Given: One portfolio with two projects
    let store = create_test_store().await;
    let usersid = create_test_user(&store, "alice").await;
    let portfolioid = create_test_portfolio(&store, usersid, "folio").await;
    let first = create_test_project(&store, usersid, portfolioid, "first").await;
    let second = create_test_project(&store, usersid, portfolioid, "second").await;

    // When: Joining portfolio and project columns on the portfolio name
    let rows = store
        .select_some_join(
            JoinSide::new(Table::Portfolios, &["name", "config", "public"], "id"),
            JoinSide::new(Table::Projects, &["id", "projectname"], "portfolioid"),
            Filter::eq("name", "folio"),
        )
        .await
        .unwrap();

    // Then: One row per project, each carrying the portfolio fields
    assert_that!(rows, len(eq(2)));
    let ids: Vec<&Value> = rows.iter().map(|r| &r["id"]).collect();
    assert_that!(ids, eq(&vec![&json!(first), &json!(second)]));
    for row in &rows {
        assert_that!(row["name"], eq(&json!("folio")));
        assert_that!(row["config"], eq(&json!({ "layout": "grid" })));
        assert_that!(row["public"], eq(&json!(true)));
    }
}

#[tokio::test]
async fn given_colliding_output_names_when_joining_then_returns_invalid_statement() {
    let store = create_test_store().await;

    let result = store
        .select_some_join(
            JoinSide::new(Table::Portfolios, &["id", "description"], "id"),
            JoinSide::new(Table::Projects, &["description"], "portfolioid"),
            Filter::eq("name", "folio"),
        )
        .await;

    assert!(matches!(result, Err(DbError::InvalidStatement { .. })));
}

#[tokio::test]
async fn given_existing_row_when_updated_then_reports_one_row_and_persists() {
    let store = create_test_store().await;
    let usersid = create_test_user(&store, "alice").await;

    let affected = store
        .update_one(
            Table::Users,
            vec![
                ("location", SqlValue::from("Lisbon")),
                ("preferences", SqlValue::from(json!({ "theme": "light" }))),
            ],
            vec![Filter::eq("id", usersid)],
        )
        .await
        .unwrap();

    assert_that!(affected, eq(1_u64));
    let rows = store
        .select_some_where(
            Table::Users,
            Filter::eq("id", usersid),
            &["location", "preferences"],
        )
        .await
        .unwrap();
    assert_that!(rows[0]["location"], eq(&json!("Lisbon")));
    assert_that!(rows[0]["preferences"], eq(&json!({ "theme": "light" })));
}

#[tokio::test]
async fn given_filters_matching_nothing_when_updating_then_reports_zero_rows() {
    // Given: A portfolio owned by alice
    let store = create_test_store().await;
    let alice = create_test_user(&store, "alice").await;
    let bob = create_test_user(&store, "bob").await;
    create_test_portfolio(&store, alice, "folio").await;

    // When: Updating it scoped to bob
    let affected = store
        .update_one(
            Table::Portfolios,
            vec![("description", SqlValue::from("hijacked"))],
            vec![Filter::eq("name", "folio"), Filter::eq("usersid", bob)],
        )
        .await
        .unwrap();

    // Then: Nothing changes
    assert_that!(affected, eq(0_u64));
}

#[tokio::test]
async fn given_empty_assignments_or_filters_when_updating_then_rejected() {
    let store = create_test_store().await;

    let no_assignments = store
        .update_one(Table::Users, vec![], vec![Filter::eq("id", 1_i64)])
        .await;
    let no_filters = store
        .update_one(Table::Users, vec![("location", SqlValue::from("x"))], vec![])
        .await;

    assert!(matches!(
        no_assignments,
        Err(DbError::InvalidStatement { .. })
    ));
    assert!(matches!(no_filters, Err(DbError::InvalidStatement { .. })));
}

#[tokio::test]
async fn given_user_with_portfolio_when_user_deleted_then_children_cascade() {
    // Given: A user owning a portfolio with a project
    let store = create_test_store().await;
    let usersid = create_test_user(&store, "alice").await;
    let portfolioid = create_test_portfolio(&store, usersid, "folio").await;
    create_test_project(&store, usersid, portfolioid, "first").await;

    // When: Deleting the user
    let affected = store
        .delete_one(Table::Users, vec![Filter::eq("username", "alice")])
        .await
        .unwrap();

    // Then: Portfolio and project rows are gone too
    assert_that!(affected, eq(1_u64));
    let portfolios = store
        .select_some_where(Table::Portfolios, Filter::eq("usersid", usersid), &["id"])
        .await
        .unwrap();
    let projects = store
        .select_some_where(Table::Projects, Filter::eq("usersid", usersid), &["id"])
        .await
        .unwrap();
    assert_that!(portfolios, is_empty());
    assert_that!(projects, is_empty());
}

#[tokio::test]
async fn given_no_filters_when_deleting_then_rejected() {
    let store = create_test_store().await;

    let result = store.delete_one(Table::Users, vec![]).await;

    assert!(matches!(result, Err(DbError::InvalidStatement { .. })));
}

#[tokio::test]
async fn given_open_pool_when_pinged_then_succeeds() {
    let store = create_test_store().await;

    assert_that!(store.ping().await, ok(anything()));
}
