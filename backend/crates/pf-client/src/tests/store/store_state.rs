use crate::StoreState;

use googletest::prelude::*;
use serde_json::json;

#[test]
fn given_default_state_then_nothing_is_set() {
    let state = StoreState::default();

    assert_that!(state.user_logged_in, eq(false));
    assert_that!(state.user_authorized, eq(false));
    assert_that!(state.name_available(), eq(false));
    assert_that!(state.user(), eq(""));
    assert_that!(state.token(), none());
    assert!(state.page_info().is_null());
}

#[test]
fn given_token_when_set_then_user_is_logged_in() {
    let mut state = StoreState::default();

    state.set_token("abc.def.ghi");

    assert_that!(state.user_logged_in, eq(true));
    assert_that!(state.token(), some(eq("abc.def.ghi")));
}

#[test]
fn given_empty_token_when_set_then_user_is_logged_out() {
    let mut state = StoreState::default();
    state.set_token("abc.def.ghi");

    state.set_token("");

    assert_that!(state.user_logged_in, eq(false));
    assert_that!(state.token(), none());
}

#[test]
fn given_public_page_then_not_hidden() {
    let mut state = StoreState::default();

    state.set_page(json!({ "public": true }));

    assert_that!(state.page_hidden(), eq(false));
}

#[test]
fn given_private_portfolio_page_then_hidden() {
    let mut state = StoreState::default();

    state.set_page(json!({ "portfolio": { "name": "folio", "public": false } }));

    assert_that!(state.page_hidden(), eq(true));
}

#[test]
fn given_page_without_flag_then_not_hidden() {
    let mut state = StoreState::default();

    state.set_page(json!({ "userName": "alice" }));

    assert_that!(state.page_hidden(), eq(false));
}

#[test]
fn given_mutations_then_getters_reflect_them() {
    let mut state = StoreState::default();

    state.set_user_name("alice");
    state.set_name_available(true);
    state.set_authorized(true);
    state.set_fail_state("boom");

    assert_that!(state.user(), eq("alice"));
    assert_that!(state.name_available(), eq(true));
    assert_that!(state.user_authorized, eq(true));
    assert_that!(state.error, eq("boom"));
}
