use crate::{AuthResponse, Credentials};

use serde_json::json;

#[test]
fn test_credentials_use_camel_case_user_name() {
    let creds: Credentials =
        serde_json::from_value(json!({ "userName": "alice", "password": "pw" })).unwrap();
    assert_eq!(creds.user_name, "alice");
}

#[test]
fn test_failed_auth_omits_token_fields() {
    let value = serde_json::to_value(AuthResponse::unknown_user("bob")).unwrap();

    assert_eq!(value["code"], 404);
    assert_eq!(value["auth"], false);
    assert!(value.get("token").is_none());
    assert!(value["message"].as_str().unwrap().contains("bob"));
}

#[test]
fn test_granted_auth_carries_token_and_user() {
    let value =
        serde_json::to_value(AuthResponse::granted("alice".into(), 7, "tok".into())).unwrap();

    assert_eq!(value["code"], 200);
    assert_eq!(value["auth"], true);
    assert_eq!(value["token"], "tok");
    assert_eq!(value["userName"], "alice");
    assert_eq!(value["usersid"], 7);
}
