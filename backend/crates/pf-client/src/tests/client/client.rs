use crate::{Client, ClientError};

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = Client::new("http://localhost:3000/", None);
    assert_eq!(client.base_url, "http://localhost:3000");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = Client::new("http://localhost:3000", None);
    assert_eq!(client.base_url, "http://localhost:3000");
}

#[test]
fn test_token_stored() {
    let client = Client::new("http://localhost:3000", Some("abc.def.ghi"));
    assert_eq!(client.token, Some("abc.def.ghi".to_string()));
}

#[test]
fn test_token_none() {
    let client = Client::new("http://localhost:3000", None);
    assert!(client.token.is_none());
}

#[test]
fn test_api_error_user_message_is_server_message() {
    let err = ClientError::api_error("CONFLICT", 409, "Sorry, this name is already taken");
    assert_eq!(err.user_message(), "Sorry, this name is already taken");
    assert!(err.to_string().contains("CONFLICT"));
    assert!(err.to_string().contains("409"));
}
