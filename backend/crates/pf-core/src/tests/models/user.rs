use crate::{NewUser, UserUpdate};

use serde_json::json;

#[test]
fn test_new_user_accepts_legacy_pw_key() {
    let user: NewUser = serde_json::from_value(json!({
        "userName": "alice",
        "email": "alice@example.com",
        "pw": "secret",
        "preferences": { "theme": "dark" },
        "userImage": "https://img.example.com/a.png"
    }))
    .unwrap();

    assert_eq!(user.password, "secret");
    assert_eq!(user.preferences["theme"], "dark");
    assert_eq!(
        user.user_image.as_deref(),
        Some("https://img.example.com/a.png")
    );
    assert_eq!(user.location, None);
}

#[test]
fn test_user_update_serializes_only_set_fields() {
    let update = UserUpdate {
        userbio: Some("hello".into()),
        ..Default::default()
    };

    let value = serde_json::to_value(&update).unwrap();
    assert_eq!(value, json!({ "userbio": "hello" }));
    assert!(!update.is_empty());
    assert!(UserUpdate::default().is_empty());
}
