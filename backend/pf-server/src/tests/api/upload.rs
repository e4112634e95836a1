use crate::extension_for;

#[test]
fn test_accepted_image_types_map_to_extensions() {
    assert_eq!(extension_for("image/png"), Some("png"));
    assert_eq!(extension_for("image/jpeg"), Some("jpg"));
    assert_eq!(extension_for("image/webp"), Some("webp"));
}

#[test]
fn test_other_types_rejected() {
    assert_eq!(extension_for("text/html"), None);
    assert_eq!(extension_for("image/svg+xml"), None);
    assert_eq!(extension_for(""), None);
}
