use crate::PageType;

use std::str::FromStr;

#[test]
fn test_page_type_round_trips_through_str() {
    for page_type in [PageType::User, PageType::Portfolio, PageType::Project] {
        assert_eq!(PageType::from_str(page_type.as_str()).unwrap(), page_type);
    }
}

#[test]
fn test_unknown_page_type_is_rejected() {
    assert!(PageType::from_str("dashboard").is_err());
}
