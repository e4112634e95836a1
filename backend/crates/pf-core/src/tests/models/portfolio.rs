use crate::{NewPortfolio, PortfolioUpdate};

use serde_json::json;

#[test]
fn test_new_portfolio_defaults_to_public() {
    let portfolio: NewPortfolio =
        serde_json::from_value(json!({ "portfolioName": "folio" })).unwrap();

    assert!(portfolio.public);
    assert!(portfolio.technologies.is_empty());
    assert!(portfolio.config.is_null());
}

#[test]
fn test_portfolio_update_is_empty_only_without_fields() {
    assert!(PortfolioUpdate::default().is_empty());

    let update = PortfolioUpdate {
        public: Some(false),
        ..Default::default()
    };
    assert!(!update.is_empty());
}
