pub mod create_portfolio_request;
pub mod portfolios;
pub mod update_portfolio_request;
