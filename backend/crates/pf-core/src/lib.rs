pub mod error;
pub mod models;
pub mod validation;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::auth::{AuthResponse, Credentials};
pub use models::page_type::PageType;
pub use models::portfolio::{
    NewPortfolio, PortfolioHeader, PortfolioPage, PortfolioSummary, PortfolioUpdate,
};
pub use models::project::{NewProject, ProjectEntry, ProjectUpdate};
pub use models::user::{NewUser, PublicProfile, UserPage, UserUpdate};
pub use validation::{
    MAX_PORTFOLIO_NAME_LENGTH, portfolio_name_length_message, validate_name, validate_portfolio_name,
    validate_user_name,
};

#[cfg(test)]
mod tests;
