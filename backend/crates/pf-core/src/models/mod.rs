pub mod auth;
pub mod page_type;
pub mod portfolio;
pub mod project;
pub mod user;
