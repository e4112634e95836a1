mod auth;
mod page_type;
mod portfolio;
mod user;
