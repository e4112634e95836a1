pub mod error;
pub mod extractors;
pub mod owner_request;
pub mod portfolios;
pub mod projects;
pub mod responses;
pub mod upload;
pub mod users;
