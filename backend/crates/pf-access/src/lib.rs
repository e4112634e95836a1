//! Access and authorization layer.
//!
//! Composes the table primitives into user, portfolio and project
//! operations. Reads of public pages are open; every write except
//! registration requires a token issued to the acting user, and writes to
//! portfolios and projects only ever touch rows that user owns.

pub mod access_layer;
pub mod error;
mod lookups;
mod pages;
mod portfolios;
mod projects;
mod users;

pub use access_layer::AccessLayer;
pub use error::{
    AccessError, MISSING_FIELD_MESSAGE, MISSING_PARENT_MESSAGE, NAME_TAKEN_MESSAGE, Result,
};
