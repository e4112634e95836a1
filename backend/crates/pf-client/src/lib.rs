//! pf-client library
//!
//! HTTP client for the portfolio server and the client-side state store that
//! drives it.

pub(crate) mod client;
pub(crate) mod store;

#[cfg(test)]
mod tests;

pub use client::{Client, ClientError, ClientResult};
pub use store::{Store, StoreState};
