mod client;
mod store;
