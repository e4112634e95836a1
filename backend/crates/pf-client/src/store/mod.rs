pub(crate) mod store;
pub(crate) mod store_state;

pub use store::Store;
pub use store_state::StoreState;
