mod store_state;
