pub mod channel_listener;
pub mod log_listener;
pub mod sensor_store;
