pub mod detection;
pub mod pipeline;
pub mod sensors;
pub mod shared;
