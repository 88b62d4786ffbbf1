pub mod detection_frame;
pub mod detection_session;
pub mod infrastructure;
