pub mod detected_face;
pub mod face_tracker;
pub mod frame_normalizer;
pub mod landmark;
pub mod landmark_classifier;
