use std::sync::Arc;

use crate::detection::domain::face_tracker::FaceTracker;
use crate::detection::domain::frame_normalizer::{update_pose_sensors, update_text_sensors};
use crate::sensors::domain::listener::SensorListener;
use crate::sensors::domain::registry::ListenerRegistry;

use super::detection_frame::DetectionFrame;

/// One detection session's bridge state: the listener set and the face
/// tracker, owned together and constructed once per session.
///
/// The host pipeline calls `process_frame` once per analyzed frame, from a
/// single producer, never reentrantly. Listener registration may happen
/// from other threads at any time.
pub struct DetectionSession {
    listeners: ListenerRegistry,
    tracker: FaceTracker,
}

impl DetectionSession {
    pub fn new() -> Self {
        Self {
            listeners: ListenerRegistry::new(),
            tracker: FaceTracker::new(),
        }
    }

    pub fn add_listener(&self, listener: Arc<dyn SensorListener>) {
        self.listeners.add_listener(listener);
    }

    pub fn remove_listener(&self, listener: &Arc<dyn SensorListener>) {
        self.listeners.remove_listener(listener);
    }

    pub fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    /// Runs one frame through the bridge: face slot assignment, text and
    /// pose emission, then the face emission/reset cycle.
    ///
    /// Empty detection lists are the common no-detection case, not an
    /// error; a fully empty frame emits only the two zero flags.
    pub fn process_frame(&mut self, frame: &DetectionFrame) {
        log::trace!(
            "frame {}x{}: {} faces, {} landmarks",
            frame.width,
            frame.height,
            frame.faces.len(),
            frame.landmarks.len()
        );

        self.tracker.handle_existing_faces(&frame.faces);
        self.tracker.handle_new_faces(&frame.faces);

        if let Some(text) = &frame.text {
            update_text_sensors(&self.listeners, text);
        }
        update_pose_sensors(&self.listeners, &frame.landmarks, frame.width, frame.height);

        self.tracker
            .emit_and_reset(&self.listeners, frame.width, frame.height);
    }
}

impl Default for DetectionSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::domain::detected_face::DetectedFace;
    use crate::detection::domain::landmark::{
        LandmarkKind, PoseLandmark, RecognizedText, TextBlock,
    };
    use crate::sensors::domain::channel::SensorChannel;
    use crate::sensors::infrastructure::sensor_store::SensorStore;
    use crate::shared::bounding_box::BoundingBox;
    use crate::shared::stage::PixelPoint;

    fn store_session() -> (DetectionSession, Arc<SensorStore>) {
        let session = DetectionSession::new();
        let store = Arc::new(SensorStore::new());
        session.add_listener(store.clone());
        (session, store)
    }

    fn frame_with_faces(faces: Vec<DetectedFace>) -> DetectionFrame {
        DetectionFrame {
            faces,
            ..DetectionFrame::empty(640, 480)
        }
    }

    #[test]
    fn test_empty_frame_emits_only_flags() {
        let (mut session, store) = store_session();
        session.process_frame(&DetectionFrame::empty(640, 480));

        assert_eq!(store.number(SensorChannel::FaceDetected), Some(0.0));
        assert_eq!(store.number(SensorChannel::SecondFaceDetected), Some(0.0));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_full_frame_reaches_every_surface() {
        let (mut session, store) = store_session();
        let frame = DetectionFrame {
            width: 640,
            height: 480,
            faces: vec![DetectedFace::new(
                Some(1),
                BoundingBox::new(280.0, 200.0, 360.0, 280.0),
            )],
            landmarks: vec![PoseLandmark::new(
                LandmarkKind::Nose,
                PixelPoint::new(320.0, 240.0),
            )],
            text: Some(RecognizedText::from_blocks(vec![TextBlock {
                text: "A".into(),
                bounds: BoundingBox::new(0.0, 0.0, 10.0, 10.0),
            }])),
        };
        session.process_frame(&frame);

        assert_eq!(store.number(SensorChannel::FaceDetected), Some(1.0));
        assert_eq!(store.number(SensorChannel::FaceXPosition), Some(0.0));
        assert_eq!(store.number(SensorChannel::FaceSize), Some(17.0));
        assert_eq!(store.number(SensorChannel::NoseX), Some(0.0));
        assert_eq!(store.number(SensorChannel::NoseY), Some(0.0));
        assert_eq!(store.text(SensorChannel::TextFromCamera), Some("A".into()));
        assert_eq!(store.number(SensorChannel::TextBlocksNumber), Some(1.0));
    }

    #[test]
    fn test_slot_continuity_across_process_frame_calls() {
        let (mut session, store) = store_session();
        session.process_frame(&frame_with_faces(vec![
            DetectedFace::new(Some(1), BoundingBox::new(0.0, 0.0, 100.0, 100.0)),
            DetectedFace::new(Some(2), BoundingBox::new(200.0, 0.0, 300.0, 100.0)),
        ]));

        // Only identity 2 remains; it must stay on the secondary channels.
        session.process_frame(&frame_with_faces(vec![DetectedFace::new(
            Some(2),
            BoundingBox::new(200.0, 0.0, 300.0, 100.0),
        )]));

        assert_eq!(store.number(SensorChannel::FaceDetected), Some(0.0));
        assert_eq!(store.number(SensorChannel::SecondFaceDetected), Some(1.0));
    }

    #[test]
    fn test_text_channels_keep_last_value_after_empty_frame() {
        let (mut session, store) = store_session();
        let mut frame = DetectionFrame::empty(640, 480);
        frame.text = Some(RecognizedText::from_blocks(vec![TextBlock {
            text: "EXIT".into(),
            bounds: BoundingBox::new(0.0, 0.0, 40.0, 10.0),
        }]));
        session.process_frame(&frame);

        // No text this frame: no emission, the store keeps the old value.
        session.process_frame(&DetectionFrame::empty(640, 480));
        assert_eq!(store.text(SensorChannel::TextFromCamera), Some("EXIT".into()));
    }

    #[test]
    fn test_remove_listener_stops_delivery() {
        let (mut session, store) = store_session();
        let handle: Arc<dyn crate::sensors::domain::listener::SensorListener> = store.clone();
        session.remove_listener(&handle);

        session.process_frame(&DetectionFrame::empty(640, 480));
        assert!(store.is_empty());
    }
}
