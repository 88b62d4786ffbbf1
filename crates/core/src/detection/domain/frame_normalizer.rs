use crate::sensors::domain::channel::SensorChannel;
use crate::sensors::domain::registry::ListenerRegistry;
use crate::shared::stage::translate_to_stage_coordinates;

use super::landmark::{PoseLandmark, RecognizedText};
use super::landmark_classifier::channel_pair;

/// Emits the recognized string and block count, or nothing when no text
/// was recognized.
pub fn update_text_sensors(listeners: &ListenerRegistry, text: &RecognizedText) {
    if text.blocks.is_empty() {
        return;
    }
    listeners.broadcast_text(SensorChannel::TextFromCamera, &text.text);
    listeners.broadcast_number(SensorChannel::TextBlocksNumber, text.blocks.len() as f32);
}

/// Emits a stage-translated X/Y pair for every landmark present.
///
/// Landmarks without a channel pair are skipped without affecting the
/// rest of the frame.
pub fn update_pose_sensors(
    listeners: &ListenerRegistry,
    landmarks: &[PoseLandmark],
    image_width: u32,
    image_height: u32,
) {
    for landmark in landmarks {
        let Some((x_channel, y_channel)) = channel_pair(landmark.kind) else {
            continue;
        };
        let position = translate_to_stage_coordinates(
            landmark.position.x,
            landmark.position.y,
            image_width,
            image_height,
        );
        listeners.broadcast_number(x_channel, position.x);
        listeners.broadcast_number(y_channel, position.y);
    }
}
