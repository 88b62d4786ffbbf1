use crate::sensors::domain::channel::SensorChannel;
use crate::sensors::domain::registry::ListenerRegistry;
use crate::shared::stage::translate_to_stage_coordinates;

use super::detected_face::DetectedFace;

/// Number of simultaneously tracked faces. Fixed: slot 0 drives the primary
/// face channels, slot 1 the secondary ones.
pub const FACE_SLOTS: usize = 2;

const MAX_FACE_SIZE: f32 = 100.0;

const DETECTED_CHANNELS: [SensorChannel; FACE_SLOTS] = [
    SensorChannel::FaceDetected,
    SensorChannel::SecondFaceDetected,
];
const X_CHANNELS: [SensorChannel; FACE_SLOTS] = [
    SensorChannel::FaceXPosition,
    SensorChannel::SecondFaceXPosition,
];
const Y_CHANNELS: [SensorChannel; FACE_SLOTS] = [
    SensorChannel::FaceYPosition,
    SensorChannel::SecondFaceYPosition,
];
const SIZE_CHANNELS: [SensorChannel; FACE_SLOTS] =
    [SensorChannel::FaceSize, SensorChannel::SecondFaceSize];

#[derive(Clone, Debug, Default)]
struct TrackedSlot {
    /// Identity of the last face this slot held; survives across frames so
    /// a returning identity lands in the same slot.
    last_identity: Option<i32>,
    /// The face observed this frame, cleared on every emission cycle.
    current_face: Option<DetectedFace>,
    /// Input index claimed this frame; blocks double assignment of one
    /// observation to both slots.
    claimed_index: Option<usize>,
}

/// Assigns per-frame face observations to two stable slots and emits their
/// presence, stage position, and relative size.
///
/// Per frame the caller drives, in order: `handle_existing_faces`,
/// `handle_new_faces`, `emit_and_reset`. Identity continuity always wins
/// over first-come assignment of new faces.
pub struct FaceTracker {
    slots: [TrackedSlot; FACE_SLOTS],
}

impl FaceTracker {
    pub fn new() -> Self {
        Self {
            slots: Default::default(),
        }
    }

    /// Re-attaches faces whose identity matches a slot's remembered
    /// identity. Faces without an identity are never matched here: an
    /// absent identifier says nothing about which earlier face this is.
    pub fn handle_existing_faces(&mut self, faces: &[DetectedFace]) {
        for (index, face) in faces.iter().enumerate() {
            let Some(identity) = face.identity else {
                continue;
            };
            for slot in &mut self.slots {
                if slot.last_identity == Some(identity) {
                    slot.current_face = Some(face.clone());
                    slot.claimed_index = Some(index);
                    break;
                }
            }
        }
    }

    /// Fills still-empty slots, in slot order, with the first unclaimed
    /// face whose identity no slot already remembers. The slot adopts the
    /// face's identity, even an absent one.
    pub fn handle_new_faces(&mut self, faces: &[DetectedFace]) {
        for slot_index in 0..FACE_SLOTS {
            if self.slots[slot_index].current_face.is_none() {
                self.attach_first_unclaimed(faces, slot_index);
            }
        }
    }

    fn attach_first_unclaimed(&mut self, faces: &[DetectedFace], slot_index: usize) {
        for (index, face) in faces.iter().enumerate() {
            if self.index_claimed(index) || self.identity_remembered(face.identity) {
                continue;
            }
            let slot = &mut self.slots[slot_index];
            slot.last_identity = face.identity;
            slot.current_face = Some(face.clone());
            slot.claimed_index = Some(index);
            return;
        }
    }

    fn index_claimed(&self, index: usize) -> bool {
        self.slots.iter().any(|s| s.claimed_index == Some(index))
    }

    fn identity_remembered(&self, identity: Option<i32>) -> bool {
        match identity {
            Some(id) => self.slots.iter().any(|s| s.last_identity == Some(id)),
            None => false,
        }
    }

    /// Emits both detection flags, then position and size for every
    /// occupied slot, then clears per-frame occupancy. Remembered
    /// identities survive for the next frame's continuity match.
    pub fn emit_and_reset(
        &mut self,
        listeners: &ListenerRegistry,
        image_width: u32,
        image_height: u32,
    ) {
        self.emit_detection_flags(listeners);

        for slot_index in 0..FACE_SLOTS {
            if let Some(face) = &self.slots[slot_index].current_face {
                let center = face.bounding_box.center();
                let position =
                    translate_to_stage_coordinates(center.x, center.y, image_width, image_height);
                let relative_size =
                    (face.bounding_box.height() / image_height as f32).min(1.0);
                let size = (MAX_FACE_SIZE * relative_size).round();

                listeners.broadcast_number(X_CHANNELS[slot_index], position.x);
                listeners.broadcast_number(Y_CHANNELS[slot_index], position.y);
                listeners.broadcast_number(SIZE_CHANNELS[slot_index], size);
            }
        }

        for slot in &mut self.slots {
            slot.current_face = None;
            slot.claimed_index = None;
        }
    }

    fn emit_detection_flags(&self, listeners: &ListenerRegistry) {
        for slot_index in 0..FACE_SLOTS {
            let value = if self.slots[slot_index].current_face.is_some() {
                1.0
            } else {
                0.0
            };
            listeners.broadcast_number(DETECTED_CHANNELS[slot_index], value);
        }
    }
}

impl Default for FaceTracker {
    fn default() -> Self {
        Self::new()
    }
}
