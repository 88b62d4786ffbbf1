//! Adapter for ML-Kit-style detection results.
//!
//! Mirrors the vendor's data shapes (optional tracking id on faces,
//! integer landmark-type codes on pose points) and owns the vendor's
//! landmark-code table. Everything downstream sees only normalized types.

use crate::detection::domain::detected_face::DetectedFace;
use crate::detection::domain::landmark::{
    LandmarkKind, PoseLandmark, RecognizedText, TextBlock,
};
use crate::shared::bounding_box::BoundingBox;
use crate::shared::stage::PixelPoint;

/// Landmark-type codes as published by the vendor SDK.
pub mod landmark_type {
    pub const NOSE: i32 = 0;
    pub const LEFT_EYE_INNER: i32 = 1;
    pub const LEFT_EYE: i32 = 2;
    pub const LEFT_EYE_OUTER: i32 = 3;
    pub const RIGHT_EYE_INNER: i32 = 4;
    pub const RIGHT_EYE: i32 = 5;
    pub const RIGHT_EYE_OUTER: i32 = 6;
    pub const LEFT_EAR: i32 = 7;
    pub const RIGHT_EAR: i32 = 8;
    pub const LEFT_MOUTH: i32 = 9;
    pub const RIGHT_MOUTH: i32 = 10;
    pub const LEFT_SHOULDER: i32 = 11;
    pub const RIGHT_SHOULDER: i32 = 12;
    pub const LEFT_ELBOW: i32 = 13;
    pub const RIGHT_ELBOW: i32 = 14;
    pub const LEFT_WRIST: i32 = 15;
    pub const RIGHT_WRIST: i32 = 16;
    pub const LEFT_PINKY: i32 = 17;
    pub const RIGHT_PINKY: i32 = 18;
    pub const LEFT_INDEX: i32 = 19;
    pub const RIGHT_INDEX: i32 = 20;
    pub const LEFT_THUMB: i32 = 21;
    pub const RIGHT_THUMB: i32 = 22;
    pub const LEFT_HIP: i32 = 23;
    pub const RIGHT_HIP: i32 = 24;
    pub const LEFT_KNEE: i32 = 25;
    pub const RIGHT_KNEE: i32 = 26;
    pub const LEFT_ANKLE: i32 = 27;
    pub const RIGHT_ANKLE: i32 = 28;
    pub const LEFT_HEEL: i32 = 29;
    pub const RIGHT_HEEL: i32 = 30;
    pub const LEFT_FOOT_INDEX: i32 = 31;
    pub const RIGHT_FOOT_INDEX: i32 = 32;
}

/// One face as the vendor reports it.
#[derive(Clone, Debug)]
pub struct MlKitFace {
    pub tracking_id: Option<i32>,
    pub bounding_box: BoundingBox,
}

/// One pose point as the vendor reports it.
#[derive(Clone, Debug)]
pub struct MlKitPoseLandmark {
    pub landmark_type: i32,
    pub position: PixelPoint,
}

/// One recognized text block as the vendor reports it.
#[derive(Clone, Debug)]
pub struct MlKitTextBlock {
    pub text: String,
    pub bounding_box: BoundingBox,
}

/// The vendor's aggregate text result: full string plus blocks.
#[derive(Clone, Debug)]
pub struct MlKitText {
    pub text: String,
    pub blocks: Vec<MlKitTextBlock>,
}

/// This vendor's landmark-code table. Codes not listed here (future SDK
/// additions) translate to nothing.
const LANDMARK_KINDS: &[(i32, LandmarkKind)] = &[
    (landmark_type::NOSE, LandmarkKind::Nose),
    (landmark_type::LEFT_EYE_INNER, LandmarkKind::LeftEyeInner),
    (landmark_type::LEFT_EYE, LandmarkKind::LeftEyeCenter),
    (landmark_type::LEFT_EYE_OUTER, LandmarkKind::LeftEyeOuter),
    (landmark_type::RIGHT_EYE_INNER, LandmarkKind::RightEyeInner),
    (landmark_type::RIGHT_EYE, LandmarkKind::RightEyeCenter),
    (landmark_type::RIGHT_EYE_OUTER, LandmarkKind::RightEyeOuter),
    (landmark_type::LEFT_EAR, LandmarkKind::LeftEar),
    (landmark_type::RIGHT_EAR, LandmarkKind::RightEar),
    (landmark_type::LEFT_MOUTH, LandmarkKind::MouthLeftCorner),
    (landmark_type::RIGHT_MOUTH, LandmarkKind::MouthRightCorner),
    (landmark_type::LEFT_SHOULDER, LandmarkKind::LeftShoulder),
    (landmark_type::RIGHT_SHOULDER, LandmarkKind::RightShoulder),
    (landmark_type::LEFT_ELBOW, LandmarkKind::LeftElbow),
    (landmark_type::RIGHT_ELBOW, LandmarkKind::RightElbow),
    (landmark_type::LEFT_WRIST, LandmarkKind::LeftWrist),
    (landmark_type::RIGHT_WRIST, LandmarkKind::RightWrist),
    (landmark_type::LEFT_PINKY, LandmarkKind::LeftPinkyKnuckle),
    (landmark_type::RIGHT_PINKY, LandmarkKind::RightPinkyKnuckle),
    (landmark_type::LEFT_INDEX, LandmarkKind::LeftIndexKnuckle),
    (landmark_type::RIGHT_INDEX, LandmarkKind::RightIndexKnuckle),
    (landmark_type::LEFT_THUMB, LandmarkKind::LeftThumbKnuckle),
    (landmark_type::RIGHT_THUMB, LandmarkKind::RightThumbKnuckle),
    (landmark_type::LEFT_HIP, LandmarkKind::LeftHip),
    (landmark_type::RIGHT_HIP, LandmarkKind::RightHip),
    (landmark_type::LEFT_KNEE, LandmarkKind::LeftKnee),
    (landmark_type::RIGHT_KNEE, LandmarkKind::RightKnee),
    (landmark_type::LEFT_ANKLE, LandmarkKind::LeftAnkle),
    (landmark_type::RIGHT_ANKLE, LandmarkKind::RightAnkle),
    (landmark_type::LEFT_HEEL, LandmarkKind::LeftHeel),
    (landmark_type::RIGHT_HEEL, LandmarkKind::RightHeel),
    (landmark_type::LEFT_FOOT_INDEX, LandmarkKind::LeftFootIndex),
    (
        landmark_type::RIGHT_FOOT_INDEX,
        LandmarkKind::RightFootIndex,
    ),
];

/// Canonical kind for a vendor landmark code, `None` for unknown codes.
pub fn landmark_kind(code: i32) -> Option<LandmarkKind> {
    LANDMARK_KINDS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, kind)| *kind)
}

pub fn translate_faces(faces: &[MlKitFace]) -> Vec<DetectedFace> {
    faces
        .iter()
        .map(|face| DetectedFace::new(face.tracking_id, face.bounding_box))
        .collect()
}

/// Landmarks with unknown codes are dropped, not errors.
pub fn translate_pose(landmarks: &[MlKitPoseLandmark]) -> Vec<PoseLandmark> {
    landmarks
        .iter()
        .filter_map(|landmark| {
            landmark_kind(landmark.landmark_type)
                .map(|kind| PoseLandmark::new(kind, landmark.position))
        })
        .collect()
}

pub fn translate_text(text: &MlKitText) -> RecognizedText {
    RecognizedText::new(
        text.text.clone(),
        text.blocks
            .iter()
            .map(|block| TextBlock {
                text: block.text.clone(),
                bounds: block.bounding_box,
            })
            .collect(),
    )
}
