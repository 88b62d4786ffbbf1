use serde::{Deserialize, Serialize};

use crate::shared::bounding_box::BoundingBox;
use crate::shared::stage::PixelPoint;

/// Canonical anatomical points shared by all vendors.
///
/// Vendor adapters translate their own joint/landmark enumerations into
/// this set; head top and neck are only produced by skeleton-style vendors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LandmarkKind {
    HeadTop,
    Neck,
    Nose,
    LeftEyeInner,
    LeftEyeCenter,
    LeftEyeOuter,
    RightEyeInner,
    RightEyeCenter,
    RightEyeOuter,
    LeftEar,
    RightEar,
    MouthLeftCorner,
    MouthRightCorner,
    LeftShoulder,
    RightShoulder,
    LeftElbow,
    RightElbow,
    LeftWrist,
    RightWrist,
    LeftPinkyKnuckle,
    RightPinkyKnuckle,
    LeftIndexKnuckle,
    RightIndexKnuckle,
    LeftThumbKnuckle,
    RightThumbKnuckle,
    LeftHip,
    RightHip,
    LeftKnee,
    RightKnee,
    LeftAnkle,
    RightAnkle,
    LeftHeel,
    RightHeel,
    LeftFootIndex,
    RightFootIndex,
}

impl LandmarkKind {
    pub const ALL: [LandmarkKind; 35] = [
        LandmarkKind::HeadTop,
        LandmarkKind::Neck,
        LandmarkKind::Nose,
        LandmarkKind::LeftEyeInner,
        LandmarkKind::LeftEyeCenter,
        LandmarkKind::LeftEyeOuter,
        LandmarkKind::RightEyeInner,
        LandmarkKind::RightEyeCenter,
        LandmarkKind::RightEyeOuter,
        LandmarkKind::LeftEar,
        LandmarkKind::RightEar,
        LandmarkKind::MouthLeftCorner,
        LandmarkKind::MouthRightCorner,
        LandmarkKind::LeftShoulder,
        LandmarkKind::RightShoulder,
        LandmarkKind::LeftElbow,
        LandmarkKind::RightElbow,
        LandmarkKind::LeftWrist,
        LandmarkKind::RightWrist,
        LandmarkKind::LeftPinkyKnuckle,
        LandmarkKind::RightPinkyKnuckle,
        LandmarkKind::LeftIndexKnuckle,
        LandmarkKind::RightIndexKnuckle,
        LandmarkKind::LeftThumbKnuckle,
        LandmarkKind::RightThumbKnuckle,
        LandmarkKind::LeftHip,
        LandmarkKind::RightHip,
        LandmarkKind::LeftKnee,
        LandmarkKind::RightKnee,
        LandmarkKind::LeftAnkle,
        LandmarkKind::RightAnkle,
        LandmarkKind::LeftHeel,
        LandmarkKind::RightHeel,
        LandmarkKind::LeftFootIndex,
        LandmarkKind::RightFootIndex,
    ];
}

/// One pose point observed in the current frame, consumed and discarded
/// within that frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PoseLandmark {
    pub kind: LandmarkKind,
    pub position: PixelPoint,
}

impl PoseLandmark {
    pub fn new(kind: LandmarkKind, position: PixelPoint) -> Self {
        Self { kind, position }
    }
}

/// One recognized text region.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    pub text: String,
    pub bounds: BoundingBox,
}

/// The full text-recognition result for one frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecognizedText {
    pub text: String,
    pub blocks: Vec<TextBlock>,
}

impl RecognizedText {
    pub fn new(text: String, blocks: Vec<TextBlock>) -> Self {
        Self { text, blocks }
    }

    /// Builds the aggregate from blocks alone, joining block texts with
    /// newlines the way vendor aggregates do.
    pub fn from_blocks(blocks: Vec<TextBlock>) -> Self {
        let text = blocks
            .iter()
            .map(|b| b.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        Self { text, blocks }
    }
}
