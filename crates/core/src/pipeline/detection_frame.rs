use serde::{Deserialize, Serialize};

use crate::detection::domain::detected_face::DetectedFace;
use crate::detection::domain::landmark::{PoseLandmark, RecognizedText};

/// Everything one camera frame's analysis produced, vendor-normalized.
///
/// Serializable so detection sessions can be recorded and replayed
/// without a camera.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectionFrame {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub faces: Vec<DetectedFace>,
    #[serde(default)]
    pub landmarks: Vec<PoseLandmark>,
    #[serde(default)]
    pub text: Option<RecognizedText>,
}

impl DetectionFrame {
    /// A frame in which nothing was detected.
    pub fn empty(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            faces: Vec::new(),
            landmarks: Vec::new(),
            text: None,
        }
    }
}
