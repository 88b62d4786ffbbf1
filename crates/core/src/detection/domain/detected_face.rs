use serde::{Deserialize, Serialize};

use crate::shared::bounding_box::BoundingBox;

/// One face observed in the current frame, already vendor-normalized.
///
/// `identity` is the vendor's tracking identifier. Vendors may omit it, in
/// which case the face cannot be matched to faces from earlier frames.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectedFace {
    pub identity: Option<i32>,
    pub bounding_box: BoundingBox,
}

impl DetectedFace {
    pub fn new(identity: Option<i32>, bounding_box: BoundingBox) -> Self {
        Self {
            identity,
            bounding_box,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction() {
        let face = DetectedFace::new(Some(7), BoundingBox::new(0.0, 0.0, 50.0, 50.0));
        assert_eq!(face.identity, Some(7));
        assert_eq!(face.bounding_box.width(), 50.0);
    }
}
