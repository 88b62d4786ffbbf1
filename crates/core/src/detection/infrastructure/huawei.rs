//! Adapter for HiAI-style detection results.
//!
//! This vendor reports a plain `i32` tracing identity with `-1` as the
//! absent sentinel, calls the face bounding box a "border", and models
//! pose as whole skeletons of typed joints in a 100-series code range
//! disjoint from other vendors.

use crate::detection::domain::detected_face::DetectedFace;
use crate::detection::domain::landmark::{LandmarkKind, PoseLandmark};
use crate::shared::bounding_box::BoundingBox;
use crate::shared::stage::PixelPoint;

/// The vendor's sentinel for "no tracking identity assigned".
pub const ABSENT_TRACING_IDENTITY: i32 = -1;

/// Joint-type codes as published by the vendor SDK.
pub mod joint_type {
    pub const RIGHT_SHOULDER: i32 = 101;
    pub const RIGHT_ELBOW: i32 = 102;
    pub const RIGHT_WRIST: i32 = 103;
    pub const LEFT_SHOULDER: i32 = 104;
    pub const LEFT_ELBOW: i32 = 105;
    pub const LEFT_WRIST: i32 = 106;
    pub const RIGHT_HIP: i32 = 107;
    pub const RIGHT_KNEE: i32 = 108;
    pub const RIGHT_ANKLE: i32 = 109;
    pub const LEFT_HIP: i32 = 110;
    pub const LEFT_KNEE: i32 = 111;
    pub const LEFT_ANKLE: i32 = 112;
    pub const HEAD_TOP: i32 = 113;
    pub const NECK: i32 = 114;
}

/// One face as the vendor reports it.
#[derive(Clone, Debug)]
pub struct HuaweiFace {
    pub tracing_identity: i32,
    pub border: BoundingBox,
}

/// One skeleton joint as the vendor reports it.
#[derive(Clone, Debug)]
pub struct HuaweiJoint {
    pub joint_type: i32,
    pub point_x: f32,
    pub point_y: f32,
}

/// One detected person's skeleton.
#[derive(Clone, Debug)]
pub struct HuaweiSkeleton {
    pub joints: Vec<HuaweiJoint>,
}

/// This vendor's joint-code table: 14 joints, head top and neck among
/// them. Codes not listed here translate to nothing.
const JOINT_KINDS: &[(i32, LandmarkKind)] = &[
    (joint_type::RIGHT_SHOULDER, LandmarkKind::RightShoulder),
    (joint_type::RIGHT_ELBOW, LandmarkKind::RightElbow),
    (joint_type::RIGHT_WRIST, LandmarkKind::RightWrist),
    (joint_type::LEFT_SHOULDER, LandmarkKind::LeftShoulder),
    (joint_type::LEFT_ELBOW, LandmarkKind::LeftElbow),
    (joint_type::LEFT_WRIST, LandmarkKind::LeftWrist),
    (joint_type::RIGHT_HIP, LandmarkKind::RightHip),
    (joint_type::RIGHT_KNEE, LandmarkKind::RightKnee),
    (joint_type::RIGHT_ANKLE, LandmarkKind::RightAnkle),
    (joint_type::LEFT_HIP, LandmarkKind::LeftHip),
    (joint_type::LEFT_KNEE, LandmarkKind::LeftKnee),
    (joint_type::LEFT_ANKLE, LandmarkKind::LeftAnkle),
    (joint_type::HEAD_TOP, LandmarkKind::HeadTop),
    (joint_type::NECK, LandmarkKind::Neck),
];

/// Canonical kind for a vendor joint code, `None` for unknown codes.
pub fn joint_kind(code: i32) -> Option<LandmarkKind> {
    JOINT_KINDS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, kind)| *kind)
}

/// The `-1` sentinel becomes an absent identity.
pub fn translate_faces(faces: &[HuaweiFace]) -> Vec<DetectedFace> {
    faces
        .iter()
        .map(|face| {
            let identity = if face.tracing_identity == ABSENT_TRACING_IDENTITY {
                None
            } else {
                Some(face.tracing_identity)
            };
            DetectedFace::new(identity, face.border)
        })
        .collect()
}

/// Only the first skeleton is consumed: the sensor surface models one
/// tracked body. Joints with unknown codes are dropped.
pub fn translate_skeletons(skeletons: &[HuaweiSkeleton]) -> Vec<PoseLandmark> {
    let Some(skeleton) = skeletons.first() else {
        return Vec::new();
    };
    skeleton
        .joints
        .iter()
        .filter_map(|joint| {
            joint_kind(joint.joint_type)
                .map(|kind| PoseLandmark::new(kind, PixelPoint::new(joint.point_x, joint.point_y)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn joint(joint_type: i32, x: f32, y: f32) -> HuaweiJoint {
        HuaweiJoint {
            joint_type,
            point_x: x,
            point_y: y,
        }
    }

    #[test]
    fn test_every_listed_code_maps() {
        for code in 101..=114 {
            assert!(joint_kind(code).is_some(), "code {code} unmapped");
        }
    }

    #[test]
    fn test_codes_outside_the_range_map_to_none() {
        assert!(joint_kind(100).is_none());
        assert!(joint_kind(115).is_none());
        // Other vendors' code ranges must not leak in.
        assert!(joint_kind(0).is_none());
    }

    #[test]
    fn test_no_two_codes_share_a_kind() {
        let mut seen = HashSet::new();
        for (code, kind) in JOINT_KINDS {
            assert!(seen.insert(*kind), "code {code} reuses {kind:?}");
        }
    }

    #[test]
    fn test_head_top_and_neck_are_vendor_specific_kinds() {
        assert_eq!(joint_kind(joint_type::HEAD_TOP), Some(LandmarkKind::HeadTop));
        assert_eq!(joint_kind(joint_type::NECK), Some(LandmarkKind::Neck));
    }

    #[test]
    fn test_translate_faces_maps_sentinel_to_none() {
        let faces = [
            HuaweiFace {
                tracing_identity: 12,
                border: BoundingBox::new(0.0, 0.0, 50.0, 50.0),
            },
            HuaweiFace {
                tracing_identity: ABSENT_TRACING_IDENTITY,
                border: BoundingBox::new(100.0, 0.0, 150.0, 50.0),
            },
        ];
        let translated = translate_faces(&faces);
        assert_eq!(translated[0].identity, Some(12));
        assert_eq!(translated[1].identity, None);
    }

    #[test]
    fn test_only_first_skeleton_is_consumed() {
        let skeletons = [
            HuaweiSkeleton {
                joints: vec![joint(joint_type::NECK, 10.0, 20.0)],
            },
            HuaweiSkeleton {
                joints: vec![joint(joint_type::HEAD_TOP, 30.0, 40.0)],
            },
        ];
        let translated = translate_skeletons(&skeletons);
        assert_eq!(translated.len(), 1);
        assert_eq!(translated[0].kind, LandmarkKind::Neck);
    }

    #[test]
    fn test_empty_skeleton_list_translates_to_nothing() {
        assert!(translate_skeletons(&[]).is_empty());
    }

    #[test]
    fn test_unknown_joint_codes_are_dropped() {
        let skeletons = [HuaweiSkeleton {
            joints: vec![
                joint(joint_type::LEFT_KNEE, 1.0, 2.0),
                joint(999, 3.0, 4.0),
            ],
        }];
        let translated = translate_skeletons(&skeletons);
        assert_eq!(translated.len(), 1);
        assert_eq!(translated[0].kind, LandmarkKind::LeftKnee);
        assert_eq!(translated[0].position.x, 1.0);
    }
}
