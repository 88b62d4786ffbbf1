use crate::sensors::domain::channel::SensorChannel;

use super::landmark::LandmarkKind;

/// Canonical landmark fan-out: each anatomical point and its X/Y channels.
///
/// A flat table rather than a match so tests and anything enumerating the
/// pose sensor surface can iterate it.
pub const LANDMARK_CHANNELS: &[(LandmarkKind, SensorChannel, SensorChannel)] = &[
    (
        LandmarkKind::HeadTop,
        SensorChannel::HeadTopX,
        SensorChannel::HeadTopY,
    ),
    (
        LandmarkKind::Neck,
        SensorChannel::NeckX,
        SensorChannel::NeckY,
    ),
    (
        LandmarkKind::Nose,
        SensorChannel::NoseX,
        SensorChannel::NoseY,
    ),
    (
        LandmarkKind::LeftEyeInner,
        SensorChannel::LeftEyeInnerX,
        SensorChannel::LeftEyeInnerY,
    ),
    (
        LandmarkKind::LeftEyeCenter,
        SensorChannel::LeftEyeCenterX,
        SensorChannel::LeftEyeCenterY,
    ),
    (
        LandmarkKind::LeftEyeOuter,
        SensorChannel::LeftEyeOuterX,
        SensorChannel::LeftEyeOuterY,
    ),
    (
        LandmarkKind::RightEyeInner,
        SensorChannel::RightEyeInnerX,
        SensorChannel::RightEyeInnerY,
    ),
    (
        LandmarkKind::RightEyeCenter,
        SensorChannel::RightEyeCenterX,
        SensorChannel::RightEyeCenterY,
    ),
    (
        LandmarkKind::RightEyeOuter,
        SensorChannel::RightEyeOuterX,
        SensorChannel::RightEyeOuterY,
    ),
    (
        LandmarkKind::LeftEar,
        SensorChannel::LeftEarX,
        SensorChannel::LeftEarY,
    ),
    (
        LandmarkKind::RightEar,
        SensorChannel::RightEarX,
        SensorChannel::RightEarY,
    ),
    (
        LandmarkKind::MouthLeftCorner,
        SensorChannel::MouthLeftCornerX,
        SensorChannel::MouthLeftCornerY,
    ),
    (
        LandmarkKind::MouthRightCorner,
        SensorChannel::MouthRightCornerX,
        SensorChannel::MouthRightCornerY,
    ),
    (
        LandmarkKind::LeftShoulder,
        SensorChannel::LeftShoulderX,
        SensorChannel::LeftShoulderY,
    ),
    (
        LandmarkKind::RightShoulder,
        SensorChannel::RightShoulderX,
        SensorChannel::RightShoulderY,
    ),
    (
        LandmarkKind::LeftElbow,
        SensorChannel::LeftElbowX,
        SensorChannel::LeftElbowY,
    ),
    (
        LandmarkKind::RightElbow,
        SensorChannel::RightElbowX,
        SensorChannel::RightElbowY,
    ),
    (
        LandmarkKind::LeftWrist,
        SensorChannel::LeftWristX,
        SensorChannel::LeftWristY,
    ),
    (
        LandmarkKind::RightWrist,
        SensorChannel::RightWristX,
        SensorChannel::RightWristY,
    ),
    (
        LandmarkKind::LeftPinkyKnuckle,
        SensorChannel::LeftPinkyKnuckleX,
        SensorChannel::LeftPinkyKnuckleY,
    ),
    (
        LandmarkKind::RightPinkyKnuckle,
        SensorChannel::RightPinkyKnuckleX,
        SensorChannel::RightPinkyKnuckleY,
    ),
    (
        LandmarkKind::LeftIndexKnuckle,
        SensorChannel::LeftIndexKnuckleX,
        SensorChannel::LeftIndexKnuckleY,
    ),
    (
        LandmarkKind::RightIndexKnuckle,
        SensorChannel::RightIndexKnuckleX,
        SensorChannel::RightIndexKnuckleY,
    ),
    (
        LandmarkKind::LeftThumbKnuckle,
        SensorChannel::LeftThumbKnuckleX,
        SensorChannel::LeftThumbKnuckleY,
    ),
    (
        LandmarkKind::RightThumbKnuckle,
        SensorChannel::RightThumbKnuckleX,
        SensorChannel::RightThumbKnuckleY,
    ),
    (
        LandmarkKind::LeftHip,
        SensorChannel::LeftHipX,
        SensorChannel::LeftHipY,
    ),
    (
        LandmarkKind::RightHip,
        SensorChannel::RightHipX,
        SensorChannel::RightHipY,
    ),
    (
        LandmarkKind::LeftKnee,
        SensorChannel::LeftKneeX,
        SensorChannel::LeftKneeY,
    ),
    (
        LandmarkKind::RightKnee,
        SensorChannel::RightKneeX,
        SensorChannel::RightKneeY,
    ),
    (
        LandmarkKind::LeftAnkle,
        SensorChannel::LeftAnkleX,
        SensorChannel::LeftAnkleY,
    ),
    (
        LandmarkKind::RightAnkle,
        SensorChannel::RightAnkleX,
        SensorChannel::RightAnkleY,
    ),
    (
        LandmarkKind::LeftHeel,
        SensorChannel::LeftHeelX,
        SensorChannel::LeftHeelY,
    ),
    (
        LandmarkKind::RightHeel,
        SensorChannel::RightHeelX,
        SensorChannel::RightHeelY,
    ),
    (
        LandmarkKind::LeftFootIndex,
        SensorChannel::LeftFootIndexX,
        SensorChannel::LeftFootIndexY,
    ),
    (
        LandmarkKind::RightFootIndex,
        SensorChannel::RightFootIndexX,
        SensorChannel::RightFootIndexY,
    ),
];

/// The X/Y channel pair for a canonical landmark.
pub fn channel_pair(kind: LandmarkKind) -> Option<(SensorChannel, SensorChannel)> {
    LANDMARK_CHANNELS
        .iter()
        .find(|(k, _, _)| *k == kind)
        .map(|(_, x, y)| (*x, *y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_is_total_over_landmark_kinds() {
        for kind in LandmarkKind::ALL {
            assert!(channel_pair(kind).is_some(), "{kind:?} has no channel pair");
        }
    }

    #[test]
    fn test_each_kind_appears_once() {
        let mut seen = HashSet::new();
        for (kind, _, _) in LANDMARK_CHANNELS {
            assert!(seen.insert(*kind), "{kind:?} mapped twice");
        }
    }

    #[test]
    fn test_channels_are_not_shared_between_kinds() {
        let mut seen = HashSet::new();
        for (kind, x, y) in LANDMARK_CHANNELS {
            assert!(seen.insert(*x), "{kind:?} reuses {x:?}");
            assert!(seen.insert(*y), "{kind:?} reuses {y:?}");
        }
    }

    #[test]
    fn test_pairs_are_matching_x_y_names() {
        for (_, x, y) in LANDMARK_CHANNELS {
            let x_name = x.as_str();
            let y_name = y.as_str();
            assert!(x_name.ends_with("_X"), "{x_name} is not an X channel");
            assert!(y_name.ends_with("_Y"), "{y_name} is not a Y channel");
            assert_eq!(
                x_name.trim_end_matches("_X"),
                y_name.trim_end_matches("_Y")
            );
        }
    }

    #[test]
    fn test_spot_checks() {
        assert_eq!(
            channel_pair(LandmarkKind::Nose),
            Some((SensorChannel::NoseX, SensorChannel::NoseY))
        );
        assert_eq!(
            channel_pair(LandmarkKind::LeftEyeCenter),
            Some((SensorChannel::LeftEyeCenterX, SensorChannel::LeftEyeCenterY))
        );
        assert_eq!(
            channel_pair(LandmarkKind::HeadTop),
            Some((SensorChannel::HeadTopX, SensorChannel::HeadTopY))
        );
    }
}
