use std::fmt;

/// Every virtual sensor the scripting runtime can poll.
///
/// Channels carry overwrite semantics: a new emission replaces the previous
/// value, nothing is appended or queued.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SensorChannel {
    // Face tracking, primary slot.
    FaceDetected,
    FaceXPosition,
    FaceYPosition,
    FaceSize,
    // Face tracking, secondary slot.
    SecondFaceDetected,
    SecondFaceXPosition,
    SecondFaceYPosition,
    SecondFaceSize,
    // Text recognition.
    TextFromCamera,
    TextBlocksNumber,
    // Body pose, one X/Y pair per anatomical point.
    HeadTopX,
    HeadTopY,
    NeckX,
    NeckY,
    NoseX,
    NoseY,
    LeftEyeInnerX,
    LeftEyeInnerY,
    LeftEyeCenterX,
    LeftEyeCenterY,
    LeftEyeOuterX,
    LeftEyeOuterY,
    RightEyeInnerX,
    RightEyeInnerY,
    RightEyeCenterX,
    RightEyeCenterY,
    RightEyeOuterX,
    RightEyeOuterY,
    LeftEarX,
    LeftEarY,
    RightEarX,
    RightEarY,
    MouthLeftCornerX,
    MouthLeftCornerY,
    MouthRightCornerX,
    MouthRightCornerY,
    LeftShoulderX,
    LeftShoulderY,
    RightShoulderX,
    RightShoulderY,
    LeftElbowX,
    LeftElbowY,
    RightElbowX,
    RightElbowY,
    LeftWristX,
    LeftWristY,
    RightWristX,
    RightWristY,
    LeftPinkyKnuckleX,
    LeftPinkyKnuckleY,
    RightPinkyKnuckleX,
    RightPinkyKnuckleY,
    LeftIndexKnuckleX,
    LeftIndexKnuckleY,
    RightIndexKnuckleX,
    RightIndexKnuckleY,
    LeftThumbKnuckleX,
    LeftThumbKnuckleY,
    RightThumbKnuckleX,
    RightThumbKnuckleY,
    LeftHipX,
    LeftHipY,
    RightHipX,
    RightHipY,
    LeftKneeX,
    LeftKneeY,
    RightKneeX,
    RightKneeY,
    LeftAnkleX,
    LeftAnkleY,
    RightAnkleX,
    RightAnkleY,
    LeftHeelX,
    LeftHeelY,
    RightHeelX,
    RightHeelY,
    LeftFootIndexX,
    LeftFootIndexY,
    RightFootIndexX,
    RightFootIndexY,
}

impl SensorChannel {
    /// Stable name used by the scripting runtime and replay output.
    pub fn as_str(&self) -> &'static str {
        match self {
            SensorChannel::FaceDetected => "FACE_DETECTED",
            SensorChannel::FaceXPosition => "FACE_X_POSITION",
            SensorChannel::FaceYPosition => "FACE_Y_POSITION",
            SensorChannel::FaceSize => "FACE_SIZE",
            SensorChannel::SecondFaceDetected => "SECOND_FACE_DETECTED",
            SensorChannel::SecondFaceXPosition => "SECOND_FACE_X_POSITION",
            SensorChannel::SecondFaceYPosition => "SECOND_FACE_Y_POSITION",
            SensorChannel::SecondFaceSize => "SECOND_FACE_SIZE",
            SensorChannel::TextFromCamera => "TEXT_FROM_CAMERA",
            SensorChannel::TextBlocksNumber => "TEXT_BLOCKS_NUMBER",
            SensorChannel::HeadTopX => "HEAD_TOP_X",
            SensorChannel::HeadTopY => "HEAD_TOP_Y",
            SensorChannel::NeckX => "NECK_X",
            SensorChannel::NeckY => "NECK_Y",
            SensorChannel::NoseX => "NOSE_X",
            SensorChannel::NoseY => "NOSE_Y",
            SensorChannel::LeftEyeInnerX => "LEFT_EYE_INNER_X",
            SensorChannel::LeftEyeInnerY => "LEFT_EYE_INNER_Y",
            SensorChannel::LeftEyeCenterX => "LEFT_EYE_CENTER_X",
            SensorChannel::LeftEyeCenterY => "LEFT_EYE_CENTER_Y",
            SensorChannel::LeftEyeOuterX => "LEFT_EYE_OUTER_X",
            SensorChannel::LeftEyeOuterY => "LEFT_EYE_OUTER_Y",
            SensorChannel::RightEyeInnerX => "RIGHT_EYE_INNER_X",
            SensorChannel::RightEyeInnerY => "RIGHT_EYE_INNER_Y",
            SensorChannel::RightEyeCenterX => "RIGHT_EYE_CENTER_X",
            SensorChannel::RightEyeCenterY => "RIGHT_EYE_CENTER_Y",
            SensorChannel::RightEyeOuterX => "RIGHT_EYE_OUTER_X",
            SensorChannel::RightEyeOuterY => "RIGHT_EYE_OUTER_Y",
            SensorChannel::LeftEarX => "LEFT_EAR_X",
            SensorChannel::LeftEarY => "LEFT_EAR_Y",
            SensorChannel::RightEarX => "RIGHT_EAR_X",
            SensorChannel::RightEarY => "RIGHT_EAR_Y",
            SensorChannel::MouthLeftCornerX => "MOUTH_LEFT_CORNER_X",
            SensorChannel::MouthLeftCornerY => "MOUTH_LEFT_CORNER_Y",
            SensorChannel::MouthRightCornerX => "MOUTH_RIGHT_CORNER_X",
            SensorChannel::MouthRightCornerY => "MOUTH_RIGHT_CORNER_Y",
            SensorChannel::LeftShoulderX => "LEFT_SHOULDER_X",
            SensorChannel::LeftShoulderY => "LEFT_SHOULDER_Y",
            SensorChannel::RightShoulderX => "RIGHT_SHOULDER_X",
            SensorChannel::RightShoulderY => "RIGHT_SHOULDER_Y",
            SensorChannel::LeftElbowX => "LEFT_ELBOW_X",
            SensorChannel::LeftElbowY => "LEFT_ELBOW_Y",
            SensorChannel::RightElbowX => "RIGHT_ELBOW_X",
            SensorChannel::RightElbowY => "RIGHT_ELBOW_Y",
            SensorChannel::LeftWristX => "LEFT_WRIST_X",
            SensorChannel::LeftWristY => "LEFT_WRIST_Y",
            SensorChannel::RightWristX => "RIGHT_WRIST_X",
            SensorChannel::RightWristY => "RIGHT_WRIST_Y",
            SensorChannel::LeftPinkyKnuckleX => "LEFT_PINKY_KNUCKLE_X",
            SensorChannel::LeftPinkyKnuckleY => "LEFT_PINKY_KNUCKLE_Y",
            SensorChannel::RightPinkyKnuckleX => "RIGHT_PINKY_KNUCKLE_X",
            SensorChannel::RightPinkyKnuckleY => "RIGHT_PINKY_KNUCKLE_Y",
            SensorChannel::LeftIndexKnuckleX => "LEFT_INDEX_KNUCKLE_X",
            SensorChannel::LeftIndexKnuckleY => "LEFT_INDEX_KNUCKLE_Y",
            SensorChannel::RightIndexKnuckleX => "RIGHT_INDEX_KNUCKLE_X",
            SensorChannel::RightIndexKnuckleY => "RIGHT_INDEX_KNUCKLE_Y",
            SensorChannel::LeftThumbKnuckleX => "LEFT_THUMB_KNUCKLE_X",
            SensorChannel::LeftThumbKnuckleY => "LEFT_THUMB_KNUCKLE_Y",
            SensorChannel::RightThumbKnuckleX => "RIGHT_THUMB_KNUCKLE_X",
            SensorChannel::RightThumbKnuckleY => "RIGHT_THUMB_KNUCKLE_Y",
            SensorChannel::LeftHipX => "LEFT_HIP_X",
            SensorChannel::LeftHipY => "LEFT_HIP_Y",
            SensorChannel::RightHipX => "RIGHT_HIP_X",
            SensorChannel::RightHipY => "RIGHT_HIP_Y",
            SensorChannel::LeftKneeX => "LEFT_KNEE_X",
            SensorChannel::LeftKneeY => "LEFT_KNEE_Y",
            SensorChannel::RightKneeX => "RIGHT_KNEE_X",
            SensorChannel::RightKneeY => "RIGHT_KNEE_Y",
            SensorChannel::LeftAnkleX => "LEFT_ANKLE_X",
            SensorChannel::LeftAnkleY => "LEFT_ANKLE_Y",
            SensorChannel::RightAnkleX => "RIGHT_ANKLE_X",
            SensorChannel::RightAnkleY => "RIGHT_ANKLE_Y",
            SensorChannel::LeftHeelX => "LEFT_HEEL_X",
            SensorChannel::LeftHeelY => "LEFT_HEEL_Y",
            SensorChannel::RightHeelX => "RIGHT_HEEL_X",
            SensorChannel::RightHeelY => "RIGHT_HEEL_Y",
            SensorChannel::LeftFootIndexX => "LEFT_FOOT_INDEX_X",
            SensorChannel::LeftFootIndexY => "LEFT_FOOT_INDEX_Y",
            SensorChannel::RightFootIndexX => "RIGHT_FOOT_INDEX_X",
            SensorChannel::RightFootIndexY => "RIGHT_FOOT_INDEX_Y",
        }
    }
}

impl fmt::Display for SensorChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value carried by one sensor channel.
#[derive(Clone, Debug, PartialEq)]
pub enum SensorValue {
    Number(f32),
    Text(String),
}

impl SensorValue {
    pub fn as_number(&self) -> Option<f32> {
        match self {
            SensorValue::Number(n) => Some(*n),
            SensorValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            SensorValue::Number(_) => None,
            SensorValue::Text(t) => Some(t),
        }
    }
}

impl fmt::Display for SensorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorValue::Number(n) => write!(f, "{n}"),
            SensorValue::Text(t) => write!(f, "{t:?}"),
        }
    }
}
