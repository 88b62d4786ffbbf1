use serde::{Deserialize, Serialize};

/// A point in frame-pixel space: origin at the top-left corner, Y down.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f32,
    pub y: f32,
}

impl PixelPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A point in stage-logical space: origin at the frame center, Y up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StagePoint {
    pub x: f32,
    pub y: f32,
}

/// Maps frame-pixel coordinates to stage-logical coordinates.
///
/// The result is not clamped: points near frame edges may land outside
/// the visible stage, which crops them.
pub fn translate_to_stage_coordinates(
    x: f32,
    y: f32,
    image_width: u32,
    image_height: u32,
) -> StagePoint {
    StagePoint {
        x: x - image_width as f32 / 2.0,
        y: image_height as f32 / 2.0 - y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case::top_left(0.0, 0.0, -320.0, 240.0)]
    #[case::bottom_right(640.0, 480.0, 320.0, -240.0)]
    #[case::center(320.0, 240.0, 0.0, 0.0)]
    #[case::top_right(640.0, 0.0, 320.0, 240.0)]
    fn test_translate_vga(
        #[case] x: f32,
        #[case] y: f32,
        #[case] stage_x: f32,
        #[case] stage_y: f32,
    ) {
        let p = translate_to_stage_coordinates(x, y, 640, 480);
        assert_relative_eq!(p.x, stage_x);
        assert_relative_eq!(p.y, stage_y);
    }

    #[test]
    fn test_translate_odd_dimensions() {
        let p = translate_to_stage_coordinates(0.0, 0.0, 641, 481);
        assert_relative_eq!(p.x, -320.5);
        assert_relative_eq!(p.y, 240.5);
    }

    #[test]
    fn test_translate_is_not_clamped() {
        // Points outside the frame map outside the stage.
        let p = translate_to_stage_coordinates(1000.0, -100.0, 640, 480);
        assert_relative_eq!(p.x, 680.0);
        assert_relative_eq!(p.y, 340.0);
    }

    #[test]
    fn test_y_axis_flips() {
        let top = translate_to_stage_coordinates(320.0, 0.0, 640, 480);
        let bottom = translate_to_stage_coordinates(320.0, 480.0, 640, 480);
        assert!(top.y > bottom.y);
    }
}
