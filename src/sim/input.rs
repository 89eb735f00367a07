//! Pointer input to paddle position
//!
//! Converts raw pointer/touch deltas into a clamped paddle x position. The
//! camera-follow and scene writes belong to the embedding layer; this only
//! owns the number.

/// Maps touch drags onto paddle travel.
///
/// A drag anchors both the touch point and the paddle position at its start;
/// each move then offsets the anchored paddle position by the scaled screen
/// delta, saturating at the play-field boundary.
#[derive(Debug)]
pub struct PaddleControl {
    scale: f32,
    limit_x: f32,
    pos_x: f32,
    anchor_paddle_x: f32,
    anchor_touch_x: f32,
}

impl PaddleControl {
    pub fn new(scale: f32, limit_x: f32) -> Self {
        Self {
            scale,
            limit_x,
            pos_x: 0.0,
            anchor_paddle_x: 0.0,
            anchor_touch_x: 0.0,
        }
    }

    /// Current paddle x in world space
    pub fn position(&self) -> f32 {
        self.pos_x
    }

    /// Pointer-down: anchor the drag
    pub fn touch_began(&mut self, touch_x: f32) {
        self.anchor_touch_x = touch_x;
        self.anchor_paddle_x = self.pos_x;
    }

    /// Pointer-move: reposition the paddle, saturating at the boundary
    pub fn touch_moved(&mut self, touch_x: f32) -> f32 {
        let x = self.anchor_paddle_x + (touch_x - self.anchor_touch_x) * self.scale;
        self.pos_x = x.clamp(-self.limit_x, self.limit_x);
        self.pos_x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{PADDLE_LIMIT_X, TOUCH_SCALE};
    use proptest::prelude::*;

    #[test]
    fn test_drag_scales_and_clamps() {
        let mut control = PaddleControl::new(TOUCH_SCALE, PADDLE_LIMIT_X);

        control.touch_began(100.0);
        // 50 px right * 0.1 = 5.0 world units, past the 4.5 boundary
        assert_eq!(control.touch_moved(150.0), 4.5);

        // 20 px right stays inside
        assert!((control.touch_moved(120.0) - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_clamp_left_boundary() {
        let mut control = PaddleControl::new(TOUCH_SCALE, PADDLE_LIMIT_X);
        control.touch_began(0.0);
        assert_eq!(control.touch_moved(-300.0), -4.5);
    }

    #[test]
    fn test_new_touch_reanchors() {
        let mut control = PaddleControl::new(TOUCH_SCALE, PADDLE_LIMIT_X);

        control.touch_began(0.0);
        control.touch_moved(20.0); // paddle at 2.0

        // A fresh touch somewhere else moves relative to the new anchor
        control.touch_began(500.0);
        assert!((control.touch_moved(510.0) - 3.0).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn paddle_never_leaves_play_field(
            touches in proptest::collection::vec((-1e4f32..1e4, any::<bool>()), 1..64)
        ) {
            let mut control = PaddleControl::new(TOUCH_SCALE, PADDLE_LIMIT_X);
            for (x, down) in touches {
                if down {
                    control.touch_began(x);
                } else {
                    control.touch_moved(x);
                }
                prop_assert!(control.position() >= -PADDLE_LIMIT_X);
                prop_assert!(control.position() <= PADDLE_LIMIT_X);
            }
        }
    }
}
