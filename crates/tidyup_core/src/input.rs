/// Movement keys held this frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MoveIntent {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub sprint: bool,
    pub jump: bool,
}

impl MoveIntent {
    /// Forward wins over backward when both are held.
    pub fn forward_axis(&self) -> f32 {
        if self.forward {
            1.0
        } else if self.backward {
            -1.0
        } else {
            0.0
        }
    }

    /// Left wins over right when both are held.
    pub fn strafe_axis(&self) -> f32 {
        if self.left {
            1.0
        } else if self.right {
            -1.0
        } else {
            0.0
        }
    }
}

/// Everything the controller consumes from the input devices in one frame.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct InputFrame {
    pub intent: MoveIntent,
    /// Number of interact presses since the previous frame. Held keys and
    /// key-repeat do not count.
    pub interact_presses: u32,
    /// Pointer motion while the drag button is held, zero otherwise.
    pub drag: (f32, f32),
    /// Wheel motion in pixel units, positive pulls the camera back.
    pub zoom: f32,
}
