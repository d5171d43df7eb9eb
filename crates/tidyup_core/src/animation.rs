use crate::movement::MovementFrame;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationState {
    #[default]
    Idle,
    Walk,
    Run,
}

impl AnimationState {
    /// Recomputed from scratch every frame, no hysteresis.
    pub fn select(grounded: bool, moving: bool, speed: f32, run_speed: f32) -> Self {
        if !grounded || !moving {
            return AnimationState::Idle;
        }
        if speed == run_speed {
            AnimationState::Run
        } else {
            AnimationState::Walk
        }
    }

    pub fn from_movement(frame: &MovementFrame, run_speed: f32) -> Self {
        Self::select(frame.grounded, frame.is_moving(), frame.speed, run_speed)
    }

    pub fn clip_name(self) -> &'static str {
        match self {
            AnimationState::Idle => "idle",
            AnimationState::Walk => "walk",
            AnimationState::Run => "run",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn airborne_is_always_idle() {
        assert_eq!(AnimationState::select(false, true, 3.2, 3.2), AnimationState::Idle);
        assert_eq!(AnimationState::select(false, false, 2.0, 3.2), AnimationState::Idle);
    }

    #[test]
    fn grounded_motion_picks_walk_or_run() {
        assert_eq!(AnimationState::select(true, true, 2.0, 3.2), AnimationState::Walk);
        assert_eq!(AnimationState::select(true, true, 3.2, 3.2), AnimationState::Run);
        assert_eq!(AnimationState::select(true, false, 3.2, 3.2), AnimationState::Idle);
    }

    #[test]
    fn clip_names() {
        assert_eq!(AnimationState::Run.clip_name(), "run");
        assert_eq!(AnimationState::default().clip_name(), "idle");
    }
}
