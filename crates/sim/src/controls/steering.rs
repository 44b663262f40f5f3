use combatants_shared::*;
use glam::Vec2;

use crate::plane::Plane;

/// Apply a frame's turn input to a plane and let the wings level out.
///
/// Pitch input is ignored once the plane has been shot down. Roll is
/// corrected whenever the stick is centred, or while the wings are still
/// between level and fully inverted.
pub fn steer(plane: &mut Plane, turn: Turn, config: &SimConfig) {
    if matches!(plane.state(), PlaneState::Crashing | PlaneState::Crashed) {
        return;
    }

    if turn != Turn::Straight {
        plane.delta_pitch(turn.sign().wrapping_mul(config.pitch_step));
    }

    let roll = plane.roll().steps();
    if turn == Turn::Straight || (roll != 0 && roll != HALF_TURN) {
        correct_roll(plane, config.roll_correction_step);
    }
}

/// Roll one step toward level when heading right, toward inverted when
/// heading left, so the cockpit always ends up on top.
pub fn correct_roll(plane: &mut Plane, step: i8) {
    let roll = plane.roll().steps();
    let heading_left = (QUARTER_TURN..HALF_TURN + QUARTER_TURN).contains(&plane.pitch().steps());

    if heading_left {
        if roll != HALF_TURN {
            plane.delta_roll(if roll > HALF_TURN { step.wrapping_neg() } else { step });
        }
    } else if roll != 0 {
        plane.delta_roll(if roll >= HALF_TURN { step } else { step.wrapping_neg() });
    }
}

/// Shortest vector from `from` to `to` on the wrapping screen.
pub fn shortest_delta(from: Vec2, to: Vec2, screen: ScreenSize) -> Vec2 {
    fn axis(delta: f32, size: f32) -> f32 {
        if size <= 0.0 {
            delta
        } else if delta > size / 2.0 {
            delta - size
        } else if delta < -size / 2.0 {
            delta + size
        } else {
            delta
        }
    }
    let d = to - from;
    let size = screen.as_vec2();
    Vec2::new(axis(d.x, size.x), axis(d.y, size.y))
}

/// Heading that points along `delta`. A zero vector maps to angle 0.
pub fn heading_of(delta: Vec2) -> Angle256 {
    Angle256::from_radians(delta.y.atan2(delta.x))
}
