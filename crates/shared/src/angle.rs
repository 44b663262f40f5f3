use std::f32::consts::TAU;
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::sync::LazyLock;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Number of steps in a full turn.
pub const ANGLE_STEPS: usize = 256;

/// Quarter turn (90 degrees).
pub const QUARTER_TURN: u8 = 64;

/// Half turn (180 degrees).
pub const HALF_TURN: u8 = 128;

static SIN_TABLE: LazyLock<[f32; ANGLE_STEPS]> = LazyLock::new(|| {
    let mut table = [0.0f32; ANGLE_STEPS];
    for (i, entry) in table.iter_mut().enumerate() {
        *entry = (i as f32 * TAU / ANGLE_STEPS as f32).sin();
    }
    table
});

/// An 8-bit angle: 256 steps per full turn, arithmetic wraps.
///
/// 0 points along +X, 64 along +Y (screen down), 128 along -X, 192 along -Y.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Angle256(pub u8);

impl Angle256 {
    pub const ZERO: Angle256 = Angle256(0);
    pub const DOWN: Angle256 = Angle256(QUARTER_TURN);
    pub const LEFT: Angle256 = Angle256(HALF_TURN);
    pub const UP: Angle256 = Angle256(HALF_TURN + QUARTER_TURN);

    pub const fn new(steps: u8) -> Self {
        Self(steps)
    }

    pub const fn steps(self) -> u8 {
        self.0
    }

    pub fn sin(self) -> f32 {
        SIN_TABLE[self.0 as usize]
    }

    /// Cosine is sine shifted by a quarter turn.
    pub fn cos(self) -> f32 {
        SIN_TABLE[self.0.wrapping_add(QUARTER_TURN) as usize]
    }

    /// Unit vector pointing along this angle.
    pub fn forward(self) -> Vec2 {
        Vec2::new(self.cos(), self.sin())
    }

    /// Nearest angle step to the given radians, any range.
    pub fn from_radians(radians: f32) -> Self {
        let steps = (radians / TAU * ANGLE_STEPS as f32).round() as i64;
        Self(steps.rem_euclid(ANGLE_STEPS as i64) as u8)
    }

    pub fn to_radians(self) -> f32 {
        self.0 as f32 * TAU / ANGLE_STEPS as f32
    }

    /// Rotation in degrees, for presentation backends that rotate sprites.
    pub fn to_degrees(self) -> f32 {
        self.0 as f32 / ANGLE_STEPS as f32 * 360.0
    }

    /// Signed shortest turn from `self` to `target`, in [-128, 127].
    pub fn delta_to(self, target: Angle256) -> i8 {
        target.0.wrapping_sub(self.0) as i8
    }

    /// Roll in [64, 192): the plane is flying upside down.
    pub fn is_inverted(self) -> bool {
        (QUARTER_TURN..HALF_TURN + QUARTER_TURN).contains(&self.0)
    }
}

impl From<u8> for Angle256 {
    fn from(steps: u8) -> Self {
        Self(steps)
    }
}

impl fmt::Display for Angle256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/256", self.0)
    }
}

impl Add<i8> for Angle256 {
    type Output = Angle256;

    fn add(self, rhs: i8) -> Angle256 {
        Angle256(self.0.wrapping_add_signed(rhs))
    }
}

impl Sub<i8> for Angle256 {
    type Output = Angle256;

    fn sub(self, rhs: i8) -> Angle256 {
        Angle256(self.0.wrapping_add_signed(rhs.wrapping_neg()))
    }
}

impl Add for Angle256 {
    type Output = Angle256;

    fn add(self, rhs: Angle256) -> Angle256 {
        Angle256(self.0.wrapping_add(rhs.0))
    }
}

impl Sub for Angle256 {
    type Output = Angle256;

    fn sub(self, rhs: Angle256) -> Angle256 {
        Angle256(self.0.wrapping_sub(rhs.0))
    }
}

impl AddAssign<i8> for Angle256 {
    fn add_assign(&mut self, rhs: i8) {
        *self = *self + rhs;
    }
}

impl SubAssign<i8> for Angle256 {
    fn sub_assign(&mut self, rhs: i8) {
        *self = *self - rhs;
    }
}

/// Rotate `v` by `angle` using the lookup table.
pub fn rotate(v: Vec2, angle: Angle256) -> Vec2 {
    let (s, c) = (angle.sin(), angle.cos());
    Vec2::new(v.x * c - v.y * s, v.x * s + v.y * c)
}

/// Wrap a coordinate into [0, max). A non-positive `max` leaves the value alone.
pub fn wrap(value: f32, max: f32) -> f32 {
    if max <= 0.0 {
        return value;
    }
    let wrapped = value.rem_euclid(max);
    // rem_euclid can round up to `max` for tiny negative inputs
    if wrapped >= max {
        0.0
    } else {
        wrapped
    }
}
