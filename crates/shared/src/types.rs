use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::angle::Angle256;
use crate::config::{ConfigError, MatchConfig};
use crate::constants::{PLAYER_COUNT, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Current drawable area in pixels. Changes when the window is resized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenSize {
    pub width: i32,
    pub height: i32,
}

impl ScreenSize {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    pub fn center(&self) -> Vec2 {
        self.as_vec2() / 2.0
    }
}

impl Default for ScreenSize {
    fn default() -> Self {
        Self::new(SCREEN_WIDTH, SCREEN_HEIGHT)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(230, 41, 55);
    pub const DARKGREEN: Color = Color::rgb(0, 117, 44);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Same color with alpha scaled by `alpha` in [0, 1].
    pub fn fade(self, alpha: f32) -> Self {
        Self {
            a: (alpha.clamp(0.0, 1.0) * 255.0).round() as u8,
            ..self
        }
    }
}

/// Axis-aligned rectangle, top-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn centered(center: Vec2, size: Vec2) -> Self {
        Self {
            x: center.x - size.x / 2.0,
            y: center.y - size.y / 2.0,
            width: size.x,
            height: size.y,
        }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }
}

/// Plane life-cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaneState {
    /// Controllable and vulnerable.
    Flying,
    /// Hit; spiralling down until it leaves the bottom of the screen.
    Crashing,
    /// Off screen, waiting for a reset.
    Crashed,
    /// Freshly spawned and invulnerable until its timer runs out.
    Newborn,
}

/// Pitch input for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Turn {
    #[default]
    Straight,
    /// Positive pitch delta (nose turns clockwise on screen).
    Clockwise,
    /// Negative pitch delta.
    CounterClockwise,
}

impl Turn {
    pub fn sign(self) -> i8 {
        match self {
            Turn::Straight => 0,
            Turn::Clockwise => 1,
            Turn::CounterClockwise => -1,
        }
    }

    pub fn from_sign(sign: i32) -> Self {
        match sign.signum() {
            1 => Turn::Clockwise,
            -1 => Turn::CounterClockwise,
            _ => Turn::Straight,
        }
    }
}

/// What a control strategy wants its plane to do this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub turn: Turn,
    pub fire: bool,
}

impl Command {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn turning(turn: Turn) -> Self {
        Self { turn, fire: false }
    }
}

/// Named control strategies a match can be configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlKind {
    Idle,
    Pursuit,
    /// Keyboard: Left/Right turn, Space fires.
    Arrows,
    /// Keyboard: A/D turn, left Shift fires.
    Wasd,
}

impl ControlKind {
    pub const ALL: [ControlKind; 4] = [
        ControlKind::Idle,
        ControlKind::Pursuit,
        ControlKind::Arrows,
        ControlKind::Wasd,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ControlKind::Idle => "idle",
            ControlKind::Pursuit => "pursuit",
            ControlKind::Arrows => "arrows",
            ControlKind::Wasd => "wasd",
        }
    }
}

impl std::str::FromStr for ControlKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ControlKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownControl(s.to_string()))
    }
}

impl std::fmt::Display for ControlKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Sound cue emitted by the simulation for the audio collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SoundEvent {
    /// `player` fired; `pan` is the stereo position in [0.5, 1.0].
    Fire { player: usize, pan: f32 },
    /// `victim` was shot down by `shooter`.
    Hit { victim: usize, shooter: usize },
}

/// Engine sound parameters derived from a plane's flight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineTone {
    pub pan: f32,
    pub pitch: f32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlaneSnapshot {
    pub x: f32,
    pub y: f32,
    pub pitch: Angle256,
    pub roll: Angle256,
    pub speed: f32,
    pub ammo: f32,
    pub state: PlaneState,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BulletSnapshot {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub owner: usize,
    pub lifetime: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Frame {
    pub frame: u32,
    pub planes: [PlaneSnapshot; PLAYER_COUNT],
    pub bullets: Vec<BulletSnapshot>,
    pub scores: [u32; PLAYER_COUNT],
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchStats {
    pub shots: [u32; PLAYER_COUNT],
    pub hits: [u32; PLAYER_COUNT],
    pub crashes: [u32; PLAYER_COUNT],
}

impl MatchStats {
    pub fn hit_rate(&self, player: usize) -> f32 {
        if self.shots[player] == 0 {
            0.0
        } else {
            self.hits[player] as f32 / self.shots[player] as f32
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    Player0Win,
    Player1Win,
    Draw,
}

impl MatchOutcome {
    pub fn from_scores(scores: [u32; PLAYER_COUNT]) -> Self {
        match scores[0].cmp(&scores[1]) {
            std::cmp::Ordering::Greater => MatchOutcome::Player0Win,
            std::cmp::Ordering::Less => MatchOutcome::Player1Win,
            std::cmp::Ordering::Equal => MatchOutcome::Draw,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_frame: u32,
    pub scores: [u32; PLAYER_COUNT],
    pub stats: MatchStats,
}

/// Everything a headless match produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub config: MatchConfig,
    pub frames: Vec<Frame>,
    pub result: MatchResult,
}
