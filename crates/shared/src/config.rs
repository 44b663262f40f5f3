use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;
use crate::types::ScreenSize;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("{name} must be non-zero")]
    ZeroStep { name: &'static str },
    #[error("max_ammo must be at least 1.0 to ever fire, got {0}")]
    AmmoCapTooSmall(f32),
    #[error("screen must have a positive size, got {0}x{1}")]
    EmptyScreen(i32, i32),
    #[error("frame_interval must be at least 1")]
    ZeroFrameInterval,
    #[error("fps must be at least 1")]
    ZeroFps,
    #[error("unknown control '{0}', expected one of: idle, pursuit, arrows, wasd")]
    UnknownControl(String),
}

/// Tunable flight, weapon and life-cycle constants.
///
/// Missing fields deserialize to their defaults, so a config file only needs
/// the values it changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Invulnerability after a (re)spawn, seconds.
    pub newborn_secs: f32,
    pub max_ammo: f32,
    /// Ammo regained per second.
    pub ammo_recharge_rate: f32,
    /// Bullet velocity as a multiple of the firing plane's velocity.
    pub bullet_speed_multiplier: f32,
    pub bullet_lifetime_secs: f32,
    /// Involuntary roll per frame while crashing.
    pub crash_roll_step: i8,
    /// Pitch steps per second toward straight down while crashing.
    pub crash_dive_rate: f32,
    /// Roll steps per frame when levelling out.
    pub roll_correction_step: i8,
    /// Pitch steps per frame while a turn is held.
    pub pitch_step: i8,
    pub spawn_speed: f32,
    /// Horizontal distance of each spawn point from the screen centre.
    pub spawn_offset: f32,
    /// Plane sprite size in pixels; the bounding box uses it.
    pub sprite_size: Vec2,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            newborn_secs: NEWBORN_SECS,
            max_ammo: MAX_AMMO,
            ammo_recharge_rate: AMMO_RECHARGE_RATE,
            bullet_speed_multiplier: BULLET_SPEED_MULTIPLIER,
            bullet_lifetime_secs: BULLET_LIFETIME_SECS,
            crash_roll_step: CRASH_ROLL_STEP,
            crash_dive_rate: CRASH_DIVE_RATE,
            roll_correction_step: ROLL_CORRECTION_STEP,
            pitch_step: PITCH_STEP,
            spawn_speed: SPAWN_SPEED,
            spawn_offset: SPAWN_OFFSET,
            sprite_size: Vec2::new(PLANE_SPRITE_WIDTH, PLANE_SPRITE_HEIGHT),
        }
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}

fn non_zero(name: &'static str, value: i8) -> Result<(), ConfigError> {
    if value != 0 {
        Ok(())
    } else {
        Err(ConfigError::ZeroStep { name })
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("newborn_secs", self.newborn_secs)?;
        if self.max_ammo < 1.0 {
            return Err(ConfigError::AmmoCapTooSmall(self.max_ammo));
        }
        positive("ammo_recharge_rate", self.ammo_recharge_rate)?;
        positive("bullet_speed_multiplier", self.bullet_speed_multiplier)?;
        positive("bullet_lifetime_secs", self.bullet_lifetime_secs)?;
        positive("crash_dive_rate", self.crash_dive_rate)?;
        // A crashing plane has to fall off the bottom to respawn.
        positive("spawn_speed", self.spawn_speed)?;
        positive("sprite_size.x", self.sprite_size.x)?;
        positive("sprite_size.y", self.sprite_size.y)?;
        non_zero("crash_roll_step", self.crash_roll_step)?;
        non_zero("roll_correction_step", self.roll_correction_step)?;
        non_zero("pitch_step", self.pitch_step)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudConfig {
    pub count: usize,
    pub circles: usize,
    pub average_size: f32,
    pub average_opacity: f32,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            count: CLOUD_COUNT,
            circles: CLOUD_CIRCLES,
            average_size: CLOUD_AVERAGE_SIZE,
            average_opacity: CLOUD_AVERAGE_OPACITY,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub seed: u64,
    pub p0_name: String,
    pub p1_name: String,
    pub screen: ScreenSize,
    /// Frames a headless match runs for.
    pub max_frames: u32,
    /// Fixed simulation rate for headless matches.
    pub fps: u32,
    /// Record a frame snapshot every this many frames.
    pub frame_interval: u32,
    pub clouds: CloudConfig,
    pub sim: SimConfig,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            p0_name: "p0".into(),
            p1_name: "p1".into(),
            screen: ScreenSize::default(),
            max_frames: MAX_FRAMES,
            fps: TARGET_FPS,
            frame_interval: FRAME_INTERVAL,
            clouds: CloudConfig::default(),
            sim: SimConfig::default(),
        }
    }
}

impl MatchConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.screen.width <= 0 || self.screen.height <= 0 {
            return Err(ConfigError::EmptyScreen(self.screen.width, self.screen.height));
        }
        if self.fps == 0 {
            return Err(ConfigError::ZeroFps);
        }
        if self.frame_interval == 0 {
            return Err(ConfigError::ZeroFrameInterval);
        }
        self.sim.validate()
    }

    /// Fixed timestep for headless matches.
    pub fn dt(&self) -> f32 {
        1.0 / self.fps.max(1) as f32
    }
}
