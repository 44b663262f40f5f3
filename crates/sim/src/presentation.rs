//! Seams to the outside world: keyboard, window, clock, renderer and audio.
//!
//! The simulation never talks to a window or an audio device directly. A
//! frontend implements these traits and hands them to [`crate::run`].

use combatants_shared::*;

use crate::bullet::Bullet;
use crate::clouds::Cloud;
use crate::plane::Plane;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Space,
    A,
    D,
    LeftShift,
}

pub trait InputSource {
    /// Key is held this frame.
    fn is_key_down(&self, key: Key) -> bool;
    /// Key went down this frame.
    fn is_key_pressed(&self, key: Key) -> bool;
}

/// Input source with nothing pressed, for headless runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInput;

impl InputSource for NoInput {
    fn is_key_down(&self, _key: Key) -> bool {
        false
    }

    fn is_key_pressed(&self, _key: Key) -> bool {
        false
    }
}

/// Window, clock and keyboard of a frontend.
pub trait Platform: InputSource {
    /// Seconds since the previous frame.
    fn frame_time(&mut self) -> f32;
    /// Read every frame; the window may have been resized.
    fn screen_size(&self) -> ScreenSize;
    fn should_close(&self) -> bool;
}

/// Renderer and audio sink. Nothing it returns feeds back into the simulation.
pub trait Presentation {
    fn begin_frame(&mut self, _screen: ScreenSize) {}

    fn draw_cloud(&mut self, cloud: &Cloud, screen: ScreenSize);

    fn draw_bullet(&mut self, bullet: &Bullet);

    /// Planes near an edge should also be drawn on the opposite side.
    fn draw_plane(&mut self, plane: &Plane, screen: ScreenSize);

    fn draw_hud(&mut self, _player: usize, _score: u32, _ammo: f32, _max_ammo: f32) {}

    fn engine(&mut self, _player: usize, _tone: EngineTone) {}

    fn play_sound(&mut self, event: SoundEvent);

    fn end_frame(&mut self) {}
}
