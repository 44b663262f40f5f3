use combatants_shared::{Command, ScreenSize, SimConfig};

use crate::bullet::Bullet;
use crate::plane::Plane;
use crate::presentation::InputSource;

/// Everything a control strategy may look at when deciding a frame's command.
pub struct ControlContext<'a> {
    pub player: usize,
    pub dt: f32,
    pub screen: ScreenSize,
    pub planes: &'a [Plane],
    pub bullets: &'a [Bullet],
    pub input: &'a dyn InputSource,
    pub config: &'a SimConfig,
}

impl<'a> ControlContext<'a> {
    pub fn me(&self) -> &'a Plane {
        &self.planes[self.player]
    }

    /// The first plane that isn't ours.
    pub fn opponent(&self) -> Option<&'a Plane> {
        self.planes.iter().find(|p| p.id() != self.player)
    }
}

/// A per-player source of commands: a keyboard, an AI, a recording.
pub trait Control {
    fn name(&self) -> &str;
    fn poll(&mut self, ctx: &ControlContext) -> Command;
}

/// Control that does nothing - useful for testing.
pub struct IdleControl;

impl Control for IdleControl {
    fn name(&self) -> &str {
        "idle"
    }

    fn poll(&mut self, _ctx: &ControlContext) -> Command {
        Command::none()
    }
}
