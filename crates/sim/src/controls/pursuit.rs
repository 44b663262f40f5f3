use combatants_shared::*;

use super::steering::{heading_of, shortest_delta};
use crate::policy::{Control, ControlContext};

/// Computer pilot: lead pursuit across the wrapping screen, firing when
/// the lead point sits inside a narrow cone and within range.
pub struct PursuitControl {
    /// Fraction of the target's travel during the bullet's flight to lead by.
    pub lead: f32,
    /// Half-width of the firing cone, in angle steps.
    pub fire_cone: u8,
    /// Pixels.
    pub fire_range: f32,
}

impl Default for PursuitControl {
    fn default() -> Self {
        Self {
            lead: 0.5,
            fire_cone: 6,
            fire_range: 400.0,
        }
    }
}

impl PursuitControl {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Control for PursuitControl {
    fn name(&self) -> &str {
        "pursuit"
    }

    fn poll(&mut self, ctx: &ControlContext) -> Command {
        let me = ctx.me();
        let Some(target) = ctx.opponent() else {
            return Command::none();
        };
        if matches!(target.state(), PlaneState::Crashing | PlaneState::Crashed) {
            return Command::none();
        }

        let rel = shortest_delta(me.position(), target.position(), ctx.screen);
        let distance = rel.length();
        let bullet_speed = (me.speed() * ctx.config.bullet_speed_multiplier).max(1.0);
        let time_to_target = distance / bullet_speed;
        let aim = rel + target.velocity() * time_to_target * self.lead;

        let delta = me.pitch().delta_to(heading_of(aim));
        let turn = if delta.unsigned_abs() < ctx.config.pitch_step.unsigned_abs() {
            Turn::Straight
        } else {
            Turn::from_sign(delta as i32)
        };

        let fire = me.state() == PlaneState::Flying
            && target.state() == PlaneState::Flying
            && delta.unsigned_abs() <= self.fire_cone
            && distance <= self.fire_range
            && me.ammo() >= 1.0;

        Command { turn, fire }
    }
}
