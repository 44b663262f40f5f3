use combatants_shared::*;
use glam::Vec2;
use tracing::debug;

use crate::bullet::Bullet;

/// One circle of a plane's collidable silhouette, relative to the plane's
/// midpoint at pitch 0.
#[derive(Debug, Clone, Copy)]
pub struct HitCircle {
    pub offset: Vec2,
    pub radius: f32,
    pub radius_sq: f32,
}

impl HitCircle {
    const fn new(x: f32, y: f32, radius: f32) -> Self {
        Self {
            offset: Vec2::new(x, y),
            radius,
            radius_sq: radius * radius,
        }
    }
}

/// Nose, cockpit, fuselage, tail.
pub const HIT_CIRCLES: [HitCircle; 4] = [
    HitCircle::new(11.0, 0.0, 11.0),
    HitCircle::new(-3.0, 0.0, 7.0),
    HitCircle::new(-18.0, 0.0, 8.0),
    HitCircle::new(-35.0, 0.0, 8.0),
];

/// Number of roll sprite frames a skin provides.
pub const ROLL_FRAMES: usize = 16;

#[derive(Debug, Clone)]
pub struct Plane {
    id: usize,
    skin: String,
    color: Color,
    /// Midpoint of the sprite.
    position: Vec2,
    speed: f32,
    pitch: Angle256,
    roll: Angle256,
    velocity: Vec2,
    ammo: f32,
    state: PlaneState,
    /// Drives automatic state transitions.
    timer: f32,
    config: SimConfig,
}

impl Plane {
    /// A plane that is already flying, with a full ammo gauge.
    pub fn new(
        id: usize,
        skin: impl Into<String>,
        color: Color,
        position: Vec2,
        speed: f32,
        pitch: Angle256,
        config: SimConfig,
    ) -> Self {
        Self {
            id,
            skin: skin.into(),
            color,
            position,
            speed,
            pitch,
            roll: Angle256::ZERO,
            velocity: pitch.forward() * speed,
            ammo: config.max_ammo,
            state: PlaneState::Flying,
            timer: 0.0,
            config,
        }
    }

    /// Respawn: new position and heading, level wings, full ammo, invulnerable.
    pub fn reset(&mut self, position: Vec2, speed: f32, pitch: Angle256) {
        self.position = position;
        self.speed = speed;
        self.pitch = pitch;
        self.roll = Angle256::ZERO;
        self.velocity = pitch.forward() * speed;
        self.ammo = self.config.max_ammo;
        self.state = PlaneState::Newborn;
        self.timer = self.config.newborn_secs;
        debug!(plane = self.id, x = position.x, y = position.y, "plane respawned");
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn skin(&self) -> &str {
        &self.skin
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Velocity as of the last update or reset.
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn pitch(&self) -> Angle256 {
        self.pitch
    }

    pub fn roll(&self) -> Angle256 {
        self.roll
    }

    pub fn ammo(&self) -> f32 {
        self.ammo
    }

    pub fn max_ammo(&self) -> f32 {
        self.config.max_ammo
    }

    pub fn state(&self) -> PlaneState {
        self.state
    }

    pub fn timer(&self) -> f32 {
        self.timer
    }

    pub fn set_state(&mut self, state: PlaneState) {
        if state != self.state {
            debug!(plane = self.id, from = ?self.state, to = ?state, "plane state changed");
        }
        self.state = state;
    }

    pub fn delta_pitch(&mut self, delta: i8) -> Angle256 {
        self.pitch += delta;
        self.pitch
    }

    pub fn delta_roll(&mut self, delta: i8) -> Angle256 {
        self.roll += delta;
        self.roll
    }

    /// Sprite-sized box around the midpoint, unrotated.
    pub fn bounding_box(&self) -> Rect {
        Rect::centered(self.position, self.config.sprite_size)
    }

    /// Which roll sprite to draw.
    pub fn sprite_frame(&self) -> usize {
        self.roll.steps() as usize * ROLL_FRAMES / ANGLE_STEPS
    }

    /// Advance one frame.
    pub fn update(&mut self, screen: ScreenSize, dt: f32) {
        let half_height = self.config.sprite_size.y / 2.0;

        match self.state {
            PlaneState::Crashed => return,
            PlaneState::Crashing if self.position.y > screen.height as f32 + half_height => {
                self.set_state(PlaneState::Crashed);
                return;
            }
            PlaneState::Crashing => self.spiral_down(dt),
            PlaneState::Newborn => {
                self.timer -= dt;
                if self.timer <= 0.0 {
                    self.timer = 0.0;
                    self.set_state(PlaneState::Flying);
                }
            }
            PlaneState::Flying => {}
        }

        self.velocity = self.pitch.forward() * self.speed;
        self.position += self.velocity * dt;

        // A crashing plane has to be able to leave the screen.
        if matches!(self.state, PlaneState::Flying | PlaneState::Newborn) {
            self.position = Vec2::new(
                wrap(self.position.x, screen.width as f32),
                wrap(self.position.y, screen.height as f32),
            );
        }

        if self.ammo < self.config.max_ammo {
            self.ammo = (self.ammo + self.config.ammo_recharge_rate * dt).min(self.config.max_ammo);
        }
    }

    /// Involuntary roll, and pitch toward straight down unless already diving.
    fn spiral_down(&mut self, dt: f32) {
        self.delta_roll(self.config.crash_roll_step);

        let dive = (self.config.crash_dive_rate * dt + 0.5) as i8;
        let pitch = self.pitch.steps();
        if pitch >= 192 || pitch < 32 {
            self.delta_pitch(dive);
        } else if pitch >= 96 {
            self.delta_pitch(dive.wrapping_neg());
        }
    }

    /// Spawn a bullet if flying with at least one round in the gauge.
    pub fn fire(&mut self, bullets: &mut Vec<Bullet>) -> bool {
        if self.state != PlaneState::Flying || self.ammo < 1.0 {
            return false;
        }
        self.ammo -= 1.0;
        bullets.push(Bullet::new(
            self.id,
            self.color,
            self.position,
            self.velocity * self.config.bullet_speed_multiplier,
            self.config.bullet_lifetime_secs,
        ));
        true
    }

    /// Whether `point` is inside the plane's hit circles. Only a flying plane can be hit.
    pub fn collides(&self, point: Vec2) -> bool {
        if self.state != PlaneState::Flying {
            return false;
        }
        HIT_CIRCLES.iter().any(|circle| {
            let center = self.position + rotate(circle.offset, self.pitch);
            center.distance_squared(point) < circle.radius_sq
        })
    }

    /// World-space centres of the hit circles, for debug overlays.
    pub fn hit_circles(&self) -> impl Iterator<Item = (Vec2, f32)> + '_ {
        HIT_CIRCLES
            .iter()
            .map(|c| (self.position + rotate(c.offset, self.pitch), c.radius))
    }

    /// Stereo pan for a gunshot from this plane, in [0.5, 1.0].
    pub fn gun_pan(&self, screen: ScreenSize) -> f32 {
        if screen.width <= 0 {
            return 0.75;
        }
        1.0 - (self.position.x / screen.width as f32) / 2.0
    }

    /// Engine sound: pans with x, rises in a climb and drops in a dive.
    pub fn engine_tone(&self, screen: ScreenSize) -> EngineTone {
        let pan = if screen.width > 0 {
            0.75 - (self.position.x / screen.width as f32) / 2.0
        } else {
            0.5
        };
        let pitch = if self.speed.abs() > f32::EPSILON {
            1.0 - (self.velocity.y / self.speed) * 0.5
        } else {
            1.0
        };
        EngineTone { pan, pitch }
    }

    pub fn snapshot(&self) -> PlaneSnapshot {
        PlaneSnapshot {
            x: self.position.x,
            y: self.position.y,
            pitch: self.pitch,
            roll: self.roll,
            speed: self.speed,
            ammo: self.ammo,
            state: self.state,
        }
    }
}
