use combatants_shared::*;
use glam::Vec2;

#[derive(Debug, Clone)]
pub struct Bullet {
    owner: usize,
    color: Color,
    position: Vec2,
    velocity: Vec2,
    /// Seconds left before the bullet disappears.
    lifetime: f32,
}

impl Bullet {
    pub fn new(owner: usize, color: Color, position: Vec2, velocity: Vec2, lifetime: f32) -> Self {
        Self {
            owner,
            color,
            position,
            velocity,
            lifetime,
        }
    }

    pub fn owner(&self) -> usize {
        self.owner
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn lifetime(&self) -> f32 {
        self.lifetime
    }

    /// Move and wrap. Returns false once the lifetime has run out.
    pub fn update(&mut self, screen: ScreenSize, dt: f32) -> bool {
        self.position += self.velocity * dt;
        self.position = Vec2::new(
            wrap(self.position.x, screen.width as f32),
            wrap(self.position.y, screen.height as f32),
        );
        self.lifetime -= dt;
        self.lifetime > 0.0
    }

    pub fn snapshot(&self) -> BulletSnapshot {
        BulletSnapshot {
            x: self.position.x,
            y: self.position.y,
            vx: self.velocity.x,
            vy: self.velocity.y,
            owner: self.owner,
            lifetime: self.lifetime,
        }
    }
}

/// Advance every bullet and drop the expired ones, keeping creation order.
pub fn update_bullets(bullets: &mut Vec<Bullet>, screen: ScreenSize, dt: f32) {
    bullets.retain_mut(|bullet| bullet.update(screen, dt));
}
