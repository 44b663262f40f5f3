use combatants_shared::*;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// Background decoration. Positions and sizes are in normalized screen units
/// so clouds keep their layout when the window is resized.
#[derive(Debug, Clone)]
pub struct CloudCircle {
    /// Relative to the cloud's position.
    pub offset: Vec2,
    pub radius: f32,
    pub opacity: f32,
}

#[derive(Debug, Clone)]
pub struct Cloud {
    pub position: Vec2,
    pub velocity: Vec2,
    pub circles: Vec<CloudCircle>,
    pub color: Color,
}

/// A cloud circle resolved to pixels, ready to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelCircle {
    pub center: Vec2,
    pub radius: f32,
    pub color: Color,
}

impl Cloud {
    /// A cluster of overlapping circles. Each new circle is placed next to one
    /// of the earlier circles so the cluster grows outward from the first.
    pub fn random<R: Rng>(
        rng: &mut R,
        average_size: f32,
        average_opacity: f32,
        circles: usize,
    ) -> Self {
        let mut cloud = Cloud {
            position: Vec2::new(rng.gen::<f32>(), rng.gen::<f32>()),
            velocity: Vec2::new(rng.gen_range(-1.0f32..=1.0) * CLOUD_MAX_DRIFT, 0.0),
            circles: Vec::with_capacity(circles),
            color: Color::WHITE.fade(average_opacity),
        };

        if circles == 0 {
            return cloud;
        }

        cloud.circles.push(CloudCircle {
            offset: Vec2::ZERO,
            radius: average_size / 2.0 + rng.gen::<f32>() * average_size,
            opacity: rng.gen::<f32>(),
        });

        for i in 1..circles {
            let anchor = cloud.circles[i / 4].offset;
            let angle = rng.gen::<f32>() * TAU;
            let distance = average_size / 2.0 + average_size * rng.gen::<f32>();
            cloud.circles.push(CloudCircle {
                offset: anchor + Vec2::new(angle.cos(), angle.sin()) * distance,
                radius: average_size / 2.0 + rng.gen::<f32>() * average_size,
                opacity: (0.2 * rng.gen::<f32>() - 0.1 + average_opacity).min(1.0),
            });
        }
        cloud
    }

    /// Circles in pixel space. Circles hanging over the left or right edge get
    /// a second copy on the other side.
    pub fn pixel_circles(&self, screen: ScreenSize) -> Vec<PixelCircle> {
        let scale = screen.as_vec2();
        let radius_scale = scale.x.min(scale.y);
        let mut out = Vec::with_capacity(self.circles.len());

        for circle in &self.circles {
            let p = self.position + circle.offset;
            let center = Vec2::new(wrap(p.x, 1.0), wrap(p.y, 1.0)) * scale;
            let radius = circle.radius * radius_scale;
            let color = self.color.fade(circle.opacity * self.color.a as f32 / 255.0);

            out.push(PixelCircle { center, radius, color });
            if center.x + radius > scale.x {
                out.push(PixelCircle {
                    center: center - Vec2::new(scale.x, 0.0),
                    radius,
                    color,
                });
            } else if center.x < radius {
                out.push(PixelCircle {
                    center: center + Vec2::new(scale.x, 0.0),
                    radius,
                    color,
                });
            }
        }
        out
    }
}

#[derive(Debug, Clone, Default)]
pub struct CloudSystem {
    clouds: Vec<Cloud>,
}

impl CloudSystem {
    pub fn random<R: Rng>(rng: &mut R, config: &CloudConfig) -> Self {
        let clouds = (0..config.count)
            .map(|_| {
                Cloud::random(
                    rng,
                    config.average_size,
                    config.average_opacity,
                    config.circles,
                )
            })
            .collect();
        Self { clouds }
    }

    pub fn clouds(&self) -> &[Cloud] {
        &self.clouds
    }

    /// Drift and wrap in normalized space.
    pub fn update(&mut self, dt: f32) {
        for cloud in &mut self.clouds {
            cloud.position += cloud.velocity * dt;
            cloud.position = Vec2::new(wrap(cloud.position.x, 1.0), wrap(cloud.position.y, 1.0));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    #[test]
    fn test_random_system_shape() {
        let mut rng = Pcg64::seed_from_u64(7);
        let system = CloudSystem::random(&mut rng, &CloudConfig::default());
        assert_eq!(system.clouds().len(), CLOUD_COUNT);
        for cloud in system.clouds() {
            assert_eq!(cloud.circles.len(), CLOUD_CIRCLES);
            assert!((0.0..1.0).contains(&cloud.position.x));
            assert!(cloud.velocity.x.abs() <= CLOUD_MAX_DRIFT);
            assert_eq!(cloud.velocity.y, 0.0);
        }
    }

    #[test]
    fn test_same_seed_same_clouds() {
        let a = CloudSystem::random(&mut Pcg64::seed_from_u64(3), &CloudConfig::default());
        let b = CloudSystem::random(&mut Pcg64::seed_from_u64(3), &CloudConfig::default());
        for (ca, cb) in a.clouds().iter().zip(b.clouds()) {
            assert_eq!(ca.position, cb.position);
            assert_eq!(ca.circles.len(), cb.circles.len());
        }
    }

    #[test]
    fn test_clouds_drift_and_wrap() {
        let mut system = CloudSystem {
            clouds: vec![Cloud {
                position: Vec2::new(0.99, 0.5),
                velocity: Vec2::new(0.1, 0.0),
                circles: Vec::new(),
                color: Color::WHITE,
            }],
        };
        system.update(0.5);
        let p = system.clouds()[0].position;
        assert!((p.x - 0.04).abs() < 1e-5);
        assert!((p.y - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_edge_circles_are_duplicated() {
        let cloud = Cloud {
            position: Vec2::new(0.99, 0.5),
            velocity: Vec2::ZERO,
            circles: vec![
                CloudCircle { offset: Vec2::ZERO, radius: 0.03, opacity: 1.0 },
                CloudCircle { offset: Vec2::new(-0.5, 0.0), radius: 0.02, opacity: 0.5 },
            ],
            color: Color::WHITE,
        };
        let circles = cloud.pixel_circles(ScreenSize::new(1000, 500));
        assert_eq!(circles.len(), 3);
        assert!((circles[0].center.x - 990.0).abs() < 1e-3);
        assert!((circles[1].center.x + 10.0).abs() < 1e-3);
        assert!((circles[0].radius - 15.0).abs() < 1e-4);
        assert_eq!(circles[2].color.a, 128);
    }

    #[test]
    fn test_zero_circle_cloud() {
        let mut rng = Pcg64::seed_from_u64(1);
        let cloud = Cloud::random(&mut rng, 0.04, 0.9, 0);
        assert!(cloud.circles.is_empty());
        assert!(cloud.pixel_circles(ScreenSize::default()).is_empty());
    }
}
