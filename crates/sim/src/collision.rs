use combatants_shared::PlaneState;
use tracing::info;

use crate::bullet::Bullet;
use crate::plane::Plane;

/// A bullet found inside a plane's hit circles this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collision {
    pub bullet: usize,
    pub plane: usize,
}

/// A resolved collision that shot a plane down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub shooter: usize,
    pub victim: usize,
}

/// Pair each bullet with the lowest-indexed plane it is inside, skipping
/// the plane that fired it.
///
/// The result is ordered by bullet index with at most one entry per bullet.
/// Nothing is mutated, so calling this twice on the same state gives the same list.
pub fn detect_collisions(bullets: &[Bullet], planes: &[Plane]) -> Vec<Collision> {
    bullets
        .iter()
        .enumerate()
        .filter_map(|(bullet, b)| {
            let point = b.position();
            planes
                .iter()
                .enumerate()
                .find(|(plane, p)| {
                    *plane != b.owner() && p.bounding_box().contains(point) && p.collides(point)
                })
                .map(|(plane, _)| Collision { bullet, plane })
        })
        .collect()
}

/// Apply collisions: remove the bullet, crash the plane, score for the shooter.
///
/// Records are walked from the highest bullet index down so that removing a
/// bullet never shifts the index of one still waiting to be processed.
/// Records pairing a bullet with its owner, or a plane that is no longer
/// flying, are skipped.
pub fn resolve_collisions(
    collisions: &[Collision],
    bullets: &mut Vec<Bullet>,
    planes: &mut [Plane],
    scores: &mut [u32],
) -> Vec<Hit> {
    assert!(
        collisions.windows(2).all(|w| w[0].bullet < w[1].bullet),
        "collision records must be strictly ordered by bullet index: {collisions:?}"
    );

    let mut hits = Vec::new();
    for collision in collisions.iter().rev() {
        assert!(
            collision.bullet < bullets.len() && collision.plane < planes.len(),
            "stale collision record {collision:?} ({} bullets, {} planes)",
            bullets.len(),
            planes.len()
        );

        let shooter = bullets[collision.bullet].owner();
        if shooter == collision.plane {
            continue;
        }
        let victim = &mut planes[collision.plane];
        if victim.state() != PlaneState::Flying {
            continue;
        }

        bullets.remove(collision.bullet);
        victim.set_state(PlaneState::Crashing);
        scores[shooter] += 1;
        info!(shooter, victim = collision.plane, score = scores[shooter], "plane shot down");

        hits.push(Hit {
            shooter,
            victim: collision.plane,
        });
    }

    hits.reverse();
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use combatants_shared::*;
    use glam::Vec2;

    fn plane(id: usize, x: f32, y: f32) -> Plane {
        Plane::new(
            id,
            "skin",
            Color::WHITE,
            Vec2::new(x, y),
            SPAWN_SPEED,
            Angle256::ZERO,
            SimConfig::default(),
        )
    }

    fn bullet(owner: usize, x: f32, y: f32) -> Bullet {
        Bullet::new(owner, Color::RED, Vec2::new(x, y), Vec2::new(1.0, 0.0), BULLET_LIFETIME_SECS)
    }

    #[test]
    fn test_enemy_bullet_crashes_flying_plane() {
        let mut planes = vec![plane(0, 500.0, 400.0), plane(1, 100.0, 100.0)];
        let mut bullets = vec![bullet(1, 500.0, 400.0)];
        let mut scores = [0u32; 2];

        let collisions = detect_collisions(&bullets, &planes);
        assert_eq!(collisions, vec![Collision { bullet: 0, plane: 0 }]);

        let hits = resolve_collisions(&collisions, &mut bullets, &mut planes, &mut scores);
        assert_eq!(hits, vec![Hit { shooter: 1, victim: 0 }]);
        assert_eq!(planes[0].state(), PlaneState::Crashing);
        assert_eq!(planes[1].state(), PlaneState::Flying);
        assert_eq!(scores, [0, 1]);
        assert!(bullets.is_empty());
    }

    #[test]
    fn test_own_bullet_never_crashes_owner() {
        let mut planes = vec![plane(0, 500.0, 400.0), plane(1, 100.0, 100.0)];
        let mut bullets = vec![bullet(0, 500.0, 400.0)];
        let mut scores = [0u32; 2];

        assert!(detect_collisions(&bullets, &planes).is_empty());

        // A hand-built owner record is still ignored on resolution.
        let own = [Collision { bullet: 0, plane: 0 }];
        let hits = resolve_collisions(&own, &mut bullets, &mut planes, &mut scores);

        assert!(hits.is_empty());
        assert_eq!(planes[0].state(), PlaneState::Flying);
        assert_eq!(scores, [0, 0]);
        assert_eq!(bullets.len(), 1);
    }

    #[test]
    fn test_two_bullets_on_one_plane_score_once() {
        let mut planes = vec![plane(0, 500.0, 400.0), plane(1, 100.0, 100.0)];
        let mut bullets = vec![bullet(1, 500.0, 400.0), bullet(1, 505.0, 400.0)];
        let mut scores = [0u32; 2];

        let collisions = detect_collisions(&bullets, &planes);
        assert_eq!(collisions.len(), 2);
        let hits = resolve_collisions(&collisions, &mut bullets, &mut planes, &mut scores);

        assert_eq!(hits.len(), 1);
        assert_eq!(scores, [0, 1]);
        assert_eq!(planes[0].state(), PlaneState::Crashing);
        assert_eq!(bullets.len(), 1);
    }

    #[test]
    fn test_removal_does_not_disturb_other_bullets() {
        let mut planes = vec![plane(0, 500.0, 400.0), plane(1, 200.0, 200.0)];
        let mut bullets = vec![
            bullet(1, 500.0, 400.0),
            bullet(0, 800.0, 700.0),
            bullet(0, 200.0, 200.0),
            bullet(1, 50.0, 700.0),
        ];
        let mut scores = [0u32; 2];

        let collisions = detect_collisions(&bullets, &planes);
        assert_eq!(
            collisions,
            vec![Collision { bullet: 0, plane: 0 }, Collision { bullet: 2, plane: 1 }]
        );
        let hits = resolve_collisions(&collisions, &mut bullets, &mut planes, &mut scores);

        assert_eq!(hits, vec![Hit { shooter: 1, victim: 0 }, Hit { shooter: 0, victim: 1 }]);
        assert_eq!(scores, [1, 1]);
        let survivors: Vec<Vec2> = bullets.iter().map(Bullet::position).collect();
        assert_eq!(survivors, vec![Vec2::new(800.0, 700.0), Vec2::new(50.0, 700.0)]);
    }

    #[test]
    fn test_point_blank_shot_hits_regardless_of_player_index() {
        for shooter in 0..2 {
            let victim = 1 - shooter;
            let mut planes = vec![plane(0, 500.0, 400.0), plane(1, 505.0, 400.0)];
            let mut bullets = vec![bullet(shooter, 503.0, 400.0)];
            let mut scores = [0u32; 2];

            let collisions = detect_collisions(&bullets, &planes);
            assert_eq!(collisions, vec![Collision { bullet: 0, plane: victim }]);
            let hits = resolve_collisions(&collisions, &mut bullets, &mut planes, &mut scores);
            assert_eq!(hits, vec![Hit { shooter, victim }]);
            assert_eq!(scores[shooter], 1);
        }
    }

    #[test]
    fn test_lowest_plane_index_wins() {
        let planes = vec![
            plane(0, 500.0, 400.0),
            plane(1, 505.0, 400.0),
            plane(2, 100.0, 100.0),
        ];
        let bullets = vec![bullet(2, 502.0, 400.0)];
        assert_eq!(
            detect_collisions(&bullets, &planes),
            vec![Collision { bullet: 0, plane: 0 }]
        );
    }

    #[test]
    fn test_non_flying_planes_are_ignored() {
        let mut planes = vec![plane(0, 500.0, 400.0), plane(1, 100.0, 100.0)];
        planes[0].reset(Vec2::new(500.0, 400.0), SPAWN_SPEED, Angle256::ZERO);
        let bullets = vec![bullet(1, 500.0, 400.0)];
        assert!(detect_collisions(&bullets, &planes).is_empty());

        planes[0].set_state(PlaneState::Crashing);
        assert!(detect_collisions(&bullets, &planes).is_empty());
    }

    #[test]
    fn test_detection_is_idempotent() {
        let planes = vec![plane(0, 500.0, 400.0), plane(1, 200.0, 200.0)];
        let bullets = vec![bullet(1, 500.0, 400.0), bullet(0, 205.0, 200.0), bullet(0, 0.0, 0.0)];
        let first = detect_collisions(&bullets, &planes);
        let second = detect_collisions(&bullets, &planes);
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn test_point_outside_box_is_rejected() {
        let planes = vec![plane(0, 500.0, 400.0)];
        let bullets = vec![bullet(1, 500.0, 460.0)];
        assert!(detect_collisions(&bullets, &planes).is_empty());
    }

    #[test]
    #[should_panic(expected = "stale collision record")]
    fn test_stale_record_is_fatal() {
        let mut planes = vec![plane(0, 500.0, 400.0)];
        let mut bullets = vec![bullet(1, 500.0, 400.0)];
        let mut scores = [0u32; 2];
        let bogus = [Collision { bullet: 3, plane: 0 }];
        resolve_collisions(&bogus, &mut bullets, &mut planes, &mut scores);
    }

    #[test]
    #[should_panic(expected = "strictly ordered")]
    fn test_duplicate_bullet_records_are_fatal() {
        let mut planes = vec![plane(0, 500.0, 400.0), plane(1, 500.0, 400.0)];
        let mut bullets = vec![bullet(1, 500.0, 400.0)];
        let mut scores = [0u32; 2];
        let doubled = [Collision { bullet: 0, plane: 0 }, Collision { bullet: 0, plane: 1 }];
        resolve_collisions(&doubled, &mut bullets, &mut planes, &mut scores);
    }
}
