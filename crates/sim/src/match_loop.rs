use combatants_shared::*;
use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg64;
use tracing::{debug, info, trace};

use crate::bullet::{update_bullets, Bullet};
use crate::clouds::CloudSystem;
use crate::collision::{detect_collisions, resolve_collisions};
use crate::controls::steer;
use crate::plane::Plane;
use crate::policy::{Control, ControlContext};
use crate::presentation::{InputSource, NoInput, Platform, Presentation};

const LIVERIES: [(&str, Color); PLAYER_COUNT] = [("green", Color::DARKGREEN), ("red", Color::RED)];

/// Where a player (re)spawns: either side of the screen centre, facing each other.
pub fn spawn_point(player: usize, screen: ScreenSize, config: &SimConfig) -> (Vec2, Angle256) {
    let center = screen.center();
    if player == 0 {
        (center + Vec2::new(config.spawn_offset, 0.0), Angle256::LEFT)
    } else {
        (center - Vec2::new(config.spawn_offset, 0.0), Angle256::ZERO)
    }
}

/// One running match. Owns every entity; the caller owns the `Game`.
pub struct Game {
    pub planes: [Plane; PLAYER_COUNT],
    pub bullets: Vec<Bullet>,
    pub scores: [u32; PLAYER_COUNT],
    pub stats: MatchStats,
    pub clouds: CloudSystem,
    config: MatchConfig,
    controls: [Box<dyn Control>; PLAYER_COUNT],
    command_log: [Vec<Command>; PLAYER_COUNT],
    frame: u32,
    screen: ScreenSize,
}

impl Game {
    /// Both planes start Newborn at their spawn points.
    pub fn new(
        config: MatchConfig,
        controls: [Box<dyn Control>; PLAYER_COUNT],
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = Pcg64::seed_from_u64(config.seed);
        let clouds = CloudSystem::random(&mut rng, &config.clouds);
        let screen = config.screen;
        let sim = config.sim;

        let planes = std::array::from_fn(|id| {
            let (position, pitch) = spawn_point(id, screen, &sim);
            let (skin, color) = LIVERIES[id];
            let mut plane = Plane::new(id, skin, color, position, sim.spawn_speed, pitch, sim);
            plane.reset(position, sim.spawn_speed, pitch);
            plane
        });

        debug!(
            seed = config.seed,
            p0 = controls[0].name(),
            p1 = controls[1].name(),
            "game created"
        );

        Ok(Self {
            planes,
            bullets: Vec::new(),
            scores: [0; PLAYER_COUNT],
            stats: MatchStats::default(),
            clouds,
            config,
            controls,
            command_log: Default::default(),
            frame: 0,
            screen,
        })
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Frames simulated so far.
    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Screen size used by the most recent update.
    pub fn screen(&self) -> ScreenSize {
        self.screen
    }

    pub fn control_name(&self, player: usize) -> &str {
        self.controls[player].name()
    }

    /// Every command a player's control has issued, one per frame.
    pub fn commands(&self, player: usize) -> &[Command] {
        &self.command_log[player]
    }

    /// Advance the match by `dt` seconds and return the sounds it made.
    pub fn update(
        &mut self,
        dt: f32,
        screen: ScreenSize,
        input: &dyn InputSource,
    ) -> Vec<SoundEvent> {
        self.screen = screen;
        let sim = self.config.sim;
        let mut events = Vec::new();

        for (id, plane) in self.planes.iter_mut().enumerate() {
            if plane.state() == PlaneState::Crashed {
                let (position, pitch) = spawn_point(id, screen, &sim);
                plane.reset(position, sim.spawn_speed, pitch);
            }
        }

        for player in 0..PLAYER_COUNT {
            let command = {
                let ctx = ControlContext {
                    player,
                    dt,
                    screen,
                    planes: &self.planes,
                    bullets: &self.bullets,
                    input,
                    config: &sim,
                };
                self.controls[player].poll(&ctx)
            };
            self.command_log[player].push(command);

            let plane = &mut self.planes[player];
            steer(plane, command.turn, &sim);
            if command.fire && plane.fire(&mut self.bullets) {
                self.stats.shots[player] += 1;
                events.push(SoundEvent::Fire {
                    player,
                    pan: plane.gun_pan(screen),
                });
            }
        }

        for plane in &mut self.planes {
            plane.update(screen, dt);
        }
        update_bullets(&mut self.bullets, screen, dt);
        self.clouds.update(dt);

        let collisions = detect_collisions(&self.bullets, &self.planes);
        let hits = resolve_collisions(
            &collisions,
            &mut self.bullets,
            &mut self.planes,
            &mut self.scores,
        );
        for hit in hits {
            self.stats.hits[hit.shooter] += 1;
            self.stats.crashes[hit.victim] += 1;
            events.push(SoundEvent::Hit {
                victim: hit.victim,
                shooter: hit.shooter,
            });
        }

        self.frame += 1;
        trace!(frame = self.frame, bullets = self.bullets.len(), "frame advanced");
        events
    }

    /// Hand the current state to a renderer. Bullets go under the planes and
    /// clouds over them; crashed planes are off screen and skipped.
    pub fn draw(&self, sink: &mut dyn Presentation) {
        let screen = self.screen;
        sink.begin_frame(screen);
        for bullet in &self.bullets {
            sink.draw_bullet(bullet);
        }
        for plane in &self.planes {
            if plane.state() != PlaneState::Crashed {
                sink.draw_plane(plane, screen);
            }
        }
        for cloud in self.clouds.clouds() {
            sink.draw_cloud(cloud, screen);
        }
        for (player, plane) in self.planes.iter().enumerate() {
            sink.draw_hud(player, self.scores[player], plane.ammo(), plane.max_ammo());
            sink.engine(player, plane.engine_tone(screen));
        }
        sink.end_frame();
    }

    pub fn snapshot(&self) -> Frame {
        Frame {
            frame: self.frame,
            planes: std::array::from_fn(|i| self.planes[i].snapshot()),
            bullets: self.bullets.iter().map(Bullet::snapshot).collect(),
            scores: self.scores,
        }
    }

    pub fn result(&self) -> MatchResult {
        MatchResult {
            outcome: MatchOutcome::from_scores(self.scores),
            final_frame: self.frame,
            scores: self.scores,
            stats: self.stats,
        }
    }
}

/// Drive a game from a live platform until it asks to close. Returns the
/// number of frames run.
pub fn run<P: Platform>(game: &mut Game, platform: &mut P, sink: &mut dyn Presentation) -> u32 {
    let mut frames = 0;
    while !platform.should_close() {
        let dt = platform.frame_time();
        let screen = platform.screen_size();
        for event in game.update(dt, screen, &*platform) {
            sink.play_sound(event);
        }
        game.draw(sink);
        frames += 1;
    }
    info!(frames, scores = ?game.scores, "game closed");
    frames
}

/// Run a deterministic headless match between two controls.
pub fn run_match(
    config: &MatchConfig,
    p0: Box<dyn Control>,
    p1: Box<dyn Control>,
) -> Result<MatchReport, ConfigError> {
    let mut game = Game::new(config.clone(), [p0, p1])?;
    let dt = config.dt();
    let mut frames = vec![game.snapshot()];

    for _ in 0..config.max_frames {
        game.update(dt, config.screen, &NoInput);
        if game.frame() % config.frame_interval == 0 {
            frames.push(game.snapshot());
        }
    }
    // Capture final frame
    if game.frame() % config.frame_interval != 0 {
        frames.push(game.snapshot());
    }

    let result = game.result();
    info!(
        p0 = %config.p0_name,
        p1 = %config.p1_name,
        outcome = ?result.outcome,
        scores = ?result.scores,
        "match finished"
    );

    Ok(MatchReport {
        config: config.clone(),
        frames,
        result,
    })
}
