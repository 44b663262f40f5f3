use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info, trace};

use combatants_shared::*;
use combatants_sim::{
    build_control, run, run_match, Bullet, Cloud, Game, InputSource, Key, Plane, Platform,
    Presentation,
};

#[derive(Parser)]
#[command(name = "combatants", about = "Two-player dogfight simulation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a headless match between two controls
    Run {
        /// Control for player 0 (idle, pursuit, arrows, wasd)
        #[arg(long, default_value = "pursuit")]
        p0: ControlKind,

        /// Control for player 1 (idle, pursuit, arrows, wasd)
        #[arg(long, default_value = "idle")]
        p1: ControlKind,

        /// Random seed for the match
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Frames to simulate
        #[arg(long, default_value_t = MAX_FRAMES)]
        frames: u32,

        /// JSON file overriding simulation constants
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output path for the match report JSON
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Drive a match through the frame loop, logging what a frontend would draw and play
    Watch {
        #[arg(long, default_value = "pursuit")]
        p0: ControlKind,

        #[arg(long, default_value = "pursuit")]
        p1: ControlKind,

        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Seconds to run for
        #[arg(long, default_value_t = 10)]
        seconds: u32,

        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            p0,
            p1,
            seed,
            frames,
            config,
            output,
        } => cmd_run(p0, p1, seed, frames, config.as_deref(), output),

        Commands::Watch {
            p0,
            p1,
            seed,
            seconds,
            config,
        } => cmd_watch(p0, p1, seed, seconds, config.as_deref()),
    }
}

/// Simulation constants from a JSON file, or the defaults.
fn load_sim_config(path: Option<&Path>) -> Result<SimConfig> {
    let Some(path) = path else {
        return Ok(SimConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let sim: SimConfig = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    sim.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    debug!(path = %path.display(), "loaded simulation config");
    Ok(sim)
}

fn match_config(p0: ControlKind, p1: ControlKind, seed: u64, sim: SimConfig) -> MatchConfig {
    MatchConfig {
        seed,
        p0_name: p0.to_string(),
        p1_name: p1.to_string(),
        sim,
        ..Default::default()
    }
}

fn cmd_run(
    p0: ControlKind,
    p1: ControlKind,
    seed: u64,
    frames: u32,
    config_path: Option<&Path>,
    output: Option<PathBuf>,
) -> Result<()> {
    let config = MatchConfig {
        max_frames: frames,
        ..match_config(p0, p1, seed, load_sim_config(config_path)?)
    };

    println!("Running match: {} vs {} (seed={})", p0, p1, seed);

    let report = run_match(&config, build_control(p0), build_control(p1))?;
    let result = &report.result;

    println!();
    println!("=== Match Result ===");
    println!("Outcome:     {:?}", result.outcome);
    println!(
        "Final frame: {} ({:.1}s)",
        result.final_frame,
        result.final_frame as f32 / config.fps as f32
    );
    println!();
    println!("--- Stats ---");
    for (player, name) in [&config.p0_name, &config.p1_name].into_iter().enumerate() {
        println!(
            "  {} (P{}): Score={}, Shots={}, Hits={} ({:.0}%), Crashes={}",
            name,
            player,
            result.scores[player],
            result.stats.shots[player],
            result.stats.hits[player],
            result.stats.hit_rate(player) * 100.0,
            result.stats.crashes[player],
        );
    }

    if let Some(path) = output {
        let json =
            serde_json::to_string_pretty(&report).context("failed to serialize match report")?;
        fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))?;
        println!("\nReport written to {}", path.display());
    }

    Ok(())
}

/// Fixed-rate stand-in for a window: nothing pressed, closes after a frame budget.
struct HeadlessPlatform {
    frames_left: u32,
    dt: f32,
    screen: ScreenSize,
}

impl InputSource for HeadlessPlatform {
    fn is_key_down(&self, _key: Key) -> bool {
        false
    }

    fn is_key_pressed(&self, _key: Key) -> bool {
        false
    }
}

impl Platform for HeadlessPlatform {
    fn frame_time(&mut self) -> f32 {
        self.frames_left = self.frames_left.saturating_sub(1);
        self.dt
    }

    fn screen_size(&self) -> ScreenSize {
        self.screen
    }

    fn should_close(&self) -> bool {
        self.frames_left == 0
    }
}

/// Presentation that logs sounds and a once-a-second HUD line instead of drawing.
struct LogPresentation {
    frame: u32,
    fps: u32,
    planes_drawn: u32,
}

impl Presentation for LogPresentation {
    fn begin_frame(&mut self, _screen: ScreenSize) {
        self.frame += 1;
    }

    fn draw_cloud(&mut self, _cloud: &Cloud, _screen: ScreenSize) {}

    fn draw_bullet(&mut self, _bullet: &Bullet) {}

    fn draw_plane(&mut self, plane: &Plane, _screen: ScreenSize) {
        self.planes_drawn += 1;
        trace!(
            plane = plane.id(),
            x = plane.position().x,
            y = plane.position().y,
            heading = plane.pitch().to_degrees(),
            sprite = plane.sprite_frame(),
            "plane"
        );
    }

    fn draw_hud(&mut self, player: usize, score: u32, ammo: f32, max_ammo: f32) {
        if self.frame % self.fps == 0 {
            info!(
                frame = self.frame,
                player,
                score,
                ammo = %format!("{ammo:.2}/{max_ammo}"),
                "hud"
            );
        }
    }

    fn play_sound(&mut self, event: SoundEvent) {
        match event {
            SoundEvent::Fire { player, pan } => debug!(player, pan, "gunshot"),
            SoundEvent::Hit { victim, shooter } => info!(victim, shooter, "explosion"),
        }
    }
}

fn cmd_watch(
    p0: ControlKind,
    p1: ControlKind,
    seed: u64,
    seconds: u32,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = match_config(p0, p1, seed, load_sim_config(config_path)?);
    let fps = config.fps;
    let mut platform = HeadlessPlatform {
        frames_left: seconds.saturating_mul(fps),
        dt: config.dt(),
        screen: config.screen,
    };
    let mut sink = LogPresentation {
        frame: 0,
        fps,
        planes_drawn: 0,
    };

    let mut game = Game::new(config, [build_control(p0), build_control(p1)])?;
    let frames = run(&mut game, &mut platform, &mut sink);

    println!("{} vs {} after {} frames: {:?}", p0, p1, frames, game.scores);
    Ok(())
}
