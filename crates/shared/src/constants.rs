// Frame timing
pub const TARGET_FPS: u32 = 60;
pub const DT: f32 = 1.0 / TARGET_FPS as f32;

// Screen (initial window size; the live size is re-read every frame)
pub const SCREEN_WIDTH: i32 = 1024;
pub const SCREEN_HEIGHT: i32 = 768;

// Match
pub const PLAYER_COUNT: usize = 2;
pub const MATCH_DURATION_SECS: u32 = 60;
pub const MAX_FRAMES: u32 = TARGET_FPS * MATCH_DURATION_SECS; // 3600
pub const FRAME_INTERVAL: u32 = 6; // record every 6th frame = 10fps

// Plane life-cycle
pub const NEWBORN_SECS: f32 = 2.0;
pub const CRASH_ROLL_STEP: i8 = 4;
pub const CRASH_DIVE_RATE: f32 = 120.0; // angle steps per second

// Plane control
pub const PITCH_STEP: i8 = 2;
pub const ROLL_CORRECTION_STEP: i8 = 4;

// Spawning
pub const SPAWN_SPEED: f32 = 220.0;
pub const SPAWN_OFFSET: f32 = 20.0;

// Sprite (square so the hit circles fit at every pitch)
pub const PLANE_SPRITE_WIDTH: f32 = 96.0;
pub const PLANE_SPRITE_HEIGHT: f32 = 96.0;

// Ammo
pub const MAX_AMMO: f32 = 3.0;
pub const AMMO_RECHARGE_RATE: f32 = 0.75; // per second

// Bullets
pub const BULLET_SPEED_MULTIPLIER: f32 = 2.0;
pub const BULLET_LIFETIME_SECS: f32 = 2.0;

// Clouds (normalized screen units)
pub const CLOUD_COUNT: usize = 6;
pub const CLOUD_CIRCLES: usize = 15;
pub const CLOUD_AVERAGE_SIZE: f32 = 40.0 / 1024.0;
pub const CLOUD_AVERAGE_OPACITY: f32 = 0.9;
pub const CLOUD_MAX_DRIFT: f32 = 10.0 / 1024.0;

