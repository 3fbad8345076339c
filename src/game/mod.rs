pub mod collision;
pub mod entity;
pub mod geometry;
pub mod state;
pub mod wave;

/// One authoritative game-loop step, in milliseconds. All cadence and
/// expiry constants below are multiples of this.
pub const TICK_MS: u32 = 100;

/// Logical playfield, in field units. Rendering scales this to whatever
/// terminal area is available.
pub const FIELD_WIDTH: f32 = 100.0;
pub const FIELD_HEIGHT: f32 = 60.0;

// Hero
pub const HERO_WIDTH: f32 = 7.0;
pub const HERO_HEIGHT: f32 = 5.0;
pub const HERO_SPEED: f32 = 2.5;
pub const HERO_LIVES: u32 = 3;
pub const FIRE_COOLDOWN_MS: u32 = 500;
pub const ENEMY_KILL_POINTS: u32 = 100;
pub const BOSS_KILL_POINTS: u32 = 1000;

// Escort ships (single-player only)
pub const ESCORT_SCALE: f32 = 0.5;
pub const ESCORT_GAP: f32 = 1.5;
pub const ESCORT_FIRE_MS: u32 = 2000;

// Enemies
pub const ENEMY_WIDTH: f32 = 6.0;
pub const ENEMY_HEIGHT: f32 = 4.0;
pub const ENEMY_DESCENT: f32 = 0.4;
pub const PYRAMID_ROWS: u32 = 5;

// Boss
pub const BOSS_WIDTH: f32 = 14.0;
pub const BOSS_HEIGHT: f32 = 7.0;
pub const BOSS_HEALTH: u32 = 30;
pub const BOSS_PATROL_SPEED: f32 = 1.2;
pub const BOSS_DESCENT: f32 = 0.5;
pub const BOSS_SETTLE_Y: f32 = 10.0;
pub const BOSS_FIRE_MIN_Y: f32 = 5.0;
pub const BOSS_FIRE_MS: u32 = 3000;
pub const BOSS_DEATH_BLASTS: u32 = 5;

// Lasers
pub const LASER_WIDTH: f32 = 1.0;
pub const LASER_HEIGHT: f32 = 3.0;
pub const LASER_SPEED: f32 = 3.0;
pub const BOSS_LASER_SPEED: f32 = 2.0;
pub const BOSS_LASER_DRIFT: f32 = 0.5;

// Meteors
pub const METEOR_BIG_SIZE: f32 = 7.0;
pub const METEOR_SMALL_SIZE: f32 = 3.5;
pub const METEOR_FALL: f32 = 1.0;
pub const METEOR_BIG_CHANCE: f64 = 0.3;
pub const METEOR_BASE_SPAWN_MS: u32 = 3000;
pub const METEOR_SPAWN_STEP_MS: u32 = 300;
pub const METEOR_MIN_SPAWN_MS: u32 = 1000;

// Transients
pub const EXPLOSION_MS: u32 = 200;
pub const EXPLOSION_WIDTH: f32 = 6.0;
pub const EXPLOSION_HEIGHT: f32 = 3.0;
pub const WAVE_BANNER_MS: u32 = 2000;
pub const BOSS_BANNER_MS: u32 = 3000;
pub const BANNER_RISE: f32 = 0.4;

// Progression
pub const BOSS_WAVE: u32 = 5;
pub const WAVE_DELAY_MS: u32 = 1000;
