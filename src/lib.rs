//! Arkanoid - a classic block-breaking arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, game state)
//! - `driver`: Tick loop driver wiring input, simulation, and rendering
//! - `schedule`: Cancelable deferred-tick scheduling
//! - `config`: Data-driven gameplay configuration
//!
//! The crate holds no windowing or drawing code. Hosts implement the
//! `driver::Renderer` trait, feed `driver::InputEvent`s in, and arrange for
//! ticks to fire through a `schedule::TickScheduler`.

pub mod config;
pub mod driver;
pub mod schedule;
pub mod sim;

pub use config::GameConfig;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (pixels)
    pub const PLAYFIELD_WIDTH: f32 = 1180.0;
    pub const PLAYFIELD_HEIGHT: f32 = 730.0;

    /// Paddle defaults - a flat platform guarding the bottom edge
    pub const PADDLE_WIDTH: f32 = 90.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    pub const PADDLE_START_X: f32 = 571.0;
    pub const PADDLE_Y: f32 = 680.0;

    /// Ball defaults
    pub const BALL_WIDTH: f32 = 15.0;
    pub const BALL_HEIGHT: f32 = 15.0;
    /// Distance the ball travels per tick on each axis
    pub const BALL_SPEED: f32 = 6.0;

    /// Level grid shape
    pub const GRID_ROWS: usize = 12;
    pub const GRID_COLS: usize = 18;
    pub const BLOCK_WIDTH: f32 = 58.0;
    pub const BLOCK_HEIGHT: f32 = 37.0;
    /// Center of the top-left grid cell
    pub const GRID_ORIGIN_X: f32 = 100.0;
    pub const GRID_ORIGIN_Y: f32 = 100.0;

    /// Scoring and lives
    pub const BLOCK_SCORE: u64 = 100;
    pub const START_LIVES: u8 = 3;
    /// Levels are numbered from 1
    pub const START_LEVEL: u32 = 1;

    /// Delay between simulation ticks
    pub const TICK_INTERVAL_MS: u64 = 2;
}
