//! Data-driven gameplay configuration
//!
//! Every dimension and rate the simulation uses lives here, so a host can
//! reshape the game from a JSON blob without recompiling. The defaults
//! reproduce the stock game.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay configuration. Passed into `GameState` at creation and carried
/// by it for the rest of the run; nothing in the crate reads tuning values
/// from anywhere else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Playfield size (width, height). Coordinates run from (0, 0) at the
    /// top-left corner, y growing downward.
    pub playfield: Vec2,
    pub paddle_size: Vec2,
    /// Paddle center at the start of a life
    pub paddle_start: Vec2,
    pub ball_size: Vec2,
    /// Distance the ball travels per tick on each axis
    pub ball_speed: f32,
    /// Level grid shape
    pub grid_rows: usize,
    pub grid_cols: usize,
    pub block_size: Vec2,
    /// Center of the top-left grid cell
    pub grid_origin: Vec2,
    /// Points awarded per destroyed block
    pub block_score: u64,
    pub start_lives: u8,
    /// Delay between simulation ticks
    pub tick_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            playfield: Vec2::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT),
            paddle_size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            paddle_start: Vec2::new(PADDLE_START_X, PADDLE_Y),
            ball_size: Vec2::new(BALL_WIDTH, BALL_HEIGHT),
            ball_speed: BALL_SPEED,
            grid_rows: GRID_ROWS,
            grid_cols: GRID_COLS,
            block_size: Vec2::new(BLOCK_WIDTH, BLOCK_HEIGHT),
            grid_origin: Vec2::new(GRID_ORIGIN_X, GRID_ORIGIN_Y),
            block_score: BLOCK_SCORE,
            start_lives: START_LIVES,
            tick_interval_ms: TICK_INTERVAL_MS,
        }
    }
}

impl GameConfig {
    /// Parse a configuration override. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Clamp a paddle center so the paddle stays fully on the field
    pub fn clamp_paddle_x(&self, x: f32) -> f32 {
        let half = self.paddle_size.x / 2.0;
        x.clamp(half, self.playfield.x - half)
    }
}
