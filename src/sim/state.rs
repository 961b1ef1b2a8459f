//! Game state and core simulation types
//!
//! Entities are plain value holders; the only kinematic operation is
//! `Ball::advance`. Everything is serde-serializable so a host can snapshot
//! and restore a run.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::level::{LevelError, LevelLayout, LevelSource};
use crate::config::GameConfig;
use crate::consts::START_LEVEL;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball resting on the paddle, waiting for launch input
    Serve,
    /// Ball in flight, ticking
    Playing,
    /// Out of lives. Terminal.
    GameOver,
    /// Every defined level cleared. Terminal.
    GameWon,
}

/// Travel direction along one axis.
///
/// The ball always moves at full speed on both axes, so the ±1 factor is
/// the only per-axis velocity state. A closed enum keeps it from ever
/// holding anything but ±1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisDir {
    Neg,
    Pos,
}

impl AxisDir {
    /// The ±1 factor applied to the ball speed
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            AxisDir::Neg => -1.0,
            AxisDir::Pos => 1.0,
        }
    }
}

/// The ball. `pos` is its center; the size is fixed by config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub x_dir: AxisDir,
    pub y_dir: AxisDir,
    /// Distance traveled per tick on each axis
    pub speed: f32,
}

impl Ball {
    /// A fresh ball resting on the paddle, aimed up-right for the serve
    pub fn serve(paddle: &Paddle, config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(
                paddle.pos.x,
                paddle.pos.y - config.paddle_size.y / 2.0 - config.ball_size.y / 2.0,
            ),
            x_dir: AxisDir::Pos,
            y_dir: AxisDir::Neg,
            speed: config.ball_speed,
        }
    }

    /// Advance one tick of travel. No bounds checking here; the collision
    /// engine clamps and redirects afterwards. Call exactly once per tick.
    pub fn advance(&mut self) {
        self.pos.x += self.speed * self.x_dir.sign();
        self.pos.y += self.speed * self.y_dir.sign();
    }
}

/// The player's paddle. Moves only horizontally; `pos.y` never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Vec2,
}

/// Stable block identity: the block's slot index in the level grid
/// (row-major), unchanged by deletions around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockId(pub u32);

/// A destructible block. Immutable once placed; removed when hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    pub pos: Vec2,
}

/// Complete game state: the simulation context object.
///
/// Owns the ball, paddle, live block list, and the configuration they are
/// measured against. Mutated only by the input methods below and by
/// `sim::tick`; nothing here is shared or global.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub config: GameConfig,
    /// Current level number (1-based)
    pub level: u32,
    pub score: u64,
    pub lives: u8,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Live blocks, in collision-scan order
    pub blocks: Vec<Block>,
}

impl GameState {
    /// Start a game at level 1. Fails if the level source does not define
    /// level 1 - an undefined level mid-game is a win, but an undefined
    /// first level is a configuration error.
    pub fn new(config: GameConfig, levels: &dyn LevelSource) -> Result<Self, LevelError> {
        let layout = levels
            .layout(START_LEVEL)
            .ok_or(LevelError::Undefined(START_LEVEL))?;
        let paddle = Paddle {
            pos: config.paddle_start,
        };
        let ball = Ball::serve(&paddle, &config);
        let blocks = build_blocks(&layout, &config);
        let lives = config.start_lives;
        log::info!("level {START_LEVEL} loaded with {} blocks", blocks.len());
        Ok(Self {
            config,
            level: START_LEVEL,
            score: 0,
            lives,
            phase: GamePhase::Serve,
            time_ticks: 0,
            paddle,
            ball,
            blocks,
        })
    }

    /// Replace the block field with `layout` and reset for a serve
    pub fn enter_level(&mut self, level: u32, layout: &LevelLayout) {
        self.level = level;
        self.blocks = build_blocks(layout, &self.config);
        log::info!("level {level} loaded with {} blocks", self.blocks.len());
        self.reset_serve();
    }

    /// Put the paddle and ball back at their starting spots, awaiting launch
    pub fn reset_serve(&mut self) {
        self.paddle.pos = self.config.paddle_start;
        self.ball = Ball::serve(&self.paddle, &self.config);
        self.phase = GamePhase::Serve;
    }

    /// Continuous paddle input. The core clamps so the paddle never leaves
    /// the field; while serving, the ball rides along on top of it. Ignored
    /// once the game has ended.
    pub fn drag_paddle(&mut self, new_x: f32) {
        if matches!(self.phase, GamePhase::GameOver | GamePhase::GameWon) {
            return;
        }
        self.paddle.pos.x = self.config.clamp_paddle_x(new_x);
        if self.phase == GamePhase::Serve {
            self.ball = Ball::serve(&self.paddle, &self.config);
        }
    }

    /// Fire the served ball. Only meaningful while serving; any other phase
    /// ignores the request. Returns whether the ball was launched.
    pub fn launch(&mut self) -> bool {
        if self.phase != GamePhase::Serve {
            return false;
        }
        self.phase = GamePhase::Playing;
        true
    }

    /// Whether the ball is currently in flight
    pub fn ball_in_play(&self) -> bool {
        self.phase == GamePhase::Playing
    }
}

/// Lay out the blocks for a level grid.
///
/// The list is built row-major and then reversed; the reversed order is the
/// collision-scan order, so bottom-right blocks are scanned first. Block ids
/// stay the row-major slot index regardless.
fn build_blocks(layout: &LevelLayout, config: &GameConfig) -> Vec<Block> {
    let mut blocks = Vec::new();
    for row in 0..layout.rows() {
        for col in 0..layout.cols() {
            if layout.filled(row, col) {
                blocks.push(Block {
                    id: BlockId((row * layout.cols() + col) as u32),
                    pos: config.grid_origin
                        + Vec2::new(
                            col as f32 * config.block_size.x,
                            row as f32 * config.block_size.y,
                        ),
                });
            }
        }
    }
    blocks.reverse();
    blocks
}
