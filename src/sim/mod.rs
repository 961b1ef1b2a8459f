//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - Fixed unit-step ticks only
//! - Stable block scan order
//! - No rendering, scheduling, or platform dependencies

pub mod collision;
pub mod level;
pub mod state;
pub mod tick;

pub use collision::{TickOutcome, resolve};
pub use level::{LevelError, LevelLayout, LevelSet, LevelSource};
pub use state::{AxisDir, Ball, Block, BlockId, GamePhase, GameState, Paddle};
pub use tick::tick;
