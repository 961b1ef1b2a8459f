//! Fixed-step simulation tick
//!
//! Advances the ball one step, resolves collisions, and applies the
//! resulting score, life, level, and phase transitions.

use super::collision::{self, TickOutcome};
use super::level::LevelSource;
use super::state::{GamePhase, GameState};

/// Advance the game by one tick.
///
/// Only the `Playing` phase simulates; every other phase returns `Ok` with
/// the state untouched. The returned outcome is what this tick's collision
/// resolution produced, after its transitions have been applied to `state`.
pub fn tick(state: &mut GameState, levels: &dyn LevelSource) -> TickOutcome {
    if state.phase != GamePhase::Playing {
        return TickOutcome::Ok;
    }
    state.time_ticks += 1;

    state.ball.advance();
    let outcome = collision::resolve(
        &mut state.ball,
        &state.paddle,
        &mut state.blocks,
        &state.config,
    );

    match outcome {
        TickOutcome::Ok => {}
        TickOutcome::Hit(id) => {
            state.score += state.config.block_score;
            log::debug!("block {id:?} destroyed, score {}", state.score);
        }
        TickOutcome::LifeLost => {
            state.lives -= 1;
            if state.lives == 0 {
                state.phase = GamePhase::GameOver;
                log::info!("game over with score {}", state.score);
            } else {
                log::info!("ball lost, {} lives left", state.lives);
                state.reset_serve();
            }
        }
        TickOutcome::LevelCleared(id) => {
            // The clearing hit still scores.
            state.score += state.config.block_score;
            log::debug!("block {id:?} destroyed, score {}", state.score);
            let next = state.level + 1;
            match levels.layout(next) {
                Some(layout) => {
                    log::info!("level {} cleared", state.level);
                    state.enter_level(next, &layout);
                }
                None => {
                    state.phase = GamePhase::GameWon;
                    log::info!(
                        "level {} cleared - game won with score {}",
                        state.level,
                        state.score
                    );
                }
            }
        }
    }
    outcome
}
