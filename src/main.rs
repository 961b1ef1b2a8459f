//! Native entry point
//!
//! Runs the game headless with a self-playing paddle: a smoke run for the
//! whole loop and a reference for wiring a real host around the core. No
//! frame pacing - the scheduler is polled as fast as the loop spins;
//! interactive hosts would schedule at `config.tick_interval_ms` instead.

use std::path::Path;
use std::time::Duration;

use arkanoid::GameConfig;
use arkanoid::driver::{Banner, InputEvent, LoopDriver, Renderer};
use arkanoid::schedule::TimerScheduler;
use arkanoid::sim::{GamePhase, GameState, LevelSet};

/// Renderer that reports through the log instead of drawing
#[derive(Default)]
struct LogRenderer {
    frames: u64,
}

impl Renderer for LogRenderer {
    fn present(&mut self, state: &GameState) {
        self.frames += 1;
        if self.frames % 5000 == 0 {
            log::debug!(
                "tick {}: ball at ({:.1}, {:.1}), {} blocks left",
                state.time_ticks,
                state.ball.pos.x,
                state.ball.pos.y,
                state.blocks.len()
            );
        }
    }

    fn announce(&mut self, banner: Banner) {
        match banner {
            Banner::Level(n) => log::info!("LEVEL {n}"),
            Banner::GameOver => log::info!("GAME OVER"),
            Banner::GameWon => log::info!("YOU WIN"),
        }
    }
}

/// Use `levels/levels.json` when it is present and valid, else the built-in
/// set.
fn load_levels(config: &GameConfig) -> LevelSet {
    let path = Path::new("levels/levels.json");
    if let Ok(json) = std::fs::read_to_string(path) {
        match LevelSet::from_json_str(&json)
            .and_then(|set| set.validate_shape(config.grid_rows, config.grid_cols).map(|()| set))
        {
            Ok(set) => {
                log::info!("loaded {} levels from {}", set.len(), path.display());
                return set;
            }
            Err(err) => log::warn!("ignoring {}: {err}", path.display()),
        }
    }
    LevelSet::builtin()
}

fn main() {
    env_logger::init();

    let config = GameConfig::default();
    let levels = load_levels(&config);
    let mut state = match GameState::new(config, &levels) {
        Ok(state) => state,
        Err(err) => {
            log::error!("cannot start: {err}");
            std::process::exit(1);
        }
    };

    let mut driver = LoopDriver::new(TimerScheduler::new(), Duration::ZERO);
    let mut renderer = LogRenderer::default();
    driver.begin(&state, &mut renderer);

    // Self-play: keep the paddle under the ball and relaunch whenever the
    // ball is back on it. The tick cap covers rallies that settle into an
    // orbit missing the remaining blocks.
    const MAX_TICKS: u64 = 2_000_000;
    while state.time_ticks < MAX_TICKS {
        match state.phase {
            GamePhase::GameOver | GamePhase::GameWon => break,
            GamePhase::Serve => {
                driver.handle_input(&mut state, &mut renderer, InputEvent::Launch);
            }
            GamePhase::Playing => {
                let target = state.ball.pos.x;
                driver.handle_input(&mut state, &mut renderer, InputEvent::PaddleDrag(target));
                if driver.scheduler_mut().fire_due().is_some() {
                    driver.on_timer(&mut state, &levels, &mut renderer);
                }
            }
        }
    }
    driver.halt();

    log::info!(
        "finished after {} ticks: level {}, score {}, {} lives left",
        state.time_ticks,
        state.level,
        state.score,
        state.lives
    );
}
