//! Simulation loop driver
//!
//! Wires the input collaborator, the fixed-step simulation, the renderer
//! collaborator, and the tick scheduler together. The driver owns nothing
//! but the scheduler and the pending tick handle; the host passes the
//! `GameState` in for the duration of each call and keeps it otherwise.

use std::time::Duration;

use crate::schedule::{TaskHandle, TickScheduler};
use crate::sim::collision::TickOutcome;
use crate::sim::level::LevelSource;
use crate::sim::state::{GamePhase, GameState};
use crate::sim::tick::tick;

/// Transient UI text the renderer should show between phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    /// "LEVEL n" when a level begins
    Level(u32),
    GameOver,
    GameWon,
}

/// The rendering collaborator. The core pushes state after every change;
/// what and how to draw is entirely the host's business.
pub trait Renderer {
    fn present(&mut self, state: &GameState);
    fn announce(&mut self, banner: Banner);
}

/// Events from the input collaborator
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Continuous horizontal paddle movement (target center x, clamped by
    /// the core)
    PaddleDrag(f32),
    /// Fire the served ball. Ignored unless serving.
    Launch,
}

/// Drives the cooperative tick loop: one scheduled wake-up at a time, armed
/// while the ball is in play and canceled (or simply not re-armed) the
/// moment it is not.
pub struct LoopDriver<S: TickScheduler> {
    scheduler: S,
    tick_delay: Duration,
    pending: Option<TaskHandle>,
}

impl<S: TickScheduler> LoopDriver<S> {
    pub fn new(scheduler: S, tick_delay: Duration) -> Self {
        Self {
            scheduler,
            tick_delay,
            pending: None,
        }
    }

    /// Access the scheduler (timer-backed hosts poll it through this)
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Whether a tick is currently scheduled
    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    /// Show the opening state and its level banner
    pub fn begin(&self, state: &GameState, renderer: &mut dyn Renderer) {
        renderer.announce(Banner::Level(state.level));
        renderer.present(state);
    }

    /// Feed one input event into the game
    pub fn handle_input(
        &mut self,
        state: &mut GameState,
        renderer: &mut dyn Renderer,
        event: InputEvent,
    ) {
        match event {
            InputEvent::PaddleDrag(new_x) => {
                state.drag_paddle(new_x);
                renderer.present(state);
            }
            InputEvent::Launch => {
                if state.launch() {
                    log::debug!("ball launched on level {}", state.level);
                    self.arm();
                    renderer.present(state);
                }
            }
        }
    }

    /// Run the tick whose scheduled delay has elapsed.
    ///
    /// Applies one simulation step, presents the result, announces phase
    /// banners, and re-arms the scheduler only while the ball stays in
    /// play. A life loss parks the loop until the next launch; the terminal
    /// phases park it for good.
    pub fn on_timer(
        &mut self,
        state: &mut GameState,
        levels: &dyn LevelSource,
        renderer: &mut dyn Renderer,
    ) -> TickOutcome {
        self.pending = None;
        if state.phase != GamePhase::Playing {
            return TickOutcome::Ok;
        }

        let level_before = state.level;
        let outcome = tick(state, levels);
        renderer.present(state);

        match state.phase {
            GamePhase::Playing => self.arm(),
            GamePhase::Serve => {
                if state.level != level_before {
                    renderer.announce(Banner::Level(state.level));
                }
            }
            GamePhase::GameOver => renderer.announce(Banner::GameOver),
            GamePhase::GameWon => renderer.announce(Banner::GameWon),
        }
        outcome
    }

    /// Cancel any pending tick (host pause or teardown)
    pub fn halt(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
    }

    fn arm(&mut self) {
        if self.pending.is_none() {
            self.pending = Some(self.scheduler.schedule(self.tick_delay));
        }
    }
}
