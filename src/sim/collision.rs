//! Collision detection and response
//!
//! Pure, order-sensitive resolution run once per tick: playfield boundary
//! first, then the paddle, then the block field. Crossing the bottom edge
//! short-circuits everything else for that tick.

use serde::{Deserialize, Serialize};

use super::state::{AxisDir, Ball, Block, BlockId, Paddle};
use crate::config::GameConfig;

/// What one tick of collision resolution produced. Exactly one outcome per
/// tick; paddle deflection is a side effect and never appears here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickOutcome {
    /// Nothing of consequence; the ball keeps flying
    Ok,
    /// The ball crossed the bottom edge
    LifeLost,
    /// A block was destroyed
    Hit(BlockId),
    /// The destroyed block was the last one standing
    LevelCleared(BlockId),
}

/// Resolve one tick of collisions against the boundary, the paddle, and the
/// live block list, mutating the ball (and the block list on a hit).
pub fn resolve(
    ball: &mut Ball,
    paddle: &Paddle,
    blocks: &mut Vec<Block>,
    config: &GameConfig,
) -> TickOutcome {
    if boundary_check(ball, config) == Boundary::BottomOut {
        return TickOutcome::LifeLost;
    }
    paddle_check(ball, paddle, config);
    match block_check(ball, blocks, config) {
        Some(id) if blocks.is_empty() => TickOutcome::LevelCleared(id),
        Some(id) => TickOutcome::Hit(id),
        None => TickOutcome::Ok,
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Boundary {
    Inside,
    BottomOut,
}

/// Clamp the ball to the left, right, and top edges, redirecting it back
/// into the field. The bottom edge is open: crossing it loses the life.
fn boundary_check(ball: &mut Ball, config: &GameConfig) -> Boundary {
    let half = config.ball_size / 2.0;
    let field = config.playfield;

    if ball.pos.x < half.x {
        ball.x_dir = AxisDir::Pos;
        ball.pos.x = half.x;
    }
    if ball.pos.x > field.x - half.x {
        ball.x_dir = AxisDir::Neg;
        ball.pos.x = field.x - half.x;
    }
    if ball.pos.y < half.y {
        ball.y_dir = AxisDir::Pos;
        ball.pos.y = half.y;
    }
    if ball.pos.y > field.y - half.y {
        return Boundary::BottomOut;
    }
    Boundary::Inside
}

/// Bounce the ball off the paddle's top face. Flat reflection: only the
/// vertical direction changes, and the ball is snapped so its bottom edge
/// touches the paddle top instead of sinking in.
fn paddle_check(ball: &mut Ball, paddle: &Paddle, config: &GameConfig) {
    let ball_bottom = ball.pos.y + config.ball_size.y / 2.0;
    let half = config.paddle_size / 2.0;
    let left = paddle.pos.x - half.x;
    let right = paddle.pos.x + half.x;
    let top = paddle.pos.y - half.y;
    let bottom = paddle.pos.y + half.y;

    if left <= ball.pos.x && ball.pos.x <= right && top <= ball_bottom && ball_bottom <= bottom {
        ball.y_dir = AxisDir::Neg;
        ball.pos.y = top - config.ball_size.y / 2.0;
    }
}

/// Scan the live blocks in list order and resolve the first edge hit.
///
/// Each block tries four edge patterns in a fixed order: left, bottom,
/// right, top. The first match sets the ball's departure direction away
/// from that edge and removes the block; the scan stops there, so at most
/// one block goes per tick. The pattern order is load-bearing: a corner
/// overlap resolves as whichever pattern matches first, and an overlap
/// matching no pattern falls through to the next block.
fn block_check(ball: &mut Ball, blocks: &mut Vec<Block>, config: &GameConfig) -> Option<BlockId> {
    let block_half = config.block_size / 2.0;
    let ball_half = config.ball_size / 2.0;

    for index in 0..blocks.len() {
        let pos = blocks[index].pos;
        let left = pos.x - block_half.x;
        let right = pos.x + block_half.x;
        let top = pos.y - block_half.y;
        let bottom = pos.y + block_half.y;

        let ball_left = ball.pos.x - ball_half.x;
        let ball_right = ball.pos.x + ball_half.x;
        let ball_top = ball.pos.y - ball_half.y;
        let ball_bottom = ball.pos.y + ball_half.y;

        // Left edge
        if top <= ball.pos.y && ball.pos.y <= bottom && left <= ball_right && ball_right <= right {
            ball.x_dir = AxisDir::Neg;
            return Some(blocks.remove(index).id);
        }
        // Bottom edge
        if left <= ball.pos.x && ball.pos.x <= right && top <= ball_top && ball_top <= bottom {
            ball.y_dir = AxisDir::Pos;
            return Some(blocks.remove(index).id);
        }
        // Right edge
        if top <= ball.pos.y && ball.pos.y <= bottom && left <= ball_left && ball_left <= right {
            ball.x_dir = AxisDir::Pos;
            return Some(blocks.remove(index).id);
        }
        // Top edge
        if left <= ball.pos.x && ball.pos.x <= right && top <= ball_bottom && ball_bottom <= bottom
        {
            ball.y_dir = AxisDir::Neg;
            return Some(blocks.remove(index).id);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    fn config() -> GameConfig {
        GameConfig::default()
    }

    fn ball_at(x: f32, y: f32, x_dir: AxisDir, y_dir: AxisDir) -> Ball {
        Ball {
            pos: Vec2::new(x, y),
            x_dir,
            y_dir,
            speed: config().ball_speed,
        }
    }

    fn paddle_at(x: f32) -> Paddle {
        Paddle {
            pos: Vec2::new(x, 680.0),
        }
    }

    fn block_at(id: u32, x: f32, y: f32) -> Block {
        Block {
            id: BlockId(id),
            pos: Vec2::new(x, y),
        }
    }

    #[test]
    fn free_space_resolves_to_ok_untouched() {
        let config = config();
        let mut ball = ball_at(300.0, 300.0, AxisDir::Pos, AxisDir::Neg);
        let before = ball.clone();
        let mut blocks = vec![block_at(0, 900.0, 100.0)];
        let outcome = resolve(&mut ball, &paddle_at(571.0), &mut blocks, &config);
        assert_eq!(outcome, TickOutcome::Ok);
        assert_eq!(ball, before);
        assert_eq!(blocks.len(), 1);
    }

    #[test]
    fn left_wall_clamps_and_redirects() {
        let config = config();
        let mut ball = ball_at(5.0, 300.0, AxisDir::Neg, AxisDir::Neg);
        let outcome = resolve(&mut ball, &paddle_at(571.0), &mut Vec::new(), &config);
        assert_eq!(outcome, TickOutcome::Ok);
        assert_eq!(ball.pos.x, 7.5);
        assert_eq!(ball.x_dir, AxisDir::Pos);
        assert_eq!(ball.pos.y, 300.0);
    }

    #[test]
    fn right_wall_clamps_and_redirects() {
        let config = config();
        let mut ball = ball_at(1178.0, 300.0, AxisDir::Pos, AxisDir::Neg);
        let outcome = resolve(&mut ball, &paddle_at(571.0), &mut Vec::new(), &config);
        assert_eq!(outcome, TickOutcome::Ok);
        assert_eq!(ball.pos.x, 1172.5);
        assert_eq!(ball.x_dir, AxisDir::Neg);
    }

    #[test]
    fn top_wall_clamps_and_redirects() {
        let config = config();
        let mut ball = ball_at(300.0, 3.0, AxisDir::Pos, AxisDir::Neg);
        let outcome = resolve(&mut ball, &paddle_at(571.0), &mut Vec::new(), &config);
        assert_eq!(outcome, TickOutcome::Ok);
        assert_eq!(ball.pos.y, 7.5);
        assert_eq!(ball.y_dir, AxisDir::Pos);
    }

    #[test]
    fn bottom_edge_loses_the_life_and_nothing_else() {
        let config = config();
        let mut ball = ball_at(300.0, 725.0, AxisDir::Pos, AxisDir::Pos);
        // A block sitting right on the ball must not be hit on the same
        // tick the life is lost.
        let mut blocks = vec![block_at(7, 300.0, 720.0)];
        let outcome = resolve(&mut ball, &paddle_at(571.0), &mut blocks, &config);
        assert_eq!(outcome, TickOutcome::LifeLost);
        assert_eq!(blocks.len(), 1);
    }

    #[test]
    fn paddle_reflects_flat() {
        let config = config();
        let mut ball = ball_at(571.0, 666.0, AxisDir::Pos, AxisDir::Pos);
        let outcome = resolve(&mut ball, &paddle_at(571.0), &mut Vec::new(), &config);
        assert_eq!(outcome, TickOutcome::Ok);
        // Vertical direction flips, horizontal never does.
        assert_eq!(ball.y_dir, AxisDir::Neg);
        assert_eq!(ball.x_dir, AxisDir::Pos);
        // Bottom edge snapped exactly to the paddle top (670).
        assert_eq!(ball.pos.y, 662.5);
    }

    #[test]
    fn paddle_misses_outside_its_span() {
        let config = config();
        let mut ball = ball_at(520.0, 666.0, AxisDir::Pos, AxisDir::Pos);
        resolve(&mut ball, &paddle_at(571.0), &mut Vec::new(), &config);
        assert_eq!(ball.y_dir, AxisDir::Pos);
        assert_eq!(ball.pos.y, 666.0);
    }

    #[test]
    fn block_left_edge_sets_ball_leftward() {
        let config = config();
        let mut ball = ball_at(75.0, 100.0, AxisDir::Pos, AxisDir::Neg);
        let mut blocks = vec![block_at(0, 100.0, 100.0), block_at(1, 900.0, 100.0)];
        let outcome = resolve(&mut ball, &paddle_at(571.0), &mut blocks, &config);
        assert_eq!(outcome, TickOutcome::Hit(BlockId(0)));
        assert_eq!(ball.x_dir, AxisDir::Neg);
        assert_eq!(ball.y_dir, AxisDir::Neg);
        assert_eq!(blocks.len(), 1);
    }

    #[test]
    fn block_bottom_edge_sets_ball_downward() {
        let config = config();
        // Below the block, overlapping upward into it.
        let mut ball = ball_at(100.0, 122.0, AxisDir::Pos, AxisDir::Neg);
        let mut blocks = vec![block_at(0, 100.0, 100.0), block_at(1, 900.0, 100.0)];
        let outcome = resolve(&mut ball, &paddle_at(571.0), &mut blocks, &config);
        assert_eq!(outcome, TickOutcome::Hit(BlockId(0)));
        assert_eq!(ball.y_dir, AxisDir::Pos);
        assert_eq!(ball.x_dir, AxisDir::Pos);
    }

    #[test]
    fn block_right_edge_sets_ball_rightward() {
        let config = config();
        let mut ball = ball_at(131.0, 100.0, AxisDir::Neg, AxisDir::Neg);
        let mut blocks = vec![block_at(0, 100.0, 100.0), block_at(1, 900.0, 100.0)];
        let outcome = resolve(&mut ball, &paddle_at(571.0), &mut blocks, &config);
        assert_eq!(outcome, TickOutcome::Hit(BlockId(0)));
        assert_eq!(ball.x_dir, AxisDir::Pos);
    }

    #[test]
    fn block_top_edge_sets_ball_upward() {
        let config = config();
        let mut ball = ball_at(100.0, 78.0, AxisDir::Pos, AxisDir::Pos);
        let mut blocks = vec![block_at(0, 100.0, 100.0), block_at(1, 900.0, 100.0)];
        let outcome = resolve(&mut ball, &paddle_at(571.0), &mut blocks, &config);
        assert_eq!(outcome, TickOutcome::Hit(BlockId(0)));
        assert_eq!(ball.y_dir, AxisDir::Neg);
    }

    #[test]
    fn corner_hit_resolves_by_edge_priority() {
        let config = config();
        // This position matches both the left and the top edge pattern;
        // left is tried first and must win, leaving y_dir alone.
        let mut ball = ball_at(75.0, 85.0, AxisDir::Pos, AxisDir::Pos);
        let mut blocks = vec![block_at(0, 100.0, 100.0), block_at(1, 900.0, 100.0)];
        let outcome = resolve(&mut ball, &paddle_at(571.0), &mut blocks, &config);
        assert_eq!(outcome, TickOutcome::Hit(BlockId(0)));
        assert_eq!(ball.x_dir, AxisDir::Neg);
        assert_eq!(ball.y_dir, AxisDir::Pos);
    }

    #[test]
    fn pure_corner_overlap_passes_through() {
        let config = config();
        // Boxes overlap but the ball center is outside the block on both
        // axes, so no edge pattern matches and the ball flies on.
        let mut ball = ball_at(65.0, 77.0, AxisDir::Pos, AxisDir::Pos);
        let mut blocks = vec![block_at(0, 100.0, 100.0)];
        let outcome = resolve(&mut ball, &paddle_at(571.0), &mut blocks, &config);
        assert_eq!(outcome, TickOutcome::Ok);
        assert_eq!(blocks.len(), 1);
    }

    #[test]
    fn scan_order_decides_between_overlapping_candidates() {
        let config = config();
        // The ball straddles the seam between two adjacent blocks; each
        // matches an edge pattern, so whichever is scanned first goes.
        let mut ball = ball_at(129.0, 100.0, AxisDir::Pos, AxisDir::Neg);
        let mut blocks = vec![block_at(1, 158.0, 100.0), block_at(0, 100.0, 100.0)];
        let outcome = resolve(&mut ball, &paddle_at(571.0), &mut blocks, &config);
        assert_eq!(outcome, TickOutcome::Hit(BlockId(1)));
        assert_eq!(blocks.len(), 1);

        let mut ball = ball_at(129.0, 100.0, AxisDir::Pos, AxisDir::Neg);
        let mut blocks = vec![block_at(0, 100.0, 100.0), block_at(1, 158.0, 100.0)];
        let outcome = resolve(&mut ball, &paddle_at(571.0), &mut blocks, &config);
        assert_eq!(outcome, TickOutcome::Hit(BlockId(0)));
        assert_eq!(blocks.len(), 1);
    }

    #[test]
    fn destroying_the_last_block_clears_the_level() {
        let config = config();
        let mut ball = ball_at(75.0, 100.0, AxisDir::Pos, AxisDir::Neg);
        let mut blocks = vec![block_at(0, 100.0, 100.0)];
        let outcome = resolve(&mut ball, &paddle_at(571.0), &mut blocks, &config);
        assert_eq!(outcome, TickOutcome::LevelCleared(BlockId(0)));
        assert!(blocks.is_empty());
    }

    fn axis_dir() -> impl Strategy<Value = AxisDir> {
        prop_oneof![Just(AxisDir::Neg), Just(AxisDir::Pos)]
    }

    proptest! {
        #[test]
        fn resolve_is_identity_in_free_space(
            x in 8.0f32..1172.0,
            y in 8.0f32..640.0,
            x_dir in axis_dir(),
            y_dir in axis_dir(),
        ) {
            let config = config();
            let mut ball = ball_at(x, y, x_dir, y_dir);
            let before = ball.clone();
            let outcome = resolve(&mut ball, &paddle_at(571.0), &mut Vec::new(), &config);
            prop_assert_eq!(outcome, TickOutcome::Ok);
            prop_assert_eq!(ball, before);
        }

        #[test]
        fn left_overrun_always_ends_clamped_rightward(
            x in 0.0f32..7.49,
            y in 8.0f32..640.0,
            x_dir in axis_dir(),
        ) {
            let config = config();
            let mut ball = ball_at(x, y, x_dir, AxisDir::Neg);
            resolve(&mut ball, &paddle_at(571.0), &mut Vec::new(), &config);
            prop_assert_eq!(ball.pos.x, 7.5);
            prop_assert_eq!(ball.x_dir, AxisDir::Pos);
        }

        #[test]
        fn advance_moves_exactly_one_step(
            x in 50.0f32..1100.0,
            y in 50.0f32..600.0,
            x_dir in axis_dir(),
            y_dir in axis_dir(),
        ) {
            let mut ball = ball_at(x, y, x_dir, y_dir);
            ball.advance();
            prop_assert_eq!(ball.pos.x, x + 6.0 * x_dir.sign());
            prop_assert_eq!(ball.pos.y, y + 6.0 * y_dir.sign());
        }
    }
}
