//! Per-move evaluation loss derived from position evaluations.
//!
//! Each of a player's moves is scored by how much the evaluation dropped, from that player's
//! point of view, between the position before the move and the position after it:
//!
//! ```text
//! loss = max(0, (before - after) × sign(color))
//! ```
//!
//! Evaluations are capped to ±[`CP_CEILING`] before comparing, and forced mates count as the
//! ceiling, so a single blunder cannot dominate the average. The first mover's first move is
//! compared against [`INITIAL_EVAL`].

use crate::game::{Color, Eval, GameRecord};

/// Largest centipawn magnitude taken into account.
pub const CP_CEILING: i32 = 1000;

/// Evaluation of the starting position.
pub const INITIAL_EVAL: Eval = Eval::cp(15);

/// Centipawn value of `eval` clamped to ±[`CP_CEILING`], with mates mapped to the ceiling.
///
/// Returns `None` for an evaluation carrying neither a score nor a mate.
#[must_use]
pub fn capped_cp(eval: &Eval) -> Option<i32> {
    match (eval.mate, eval.cp) {
        (Some(mate), _) if mate < 0 => Some(-CP_CEILING),
        (Some(_), _) => Some(CP_CEILING),
        (None, Some(cp)) => Some(cp.clamp(-CP_CEILING, CP_CEILING)),
        (None, None) => None,
    }
}

/// Evaluation loss of each of `color`'s analyzed moves, in play order.
///
/// Moves whose surrounding positions are not both evaluated are skipped, so partial analysis
/// yields a shorter list and missing analysis an empty one.
#[must_use]
pub fn eval_losses(game: &GameRecord, color: Color) -> Vec<i32> {
    let evals = if game.is_first_mover(color) {
        let mut evals = Vec::with_capacity(game.evals.len() + 1);
        evals.push(INITIAL_EVAL);
        evals.extend_from_slice(&game.evals);
        evals
    } else {
        game.evals.clone()
    };

    evals
        .chunks_exact(2)
        .filter_map(|pair| {
            let before = capped_cp(&pair[0])?;
            let after = capped_cp(&pair[1])?;
            Some(((before - after) * color.sign()).max(0))
        })
        .collect()
}
