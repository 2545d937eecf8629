//! Behavioral flag extraction for one player in one game.
//!
//! [`PlayerGameAnalysis`] gathers everything the assessor needs about one side of a game
//! (evaluation losses, own move times, blur rate, hold alert and whether the player was ever
//! at a disadvantage). From it, two views are derived:
//!
//! - [`PlayerFlags`]: seven independent booleans consumed by the rank decision table
//! - [`SummaryStats`]: accuracy and move-time mean/deviation, rounded to integers
//!
//! # Flags
//!
//! | Flag | Condition |
//! |---|---|
//! | `suspicious_error_rate` | mean evaluation loss < 15 (an empty list counts as 0) |
//! | `always_has_advantage` | no position with opponent ahead by > 100cp or mating |
//! | `high_blur_rate` | blur percentage > 90 |
//! | `moderate_blur_rate` | blur percentage > 70 |
//! | `consistent_move_times` | move-time coefficient of variation < 0.5 (false if undefined) |
//! | `no_fast_moves` | at most 2 moves under 10 centiseconds |
//! | `suspicious_hold_alert` | hold alert raised by the game server |
//!
//! A player with no analyzed moves gets a mean loss of 0 and therefore a suspicious error
//! rate.

use fairplay_stats::descriptive::{self, coefficient_of_variation};
use serde::{Deserialize, Serialize};

use crate::{
    accuracy,
    game::{Color, GameRecord},
};

pub const SUSPICIOUS_ERROR_RATE: f64 = 15.0;
pub const ADVANTAGE_CP_THRESHOLD: i32 = 100;
pub const HIGH_BLUR_PERCENT: u32 = 90;
pub const MODERATE_BLUR_PERCENT: u32 = 70;
pub const CONSISTENT_MOVE_TIME_CV: f64 = 0.5;
pub const FAST_MOVE_CENTIS: u32 = 10;
pub const MAX_FAST_MOVES: usize = 2;

/// Seven independent behavioral flags for one player in one game.
#[expect(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerFlags {
    pub suspicious_error_rate: bool,
    pub always_has_advantage: bool,
    pub high_blur_rate: bool,
    pub moderate_blur_rate: bool,
    pub consistent_move_times: bool,
    pub no_fast_moves: bool,
    pub suspicious_hold_alert: bool,
}

impl PlayerFlags {
    /// Flags in decision-table column order.
    #[must_use]
    pub const fn to_array(self) -> [bool; 7] {
        [
            self.suspicious_error_rate,
            self.always_has_advantage,
            self.high_blur_rate,
            self.moderate_blur_rate,
            self.consistent_move_times,
            self.no_fast_moves,
            self.suspicious_hold_alert,
        ]
    }

    #[must_use]
    pub const fn from_array(flags: [bool; 7]) -> Self {
        let [
            suspicious_error_rate,
            always_has_advantage,
            high_blur_rate,
            moderate_blur_rate,
            consistent_move_times,
            no_fast_moves,
            suspicious_hold_alert,
        ] = flags;
        Self {
            suspicious_error_rate,
            always_has_advantage,
            high_blur_rate,
            moderate_blur_rate,
            consistent_move_times,
            no_fast_moves,
            suspicious_hold_alert,
        }
    }
}

/// Accuracy and move-time summary of one player's game, rounded to integers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Mean evaluation loss.
    pub sf_avg: i32,
    /// Deviation of the evaluation loss.
    pub sf_sd: i32,
    /// Mean move time in centiseconds.
    pub mt_avg: i32,
    /// Deviation of the move time in centiseconds.
    pub mt_sd: i32,
}

/// Everything about one side of a game that the flags are computed from.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerGameAnalysis {
    pub color: Color,
    /// Evaluation loss per analyzed move.
    pub losses: Vec<f64>,
    /// Own move times in centiseconds.
    pub move_times: Vec<f64>,
    pub blur_percent: u32,
    pub hold_alert: bool,
    pub always_has_advantage: bool,
}

impl PlayerGameAnalysis {
    #[must_use]
    pub fn new(game: &GameRecord, color: Color) -> Self {
        let player = game.player(color);
        let losses = accuracy::eval_losses(game, color)
            .into_iter()
            .map(f64::from)
            .collect();
        let move_times = game
            .move_times_of(color)
            .into_iter()
            .map(f64::from)
            .collect();
        let always_has_advantage = !game
            .evals
            .iter()
            .any(|eval| eval.is_disadvantage_for(color, ADVANTAGE_CP_THRESHOLD));

        Self {
            color,
            losses,
            move_times,
            blur_percent: player.blur_percent,
            hold_alert: player.hold_alert,
            always_has_advantage,
        }
    }

    #[must_use]
    pub fn flags(&self) -> PlayerFlags {
        let fast_moves = self
            .move_times
            .iter()
            .filter(|&&t| t < f64::from(FAST_MOVE_CENTIS))
            .count();
        PlayerFlags {
            suspicious_error_rate: descriptive::safe_mean(&self.losses) < SUSPICIOUS_ERROR_RATE,
            always_has_advantage: self.always_has_advantage,
            high_blur_rate: self.blur_percent > HIGH_BLUR_PERCENT,
            moderate_blur_rate: self.blur_percent > MODERATE_BLUR_PERCENT,
            consistent_move_times: coefficient_of_variation(&self.move_times)
                .is_some_and(|cv| cv < CONSISTENT_MOVE_TIME_CV),
            no_fast_moves: fast_moves <= MAX_FAST_MOVES,
            suspicious_hold_alert: self.hold_alert,
        }
    }

    #[must_use]
    pub fn summary(&self) -> SummaryStats {
        SummaryStats {
            sf_avg: round_to_int(descriptive::safe_mean(&self.losses)),
            sf_sd: round_to_int(descriptive::safe_deviation(&self.losses)),
            mt_avg: round_to_int(descriptive::safe_mean(&self.move_times)),
            mt_sd: round_to_int(descriptive::safe_deviation(&self.move_times)),
        }
    }
}

#[expect(clippy::cast_possible_truncation)]
fn round_to_int(value: f64) -> i32 {
    value.round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Eval, tests::game};

    fn analyze(game: &GameRecord, color: Color) -> (PlayerFlags, SummaryStats) {
        let analysis = PlayerGameAnalysis::new(game, color);
        (analysis.flags(), analysis.summary())
    }

    #[test]
    fn test_empty_game_defaults() {
        let (flags, summary) = analyze(&game(), Color::White);
        // No analyzed moves: mean loss defaults to 0, which is below the threshold
        assert!(flags.suspicious_error_rate);
        assert!(flags.always_has_advantage);
        assert!(!flags.high_blur_rate);
        assert!(!flags.moderate_blur_rate);
        assert!(!flags.consistent_move_times);
        assert!(flags.no_fast_moves);
        assert!(!flags.suspicious_hold_alert);
        assert_eq!(summary, SummaryStats::default());
    }

    #[test]
    fn test_error_rate_threshold() {
        // White losses: 15 -> 15 (0), 45 -> 15 (30) => mean 15, not below the threshold
        let game = GameRecord {
            evals: vec![Eval::cp(15), Eval::cp(45), Eval::cp(15)],
            ..game()
        };
        let (flags, summary) = analyze(&game, Color::White);
        assert!(!flags.suspicious_error_rate);
        assert_eq!(summary.sf_avg, 15);
        assert_eq!(summary.sf_sd, 15);
    }

    #[test]
    fn test_advantage_lost_once() {
        let game = GameRecord {
            evals: vec![Eval::cp(30), Eval::cp(-150), Eval::cp(200)],
            ..game()
        };
        let (white, _) = analyze(&game, Color::White);
        let (black, _) = analyze(&game, Color::Black);
        assert!(!white.always_has_advantage);
        assert!(!black.always_has_advantage);
    }

    #[test]
    fn test_advantage_lost_to_mate() {
        let game = GameRecord {
            evals: vec![Eval::cp(30), Eval::mate(7)],
            ..game()
        };
        let (white, _) = analyze(&game, Color::White);
        let (black, _) = analyze(&game, Color::Black);
        assert!(white.always_has_advantage);
        assert!(!black.always_has_advantage);
    }

    #[test]
    fn test_blur_thresholds() {
        let mut game = game();
        game.white.blur_percent = 70;
        game.black.blur_percent = 71;
        assert!(!analyze(&game, Color::White).0.moderate_blur_rate);
        assert!(analyze(&game, Color::Black).0.moderate_blur_rate);
        assert!(!analyze(&game, Color::Black).0.high_blur_rate);

        game.white.blur_percent = 91;
        let (flags, _) = analyze(&game, Color::White);
        assert!(flags.high_blur_rate);
        assert!(flags.moderate_blur_rate);
    }

    #[test]
    fn test_consistent_move_times() {
        let game = GameRecord {
            // White: 100, 110, 90 => cv well below 0.5; black: 10, 300, 20 => cv above 0.5
            move_times: vec![100, 10, 110, 300, 90, 20],
            ..game()
        };
        let (white, summary) = analyze(&game, Color::White);
        assert!(white.consistent_move_times);
        assert_eq!(summary.mt_avg, 100);
        assert_eq!(summary.mt_sd, 8);
        assert!(!analyze(&game, Color::Black).0.consistent_move_times);
    }

    #[test]
    fn test_zero_move_times_are_not_consistent() {
        let game = GameRecord {
            move_times: vec![0, 0, 0, 0],
            ..game()
        };
        assert!(!analyze(&game, Color::White).0.consistent_move_times);
    }

    #[test]
    fn test_fast_moves() {
        let game = GameRecord {
            // White: 5, 9, 50 => two fast moves; black: 3, 4, 8 => three fast moves
            move_times: vec![5, 3, 9, 4, 50, 8],
            ..game()
        };
        assert!(analyze(&game, Color::White).0.no_fast_moves);
        assert!(!analyze(&game, Color::Black).0.no_fast_moves);
    }

    #[test]
    fn test_hold_alert_passthrough() {
        let mut game = game();
        game.black.hold_alert = true;
        assert!(!analyze(&game, Color::White).0.suspicious_hold_alert);
        assert!(analyze(&game, Color::Black).0.suspicious_hold_alert);
    }

    #[test]
    fn test_array_round_trip_order() {
        let flags = PlayerFlags {
            high_blur_rate: true,
            suspicious_hold_alert: true,
            ..PlayerFlags::default()
        };
        assert_eq!(
            flags.to_array(),
            [false, false, true, false, false, false, true]
        );
        assert_eq!(PlayerFlags::from_array(flags.to_array()), flags);
    }
}
