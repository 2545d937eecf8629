//! Game data supplied by the external game/analysis provider.
//!
//! Nothing in this module is computed by the assessor; these types only describe the shape of
//! a finished game as it arrives (usually as JSON):
//!
//! ```json
//! {
//!   "id": "abcd1234",
//!   "start_color": "white",
//!   "move_times": [120, 95, 310, 80],
//!   "evals": [{ "cp": 20 }, { "cp": 18 }, { "mate": 5 }],
//!   "winner": "white",
//!   "white": { "user_id": "alice", "blur_percent": 12, "hold_alert": false },
//!   "black": { "user_id": "bob", "blur_percent": 0, "hold_alert": false }
//! }
//! ```
//!
//! Move times are interleaved per ply, in centiseconds, beginning with the first mover.
//! Evaluations are from white's point of view, one entry per analyzed ply (the list may be
//! shorter than the move list, or empty, when the analysis is partial).

use std::fmt;

use fairplay_stats::sequence::skip_alternate;
use serde::{Deserialize, Serialize};

/// Side of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    White,
    Black,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.name(), f)
    }
}

impl Color {
    pub const ALL: [Self; 2] = [Self::White, Self::Black];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Black => "black",
        }
    }

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// `+1` for white and `-1` for black, used to orient white-POV evaluations.
    #[must_use]
    pub const fn sign(self) -> i32 {
        match self {
            Self::White => 1,
            Self::Black => -1,
        }
    }
}

/// Result of a game from one player's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::IsVariant)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Win,
    Loss,
    Draw,
}

/// Engine evaluation of a single position, from white's point of view.
///
/// `mate` is the number of moves to a forced mate (positive when white mates). When both
/// fields are present, `mate` takes precedence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Eval {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cp: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mate: Option<i32>,
}

impl Eval {
    #[must_use]
    pub const fn cp(cp: i32) -> Self {
        Self {
            cp: Some(cp),
            mate: None,
        }
    }

    #[must_use]
    pub const fn mate(moves: i32) -> Self {
        Self {
            cp: None,
            mate: Some(moves),
        }
    }

    /// Returns `true` if this position shows `color`'s opponent ahead by more than
    /// `cp_threshold` centipawns, or a forced mate against `color`.
    #[must_use]
    pub fn is_disadvantage_for(&self, color: Color, cp_threshold: i32) -> bool {
        match (self.mate, self.cp) {
            (Some(mate), _) => mate.signum() == -color.sign(),
            (None, Some(cp)) => cp * color.sign() < -cp_threshold,
            (None, None) => false,
        }
    }
}

/// Per-player telemetry recorded during a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerGameData {
    pub user_id: String,
    /// Percentage (0-100) of moves played with a window blur event.
    #[serde(default)]
    pub blur_percent: u32,
    /// Whether the player's move submission matched an automated-play signature.
    #[serde(default)]
    pub hold_alert: bool,
}

/// A finished game together with its computer analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: String,
    #[serde(default = "default_start_color")]
    pub start_color: Color,
    /// Interleaved per-ply move times in centiseconds.
    #[serde(default)]
    pub move_times: Vec<u32>,
    /// White-POV evaluation after each analyzed ply.
    #[serde(default)]
    pub evals: Vec<Eval>,
    /// `None` for draws.
    #[serde(default)]
    pub winner: Option<Color>,
    pub white: PlayerGameData,
    pub black: PlayerGameData,
}

fn default_start_color() -> Color {
    Color::White
}

impl GameRecord {
    #[must_use]
    pub fn player(&self, color: Color) -> &PlayerGameData {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    /// Returns `true` if `color` made the first move of the game.
    #[must_use]
    pub fn is_first_mover(&self, color: Color) -> bool {
        self.start_color == color
    }

    /// Move times of `color`'s own moves, in play order.
    #[must_use]
    pub fn move_times_of(&self, color: Color) -> Vec<u32> {
        let offset = usize::from(!self.is_first_mover(color));
        skip_alternate(&self.move_times, offset).copied().collect()
    }

    #[must_use]
    pub fn outcome_for(&self, color: Color) -> Outcome {
        match self.winner {
            Some(winner) if winner == color => Outcome::Win,
            Some(_) => Outcome::Loss,
            None => Outcome::Draw,
        }
    }
}
