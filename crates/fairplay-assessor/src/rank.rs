//! Risk classification: mapping a flag vector and game outcome to a 1-5 rank.
//!
//! Classification is a two-step process:
//!
//! 1. **Table lookup** - [`RANK_RULES`] is scanned top to bottom and the first rule whose
//!    pattern matches the flags decides the rank. Unmatched flag vectors get
//!    [`Rank::NotCheating`].
//! 2. **Outcome cap** - when the player did not win the game, the rank is capped at
//!    [`Rank::Unclear`]. A suspicious pattern without a won game never reaches the top ranks.
//!
//! # Decision Table
//!
//! Columns follow [`PlayerFlags::to_array`] order (`*` = don't care):
//!
//! ```text
//! err adv hi-blur mod-blur cons-mt no-fast hold  rank
//!  T   T     T       T        T       T     T     5
//!  T   *     *       *        *       T     T     5
//!  *   T     *       *        *       T     T     5
//!  T   *     T       *        *       T     *     5
//!  T   *     *       *        T       T     *     4
//!  T   *     *       T        *       T     *     4
//!  *   T     *       T        T       *     *     4
//!  *   T     *       *        *       *     T     4
//!  *   T     T       *        *       *     *     4
//!  T   *     *       F        F       T     *     3
//!  T   *     *       *        *       F     *     2
//!  F   F     *       *        *       *     *     1
//! ```

use serde::{Deserialize, Serialize};

use crate::{flags::PlayerFlags, game::Outcome};

/// Cheating-likelihood rank of one player in one game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum Rank {
    NotCheating = 1,
    UnlikelyCheating = 2,
    Unclear = 3,
    LikelyCheating = 4,
    Cheating = 5,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid rank {value}, expected a value in 1..=5")]
pub struct InvalidRankError {
    pub value: u8,
}

impl TryFrom<u8> for Rank {
    type Error = InvalidRankError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::NotCheating),
            2 => Ok(Self::UnlikelyCheating),
            3 => Ok(Self::Unclear),
            4 => Ok(Self::LikelyCheating),
            5 => Ok(Self::Cheating),
            _ => Err(InvalidRankError { value }),
        }
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank.id()
    }
}

impl Rank {
    pub const ALL: [Self; 5] = [
        Self::NotCheating,
        Self::UnlikelyCheating,
        Self::Unclear,
        Self::LikelyCheating,
        Self::Cheating,
    ];

    /// Highest rank a player can receive for a game they did not win.
    pub const NON_WIN_CAP: Self = Self::Unclear;

    #[must_use]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Classifies a player's game from its flags and outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use fairplay_assessor::{flags::PlayerFlags, game::Outcome, rank::Rank};
    ///
    /// let flags = PlayerFlags::from_array([true; 7]);
    /// assert_eq!(Rank::from_flags(flags, Outcome::Win), Rank::Cheating);
    /// assert_eq!(Rank::from_flags(flags, Outcome::Loss), Rank::Unclear);
    /// ```
    #[must_use]
    pub fn from_flags(flags: PlayerFlags, outcome: Outcome) -> Self {
        let rank = table_rank(flags);
        let capped = if outcome.is_win() {
            rank
        } else {
            rank.min(Self::NON_WIN_CAP)
        };
        tracing::debug!(?flags, ?outcome, ?rank, ?capped, "classified player game");
        capped
    }
}

/// Expected value of a flag in a rule pattern; `None` matches either value.
pub type FlagPattern = [Option<bool>; 7];

/// One row of the decision table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankRule {
    pub pattern: FlagPattern,
    pub rank: Rank,
}

impl RankRule {
    #[must_use]
    pub fn matches(&self, flags: PlayerFlags) -> bool {
        self.pattern
            .iter()
            .zip(flags.to_array())
            .all(|(expected, actual)| expected.is_none_or(|expected| expected == actual))
    }
}

const T: Option<bool> = Some(true);
const F: Option<bool> = Some(false);
const X: Option<bool> = None;

const fn rule(pattern: FlagPattern, rank: Rank) -> RankRule {
    RankRule { pattern, rank }
}

/// The decision table, evaluated top to bottom.
pub const RANK_RULES: &[RankRule] = &[
    rule([T, T, T, T, T, T, T], Rank::Cheating),
    rule([T, X, X, X, X, T, T], Rank::Cheating),
    rule([X, T, X, X, X, T, T], Rank::Cheating),
    rule([T, X, T, X, X, T, X], Rank::Cheating),
    rule([T, X, X, X, T, T, X], Rank::LikelyCheating),
    rule([T, X, X, T, X, T, X], Rank::LikelyCheating),
    rule([X, T, X, T, T, X, X], Rank::LikelyCheating),
    rule([X, T, X, X, X, X, T], Rank::LikelyCheating),
    rule([X, T, T, X, X, X, X], Rank::LikelyCheating),
    rule([T, X, X, F, F, T, X], Rank::Unclear),
    rule([T, X, X, X, X, F, X], Rank::UnlikelyCheating),
    rule([F, F, X, X, X, X, X], Rank::NotCheating),
];

/// Rank from the decision table alone, before the outcome cap.
#[must_use]
pub fn table_rank(flags: PlayerFlags) -> Rank {
    match RANK_RULES.iter().position(|rule| rule.matches(flags)) {
        Some(index) => {
            tracing::trace!(index, "matched decision table rule");
            RANK_RULES[index].rank
        }
        None => Rank::NotCheating,
    }
}
