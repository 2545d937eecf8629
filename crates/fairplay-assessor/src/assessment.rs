//! Per-player, per-game assessment records.
//!
//! A [`PlayerAssessment`] packages the rank, flags and summary statistics of one side of a
//! finished, analyzed game. It is created once and then only read: the storage layer keys it
//! by [`PlayerAssessment::storage_key`] and the aggregate engine consumes histories of them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    flags::{PlayerFlags, PlayerGameAnalysis},
    game::{Color, GameRecord},
    rank::Rank,
};

/// Assessment of one player's behavior in one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerAssessment {
    pub game_id: String,
    pub user_id: String,
    pub color: Color,
    pub rank: Rank,
    pub date: DateTime<Utc>,
    pub flags: PlayerFlags,
    /// Mean evaluation loss.
    pub sf_avg: i32,
    /// Deviation of the evaluation loss.
    pub sf_sd: i32,
    /// Mean move time in centiseconds.
    pub mt_avg: i32,
    /// Deviation of the move time in centiseconds.
    pub mt_sd: i32,
    /// Blur percentage.
    pub blurs: u32,
    pub hold: bool,
}

impl PlayerAssessment {
    /// Assesses `color`'s play in `game`, stamped with `date`.
    #[must_use]
    pub fn build(game: &GameRecord, color: Color, date: DateTime<Utc>) -> Self {
        let analysis = PlayerGameAnalysis::new(game, color);
        let flags = analysis.flags();
        let summary = analysis.summary();
        let rank = Rank::from_flags(flags, game.outcome_for(color));
        let player = game.player(color);

        tracing::debug!(
            game_id = %game.id,
            user_id = %player.user_id,
            %color,
            rank = rank.id(),
            "built player assessment"
        );

        Self {
            game_id: game.id.clone(),
            user_id: player.user_id.clone(),
            color,
            rank,
            date,
            flags,
            sf_avg: summary.sf_avg,
            sf_sd: summary.sf_sd,
            mt_avg: summary.mt_avg,
            mt_sd: summary.mt_sd,
            blurs: analysis.blur_percent,
            hold: analysis.hold_alert,
        }
    }

    /// Assesses `color`'s play in `game`, stamped with the current time.
    #[must_use]
    pub fn build_now(game: &GameRecord, color: Color) -> Self {
        Self::build(game, color, Utc::now())
    }

    /// Key under which the record is persisted: `<game id>/<color>`.
    #[must_use]
    pub fn storage_key(&self) -> String {
        format!("{}/{}", self.game_id, self.color)
    }

    /// Move-time coefficient of variation computed from the rounded summary.
    ///
    /// Not finite when `mt_avg` is zero.
    #[must_use]
    pub fn move_time_cv(&self) -> f64 {
        f64::from(self.mt_sd) / f64::from(self.mt_avg)
    }
}

/// White and black assessments of the same game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameAssessments {
    pub white: Option<PlayerAssessment>,
    pub black: Option<PlayerAssessment>,
}

impl GameAssessments {
    /// Assesses both sides of `game`.
    #[must_use]
    pub fn build(game: &GameRecord, date: DateTime<Utc>) -> Self {
        Self {
            white: Some(PlayerAssessment::build(game, Color::White, date)),
            black: Some(PlayerAssessment::build(game, Color::Black, date)),
        }
    }

    #[must_use]
    pub fn color(&self, color: Color) -> Option<&PlayerAssessment> {
        match color {
            Color::White => self.white.as_ref(),
            Color::Black => self.black.as_ref(),
        }
    }

    pub fn insert(&mut self, assessment: PlayerAssessment) {
        match assessment.color {
            Color::White => self.white = Some(assessment),
            Color::Black => self.black = Some(assessment),
        }
    }
}
