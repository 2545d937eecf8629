//! Account-level aggregation of per-game assessments.
//!
//! An [`AggregateAssessment`] combines a user's assessment history with their relation
//! cohort (accounts linked by shared technical signals) and decides one [`AccountAction`].
//!
//! # Predicates
//!
//! With `c5` = number of rank-5 games, `c45` = number of rank-4 and rank-5 games,
//! `n` = history size (at least 1) and `m` = 0.02 when the user has related accounts:
//!
//! ```text
//! markable   = (c5 >= 2 || c45 >= 4) && (c5/n >= 0.05 - m || c45/n >= 0.10 - m)
//! reportable = (c5 >= 1 || c45 >= 2) && (c5/n >= 0.02 - m || c45/n >= 0.05 - m)
//! bannable   = related users >= 1 && every related user is a confirmed cheater
//! actionable = every split comparison unknown
//!              || some split comparison significant
//!              || n < 50
//! ```
//!
//! # Split Comparisons
//!
//! The history is split three ways (blur > 70 vs. not, move-time CV < 0.5 vs. >= 0.5, hold
//! alert vs. not). For each split the mean evaluation loss of both sides is compared: the
//! comparison is [`Significance::Significant`] when the suspicious side plays more than 10
//! centipawns better on average, and [`Significance::Unknown`] when either side is empty.
//!
//! On a history of at least 50 games where some split is known and none is significant,
//! automatic marking is downgraded to a report.
//!
//! # Decision
//!
//! ```text
//! actionable:  markable && bannable -> EngineAndBan
//!              markable             -> Engine
//!              reportable           -> Report
//!              otherwise            -> Nothing
//! otherwise:   markable || reportable -> Report
//!              otherwise              -> Nothing
//! ```

use std::collections::BTreeSet;

use fairplay_stats::descriptive;
use serde::{Deserialize, Serialize};

use crate::{assessment::PlayerAssessment, flags, rank::Rank};

/// Rates and the relation modifier are expressed in basis points (1/10 000) and compared
/// as exact integer ratios.
pub const BASIS_POINTS: usize = 10_000;
pub const RELATION_MODIFIER_BP: usize = 200;
pub const MARK_CHEATING_COUNT: usize = 2;
pub const MARK_LIKELY_COUNT: usize = 4;
pub const MARK_CHEATING_RATE_BP: usize = 500;
pub const MARK_LIKELY_RATE_BP: usize = 1_000;
pub const REPORT_CHEATING_COUNT: usize = 1;
pub const REPORT_LIKELY_COUNT: usize = 2;
pub const REPORT_CHEATING_RATE_BP: usize = 200;
pub const REPORT_LIKELY_RATE_BP: usize = 500;
/// Minimum accuracy gap, in centipawns, for a split comparison to be significant.
pub const SIGNIFICANT_SF_DIFFERENCE: f64 = 10.0;
/// History size from which split comparisons can veto automatic marking.
pub const MIN_ASSESSMENTS_FOR_SPLITS: usize = 50;

/// Moderation action recommended for an account, ordered by severity.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::IsVariant,
)]
#[serde(rename_all = "snake_case")]
pub enum AccountAction {
    Nothing,
    Report,
    Engine,
    EngineAndBan,
}

impl AccountAction {
    pub const ALL: [Self; 4] = [Self::Nothing, Self::Report, Self::Engine, Self::EngineAndBan];

    #[must_use]
    pub const fn id(self) -> u8 {
        match self {
            Self::Nothing => 1,
            Self::Report => 2,
            Self::Engine => 3,
            Self::EngineAndBan => 4,
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Nothing => "Not suspicious",
            Self::Report => "Report to mods",
            Self::Engine => "Mark as engine",
            Self::EngineAndBan => "Mark and IP ban",
        }
    }

    /// Severity class used by moderator tooling for sorting and coloring.
    #[must_use]
    pub const fn color_class(self) -> &'static str {
        match self {
            Self::Nothing => "1",
            Self::Report => "2",
            Self::Engine => "3",
            Self::EngineAndBan => "4",
        }
    }
}

/// Outcome of one suspicious-vs-ordinary split comparison.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::IsVariant,
)]
#[serde(rename_all = "snake_case")]
pub enum Significance {
    /// One side of the split has no games.
    Unknown,
    Significant,
    NotSignificant,
}

/// Behavioral dimension along which the history is split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Split {
    Blur,
    MoveTimeVariance,
    Hold,
}

impl Split {
    pub const ALL: [Self; 3] = [Self::Blur, Self::MoveTimeVariance, Self::Hold];

    /// `Some(true)` for the suspicious side, `Some(false)` for the ordinary side, `None` when
    /// the assessment belongs to neither.
    fn side(self, assessment: &PlayerAssessment) -> Option<bool> {
        match self {
            Self::Blur => Some(assessment.blurs > flags::MODERATE_BLUR_PERCENT),
            Self::MoveTimeVariance => {
                let cv = assessment.move_time_cv();
                if cv < flags::CONSISTENT_MOVE_TIME_CV {
                    Some(true)
                } else if cv >= flags::CONSISTENT_MOVE_TIME_CV {
                    Some(false)
                } else {
                    None
                }
            }
            Self::Hold => Some(assessment.hold),
        }
    }
}

/// Mean evaluation loss on both sides of a split and whether the gap is significant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplitComparison {
    pub split: Split,
    pub suspicious_sf_avg: Option<f64>,
    pub ordinary_sf_avg: Option<f64>,
    pub significance: Significance,
}

impl SplitComparison {
    fn compute(split: Split, assessments: &[PlayerAssessment]) -> Self {
        let (suspicious, ordinary) = assessments.iter().fold(
            (vec![], vec![]),
            |(mut suspicious, mut ordinary), assessment| {
                match split.side(assessment) {
                    Some(true) => suspicious.push(f64::from(assessment.sf_avg)),
                    Some(false) => ordinary.push(f64::from(assessment.sf_avg)),
                    None => {}
                }
                (suspicious, ordinary)
            },
        );
        let suspicious_sf_avg = descriptive::mean(&suspicious);
        let ordinary_sf_avg = descriptive::mean(&ordinary);
        let significance = match (suspicious_sf_avg, ordinary_sf_avg) {
            (Some(s), Some(o)) if o - s > SIGNIFICANT_SF_DIFFERENCE => Significance::Significant,
            (Some(_), Some(_)) => Significance::NotSignificant,
            _ => Significance::Unknown,
        };
        Self {
            split,
            suspicious_sf_avg,
            ordinary_sf_avg,
            significance,
        }
    }
}

/// A user's assessment history together with their relation cohort.
#[derive(Debug, Clone)]
pub struct AggregateAssessment {
    assessments: Vec<PlayerAssessment>,
    related_users: BTreeSet<String>,
    related_cheaters: BTreeSet<String>,
    cheating_sum: usize,
    likely_cheating_sum: usize,
}

impl AggregateAssessment {
    /// Builds the aggregate from a user's history and relation lists.
    ///
    /// Identifier lists are de-duplicated. Confirmed cheaters that are not among the related
    /// users are ignored, so the cheater count never exceeds the related-user count.
    #[must_use]
    pub fn new<U, C>(assessments: Vec<PlayerAssessment>, related_users: U, related_cheaters: C) -> Self
    where
        U: IntoIterator<Item = String>,
        C: IntoIterator<Item = String>,
    {
        let related_users = related_users.into_iter().collect::<BTreeSet<_>>();
        let related_cheaters = related_cheaters
            .into_iter()
            .filter(|id| related_users.contains(id))
            .collect();
        let count_rank = |rank| assessments.iter().filter(|a| a.rank == rank).count();
        let cheating_sum = count_rank(Rank::Cheating);
        let likely_cheating_sum = count_rank(Rank::LikelyCheating);
        Self {
            assessments,
            related_users,
            related_cheaters,
            cheating_sum,
            likely_cheating_sum,
        }
    }

    #[must_use]
    pub fn assessments(&self) -> &[PlayerAssessment] {
        &self.assessments
    }

    /// Number of rank-5 assessments.
    #[must_use]
    pub fn cheating_sum(&self) -> usize {
        self.cheating_sum
    }

    /// Number of rank-4 assessments.
    #[must_use]
    pub fn likely_cheating_sum(&self) -> usize {
        self.likely_cheating_sum
    }

    /// History size, floored to one.
    #[must_use]
    pub fn assessments_count(&self) -> usize {
        self.assessments.len().max(1)
    }

    #[must_use]
    pub fn related_users_count(&self) -> usize {
        self.related_users.len()
    }

    #[must_use]
    pub fn related_cheaters_count(&self) -> usize {
        self.related_cheaters.len()
    }

    /// Threshold reduction for accounts with related users, in basis points.
    #[must_use]
    pub fn relation_modifier_bp(&self) -> usize {
        if self.related_users_count() >= 1 {
            RELATION_MODIFIER_BP
        } else {
            0
        }
    }

    #[must_use]
    pub fn relation_modifier(&self) -> f64 {
        bp_to_rate(self.relation_modifier_bp())
    }

    /// Share of rank-5 games in the history.
    #[must_use]
    pub fn cheating_rate(&self) -> f64 {
        self.rate(self.cheating_sum)
    }

    /// Share of rank-4 and rank-5 games in the history.
    #[must_use]
    pub fn likely_cheating_rate(&self) -> f64 {
        self.rate(self.cheating_sum + self.likely_cheating_sum)
    }

    #[expect(clippy::cast_precision_loss)]
    fn rate(&self, count: usize) -> f64 {
        count as f64 / self.assessments_count() as f64
    }

    /// `count / assessments_count >= (rate_bp - relation_modifier_bp) / 10 000`, cross-multiplied.
    fn rate_reaches(&self, count: usize, rate_bp: usize) -> bool {
        let threshold_bp = rate_bp.saturating_sub(self.relation_modifier_bp());
        count * BASIS_POINTS >= threshold_bp * self.assessments_count()
    }

    fn exceeds(
        &self,
        (cheating_count, likely_count): (usize, usize),
        (cheating_rate_bp, likely_rate_bp): (usize, usize),
    ) -> bool {
        let likely_sum = self.cheating_sum + self.likely_cheating_sum;
        (self.cheating_sum >= cheating_count || likely_sum >= likely_count)
            && (self.rate_reaches(self.cheating_sum, cheating_rate_bp)
                || self.rate_reaches(likely_sum, likely_rate_bp))
    }

    #[must_use]
    pub fn markable(&self) -> bool {
        self.exceeds(
            (MARK_CHEATING_COUNT, MARK_LIKELY_COUNT),
            (MARK_CHEATING_RATE_BP, MARK_LIKELY_RATE_BP),
        )
    }

    #[must_use]
    pub fn reportable(&self) -> bool {
        self.exceeds(
            (REPORT_CHEATING_COUNT, REPORT_LIKELY_COUNT),
            (REPORT_CHEATING_RATE_BP, REPORT_LIKELY_RATE_BP),
        )
    }

    /// Every known related account is already a confirmed cheater.
    #[must_use]
    pub fn bannable(&self) -> bool {
        self.related_users_count() >= 1 && self.related_cheaters_count() == self.related_users_count()
    }

    #[must_use]
    pub fn split_comparisons(&self) -> [SplitComparison; 3] {
        Split::ALL.map(|split| SplitComparison::compute(split, &self.assessments))
    }

    #[must_use]
    pub fn actionable(&self) -> bool {
        let comparisons = self.split_comparisons();
        comparisons.iter().all(|c| c.significance.is_unknown())
            || comparisons.iter().any(|c| c.significance.is_significant())
            || self.assessments_count() < MIN_ASSESSMENTS_FOR_SPLITS
    }

    #[must_use]
    pub fn action(&self) -> AccountAction {
        let markable = self.markable();
        let reportable = self.reportable();
        let bannable = self.bannable();
        let actionable = self.actionable();

        let action = match (actionable, markable, reportable) {
            (true, true, _) if bannable => AccountAction::EngineAndBan,
            (true, true, _) => AccountAction::Engine,
            (true, false, true) | (false, true, _) | (false, _, true) => AccountAction::Report,
            (_, false, false) => AccountAction::Nothing,
        };

        tracing::debug!(
            assessments = self.assessments.len(),
            cheating = self.cheating_sum,
            likely_cheating = self.likely_cheating_sum,
            related_users = self.related_users_count(),
            related_cheaters = self.related_cheaters_count(),
            markable,
            reportable,
            bannable,
            actionable,
            ?action,
            "decided account action"
        );
        action
    }
}

#[expect(clippy::cast_precision_loss)]
fn bp_to_rate(bp: usize) -> f64 {
    bp as f64 / BASIS_POINTS as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::tests::assessment;

    fn history(ranks: &[(Rank, usize)]) -> Vec<PlayerAssessment> {
        ranks
            .iter()
            .flat_map(|&(rank, count)| std::iter::repeat_n(rank, count))
            .enumerate()
            .map(|(i, rank)| assessment(&format!("g{i}"), rank))
            .collect()
    }

    fn ids(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|&id| id.to_owned()).collect()
    }

    #[test]
    fn test_empty_history() {
        let aggregate = AggregateAssessment::new(vec![], vec![], vec![]);
        assert_eq!(aggregate.assessments_count(), 1);
        assert_eq!(aggregate.cheating_sum(), 0);
        assert_eq!(aggregate.likely_cheating_sum(), 0);
        assert!(!aggregate.markable());
        assert!(!aggregate.reportable());
        assert!(!aggregate.bannable());
        assert!(aggregate.actionable());
        assert_eq!(aggregate.action(), AccountAction::Nothing);
    }

    #[test]
    fn test_cheating_rate_without_relations_marks_engine() {
        let assessments = history(&[(Rank::Cheating, 3), (Rank::NotCheating, 7)]);
        let aggregate = AggregateAssessment::new(assessments, vec![], vec![]);
        assert_eq!(aggregate.cheating_sum(), 3);
        assert!((aggregate.cheating_rate() - 0.3).abs() < f64::EPSILON);
        assert!(aggregate.markable());
        assert!(!aggregate.bannable());
        assert_eq!(aggregate.action(), AccountAction::Engine);
    }

    #[test]
    fn test_all_related_cheaters_bans() {
        let assessments = history(&[(Rank::Cheating, 3), (Rank::NotCheating, 7)]);
        let related = ids(&["u1", "u2", "u3"]);
        let aggregate = AggregateAssessment::new(assessments, related.clone(), related);
        assert_eq!(aggregate.related_users_count(), 3);
        assert_eq!(aggregate.related_cheaters_count(), 3);
        assert!(aggregate.bannable());
        assert_eq!(aggregate.action(), AccountAction::EngineAndBan);
    }

    #[test]
    fn test_partial_related_cheaters_do_not_ban() {
        let assessments = history(&[(Rank::Cheating, 3), (Rank::NotCheating, 7)]);
        let aggregate =
            AggregateAssessment::new(assessments, ids(&["u1", "u2"]), ids(&["u1"]));
        assert!(!aggregate.bannable());
        assert_eq!(aggregate.action(), AccountAction::Engine);
    }

    #[test]
    fn test_relation_lists_are_deduplicated() {
        let aggregate = AggregateAssessment::new(
            vec![],
            ids(&["u1", "u1", "u2"]),
            ids(&["u1", "u1", "u2", "stranger"]),
        );
        assert_eq!(aggregate.related_users_count(), 2);
        assert_eq!(aggregate.related_cheaters_count(), 2);
        assert!(aggregate.bannable());
        // Bannable alone is not enough without a markable history
        assert_eq!(aggregate.action(), AccountAction::Nothing);
    }

    #[test]
    fn test_single_cheating_game_reports() {
        let assessments = history(&[(Rank::Cheating, 1), (Rank::NotCheating, 9)]);
        let aggregate = AggregateAssessment::new(assessments, vec![], vec![]);
        assert!(!aggregate.markable());
        assert!(aggregate.reportable());
        assert_eq!(aggregate.action(), AccountAction::Report);
    }

    #[test]
    fn test_likely_cheating_counts() {
        // 4 likely-cheating games out of 30: 13% >= 10%
        let assessments = history(&[(Rank::LikelyCheating, 4), (Rank::Unclear, 26)]);
        let aggregate = AggregateAssessment::new(assessments, vec![], vec![]);
        assert_eq!(aggregate.likely_cheating_sum(), 4);
        assert!(aggregate.markable());
        assert_eq!(aggregate.action(), AccountAction::Engine);
    }

    #[test]
    fn test_relation_modifier_lowers_thresholds() {
        // 2 cheating games out of 50: 4% is below 5%, but above 5% - 2%
        let assessments = history(&[(Rank::Cheating, 2), (Rank::NotCheating, 48)]);
        let alone = AggregateAssessment::new(assessments.clone(), vec![], vec![]);
        assert!((alone.relation_modifier() - 0.0).abs() < f64::EPSILON);
        assert!(!alone.markable());
        assert!(alone.reportable());

        let related = AggregateAssessment::new(assessments, ids(&["u1"]), vec![]);
        assert_eq!(related.relation_modifier_bp(), RELATION_MODIFIER_BP);
        assert!((related.relation_modifier() - 0.02).abs() < f64::EPSILON);
        assert!(related.markable());
    }

    #[test]
    fn test_relation_modifier_exact_rate_boundary() {
        // 3 cheating games out of 100: exactly 5% - 2%
        let assessments = history(&[(Rank::Cheating, 3), (Rank::NotCheating, 97)]);
        let alone = AggregateAssessment::new(assessments.clone(), vec![], vec![]);
        assert!(!alone.markable());
        assert_eq!(alone.action(), AccountAction::Report);

        let related = AggregateAssessment::new(assessments, ids(&["u1"]), vec![]);
        assert!(related.markable());
        assert_eq!(related.action(), AccountAction::Engine);
    }

    #[test]
    fn test_relation_modifier_exact_likely_rate_boundary() {
        // 16 likely-cheating games out of 200: exactly 10% - 2%
        let exact = history(&[(Rank::LikelyCheating, 16), (Rank::NotCheating, 184)]);
        assert!(AggregateAssessment::new(exact, ids(&["u1"]), vec![]).markable());

        let below = history(&[(Rank::LikelyCheating, 15), (Rank::NotCheating, 185)]);
        assert!(!AggregateAssessment::new(below, ids(&["u1"]), vec![]).markable());
    }

    #[test]
    fn test_low_rate_is_nothing() {
        // 2 cheating games out of 200: 1% is below every rate threshold
        let assessments = history(&[(Rank::Cheating, 2), (Rank::NotCheating, 198)]);
        let aggregate = AggregateAssessment::new(assessments, vec![], vec![]);
        assert!(!aggregate.markable());
        assert!(!aggregate.reportable());
        assert_eq!(aggregate.action(), AccountAction::Nothing);
    }

    /// 60 games: 10 blurred rank-5 games, 50 ordinary rank-1 games.
    fn large_blur_history(blurred_sf_avg: i32, ordinary_sf_avg: i32) -> Vec<PlayerAssessment> {
        let mut assessments = history(&[(Rank::Cheating, 10), (Rank::NotCheating, 50)]);
        for (i, assessment) in assessments.iter_mut().enumerate() {
            if i < 10 {
                assessment.blurs = 90;
                assessment.sf_avg = blurred_sf_avg;
            } else {
                assessment.sf_avg = ordinary_sf_avg;
            }
        }
        assessments
    }

    #[test]
    fn test_flat_split_on_large_history_downgrades_to_report() {
        let aggregate = AggregateAssessment::new(large_blur_history(25, 30), vec![], vec![]);
        let [blur, move_time, hold] = aggregate.split_comparisons();
        assert_eq!(blur.significance, Significance::NotSignificant);
        assert_eq!(blur.suspicious_sf_avg, Some(25.0));
        assert_eq!(blur.ordinary_sf_avg, Some(30.0));
        // Every fixture game has cv = 0.8 and no hold alert
        assert_eq!(move_time.significance, Significance::Unknown);
        assert_eq!(hold.significance, Significance::Unknown);

        assert!(aggregate.markable());
        assert!(!aggregate.actionable());
        assert_eq!(aggregate.action(), AccountAction::Report);
    }

    #[test]
    fn test_significant_split_keeps_engine() {
        let aggregate = AggregateAssessment::new(large_blur_history(10, 35), vec![], vec![]);
        assert_eq!(
            aggregate.split_comparisons()[0].significance,
            Significance::Significant
        );
        assert!(aggregate.actionable());
        assert_eq!(aggregate.action(), AccountAction::Engine);
    }

    #[test]
    fn test_flat_split_on_small_history_is_actionable() {
        let mut assessments = large_blur_history(25, 30);
        assessments.truncate(49);
        let aggregate = AggregateAssessment::new(assessments, vec![], vec![]);
        assert!(aggregate.actionable());
        assert_eq!(aggregate.action(), AccountAction::Engine);
    }

    #[test]
    fn test_non_actionable_without_rates_is_nothing() {
        let mut assessments = history(&[(Rank::NotCheating, 60)]);
        assessments[0].blurs = 100;
        let aggregate = AggregateAssessment::new(assessments, vec![], vec![]);
        assert!(!aggregate.actionable());
        assert_eq!(aggregate.action(), AccountAction::Nothing);
    }

    #[test]
    fn test_move_time_split_excludes_undefined_cv() {
        let mut assessments = history(&[(Rank::NotCheating, 3)]);
        assessments[0].mt_avg = 0;
        assessments[0].mt_sd = 0;
        assessments[1].mt_sd = 10;
        let aggregate = AggregateAssessment::new(assessments, vec![], vec![]);
        let comparison = aggregate.split_comparisons()[1];
        // Game 1 has cv 0.1, game 2 keeps the fixture's 0.8, game 0 is excluded
        assert_eq!(comparison.suspicious_sf_avg, Some(30.0));
        assert_eq!(comparison.ordinary_sf_avg, Some(30.0));
        assert_eq!(comparison.significance, Significance::NotSignificant);
    }

    #[test]
    fn test_action_ordering_and_labels() {
        assert!(AccountAction::EngineAndBan > AccountAction::Engine);
        assert!(AccountAction::Engine > AccountAction::Report);
        assert!(AccountAction::Report > AccountAction::Nothing);
        let classes = AccountAction::ALL.map(AccountAction::color_class);
        assert_eq!(classes, ["1", "2", "3", "4"]);
        assert_eq!(AccountAction::EngineAndBan.description(), "Mark and IP ban");
    }

    #[test]
    fn test_many_users_evaluate_independently() {
        let histories = [
            history(&[(Rank::Cheating, 3), (Rank::NotCheating, 7)]),
            history(&[(Rank::NotCheating, 10)]),
        ];
        let actions = histories
            .into_iter()
            .map(|h| AggregateAssessment::new(h, vec![], vec![]).action())
            .collect::<Vec<_>>();
        assert_eq!(actions, [AccountAction::Engine, AccountAction::Nothing]);
    }
}
