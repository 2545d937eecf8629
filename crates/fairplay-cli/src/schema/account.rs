use fairplay_assessor::{
    aggregate::{AccountAction, AggregateAssessment, SplitComparison},
    assessment::PlayerAssessment,
};
use serde::{Deserialize, Serialize};

/// Assessment history of one account together with its relation cohort
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountHistory {
    pub user_id: String,
    /// Point-in-time snapshot of the account's game assessments
    #[serde(default)]
    pub assessments: Vec<PlayerAssessment>,
    /// Accounts linked by shared technical signals
    #[serde(default)]
    pub related_users: Vec<String>,
    /// Subset of `related_users` already confirmed as cheaters
    #[serde(default)]
    pub related_cheaters: Vec<String>,
}

impl AccountHistory {
    pub fn into_aggregate(self) -> (String, AggregateAssessment) {
        let aggregate =
            AggregateAssessment::new(self.assessments, self.related_users, self.related_cheaters);
        (self.user_id, aggregate)
    }
}

/// Decision summary written by `assess-account`
#[derive(Debug, Clone, Serialize)]
pub struct AccountSummary {
    pub user_id: String,
    pub assessments_count: usize,
    pub cheating_sum: usize,
    pub likely_cheating_sum: usize,
    pub cheating_rate: f64,
    pub likely_cheating_rate: f64,
    pub related_users_count: usize,
    pub related_cheaters_count: usize,
    pub markable: bool,
    pub reportable: bool,
    pub bannable: bool,
    pub actionable: bool,
    pub splits: Vec<SplitComparison>,
    pub action: ActionSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActionSummary {
    pub action: AccountAction,
    pub description: &'static str,
    pub color_class: &'static str,
}

impl AccountSummary {
    pub fn new(user_id: String, aggregate: &AggregateAssessment) -> Self {
        let action = aggregate.action();
        Self {
            user_id,
            assessments_count: aggregate.assessments_count(),
            cheating_sum: aggregate.cheating_sum(),
            likely_cheating_sum: aggregate.likely_cheating_sum(),
            cheating_rate: aggregate.cheating_rate(),
            likely_cheating_rate: aggregate.likely_cheating_rate(),
            related_users_count: aggregate.related_users_count(),
            related_cheaters_count: aggregate.related_cheaters_count(),
            markable: aggregate.markable(),
            reportable: aggregate.reportable(),
            bannable: aggregate.bannable(),
            actionable: aggregate.actionable(),
            splits: aggregate.split_comparisons().to_vec(),
            action: ActionSummary {
                action,
                description: action.description(),
                color_class: action.color_class(),
            },
        }
    }
}
