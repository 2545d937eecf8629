use std::path::PathBuf;

use crate::{
    schema::account::AccountSummary,
    util::{self, Output},
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct AssessAccountArg {
    /// Path to the account history JSON file
    history: PathBuf,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &AssessAccountArg) -> anyhow::Result<()> {
    let history = util::read_history_file(&arg.history)?;
    tracing::info!(
        user_id = %history.user_id,
        assessments = history.assessments.len(),
        related_users = history.related_users.len(),
        "loaded account history"
    );

    let (user_id, aggregate) = history.into_aggregate();
    let summary = AccountSummary::new(user_id, &aggregate);
    tracing::info!(
        user_id = %summary.user_id,
        action = %summary.action.action,
        "account assessed"
    );

    Output::save_json(&summary, arg.output.as_deref())
}
