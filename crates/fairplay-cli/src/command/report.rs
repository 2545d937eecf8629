use std::path::PathBuf;

use crate::util::{self, Output};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ReportArg {
    /// Path to the account history JSON file
    history: PathBuf,
    /// Reason shown in the report header
    #[arg(long, default_value = "Cheat detected")]
    reason: String,
    /// Maximum number of games listed
    #[arg(long, default_value_t = 10)]
    max_games: usize,
    /// Base URL of game links
    #[arg(long, default_value = "https://lichess.org")]
    base_url: String,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &ReportArg) -> anyhow::Result<()> {
    let history = util::read_history_file(&arg.history)?;
    let (user_id, aggregate) = history.into_aggregate();
    let action = aggregate.action();
    if action.is_nothing() {
        tracing::warn!(%user_id, "account is not suspicious, rendering report anyway");
    }

    let text = aggregate.report_text(&arg.reason, arg.max_games, &arg.base_url);
    let mut output = Output::from_output_path(arg.output.as_deref())?;
    output.write_text(&text)?;
    tracing::info!(%user_id, %action, output = %output.display_path(), "wrote report");
    Ok(())
}
