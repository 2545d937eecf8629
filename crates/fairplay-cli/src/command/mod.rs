use clap::{Parser, Subcommand};

use self::{assess_account::AssessAccountArg, assess_game::AssessGameArg, report::ReportArg};

mod assess_account;
mod assess_game;
mod report;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Assess one or both players of a finished, analyzed game
    AssessGame(#[clap(flatten)] AssessGameArg),
    /// Recommend a moderation action from an account's assessment history
    AssessAccount(#[clap(flatten)] AssessAccountArg),
    /// Render the moderator report note for an account
    Report(#[clap(flatten)] ReportArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::AssessGame(arg) => assess_game::run(&arg)?,
        Mode::AssessAccount(arg) => assess_account::run(&arg)?,
        Mode::Report(arg) => report::run(&arg)?,
    }
    Ok(())
}
