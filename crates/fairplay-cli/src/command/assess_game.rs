use std::path::PathBuf;

use chrono::Utc;
use clap::ValueEnum;
use fairplay_assessor::{
    assessment::{GameAssessments, PlayerAssessment},
    game::Color,
};

use crate::util::{self, Output};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorArg {
    White,
    Black,
}

impl From<ColorArg> for Color {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::White => Color::White,
            ColorArg::Black => Color::Black,
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct AssessGameArg {
    /// Path to the game JSON file (moves, move times, analysis, blur and hold data)
    game: PathBuf,
    /// Only assess this side of the game
    #[arg(long, value_enum)]
    color: Option<ColorArg>,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &AssessGameArg) -> anyhow::Result<()> {
    let game = util::read_game_file(&arg.game)?;
    let now = Utc::now();

    let assessments = match arg.color {
        Some(color) => {
            let mut assessments = GameAssessments::default();
            assessments.insert(PlayerAssessment::build(&game, color.into(), now));
            assessments
        }
        None => GameAssessments::build(&game, now),
    };

    for assessment in Color::ALL
        .into_iter()
        .filter_map(|color| assessments.color(color))
    {
        tracing::info!(
            game_id = %assessment.game_id,
            user_id = %assessment.user_id,
            color = %assessment.color,
            rank = assessment.rank.id(),
            "{} {}",
            assessment.rank.emoticon(),
            assessment.rank
        );
    }

    Output::save_json(&assessments, arg.output.as_deref())
}
