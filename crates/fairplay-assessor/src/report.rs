//! Human-facing rendering of ranks, actions and aggregate assessments.

use std::fmt;

use crate::{
    aggregate::{AccountAction, AggregateAssessment},
    rank::Rank,
};

const RANK_DESCRIPTIONS: [&str; 5] = [
    "Not cheating",
    "Unlikely cheating",
    "Unclear",
    "Likely cheating",
    "Cheating",
];

const RANK_EMOTICONS: [&str; 5] = [":D", ":)", ":|", ":(", ">:("];

impl Rank {
    #[must_use]
    pub fn description(self) -> &'static str {
        RANK_DESCRIPTIONS[usize::from(self.id() - 1)]
    }

    #[must_use]
    pub fn emoticon(self) -> &'static str {
        RANK_EMOTICONS[usize::from(self.id() - 1)]
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.description(), f)
    }
}

impl fmt::Display for AccountAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.description(), f)
    }
}

impl AggregateAssessment {
    /// Renders the moderator note for an automatic report.
    ///
    /// Lists the `max_games` highest-ranked games (ties keep history order), each as an
    /// emoticon followed by a link `<base_url>/<game id>/<color>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fairplay_assessor::aggregate::AggregateAssessment;
    ///
    /// let aggregate = AggregateAssessment::new(vec![], Vec::<String>::new(), Vec::<String>::new());
    /// let text = aggregate.report_text("Cheat detected", 10, "https://lichess.org");
    /// assert!(text.starts_with("[AUTOREPORT] Cheat detected\n"));
    /// ```
    #[must_use]
    pub fn report_text(&self, reason: &str, max_games: usize, base_url: &str) -> String {
        ReportNote {
            aggregate: self,
            reason,
            max_games,
            base_url: base_url.trim_end_matches('/'),
        }
        .to_string()
    }
}

struct ReportNote<'a> {
    aggregate: &'a AggregateAssessment,
    reason: &'a str,
    max_games: usize,
    base_url: &'a str,
}

impl fmt::Display for ReportNote<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            aggregate,
            reason,
            max_games,
            base_url,
        } = self;
        writeln!(f, "[AUTOREPORT] {reason}")?;
        writeln!(f, "Cheating Games: {}", aggregate.cheating_sum())?;
        writeln!(f, "Likely Cheating Games: {}", aggregate.likely_cheating_sum())?;
        writeln!(f)?;

        let mut ranked = aggregate.assessments().iter().collect::<Vec<_>>();
        ranked.sort_by(|a, b| b.rank.cmp(&a.rank));
        for assessment in ranked.into_iter().take(*max_games) {
            writeln!(
                f,
                "{} {base_url}/{}/{}",
                assessment.rank.emoticon(),
                assessment.game_id,
                assessment.color
            )?;
        }
        Ok(())
    }
}
