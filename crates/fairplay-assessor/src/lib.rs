//! Cheating-likelihood assessment for finished chess games and player accounts.
//!
//! This crate implements a two-level assessment architecture:
//!
//! 1. **Game Assessment** ([`assessment`]) - Ranks one player's play in one game from 1 (not
//!    cheating) to 5 (cheating) using behavioral flags ([`flags`]) and an ordered decision
//!    table ([`rank`]).
//!
//! 2. **Account Assessment** ([`aggregate`]) - Combines a user's game assessments with their
//!    relation cohort into one of four moderation actions.
//!
//! # Architecture
//!
//! ```text
//! GameRecord (external provider)
//!     ↓ accuracy + flags
//! PlayerFlags + SummaryStats
//!     ↓ rank
//! PlayerAssessment (persisted externally)
//!     ↓ aggregate (history + related accounts)
//! AccountAction
//! ```
//!
//! # Supporting Modules
//!
//! - [`game`] - Shape of the game and analysis data supplied by the caller
//! - [`accuracy`] - Per-move evaluation loss derived from position evaluations
//! - [`report`] - Labels, emoticons and the moderator report text
//!
//! # Design Principles
//!
//! ## Pure Functions
//!
//! Every step is a pure function of its inputs. Nothing is cached between calls, so
//! assessing many games or many accounts is a plain (and trivially parallel) map.
//!
//! ## Degenerate Data Is Not an Error
//!
//! Missing analysis, empty move lists and empty histories produce documented defaults
//! instead of failures, since partial data is common and must still yield a conservative
//! result.
//!
//! # Example
//!
//! ```
//! use fairplay_assessor::{
//!     aggregate::{AccountAction, AggregateAssessment},
//!     assessment::GameAssessments,
//!     game::{Color, GameRecord},
//! };
//!
//! let game: GameRecord = serde_json::from_str(r#"{
//!     "id": "abcd1234",
//!     "move_times": [300, 120, 310, 90, 290, 400],
//!     "evals": [{ "cp": 30 }, { "cp": 40 }, { "cp": 40 }, { "cp": 50 }],
//!     "winner": "white",
//!     "white": { "user_id": "alice", "blur_percent": 95 },
//!     "black": { "user_id": "bob" }
//! }"#).unwrap();
//!
//! let assessments = GameAssessments::build(&game, chrono::Utc::now());
//! let white = assessments.color(Color::White).unwrap();
//! assert_eq!(white.rank.id(), 5);
//!
//! let aggregate = AggregateAssessment::new(vec![white.clone()], Vec::<String>::new(), Vec::<String>::new());
//! assert_eq!(aggregate.action(), AccountAction::Report);
//! ```

pub mod accuracy;
pub mod aggregate;
pub mod assessment;
pub mod flags;
pub mod game;
pub mod rank;
pub mod report;
