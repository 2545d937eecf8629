//! Statistical primitives for the Fairplay assessment engine.
//!
//! This crate provides the small numeric toolkit the assessor is built on:
//!
//! - **Descriptive statistics**: mean, population variance and deviation, coefficient of
//!   variation, plus degenerate-safe variants that accept empty and single-element samples
//! - **Distribution**: error function approximation, normal CDF and confidence intervals
//! - **Sequences**: splitting interleaved per-ply data into one player's half
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing samples
//! - [`distribution`]: Normal distribution helpers
//! - [`sequence`]: Helpers over interleaved sequences
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use fairplay_stats::descriptive::{self, DescriptiveStats};
//!
//! let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
//! let stats = DescriptiveStats::new(&values).unwrap();
//! assert_eq!(stats.mean, 5.0);
//! assert_eq!(stats.std_dev, 2.0);
//!
//! // Empty samples fall back to zero instead of failing
//! assert_eq!(descriptive::safe_mean(&[]), 0.0);
//! ```
//!
//! ## Evaluating the normal CDF
//!
//! ```
//! use fairplay_stats::distribution::normal_cdf;
//!
//! assert_eq!(normal_cdf(100.0, 100.0, 15.0), 0.5);
//! ```
//!
//! ## Splitting interleaved move times
//!
//! ```
//! use fairplay_stats::sequence::skip_alternate;
//!
//! let times = [10, 20, 30, 40, 50];
//! let first_mover = skip_alternate(&times, 0).copied().collect::<Vec<_>>();
//! assert_eq!(first_mover, [10, 30, 50]);
//! ```

pub mod descriptive;
pub mod distribution;
pub mod sequence;
