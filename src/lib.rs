//! Effective points for NHL players.
//!
//! A player earns an effective point for every goal they score or assist on
//! that their team actually needed to win. The core lives in [`points`];
//! [`data_fetcher`] retrieves game feeds and [`runner`] drives them through
//! the aggregator season by season.
//!
//! # Examples
//!
//! ```rust
//! use effective_points::points::Aggregator;
//! use effective_points::testing_utils::GameBuilder;
//!
//! // 3-1 home win in regulation: the first two home goals were needed
//! let game = GameBuilder::new("2019020001")
//!     .score(3, 1)
//!     .home_goal(10, &[11])
//!     .away_goal(20, &[])
//!     .home_goal(12, &[])
//!     .home_goal(13, &[])
//!     .build();
//!
//! let mut aggregator = Aggregator::new();
//! aggregator.process(&game).unwrap();
//!
//! let points = aggregator.into_points();
//! assert_eq!(points.get(10), 1);
//! assert_eq!(points.get(12), 1);
//! assert_eq!(points.get(13), 0);
//! assert_eq!(points.get(20), 0);
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod logging;
pub mod points;
pub mod report;
pub mod runner;
pub mod schedule;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::NhlClient;
pub use error::AppError;
pub use points::{Aggregator, EffectivePoints, GameRecord, classify};
pub use runner::{FetchedGame, GameSource, run};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
