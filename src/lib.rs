//! Heuristic parser turning a pasted football match report (federation page,
//! scoreboard, broadcast lineup sheet) into a structured [`model::MatchRecord`].
//!
//! ```no_run
//! use match_report::{parse_match_report, MatchRecord, TeamDirectory};
//!
//! let teams = TeamDirectory::embedded().unwrap();
//! let rec = parse_match_report("GALATASARAY\n2\nFENERBAHÇE\n1", &MatchRecord::default(), &teams);
//! assert_eq!(rec.score.as_deref(), Some("2-1"));
//! ```

pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod events;
pub mod header;
pub mod lineup;
pub mod lines;
pub mod logging;
pub mod markers;
pub mod model;
pub mod officials;
pub mod report;
pub mod teams;

pub use model::MatchRecord;
pub use report::{parse_match_report, MatchReportParser};
pub use teams::{TeamDirectory, TeamResolver};
