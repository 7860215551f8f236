// src/lib.rs
pub mod cli;
pub mod core;
pub mod models;
pub mod utils;

pub use crate::cli::{Args, run, run_query_loop};
pub use crate::core::analysis::{Analysis, analyze};
pub use crate::core::counter::{Entry, OrderedCounter};
pub use crate::core::ignore::{IgnoredWords, load_ignored_words};
pub use crate::core::report::{bottom_entries, frequency_of, top_entries, write_report};
pub use crate::models::AnalysisStats;
