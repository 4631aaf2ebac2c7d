#![deny(missing_docs)]
//! profilecards core library.
//!
//! Aggregates per-repository language bytes and activity counters into
//! normalized data and lays it out as standalone SVG profile cards.

pub mod cards;
pub mod collect;
pub mod domain;
pub mod error;
pub mod fs;
pub mod languages;
pub mod layout;
pub mod report;
pub mod scoring;
pub mod source;
pub mod style;
pub mod svg;

pub use cards::{
    CardKind, card_path, write_language_list_card, write_stats_card, write_top_languages_card,
};
pub use collect::{
    collect_activity, collect_language_maps, collect_language_totals, issue_query,
    pull_request_query, year_start,
};
pub use domain::{
    ActivityCounters, CommitWindow, Contributor, LanguageBytes, LanguageTotals, NormalizedEntry,
    PullRequestSearch, Repository,
};
pub use error::{ProfileCardsError, Result};
pub use fs::{FileSystem, StdFileSystem};
pub use languages::{DEFAULT_THRESHOLD, OTHER_LABEL, aggregate, normalize};
pub use layout::{CardSpec, DEFAULT_TOP_N};
pub use report::{RunSummary, render_json, render_summary_markdown, render_summary_text};
pub use scoring::{Assessment, CappedRatio, Grade, GradeFormula, ScoringStrategy, WeightedRaw};
pub use source::ProfileSource;
pub use style::CardStyle;
pub use svg::{emit, emit_with, render_svg};
