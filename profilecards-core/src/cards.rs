//! One entry point per card: lay out, render, and write.

use std::path::{Path, PathBuf};

use crate::domain::{ActivityCounters, NormalizedEntry};
use crate::error::Result;
use crate::layout::{language_list_card, stats_card, top_languages_card};
use crate::scoring::{Assessment, GradeFormula};
use crate::style::CardStyle;
use crate::svg::emit;

/// The card variants produced per profile.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CardKind {
    /// Ranked bar list of the top languages.
    TopLanguages,
    /// Two-column breakdown of all languages.
    LanguageList,
    /// Activity counters with the grade ring.
    Stats,
}

impl CardKind {
    /// File name suffix for this card.
    pub fn file_suffix(&self) -> &'static str {
        match self {
            CardKind::TopLanguages => "top_languages_card.svg",
            CardKind::LanguageList => "languages_list_card.svg",
            CardKind::Stats => "github_stats_card.svg",
        }
    }
}

/// `{output_dir}/{username}_{suffix}` for a card.
pub fn card_path(output_dir: &Path, username: &str, kind: CardKind) -> PathBuf {
    output_dir.join(format!("{username}_{}", kind.file_suffix()))
}

/// Write the ranked bar list of the first `top_n` entries.
pub fn write_top_languages_card(
    entries: &[NormalizedEntry],
    top_n: usize,
    style: &CardStyle,
    path: &Path,
) -> Result<()> {
    let card = top_languages_card(entries, top_n, style);
    emit(&card, style, path)
}

/// Write the two-column breakdown of all entries.
pub fn write_language_list_card(
    entries: &[NormalizedEntry],
    style: &CardStyle,
    path: &Path,
) -> Result<()> {
    let card = language_list_card(entries, style);
    emit(&card, style, path)
}

/// Grade the counters with `formula` and write the stats card.
pub fn write_stats_card(
    counters: &ActivityCounters,
    formula: GradeFormula,
    year: i32,
    style: &CardStyle,
    path: &Path,
) -> Result<Assessment> {
    let assessment = formula.assess(counters);
    let card = stats_card(counters, &assessment, year, style);
    emit(&card, style, path)?;
    Ok(assessment)
}
