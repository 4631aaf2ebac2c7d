//! Run summary formatting for profilecards outputs.

use std::fmt::Write;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::{ActivityCounters, NormalizedEntry};
use crate::scoring::{Assessment, GradeFormula};

/// Everything one run produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    /// Profile the cards were generated for.
    pub username: String,
    /// Year the activity counters cover.
    pub year: i32,
    /// Repositories considered.
    pub repository_count: usize,
    /// Normalized language breakdown.
    pub languages: Vec<NormalizedEntry>,
    /// Raw activity counters.
    pub activity: ActivityCounters,
    /// Formula used for the grade.
    pub formula: GradeFormula,
    /// Grade and score.
    pub assessment: Assessment,
    /// Card files written.
    pub cards: Vec<PathBuf>,
}

/// Render a summary as plain text.
pub fn render_summary_text(summary: &RunSummary) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "Profile: {}", summary.username);
    let _ = writeln!(output, "Repositories: {}", summary.repository_count);
    if summary.languages.is_empty() {
        let _ = writeln!(output, "Languages: none detected");
    } else {
        let _ = writeln!(output, "Languages:");
        for entry in &summary.languages {
            let _ = writeln!(
                output,
                "  - {}: {} ({} bytes)",
                entry.label,
                entry.display_percentage(),
                entry.bytes
            );
        }
    }
    append_activity_text(&mut output, summary);
    if summary.cards.is_empty() {
        let _ = writeln!(output, "Cards: none written");
    } else {
        let _ = writeln!(output, "Cards:");
        for card in &summary.cards {
            let _ = writeln!(output, "  - {}", card.display());
        }
    }
    output
}

/// Render a summary as Markdown.
pub fn render_summary_markdown(summary: &RunSummary) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "# Profile Cards for {}\n", summary.username);
    let _ = writeln!(output, "- Repositories: {}", summary.repository_count);
    let _ = writeln!(output, "- Year: {}\n", summary.year);

    let _ = writeln!(output, "## Languages");
    if summary.languages.is_empty() {
        let _ = writeln!(output, "No languages detected.\n");
    } else {
        let _ = writeln!(output, "| Language | Share | Bytes |\n| --- | --- | --- |");
        for entry in &summary.languages {
            let _ = writeln!(
                output,
                "| {} | {} | {} |",
                entry.label,
                entry.display_percentage(),
                entry.bytes
            );
        }
        let _ = writeln!(output);
    }

    let _ = writeln!(output, "## Activity");
    let activity = &summary.activity;
    let _ = writeln!(output, "- Stars: {}", activity.stars);
    let _ = writeln!(output, "- Commits: {}", activity.commits);
    let _ = writeln!(output, "- Pull requests: {}", activity.pull_requests);
    let _ = writeln!(output, "- Issues: {}", activity.issues);
    let _ = writeln!(output, "- Contributed repos: {}", activity.contributed_repos);
    let _ = writeln!(
        output,
        "- Grade: **{}** ({:.1}, {})\n",
        summary.assessment.grade,
        summary.assessment.score,
        summary.formula.strategy().id()
    );

    let _ = writeln!(output, "## Cards");
    for card in &summary.cards {
        let _ = writeln!(output, "![{0}]({0})", card.display());
    }
    output
}

/// Render any serializable report payload as JSON.
pub fn render_json<T: Serialize + ?Sized>(payload: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(payload)
}

fn append_activity_text(output: &mut String, summary: &RunSummary) {
    let activity = &summary.activity;
    let _ = writeln!(output, "Activity ({}):", summary.year);
    let _ = writeln!(output, "  Stars: {}", activity.stars);
    let _ = writeln!(output, "  Commits: {}", activity.commits);
    let _ = writeln!(output, "  Pull requests: {}", activity.pull_requests);
    let _ = writeln!(output, "  Issues: {}", activity.issues);
    let _ = writeln!(output, "  Contributed repos: {}", activity.contributed_repos);
    let _ = writeln!(
        output,
        "Grade: {} (score {:.1}, {})",
        summary.assessment.grade,
        summary.assessment.score,
        summary.formula.strategy().id()
    );
}
