#![deny(missing_docs)]
//! profilecards command-line interface.
//!
//! Collects language and activity data for one GitHub account and writes
//! the top-languages, language-list, and stats cards as SVG files.

mod github;

use chrono::{Datelike, Utc};
use clap::{Args, Parser, ValueEnum};
use github::{DEFAULT_API_URL, DEFAULT_USER_AGENT, GitHubApiClient};
use log::{error, info};
use profilecards_core::{
    CardKind, CardStyle, DEFAULT_THRESHOLD, DEFAULT_TOP_N, GradeFormula, ProfileSource,
    RunSummary, card_path, collect_activity, collect_language_totals, normalize, render_json,
    render_summary_markdown, render_summary_text, write_language_list_card, write_stats_card,
    write_top_languages_card, year_start,
};
use std::path::{Path, PathBuf};

pub(crate) type CliResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

#[derive(Parser, Debug)]
#[command(
    name = "profilecards",
    version,
    about = "Generate SVG profile cards for a GitHub account"
)]
struct Cli {
    /// GitHub account to generate cards for.
    #[arg(long, env = "GITHUB_USERNAME")]
    username: String,
    /// Personal access token; private repositories are included when set.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,
    /// Base URL of the GitHub REST API.
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,
    /// User-Agent sent with every request.
    #[arg(long, env = "GITHUB_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    user_agent: String,
    #[command(flatten)]
    cards: CardArgs,
    #[command(flatten)]
    report: OutputArgs,
}

#[derive(Args, Clone, Debug)]
struct CardArgs {
    /// Directory the SVG cards are written to.
    #[arg(short, long, default_value = "assets")]
    output_dir: PathBuf,
    /// Languages below this percentage are folded into "Other".
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: f64,
    /// Number of languages shown on the top-languages card.
    #[arg(long, default_value_t = DEFAULT_TOP_N)]
    top: usize,
    /// Year the activity counters cover (defaults to the current UTC year).
    #[arg(long)]
    year: Option<i32>,
    /// Formula used to grade activity.
    #[arg(long, value_enum, default_value_t = FormulaArg::CappedRatio)]
    grade_formula: FormulaArg,
    /// JSON file overriding card dimensions, fonts, and colours.
    #[arg(long)]
    style: Option<PathBuf>,
}

#[derive(Args, Clone, Debug)]
struct OutputArgs {
    /// Output format for the run summary.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Write the run summary to a file instead of stdout.
    #[arg(long = "report-output")]
    report_output: Option<PathBuf>,
}

#[derive(ValueEnum, Copy, Clone, Debug, Eq, PartialEq)]
enum OutputFormat {
    Text,
    Json,
    Markdown,
}

#[derive(ValueEnum, Copy, Clone, Debug, Eq, PartialEq)]
enum FormulaArg {
    CappedRatio,
    WeightedRaw,
}

impl From<FormulaArg> for GradeFormula {
    fn from(value: FormulaArg) -> Self {
        match value {
            FormulaArg::CappedRatio => GradeFormula::CappedRatio,
            FormulaArg::WeightedRaw => GradeFormula::WeightedRaw,
        }
    }
}

/// Everything a run needs besides the data source.
#[derive(Debug, Clone)]
struct RunSettings {
    username: String,
    output_dir: PathBuf,
    threshold: f64,
    top: usize,
    year: i32,
    formula: GradeFormula,
    style: CardStyle,
}

impl RunSettings {
    fn from_args(username: &str, cards: &CardArgs) -> CliResult<Self> {
        let username = username.trim();
        if username.is_empty() {
            return Err("username cannot be empty".into());
        }
        let style = match &cards.style {
            Some(path) => CardStyle::from_json_file(path)?,
            None => CardStyle::default(),
        };
        let year = cards.year.unwrap_or_else(|| Utc::now().year());
        year_start(year)?;
        Ok(Self {
            username: username.to_string(),
            output_dir: cards.output_dir.clone(),
            threshold: cards.threshold,
            top: cards.top,
            year,
            formula: cards.grade_formula.into(),
            style,
        })
    }
}

#[cfg(not(test))]
fn main() -> CliResult<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let settings = RunSettings::from_args(&cli.username, &cli.cards)?;
    let client = GitHubApiClient::new(cli.api_url, cli.token, cli.user_agent);
    if !client.is_authenticated() {
        info!("no token configured, only public data is visible");
    }

    let summary = run(&client, &settings)?;
    emit_summary(&summary, &cli.report)
}

#[cfg(test)]
fn main() {}

/// Collect, normalize, grade, and write every card for one account.
fn run<S: ProfileSource + ?Sized>(source: &S, settings: &RunSettings) -> CliResult<RunSummary> {
    let username = settings.username.as_str();
    info!("generating cards for {username} ({})", settings.year);

    // A failed listing aborts before any card is written.
    let repos = source.list_repositories(username).map_err(|err| {
        error!("could not list repositories of {username}: {err}");
        err
    })?;
    info!("found {} repositories", repos.len());

    let totals = collect_language_totals(source, &repos);
    let entries = normalize(&totals, settings.threshold);
    let counters = collect_activity(source, username, &repos, settings.year)?;

    let output_dir = settings.output_dir.as_path();
    let style = &settings.style;
    let top_path = card_path(output_dir, username, CardKind::TopLanguages);
    write_top_languages_card(&entries, settings.top, style, &top_path)?;
    let list_path = card_path(output_dir, username, CardKind::LanguageList);
    write_language_list_card(&entries, style, &list_path)?;
    let stats_path = card_path(output_dir, username, CardKind::Stats);
    let assessment =
        write_stats_card(&counters, settings.formula, settings.year, style, &stats_path)?;
    info!("grade {} (score {:.1})", assessment.grade, assessment.score);

    Ok(RunSummary {
        username: username.to_string(),
        year: settings.year,
        repository_count: repos.len(),
        languages: entries,
        activity: counters,
        formula: settings.formula,
        assessment,
        cards: vec![top_path, list_path, stats_path],
    })
}

fn emit_summary(summary: &RunSummary, output: &OutputArgs) -> CliResult<()> {
    let contents = match output.format {
        OutputFormat::Text => render_summary_text(summary),
        OutputFormat::Markdown => render_summary_markdown(summary),
        OutputFormat::Json => render_json(summary)?,
    };
    emit_output(output.report_output.as_deref(), contents)
}

fn emit_output(path: Option<&Path>, contents: String) -> CliResult<()> {
    if let Some(path) = path {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)?;
    } else {
        print!("{contents}");
    }
    Ok(())
}
