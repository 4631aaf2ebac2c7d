//! Activity grading.
//!
//! Two grading formulas exist side by side and callers pick
//! one through [`GradeFormula`]. Both are pure and clamp their score into
//! `[0, 100]`, so any counter value is safe to feed in.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::ActivityCounters;

/// Letter grade derived from an activity score.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    /// `A+`
    #[serde(rename = "A+")]
    APlus,
    /// `A`
    A,
    /// `B+`
    #[serde(rename = "B+")]
    BPlus,
    /// `B`
    B,
    /// `C+`
    #[serde(rename = "C+")]
    CPlus,
    /// `C`
    C,
    /// `D`
    D,
}

impl Grade {
    /// Label rendered on the card.
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::CPlus => "C+",
            Grade::C => "C",
            Grade::D => "D",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score and grade produced by a strategy.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    /// Letter grade.
    pub grade: Grade,
    /// Score in `[0, 100]`.
    pub score: f64,
}

/// A grading formula over activity counters.
pub trait ScoringStrategy {
    /// Stable identifier of the formula.
    fn id(&self) -> &'static str;
    /// Weighted score in `[0, 100]`.
    fn score(&self, counters: &ActivityCounters) -> f64;
    /// Letter grade for a score produced by [`ScoringStrategy::score`].
    fn grade_for(&self, score: f64) -> Grade;

    /// Score the counters and map the score to a grade.
    fn assess(&self, counters: &ActivityCounters) -> Assessment {
        let score = clamp_score(self.score(counters));
        Assessment {
            grade: self.grade_for(score),
            score,
        }
    }
}

/// Each counter contributes a capped ratio of its ceiling times a weight.
///
/// | counter | ceiling | weight |
/// |---|---|---|
/// | stars | 50 | 40 |
/// | commits | 200 | 25 |
/// | pull requests | 20 | 15 |
/// | contributed repos | 10 | 15 |
/// | issues | 30 | 5 |
#[derive(Debug, Default, Copy, Clone)]
pub struct CappedRatio;

impl ScoringStrategy for CappedRatio {
    fn id(&self) -> &'static str {
        "capped-ratio"
    }

    fn score(&self, counters: &ActivityCounters) -> f64 {
        let score = capped_ratio(counters.stars, 50.0) * 40.0
            + capped_ratio(counters.commits, 200.0) * 25.0
            + capped_ratio(counters.pull_requests, 20.0) * 15.0
            + capped_ratio(counters.contributed_repos, 10.0) * 15.0
            + capped_ratio(counters.issues, 30.0) * 5.0;
        clamp_score(score)
    }

    fn grade_for(&self, score: f64) -> Grade {
        if score >= 90.0 {
            Grade::APlus
        } else if score >= 80.0 {
            Grade::A
        } else if score >= 70.0 {
            Grade::BPlus
        } else if score >= 60.0 {
            Grade::B
        } else if score >= 50.0 {
            Grade::CPlus
        } else {
            Grade::C
        }
    }
}

/// Counters are capped, multiplied by a per-point weight, and summed.
///
/// Contributed repositories do not take part in this formula.
#[derive(Debug, Default, Copy, Clone)]
pub struct WeightedRaw;

impl ScoringStrategy for WeightedRaw {
    fn id(&self) -> &'static str {
        "weighted-raw"
    }

    fn score(&self, counters: &ActivityCounters) -> f64 {
        let score = capped(counters.stars, 300) * 0.2
            + capped(counters.commits, 2000) * 0.02
            + capped(counters.pull_requests, 200) * 0.3
            + capped(counters.issues, 200) * 0.15;
        clamp_score(score)
    }

    fn grade_for(&self, score: f64) -> Grade {
        if score >= 85.0 {
            Grade::APlus
        } else if score >= 70.0 {
            Grade::A
        } else if score >= 55.0 {
            Grade::B
        } else if score >= 40.0 {
            Grade::C
        } else {
            Grade::D
        }
    }
}

/// Selects one of the grading formulas.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GradeFormula {
    /// [`CappedRatio`].
    #[default]
    CappedRatio,
    /// [`WeightedRaw`].
    WeightedRaw,
}

impl GradeFormula {
    /// The strategy implementing this formula.
    pub fn strategy(self) -> &'static dyn ScoringStrategy {
        match self {
            GradeFormula::CappedRatio => &CappedRatio,
            GradeFormula::WeightedRaw => &WeightedRaw,
        }
    }

    /// Shorthand for `self.strategy().assess(counters)`.
    pub fn assess(self, counters: &ActivityCounters) -> Assessment {
        self.strategy().assess(counters)
    }
}

fn capped_ratio(value: u64, ceiling: f64) -> f64 {
    (value as f64 / ceiling).min(1.0)
}

fn capped(value: u64, ceiling: u64) -> f64 {
    value.min(ceiling) as f64
}

fn clamp_score(score: f64) -> f64 {
    if score.is_finite() {
        score.clamp(0.0, 100.0)
    } else {
        0.0
    }
}
