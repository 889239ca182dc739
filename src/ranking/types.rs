use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::keywords::KeywordSet;

use super::error::{DocumentError, FailureKind};

/// Score, excerpt and justification for one resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub resume_name: String,
    /// Raw cosine similarity against the job embedding.
    pub similarity: f32,
    /// Percentage in `[0, 100]`, rounded to 2 decimals.
    pub score: f64,
    pub excerpt: String,
    pub justification: String,
    pub matched_keywords: KeywordSet,
}

/// A resume that could not be scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchFailure {
    pub resume_name: String,
    pub kind: FailureKind,
    pub reason: String,
}

impl MatchFailure {
    pub fn from_error<N: Into<String>>(resume_name: N, error: &DocumentError) -> Self {
        Self {
            resume_name: resume_name.into(),
            kind: error.kind(),
            reason: error.to_string(),
        }
    }
}

/// A resume input whose bytes never reached the ranker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnreadableResume {
    pub name: String,
    pub reason: String,
}

impl UnreadableResume {
    pub fn new<N: Into<String>, R: Into<String>>(name: N, reason: R) -> Self {
        Self {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// One resume input: loaded bytes, or the reason they could not be loaded.
pub type ResumeInput = Result<crate::document::Document, UnreadableResume>;

#[derive(Debug, Clone, PartialEq)]
pub enum RankedEntry {
    Scored(MatchResult),
    Failed(MatchFailure),
}

impl RankedEntry {
    pub fn resume_name(&self) -> &str {
        match self {
            RankedEntry::Scored(result) => &result.resume_name,
            RankedEntry::Failed(failure) => &failure.resume_name,
        }
    }

    pub fn score(&self) -> Option<f64> {
        match self {
            RankedEntry::Scored(result) => Some(result.score),
            RankedEntry::Failed(_) => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RankedEntry::Failed(_))
    }
}

/// Ranked outcome of one screening run.
///
/// Scored entries come first in descending score order, ties kept in input
/// order. Failed resumes follow in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankedReport {
    entries: Vec<RankedEntry>,
}

impl RankedReport {
    /// Orders the given results and failures into a report.
    pub fn new(mut scored: Vec<MatchResult>, failed: Vec<MatchFailure>) -> Self {
        // `sort_by` is stable, equal scores keep their input order.
        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        let mut entries = Vec::with_capacity(scored.len() + failed.len());
        entries.extend(scored.into_iter().map(RankedEntry::Scored));
        entries.extend(failed.into_iter().map(RankedEntry::Failed));
        Self { entries }
    }

    pub fn entries(&self) -> &[RankedEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn scored(&self) -> impl Iterator<Item = &MatchResult> {
        self.entries.iter().filter_map(|entry| match entry {
            RankedEntry::Scored(result) => Some(result),
            RankedEntry::Failed(_) => None,
        })
    }

    pub fn failures(&self) -> impl Iterator<Item = &MatchFailure> {
        self.entries.iter().filter_map(|entry| match entry {
            RankedEntry::Failed(failure) => Some(failure),
            RankedEntry::Scored(_) => None,
        })
    }

    pub fn best(&self) -> Option<&MatchResult> {
        self.scored().next()
    }

    /// Flat rows for a presentation layer.
    pub fn records(&self) -> Vec<ReportRecord> {
        self.entries.iter().map(ReportRecord::from).collect()
    }

    pub fn into_entries(self) -> Vec<RankedEntry> {
        self.entries
    }
}

impl IntoIterator for RankedReport {
    type Item = RankedEntry;
    type IntoIter = std::vec::IntoIter<RankedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// One presentation row. Failed resumes carry `error` and no score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRecord {
    pub resume_name: String,
    pub score: Option<f64>,
    pub excerpt: String,
    pub justification: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

impl From<&RankedEntry> for ReportRecord {
    fn from(entry: &RankedEntry) -> Self {
        match entry {
            RankedEntry::Scored(result) => Self {
                resume_name: result.resume_name.clone(),
                score: Some(result.score),
                excerpt: result.excerpt.clone(),
                justification: result.justification.clone(),
                error: None,
            },
            RankedEntry::Failed(failure) => Self {
                resume_name: failure.resume_name.clone(),
                score: None,
                excerpt: String::new(),
                justification: String::new(),
                error: Some(format!("{}: {}", failure.kind, failure.reason)),
            },
        }
    }
}
