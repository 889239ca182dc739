use std::sync::Arc;

use futures_util::future::join_all;
use tokio::sync::Semaphore;
use tracing::{debug, info, instrument, warn};

use crate::document::Document;
use crate::embedding::{Embedder, Embedding};
use crate::extraction::TextExtractor;
use crate::keywords::{KeywordExtractor, KeywordSet};
use crate::scoring::{SimilarityScorer, similarity_percent};

use super::config::RankerConfig;
use super::error::{DocumentError, RankingError, RankingResult};
use super::types::{MatchFailure, MatchResult, RankedReport, ResumeInput};

/// Job description state computed once per run and shared by every resume.
#[derive(Debug, Clone)]
pub struct ProcessedJob {
    pub name: String,
    pub embedding: Embedding,
    pub keywords: KeywordSet,
}

/// Ranks resumes against one job description.
pub struct MatchRanker<E: Embedder> {
    extractor: TextExtractor,
    keywords: Arc<KeywordExtractor>,
    scorer: SimilarityScorer<E>,
    config: RankerConfig,
}

impl<E: Embedder> Clone for MatchRanker<E> {
    fn clone(&self) -> Self {
        Self {
            extractor: self.extractor,
            keywords: Arc::clone(&self.keywords),
            scorer: self.scorer.clone(),
            config: self.config.clone(),
        }
    }
}

impl<E: Embedder> std::fmt::Debug for MatchRanker<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchRanker")
            .field("scorer", &self.scorer)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<E: Embedder> MatchRanker<E> {
    pub fn new(embedder: Arc<E>, config: RankerConfig) -> RankingResult<Self> {
        config.validate()?;
        Ok(Self {
            extractor: TextExtractor::new(),
            keywords: Arc::new(KeywordExtractor::new()),
            scorer: SimilarityScorer::new(embedder),
            config,
        })
    }

    pub fn with_default_config(embedder: Arc<E>) -> Self {
        Self {
            extractor: TextExtractor::new(),
            keywords: Arc::new(KeywordExtractor::new()),
            scorer: SimilarityScorer::new(embedder),
            config: RankerConfig::default(),
        }
    }

    pub fn config(&self) -> &RankerConfig {
        &self.config
    }

    pub fn scorer(&self) -> &SimilarityScorer<E> {
        &self.scorer
    }

    /// Extracts, embeds and keywords the job description.
    ///
    /// Any failure here aborts the run.
    pub fn process_job(&self, job: &Document) -> RankingResult<ProcessedJob> {
        self.try_process_job(job)
            .map_err(|source| RankingError::JobFailed {
                name: job.name().to_string(),
                source,
            })
    }

    fn try_process_job(&self, job: &Document) -> Result<ProcessedJob, DocumentError> {
        let text = self.extractor.extract(job)?;
        let embedding = self.scorer.embed(text.as_str())?;
        let keywords = self.keywords.extract(text.as_str());

        debug!(
            job = job.name(),
            keywords = keywords.len(),
            "Job description processed"
        );

        Ok(ProcessedJob {
            name: job.name().to_string(),
            embedding,
            keywords,
        })
    }

    /// Scores one resume against a processed job.
    pub fn score_resume(
        &self,
        job: &ProcessedJob,
        resume: &Document,
    ) -> Result<MatchResult, DocumentError> {
        let text = self.extractor.extract(resume)?;
        let similarity = self.scorer.score_against(&job.embedding, text.as_str())?;

        let resume_keywords = self.keywords.extract(text.as_str());
        let matched_keywords = job.keywords.intersection(&resume_keywords);

        let result = MatchResult {
            resume_name: resume.name().to_string(),
            similarity,
            score: similarity_percent(similarity),
            excerpt: text.excerpt(self.config.excerpt_chars),
            justification: matched_keywords.justification(self.config.justification_keywords),
            matched_keywords,
        };

        debug!(
            resume = resume.name(),
            score = result.score,
            matched = result.matched_keywords.len(),
            "Resume scored"
        );

        Ok(result)
    }

    /// Ranks `resumes` against `job`, one resume at a time.
    #[instrument(skip(self, job, resumes), fields(job = job.name(), resumes = resumes.len()))]
    pub fn rank(&self, job: &Document, resumes: &[Document]) -> RankingResult<RankedReport> {
        if resumes.is_empty() {
            return Err(RankingError::NoResumes);
        }

        let processed = self.process_job(job)?;
        let outcomes = resumes
            .iter()
            .map(|resume| (resume.name().to_string(), self.score_resume(&processed, resume)));

        Ok(collect_report(&processed, outcomes))
    }
}

impl<E: Embedder + 'static> MatchRanker<E> {
    /// Ranks `resumes` against `job` on the blocking thread pool.
    ///
    /// At most `max_concurrency` resumes are processed at once. A resume whose
    /// task fails or panics is reported as a failure without affecting the
    /// others.
    pub async fn rank_concurrent(
        &self,
        job: &Document,
        resumes: Vec<Document>,
    ) -> RankingResult<RankedReport> {
        self.rank_concurrent_inputs(job, resumes.into_iter().map(Ok).collect())
            .await
    }

    /// Like [`rank_concurrent`](Self::rank_concurrent), for inputs that may
    /// have failed to load.
    ///
    /// An unreadable input becomes an `extraction_failure` entry under its
    /// name, in input order among the other failures.
    #[instrument(skip(self, job, inputs), fields(job = job.name(), resumes = inputs.len()))]
    pub async fn rank_concurrent_inputs(
        &self,
        job: &Document,
        inputs: Vec<ResumeInput>,
    ) -> RankingResult<RankedReport> {
        if inputs.is_empty() {
            return Err(RankingError::NoResumes);
        }

        let processed = {
            let ranker = self.clone();
            let job_doc = job.clone();
            tokio::task::spawn_blocking(move || ranker.process_job(&job_doc))
                .await
                .map_err(|e| RankingError::JobFailed {
                    name: job.name().to_string(),
                    source: DocumentError::TaskFailed {
                        reason: e.to_string(),
                    },
                })??
        };
        let processed = Arc::new(processed);
        let semaphore = Arc::new(Semaphore::new(self.config.max_concurrency));

        let tasks: Vec<_> = inputs
            .into_iter()
            .map(|input| {
                let ranker = self.clone();
                let job = Arc::clone(&processed);
                let semaphore = Arc::clone(&semaphore);
                async move {
                    let resume = match input {
                        Ok(resume) => resume,
                        Err(unreadable) => {
                            return (
                                unreadable.name,
                                Err(DocumentError::Unreadable {
                                    reason: unreadable.reason,
                                }),
                            );
                        }
                    };
                    let name = resume.name().to_string();
                    let outcome = match semaphore.acquire_owned().await {
                        Ok(permit) => tokio::task::spawn_blocking(move || {
                            let _permit = permit;
                            ranker.score_resume(&job, &resume)
                        })
                        .await
                        .unwrap_or_else(|e| {
                            Err(DocumentError::TaskFailed {
                                reason: e.to_string(),
                            })
                        }),
                        Err(e) => Err(DocumentError::TaskFailed {
                            reason: e.to_string(),
                        }),
                    };
                    (name, outcome)
                }
            })
            .collect();

        let outcomes = join_all(tasks).await;
        Ok(collect_report(&processed, outcomes))
    }
}

fn collect_report<I>(job: &ProcessedJob, outcomes: I) -> RankedReport
where
    I: IntoIterator<Item = (String, Result<MatchResult, DocumentError>)>,
{
    let mut scored = Vec::new();
    let mut failed = Vec::new();

    for (name, outcome) in outcomes {
        match outcome {
            Ok(result) => scored.push(result),
            Err(e) => {
                warn!(
                    resume = %name,
                    kind = %e.kind(),
                    error = %e,
                    "Resume could not be scored"
                );
                failed.push(MatchFailure::from_error(name, &e));
            }
        }
    }

    let report = RankedReport::new(scored, failed);
    info!(
        job = %job.name,
        scored = report.scored().count(),
        failed = report.failures().count(),
        best_score = report.best().map(|r| r.score),
        "Ranking complete"
    );
    report
}
