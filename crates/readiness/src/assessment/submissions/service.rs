use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use super::domain::{AnswerRow, AssessmentId, AssessmentSubmission};
use super::policy::{SubmissionPolicy, SubmissionViolation};
use super::repository::{AssessmentRecord, AssessmentRepository, RepositoryError};
use crate::assessment::advisory::AdvisoryContext;
use crate::assessment::scoring::ScoringEngine;

/// Service composing intake validation, the scoring engine, and the repository.
pub struct AssessmentService<R> {
    repository: Arc<R>,
    engine: ScoringEngine,
    policy: SubmissionPolicy,
}

static ASSESSMENT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_assessment_id() -> AssessmentId {
    let id = ASSESSMENT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    AssessmentId(format!("asm-{id:06}"))
}

impl<R> AssessmentService<R>
where
    R: AssessmentRepository + 'static,
{
    pub fn new(repository: Arc<R>, policy: SubmissionPolicy) -> Self {
        Self::with_engine(repository, ScoringEngine::reference(), policy)
    }

    pub fn with_engine(repository: Arc<R>, engine: ScoringEngine, policy: SubmissionPolicy) -> Self {
        Self {
            repository,
            engine,
            policy,
        }
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    pub fn policy(&self) -> SubmissionPolicy {
        self.policy
    }

    /// Validate, score once, and persist a submission.
    pub fn submit(
        &self,
        submission: AssessmentSubmission,
    ) -> Result<AssessmentRecord, AssessmentServiceError> {
        if let Err(violation) = self.policy.check(self.engine.catalog(), &submission) {
            warn!(user_id = %submission.user_id, %violation, "assessment submission rejected");
            return Err(violation.into());
        }

        let scores = self.engine.score(&submission.responses);
        let record = AssessmentRecord {
            assessment_id: next_assessment_id(),
            title: submission.resolved_title(),
            user_id: submission.user_id,
            created_at: Utc::now(),
            answers: AnswerRow::rows_for(&submission.responses),
            company_context: submission.company_context,
            scores,
        };

        let stored = self.repository.insert(record)?;
        info!(
            assessment_id = %stored.assessment_id.0,
            overall_score = stored.scores.overall_score,
            overall_stage = %stored.scores.overall_stage,
            catalog_version = %stored.scores.catalog_version,
            "assessment scored"
        );
        Ok(stored)
    }

    /// Fetch a stored assessment.
    pub fn get(&self, id: &AssessmentId) -> Result<AssessmentRecord, AssessmentServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    pub fn list_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<AssessmentRecord>, AssessmentServiceError> {
        Ok(self.repository.list_for_user(user_id)?)
    }

    /// Deterministic input for the advisory generator, built from the stored scores.
    pub fn advisory_context(
        &self,
        id: &AssessmentId,
    ) -> Result<AdvisoryContext, AssessmentServiceError> {
        let record = self.get(id)?;
        Ok(AdvisoryContext::from_record(&record))
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Violation(#[from] SubmissionViolation),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
