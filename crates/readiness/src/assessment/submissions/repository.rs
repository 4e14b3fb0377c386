use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{AnswerRow, AssessmentId, CompanyContext};
use crate::assessment::catalog::Dimension;
use crate::assessment::responses::ResponseSet;
use crate::assessment::scoring::ScoreResult;
use crate::assessment::stage::MaturityStage;

/// Stored assessment: the raw answers next to the scores computed at submission time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub assessment_id: AssessmentId,
    pub user_id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub answers: Vec<AnswerRow>,
    pub company_context: Option<CompanyContext>,
    pub scores: ScoreResult,
}

impl AssessmentRecord {
    /// Rebuilds the submitted response set from the stored answer rows.
    pub fn responses(&self) -> ResponseSet {
        self.answers
            .iter()
            .map(|row| (row.question_key.clone(), row.answer_json.clone()))
            .collect()
    }

    pub fn status_view(&self) -> AssessmentView {
        AssessmentView {
            assessment_id: self.assessment_id.clone(),
            title: self.title.clone(),
            created_at: self.created_at,
            catalog_version: self.scores.catalog_version.clone(),
            overall_score: self.scores.overall_score,
            overall_stage: self.scores.overall_stage,
            aaimm_score: self.scores.aaimm_score,
            aaimm_stage: self.scores.aaimm_stage,
            navigator_score: self.scores.navigator_score,
            navigator_stage: self.scores.navigator_stage,
            dimension_scores: self.scores.dimension_scores.clone(),
            answer_count: self.answers.len(),
        }
    }
}

/// Storage abstraction so the service can be exercised without a database.
pub trait AssessmentRepository: Send + Sync {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError>;
    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError>;
    fn list_for_user(&self, user_id: &str) -> Result<Vec<AssessmentRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Public representation of a stored assessment. Raw answers are not echoed back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentView {
    pub assessment_id: AssessmentId,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub catalog_version: String,
    pub overall_score: f64,
    pub overall_stage: MaturityStage,
    pub aaimm_score: f64,
    pub aaimm_stage: MaturityStage,
    pub navigator_score: f64,
    pub navigator_stage: MaturityStage,
    pub dimension_scores: BTreeMap<Dimension, f64>,
    pub answer_count: usize,
}
