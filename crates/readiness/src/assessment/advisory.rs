//! Score-derived context handed to the advisory generator.
//!
//! The generator may phrase recommendations however it likes, but it only ever receives the
//! stored scores. Nothing here recomputes them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::catalog::Dimension;
use super::insights::{self, RankedDimension};
use super::scoring::ScoreResult;
use super::stage::MaturityStage;
use super::submissions::{AssessmentId, AssessmentRecord, CompanyContext};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisoryContext {
    pub assessment_id: AssessmentId,
    pub catalog_version: String,
    pub overall_score: f64,
    pub overall_stage: MaturityStage,
    pub aaimm_score: f64,
    pub aaimm_stage: MaturityStage,
    pub navigator_score: f64,
    pub navigator_stage: MaturityStage,
    pub dimension_scores: BTreeMap<Dimension, f64>,
    pub bottlenecks: Vec<RankedDimension>,
    pub strengths: Vec<RankedDimension>,
    pub company_context: CompanyContext,
}

impl AdvisoryContext {
    pub fn from_record(record: &AssessmentRecord) -> Self {
        Self::from_scores(
            record.assessment_id.clone(),
            &record.scores,
            record.company_context.clone().unwrap_or_default(),
        )
    }

    pub fn from_scores(
        assessment_id: AssessmentId,
        scores: &ScoreResult,
        company_context: CompanyContext,
    ) -> Self {
        Self {
            assessment_id,
            catalog_version: scores.catalog_version.clone(),
            overall_score: scores.overall_score,
            overall_stage: scores.overall_stage,
            aaimm_score: scores.aaimm_score,
            aaimm_stage: scores.aaimm_stage,
            navigator_score: scores.navigator_score,
            navigator_stage: scores.navigator_stage,
            dimension_scores: scores.dimension_scores.clone(),
            bottlenecks: insights::bottlenecks(scores),
            strengths: insights::strengths(scores),
            company_context,
        }
    }
}
