//! Assessment intake: validation, one-time scoring, storage, and HTTP routing.
//!
//! Scores are computed exactly once when a submission is accepted and stored next to the raw
//! answers. Reads and advisory context always come from the stored scores.

pub mod domain;
pub mod policy;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    AnswerRow, AssessmentId, AssessmentSubmission, CompanyContext, DEFAULT_ASSESSMENT_TITLE,
};
pub use policy::{SubmissionPolicy, SubmissionViolation};
pub use repository::{AssessmentRecord, AssessmentRepository, AssessmentView, RepositoryError};
pub use router::assessment_router;
pub use service::{AssessmentService, AssessmentServiceError};
