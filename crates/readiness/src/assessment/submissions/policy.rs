use crate::assessment::catalog::QuestionCatalog;
use crate::config::AssessmentConfig;

use super::domain::AssessmentSubmission;

/// Validation errors raised before a submission is scored.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmissionViolation {
    #[error("user id is required")]
    MissingUser,
    #[error("answer to {key} is {value}, outside the {min}-{max} scale")]
    OutOfScale {
        key: String,
        value: f64,
        min: u8,
        max: u8,
    },
    #[error("{} question(s) unanswered: {}", .missing.len(), .missing.join(", "))]
    Incomplete { missing: Vec<String> },
}

/// Intake rules applied at the service boundary. The scoring engine itself accepts anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionPolicy {
    pub enforce_scale: bool,
    pub require_complete: bool,
}

impl Default for SubmissionPolicy {
    fn default() -> Self {
        Self {
            enforce_scale: true,
            require_complete: false,
        }
    }
}

impl From<&AssessmentConfig> for SubmissionPolicy {
    fn from(config: &AssessmentConfig) -> Self {
        Self {
            enforce_scale: config.enforce_scale,
            require_complete: config.require_complete,
        }
    }
}

impl SubmissionPolicy {
    /// Accepts anything the engine can score, including empty and partial submissions.
    pub fn permissive() -> Self {
        Self {
            enforce_scale: false,
            require_complete: false,
        }
    }

    pub fn check(
        &self,
        catalog: &QuestionCatalog,
        submission: &AssessmentSubmission,
    ) -> Result<(), SubmissionViolation> {
        if submission.user_id.trim().is_empty() {
            return Err(SubmissionViolation::MissingUser);
        }

        if self.enforce_scale {
            for question in catalog.questions {
                let Some(value) = submission.responses.numeric(question.key) else {
                    continue;
                };
                if value < f64::from(question.scale_min) || value > f64::from(question.scale_max)
                {
                    return Err(SubmissionViolation::OutOfScale {
                        key: question.key.to_string(),
                        value,
                        min: question.scale_min,
                        max: question.scale_max,
                    });
                }
            }
        }

        if self.require_complete {
            let missing: Vec<String> = catalog
                .questions
                .iter()
                .filter(|question| submission.responses.numeric(question.key).is_none())
                .map(|question| question.key.to_string())
                .collect();
            if !missing.is_empty() {
                return Err(SubmissionViolation::Incomplete { missing });
            }
        }

        Ok(())
    }
}
