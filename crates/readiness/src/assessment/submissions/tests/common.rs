use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::assessment::catalog::QuestionCatalog;
use crate::assessment::responses::ResponseSet;
use crate::assessment::submissions::domain::{AssessmentId, AssessmentSubmission, CompanyContext};
use crate::assessment::submissions::repository::{
    AssessmentRecord, AssessmentRepository, RepositoryError,
};
use crate::assessment::submissions::{assessment_router, AssessmentService, SubmissionPolicy};

pub(super) fn all_answered(value: f64) -> ResponseSet {
    let catalog = QuestionCatalog::reference();
    ResponseSet::uniform(catalog.questions.iter().map(|question| question.key), value)
}

pub(super) fn company_context() -> CompanyContext {
    CompanyContext {
        industry: "Insurance".to_string(),
        company_size: "5000+".to_string(),
        tool_stack: "Snowflake, Databricks".to_string(),
        role: "Chief Data Officer".to_string(),
        notes: String::new(),
    }
}

pub(super) fn submission() -> AssessmentSubmission {
    AssessmentSubmission {
        user_id: "user-42".to_string(),
        title: None,
        responses: all_answered(4.0),
        company_context: Some(company_context()),
    }
}

pub(super) fn out_of_scale_submission() -> AssessmentSubmission {
    let mut submission = submission();
    submission.responses.insert("governance_02", 9);
    submission
}

pub(super) fn partial_submission() -> AssessmentSubmission {
    let mut submission = submission();
    submission.responses.remove("resources_03");
    submission.responses.insert("resources_02", "n/a");
    submission
}

pub(super) fn build_service(
    policy: SubmissionPolicy,
) -> (AssessmentService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = AssessmentService::new(repository.clone(), policy);
    (service, repository)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<AssessmentId, AssessmentRecord>>>,
}

impl AssessmentRepository for MemoryRepository {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.assessment_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.assessment_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn list_for_user(&self, user_id: &str) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .values()
            .filter(|record| record.user_id == user_id)
            .cloned()
            .collect())
    }
}

pub(super) struct ConflictRepository;

impl AssessmentRepository for ConflictRepository {
    fn insert(&self, _record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(&self, _id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        Ok(None)
    }

    fn list_for_user(&self, _user_id: &str) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl AssessmentRepository for UnavailableRepository {
    fn insert(&self, _record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list_for_user(&self, _user_id: &str) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn router_with_service(service: AssessmentService<MemoryRepository>) -> axum::Router {
    assessment_router(Arc::new(service))
}
