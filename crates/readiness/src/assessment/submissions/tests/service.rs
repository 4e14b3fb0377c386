use super::common::*;
use crate::assessment::catalog::Dimension;
use crate::assessment::scoring::calculate_scores;
use crate::assessment::stage::MaturityStage;
use crate::assessment::submissions::domain::{AssessmentId, DEFAULT_ASSESSMENT_TITLE};
use crate::assessment::submissions::repository::{AssessmentRepository, RepositoryError};
use crate::assessment::submissions::{
    AssessmentService, AssessmentServiceError, SubmissionPolicy, SubmissionViolation,
};
use std::sync::Arc;

#[test]
fn submit_scores_once_and_stores_answers() {
    let (service, repository) = build_service(SubmissionPolicy::default());

    let record = service.submit(submission()).expect("submission accepted");

    assert!(record.assessment_id.0.starts_with("asm-"));
    assert_eq!(record.title, DEFAULT_ASSESSMENT_TITLE);
    assert_eq!(record.answers.len(), 24);
    assert_eq!(record.scores.overall_score, 4.0);
    assert_eq!(record.scores.overall_stage, MaturityStage::Scaling);

    let stored = repository
        .fetch(&record.assessment_id)
        .expect("fetch succeeds")
        .expect("record present");
    assert_eq!(stored, record);
}

#[test]
fn stored_scores_are_reproducible_from_stored_answers() {
    let (service, _) = build_service(SubmissionPolicy::permissive());

    let record = service
        .submit(partial_submission())
        .expect("partial submission accepted");

    assert_eq!(calculate_scores(&record.responses()), record.scores);
    assert_eq!(record.scores.dimension_score(Dimension::Resources), 4.0);
}

#[test]
fn unknown_and_malformed_entries_are_stored_but_not_scored() {
    let (service, _) = build_service(SubmissionPolicy::default());
    let mut submission = submission();
    submission.responses.insert("favorite_color", "teal");

    let record = service.submit(submission).expect("submission accepted");

    assert_eq!(record.answers.len(), 25);
    assert!(record
        .answers
        .iter()
        .any(|row| row.question_key == "favorite_color" && row.answer_text == "teal"));
    assert_eq!(record.scores.overall_score, 4.0);
}

#[test]
fn submit_rejects_out_of_scale_answers() {
    let (service, repository) = build_service(SubmissionPolicy::default());

    match service.submit(out_of_scale_submission()) {
        Err(AssessmentServiceError::Violation(SubmissionViolation::OutOfScale {
            key, value, ..
        })) => {
            assert_eq!(key, "governance_02");
            assert_eq!(value, 9.0);
        }
        other => panic!("expected out-of-scale violation, got {other:?}"),
    }
    assert!(repository.records.lock().expect("lock").is_empty());
}

#[test]
fn permissive_policy_scores_out_of_scale_answers_verbatim() {
    let (service, _) = build_service(SubmissionPolicy::permissive());

    let record = service
        .submit(out_of_scale_submission())
        .expect("permissive policy accepts");

    // (4 + 9 + 4) / 3
    assert_eq!(record.scores.dimension_score(Dimension::Governance), 5.67);
}

#[test]
fn complete_policy_lists_unanswered_questions() {
    let policy = SubmissionPolicy {
        enforce_scale: true,
        require_complete: true,
    };
    let (service, _) = build_service(policy);

    match service.submit(partial_submission()) {
        Err(AssessmentServiceError::Violation(SubmissionViolation::Incomplete { missing })) => {
            assert_eq!(missing, vec!["resources_02", "resources_03"]);
        }
        other => panic!("expected incomplete violation, got {other:?}"),
    }
}

#[test]
fn submit_requires_a_user() {
    let (service, _) = build_service(SubmissionPolicy::default());
    let mut submission = submission();
    submission.user_id = "  ".to_string();

    assert!(matches!(
        service.submit(submission),
        Err(AssessmentServiceError::Violation(
            SubmissionViolation::MissingUser
        ))
    ));
}

#[test]
fn submit_propagates_repository_conflicts() {
    let service = AssessmentService::new(Arc::new(ConflictRepository), SubmissionPolicy::default());

    match service.submit(submission()) {
        Err(AssessmentServiceError::Repository(RepositoryError::Conflict)) => {}
        other => panic!("expected conflict, got {other:?}"),
    }
}

#[test]
fn get_propagates_not_found() {
    let (service, _) = build_service(SubmissionPolicy::default());

    match service.get(&AssessmentId("missing".to_string())) {
        Err(AssessmentServiceError::Repository(RepositoryError::NotFound)) => {}
        other => panic!("expected not found error, got {other:?}"),
    }
}

#[test]
fn list_for_user_only_returns_that_users_assessments() {
    let (service, _) = build_service(SubmissionPolicy::default());
    service.submit(submission()).expect("first");
    service.submit(submission()).expect("second");
    let mut other = submission();
    other.user_id = "user-7".to_string();
    service.submit(other).expect("other user");

    let records = service.list_for_user("user-42").expect("list");

    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|record| record.user_id == "user-42"));
}

#[test]
fn advisory_context_reads_stored_scores() {
    let (service, repository) = build_service(SubmissionPolicy::default());
    let record = service.submit(submission()).expect("accepted");

    // Tamper with the stored copy: the context must reflect storage, not a recomputation.
    {
        let mut guard = repository.records.lock().expect("lock");
        let stored = guard.get_mut(&record.assessment_id).expect("stored");
        stored.scores.overall_score = 1.5;
    }

    let context = service
        .advisory_context(&record.assessment_id)
        .expect("context builds");

    assert_eq!(context.overall_score, 1.5);
    assert_eq!(context.company_context.role, "Chief Data Officer");
    assert_eq!(context.bottlenecks.len(), 3);
}

#[test]
fn get_surfaces_unavailable_repository() {
    let service = AssessmentService::new(
        Arc::new(UnavailableRepository),
        SubmissionPolicy::default(),
    );

    match service.get(&AssessmentId("asm-000001".to_string())) {
        Err(AssessmentServiceError::Repository(RepositoryError::Unavailable(reason))) => {
            assert_eq!(reason, "database offline");
        }
        other => panic!("expected unavailable error, got {other:?}"),
    }
}
