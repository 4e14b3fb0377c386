use crate::infra::InMemoryAssessmentRepository;
use clap::Args;
use readiness::assessment::submissions::{
    AssessmentService, AssessmentSubmission, CompanyContext, SubmissionPolicy,
};
use readiness::assessment::{
    calculate_scores, Dimension, QuestionCatalog, RankedDimension, ResponseSet, ScoreResult,
    WeightGroup,
};
use readiness::error::AppError;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Response file: a JSON object keyed by question, or a question_key,answer_text CSV
    #[arg(long)]
    pub(crate) responses: PathBuf,
    /// Emit the full score result as JSON instead of a table
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// User the sample submission is recorded against.
    #[arg(long, default_value = "demo-user")]
    pub(crate) user_id: String,
    /// Industry recorded in the company context.
    #[arg(long)]
    pub(crate) industry: Option<String>,
    /// Skip the advisory context portion of the demo.
    #[arg(long)]
    pub(crate) skip_advisory: bool,
}

pub(crate) fn run_score_report(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs { responses, json } = args;

    let response_set = ResponseSet::from_path(&responses)?;
    let scores = calculate_scores(&response_set);

    if json {
        let rendered =
            serde_json::to_string_pretty(&scores).map_err(|err| AppError::Io(err.into()))?;
        println!("{rendered}");
    } else {
        println!(
            "Scored {} ({} answers)",
            responses.display(),
            response_set.len()
        );
        print!("{}", render_score_table(&scores));
    }

    Ok(())
}

pub(crate) fn run_catalog_listing() -> Result<(), AppError> {
    let catalog = QuestionCatalog::reference();
    println!(
        "Question catalog {} ({} questions)",
        catalog.version,
        catalog.len()
    );
    for group in [WeightGroup::Aaimm, WeightGroup::Navigator] {
        println!("\n{}", group.label());
        for dimension in group.dimensions() {
            println!("  {}", dimension.label());
            for question in catalog.questions_for(*dimension) {
                println!("    - [{}] {}", question.key, question.prompt);
            }
        }
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        user_id,
        industry,
        skip_advisory,
    } = args;

    println!("AI readiness scoring demo");
    let repository = Arc::new(InMemoryAssessmentRepository::default());
    let service = AssessmentService::new(repository, SubmissionPolicy::default());

    let submission = demo_submission(user_id.clone(), industry);
    let record = match service.submit(submission) {
        Ok(record) => record,
        Err(err) => {
            println!("  Submission rejected: {}", err);
            return Ok(());
        }
    };

    let view = record.status_view();
    println!(
        "- Stored assessment {} \"{}\" with {} answers (catalog {})",
        view.assessment_id.0, view.title, view.answer_count, view.catalog_version
    );
    print!("{}", render_score_table(&record.scores));

    let history = service.list_for_user(&user_id)?;
    println!("- {} assessment(s) on file for {}", history.len(), user_id);

    if skip_advisory {
        return Ok(());
    }

    let context = service.advisory_context(&record.assessment_id)?;
    println!("\nAdvisory context (derived from stored scores)");
    render_ranked("Bottlenecks", &context.bottlenecks);
    render_ranked("Strengths", &context.strengths);
    if !context.company_context.industry.is_empty() {
        println!("  Industry: {}", context.company_context.industry);
    }

    Ok(())
}

pub(crate) fn render_score_table(scores: &ScoreResult) -> String {
    let mut out = String::new();
    for group in [WeightGroup::Aaimm, WeightGroup::Navigator] {
        out.push_str(&format!(
            "{:<16} {:>5.2}  {}\n",
            group.label(),
            scores.group_score(group),
            scores.group_stage(group)
        ));
        for dimension in group.dimensions() {
            out.push_str(&format!(
                "  {:<14} {:>5.2}\n",
                dimension.label(),
                scores.dimension_score(*dimension)
            ));
        }
    }
    out.push_str(&format!(
        "{:<16} {:>5.2}  {}\n",
        "Overall", scores.overall_score, scores.overall_stage
    ));
    out
}

fn render_ranked(heading: &str, ranked: &[RankedDimension]) {
    println!("  {heading}:");
    for entry in ranked {
        println!("    - {}: {:.2} ({})", entry.label, entry.score, entry.stage);
    }
}

/// Uneven sample answers so the advisory ranking has something to say.
fn demo_submission(user_id: String, industry: Option<String>) -> AssessmentSubmission {
    let responses: ResponseSet = QuestionCatalog::reference()
        .questions
        .iter()
        .map(|question| (question.key, demo_answer(question.dimension)))
        .collect();

    let mut submission = AssessmentSubmission::new(user_id, responses);
    submission.title = Some("Quarterly readiness check-in".to_string());
    submission.company_context = Some(CompanyContext {
        industry: industry.unwrap_or_else(|| "Professional Services".to_string()),
        company_size: "51-200".to_string(),
        tool_stack: "Microsoft 365, Salesforce".to_string(),
        role: "Operations Lead".to_string(),
        notes: String::new(),
    });
    submission
}

fn demo_answer(dimension: Dimension) -> u8 {
    match dimension {
        Dimension::Reasoning | Dimension::Change => 4,
        Dimension::Collaboration | Dimension::Governance => 3,
        Dimension::Action | Dimension::Infrastructure => 2,
        Dimension::Data => 5,
        Dimension::Resources => 1,
    }
}
