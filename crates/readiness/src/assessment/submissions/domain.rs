use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::assessment::responses::ResponseSet;

/// Title given to submissions that do not name themselves.
pub const DEFAULT_ASSESSMENT_TITLE: &str = "AI Navigator Assessment";

/// Identifier wrapper for stored assessments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssessmentId(pub String);

/// Organization profile captured alongside the questionnaire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyContext {
    pub industry: String,
    pub company_size: String,
    pub tool_stack: String,
    pub role: String,
    pub notes: String,
}

/// Inbound questionnaire submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentSubmission {
    pub user_id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub responses: ResponseSet,
    #[serde(default)]
    pub company_context: Option<CompanyContext>,
}

impl AssessmentSubmission {
    pub fn new(user_id: impl Into<String>, responses: ResponseSet) -> Self {
        Self {
            user_id: user_id.into(),
            title: None,
            responses,
            company_context: None,
        }
    }

    pub fn resolved_title(&self) -> String {
        self.title
            .as_deref()
            .map(str::trim)
            .filter(|title| !title.is_empty())
            .unwrap_or(DEFAULT_ASSESSMENT_TITLE)
            .to_string()
    }
}

/// One stored answer. Every submitted entry is kept, including keys the catalog does not know.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRow {
    pub question_key: String,
    pub answer_text: String,
    pub answer_json: Value,
}

impl AnswerRow {
    pub fn new(question_key: &str, value: &Value) -> Self {
        let answer_text = match value {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        };

        Self {
            question_key: question_key.to_string(),
            answer_text,
            answer_json: value.clone(),
        }
    }

    pub fn rows_for(responses: &ResponseSet) -> Vec<AnswerRow> {
        responses
            .iter()
            .map(|(key, value)| AnswerRow::new(key, value))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn answer_text_renders_values_like_stored_rows() {
        assert_eq!(AnswerRow::new("data_01", &json!(4)).answer_text, "4");
        assert_eq!(AnswerRow::new("data_01", &json!(2.5)).answer_text, "2.5");
        assert_eq!(AnswerRow::new("data_01", &json!("often")).answer_text, "often");
        assert_eq!(AnswerRow::new("data_01", &Value::Null).answer_text, "null");
    }

    #[test]
    fn blank_titles_fall_back_to_default() {
        let mut submission = AssessmentSubmission::new("user-1", ResponseSet::new());
        assert_eq!(submission.resolved_title(), DEFAULT_ASSESSMENT_TITLE);

        submission.title = Some("   ".to_string());
        assert_eq!(submission.resolved_title(), DEFAULT_ASSESSMENT_TITLE);

        submission.title = Some("Q3 readiness".to_string());
        assert_eq!(submission.resolved_title(), "Q3 readiness");
    }

    #[test]
    fn submission_defaults_optional_fields() {
        let submission: AssessmentSubmission =
            serde_json::from_value(json!({ "user_id": "user-7" })).expect("minimal payload");

        assert!(submission.responses.is_empty());
        assert!(submission.title.is_none());
        assert!(submission.company_context.is_none());
    }
}
