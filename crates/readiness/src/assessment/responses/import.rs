use super::ResponseSet;
use serde::Deserialize;
use serde_json::{Number, Value};
use std::io::Read;

#[derive(Debug)]
pub enum ResponseImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for ResponseImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResponseImportError::Io(err) => write!(f, "failed to read responses: {}", err),
            ResponseImportError::Csv(err) => write!(f, "invalid answer row data: {}", err),
            ResponseImportError::Json(err) => write!(f, "invalid response json: {}", err),
        }
    }
}

impl std::error::Error for ResponseImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ResponseImportError::Io(err) => Some(err),
            ResponseImportError::Csv(err) => Some(err),
            ResponseImportError::Json(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ResponseImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ResponseImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<serde_json::Error> for ResponseImportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

#[derive(Debug, Deserialize)]
struct AnswerRow {
    question_key: String,
    #[serde(default)]
    answer_text: String,
}

pub(super) fn parse_answer_rows<R: Read>(reader: R) -> Result<ResponseSet, ResponseImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut responses = ResponseSet::new();

    for record in csv_reader.deserialize::<AnswerRow>() {
        let row = record?;
        if row.question_key.is_empty() {
            continue;
        }
        responses.insert(row.question_key, answer_value(&row.answer_text));
    }

    Ok(responses)
}

// Text that does not read as a finite number is kept verbatim so it is stored but never scored.
fn answer_value(text: &str) -> Value {
    text.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .unwrap_or_else(|| Value::String(text.to_string()))
}
