mod import;

pub use import::ResponseImportError;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

/// Raw questionnaire answers keyed by question key.
///
/// Values are kept exactly as submitted. Only finite JSON numbers count as answers when
/// scoring; strings, booleans, nulls and keys outside the catalog are carried along for
/// storage but never contribute to a score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseSet {
    entries: BTreeMap<String, Value>,
}

impl ResponseSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set where every listed question was answered with `value`.
    pub fn uniform<'a>(keys: impl IntoIterator<Item = &'a str>, value: f64) -> Self {
        let mut responses = Self::new();
        for key in keys {
            responses.insert_score(key, value);
        }
        responses
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Stores a numeric answer. NaN and infinities have no JSON form and are stored as null.
    pub fn insert_score(&mut self, key: impl Into<String>, value: f64) -> Option<Value> {
        let value = Number::from_f64(value)
            .map(Value::Number)
            .unwrap_or(Value::Null);
        self.entries.insert(key.into(), value)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// The answer for `key` when it is a finite number.
    pub fn numeric(&self, key: &str) -> Option<f64> {
        match self.entries.get(key)? {
            Value::Number(number) => number.as_f64().filter(|value| value.is_finite()),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reads a JSON object of `question_key -> value`.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, ResponseImportError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Reads exported answer rows (`question_key,answer_text`).
    pub fn from_answer_rows<R: Read>(reader: R) -> Result<Self, ResponseImportError> {
        import::parse_answer_rows(reader)
    }

    /// Loads a response file, choosing the format from the extension (`.csv` or JSON).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ResponseImportError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);

        if is_csv {
            Self::from_answer_rows(file)
        } else {
            Self::from_json_reader(file)
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ResponseSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}
