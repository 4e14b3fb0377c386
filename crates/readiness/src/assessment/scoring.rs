use super::catalog::{Dimension, QuestionCatalog, WeightGroup};
use super::responses::ResponseSet;
use super::stage::MaturityStage;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Scores a response set against the reference catalog.
pub fn calculate_scores(responses: &ResponseSet) -> ScoreResult {
    ScoringEngine::reference().score(responses)
}

/// Stateless engine turning raw answers into dimension, group and overall scores.
///
/// Scoring is total: any response set, however sparse or malformed, yields a complete
/// [`ScoreResult`]. Answers that are missing, non-numeric or keyed outside the catalog are
/// skipped, and a dimension without answers scores `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringEngine {
    catalog: QuestionCatalog,
}

impl ScoringEngine {
    pub fn new(catalog: QuestionCatalog) -> Self {
        Self { catalog }
    }

    pub fn reference() -> Self {
        Self::new(QuestionCatalog::reference())
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    pub fn score(&self, responses: &ResponseSet) -> ScoreResult {
        let mut values: [Vec<f64>; 8] = Default::default();

        for question in self.catalog.questions {
            if let Some(value) = responses.numeric(question.key) {
                values[question.dimension.index()].push(value);
            }
        }

        let dimension_scores: BTreeMap<Dimension, f64> = Dimension::ALL
            .iter()
            .map(|dimension| {
                let score = round_to_hundredths(mean(&values[dimension.index()]));
                (*dimension, score)
            })
            .collect();

        let aaimm_score = group_score(&dimension_scores, WeightGroup::Aaimm);
        let navigator_score = group_score(&dimension_scores, WeightGroup::Navigator);
        // Two-term mean: each framework weighs half regardless of its dimension count.
        let overall_score = round_to_hundredths(mean(&[aaimm_score, navigator_score]));

        ScoreResult {
            catalog_version: self.catalog.version.to_string(),
            dimension_scores,
            aaimm_score,
            navigator_score,
            overall_score,
            aaimm_stage: MaturityStage::classify(aaimm_score),
            navigator_stage: MaturityStage::classify(navigator_score),
            overall_stage: MaturityStage::classify(overall_score),
        }
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::reference()
    }
}

/// Scores computed for one submission. Persisted verbatim and never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub catalog_version: String,
    pub dimension_scores: BTreeMap<Dimension, f64>,
    pub aaimm_score: f64,
    pub navigator_score: f64,
    pub overall_score: f64,
    pub aaimm_stage: MaturityStage,
    pub navigator_stage: MaturityStage,
    pub overall_stage: MaturityStage,
}

impl ScoreResult {
    pub fn dimension_score(&self, dimension: Dimension) -> f64 {
        self.dimension_scores
            .get(&dimension)
            .copied()
            .unwrap_or(0.0)
    }

    pub fn group_score(&self, group: WeightGroup) -> f64 {
        match group {
            WeightGroup::Aaimm => self.aaimm_score,
            WeightGroup::Navigator => self.navigator_score,
        }
    }

    pub fn group_stage(&self, group: WeightGroup) -> MaturityStage {
        match group {
            WeightGroup::Aaimm => self.aaimm_stage,
            WeightGroup::Navigator => self.navigator_stage,
        }
    }
}

fn group_score(dimension_scores: &BTreeMap<Dimension, f64>, group: WeightGroup) -> f64 {
    let scores: Vec<f64> = group
        .dimensions()
        .iter()
        .map(|dimension| dimension_scores.get(dimension).copied().unwrap_or(0.0))
        .collect();
    round_to_hundredths(mean(&scores))
}

/// Left-to-right arithmetic mean; `0.0` for an empty slice.
pub(crate) fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let total = values.iter().fold(0.0, |sum, value| sum + value);
    total / values.len() as f64
}

/// Rounds to two decimals, ties away from zero.
///
/// The tie test runs on the exact binary value of `value`, not on its shortest decimal
/// rendering: `1.625` is exactly representable and becomes `1.63`, while `2.675` is stored
/// as `2.67499…` and becomes `2.67`. The result is the `f64` nearest to `n / 100`.
pub fn round_to_hundredths(value: f64) -> f64 {
    if !value.is_finite() || value == 0.0 {
        return value;
    }

    let bits = value.abs().to_bits();
    let biased_exponent = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exponent) = if biased_exponent == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased_exponent - 1075)
    };

    // Non-negative exponent means the value is already an integer.
    if exponent >= 0 {
        return value;
    }

    let shift = exponent.unsigned_abs();
    let scaled = u128::from(mantissa) * 100;
    let hundredths = if shift > 64 {
        // |value| * 100 < 2^60 / 2^65, well under one half.
        0
    } else {
        let whole = scaled >> shift;
        let remainder = scaled - (whole << shift);
        if remainder << 1 >= 1u128 << shift {
            whole + 1
        } else {
            whole
        }
    };

    let rounded = hundredths as f64 / 100.0;
    if value.is_sign_negative() {
        -rounded
    } else {
        rounded
    }
}
