use super::catalog::Dimension;
use super::scoring::ScoreResult;
use super::stage::MaturityStage;
use serde::{Deserialize, Serialize};

/// Number of lowest-scoring dimensions surfaced as bottlenecks.
pub const BOTTLENECK_COUNT: usize = 3;
/// Number of highest-scoring dimensions surfaced as strengths.
pub const STRENGTH_COUNT: usize = 2;

/// A dimension score annotated for presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedDimension {
    pub dimension: Dimension,
    pub label: String,
    pub score: f64,
    pub stage: MaturityStage,
}

impl RankedDimension {
    fn new(dimension: Dimension, score: f64) -> Self {
        Self {
            dimension,
            label: dimension.label().to_string(),
            score,
            stage: MaturityStage::classify(score),
        }
    }
}

/// Dimensions ordered from weakest to strongest.
///
/// The sort is stable over the canonical dimension order, so equal scores keep
/// reasoning-first ordering.
pub fn rank_dimensions(scores: &ScoreResult) -> Vec<RankedDimension> {
    let mut ranked: Vec<RankedDimension> = Dimension::ALL
        .iter()
        .map(|dimension| RankedDimension::new(*dimension, scores.dimension_score(*dimension)))
        .collect();
    ranked.sort_by(|left, right| left.score.total_cmp(&right.score));
    ranked
}

/// The weakest dimensions, lowest first.
pub fn bottlenecks(scores: &ScoreResult) -> Vec<RankedDimension> {
    rank_dimensions(scores)
        .into_iter()
        .take(BOTTLENECK_COUNT)
        .collect()
}

/// The strongest dimensions, highest first.
pub fn strengths(scores: &ScoreResult) -> Vec<RankedDimension> {
    let ranked = rank_dimensions(scores);
    let start = ranked.len().saturating_sub(STRENGTH_COUNT);
    ranked[start..].iter().rev().cloned().collect()
}
