pub mod advisory;
pub mod catalog;
pub mod insights;
pub mod responses;
pub mod scoring;
pub mod stage;
pub mod submissions;

pub use advisory::AdvisoryContext;
pub use catalog::{Dimension, Question, QuestionCatalog, WeightGroup};
pub use insights::RankedDimension;
pub use responses::{ResponseImportError, ResponseSet};
pub use scoring::{calculate_scores, round_to_hundredths, ScoreResult, ScoringEngine};
pub use stage::MaturityStage;
