use serde::{Deserialize, Serialize};

/// Maturity band derived from a 0-5 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MaturityStage {
    Emerging,
    Developing,
    Operational,
    Scaling,
    Optimized,
}

// Inclusive upper bounds. The bands are deliberately uneven (1.0, 1.0, 1.0, 0.6, 0.5).
const EMERGING_MAX: f64 = 1.9;
const DEVELOPING_MAX: f64 = 2.9;
const OPERATIONAL_MAX: f64 = 3.9;
const SCALING_MAX: f64 = 4.5;

impl MaturityStage {
    pub fn classify(score: f64) -> Self {
        if score <= EMERGING_MAX {
            MaturityStage::Emerging
        } else if score <= DEVELOPING_MAX {
            MaturityStage::Developing
        } else if score <= OPERATIONAL_MAX {
            MaturityStage::Operational
        } else if score <= SCALING_MAX {
            MaturityStage::Scaling
        } else {
            MaturityStage::Optimized
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MaturityStage::Emerging => "Emerging",
            MaturityStage::Developing => "Developing",
            MaturityStage::Operational => "Operational",
            MaturityStage::Scaling => "Scaling",
            MaturityStage::Optimized => "Optimized",
        }
    }
}

impl std::fmt::Display for MaturityStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
