use serde::{Deserialize, Serialize};

/// Lowest value on the questionnaire's Likert scale.
pub const SCALE_MIN: u8 = 1;
/// Highest value on the questionnaire's Likert scale.
pub const SCALE_MAX: u8 = 5;

/// Capability dimension a question measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Reasoning,
    Collaboration,
    Action,
    Data,
    Infrastructure,
    Governance,
    Change,
    Resources,
}

impl Dimension {
    /// Canonical ordering used for score maps and tie-breaking.
    pub const ALL: [Dimension; 8] = [
        Dimension::Reasoning,
        Dimension::Collaboration,
        Dimension::Action,
        Dimension::Data,
        Dimension::Infrastructure,
        Dimension::Governance,
        Dimension::Change,
        Dimension::Resources,
    ];

    /// Fixed dimension-to-group table. Never derived from catalog contents.
    pub const fn weight_group(self) -> WeightGroup {
        match self {
            Dimension::Reasoning | Dimension::Collaboration | Dimension::Action => {
                WeightGroup::Aaimm
            }
            Dimension::Data
            | Dimension::Infrastructure
            | Dimension::Governance
            | Dimension::Change
            | Dimension::Resources => WeightGroup::Navigator,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Dimension::Reasoning => "reasoning",
            Dimension::Collaboration => "collaboration",
            Dimension::Action => "action",
            Dimension::Data => "data",
            Dimension::Infrastructure => "infrastructure",
            Dimension::Governance => "governance",
            Dimension::Change => "change",
            Dimension::Resources => "resources",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Dimension::Reasoning => "Reasoning",
            Dimension::Collaboration => "Collaboration",
            Dimension::Action => "Action",
            Dimension::Data => "Data",
            Dimension::Infrastructure => "Infrastructure",
            Dimension::Governance => "Governance",
            Dimension::Change => "Change",
            Dimension::Resources => "Resources",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// The two scoring frameworks. Each contributes half of the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightGroup {
    Aaimm,
    Navigator,
}

impl WeightGroup {
    pub const fn dimensions(self) -> &'static [Dimension] {
        match self {
            WeightGroup::Aaimm => &[
                Dimension::Reasoning,
                Dimension::Collaboration,
                Dimension::Action,
            ],
            WeightGroup::Navigator => &[
                Dimension::Data,
                Dimension::Infrastructure,
                Dimension::Governance,
                Dimension::Change,
                Dimension::Resources,
            ],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WeightGroup::Aaimm => "AAIMM",
            WeightGroup::Navigator => "Navigator",
        }
    }
}

/// A single 1-5 questionnaire item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub key: &'static str,
    pub dimension: Dimension,
    pub weight_group: WeightGroup,
    pub prompt: &'static str,
    pub scale_min: u8,
    pub scale_max: u8,
}

impl Question {
    const fn new(key: &'static str, dimension: Dimension, prompt: &'static str) -> Self {
        Self {
            key,
            dimension,
            weight_group: dimension.weight_group(),
            prompt,
            scale_min: SCALE_MIN,
            scale_max: SCALE_MAX,
        }
    }
}

/// Versioned, read-only list of questions the scoring engine iterates.
///
/// Changing the question list changes the scores of future submissions only; every score
/// result carries the version it was computed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuestionCatalog {
    pub version: &'static str,
    pub questions: &'static [Question],
}

impl QuestionCatalog {
    pub const fn new(version: &'static str, questions: &'static [Question]) -> Self {
        Self { version, questions }
    }

    /// The 24-question catalog served by the portal.
    pub fn reference() -> Self {
        Self::new(REFERENCE_CATALOG_VERSION, &REFERENCE_QUESTIONS)
    }

    pub fn question(&self, key: &str) -> Option<&'static Question> {
        self.questions.iter().find(|question| question.key == key)
    }

    pub fn questions_for(&self, dimension: Dimension) -> Vec<&'static Question> {
        self.questions
            .iter()
            .filter(|question| question.dimension == dimension)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl Default for QuestionCatalog {
    fn default() -> Self {
        Self::reference()
    }
}

pub const REFERENCE_CATALOG_VERSION: &str = "ai-navigator-2025.1";

static REFERENCE_QUESTIONS: [Question; 24] = [
    Question::new(
        "reasoning_01",
        Dimension::Reasoning,
        "How consistently do business units frame AI initiatives as explicit decision problems with measurable business outcomes and defined confidence thresholds?",
    ),
    Question::new(
        "reasoning_02",
        Dimension::Reasoning,
        "To what extent are model recommendations challenged through structured hypothesis testing before they are accepted in executive workflows?",
    ),
    Question::new(
        "reasoning_03",
        Dimension::Reasoning,
        "How mature is your organization in documenting decision rationale when AI outputs materially influence financial, operational, or risk decisions?",
    ),
    Question::new(
        "collaboration_01",
        Dimension::Collaboration,
        "How effectively do product, data science, legal, and operations leaders co-own AI priorities through formal governance forums and shared KPIs?",
    ),
    Question::new(
        "collaboration_02",
        Dimension::Collaboration,
        "To what degree are frontline domain experts embedded into model design and validation rather than consulted only after deployment decisions?",
    ),
    Question::new(
        "collaboration_03",
        Dimension::Collaboration,
        "How consistently are disagreements on AI tradeoffs resolved through transparent escalation paths with executive sponsorship?",
    ),
    Question::new(
        "action_01",
        Dimension::Action,
        "How reliably does your organization convert AI insights into operational actions with clear owners, deadlines, and benefit tracking?",
    ),
    Question::new(
        "action_02",
        Dimension::Action,
        "To what extent are AI-enabled process changes codified into standard operating procedures and audited for adoption at scale?",
    ),
    Question::new(
        "action_03",
        Dimension::Action,
        "How quickly can leadership move from pilot evidence to enterprise rollout without losing control of quality, compliance, or value realization?",
    ),
    Question::new(
        "data_01",
        Dimension::Data,
        "How mature is your enterprise data foundation in providing trusted, governed, and reusable data products for AI use cases across business lines?",
    ),
    Question::new(
        "data_02",
        Dimension::Data,
        "To what extent are data quality issues proactively detected, prioritized by business impact, and resolved within defined service levels?",
    ),
    Question::new(
        "data_03",
        Dimension::Data,
        "How consistently can teams trace critical AI features to authoritative sources, transformations, and stewardship accountability?",
    ),
    Question::new(
        "infrastructure_01",
        Dimension::Infrastructure,
        "How well does your platform support secure, scalable model development and deployment across cloud, on-prem, and regulated environments?",
    ),
    Question::new(
        "infrastructure_02",
        Dimension::Infrastructure,
        "To what degree are MLOps and LLMOps capabilities standardized to reduce cycle time while maintaining reproducibility and control?",
    ),
    Question::new(
        "infrastructure_03",
        Dimension::Infrastructure,
        "How effectively do cost, latency, and reliability metrics inform architectural decisions for production AI services?",
    ),
    Question::new(
        "governance_01",
        Dimension::Governance,
        "How comprehensive is your AI governance framework in defining accountability, control points, and risk thresholds for high-impact use cases?",
    ),
    Question::new(
        "governance_02",
        Dimension::Governance,
        "To what extent are model risk, bias, privacy, and security assessments integrated into delivery gates rather than handled as exceptions?",
    ),
    Question::new(
        "governance_03",
        Dimension::Governance,
        "How consistently does executive leadership receive decision-ready reporting on AI compliance posture and residual risk exposure?",
    ),
    Question::new(
        "change_01",
        Dimension::Change,
        "How effectively does the organization manage behavioral and process change required for sustained adoption of AI-enabled ways of working?",
    ),
    Question::new(
        "change_02",
        Dimension::Change,
        "To what degree are communications, training, and leadership reinforcement tailored to different stakeholder groups during AI transformations?",
    ),
    Question::new(
        "change_03",
        Dimension::Change,
        "How consistently are adoption barriers identified early and resolved through structured intervention plans with accountable owners?",
    ),
    Question::new(
        "resources_01",
        Dimension::Resources,
        "How well are funding, talent, and partner capacity aligned to the AI portfolio based on strategic value and execution risk?",
    ),
    Question::new(
        "resources_02",
        Dimension::Resources,
        "To what extent does your workforce strategy build critical AI capabilities through targeted hiring, upskilling, and role redesign?",
    ),
    Question::new(
        "resources_03",
        Dimension::Resources,
        "How effectively are scarce technical resources prioritized toward initiatives with the strongest enterprise impact and readiness?",
    ),
];
