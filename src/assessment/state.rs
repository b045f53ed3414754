//! Career assessment data model.

use std::collections::BTreeSet;
use std::fmt;

use serde::Deserialize;

/// Values read from the quiz form for one submission.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FormInputs {
    /// Checked `interests` checkboxes. Order is irrelevant.
    pub interests: BTreeSet<String>,
    /// Selected `skills` options, in the order the control presents them.
    pub skills: Vec<String>,
    /// Free text. Carried along but never consulted when deciding.
    pub goals: String,
}

impl FormInputs {
    pub fn has_interest(&self, value: &str) -> bool {
        self.interests.contains(value)
    }

    pub fn has_skill(&self, value: &str) -> bool {
        self.skills.iter().any(|s| s == value)
    }
}

/// The careers the assessment can recommend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CareerLabel {
    SoftwareEngineer,
    GraphicDesigner,
    BusinessAnalyst,
    MarketingSpecialist,
}

/// All careers in declaration order.
#[cfg(test)]
pub const ALL_CAREERS: [CareerLabel; 4] = [
    CareerLabel::SoftwareEngineer,
    CareerLabel::GraphicDesigner,
    CareerLabel::BusinessAnalyst,
    CareerLabel::MarketingSpecialist,
];

impl CareerLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            CareerLabel::SoftwareEngineer => "Software Engineer",
            CareerLabel::GraphicDesigner => "Graphic Designer",
            CareerLabel::BusinessAnalyst => "Business Analyst",
            CareerLabel::MarketingSpecialist => "Marketing Specialist",
        }
    }
}

impl fmt::Display for CareerLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies an entry of the rule table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleId {
    CommunicationSkill,
    BusinessInterest,
    ArtInterest,
}

impl RuleId {
    /// Short tag used in console logs.
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    pub fn name(self) -> &'static str {
        match self {
            RuleId::CommunicationSkill => "skills:Communication",
            RuleId::BusinessInterest => "interests:Business",
            RuleId::ArtInterest => "interests:Art",
        }
    }
}

/// Outcome of one assessment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Recommendation {
    pub label: CareerLabel,
    /// Rule that decided the label; `None` when the default applied.
    pub matched: Option<RuleId>,
}
