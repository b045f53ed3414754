//! Career assessment decision logic (no rendering / IO).

use super::state::{CareerLabel, FormInputs, Recommendation, RuleId};

/// What a rule looks for in the form.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Condition {
    /// Checkbox value present in `interests`.
    Interest(&'static str),
    /// Option value present in `skills`.
    Skill(&'static str),
}

impl Condition {
    pub fn matches(self, inputs: &FormInputs) -> bool {
        match self {
            Condition::Interest(v) => inputs.has_interest(v),
            Condition::Skill(v) => inputs.has_skill(v),
        }
    }
}

pub struct Rule {
    pub id: RuleId,
    pub condition: Condition,
    pub label: CareerLabel,
}

/// Label used when no rule matches.
pub const DEFAULT_CAREER: CareerLabel = CareerLabel::SoftwareEngineer;

/// Rule table, highest precedence first.
pub const RULES: [Rule; 3] = [
    Rule {
        id: RuleId::CommunicationSkill,
        condition: Condition::Skill("Communication"),
        label: CareerLabel::MarketingSpecialist,
    },
    Rule {
        id: RuleId::BusinessInterest,
        condition: Condition::Interest("Business"),
        label: CareerLabel::BusinessAnalyst,
    },
    Rule {
        id: RuleId::ArtInterest,
        condition: Condition::Interest("Art"),
        label: CareerLabel::GraphicDesigner,
    },
];

/// Pick a career for the given answers. The first matching rule wins.
pub fn recommend(inputs: &FormInputs) -> Recommendation {
    RULES
        .iter()
        .find(|rule| rule.condition.matches(inputs))
        .map(|rule| Recommendation {
            label: rule.label,
            matched: Some(rule.id),
        })
        .unwrap_or(Recommendation {
            label: DEFAULT_CAREER,
            matched: None,
        })
}
