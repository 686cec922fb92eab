//! Expert personas and their system instructions
//!
//! The persona set is closed and compiled in. Resolution is total: an
//! unrecognized identifier falls back to [`DEFAULT_INSTRUCTION`] instead of
//! failing, so a stale or hand-edited request can never break the answer
//! path.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Instruction used when the persona identifier is not recognized
pub const DEFAULT_INSTRUCTION: &str = "You are a helpful assistant.";

/// An expert role the user can consult
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Persona {
    /// Finance, investment, savings, asset building
    FinancialAdvisor,
    /// Career planning, job changes, skill development
    CareerConsultant,
}

impl Persona {
    /// Every selectable persona, in display order
    pub const ALL: &'static [Persona] = &[Persona::FinancialAdvisor, Persona::CareerConsultant];

    /// Stable identifier used on the wire
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::FinancialAdvisor => "financial-advisor",
            Self::CareerConsultant => "career-consultant",
        }
    }

    /// Human-readable label for the selector
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::FinancialAdvisor => "Financial Advisor",
            Self::CareerConsultant => "Career Consultant",
        }
    }

    /// One-line description shown next to the label
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::FinancialAdvisor => "Finance, investment, savings, and asset building",
            Self::CareerConsultant => "Career planning, job changes, and skill development",
        }
    }

    /// System instruction establishing the expert role
    #[must_use]
    pub const fn instruction(&self) -> &'static str {
        match self {
            Self::FinancialAdvisor => {
                "You are a skilled financial advisor. Answer the user's question with \
                 professional, concrete, and easy-to-understand advice from the perspectives \
                 of finance, investment, savings, and asset building."
            }
            Self::CareerConsultant => {
                "You are an experienced career consultant. Answer the user's question with \
                 attentive and precise advice from the perspectives of career planning, \
                 job changes, skill development, and self-analysis."
            }
        }
    }

    /// Look up a persona by its wire identifier
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.id() == id)
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Resolve a persona identifier to its system instruction.
///
/// Total: unknown identifiers resolve to [`DEFAULT_INSTRUCTION`].
#[must_use]
pub fn instruction_for(id: &str) -> &'static str {
    Persona::from_id(id)
        .map(|p| p.instruction())
        .unwrap_or(DEFAULT_INSTRUCTION)
}
