//! Wizard steps and key message slots.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The eight wizard steps in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Upload,
    BehaviourChange,
    ShouldStatement,
    KeyMessages,
    Stories,
    Statistics,
    Soundbites,
    Summary,
}

impl WizardStep {
    /// Returns all steps in canonical order.
    pub fn all() -> &'static [WizardStep] {
        &[
            WizardStep::Upload,
            WizardStep::BehaviourChange,
            WizardStep::ShouldStatement,
            WizardStep::KeyMessages,
            WizardStep::Stories,
            WizardStep::Statistics,
            WizardStep::Soundbites,
            WizardStep::Summary,
        ]
    }

    /// Returns the 0-based index of this step.
    pub fn order_index(&self) -> usize {
        match self {
            WizardStep::Upload => 0,
            WizardStep::BehaviourChange => 1,
            WizardStep::ShouldStatement => 2,
            WizardStep::KeyMessages => 3,
            WizardStep::Stories => 4,
            WizardStep::Statistics => 5,
            WizardStep::Soundbites => 6,
            WizardStep::Summary => 7,
        }
    }

    /// Returns the 1-based step number shown to users.
    pub fn number(&self) -> usize {
        self.order_index() + 1
    }

    /// Returns the next step, if any.
    pub fn next(&self) -> Option<WizardStep> {
        Self::all().get(self.order_index() + 1).copied()
    }

    /// Returns the previous step, if any.
    pub fn previous(&self) -> Option<WizardStep> {
        self.order_index()
            .checked_sub(1)
            .and_then(|idx| Self::all().get(idx).copied())
    }

    /// Returns the short label.
    pub fn label(&self) -> &'static str {
        match self {
            WizardStep::Upload => "Upload",
            WizardStep::BehaviourChange => "Behaviour Change",
            WizardStep::ShouldStatement => "Should Statement",
            WizardStep::KeyMessages => "Key Messages",
            WizardStep::Stories => "Stories",
            WizardStep::Statistics => "Statistics",
            WizardStep::Soundbites => "Soundbites",
            WizardStep::Summary => "Summary",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Key message slot. Slot indices are fixed: 0 Problem, 1 Inspiration, 2 Payoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageSlot {
    Problem,
    Inspiration,
    Payoff,
}

impl MessageSlot {
    pub fn all() -> &'static [MessageSlot] {
        &[
            MessageSlot::Problem,
            MessageSlot::Inspiration,
            MessageSlot::Payoff,
        ]
    }

    /// Slot for a 0-based index; `None` beyond the third slot.
    pub fn from_index(index: usize) -> Option<MessageSlot> {
        Self::all().get(index).copied()
    }

    pub fn index(&self) -> usize {
        match self {
            MessageSlot::Problem => 0,
            MessageSlot::Inspiration => 1,
            MessageSlot::Payoff => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MessageSlot::Problem => "Problem",
            MessageSlot::Inspiration => "Inspiration",
            MessageSlot::Payoff => "Payoff",
        }
    }

    /// The question the wizard asks for this slot.
    pub fn question(&self) -> &'static str {
        match self {
            MessageSlot::Problem => "What injustice or unresolved gap does your work address?",
            MessageSlot::Inspiration => "What is unique and different about your approach?",
            MessageSlot::Payoff => "If your work succeeds, how does the world look different?",
        }
    }
}

impl fmt::Display for MessageSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
