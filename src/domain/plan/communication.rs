//! Communication plan built up step by step by the wizard.

use serde::{Deserialize, Serialize};

use super::step::{MessageSlot, WizardStep};
use crate::domain::studio::{
    word_count, MIN_BEHAVIOUR_CHANGE_CHARS, MIN_MESSAGE_CHARS, MIN_SHOULD_STATEMENT_CHARS,
    MIN_SOUNDBITE_CHARS, MIN_STATISTIC_ADVICE_CHARS, MIN_STORY_CHARS, MIN_SUMMARY_WORDS,
};

/// Plan editing errors.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum PlanError {
    #[error("{slot} message must be at least {min} characters")]
    MessageTooShort { slot: MessageSlot, min: usize },
}

fn trimmed_len(text: &str) -> usize {
    text.trim().chars().count()
}

/// Content gathered for one key message.
///
/// Advice fields are only valid for the content they were generated
/// against; every content setter clears the matching advice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageData {
    pub text: String,
    pub story: String,
    pub story_advice: String,
    pub statistic: String,
    pub statistic_advice: String,
    pub soundbite: String,
    pub soundbite_advice: String,
}

impl MessageData {
    /// Sets the story and clears its advice.
    pub fn set_story(&mut self, story: impl Into<String>) {
        self.story = story.into();
        self.story_advice.clear();
    }

    /// Sets the statistic and clears its advice.
    pub fn set_statistic(&mut self, statistic: impl Into<String>) {
        self.statistic = statistic.into();
        self.statistic_advice.clear();
    }

    /// Sets the soundbite and clears its advice.
    pub fn set_soundbite(&mut self, soundbite: impl Into<String>) {
        self.soundbite = soundbite.into();
        self.soundbite_advice.clear();
    }

    pub fn has_story(&self) -> bool {
        trimmed_len(&self.story) >= MIN_STORY_CHARS
    }

    pub fn has_statistic(&self) -> bool {
        trimmed_len(&self.statistic) >= MIN_STATISTIC_ADVICE_CHARS
    }

    pub fn has_soundbite(&self) -> bool {
        trimmed_len(&self.soundbite) >= MIN_SOUNDBITE_CHARS
    }
}

/// The full communication plan handed to export at the end of the wizard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunicationPlan {
    pub documents: String,
    pub document_summary: String,
    pub behaviour_change: String,
    pub should_statements: Vec<String>,
    pub selected_should_statement: String,
    pub custom_should_statement: String,
    /// Confirmed key messages by slot index (Problem, Inspiration, Payoff).
    pub selected_messages: [String; 3],
    pub messages: [MessageData; 3],
}

impl CommunicationPlan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message(&self, slot: MessageSlot) -> &MessageData {
        &self.messages[slot.index()]
    }

    pub fn message_mut(&mut self, slot: MessageSlot) -> &mut MessageData {
        &mut self.messages[slot.index()]
    }

    pub fn set_story(&mut self, slot: MessageSlot, story: impl Into<String>) {
        self.message_mut(slot).set_story(story);
    }

    pub fn set_statistic(&mut self, slot: MessageSlot, statistic: impl Into<String>) {
        self.message_mut(slot).set_statistic(statistic);
    }

    pub fn set_soundbite(&mut self, slot: MessageSlot, soundbite: impl Into<String>) {
        self.message_mut(slot).set_soundbite(soundbite);
    }

    /// The should statement in force: a non-blank custom statement wins.
    pub fn effective_should_statement(&self) -> &str {
        if self.custom_should_statement.trim().is_empty() {
            &self.selected_should_statement
        } else {
            &self.custom_should_statement
        }
    }

    /// Confirms the key message for a slot and copies it into the message data.
    pub fn confirm_message(&mut self, slot: MessageSlot, text: &str) -> Result<(), PlanError> {
        let text = text.trim();
        if text.chars().count() < MIN_MESSAGE_CHARS {
            return Err(PlanError::MessageTooShort {
                slot,
                min: MIN_MESSAGE_CHARS,
            });
        }
        self.selected_messages[slot.index()] = text.to_string();
        self.messages[slot.index()].text = text.to_string();
        Ok(())
    }

    /// Reopens a confirmed slot for editing.
    pub fn reopen_message(&mut self, slot: MessageSlot) {
        self.selected_messages[slot.index()].clear();
    }

    pub fn confirmed_message_count(&self) -> usize {
        self.selected_messages
            .iter()
            .filter(|m| !m.trim().is_empty())
            .count()
    }

    /// Returns true when the plan satisfies the given step.
    pub fn is_step_complete(&self, step: WizardStep) -> bool {
        match step {
            WizardStep::Upload => {
                !self.document_summary.is_empty()
                    && word_count(&self.documents) >= MIN_SUMMARY_WORDS
            }
            WizardStep::BehaviourChange => {
                trimmed_len(&self.behaviour_change) >= MIN_BEHAVIOUR_CHANGE_CHARS
            }
            WizardStep::ShouldStatement => {
                trimmed_len(self.effective_should_statement()) >= MIN_SHOULD_STATEMENT_CHARS
            }
            WizardStep::KeyMessages => self.confirmed_message_count() == MessageSlot::all().len(),
            WizardStep::Stories => self.messages.iter().all(MessageData::has_story),
            WizardStep::Statistics => self.messages.iter().all(MessageData::has_statistic),
            WizardStep::Soundbites => self.messages.iter().all(MessageData::has_soundbite),
            WizardStep::Summary => true,
        }
    }

    /// First step the plan does not yet satisfy.
    pub fn first_incomplete_step(&self) -> Option<WizardStep> {
        WizardStep::all()
            .iter()
            .copied()
            .find(|step| !self.is_step_complete(*step))
    }
}
