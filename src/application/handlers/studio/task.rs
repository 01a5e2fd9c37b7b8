//! Studio task names, parameters and results.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use super::GatewayError;
use crate::domain::studio::{
    document_summary, generate_pip_suggestions, generate_should_statements,
    generate_soundbite_advice, generate_soundbite_options, generate_statistic_advice,
    generate_story_advice, suggest_behaviour_changes, PipSuggestions,
};

/// The eight task types accepted by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskName {
    SummariseDocument,
    SuggestBehaviourChanges,
    GenerateShouldStatements,
    GeneratePipSuggestions,
    GenerateStoryAdvice,
    GenerateStatisticAdvice,
    GenerateSoundbiteOptions,
    GenerateSoundbiteAdvice,
}

impl TaskName {
    pub fn all() -> &'static [TaskName] {
        &[
            TaskName::SummariseDocument,
            TaskName::SuggestBehaviourChanges,
            TaskName::GenerateShouldStatements,
            TaskName::GeneratePipSuggestions,
            TaskName::GenerateStoryAdvice,
            TaskName::GenerateStatisticAdvice,
            TaskName::GenerateSoundbiteOptions,
            TaskName::GenerateSoundbiteAdvice,
        ]
    }

    /// Wire name used in the request `type` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskName::SummariseDocument => "summariseDocument",
            TaskName::SuggestBehaviourChanges => "suggestBehaviourChanges",
            TaskName::GenerateShouldStatements => "generateShouldStatements",
            TaskName::GeneratePipSuggestions => "generatePIPSuggestions",
            TaskName::GenerateStoryAdvice => "generateStoryAdvice",
            TaskName::GenerateStatisticAdvice => "generateStatisticAdvice",
            TaskName::GenerateSoundbiteOptions => "generateSoundbiteOptions",
            TaskName::GenerateSoundbiteAdvice => "generateSoundbiteAdvice",
        }
    }
}

impl fmt::Display for TaskName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskName {
    type Err = GatewayError;

    /// Exact, case-sensitive match on the wire name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaskName::all()
            .iter()
            .copied()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| GatewayError::UnknownTask(s.to_string()))
    }
}

/// Treats an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A fully parameterised studio task, tagged by its wire name.
///
/// Missing or null parameters default to the empty string or index 0.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum StudioTask {
    SummariseDocument {
        #[serde(default, deserialize_with = "null_as_default")]
        documents: String,
    },
    SuggestBehaviourChanges {
        #[serde(default, deserialize_with = "null_as_default")]
        documents: String,
    },
    #[serde(rename_all = "camelCase")]
    GenerateShouldStatements {
        #[serde(default, deserialize_with = "null_as_default")]
        documents: String,
        #[serde(default, deserialize_with = "null_as_default")]
        behaviour_change: String,
    },
    #[serde(rename = "generatePIPSuggestions", rename_all = "camelCase")]
    GeneratePipSuggestions {
        #[serde(default, deserialize_with = "null_as_default")]
        documents: String,
        #[serde(default, deserialize_with = "null_as_default")]
        should_statement: String,
    },
    #[serde(rename_all = "camelCase")]
    GenerateStoryAdvice {
        #[serde(default, deserialize_with = "null_as_default")]
        story: String,
        #[serde(default, deserialize_with = "null_as_default")]
        message_index: usize,
    },
    #[serde(rename_all = "camelCase")]
    GenerateStatisticAdvice {
        #[serde(default, deserialize_with = "null_as_default")]
        statistic: String,
        #[serde(default, deserialize_with = "null_as_default")]
        message_index: usize,
    },
    #[serde(rename_all = "camelCase")]
    GenerateSoundbiteOptions {
        #[serde(default, deserialize_with = "null_as_default")]
        message: String,
        #[serde(default, deserialize_with = "null_as_default")]
        message_index: usize,
    },
    GenerateSoundbiteAdvice {
        #[serde(default, deserialize_with = "null_as_default")]
        soundbite: String,
    },
}

impl StudioTask {
    pub fn name(&self) -> TaskName {
        match self {
            StudioTask::SummariseDocument { .. } => TaskName::SummariseDocument,
            StudioTask::SuggestBehaviourChanges { .. } => TaskName::SuggestBehaviourChanges,
            StudioTask::GenerateShouldStatements { .. } => TaskName::GenerateShouldStatements,
            StudioTask::GeneratePipSuggestions { .. } => TaskName::GeneratePipSuggestions,
            StudioTask::GenerateStoryAdvice { .. } => TaskName::GenerateStoryAdvice,
            StudioTask::GenerateStatisticAdvice { .. } => TaskName::GenerateStatisticAdvice,
            StudioTask::GenerateSoundbiteOptions { .. } => TaskName::GenerateSoundbiteOptions,
            StudioTask::GenerateSoundbiteAdvice { .. } => TaskName::GenerateSoundbiteAdvice,
        }
    }

    /// Answers the task with the deterministic generators.
    pub fn fallback(&self) -> TaskResult {
        match self {
            StudioTask::SummariseDocument { documents } => {
                TaskResult::Text(document_summary(documents))
            }
            StudioTask::SuggestBehaviourChanges { documents } => {
                TaskResult::List(suggest_behaviour_changes(documents))
            }
            StudioTask::GenerateShouldStatements {
                documents,
                behaviour_change,
            } => TaskResult::List(generate_should_statements(documents, behaviour_change)),
            StudioTask::GeneratePipSuggestions {
                documents,
                should_statement,
            } => TaskResult::Pip(generate_pip_suggestions(documents, should_statement)),
            StudioTask::GenerateStoryAdvice {
                story,
                message_index,
            } => TaskResult::Text(generate_story_advice(story, *message_index)),
            StudioTask::GenerateStatisticAdvice {
                statistic,
                message_index,
            } => TaskResult::Text(generate_statistic_advice(statistic, *message_index)),
            StudioTask::GenerateSoundbiteOptions {
                message,
                message_index,
            } => TaskResult::List(generate_soundbite_options(message, *message_index)),
            StudioTask::GenerateSoundbiteAdvice { soundbite } => {
                TaskResult::Text(generate_soundbite_advice(soundbite))
            }
        }
    }
}

/// Value returned for a task: a string, a list of strings, or PIP options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskResult {
    Text(String),
    List(Vec<String>),
    Pip(PipSuggestions),
}

impl TaskResult {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TaskResult::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            TaskResult::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_pip(&self) -> Option<&PipSuggestions> {
        match self {
            TaskResult::Pip(pip) => Some(pip),
            _ => None,
        }
    }
}
