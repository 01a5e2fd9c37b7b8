//! Parsing of raw model replies into task results.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::task::{TaskName, TaskResult};
use super::GatewayError;
use crate::domain::studio::PipSuggestions;

#[derive(Deserialize)]
struct SummaryReply {
    summary: String,
}

#[derive(Deserialize)]
struct SuggestionsReply {
    suggestions: Vec<String>,
}

#[derive(Deserialize)]
struct StatementsReply {
    statements: Vec<String>,
}

#[derive(Deserialize)]
struct AdviceReply {
    advice: String,
}

#[derive(Deserialize)]
struct OptionsReply {
    options: Vec<String>,
}

/// Removes one leading "```" (optionally "```json") fence with its newline
/// and one trailing "```" fence with the newline before it, then trims.
pub fn strip_code_fences(raw: &str) -> &str {
    let mut text = raw;
    if let Some(rest) = text.strip_prefix("```") {
        let rest = rest.strip_prefix("json").unwrap_or(rest);
        text = rest.strip_prefix('\n').unwrap_or(rest);
    }
    if let Some(rest) = text.strip_suffix("```") {
        text = rest.strip_suffix('\n').unwrap_or(rest);
    }
    text.trim()
}

fn decode<T: DeserializeOwned>(task: TaskName, text: &str) -> Result<T, GatewayError> {
    serde_json::from_str(text)
        .map_err(|e| GatewayError::MalformedResponse(format!("{}: {}", task, e)))
}

/// Parses a model reply into the result shape of `task`.
pub fn parse_reply(task: TaskName, raw: &str) -> Result<TaskResult, GatewayError> {
    let text = strip_code_fences(raw);

    let result = match task {
        TaskName::SummariseDocument => TaskResult::Text(decode::<SummaryReply>(task, text)?.summary),
        TaskName::SuggestBehaviourChanges => {
            TaskResult::List(decode::<SuggestionsReply>(task, text)?.suggestions)
        }
        TaskName::GenerateShouldStatements => {
            TaskResult::List(decode::<StatementsReply>(task, text)?.statements)
        }
        TaskName::GeneratePipSuggestions => TaskResult::Pip(decode::<PipSuggestions>(task, text)?),
        TaskName::GenerateStoryAdvice
        | TaskName::GenerateStatisticAdvice
        | TaskName::GenerateSoundbiteAdvice => {
            TaskResult::Text(decode::<AdviceReply>(task, text)?.advice)
        }
        TaskName::GenerateSoundbiteOptions => {
            TaskResult::List(decode::<OptionsReply>(task, text)?.options)
        }
    };

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_json_fences() {
        assert_eq!(strip_code_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("```\n{\"a\":1}```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("  {\"a\":1}  "), "{\"a\":1}");
    }

    #[test]
    fn leaves_unfenced_text_alone() {
        assert_eq!(strip_code_fences("{\"summary\":\"x\"}"), "{\"summary\":\"x\"}");
        assert_eq!(strip_code_fences(""), "");
    }

    #[test]
    fn parses_each_reply_shape() {
        let summary = parse_reply(TaskName::SummariseDocument, r#"{"summary":"You study sorghum."}"#)
            .unwrap();
        assert_eq!(summary, TaskResult::Text("You study sorghum.".to_string()));

        let options = parse_reply(
            TaskName::GenerateSoundbiteOptions,
            "```json\n{\"options\":[\"a\",\"b\",\"c\"]}\n```",
        )
        .unwrap();
        assert_eq!(options.as_list().map(|o| o.len()), Some(3));

        let pip = parse_reply(
            TaskName::GeneratePipSuggestions,
            r#"{"problem":["p"],"inspiration":["i"],"payoff":["y"],"extra":true}"#,
        )
        .unwrap();
        assert_eq!(pip.as_pip().unwrap().payoff, vec!["y".to_string()]);

        let advice =
            parse_reply(TaskName::GenerateStatisticAdvice, r#"{"advice":"Anchor it."}"#).unwrap();
        assert_eq!(advice.as_text(), Some("Anchor it."));
    }

    #[test]
    fn wrong_shape_is_malformed() {
        let err = parse_reply(TaskName::SuggestBehaviourChanges, r#"{"summary":"x"}"#).unwrap_err();
        assert!(matches!(err, GatewayError::MalformedResponse(_)));

        let err = parse_reply(TaskName::SummariseDocument, "not json").unwrap_err();
        assert!(err.to_string().contains("summariseDocument"));
    }
}
