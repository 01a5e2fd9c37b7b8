//! Model prompts for each studio task.

use super::task::StudioTask;

/// Coaching persona sent as the system prompt on every call.
pub const SYSTEM_PROMPT: &str = "You are the Story Studio Content Tool, a warm, expert communications coach built on the Story Studio framework.

Your job is to help researchers and professionals build a complete communication plan using the PIP framework:
- Problem: What injustice or unresolved gap does this work address?
- Inspiration: What is unique and different about this approach?
- Payoff: How does the world look if this work succeeds?

You also work with:
- Should Statements: Short injustice claims (e.g. \"No child should go to school hungry when solutions exist\"). NOT about specific technology. Broad moral claims about what's wrong with the world.
- Stories: Personal, specific, sensory moments that make messages human
- Statistics: One powerful, well-framed number that anchors a claim
- Soundbites: Under 15 words, memorable, quotable; what someone repeats to a colleague

Your tone is warm, encouraging, direct and specific. You coach, you don't lecture. You always connect suggestions back to the user's actual work.

Always respond with valid JSON matching the format requested.";

/// Character budgets for document text embedded in prompts.
pub const SUMMARY_DOCUMENT_CHARS: usize = 3000;
pub const BEHAVIOUR_DOCUMENT_CHARS: usize = 2500;
pub const SHOULD_DOCUMENT_CHARS: usize = 1500;
pub const PIP_DOCUMENT_CHARS: usize = 2000;

/// First `max` characters of `text`.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Builds the user prompt for a task.
pub fn user_prompt(task: &StudioTask) -> String {
    match task {
        StudioTask::SummariseDocument { documents } => format!(
            "Analyse this research project description and respond with JSON: {{\"summary\": \"2-3 sentence summary in second person, noting the domain, geography, and population the work focuses on. End with 'Let us use this as the foundation for building your communication plan.'\"}}\n\n\
             Document:\n{}",
            truncate_chars(documents, SUMMARY_DOCUMENT_CHARS)
        ),
        StudioTask::SuggestBehaviourChanges { documents } => format!(
            "Read this research project carefully and suggest 5 behaviour change goals the researcher might want from their audience.\n\n\
             CRITICAL RULES:\n\
             - NEVER suggest \"raise awareness\" or \"increase profile\". These are not behaviour changes. A behaviour change is something a specific person does, decides, funds, adopts, or joins.\n\
             - Each of the 5 suggestions must be a DIFFERENT TYPE of change, one from each category:\n\
             \x20 1. A concrete DECISION or formal commitment (e.g. approve funding, sign off on a programme, include in a strategy)\n\
             \x20 2. A PRACTICE CHANGE (e.g. adopt a new method, change how practitioners deliver this kind of work)\n\
             \x20 3. A MINDSET SHIFT (e.g. move from scepticism to ownership, from \"niche\" to \"urgent priority\")\n\
             \x20 4. PARTICIPATION or direct engagement (e.g. volunteer, take part in a survey, join a citizen science project, attend an event)\n\
             \x20 5. CHAMPIONING or amplification (e.g. publicly endorse, cite, share with their network, teach it in schools)\n\
             - Be SPECIFIC to this research: name the actual topic, geography, population or domain from the document\n\
             - Start each suggestion with an active verb: \"Commit to...\", \"Adopt...\", \"Shift from... to...\", \"Sign up to...\", \"Publicly endorse...\"\n\
             - Each suggestion should be 1-2 sentences, concrete enough to put on a slide\n\n\
             Respond with JSON: {{\"suggestions\": [\"suggestion 1\", \"suggestion 2\", \"suggestion 3\", \"suggestion 4\", \"suggestion 5\"]}}\n\n\
             Document:\n{}",
            truncate_chars(documents, BEHAVIOUR_DOCUMENT_CHARS)
        ),
        StudioTask::GenerateShouldStatements {
            documents,
            behaviour_change,
        } => format!(
            "Generate 5 \"Should Statements\" for this researcher.\n\n\
             A Should Statement is a SHORT INJUSTICE CLAIM. It names what is wrong with the world, not what the research does. It should be:\n\
             - Short enough to say right after your name\n\
             - A moral claim about what IS, not what should be done\n\
             - NO mention of specific technology, research methods, or products\n\
             - Pattern: \"No [person] should [face this]\" or \"We should not accept...\"\n\
             - Example of good: \"No child should go to school hungry when solutions already exist.\"\n\
             - Example of bad: \"We should fund solar threshing technology in Zimbabwe.\" (too specific)\n\n\
             Use the geography and population context from the documents, but keep statements broad and human.\n\n\
             Respond with JSON: {{\"statements\": [\"statement 1\", \"statement 2\", \"statement 3\", \"statement 4\", \"statement 5\"]}}\n\n\
             Research context: {}\n\
             Documents: {}",
            behaviour_change,
            truncate_chars(documents, SHOULD_DOCUMENT_CHARS)
        ),
        StudioTask::GeneratePipSuggestions {
            documents,
            should_statement,
        } => format!(
            "Generate PIP message suggestions for this researcher. The PIP framework has three roles:\n\
             - Problem: What is the injustice or unresolved gap? (1-2 sentences, creates tension)\n\
             - Inspiration: What is unique about this approach? (what makes it different from everything tried before)\n\
             - Payoff: How does the world look if this succeeds? (describe outcomes for people, not academic contributions)\n\n\
             Generate 3 options for each role, each 1-2 sentences. Make them specific to the research described.\n\n\
             Should Statement: \"{}\"\n\
             Research: {}\n\n\
             Respond with JSON: {{\"problem\": [\"p1\", \"p2\", \"p3\"], \"inspiration\": [\"i1\", \"i2\", \"i3\"], \"payoff\": [\"pay1\", \"pay2\", \"pay3\"]}}",
            should_statement,
            truncate_chars(documents, PIP_DOCUMENT_CHARS)
        ),
        StudioTask::GenerateStoryAdvice {
            story,
            message_index,
        } => format!(
            "A researcher has shared this story to support their Message {}. Give them coaching on how to use it effectively: how to open with a human moment, build tension, and connect it back to their key message. Be specific and warm.\n\n\
             Story: {}\n\n\
             Respond with JSON: {{\"advice\": \"coaching text here (3-4 short paragraphs, uses line breaks between them)\"}}",
            message_index.saturating_add(1),
            story
        ),
        StudioTask::GenerateStatisticAdvice {
            statistic,
            message_index,
        } => format!(
            "A researcher wants to use this statistic for their Message {}. Coach them on how to frame it for maximum impact: how to anchor it, make it relatable, and pair it with emotion.\n\n\
             Statistic: {}\n\n\
             Respond with JSON: {{\"advice\": \"coaching text here (2-3 short paragraphs)\"}}",
            message_index.saturating_add(1),
            statistic
        ),
        StudioTask::GenerateSoundbiteOptions { message, .. } => format!(
            "Generate 3 soundbite options for this key message. A soundbite is:\n\
             - Under 15 words\n\
             - Memorable and emotionally resonant\n\
             - Something someone would repeat to a colleague without notes\n\
             - Not a summary but a provocation or insight\n\n\
             Key message: {}\n\n\
             Respond with JSON: {{\"options\": [\"soundbite 1\", \"soundbite 2\", \"soundbite 3\"]}}",
            message
        ),
        StudioTask::GenerateSoundbiteAdvice { soundbite } => format!(
            "Analyse why this soundbite works (or doesn't), and give brief coaching on what makes a great soundbite.\n\n\
             Soundbite: \"{}\"\n\n\
             Respond with JSON: {{\"advice\": \"brief analysis and coaching (2 short paragraphs)\"}}",
            soundbite
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_characters_not_bytes() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("short", 100), "short");
        assert_eq!(truncate_chars("", 3), "");
    }

    #[test]
    fn summary_prompt_embeds_at_most_3000_chars() {
        let documents = format!("{}{}", "a".repeat(SUMMARY_DOCUMENT_CHARS), "TAIL");
        let prompt = user_prompt(&StudioTask::SummariseDocument { documents });

        assert!(prompt.contains(&"a".repeat(SUMMARY_DOCUMENT_CHARS)));
        assert!(!prompt.contains("TAIL"));
        assert!(prompt.contains("{\"summary\""));
    }

    #[test]
    fn advice_prompts_accept_largest_index() {
        let story = user_prompt(&StudioTask::GenerateStoryAdvice {
            story: "Grace walked four hours to the mill.".to_string(),
            message_index: usize::MAX,
        });
        assert!(story.contains(&format!("Message {}.", usize::MAX)));

        let stat = user_prompt(&StudioTask::GenerateStatisticAdvice {
            statistic: "1 in 2 farmers".to_string(),
            message_index: usize::MAX,
        });
        assert!(stat.contains(&format!("Message {}.", usize::MAX)));
    }

    #[test]
    fn should_prompt_uses_smaller_budget() {
        let documents = format!("{}{}", "b".repeat(SHOULD_DOCUMENT_CHARS), "TAIL");
        let prompt = user_prompt(&StudioTask::GenerateShouldStatements {
            documents,
            behaviour_change: "Fund a rollout".to_string(),
        });

        assert!(!prompt.contains("TAIL"));
        assert!(prompt.contains("Research context: Fund a rollout"));
    }

    #[test]
    fn advice_prompts_use_one_based_message_numbers() {
        let prompt = user_prompt(&StudioTask::GenerateStoryAdvice {
            story: "Grace walked to the mill.".to_string(),
            message_index: 2,
        });
        assert!(prompt.contains("Message 3."));
        assert!(prompt.contains("Story: Grace walked to the mill."));
    }

    #[test]
    fn persona_demands_json() {
        assert!(SYSTEM_PROMPT.ends_with("Always respond with valid JSON matching the format requested."));
    }
}
