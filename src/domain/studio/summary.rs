//! Document summary generator.

use super::context::DocumentContext;
use super::MIN_SUMMARY_WORDS;

/// Returned verbatim when the document is too short to analyse.
pub const MORE_CONTENT_PROMPT: &str = "Please paste more content so I can understand your project better. An abstract, summary, or description of your research or work would be ideal.";

const CLOSING: &str = " Let us use this as the foundation for building your communication plan.";

/// Counts whitespace-separated words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Summarises a project document in one paragraph.
///
/// Names the matched domain, geography and population when any are found,
/// otherwise the four most frequent keywords, otherwise a generic line.
pub fn document_summary(text: &str) -> String {
    let words = word_count(text);
    if words < MIN_SUMMARY_WORDS {
        return MORE_CONTENT_PROMPT.to_string();
    }

    let ctx = DocumentContext::from_documents(text);
    let mut parts: Vec<String> = Vec::new();
    if !ctx.domain.is_empty() {
        parts.push(ctx.domain.clone());
    }
    if !ctx.geography.is_empty() {
        parts.push(format!("in {}", ctx.geography));
    }
    if !ctx.population.is_empty() {
        parts.push(format!("affecting {}", ctx.population));
    }

    let mut summary = format!("I have read your document ({} words).", words);
    if !parts.is_empty() {
        summary.push_str(&format!(
            " I can see this work centres on {}.",
            parts.join(", ")
        ));
    } else if !ctx.top_keywords.is_empty() {
        let themes: Vec<&str> = ctx.top_keywords.iter().take(4).map(String::as_str).collect();
        summary.push_str(&format!(" Key themes I can see include: {}.", themes.join(", ")));
    } else {
        summary.push_str(" I have identified the key themes and potential impact areas.");
    }
    summary.push_str(CLOSING);
    summary
}
