//! Story Studio suggestion engine.
//!
//! Deterministic, context-aware generators for every step of the
//! communication plan wizard. They are used directly when no language model
//! is configured and as the fallback whenever a model call fails, so each
//! one is a complete answer on its own.
//!
//! # Architecture
//!
//! - **Context**: [`DocumentContext`] extracted fresh from the text on every call
//! - **Signals**: boolean topic and audience cues ([`topic`])
//! - **Generators**: pure functions, one per wizard task
//!
//! All generators are total: empty, very long or non-ASCII input never
//! panics, and input below the documented thresholds gets an explicit
//! "tell me more" response instead of a guess.
//!
//! # Example
//!
//! ```
//! use story_studio::domain::studio::{generate_soundbite_options, DocumentContext};
//!
//! let ctx = DocumentContext::extract("Smallholder farmers in Zimbabwe", "");
//! assert_eq!(ctx.geography, "Zimbabwe");
//! assert_eq!(generate_soundbite_options("", 4), generate_soundbite_options("", 1));
//! ```

pub mod behaviour;
pub mod coaching;
pub mod context;
pub mod key_messages;
pub mod pip;
pub mod should;
pub mod summary;
pub mod topic;

pub use behaviour::{is_raising_awareness, suggest_behaviour_changes, BEHAVIOUR_SUGGESTION_COUNT};
pub use coaching::{
    generate_soundbite_advice, generate_soundbite_options, generate_statistic_advice,
    generate_story_advice, SOUNDBITE_ADVICE, STATISTIC_MORE_PROMPT, STORY_MORE_PROMPT,
};
pub use context::DocumentContext;
pub use key_messages::{
    explain_message, generate_key_messages, validate_message_alignment, Alignment,
    KEY_MESSAGE_COUNT,
};
pub use pip::{generate_pip_suggestions, PipSuggestions, PIP_OPTIONS_PER_ROLE};
pub use should::{generate_should_statements, singular_population, SHOULD_STATEMENT_COUNT};
pub use summary::{document_summary, word_count, MORE_CONTENT_PROMPT};
pub use topic::TopicBucket;

/// Words needed before a document is summarised.
pub const MIN_SUMMARY_WORDS: usize = 15;

/// Trimmed characters needed before a behaviour-change goal counts as set.
pub const MIN_BEHAVIOUR_CHANGE_CHARS: usize = 10;

/// Trimmed characters needed before a should statement counts as chosen.
pub const MIN_SHOULD_STATEMENT_CHARS: usize = 5;

/// Trimmed characters needed to confirm a key message.
pub const MIN_MESSAGE_CHARS: usize = 10;

/// Trimmed characters needed for full story coaching.
pub const MIN_STORY_ADVICE_CHARS: usize = 20;

/// Trimmed characters for a story to count as complete in the wizard.
pub const MIN_STORY_CHARS: usize = 10;

/// Trimmed characters needed for statistic coaching and completion.
pub const MIN_STATISTIC_ADVICE_CHARS: usize = 5;

/// Trimmed characters for a soundbite to count as complete.
pub const MIN_SOUNDBITE_CHARS: usize = 5;
