//! Coaching for stories, statistics and soundbites.

use super::{MIN_STATISTIC_ADVICE_CHARS, MIN_STORY_ADVICE_CHARS};

/// Returned when a story is too short to coach.
pub const STORY_MORE_PROMPT: &str = "Tell me more — even a few sentences about what happened, who was involved, and how it felt. The best stories are specific and personal.";

/// Returned when a statistic is too short to coach.
pub const STATISTIC_MORE_PROMPT: &str = "What numbers do you have? Think about: how many people are affected, what percentage improved, how much time or money is involved, before vs. after comparisons.";

/// Fixed analysis of what makes a soundbite work.
pub const SOUNDBITE_ADVICE: &str = "This soundbite works because it is:\n\nShort and memorable. Under 15 words is ideal for a soundbite — something someone could repeat to a colleague without looking at their notes.\n\nEmotionally resonant. It creates a feeling, not just a thought. The best soundbites stay with people because they felt something when they heard them.\n\nQuotable. Imagine a journalist, a funder, or a colleague hearing this. Would they write it down? Would they repeat it? That is the test of a great soundbite.";

const SOUNDBITE_SETS: [[&str; 3]; 3] = [
    [
        "This is not a problem for tomorrow — it is happening in someone's field, home, or community right now.",
        "The question is not whether we can afford to act. It is whether we can afford not to.",
        "Behind every data point is a person waiting for us to get this right.",
    ],
    [
        "We do not need more evidence. We need more courage to act on what we already know.",
        "The gap is not between what is possible and what we know — it is between what we know and what we choose to fund.",
        "The communities who need this most are not waiting for a perfect solution. They are waiting for us to show up.",
    ],
    [
        "Every season this continues is a season too many for the people living through it.",
        "This is the kind of change that starts with a conversation and ends with a transformation.",
        "We are not just changing a process — we are changing a life trajectory.",
    ],
];

fn trimmed_len(text: &str) -> usize {
    text.trim().chars().count()
}

/// Coaches the use of a story for the message at `message_index` (0-based).
pub fn generate_story_advice(story: &str, message_index: usize) -> String {
    if trimmed_len(story) < MIN_STORY_ADVICE_CHARS {
        return STORY_MORE_PROMPT.to_string();
    }
    format!(
        "Great story material. Here is how to use it effectively:\n\n\
         Lead with the human moment. Start with a specific detail — a name, a place, a time of day — that puts your audience in the scene. Visual Language makes this story come alive.\n\n\
         Build to the turning point. Your audience needs to feel the tension before the resolution. This is Suspense — do not give away the ending too early.\n\n\
         Connect it back to your message. End by linking this story directly to your key message. The story is the vehicle; your message is the destination.\n\n\
         This story works well for Message {} because it illustrates the real-world impact in a way data alone never could.",
        message_index.saturating_add(1)
    )
}

/// Coaches the framing of a statistic for the message at `message_index`.
pub fn generate_statistic_advice(statistic: &str, message_index: usize) -> String {
    if trimmed_len(statistic) < MIN_STATISTIC_ADVICE_CHARS {
        return STATISTIC_MORE_PROMPT.to_string();
    }
    format!(
        "Good statistic. Here is how to make it land:\n\n\
         Frame it for impact. Do not just state the number — anchor it. \"50% of farmers\" is good. \"1 in 2 smallholder farmers — meaning if your neighbour and you both farmed the same land, one of you is still doing it entirely by hand\" is unforgettable.\n\n\
         Use the minimum needed. One powerful, well-framed statistic beats ten charts. Your audience only needs enough data to believe your point.\n\n\
         Pair it with emotion. A statistic tells them it is real. A story tells them it matters. Together, they are unstoppable. This stat works perfectly alongside the story you have chosen for Message {}.",
        message_index.saturating_add(1)
    )
}

/// Three soundbite options, rotated by message index.
///
/// The message text does not influence the deterministic options.
pub fn generate_soundbite_options(_message: &str, message_index: usize) -> Vec<String> {
    SOUNDBITE_SETS[message_index % SOUNDBITE_SETS.len()]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Explains what makes a soundbite work. Independent of the soundbite text.
pub fn generate_soundbite_advice(_soundbite: &str) -> String {
    SOUNDBITE_ADVICE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const STORY: &str = "Grace walked four hours to the mill every market day.";

    #[test]
    fn short_story_gets_prompt_for_any_index() {
        for i in 0..5 {
            assert_eq!(generate_story_advice("", i), STORY_MORE_PROMPT);
            assert_eq!(generate_story_advice("   a short tale   ", i), STORY_MORE_PROMPT);
        }
    }

    #[test]
    fn story_advice_names_one_based_message() {
        for i in 0..3 {
            let advice = generate_story_advice(STORY, i);
            assert!(advice.contains(&format!("Message {}", i + 1)));
            assert!(advice.starts_with("Great story material."));
            assert_eq!(advice.split("\n\n").count(), 5);
        }
    }

    #[test]
    fn story_threshold_is_twenty_characters() {
        let nineteen = "a".repeat(19);
        let twenty = "a".repeat(20);
        assert_eq!(generate_story_advice(&nineteen, 0), STORY_MORE_PROMPT);
        assert_ne!(generate_story_advice(&twenty, 0), STORY_MORE_PROMPT);
    }

    #[test]
    fn statistic_threshold_is_five_characters() {
        assert_eq!(generate_statistic_advice("50%", 0), STATISTIC_MORE_PROMPT);
        assert_eq!(generate_statistic_advice("  1in2 ", 0), STATISTIC_MORE_PROMPT);

        let advice = generate_statistic_advice("1 in 2", 1);
        assert!(advice.starts_with("Good statistic."));
        assert!(advice.contains("Message 2."));
    }

    #[test]
    fn soundbite_options_rotate_mod_three() {
        assert_eq!(generate_soundbite_options("x", 4), generate_soundbite_options("y", 1));
        assert_eq!(generate_soundbite_options("", 0), generate_soundbite_options("", 3));
        assert_ne!(generate_soundbite_options("", 0), generate_soundbite_options("", 1));
        for i in 0..3 {
            assert_eq!(generate_soundbite_options("", i).len(), 3);
        }
    }

    #[test]
    fn largest_index_does_not_overflow() {
        let story = generate_story_advice(STORY, usize::MAX);
        assert!(story.contains(&format!("Message {}", usize::MAX)));

        let stat = generate_statistic_advice("1 in 2 farmers", usize::MAX);
        assert!(stat.contains(&format!("Message {}.", usize::MAX)));

        assert_eq!(generate_soundbite_options("", usize::MAX).len(), 3);
    }

    #[test]
    fn soundbite_advice_ignores_input() {
        assert_eq!(generate_soundbite_advice(""), SOUNDBITE_ADVICE);
        assert_eq!(generate_soundbite_advice("Act now."), SOUNDBITE_ADVICE);
    }
}
