//! Candidate key messages, message explanations and alignment checks.

use serde::{Deserialize, Serialize};

use super::topic::{ClaimSignals, TopicBucket};
use super::MIN_MESSAGE_CHARS;

/// Number of candidates returned by [`generate_key_messages`].
pub const KEY_MESSAGE_COUNT: usize = 7;

const SHORT_MESSAGE_FEEDBACK: &str = "This message seems quite short. A strong key message should be a clear, specific claim that supports your should statement. Try to articulate exactly why your audience should care.";

const EXPLANATIONS: [&str; 3] = [
    "This message works because it creates urgency and makes the problem personal. When your audience realises this issue touches their own world, they move from passive listeners to active supporters. It connects to Emotional Language — making them feel something before you ask them to do something.",
    "This message is powerful because it shifts from problem to solution. You have established what is wrong — now you are offering hope. This is the Inspiration part of the PIP structure. The word proven adds Logical Language — credibility that reassures sceptics.",
    "This message combines emotional weight with a call to action. It frames inaction as a choice, which is a powerful persuasion technique. The Opposite Effect at work — instead of asking them to do something, you are asking why they would choose not to.",
];

/// Outcome of checking a drafted key message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alignment {
    pub aligned: bool,
    pub feedback: String,
}

/// Drafts seven candidate key messages that support a should statement.
pub fn generate_key_messages(should_statement: &str) -> Vec<String> {
    let claim = ClaimSignals::detect(should_statement);

    let messages: Vec<&str> = match TopicBucket::classify_claim(&claim) {
        TopicBucket::Agriculture => vec![
            "The technology exists and has been proven to work — what is missing is the will to bring it to the people who need it.",
            "The communities who stand to benefit most are the ones currently being left out of the technology conversation.",
            "Local production and local ownership are the keys to long-term sustainability — imported solutions rarely last.",
            "The economic case is clear: the return on this investment, in productivity, time, and wellbeing, far exceeds the cost.",
            if claim.gender {
                "Gender equity is not a side benefit of this technology — for many communities, it is the entire point."
            } else {
                "This is not a pilot that needs more proof — it is a solution that needs more commitment."
            },
            "Scaling this solution does not require reinventing the wheel — it requires backing what already works.",
            if claim.climate {
                "This is not just good economics — it is climate-smart development that benefits both people and the planet."
            } else {
                "The barrier is not technical — it is political. The decision-makers have the power to change this today."
            },
        ],
        TopicBucket::Health => vec![
            "Too many people are being diagnosed too late — and late diagnosis is a death sentence when it does not have to be.",
            "The treatment exists. The barrier is access — and that is a political decision, not a medical one.",
            "Every week of delay in funding this means real patients paying the price with their health.",
            "Prevention is not just better than cure — it is dramatically cheaper, and we already know how to do it.",
            "The communities most affected by this condition are the ones with the least access to solutions.",
            "Our current standard of care was designed for a different era. This research shows a better way.",
            "The human cost of inaction is quantifiable — and it is unconscionable when the alternative is within reach.",
        ],
        TopicBucket::General => vec![
            "The scale of this problem is larger than most decision-makers realise — and it affects people they have never met.",
            "There is a proven approach that works, tested in the field, and this is the evidence to back it.",
            "The human cost of the current situation is unacceptable when a practical, affordable solution already exists.",
            "The return on investment — in productivity, time, wellbeing, and economic output — makes this a compelling case.",
            "Every year without action is a year the communities who need this most fall further behind.",
            "This is not just about innovation — it is about justice. The people most affected have the least access to solutions.",
            "What works in one context can work in many — the challenge now is not proof of concept, it is proof of commitment.",
        ],
    };

    messages.into_iter().map(str::to_string).collect()
}

/// Explains why a key message in the given slot works.
pub fn explain_message(_message: &str, index: usize) -> String {
    EXPLANATIONS[index % EXPLANATIONS.len()].to_string()
}

/// Checks a drafted key message against the should statement.
pub fn validate_message_alignment(message: &str, _should_statement: &str) -> Alignment {
    if message.trim().chars().count() < MIN_MESSAGE_CHARS {
        return Alignment {
            aligned: false,
            feedback: SHORT_MESSAGE_FEEDBACK.to_string(),
        };
    }
    Alignment {
        aligned: true,
        feedback: String::new(),
    }
}
