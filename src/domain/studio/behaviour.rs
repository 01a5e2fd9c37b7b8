//! Behaviour-change suggestions.
//!
//! One suggestion per fixed category, in this order: a formal decision or
//! commitment, a practice change, a mindset shift, participation, and
//! championing. Each category picks a template from the audience signals
//! and the extracted context.

use super::context::DocumentContext;
use super::topic::AudienceSignals;

/// Number of suggestions returned by [`suggest_behaviour_changes`].
pub const BEHAVIOUR_SUGGESTION_COUNT: usize = 5;

/// Texts shorter than this that mention "aware" read as awareness goals.
const SHORT_AWARENESS_LEN: usize = 80;

const AWARENESS_PHRASES: &[&str] = &[
    "raise awareness",
    "raising awareness",
    "increase awareness",
    "build awareness",
    "raise the profile",
    "raise my profile",
    "raise the awareness",
];

/// Suggests five distinct behaviour-change goals for a project document.
pub fn suggest_behaviour_changes(documents: &str) -> Vec<String> {
    let ctx = DocumentContext::from_documents(documents);
    let signals = AudienceSignals::detect(documents);

    let has_geography = !ctx.geography.is_empty();
    let p = if ctx.population.is_empty() {
        "communities affected by this issue"
    } else {
        ctx.population.as_str()
    };
    let g = if has_geography {
        format!(" in {}", ctx.geography)
    } else {
        String::new()
    };
    let g_of = if has_geography {
        ctx.geography.as_str()
    } else {
        "this region"
    };
    let d = first_non_empty(&[ctx.domain_short.as_str(), ctx.domain.as_str()], "this approach");
    let d_full = first_non_empty(&[ctx.domain.as_str()], "this work");
    let key_topic = ctx
        .top_keywords
        .first()
        .map(String::as_str)
        .unwrap_or(d);

    let decision = if signals.policy && has_geography {
        format!("Convince the {g_of} government to formally include {d} in its national development or agricultural strategy — moving from interest to a written commitment")
    } else if signals.funding {
        "Get a specific funder to approve a grant for the next phase of this work — not an expression of interest, but a signed commitment with a start date".to_string()
    } else {
        "Get the most important decision-maker in your audience to commit to a concrete next step — a funded pilot, a policy inclusion, or a formal review — rather than filing this away".to_string()
    };

    let practice = if !ctx.population.is_empty() && !ctx.domain.is_empty() {
        format!("Persuade practitioners who work with {p}{g} to actively adopt {d} — not as an experiment, but as their default approach")
    } else if signals.ngo {
        format!("Convince a development organisation{g} to embed {d_full} into their existing programme design rather than treating it as a one-off pilot")
    } else {
        format!("Move the people who deliver this kind of work from knowing about {d_full} to actually using it — changing practice, not just perspective")
    };

    let mindset = if signals.policy {
        "Shift policymakers from asking \"is this proven?\" to asking \"what will it take to implement this at scale?\" — from scepticism to ownership".to_string()
    } else if signals.academic {
        format!("Convince peer researchers and research funders to treat {key_topic} as a priority area, not a peripheral interest — so it gets the attention and resource it deserves")
    } else {
        format!("Change how {p} thinks about this issue — from \"this is too complex to solve\" to \"this is solvable and someone needs to act\"")
    };

    let participation = if signals.survey {
        format!("Recruit [X] volunteers or participants from {p}{g} to take part in the next phase of the study")
    } else if signals.public || has_geography {
        format!("Get members of the public{g} — including schools, community groups, or local organisations — to actively engage with this issue: attend, share, or take part in a specific activity")
    } else {
        "Encourage your audience to take one direct action after your talk — sign up, share, respond to a survey, or join a citizen science project — so engagement becomes a habit, not a one-off".to_string()
    };

    let championing = if signals.academic {
        "Get three or more respected peers or institutions to publicly cite, recommend, or co-sign this work — lending it credibility in circles you cannot currently reach yourself".to_string()
    } else if signals.public {
        format!("Inspire journalists, educators, or community leaders{g} to tell this story to their own audiences — multiplying your reach beyond the room you are standing in")
    } else {
        format!("Persuade a credible voice in your field — an institution, a network, or a respected individual — to publicly endorse and actively champion {d_full} on your behalf")
    };

    vec![decision, practice, mindset, participation, championing]
}

/// Returns true when a stated goal is about awareness rather than action.
pub fn is_raising_awareness(goal: &str) -> bool {
    let lower = goal.to_lowercase();
    AWARENESS_PHRASES.iter().any(|phrase| lower.contains(phrase))
        || (lower.contains("aware") && lower.chars().count() < SHORT_AWARENESS_LEN)
}

pub(crate) fn first_non_empty<'a>(candidates: &[&'a str], fallback: &'a str) -> &'a str {
    candidates
        .iter()
        .copied()
        .find(|s| !s.is_empty())
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const POLICY_DOC: &str = "Our solar thresher project in Zimbabwe works with smallholder \
        farmers. We want the Ministry of Agriculture and the government to include \
        mechanisation in national strategy, and a donor to fund the next phase.";

    #[test]
    fn always_returns_five_non_empty_suggestions() {
        for input in ["", "x", "   ", POLICY_DOC, "Cancer patients in Kenya need care"] {
            let suggestions = suggest_behaviour_changes(input);
            assert_eq!(suggestions.len(), BEHAVIOUR_SUGGESTION_COUNT);
            assert!(suggestions.iter().all(|s| !s.trim().is_empty()));
        }
    }

    #[test]
    fn long_document_yields_distinct_suggestions() {
        let suggestions = suggest_behaviour_changes(POLICY_DOC);
        let unique: HashSet<&String> = suggestions.iter().collect();
        assert_eq!(unique.len(), BEHAVIOUR_SUGGESTION_COUNT);
    }

    #[test]
    fn policy_document_targets_national_government() {
        let suggestions = suggest_behaviour_changes(POLICY_DOC);

        assert!(suggestions[0].starts_with("Convince the Zimbabwe government"));
        assert!(suggestions[0].contains("agricultural mechanisation"));
        assert!(suggestions[1].contains("smallholder farmers in Zimbabwe"));
        assert!(suggestions[2].starts_with("Shift policymakers"));
    }

    #[test]
    fn empty_document_uses_generic_phrasing() {
        let suggestions = suggest_behaviour_changes("");

        assert!(suggestions[0].starts_with("Get the most important decision-maker"));
        assert!(suggestions[1].contains("knowing about this work"));
        assert!(suggestions[2].contains("communities affected by this issue"));
        assert!(suggestions[3].starts_with("Encourage your audience"));
        assert!(suggestions[4].contains("champion this work"));
    }

    #[test]
    fn academic_document_uses_top_keyword() {
        let doc = "Peer review of coral reefs shows coral bleaching; our journal article on coral";
        let suggestions = suggest_behaviour_changes(doc);

        assert!(suggestions[2].contains("treat coral as a priority area"));
        assert!(suggestions[4].starts_with("Get three or more respected peers"));
    }

    #[test]
    fn survey_document_recruits_participants() {
        let doc = "We run a survey of refugees in Uganda";
        let suggestions = suggest_behaviour_changes(doc);

        assert_eq!(
            suggestions[3],
            "Recruit [X] volunteers or participants from refugees in Uganda to take part in the next phase of the study"
        );
    }

    #[test]
    fn awareness_goals_are_flagged() {
        assert!(is_raising_awareness("I want to raise awareness of malaria"));
        assert!(is_raising_awareness("Make people aware"));
        assert!(is_raising_awareness("RAISE THE PROFILE of our lab"));
        assert!(!is_raising_awareness(
            "Get the Ministry of Health to fund a national screening programme by 2026"
        ));
        assert!(!is_raising_awareness(""));
    }

    #[test]
    fn long_goal_mentioning_aware_is_not_flagged() {
        let goal = "Get the regional health board to sign off on the pilot budget, making them aware \
            of the costs along the way";
        assert!(goal.len() >= 80);
        assert!(!is_raising_awareness(goal));
    }
}
