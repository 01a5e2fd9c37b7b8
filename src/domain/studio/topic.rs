//! Topic signals and topic buckets.
//!
//! Signals are boolean cues detected by substring search over lower-cased
//! text. Buckets are the closed set of template families the PIP and key
//! message generators choose between.

use serde::{Deserialize, Serialize};

fn mentions_any(lower: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| lower.contains(term))
}

const POLICY_TERMS: &[&str] = &["policy", "government", "minister", "legislation", "strategy"];
const FUNDING_TERMS: &[&str] = &["fund", "grant", "donor", "invest", "budget"];
const ACADEMIC_TERMS: &[&str] = &[
    "journal",
    "publish",
    "peer review",
    "future research",
    "citation",
];
const PUBLIC_TERMS: &[&str] = &["public", "citizen", "community", "school", "media", "outreach"];
const SURVEY_TERMS: &[&str] = &["survey", "volunteer", "participant", "citizen science", "trial"];
const NGO_TERMS: &[&str] = &["ngo", "organisation", "organization", "programme", "implement"];

const GENDER_TERMS: &[&str] = &["women", "gender", "female"];
const TECHNOLOGY_TERMS: &[&str] = &[
    "technology",
    "solar",
    "mechanis",
    "thresher",
    "digital",
    "innovation",
];
const HEALTH_TERMS: &[&str] = &["patient", "disease", "cancer", "clinic", "treatment", "medical"];

const AGRICULTURE_TERMS: &[&str] = &[
    "farm",
    "sorghum",
    "harvest",
    "crop",
    "thresher",
    "grain",
    "mechanis",
];
const REGULATION_TERMS: &[&str] = &[
    "policy",
    "government",
    "minister",
    "legislation",
    "regulation",
    "policymaker",
];
const RENEWABLE_TERMS: &[&str] = &["solar", "renewable"];

/// Audience cues used to pick behaviour-change suggestions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AudienceSignals {
    pub policy: bool,
    pub funding: bool,
    pub academic: bool,
    pub public: bool,
    pub survey: bool,
    pub ngo: bool,
}

impl AudienceSignals {
    pub fn detect(text: &str) -> Self {
        let lower = text.to_lowercase();
        Self {
            policy: mentions_any(&lower, POLICY_TERMS),
            funding: mentions_any(&lower, FUNDING_TERMS),
            academic: mentions_any(&lower, ACADEMIC_TERMS),
            public: mentions_any(&lower, PUBLIC_TERMS),
            survey: mentions_any(&lower, SURVEY_TERMS),
            ngo: mentions_any(&lower, NGO_TERMS),
        }
    }
}

/// Subject cues used by the should-statement and PIP generators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TopicSignals {
    pub gender: bool,
    pub technology: bool,
    pub health: bool,
    pub agriculture: bool,
    pub policy: bool,
    pub renewable: bool,
}

impl TopicSignals {
    pub fn detect(text: &str) -> Self {
        let lower = text.to_lowercase();
        Self {
            gender: mentions_any(&lower, GENDER_TERMS),
            technology: mentions_any(&lower, TECHNOLOGY_TERMS),
            health: mentions_any(&lower, HEALTH_TERMS),
            agriculture: mentions_any(&lower, AGRICULTURE_TERMS),
            policy: mentions_any(&lower, REGULATION_TERMS),
            renewable: mentions_any(&lower, RENEWABLE_TERMS),
        }
    }
}

/// Template family for research-level suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicBucket {
    /// Agriculture and farm technology.
    Agriculture,
    Health,
    /// Anything else.
    General,
}

impl TopicBucket {
    /// Classifies research text. Agriculture is checked before health.
    pub fn classify(signals: &TopicSignals) -> Self {
        if signals.agriculture {
            TopicBucket::Agriculture
        } else if signals.health {
            TopicBucket::Health
        } else {
            TopicBucket::General
        }
    }

    /// Classifies a short claim such as a should statement.
    ///
    /// Uses a broader vocabulary than [`TopicBucket::classify`]: technology
    /// or agriculture wording selects the agriculture bucket.
    pub fn classify_claim(claim: &ClaimSignals) -> Self {
        if claim.technology || claim.agriculture {
            TopicBucket::Agriculture
        } else if claim.health {
            TopicBucket::Health
        } else {
            TopicBucket::General
        }
    }

    pub fn all() -> &'static [TopicBucket] {
        &[
            TopicBucket::Agriculture,
            TopicBucket::Health,
            TopicBucket::General,
        ]
    }
}

/// Cues read from a should statement when drafting key messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClaimSignals {
    pub technology: bool,
    pub health: bool,
    pub agriculture: bool,
    pub gender: bool,
    pub climate: bool,
}

impl ClaimSignals {
    pub fn detect(claim: &str) -> Self {
        let lower = claim.to_lowercase();
        Self {
            technology: mentions_any(
                &lower,
                &["technology", "solar", "mechanis", "digital", "thresher", "sorghum"],
            ),
            health: mentions_any(
                &lower,
                &["health", "patient", "cancer", "disease", "treatment"],
            ),
            agriculture: mentions_any(&lower, &["farmer", "harvest", "crop", "food", "grain"]),
            gender: mentions_any(&lower, &["women", "gender", "girls"]),
            climate: mentions_any(&lower, &["climate", "solar", "renewable", "carbon"]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audience_signals_detect_each_category() {
        let s = AudienceSignals::detect("The Government strategy");
        assert!(s.policy);
        assert!(!s.funding);

        let s = AudienceSignals::detect("a donor grant");
        assert!(s.funding);

        let s = AudienceSignals::detect("published in a peer review journal");
        assert!(s.academic);

        let s = AudienceSignals::detect("school outreach");
        assert!(s.public);

        let s = AudienceSignals::detect("a randomised trial with volunteers");
        assert!(s.survey);

        let s = AudienceSignals::detect("an NGO programme");
        assert!(s.ngo);
    }

    #[test]
    fn empty_text_has_no_signals() {
        assert_eq!(AudienceSignals::detect(""), AudienceSignals::default());
        assert_eq!(TopicSignals::detect(""), TopicSignals::default());
        assert_eq!(ClaimSignals::detect(""), ClaimSignals::default());
    }

    #[test]
    fn agriculture_takes_priority_over_health() {
        let signals = TopicSignals::detect("farm clinic treatment");
        assert_eq!(TopicBucket::classify(&signals), TopicBucket::Agriculture);

        let signals = TopicSignals::detect("cancer patients");
        assert_eq!(TopicBucket::classify(&signals), TopicBucket::Health);

        let signals = TopicSignals::detect("urban housing");
        assert_eq!(TopicBucket::classify(&signals), TopicBucket::General);
    }

    #[test]
    fn claims_about_technology_use_agriculture_bucket() {
        let claim = ClaimSignals::detect("No one should wait for digital tools");
        assert_eq!(TopicBucket::classify_claim(&claim), TopicBucket::Agriculture);

        let claim = ClaimSignals::detect("Every patient deserves care");
        assert_eq!(TopicBucket::classify_claim(&claim), TopicBucket::Health);

        let claim = ClaimSignals::detect("We should not accept this");
        assert_eq!(TopicBucket::classify_claim(&claim), TopicBucket::General);
    }

    #[test]
    fn bucket_serializes_snake_case() {
        let json = serde_json::to_string(&TopicBucket::Agriculture).unwrap();
        assert_eq!(json, "\"agriculture\"");
    }
}
