//! Document context extraction.
//!
//! Turns free-form project text into a [`DocumentContext`]: one geography,
//! one population, one subject domain (long and short form), one impact
//! phrase and the most frequent content words.
//!
//! # Matching rules
//!
//! Each category is an ordered lookup table scanned top to bottom. The first
//! match term found anywhere in the lower-cased text wins, even when a later
//! entry would also match. Matching is plain substring search with no word
//! boundaries, so table order is part of the observable contract.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Maximum number of keywords kept in [`DocumentContext::top_keywords`].
pub const MAX_KEYWORDS: usize = 8;

/// Tokens must be strictly longer than this to count as keywords.
const MIN_KEYWORD_LEN: usize = 4;

/// Geography lookup: (match term, display value).
pub const GEOGRAPHY_TABLE: &[(&str, &str)] = &[
    ("zimbabwe", "Zimbabwe"),
    ("kenya", "Kenya"),
    ("ghana", "Ghana"),
    ("nigeria", "Nigeria"),
    ("tanzania", "Tanzania"),
    ("ethiopia", "Ethiopia"),
    ("india", "India"),
    ("bangladesh", "Bangladesh"),
    ("pakistan", "Pakistan"),
    ("myanmar", "Myanmar"),
    ("cambodia", "Cambodia"),
    ("vietnam", "Vietnam"),
    ("indonesia", "Indonesia"),
    ("philippines", "the Philippines"),
    ("nepal", "Nepal"),
    ("malawi", "Malawi"),
    ("zambia", "Zambia"),
    ("mozambique", "Mozambique"),
    ("uganda", "Uganda"),
    ("rwanda", "Rwanda"),
    ("senegal", "Senegal"),
    ("burkina faso", "Burkina Faso"),
    ("sub-saharan", "sub-Saharan Africa"),
    ("africa", "Africa"),
    ("latin america", "Latin America"),
    ("south asia", "South Asia"),
    ("rural", "rural communities"),
    ("remote", "remote communities"),
    ("developing countr", "developing countries"),
    ("low-income countr", "low-income countries"),
    ("low-and-middle", "low- and middle-income countries"),
    ("lmic", "low- and middle-income countries"),
    ("global south", "the Global South"),
];

/// Population lookup: (match term, display value).
pub const POPULATION_TABLE: &[(&str, &str)] = &[
    ("smallholder", "smallholder farmers"),
    ("women farmer", "women farmers"),
    ("women", "women"),
    ("female", "women"),
    ("girl", "girls and young women"),
    ("gender", "women and girls"),
    ("farmer", "smallholder farmers"),
    ("patient", "patients"),
    ("children", "children"),
    ("child", "children"),
    ("youth", "young people"),
    ("adolescent", "adolescents"),
    ("refugee", "refugees"),
    ("indigenous", "Indigenous communities"),
    ("elderly", "older people"),
    ("caregiver", "caregivers"),
    ("nurse", "frontline health workers"),
    ("community health", "community health workers"),
    ("teacher", "teachers and educators"),
    ("student", "students"),
];

/// Domain lookup: (match term, full description, short label).
pub const DOMAIN_TABLE: &[(&str, &str, &str)] = &[
    ("sorghum", "sorghum and millet processing", "cereal crop processing"),
    ("thresher", "solar-powered threshing technology", "agricultural mechanisation"),
    ("roaster", "integrated threshing and roasting technology", "grain processing"),
    ("mechanis", "agricultural mechanisation", "farm technology"),
    ("post-harvest", "post-harvest technology", "post-harvest solutions"),
    ("climate-smart", "climate-smart agriculture", "climate-smart farming"),
    ("food securit", "food security", "food security"),
    ("climate change", "climate change adaptation", "climate action"),
    ("solar", "solar-powered technology", "solar energy solutions"),
    ("renewable energy", "renewable energy", "clean energy"),
    ("carbon", "carbon reduction technology", "decarbonisation"),
    ("cancer", "cancer treatment and care", "cancer care"),
    ("mental health", "mental health support", "mental health"),
    ("vaccine", "vaccination programmes", "vaccines"),
    ("antibiotic", "antimicrobial resistance", "AMR"),
    ("diabetes", "diabetes management", "diabetes"),
    ("malaria", "malaria prevention and treatment", "malaria"),
    ("hiv", "HIV/AIDS treatment and prevention", "HIV"),
    ("tuberculosis", "tuberculosis prevention and care", "TB"),
    ("machine learning", "AI and machine learning", "AI technology"),
    ("artificial intelligence", "artificial intelligence", "AI"),
    ("digital health", "digital health technology", "digital health"),
    ("microbiome", "microbiome research", "the microbiome"),
    ("genomic", "genomics research", "genomics"),
    ("water", "water access and sanitation", "water security"),
    ("sanitation", "water and sanitation", "WASH"),
    ("housing", "affordable housing", "housing"),
    ("education", "education innovation", "education"),
    ("literacy", "literacy programmes", "literacy"),
];

/// Impact phrase lookup: (match term, verb phrase).
pub const ACTION_TABLE: &[(&str, &str)] = &[
    ("drudgery", "free communities from backbreaking manual labour"),
    ("labour-intensive", "replace labour-intensive methods with smarter solutions"),
    ("manual labour", "replace manual labour with technology that works"),
    ("burden", "reduce the burden on communities that have carried it too long"),
    ("empower", "empower communities to determine their own futures"),
    ("transform", "transform the lives of the people who need it most"),
    ("prevent", "prevent harm before it takes hold"),
    ("increase access", "increase access to the tools and support people deserve"),
    ("reduce", "reduce the impact of this challenge on real lives"),
    ("improve", "improve outcomes for the communities who need them most"),
    ("scale", "scale what works so no community gets left behind"),
    ("sustain", "build solutions that last beyond a single project"),
    ("gender equit", "close the gender gap and give women a fair shot"),
    ("inequalit", "tackle the inequalities that hold communities back"),
];

static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
        "from", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do",
        "does", "did", "will", "would", "could", "should", "may", "might", "that", "this",
        "these", "those", "it", "its", "their", "they", "we", "our", "your", "my", "i", "he",
        "she", "which", "who", "what", "when", "where", "how", "why", "as", "so", "if", "than",
        "then", "more", "most", "some", "such", "also", "not", "no", "can", "up", "out",
        "about", "into", "through", "over", "after", "before", "between", "during", "each",
        "all", "both", "few", "many", "much", "other", "same", "even", "just", "only", "well",
        "new", "good", "first", "last", "long", "own", "right", "great", "high", "used",
        "using", "based", "project", "study", "research", "paper", "results", "data",
        "analysis", "model", "system", "approach", "method", "methods", "current", "provide",
        "include", "including", "however", "therefore", "although", "while", "thus", "hence",
        "further", "since", "often", "very", "quite",
    ]
    .into_iter()
    .collect()
});

/// Structured semantic summary of a project document.
///
/// Every text field is either empty or one of the output values of its
/// lookup table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentContext {
    pub geography: String,
    pub population: String,
    pub domain: String,
    pub domain_short: String,
    pub action: String,
    pub top_keywords: Vec<String>,
}

impl DocumentContext {
    /// Extracts context from `documents` plus optional auxiliary text.
    pub fn extract(documents: &str, extra: &str) -> Self {
        let text = format!("{} {}", documents, extra).to_lowercase();

        let (domain, domain_short) = DOMAIN_TABLE
            .iter()
            .find(|(term, _, _)| text.contains(term))
            .map(|(_, full, short)| (full.to_string(), short.to_string()))
            .unwrap_or_default();

        Self {
            geography: first_match(&text, GEOGRAPHY_TABLE),
            population: first_match(&text, POPULATION_TABLE),
            domain,
            domain_short,
            action: first_match(&text, ACTION_TABLE),
            top_keywords: top_keywords(&text),
        }
    }

    /// Extracts context from a single document.
    pub fn from_documents(documents: &str) -> Self {
        Self::extract(documents, "")
    }

    /// Returns true when no category matched and no keywords were found.
    pub fn is_empty(&self) -> bool {
        self.geography.is_empty()
            && self.population.is_empty()
            && self.domain.is_empty()
            && self.action.is_empty()
            && self.top_keywords.is_empty()
    }
}

fn first_match(text: &str, table: &[(&str, &str)]) -> String {
    table
        .iter()
        .find(|(term, _)| text.contains(term))
        .map(|(_, value)| value.to_string())
        .unwrap_or_default()
}

/// Counts content words in first-seen order and returns the most frequent.
///
/// Ties keep first-seen order because the sort is stable.
fn top_keywords(text: &str) -> Vec<String> {
    let mut frequencies: IndexMap<String, usize> = IndexMap::new();

    for token in text.split_whitespace() {
        let clean: String = token.chars().filter(|c| c.is_ascii_lowercase()).collect();
        if clean.len() > MIN_KEYWORD_LEN && !STOPWORDS.contains(clean.as_str()) {
            *frequencies.entry(clean).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(String, usize)> = frequencies.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
        .into_iter()
        .take(MAX_KEYWORDS)
        .map(|(word, _)| word)
        .collect()
}

/// Upper-cases the first character.
pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
