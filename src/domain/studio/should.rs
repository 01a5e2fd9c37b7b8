//! Should statements: short, broad injustice claims.
//!
//! Statements may name a place or a group of people but never the project's
//! technology, product or method. Five rhetorical patterns are produced in a
//! fixed order: "No X should", "X should have the same", "We should not
//! accept", "The fact that ... should concern us" and "Every X should".

use super::context::{capitalize, DocumentContext};
use super::topic::TopicSignals;

/// Number of statements returned by [`generate_should_statements`].
pub const SHOULD_STATEMENT_COUNT: usize = 5;

/// Singular forms keyed on the plural population value.
const POPULATION_SINGULAR: &[(&str, &str)] = &[
    ("smallholder farmers", "smallholder farmer"),
    ("women farmers", "woman farmer"),
    ("women", "woman"),
    ("women and girls", "woman or girl"),
    ("girls and young women", "girl or young woman"),
    ("patients", "patient"),
    ("children", "child"),
    ("young people", "young person"),
    ("adolescents", "young person"),
    ("refugees", "refugee"),
    ("older people", "older person"),
    ("students", "student"),
    ("teachers and educators", "teacher"),
    ("frontline health workers", "frontline health worker"),
    ("community health workers", "community health worker"),
    ("Indigenous communities", "Indigenous community"),
];

const DEFAULT_POPULATION: &str = "the people this research is designed to help";

/// Singular form of a population value, or the value itself when unmapped.
pub fn singular_population(population: &str) -> &str {
    POPULATION_SINGULAR
        .iter()
        .find(|(plural, _)| *plural == population)
        .map(|(_, singular)| *singular)
        .unwrap_or(population)
}

/// Generates five should statements from the project documents.
///
/// The behaviour-change goal is accepted for interface symmetry with the
/// model-backed path; the deterministic statements do not depend on it.
pub fn generate_should_statements(documents: &str, _behaviour_change: &str) -> Vec<String> {
    let ctx = DocumentContext::from_documents(documents);
    let signals = TopicSignals::detect(documents);

    let has_population = !ctx.population.is_empty();
    let has_geography = !ctx.geography.is_empty();
    let pop = if has_population {
        ctx.population.as_str()
    } else {
        DEFAULT_POPULATION
    };
    let pop_singular = singular_population(pop);
    let g_in = if has_geography {
        format!("in {}", ctx.geography)
    } else {
        "in communities like this".to_string()
    };
    let place = has_population && has_geography;

    let no_one = if place {
        format!("No {pop_singular} {g_in} should be held back by challenges that the rest of the world has already moved past.")
    } else if signals.health {
        format!("No {pop_singular} should face this without access to the best care available — wherever they happen to live.")
    } else {
        "No community should be left carrying the full weight of a problem that the rest of the world is not paying attention to.".to_string()
    };

    let equality = if signals.gender && has_geography {
        format!("Women {g_in} should not still be bearing the heaviest burden of the hardest work — that is not equality, it is an injustice we have chosen to overlook.")
    } else if place {
        format!(
            "{} {g_in} should have the same opportunities as everyone else. Right now, they do not — and that gap is not inevitable.",
            capitalize(pop)
        )
    } else if signals.health {
        "Every person facing this condition should have access to the best available care — not just those in the right postcode.".to_string()
    } else {
        "The communities doing the hardest work should not be the last to see the benefits of the progress being made around them.".to_string()
    };

    let not_accept = if has_geography {
        format!(
            "We should not accept that {} remains on the wrong side of this divide — not when we know what needs to change.",
            ctx.geography
        )
    } else if signals.gender {
        "We should not accept a world where women carry a disproportionate share of this burden — that is a choice, not an inevitability.".to_string()
    } else if signals.health {
        "We should not accept that where you are born determines whether you survive this — not when that does not have to be true.".to_string()
    } else {
        "We should not accept the gap between what this research makes possible and what communities are actually experiencing.".to_string()
    };

    let naming = if signals.gender && has_geography {
        format!("The fact that women {g_in} still face this should concern all of us — it is not a development problem, it is a justice problem.")
    } else if has_geography {
        format!("The inequality between what is possible for communities {g_in} and what they are actually experiencing should not be this wide.")
    } else {
        "The distance between those who benefit from progress and those who need it most should not be measured in generations.".to_string()
    };

    let rights = if place {
        format!("Every {pop_singular} {g_in} who wants a better life should have a genuine shot at one — not just the ones lucky enough to catch the right programme.")
    } else if signals.health {
        "Every patient, wherever they live, should have access to the best available treatment — that is not an ambition, it is a baseline.".to_string()
    } else {
        "Every community this work is designed to help should genuinely benefit from it — not just read about it in someone else's success story.".to_string()
    };

    vec![no_one, equality, not_accept, naming, rights]
}
