//! Problem / Inspiration / Payoff suggestions.
//!
//! The research text and should statement are classified into a
//! [`TopicBucket`]; each bucket owns a fixed set of three problem, three
//! inspiration and three payoff templates.

use serde::{Deserialize, Serialize};

use super::context::{capitalize, DocumentContext};
use super::topic::{TopicBucket, TopicSignals};

/// Options generated per PIP role.
pub const PIP_OPTIONS_PER_ROLE: usize = 3;

const DEFAULT_POPULATION: &str = "the communities this research is designed to help";

/// Three candidate messages for each PIP role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipSuggestions {
    pub problem: Vec<String>,
    pub inspiration: Vec<String>,
    pub payoff: Vec<String>,
}

impl PipSuggestions {
    /// Candidates for a message slot index (0 problem, 1 inspiration, 2 payoff).
    pub fn for_slot(&self, index: usize) -> &[String] {
        match index {
            0 => &self.problem,
            1 => &self.inspiration,
            2 => &self.payoff,
            _ => &[],
        }
    }
}

/// Values interpolated into the PIP templates.
struct Slots {
    p: String,
    p_cap: String,
    geography: String,
    g: String,
    g_of: String,
    d: String,
    ds: String,
    signals: TopicSignals,
}

impl Slots {
    fn new(ctx: &DocumentContext, signals: TopicSignals) -> Self {
        let population = if ctx.population.is_empty() {
            DEFAULT_POPULATION
        } else {
            ctx.population.as_str()
        };
        let (g, g_of) = if ctx.geography.is_empty() {
            (String::new(), String::new())
        } else {
            (
                format!(" in {}", ctx.geography),
                format!(" of {}", ctx.geography),
            )
        };
        let d = if ctx.domain.is_empty() {
            "this approach"
        } else {
            ctx.domain.as_str()
        };
        let ds = [ctx.domain_short.as_str(), ctx.domain.as_str()]
            .into_iter()
            .find(|s| !s.is_empty())
            .unwrap_or("this work");

        Self {
            p: population.to_string(),
            p_cap: capitalize(population),
            geography: ctx.geography.clone(),
            g,
            g_of,
            d: d.to_string(),
            ds: ds.to_string(),
            signals,
        }
    }

    fn has_geography(&self) -> bool {
        !self.geography.is_empty()
    }
}

/// Generates PIP suggestions from the research text and should statement.
pub fn generate_pip_suggestions(documents: &str, should_statement: &str) -> PipSuggestions {
    let ctx = DocumentContext::extract(documents, should_statement);
    let signals = TopicSignals::detect(&format!("{} {}", documents, should_statement));
    let slots = Slots::new(&ctx, signals);

    match TopicBucket::classify(&signals) {
        TopicBucket::Agriculture => agriculture(&slots),
        TopicBucket::Health => health(&slots),
        TopicBucket::General => general(&slots),
    }
}

fn agriculture(s: &Slots) -> PipSuggestions {
    let Slots {
        p,
        p_cap,
        geography,
        g,
        g_of,
        d,
        ds,
        signals,
    } = s;

    let problem = vec![
        if s.has_geography() {
            format!("Manual, labour-intensive {ds} remains one of the most significant unresolved constraints on productivity and wellbeing for {p}{g} — a problem that is technically solvable, yet has received little serious investment.")
        } else {
            format!("{p_cap} still rely on manual, labour-intensive methods for {ds} — a time-consuming burden that limits productivity, income, and quality of life when better options exist.")
        },
        if s.has_geography() {
            format!("Across {geography}, {p} spend hours each day on {ds} tasks that could be mechanised — losing time, income, and energy to a problem that available technology could solve.")
        } else {
            format!("The gap between the {ds} technology available globally and what {p} actually have access to is not a technical gap — it is a gap in investment and commitment.")
        },
        if signals.gender {
            format!("Women and girls{g} bear a disproportionate share of the burden of manual {ds} — a burden that limits their time, health, and economic opportunity, and that the right technology could dramatically reduce.")
        } else {
            format!("{p_cap}{g} are locked into processing methods that have not changed in generations — not because better options are unavailable, but because no one has prioritised getting them there.")
        },
    ];

    let power = if signals.renewable {
        "solar power"
    } else {
        "appropriate technology"
    };
    let inspiration = vec![
        if s.has_geography() {
            format!("This project has designed and locally produced a {d} that dramatically reduces processing time for {p}{g} — built from locally available materials, priced for local realities, and tested in the conditions where it will actually be used.")
        } else {
            format!("This research has developed and field-tested a {d} tailored specifically for the communities it is designed to serve — addressing the limitations that have made previous approaches fail.")
        },
        format!("Unlike imported or donor-dependent solutions, this {ds} technology is locally produced, locally owned, and designed from the outset to be maintained and replicated without external support."),
        if s.has_geography() {
            format!("By combining {power} with participatory design and local manufacturing, this project has created a {ds} solution that is both technically proven and economically viable for communities across {geography}.")
        } else {
            "What makes this approach different is not what it proposes — it is what it has already demonstrated. The technology works, the uptake is measurable, and the model is ready to scale.".to_string()
        },
    ];

    let gender_equity = if signals.gender { ", gender equity," } else { "" };
    let payoff = vec![
        if signals.gender && s.has_geography() {
            format!("If this technology reaches the communities it was designed for, women in {geography} will reclaim hours each day previously lost to manual drudgery — time that translates directly into education, economic activity, and better health.")
        } else if s.has_geography() {
            format!("At scale, this technology changes more than how {ds} is done — it changes who has time, who has income, and what is possible for rural households across {geography}.")
        } else {
            format!("At scale, this approach does not just improve efficiency — it changes what is possible for the {p} who currently have no better option.")
        },
        if s.has_geography() {
            format!("A world where {p} in {geography} have access to affordable, locally produced {ds} technology is a world with stronger food security, higher household incomes, and measurably less physical hardship.")
        } else {
            format!("If {ds} technology like this reaches the communities that need it, the result is not just a more efficient process — it is a meaningfully better life for the people doing the work.")
        },
        if signals.policy {
            format!("The policy case is clear: investing in locally produced {ds} technology{g_of} delivers food security{gender_equity} and climate resilience at a fraction of the cost of conventional interventions. This research shows exactly where to start.")
        } else {
            format!("This research demonstrates that the barrier to better {ds}{g} is not technical — it is a question of commitment. With the right investment, a proven solution exists, and the communities who need it are ready.")
        },
    ];

    PipSuggestions {
        problem,
        inspiration,
        payoff,
    }
}

fn health(s: &Slots) -> PipSuggestions {
    let Slots { p, p_cap, g, ds, .. } = s;

    let problem = vec![
        format!("Too many {p} are still receiving outdated or inadequate {ds} — not because better options do not exist, but because those options are not reaching the people who need them."),
        if s.has_geography() {
            format!("The standard of {ds} available to {p}{g} has not kept pace with what research now makes possible — a gap with real and measurable consequences for health outcomes.")
        } else {
            format!("People who need better {ds} are waiting — not because the science is unclear, but because the systems around them have not caught up with it.")
        },
        format!("The human cost of the current approach to {ds} is quantifiable — and it is avoidable when the evidence for a better approach already exists."),
    ];

    let inspiration = vec![
        format!("This research has developed and clinically tested a {ds} approach that delivers measurably better outcomes than the current standard — with a clear pathway to implementation at scale."),
        "Unlike previous attempts, this approach specifically addresses the barriers — access, cost, and systemic inertia — that have prevented earlier innovations from reaching the people who need them.".to_string(),
        format!("The results are unambiguous: {p} who receive this {ds} intervention show significantly better outcomes — and the approach is designed from the outset to be scalable within existing systems."),
    ];

    let payoff = vec![
        "If this approach is implemented at the scale the evidence supports, the result is measurably fewer people facing unnecessary suffering, late diagnosis, or inadequate treatment.".to_string(),
        if s.has_geography() {
            format!("{p_cap}{g} who currently receive outdated {ds} could, with the right investment, have access to an evidence-based approach that dramatically changes their prognosis and quality of life.")
        } else {
            "The transformation is achievable: more people get better outcomes, with the resources already available, through a system the evidence shows works.".to_string()
        },
        format!("This research does not just advance the science of {ds} — it gives decision-makers a clear, costed, evidence-based case for change. The question is no longer whether we can. It is whether we will."),
    ];

    PipSuggestions {
        problem,
        inspiration,
        payoff,
    }
}

fn general(s: &Slots) -> PipSuggestions {
    let Slots {
        p, p_cap, g, signals, ..
    } = s;

    let problem = vec![
        "The challenge this research addresses is not a lack of evidence — it is a persistent gap between what we know and what is reaching the communities who need it most.".to_string(),
        if s.has_geography() {
            format!("{p_cap}{g} are operating without access to the tools, knowledge, or support that could meaningfully change their situation — not because those things do not exist, but because they have not been prioritised.")
        } else {
            format!("{p_cap} face a problem that is well documented, well understood, and consistently under-resourced. This research addresses that directly.")
        },
        "The status quo has a human cost. Every year without action in this space is a year that cost is paid by the people with the least power to change it.".to_string(),
    ];

    let inspiration = vec![
        "This research takes a fundamentally different approach: rather than describing the problem further, it delivers a tested, evidence-based solution — and demonstrates that it works in practice.".to_string(),
        "What makes this work distinctive is not its ambition but its specificity: a clearly defined intervention, a testable hypothesis, and results that are already changing the picture for the communities involved.".to_string(),
        "Unlike previous work in this space, this approach was designed with the end in mind — not just to generate knowledge, but to generate the kind of knowledge that changes behaviour, policy, and practice.".to_string(),
    ];

    let payoff = vec![
        if s.has_geography() {
            format!("If this research achieves what the early evidence suggests is possible, {p}{g} will have access to a proven solution to a problem that has constrained their lives and opportunities for a generation.")
        } else {
            format!("Success here means a measurable, demonstrable improvement in outcomes for {p} — and a template for how evidence-based research can translate into real-world change.")
        },
        "The Payoff is not an academic contribution — it is a changed situation for real people. The research creates the roadmap; investment and commitment make it a reality.".to_string(),
        if signals.policy {
            "For policymakers, the implications are clear: this research removes the 'we need more evidence' barrier. The evidence is in. The question now is whether the political will matches the scientific case.".to_string()
        } else {
            "This is what research impact looks like: a named problem, a tested solution, and communities ready to use it. The missing piece is not more research — it is commitment to act on the research already done.".to_string()
        },
    ];

    PipSuggestions {
        problem,
        inspiration,
        payoff,
    }
}
