//! Persona keyword tables.
//!
//! Static mapping from rubric topic to the trigger phrases whose presence in
//! advisor replies counts as evidence the topic was discussed. One table per
//! persona, defined once at compile time; matching is case-insensitive and
//! phrase order matters only for the repeat-mention fallback in the analyzer.
//! Overlap between the phrase lists of different topics is permitted.

use super::persona::Persona;
use super::topic::Topic;

/// Trigger phrases for the investor advisor.
const SHARK_VC_KEYWORDS: &[(Topic, &[&str])] = &[
    (
        Topic::Team,
        &[
            "founder",
            "team",
            "experience",
            "background",
            "expertise",
            "earned secret",
            "why you",
        ],
    ),
    (
        Topic::Market,
        &[
            "TAM",
            "market size",
            "total addressable",
            "billion",
            "market opportunity",
            "growth rate",
        ],
    ),
    (
        Topic::Problem,
        &[
            "problem",
            "pain point",
            "solution fit",
            "customer need",
            "workflow",
            "broken",
        ],
    ),
    (
        Topic::Traction,
        &[
            "users",
            "revenue",
            "growth",
            "retention",
            "churn",
            "MRR",
            "ARR",
            "customers",
        ],
    ),
    (
        Topic::Economics,
        &[
            "CAC",
            "LTV",
            "unit economics",
            "payback",
            "margin",
            "burn rate",
            "runway",
        ],
    ),
    (
        Topic::Competition,
        &[
            "competitors",
            "competitive advantage",
            "moat",
            "differentiation",
            "barrier",
        ],
    ),
    (
        Topic::Model,
        &[
            "business model",
            "pricing",
            "monetization",
            "subscription",
            "marketplace",
            "SaaS",
        ],
    ),
    (
        Topic::Funding,
        &[
            "use of funds",
            "funding",
            "capital",
            "milestone",
            "budget",
            "hire",
            "spend",
        ],
    ),
    (
        Topic::Exit,
        &[
            "exit",
            "acquisition",
            "IPO",
            "acquirer",
            "strategic buyer",
            "multiple",
        ],
    ),
    (
        Topic::Risks,
        &[
            "risk",
            "challenge",
            "threat",
            "mitigation",
            "what could kill",
            "failure",
        ],
    ),
];

/// Trigger phrases for the product-strategy advisor.
const PRODUCT_PM_KEYWORDS: &[(Topic, &[&str])] = &[
    (
        Topic::Market,
        &[
            "market",
            "TAM",
            "segment",
            "customer base",
            "growth",
            "opportunity",
        ],
    ),
    (
        Topic::Persona,
        &[
            "user persona",
            "JTBD",
            "jobs to be done",
            "customer profile",
            "who is the user",
        ],
    ),
    (
        Topic::Problem,
        &[
            "problem",
            "pain point",
            "hair on fire",
            "urgent",
            "critical",
            "need",
        ],
    ),
    (
        Topic::Solution,
        &[
            "solution",
            "feature",
            "unique",
            "differentiation",
            "10x better",
            "alternative",
        ],
    ),
    (
        Topic::Roadmap,
        &[
            "roadmap",
            "prioritization",
            "RICE",
            "next feature",
            "timeline",
            "milestone",
        ],
    ),
    (
        Topic::Metrics,
        &[
            "metric",
            "KPI",
            "north star",
            "success",
            "measure",
            "analytics",
            "tracking",
        ],
    ),
    (
        Topic::Mvp,
        &[
            "MVP",
            "MLP",
            "minimum viable",
            "minimum lovable",
            "iteration",
            "evolution",
        ],
    ),
    (
        Topic::Narrative,
        &[
            "story",
            "narrative",
            "press release",
            "vision",
            "pitch",
            "messaging",
        ],
    ),
    (
        Topic::Experiments,
        &[
            "experiment",
            "test",
            "hypothesis",
            "learning",
            "validation",
            "A/B test",
        ],
    ),
];

/// Returns the keyword table for a persona.
pub fn keyword_table(persona: Persona) -> &'static [(Topic, &'static [&'static str])] {
    match persona {
        Persona::ProductManager => PRODUCT_PM_KEYWORDS,
        Persona::SharkVc => SHARK_VC_KEYWORDS,
    }
}

/// Returns the topic vocabulary of a persona, in rubric order.
pub fn vocabulary(persona: Persona) -> Vec<Topic> {
    keyword_table(persona)
        .iter()
        .map(|(topic, _)| *topic)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_vocabulary_sizes() {
        assert_eq!(vocabulary(Persona::SharkVc).len(), 10);
        assert_eq!(vocabulary(Persona::ProductManager).len(), 9);
    }

    #[test]
    fn test_no_duplicate_topics_within_a_table() {
        for persona in Persona::ALL {
            let vocab = vocabulary(persona);
            let unique: BTreeSet<Topic> = vocab.iter().copied().collect();
            assert_eq!(vocab.len(), unique.len(), "{persona} table repeats a topic");
        }
    }

    #[test]
    fn test_every_topic_has_phrases() {
        for persona in Persona::ALL {
            for (topic, phrases) in keyword_table(persona) {
                assert!(!phrases.is_empty(), "{topic} has no trigger phrases");
                assert!(phrases.iter().all(|p| !p.trim().is_empty()));
            }
        }
    }

    #[test]
    fn test_shared_identifiers_use_distinct_phrase_lists() {
        // `market` exists in both vocabularies but triggers differently.
        let vc = keyword_table(Persona::SharkVc)
            .iter()
            .find(|(t, _)| *t == Topic::Market)
            .map(|(_, p)| *p)
            .unwrap();
        let pm = keyword_table(Persona::ProductManager)
            .iter()
            .find(|(t, _)| *t == Topic::Market)
            .map(|(_, p)| *p)
            .unwrap();
        assert_ne!(vc, pm);
    }
}
