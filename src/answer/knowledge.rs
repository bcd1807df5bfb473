//! # Knowledge Table
//!
//! The static lookup table behind the canned responder. Each entry pairs a
//! set of trigger substrings with a fixed answer and its citations; queries
//! matching no entry fall through to [`FALLBACK_ANSWER`].
//!
//! Keeping this as data rather than inline conditionals makes the
//! no-real-backend boundary explicit: a retrieval service would replace
//! [`classify`], and nothing upstream would notice.

use crate::answer::types::{Citation, Response};

/// A single entry in the knowledge table.
struct KnowledgeEntry {
    /// Lowercase substrings that activate this entry.
    triggers: &'static [&'static str],
    answer: &'static str,
    citations: &'static [CitationRecord],
}

/// Static citation data; converted to an owned [`Citation`] on lookup.
struct CitationRecord {
    text: &'static str,
    source: &'static str,
    link: &'static str,
    paragraph: u32,
}

const SECTION_166_ANSWER: &str = "Yes, under Section 166 of the Motor Vehicles Act, 1988, \
the claimants are entitled to an addition for future prospects even when the deceased \
was self-employed and aged 54–55 years at the time of the accident. In Dani Devi v. \
Pritam Singh, the Court held that 10% of the deceased's annual income should be added \
as future prospects.";

const DANI_DEVI_EXCERPT: &str = "as the age of the deceased at the time of accident \
was held to be about 54-55 years by the learned Tribunal, being self-employed, \
as such, 10% of annual income should have been awarded on account of future prospects.";

const DANI_DEVI_LINK: &str = "https://lexisingapore-my.sharepoint.com/personal/harshit_lexi_sg/_layouts/15/onedrive.aspx?id=%2Fpersonal%2Fharshit%5Flexi%5Fsg%2FDocuments%2Fcases%2FDani%20Vs%20Pritam%20%28Future%2010%20at%20age%2054%2D55%29%2Epdf&parent=%2Fpersonal%2Fharshit%5Flexi%5Fsg%2FDocuments%2Fcases&ga=1";

/// Answer returned when no table entry matches the query.
pub const FALLBACK_ANSWER: &str = "This doesn't appear to be a valid legal question \
about motor accident claims. Please ask about Section 166 of the Motor Vehicles Act, 1988.";

/// The table itself. One entry today; adding a case means adding a row.
const KNOWLEDGE_TABLE: &[KnowledgeEntry] = &[KnowledgeEntry {
    triggers: &["motor vehicles act", "section 166", "accident claim"],
    answer: SECTION_166_ANSWER,
    citations: &[CitationRecord {
        text: DANI_DEVI_EXCERPT,
        source: "Dani Devi v. Pritam Singh",
        link: DANI_DEVI_LINK,
        paragraph: 7,
    }],
}];

/// Classify a validated query against the knowledge table.
///
/// Matching is case-insensitive substring containment; the first entry with
/// any matching trigger wins. Pure and synchronous; the simulated latency
/// lives in the responder, not here.
pub fn classify(query: &str) -> Response {
    let lowered = query.to_lowercase();

    for entry in KNOWLEDGE_TABLE {
        if entry.triggers.iter().any(|t| lowered.contains(t)) {
            return Response {
                answer: entry.answer.to_string(),
                citations: entry
                    .citations
                    .iter()
                    .map(|c| Citation {
                        text: c.text.to_string(),
                        source: c.source.to_string(),
                        link: c.link.to_string(),
                        paragraph: c.paragraph,
                    })
                    .collect(),
            };
        }
    }

    Response {
        answer: FALLBACK_ANSWER.to_string(),
        citations: vec![],
    }
}
