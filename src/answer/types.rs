use serde::{Deserialize, Serialize};

/// A structured reference backing an answer: a quoted excerpt, the case it
/// comes from, a link to the hosted document, and the paragraph cited.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Citation {
    /// Quoted excerpt from the source document.
    pub text: String,
    /// Case name (e.g. "Dani Devi v. Pritam Singh").
    pub source: String,
    /// URL of the hosted source document.
    pub link: String,
    /// 1-based paragraph number referenced in the source document.
    pub paragraph: u32,
}

/// The outcome of classifying a query: an answer and its supporting
/// citations. The citation list may be empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Response {
    pub answer: String,
    pub citations: Vec<Citation>,
}
