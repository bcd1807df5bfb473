//! # Answer Layer
//!
//! Everything involved in turning a validated query into a [`Response`]:
//! the [`Responder`] trait (the seam where a real backend would plug in),
//! the canned implementation backed by a static knowledge table, and the
//! response/citation data types.

pub mod knowledge;
pub mod responder;
pub mod types;

pub use responder::{CannedResponder, Responder};
pub use types::{Citation, Response};
