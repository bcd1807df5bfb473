//! # Core Form Logic
//!
//! This module contains Lexi's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (form data)    │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • validate() (rules)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │    Web     │      │    API     │
//!     │  Adapter   │      │  Adapter   │      │  (future)  │
//!     │ (ratatui)  │      │  (future)  │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct — all form state in one place
//! - [`action`]: The `Action` enum and `update()` — everything that can happen
//! - [`validate`]: The submission rules applied before classification
//! - [`config`]: Settings with the defaults → file → env → CLI hierarchy

pub mod action;
pub mod config;
pub mod state;
pub mod validate;
