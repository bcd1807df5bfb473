//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! Two patterns, as in any component tree:
//!
//! - **Stateless** (props-based): `TitleBar`, `ErrorBanner`, `Landing`,
//!   created fresh each frame from application state.
//! - **Stateful** (event-driven): `InputBox` owns the text buffer and
//!   cursor; `AnswerPanel` pairs a transient per-frame component with an
//!   `AnswerPanelState` holding scroll position, selection, and cached
//!   layout spans for hit testing.
//!
//! Each component file contains its state types, event types, rendering
//! logic, and tests, so one file tells the whole story of one component.

pub mod answer_panel;
pub mod error_banner;
pub mod input_box;
pub mod landing;
pub mod title_bar;

pub use answer_panel::{AnswerPanel, AnswerPanelState};
pub use error_banner::ErrorBanner;
pub use input_box::{InputBox, InputEvent};
pub use landing::Landing;
pub use title_bar::TitleBar;
