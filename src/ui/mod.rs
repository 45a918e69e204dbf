//! # UI Module
//!
//! The state machine and frame composition for the application.
//!
//! ## Components
//!
//! - [`App`] - phase state machine owning the widget tree of the current
//!   screen
//! - [`mod@render`] - top-level frame composition (body tree + footer +
//!   cursor placement)
//! - [`mod@theme`] - the static color palette
//!
//! ## Layout
//!
//! ```text
//! splash:                      interactive:
//! ┌─────────────────────┐      ┌Search:──────────────────┐
//! │                     │      │ ⌕ query▌                │
//! │     ██ banner ██    │      └─────────────────────────┘
//! │                     │      ┏Results━━━━━━━━━━━━━━━━━━┓
//! │                     │      ┃ -> First result         ┃
//! │                     │      ┃    Second result        ┃
//! └─────────────────────┘      ┗━━━━━━━━━━━━━━━━━━━━━━━━━┛
//!                               q/esc: Quit  ↑/↓: Navigate
//! ```

pub mod app;
pub mod render;
pub mod theme;

pub use app::App;
pub use render::render;
