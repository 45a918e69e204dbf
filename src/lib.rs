//! Marquee - a splash-screen + searchable-menu terminal application
//!
//! This library provides the widget layer (frames, focusable items,
//! navigation containers, pointer routing), the splash/search state
//! machine, and the search and title-art collaborators behind it.

pub mod banner;
pub mod search;
pub mod ui;
pub mod widget;
