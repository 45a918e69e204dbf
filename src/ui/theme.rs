//! # Theme
//!
//! The static color palette. Rendering code never hardcodes
//! `ratatui::style::Color` values; it asks the theme for the style of a
//! semantic role. The palette is a startup constant: picked once from the
//! CLI, never changed at runtime and never persisted.

use ratatui::style::{Color, Modifier, Style};

use crate::widget::StyleTag;

/// All colors used by the UI, grouped by semantic role.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Human-readable name, matched by the `--theme` flag.
    pub name: &'static str,

    /// Splash banner text.
    pub splash: Color,
    /// Labels spliced into frame borders.
    pub label: Color,
    /// Frame border lines.
    pub border: Color,
    /// Primary text (menu rows, input text).
    pub text: Color,
    /// Muted text (status line, footer hints).
    pub dim: Color,
    /// A focused menu row.
    pub focus: Color,
}

impl Theme {
    /// Return the list of built-in themes (order = `--theme` help order).
    pub fn all() -> &'static [Theme] {
        &BUILT_IN_THEMES
    }

    /// Find a built-in theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<&'static Theme> {
        BUILT_IN_THEMES
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    pub fn default_theme() -> &'static Theme {
        &BUILT_IN_THEMES[0]
    }

    /// Style for an item's semantic tag.
    pub fn style_for(&self, tag: StyleTag) -> Style {
        match tag {
            StyleTag::Normal => Style::default().fg(self.text),
            StyleTag::Dim => Style::default().fg(self.dim),
        }
    }

    pub fn focus_style(&self) -> Style {
        Style::default().fg(self.focus).add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn label_style(&self) -> Style {
        Style::default().fg(self.label)
    }

    pub fn splash_style(&self) -> Style {
        Style::default().fg(self.splash)
    }

    pub fn footer_style(&self) -> Style {
        Style::default().fg(self.dim)
    }
}

static BUILT_IN_THEMES: [Theme; 2] = [
    // 0 - Classic (default)
    Theme {
        name: "Classic",
        splash: Color::LightCyan,
        label: Color::Red,
        border: Color::Gray,
        text: Color::Reset,
        dim: Color::DarkGray,
        focus: Color::Magenta,
    },
    // 1 - Mono, for terminals where color is unwelcome
    Theme {
        name: "Mono",
        splash: Color::White,
        label: Color::White,
        border: Color::Gray,
        text: Color::Reset,
        dim: Color::DarkGray,
        focus: Color::White,
    },
];
