//! # Bordered Frame
//!
//! A rectangular border around a child widget, with an optional label
//! spliced into the top border immediately after the top-left corner.
//!
//! The frame is drawn as three bands:
//!
//! ```text
//! ┌Search──────────┐   top band: corner + label + fill + corner
//! │  child area    │   middle band: side glyphs + child
//! └────────────────┘   bottom band: corner + fill + corner
//! ```
//!
//! The middle band always uses the frame's own side glyphs, so wrapping an
//! already-framed widget never produces doubled borders. The frame paints
//! exactly the rect it is given; when the rect cannot hold a border pair it
//! degrades (label first, then fill) rather than drawing a lone corner.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;

use super::{EventResult, Size, WidgetNode};

/// The eight glyphs making up a frame border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderGlyphs {
    pub top_left: char,
    pub top: char,
    pub top_right: char,
    pub left: char,
    pub right: char,
    pub bottom_left: char,
    pub bottom: char,
    pub bottom_right: char,
}

impl BorderGlyphs {
    /// Single light lines.
    pub const LIGHT: Self = Self {
        top_left: '┌',
        top: '─',
        top_right: '┐',
        left: '│',
        right: '│',
        bottom_left: '└',
        bottom: '─',
        bottom_right: '┘',
    };

    /// Heavy lines, used to set the results box apart from the search box.
    pub const HEAVY: Self = Self {
        top_left: '┏',
        top: '━',
        top_right: '┓',
        left: '┃',
        right: '┃',
        bottom_left: '┗',
        bottom: '━',
        bottom_right: '┛',
    };
}

impl Default for BorderGlyphs {
    fn default() -> Self {
        Self::LIGHT
    }
}

/// A border around a single child, with an optional inline label.
pub struct BorderedFrame {
    child: Box<WidgetNode>,
    label: String,
    glyphs: BorderGlyphs,
    border_style: Style,
    label_style: Style,
}

impl BorderedFrame {
    pub fn new(child: WidgetNode) -> Self {
        Self {
            child: Box::new(child),
            label: String::new(),
            glyphs: BorderGlyphs::LIGHT,
            border_style: Style::default(),
            label_style: Style::default(),
        }
    }

    /// Label spliced into the top border, right after the top-left corner.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn glyphs(mut self, glyphs: BorderGlyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    pub fn label_style(mut self, style: Style) -> Self {
        self.label_style = style;
        self
    }

    pub fn child(&self) -> &WidgetNode {
        &self.child
    }

    pub fn child_mut(&mut self) -> &mut WidgetNode {
        &mut self.child
    }

    pub fn is_selectable(&self) -> bool {
        self.child.is_selectable()
    }

    /// The child's measured size plus one border cell on each edge.
    pub fn measure(&self, available: Size) -> Size {
        let inner = Size::new(
            available.rows.saturating_sub(2),
            available.cols.saturating_sub(2),
        );
        let child = self.child.measure(inner);
        Size::new(
            child.rows.saturating_add(2).min(available.rows),
            child.cols.saturating_add(2).min(available.cols),
        )
    }

    pub fn render(&mut self, area: Rect, buf: &mut Buffer, focused: bool) -> Option<Position> {
        if area.width < 2 || area.height < 2 {
            // Too small for a corner pair: collapse to fill lines. Corners
            // always appear in pairs or not at all.
            let fill = self.glyphs.top.to_string();
            for y in area.top()..area.bottom() {
                for x in area.left()..area.right() {
                    buf.set_string(x, y, &fill, self.border_style);
                }
            }
            return None;
        }

        self.render_top_band(area, buf);

        // Middle band: the frame's own side glyphs on every row, child inside.
        let side = self.glyphs.left.to_string();
        let right_side = self.glyphs.right.to_string();
        for y in area.top() + 1..area.bottom() - 1 {
            buf.set_string(area.left(), y, &side, self.border_style);
            buf.set_string(area.right() - 1, y, &right_side, self.border_style);
        }

        self.render_bottom_band(area, buf);

        let inner = Rect::new(
            area.x + 1,
            area.y + 1,
            area.width - 2,
            area.height - 2,
        );
        self.child.render(inner, buf, focused)
    }

    fn render_top_band(&self, area: Rect, buf: &mut Buffer) {
        let y = area.top();
        buf.set_string(area.left(), y, self.glyphs.top_left.to_string(), self.border_style);

        // The label may use at most the columns between the two corners; it
        // is clipped before the fill so the right corner always fits.
        let interior = (area.width - 2) as usize;
        let label: String = self.label.chars().take(interior).collect();
        let label_len = label.chars().count() as u16;
        if label_len > 0 {
            buf.set_string(area.left() + 1, y, &label, self.label_style);
        }

        let fill = self.glyphs.top.to_string();
        for x in area.left() + 1 + label_len..area.right() - 1 {
            buf.set_string(x, y, &fill, self.border_style);
        }

        buf.set_string(
            area.right() - 1,
            y,
            self.glyphs.top_right.to_string(),
            self.border_style,
        );
    }

    fn render_bottom_band(&self, area: Rect, buf: &mut Buffer) {
        let y = area.bottom() - 1;
        buf.set_string(
            area.left(),
            y,
            self.glyphs.bottom_left.to_string(),
            self.border_style,
        );
        let fill = self.glyphs.bottom.to_string();
        for x in area.left() + 1..area.right() - 1 {
            buf.set_string(x, y, &fill, self.border_style);
        }
        buf.set_string(
            area.right() - 1,
            y,
            self.glyphs.bottom_right.to_string(),
            self.border_style,
        );
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        self.child.handle_key(key)
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> EventResult {
        self.child.handle_mouse(mouse)
    }
}
