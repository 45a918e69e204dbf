//! Static multi-line text leaf: splash art, status lines, spacers.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;

use super::Size;

/// A non-selectable block of text.
pub struct StaticText {
    lines: Vec<String>,
    style: Style,
    align: Alignment,
    /// Center the block vertically in the allotted rect (splash screens).
    middle: bool,
}

impl StaticText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            lines: text.into().lines().map(str::to_owned).collect(),
            style: Style::default(),
            align: Alignment::Left,
            middle: false,
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    pub fn middle(mut self) -> Self {
        self.middle = true;
        self
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn measure(&self, available: Size) -> Size {
        let rows = (self.lines.len().max(1) as u16).min(available.rows);
        let cols = self
            .lines
            .iter()
            .map(|l| l.chars().count() as u16)
            .max()
            .unwrap_or(0)
            .min(available.cols);
        Size::new(rows, cols)
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let top = if self.middle {
            let content = (self.lines.len() as u16).min(area.height);
            area.y + (area.height - content) / 2
        } else {
            area.y
        };
        for (i, line) in self.lines.iter().enumerate() {
            let y = top + i as u16;
            if y >= area.bottom() {
                break;
            }
            let width = (line.chars().count() as u16).min(area.width);
            let x = match self.align {
                Alignment::Left => area.x,
                Alignment::Center => area.x + (area.width - width) / 2,
                Alignment::Right => area.x + (area.width - width),
            };
            buf.set_stringn(x, y, line, area.width as usize, self.style);
        }
    }
}
