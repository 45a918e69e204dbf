//! # Focusable Item
//!
//! A selectable single-line control. Two kinds exist: a plain activatable
//! row (menu entry or result row) and a single-line text input.
//!
//! The rendered prefix of a row (`"   "` unfocused, `"-> "` focused) is
//! recomputed from the `focused` flag on every render call; nothing is
//! cached between renders, so the presentation can never desync from the
//! actual focus. The cursor hint works the same way: a row never wants the
//! terminal cursor, an input wants it at its caret column exactly when the
//! render call says the input is focused.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;

use super::{Command, EventResult, Size};

const PREFIX_UNFOCUSED: &str = "   ";
const PREFIX_FOCUSED: &str = "-> ";

/// Semantic styling tag for an item; the palette maps tags to styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleTag {
    Normal,
    Dim,
}

/// The display and behavior unit for one selectable line.
///
/// Records are materialized when a result set or static menu is built and
/// replaced wholesale when the list is rebuilt; an individual record is
/// never mutated once rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRecord {
    pub label: String,
    pub tag: StyleTag,
    pub selectable: bool,
    pub action: Option<Command>,
}

impl ItemRecord {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            tag: StyleTag::Normal,
            selectable: true,
            action: None,
        }
    }

    pub fn tag(mut self, tag: StyleTag) -> Self {
        self.tag = tag;
        self
    }

    pub fn action(mut self, action: Command) -> Self {
        self.action = Some(action);
        self
    }
}

enum ItemKind {
    /// A plain row activated with Enter or a click.
    Row,
    /// A single-line text editor with a caret.
    Input { buffer: String, caret: usize },
}

/// A selectable single-line control.
pub struct FocusableItem {
    record: ItemRecord,
    kind: ItemKind,
    style: Style,
    focus_style: Style,
}

impl FocusableItem {
    /// A plain activatable row.
    pub fn row(record: ItemRecord) -> Self {
        Self {
            record,
            kind: ItemKind::Row,
            style: Style::default(),
            focus_style: Style::default(),
        }
    }

    /// A text input; the record label is the caption drawn before the text.
    pub fn input(caption: impl Into<String>) -> Self {
        Self {
            record: ItemRecord::new(caption),
            kind: ItemKind::Input {
                buffer: String::new(),
                caret: 0,
            },
            style: Style::default(),
            focus_style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn focus_style(mut self, style: Style) -> Self {
        self.focus_style = style;
        self
    }

    pub fn record(&self) -> &ItemRecord {
        &self.record
    }

    pub fn is_selectable(&self) -> bool {
        self.record.selectable
    }

    pub fn is_input(&self) -> bool {
        matches!(self.kind, ItemKind::Input { .. })
    }

    /// Current contents of an input item; empty for rows.
    pub fn text(&self) -> &str {
        match &self.kind {
            ItemKind::Input { buffer, .. } => buffer,
            ItemKind::Row => "",
        }
    }

    pub fn measure(&self, available: Size) -> Size {
        let label_len = self.record.label.chars().count();
        let cols = match &self.kind {
            ItemKind::Row => PREFIX_UNFOCUSED.len() + label_len,
            // Caption, text, and one trailing cell for the caret.
            ItemKind::Input { buffer, .. } => label_len + buffer.chars().count() + 1,
        };
        Size::new(1.min(available.rows), (cols as u16).min(available.cols))
    }

    pub fn render(&mut self, area: Rect, buf: &mut Buffer, focused: bool) -> Option<Position> {
        match &self.kind {
            ItemKind::Row => {
                let style = if focused { self.focus_style } else { self.style };
                buf.set_style(Rect::new(area.x, area.y, area.width, 1), style);
                let prefix = if focused { PREFIX_FOCUSED } else { PREFIX_UNFOCUSED };
                let line = format!("{prefix}{}", self.record.label);
                buf.set_stringn(area.x, area.y, line, area.width as usize, style);
                None
            }
            ItemKind::Input { buffer, caret } => {
                let line = format!("{}{}", self.record.label, buffer);
                buf.set_stringn(area.x, area.y, line, area.width as usize, self.style);
                if focused {
                    let caption_len = self.record.label.chars().count();
                    let col = (caption_len + caret) as u16;
                    Some(Position::new(
                        (area.x + col).min(area.right().saturating_sub(1)),
                        area.y,
                    ))
                } else {
                    None
                }
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if key.code == KeyCode::Enter {
            return self.activate();
        }
        match &mut self.kind {
            ItemKind::Row => EventResult::Ignored,
            ItemKind::Input { buffer, caret } => match key.code {
                KeyCode::Char(c) => {
                    let at = byte_offset(buffer, *caret);
                    buffer.insert(at, c);
                    *caret += 1;
                    EventResult::Consumed
                }
                KeyCode::Backspace => {
                    if *caret > 0 {
                        *caret -= 1;
                        let at = byte_offset(buffer, *caret);
                        buffer.remove(at);
                    }
                    EventResult::Consumed
                }
                KeyCode::Delete => {
                    if *caret < buffer.chars().count() {
                        let at = byte_offset(buffer, *caret);
                        buffer.remove(at);
                    }
                    EventResult::Consumed
                }
                KeyCode::Left => {
                    *caret = caret.saturating_sub(1);
                    EventResult::Consumed
                }
                KeyCode::Right => {
                    *caret = (*caret + 1).min(buffer.chars().count());
                    EventResult::Consumed
                }
                KeyCode::Home => {
                    *caret = 0;
                    EventResult::Consumed
                }
                KeyCode::End => {
                    *caret = buffer.chars().count();
                    EventResult::Consumed
                }
                _ => EventResult::Ignored,
            },
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> EventResult {
        match mouse.kind {
            // A press on a row activates it; on an input it just re-asserts
            // focus (the owning container has already moved focus here).
            MouseEventKind::Down(MouseButton::Left) => match self.kind {
                ItemKind::Row => self.activate(),
                ItemKind::Input { .. } => EventResult::Consumed,
            },
            _ => EventResult::Ignored,
        }
    }

    fn activate(&mut self) -> EventResult {
        match &self.kind {
            ItemKind::Row => match &self.record.action {
                Some(command) => EventResult::Command(command.clone()),
                None => EventResult::Consumed,
            },
            ItemKind::Input { buffer, .. } => {
                EventResult::Command(Command::Submit(buffer.clone()))
            }
        }
    }
}

/// Byte offset of the `caret`-th character.
fn byte_offset(s: &str, caret: usize) -> usize {
    s.char_indices()
        .nth(caret)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}
