//! # Widget Layer
//!
//! A small retained widget tree for composing the screens of the
//! application. Every node in the tree is a [`WidgetNode`] variant and
//! exposes the same capability set:
//!
//! - `measure` - report the size the node wants within an available size
//! - `render` - paint the node into its allotted rect of a buffer and
//!   return the cursor position the node wants, if any
//! - `handle_key` / `handle_mouse` - consume an event or let it bubble
//!
//! Rendering flows top-down: a parent asks each child to measure, then
//! renders it into a rect no larger than what the child advertised. Input
//! flows bottom-up: events are offered along the focus path first and
//! unconsumed events bubble back toward the root.
//!
//! The terminal cursor is never toggled as a side effect. Each render pass
//! returns `Option<Position>` from the root: `Some` exactly when the focus
//! path terminates at a focused text-input leaf.

pub mod container;
pub mod frame;
pub mod item;
pub mod router;
pub mod text;

pub use container::{KeyRule, NavigationContainer, NavigationPolicy};
pub use frame::{BorderGlyphs, BorderedFrame};
pub use item::{FocusableItem, ItemRecord, StyleTag};
pub use text::StaticText;

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};

/// A measured extent in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub rows: u16,
    pub cols: u16,
}

impl Size {
    pub fn new(rows: u16, cols: u16) -> Self {
        Self { rows, cols }
    }

    /// The size of a rect, ignoring its position.
    pub fn of(area: Rect) -> Self {
        Self {
            rows: area.height,
            cols: area.width,
        }
    }
}

/// Activation messages bubbling from leaves to the application.
///
/// Items carry their command at construction time; activating an item
/// yields the bound command unchanged, so a result row built from the
/// title "Alpha" always reports `Choose("Alpha")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// The text input was submitted with its current contents.
    Submit(String),
    /// A menu row was activated.
    Choose(String),
}

/// Outcome of offering an event to a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// The event was handled; stop bubbling.
    Consumed,
    /// The node did not use the event; offer it to the next ancestor.
    Ignored,
    /// The event activated something; the command bubbles to the app.
    Command(Command),
}

impl EventResult {
    pub fn is_consumed(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}

/// A node in the widget tree.
///
/// A closed set of variants rather than trait objects: dispatch happens in
/// the match below, and screens are built from exactly these four shapes.
pub enum WidgetNode {
    Frame(BorderedFrame),
    Container(NavigationContainer),
    Item(FocusableItem),
    Leaf(StaticText),
}

impl WidgetNode {
    /// The size this node wants within `available`, computed bottom-up.
    pub fn measure(&self, available: Size) -> Size {
        match self {
            WidgetNode::Frame(frame) => frame.measure(available),
            WidgetNode::Container(container) => container.measure(available),
            WidgetNode::Item(item) => item.measure(available),
            WidgetNode::Leaf(text) => text.measure(available),
        }
    }

    /// Paint the node into `area` and return the cursor position it wants.
    ///
    /// `focused` marks whether this node lies on the focus path from the
    /// root. Only a focused text input ever returns `Some`.
    pub fn render(&mut self, area: Rect, buf: &mut Buffer, focused: bool) -> Option<Position> {
        if area.width == 0 || area.height == 0 {
            return None;
        }
        match self {
            WidgetNode::Frame(frame) => frame.render(area, buf, focused),
            WidgetNode::Container(container) => container.render(area, buf, focused),
            WidgetNode::Item(item) => item.render(area, buf, focused),
            WidgetNode::Leaf(text) => {
                text.render(area, buf);
                None
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        match self {
            WidgetNode::Frame(frame) => frame.handle_key(key),
            WidgetNode::Container(container) => container.handle_key(key),
            WidgetNode::Item(item) => item.handle_key(key),
            WidgetNode::Leaf(_) => EventResult::Ignored,
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> EventResult {
        match self {
            WidgetNode::Frame(frame) => frame.handle_mouse(mouse),
            WidgetNode::Container(container) => container.handle_mouse(mouse),
            WidgetNode::Item(item) => item.handle_mouse(mouse),
            WidgetNode::Leaf(_) => EventResult::Ignored,
        }
    }

    /// Whether focus may rest on this node.
    pub fn is_selectable(&self) -> bool {
        match self {
            WidgetNode::Frame(frame) => frame.is_selectable(),
            WidgetNode::Container(container) => container.is_selectable(),
            WidgetNode::Item(item) => item.is_selectable(),
            WidgetNode::Leaf(_) => false,
        }
    }
}
