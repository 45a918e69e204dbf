//! # Navigation Container
//!
//! A vertical stack of child widgets that owns a focus index, restricts
//! which keys may move focus across its children, and derives the cursor
//! hint for the focus path passing through it.
//!
//! Key handling is table-driven by a [`NavigationPolicy`] fixed at
//! construction. Swallow/propagate rules apply before the focused child
//! sees the key; move rules apply only after the focused child declined it,
//! so a list can consume Up/Down internally and still hand the key to its
//! parent once its selection hits the edge.

use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};

use super::{router, EventResult, Size, WidgetNode};

/// What a container does with a key it has an entry for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRule {
    /// Move the focus index by this delta (clamped, never wrapping),
    /// landing only on selectable children.
    MoveFocus(isize),
    /// Consume the key with no effect, keeping it from children and
    /// ancestors alike.
    Swallow,
    /// Hand the key straight to the ancestor without offering it to the
    /// focused child.
    Propagate,
}

/// Per-container key table, declared at construction and immutable after.
#[derive(Debug, Clone, Default)]
pub struct NavigationPolicy {
    rules: Vec<(KeyCode, KeyRule)>,
}

impl NavigationPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: KeyCode, rule: KeyRule) -> Self {
        self.rules.push((key, rule));
        self
    }

    /// Standard vertical-stack policy: Up/Down move focus, Tab and
    /// Shift-Tab are swallowed so the terminal's default traversal cannot
    /// bypass the container's own navigation.
    pub fn vertical() -> Self {
        Self::new()
            .with(KeyCode::Up, KeyRule::MoveFocus(-1))
            .with(KeyCode::Down, KeyRule::MoveFocus(1))
            .with(KeyCode::Tab, KeyRule::Swallow)
            .with(KeyCode::BackTab, KeyRule::Swallow)
    }

    pub fn rule(&self, key: KeyCode) -> Option<KeyRule> {
        self.rules
            .iter()
            .find(|(code, _)| *code == key)
            .map(|(_, rule)| *rule)
    }
}

/// A vertical stack of children with an owned focus index.
pub struct NavigationContainer {
    pub(crate) children: Vec<WidgetNode>,
    pub(crate) focus: usize,
    policy: NavigationPolicy,
    /// When set, the container advertises all available rows instead of the
    /// sum of its children, so an enclosing frame stretches around it.
    fill: bool,
    /// Rect of the last render, used to resolve pointer hits.
    pub(crate) last_area: Rect,
}

impl NavigationContainer {
    pub fn new(children: Vec<WidgetNode>, policy: NavigationPolicy) -> Self {
        let focus = first_selectable(&children).unwrap_or(0);
        Self {
            children,
            focus,
            policy,
            fill: false,
            last_area: Rect::default(),
        }
    }

    /// Advertise all available rows when measured.
    pub fn fill(mut self) -> Self {
        self.fill = true;
        self
    }

    pub fn children(&self) -> &[WidgetNode] {
        &self.children
    }

    pub fn child_mut(&mut self, index: usize) -> Option<&mut WidgetNode> {
        self.children.get_mut(index)
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Move focus to `index` if that child exists and is selectable.
    pub fn set_focus(&mut self, index: usize) {
        if self
            .children
            .get(index)
            .is_some_and(|child| child.is_selectable())
        {
            self.focus = index;
        }
    }

    /// Swap in a new child list wholesale.
    ///
    /// The focus index is re-anchored to the first selectable child of the
    /// new list, so it can never dangle past the end after a shrink.
    pub fn replace_children(&mut self, children: Vec<WidgetNode>) {
        self.children = children;
        self.focus = first_selectable(&self.children).unwrap_or(0);
    }

    pub fn is_selectable(&self) -> bool {
        self.children.iter().any(|child| child.is_selectable())
    }

    pub fn measure(&self, available: Size) -> Size {
        if self.fill {
            return available;
        }
        let mut rows: u16 = 0;
        let mut cols: u16 = 0;
        for child in &self.children {
            let remaining = Size::new(available.rows.saturating_sub(rows), available.cols);
            if remaining.rows == 0 {
                break;
            }
            let size = child.measure(remaining);
            rows += size.rows;
            cols = cols.max(size.cols);
        }
        Size::new(rows, cols)
    }

    /// Render children top to bottom, each into the rows it measured.
    ///
    /// The returned cursor hint comes from the focused child alone, and
    /// only when this container itself lies on the focus path; an
    /// unfocused branch never owns the visible caret.
    pub fn render(&mut self, area: Rect, buf: &mut Buffer, focused: bool) -> Option<Position> {
        self.last_area = area;
        let mut cursor = None;
        let mut y = area.top();
        let focus = self.focus;
        for (i, child) in self.children.iter_mut().enumerate() {
            let remaining = area.bottom().saturating_sub(y);
            if remaining == 0 {
                break;
            }
            let rows = child
                .measure(Size::new(remaining, area.width))
                .rows
                .min(remaining);
            let child_area = Rect::new(area.x, y, area.width, rows);
            let child_focused = focused && i == focus;
            let hint = child.render(child_area, buf, child_focused);
            if child_focused {
                cursor = hint;
            }
            y += rows;
        }
        cursor
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        match self.policy.rule(key.code) {
            Some(KeyRule::Swallow) => EventResult::Consumed,
            Some(KeyRule::Propagate) => EventResult::Ignored,
            rule => {
                let child_result = match self.children.get_mut(self.focus) {
                    Some(child) => child.handle_key(key),
                    None => EventResult::Ignored,
                };
                match child_result {
                    EventResult::Ignored => match rule {
                        Some(KeyRule::MoveFocus(delta)) => {
                            if self.move_focus(delta) {
                                EventResult::Consumed
                            } else {
                                // Already clamped at the edge; let the
                                // ancestor take over.
                                EventResult::Ignored
                            }
                        }
                        _ => EventResult::Ignored,
                    },
                    other => other,
                }
            }
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> EventResult {
        router::route_press(self, mouse)
    }

    /// Step the focus toward `delta`, landing only on selectable children
    /// and clamping at the ends. Returns whether the index changed.
    fn move_focus(&mut self, delta: isize) -> bool {
        if self.children.is_empty() {
            return false;
        }
        let mut index = self.focus;
        let steps = delta.unsigned_abs();
        let mut moved = false;
        for _ in 0..steps {
            let next = if delta < 0 {
                next_selectable_before(&self.children, index)
            } else {
                next_selectable_after(&self.children, index)
            };
            match next {
                Some(i) => {
                    index = i;
                    moved = true;
                }
                None => break,
            }
        }
        if moved {
            self.focus = index;
        }
        moved
    }
}

fn first_selectable(children: &[WidgetNode]) -> Option<usize> {
    children.iter().position(|child| child.is_selectable())
}

fn next_selectable_after(children: &[WidgetNode], from: usize) -> Option<usize> {
    children
        .iter()
        .enumerate()
        .skip(from + 1)
        .find(|(_, child)| child.is_selectable())
        .map(|(i, _)| i)
}

fn next_selectable_before(children: &[WidgetNode], from: usize) -> Option<usize> {
    children
        .iter()
        .enumerate()
        .take(from)
        .rev()
        .find(|(_, child)| child.is_selectable())
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_lookup_returns_the_declared_rule() {
        let policy = NavigationPolicy::vertical().with(KeyCode::PageUp, KeyRule::Swallow);
        assert_eq!(policy.rule(KeyCode::Up), Some(KeyRule::MoveFocus(-1)));
        assert_eq!(policy.rule(KeyCode::Tab), Some(KeyRule::Swallow));
        assert_eq!(policy.rule(KeyCode::PageUp), Some(KeyRule::Swallow));
        assert_eq!(policy.rule(KeyCode::Enter), None);
    }
}
