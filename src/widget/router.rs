//! # Pointer Focus Routing
//!
//! Resolves which child of a container a primary-button press lands on and
//! moves the container's focus there before forwarding the event into the
//! child. Hit-testing walks the children in render order, accumulating the
//! rows each child occupies as measured against the container's last
//! rendered rect, until the running total passes the click row.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::{container::NavigationContainer, EventResult, Size, WidgetNode};

/// Index of the child occupying `row` (relative to the top of the
/// container), measured against `extent`. `None` when the row falls past
/// the last child.
pub fn child_at_row(children: &[WidgetNode], extent: Size, row: u16) -> Option<usize> {
    let mut top: u16 = 0;
    for (i, child) in children.iter().enumerate() {
        let remaining = extent.rows.saturating_sub(top);
        if remaining == 0 {
            break;
        }
        let rows = child
            .measure(Size::new(remaining, extent.cols))
            .rows
            .min(remaining);
        if row < top + rows {
            return Some(i);
        }
        top += rows;
    }
    None
}

/// Handle a mouse event on behalf of a container.
///
/// Only a primary-button press is acted on; everything else propagates
/// unchanged. A press inside a selectable child moves focus there (a press
/// on the already-focused child re-asserts it) and is forwarded into the
/// child so nested containers can route further. A press past the extent
/// of the children, or on a non-selectable child, changes nothing and
/// propagates.
pub fn route_press(container: &mut NavigationContainer, mouse: MouseEvent) -> EventResult {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return EventResult::Ignored;
    }
    let area = container.last_area;
    if !area.contains(ratatui::layout::Position::new(mouse.column, mouse.row)) {
        return EventResult::Ignored;
    }
    let row = mouse.row - area.y;
    let Some(index) = child_at_row(&container.children, Size::of(area), row) else {
        return EventResult::Ignored;
    };
    if !container.children[index].is_selectable() {
        return EventResult::Ignored;
    }
    container.focus = index;
    match container.children[index].handle_mouse(mouse) {
        // The routing itself consumed the press even if the child had no
        // further use for it.
        EventResult::Ignored => EventResult::Consumed,
        other => other,
    }
}
