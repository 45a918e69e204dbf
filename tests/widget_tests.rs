//! Widget rendering tests
//!
//! Tests for the bordered frame's band structure, label splicing and
//! degradation, and for composition of nested frames.

use marquee::widget::{
    BorderGlyphs, BorderedFrame, FocusableItem, ItemRecord, NavigationContainer,
    NavigationPolicy, Size, StaticText, WidgetNode,
};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

/// Helper to read a buffer row back as a string
fn row_text(buf: &Buffer, y: u16) -> String {
    let area = *buf.area();
    (area.left()..area.right())
        .map(|x| buf.cell((x, y)).map(|c| c.symbol()).unwrap_or(" "))
        .collect()
}

fn render_into(node: &mut WidgetNode, rows: u16, cols: u16) -> Buffer {
    let area = Rect::new(0, 0, cols, rows);
    let mut buf = Buffer::empty(area);
    node.render(area, &mut buf, false);
    buf
}

fn leaf(text: &str) -> WidgetNode {
    WidgetNode::Leaf(StaticText::new(text))
}

fn framed(child: WidgetNode) -> WidgetNode {
    WidgetNode::Frame(BorderedFrame::new(child))
}

#[test]
fn test_frame_fills_its_rect_exactly() {
    for (rows, cols) in [(2u16, 2u16), (3, 8), (5, 20), (10, 4)] {
        let mut frame = framed(leaf("x"));
        let buf = render_into(&mut frame, rows, cols);

        let top = row_text(&buf, 0);
        let bottom = row_text(&buf, rows - 1);
        assert_eq!(top.chars().count(), cols as usize, "{rows}x{cols} top row");
        assert!(top.starts_with('┌') && top.ends_with('┐'), "top: {top:?}");
        assert!(bottom.starts_with('└') && bottom.ends_with('┘'), "bottom: {bottom:?}");
        for y in 1..rows - 1 {
            let row = row_text(&buf, y);
            assert!(row.starts_with('│') && row.ends_with('│'), "row {y}: {row:?}");
        }
    }
}

#[test]
fn test_label_splices_after_the_top_left_corner() {
    let mut frame = WidgetNode::Frame(BorderedFrame::new(leaf("x")).label("Search:"));
    let buf = render_into(&mut frame, 3, 14);
    assert_eq!(row_text(&buf, 0), "┌Search:─────┐");
}

#[test]
fn test_long_label_is_clipped_so_the_corner_survives() {
    let mut frame = WidgetNode::Frame(BorderedFrame::new(leaf("x")).label("a label far too long"));
    let buf = render_into(&mut frame, 3, 10);
    let top = row_text(&buf, 0);
    assert_eq!(top, "┌a label ┐");
    assert_eq!(top.chars().count(), 10);
}

#[test]
fn test_label_exactly_filling_the_interior() {
    let mut frame = WidgetNode::Frame(BorderedFrame::new(leaf("x")).label("ab"));
    let buf = render_into(&mut frame, 3, 4);
    assert_eq!(row_text(&buf, 0), "┌ab┐");
}

#[test]
fn test_nested_frames_keep_single_borders() {
    let inner = BorderedFrame::new(leaf("x")).glyphs(BorderGlyphs::HEAVY);
    let mut outer = WidgetNode::Frame(BorderedFrame::new(WidgetNode::Frame(inner)));
    let buf = render_into(&mut outer, 5, 8);

    // Outer band uses the outer frame's glyphs...
    assert_eq!(row_text(&buf, 0), "┌──────┐");
    // ...and the inner frame draws its own border one cell in, heavy.
    assert_eq!(row_text(&buf, 1), "│┏━━━━┓│");
    assert_eq!(row_text(&buf, 3), "│┗━━━━┛│");
    assert_eq!(row_text(&buf, 4), "└──────┘");
}

#[test]
fn test_single_row_collapses_to_a_fill_line() {
    let mut frame = WidgetNode::Frame(BorderedFrame::new(leaf("x")).label("hi"));
    let buf = render_into(&mut frame, 1, 6);
    // No lone corners and no label on a degenerate frame.
    assert_eq!(row_text(&buf, 0), "──────");
}

#[test]
fn test_frame_measure_wraps_the_child() {
    let frame = BorderedFrame::new(leaf("hello"));
    assert_eq!(frame.measure(Size::new(10, 20)), Size::new(3, 7));
    // Never more than what is available.
    assert_eq!(frame.measure(Size::new(2, 4)), Size::new(2, 4));
}

#[test]
fn test_container_stacks_children_by_measured_rows() {
    let items: Vec<WidgetNode> = ["one", "two", "three"]
        .into_iter()
        .map(|label| WidgetNode::Item(FocusableItem::row(ItemRecord::new(label))))
        .collect();
    let mut container = WidgetNode::Container(NavigationContainer::new(
        items,
        NavigationPolicy::vertical(),
    ));
    let buf = render_into(&mut container, 5, 12);

    assert!(row_text(&buf, 0).starts_with("   one"));
    assert!(row_text(&buf, 1).starts_with("   two"));
    assert!(row_text(&buf, 2).starts_with("   three"));
    assert_eq!(row_text(&buf, 3).trim(), "");
}

#[test]
fn test_static_text_centers_in_its_rect() {
    let mut text = WidgetNode::Leaf(
        StaticText::new("ab")
            .align(ratatui::layout::Alignment::Center)
            .middle(),
    );
    let area = Rect::new(0, 0, 6, 3);
    let mut buf = Buffer::empty(area);
    text.render(area, &mut buf, false);
    assert_eq!(row_text(&buf, 0).trim(), "");
    assert_eq!(row_text(&buf, 1), "  ab  ");
    assert_eq!(row_text(&buf, 2).trim(), "");
}
