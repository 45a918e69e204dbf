//! Top-level frame composition: the widget tree fills the body, a help
//! footer sits on the last line during the interactive phase, and the
//! terminal cursor is placed (or left hidden) from the tree's own render
//! result.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::Paragraph,
    Frame,
};

use super::app::{App, Phase};

pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    if app.phase() == Phase::Splash {
        let cursor = app.render_root(area, frame.buffer_mut());
        apply_cursor(frame, cursor);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Body (widget tree)
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let body = chunks[0].inner(ratatui::layout::Margin {
        horizontal: 1,
        vertical: 0,
    });
    let cursor = app.render_root(body, frame.buffer_mut());

    let footer = Paragraph::new(app.footer_line())
        .style(app.theme().footer_style())
        .centered();
    frame.render_widget(footer, chunks[1]);

    apply_cursor(frame, cursor);
}

fn apply_cursor(frame: &mut Frame, cursor: Option<ratatui::layout::Position>) {
    // Not setting a position leaves the cursor hidden, so visibility is
    // exactly the tree's focus-path derivation, recomputed every pass.
    if let Some(position) = cursor {
        frame.set_cursor_position(position);
    }
}
