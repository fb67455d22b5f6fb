//! Help overlay listing every keybinding.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

use crate::theme::PRIMARY_COLOR;
use crate::ui::helpers::create_popup_block;
use crate::ui::layout::centered_popup_area;

const BINDINGS: &[(&str, &str)] = &[
    ("Space", "toggle live updates"),
    ("u", "lock / unlock the session"),
    ("a / Tab", "cycle watched accounts"),
    ("j / k", "move in the token list"),
    ("x", "stop tracking the selected token"),
    ("o", "open on the block explorer"),
    ("c", "copy the account address"),
    ("b", "toggle jazzicon / blockie avatars"),
    ("n", "switch network"),
    ("r", "refresh network status"),
    ("?", "toggle this help"),
    ("q", "quit"),
];

/// Renders the help overlay.
pub fn render(frame: &mut Frame, area: Rect) {
    let height = BINDINGS.len() as u16 + 4;
    let popup_area = centered_popup_area(area, 48, height);

    let popup_block = create_popup_block("Help");
    frame.render_widget(Clear, popup_area);
    frame.render_widget(&popup_block, popup_area);

    let lines: Vec<Line> = BINDINGS
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(
                    format!("  {key:<8}"),
                    Style::default()
                        .fg(PRIMARY_COLOR)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(*action),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), popup_block.inner(popup_area));
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_help_popup_renders() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area()))
            .unwrap();
    }
}
