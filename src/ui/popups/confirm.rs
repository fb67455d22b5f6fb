//! Quit confirmation popup.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Clear, Paragraph},
};

use crate::theme::MUTED_COLOR;
use crate::ui::helpers::create_popup_block;
use crate::ui::layout::centered_popup_area;

/// Renders the quit confirmation dialog.
pub fn render(frame: &mut Frame, area: Rect) {
    let popup_area = centered_popup_area(area, 34, 6);

    let popup_block = create_popup_block("Quit");
    frame.render_widget(Clear, popup_area);
    frame.render_widget(&popup_block, popup_area);

    let inner = popup_block.inner(popup_area);
    let prompt = Paragraph::new("Quit tokenwatch?").centered();
    frame.render_widget(prompt, Rect::new(inner.x, inner.y + 1, inner.width, 1));

    let help = Paragraph::new("y:Quit  n:Cancel")
        .style(Style::default().fg(MUTED_COLOR))
        .centered();
    frame.render_widget(
        help,
        Rect::new(popup_area.x, popup_area.y + popup_area.height - 2, popup_area.width, 1),
    );
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_confirm_popup_renders() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area()))
            .unwrap();
    }
}
