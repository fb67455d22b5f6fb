//! Footer bar with keybinding hints.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::{App, PopupState};
use crate::theme::MUTED_COLOR;

/// Renders the context-sensitive keybinding hints.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let hints = match &app.popup {
        PopupState::NetworkSelect(_) => "j/k:Move  Enter:Select  Esc:Cancel",
        PopupState::ConfirmQuit => "y/Enter:Quit  n/Esc:Cancel",
        PopupState::Message(_) | PopupState::Help => "Esc:Close",
        PopupState::None => {
            "q:Quit  Space:Live  u:Lock  a:Account  n:Network  c:Copy  o:Explorer  x:Untrack  b:Avatars  ?:Help"
        }
    };

    let footer = Paragraph::new(Line::from(Span::styled(
        hints,
        Style::default().fg(MUTED_COLOR),
    )))
    .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}
