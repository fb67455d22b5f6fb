//! Tracked token list panel.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use crate::domain::TokenRegistry;
use crate::state::App;
use crate::theme::{MUTED_COLOR, SELECTED_STYLE, SUCCESS_COLOR};
use crate::ui::helpers::create_border_block;
use crate::widgets::helpers::truncate_address;

/// Renders the tracked token list.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let title = format!("Tokens ({})", app.prefs.tokens().len());
    let block = create_border_block(&title, true);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.prefs.tokens().is_empty() {
        let hint = if app.network().detection_enabled() {
            "No tracked tokens yet.\nDetection scans run while live and unlocked."
        } else {
            "No tracked tokens.\nAutomatic detection only runs on MainNet."
        };
        frame.render_widget(
            Paragraph::new(hint).style(Style::default().fg(MUTED_COLOR)),
            inner,
        );
        return;
    }

    let registry = TokenRegistry::embedded();
    let addr_width = inner.width.saturating_sub(14) as usize;

    let items: Vec<ListItem> = app
        .prefs
        .tokens()
        .iter()
        .map(|token| {
            let glyph = registry.logo(&token.address).unwrap_or("·");
            ListItem::new(Line::from(vec![
                Span::raw(format!("{glyph} ")),
                Span::styled(
                    format!("{:<6}", token.symbol),
                    Style::default().fg(SUCCESS_COLOR),
                ),
                Span::styled(
                    truncate_address(&token.address, addr_width),
                    Style::default().fg(MUTED_COLOR),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .highlight_style(SELECTED_STYLE)
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.selected_token));
    frame.render_stateful_widget(list, inner, &mut state);
}
