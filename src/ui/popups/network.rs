//! Network selection popup.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Clear, List, ListItem, ListState, Paragraph},
};

use crate::domain::NetworkConfig;
use crate::theme::{MUTED_COLOR, SELECTED_STYLE, SUCCESS_COLOR};
use crate::ui::helpers::create_popup_block;
use crate::ui::layout::centered_popup_area;

/// Renders the network picker.
///
/// `selected` is the highlighted row; `active` the network currently in use.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    networks: &[NetworkConfig],
    selected: usize,
    active: &NetworkConfig,
) {
    let height = (networks.len() as u16 + 6).min(area.height);
    let popup_area = centered_popup_area(area, 44, height);

    let popup_block = create_popup_block("Select Network");
    frame.render_widget(Clear, popup_area);
    frame.render_widget(&popup_block, popup_area);

    let inner = popup_block.inner(popup_area);
    let list_area = Rect::new(
        inner.x,
        inner.y,
        inner.width,
        inner.height.saturating_sub(1),
    );

    let items: Vec<ListItem> = networks
        .iter()
        .map(|network| {
            let marker = if network == active { "●" } else { " " };
            let detection = if network.detection_enabled() {
                Span::styled("  detection", Style::default().fg(SUCCESS_COLOR))
            } else {
                Span::raw("")
            };
            ListItem::new(Line::from(vec![
                Span::raw(format!("{marker} {}", network.name())),
                detection,
            ]))
        })
        .collect();

    let list = List::new(items)
        .highlight_style(SELECTED_STYLE)
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(selected.min(networks.len().saturating_sub(1))));
    frame.render_stateful_widget(list, list_area, &mut state);

    let help_area = Rect::new(
        popup_area.x,
        popup_area.y + popup_area.height - 2,
        popup_area.width,
        1,
    );
    let help = Paragraph::new("j/k:Move  Enter:Select  Esc:Cancel")
        .style(Style::default().fg(MUTED_COLOR))
        .centered();
    frame.render_widget(help, help_area);
}

// ============================================================================
// Tests
// ============================================================================
