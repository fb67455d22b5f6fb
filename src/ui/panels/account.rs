//! Account panel rendering.
//!
//! Shows the selected account's avatar, checksummed address, native balance
//! and position in the watch list.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::domain::address;
use crate::state::App;
use crate::theme::{MUTED_COLOR, PRIMARY_COLOR};
use crate::ui::helpers::create_border_block;
use crate::widgets::Avatar;
use crate::widgets::helpers::{format_eth_amount, truncate_address};

/// Avatar square size in terminal columns (half-block rows are half this).
const AVATAR_WIDTH: u16 = 16;
const AVATAR_HEIGHT: u16 = 8;

/// Renders the account overview panel.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let block = create_border_block("Account", false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(selected) = app.keyring.selected_address() else {
        let hint = Paragraph::new("No accounts.\nStart with --watch <address>.")
            .style(Style::default().fg(MUTED_COLOR));
        frame.render_widget(hint, inner);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(AVATAR_HEIGHT),
            Constraint::Length(1),
            Constraint::Min(3),
        ])
        .split(inner);

    // Center the avatar horizontally.
    let avatar_x = inner.x + inner.width.saturating_sub(AVATAR_WIDTH) / 2;
    let avatar_area = Rect::new(
        avatar_x,
        chunks[0].y,
        AVATAR_WIDTH.min(inner.width),
        AVATAR_HEIGHT.min(chunks[0].height),
    );
    frame.render_widget(
        Avatar::new()
            .with_address(Some(selected))
            .use_blockies(app.config.use_blockies),
        avatar_area,
    );

    let checksummed = address::to_checksum(selected);
    let mut lines = vec![
        Line::from(Span::styled(
            truncate_address(&checksummed, inner.width.saturating_sub(2) as usize),
            Style::default()
                .fg(PRIMARY_COLOR)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];

    match app.eth_balance {
        Some(wei) => lines.push(Line::from(format_eth_amount(wei))),
        None => lines.push(Line::from(Span::styled(
            "balance pending",
            Style::default().fg(MUTED_COLOR),
        ))),
    }

    let total = app.keyring.accounts().len();
    if total > 1 {
        lines.push(Line::from(Span::styled(
            format!("account {}/{total}", app.keyring.selected_index() + 1),
            Style::default().fg(MUTED_COLOR),
        )));
    }

    frame.render_widget(Paragraph::new(lines), chunks[2]);
}
