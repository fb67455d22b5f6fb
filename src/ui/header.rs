//! Header bar rendering.
//!
//! Shows the app name, the active network with its health indicator, and
//! session state (live updates, keyring lock, last detection scan).

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::App;
use crate::theme::{
    ACCENT_COLOR, ERROR_COLOR, MUTED_COLOR, PRIMARY_COLOR, SUCCESS_COLOR, WARNING_COLOR,
};
use crate::ui::helpers::create_border_block;

/// Renders the header bar.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = create_border_block("tokenwatch", false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(40)])
        .split(inner);

    frame.render_widget(status_line(app), chunks[0]);
    frame.render_widget(scan_line(app).alignment(Alignment::Right), chunks[1]);
}

/// Network name, node health and session flags.
fn status_line(app: &App) -> Paragraph<'_> {
    let (health_glyph, health_style) = match app.network_ok {
        Some(true) => ("●", Style::default().fg(SUCCESS_COLOR)),
        Some(false) => ("●", Style::default().fg(ERROR_COLOR)),
        None => ("○", Style::default().fg(MUTED_COLOR)),
    };

    let live = if app.is_live() {
        Span::styled("LIVE", Style::default().fg(SUCCESS_COLOR))
    } else {
        Span::styled("PAUSED", Style::default().fg(WARNING_COLOR))
    };

    let lock = if app.keyring.is_unlocked() {
        Span::styled("unlocked", Style::default().fg(SUCCESS_COLOR))
    } else {
        Span::styled("locked", Style::default().fg(WARNING_COLOR))
    };

    Paragraph::new(Line::from(vec![
        Span::styled(health_glyph, health_style),
        Span::raw(" "),
        Span::styled(
            app.network().name().to_string(),
            Style::default()
                .fg(PRIMARY_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        live,
        Span::raw("  "),
        lock,
    ]))
}

/// Last-scan timestamp, or a hint while detection has not run yet.
fn scan_line(app: &App) -> Paragraph<'_> {
    let text = match app.last_scan {
        Some(at) => format!("last scan {}", at.format("%H:%M:%S")),
        None if app.network().detection_enabled() => "no scans yet".to_string(),
        None => "detection off (not MainNet)".to_string(),
    };

    Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(ACCENT_COLOR),
    )))
}
