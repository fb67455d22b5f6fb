//! Layout calculations for the tokenwatch TUI.
//!
//! This module provides layout structs and helper functions for
//! calculating UI element positions and sizes.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

// ============================================================================
// Constants
// ============================================================================

/// Height of the header area in terminal rows.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the footer area in terminal rows.
pub const FOOTER_HEIGHT: u16 = 1;

/// Width of the account panel in terminal columns.
pub const ACCOUNT_PANEL_WIDTH: u16 = 38;

// ============================================================================
// Layout Structs
// ============================================================================

/// Main application layout areas.
#[derive(Debug, Clone, Copy)]
pub struct AppLayout {
    /// Header area (logo, network status).
    pub header: Rect,
    /// Main content area.
    pub main: Rect,
    /// Footer area (keybinding hints).
    pub footer: Rect,
}

/// Account/token panel split for the main content area.
#[derive(Debug, Clone, Copy)]
pub struct PanelLayout {
    /// Left panel (account overview and avatar).
    pub account: Rect,
    /// Right panel (tracked token list).
    pub tokens: Rect,
}

// ============================================================================
// Layout Functions
// ============================================================================

/// Calculate the main application layout from the terminal area.
#[must_use]
pub fn calculate_app_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        main: chunks[1],
        footer: chunks[2],
    }
}

/// Calculate the two-panel layout for the account and token areas.
#[must_use]
pub fn calculate_panel_layout(area: Rect) -> PanelLayout {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(ACCOUNT_PANEL_WIDTH),
            Constraint::Min(20),
        ])
        .split(area);

    PanelLayout {
        account: chunks[0],
        tokens: chunks[1],
    }
}

/// Calculate a centered popup area within a parent area.
///
/// # Arguments
/// * `parent` - The parent area to center within
/// * `width` - Desired popup width in columns
/// * `height` - Desired popup height in rows
#[must_use]
pub fn centered_popup_area(parent: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(parent.width.saturating_sub(4));
    let popup_height = height.min(parent.height.saturating_sub(4));

    let popup_x = parent.x + (parent.width.saturating_sub(popup_width)) / 2;
    let popup_y = parent.y + (parent.height.saturating_sub(popup_height)) / 2;

    Rect::new(popup_x, popup_y, popup_width, popup_height)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_app_layout() {
        let area = Rect::new(0, 0, 100, 50);
        let layout = calculate_app_layout(area);

        assert_eq!(layout.header.height, HEADER_HEIGHT);
        assert_eq!(layout.footer.height, FOOTER_HEIGHT);
        assert_eq!(layout.main.height, 50 - HEADER_HEIGHT - FOOTER_HEIGHT);
    }

    #[test]
    fn test_calculate_panel_layout() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = calculate_panel_layout(area);

        assert_eq!(layout.account.width, ACCOUNT_PANEL_WIDTH);
        assert_eq!(layout.tokens.width, 100 - ACCOUNT_PANEL_WIDTH);
        assert_eq!(layout.account.height, layout.tokens.height);
    }

    #[test]
    fn test_centered_popup_area() {
        let parent = Rect::new(0, 0, 100, 50);
        let popup = centered_popup_area(parent, 40, 20);

        assert_eq!(popup.width, 40);
        assert_eq!(popup.height, 20);
        assert_eq!(popup.x, 30); // (100 - 40) / 2
        assert_eq!(popup.y, 15); // (50 - 20) / 2
    }

    #[test]
    fn test_centered_popup_area_clamped() {
        let parent = Rect::new(0, 0, 30, 20);
        let popup = centered_popup_area(parent, 100, 50);

        // Should be clamped to fit within parent with margin
        assert!(popup.width <= parent.width - 4);
        assert!(popup.height <= parent.height - 4);
    }
}
