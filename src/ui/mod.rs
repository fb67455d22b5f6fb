//! UI rendering module for the tokenwatch TUI.
//!
//! This module provides the main rendering entry point and orchestrates
//! rendering of all UI components including panels, popups, and overlays.
//!
//! # Module Structure
//!
//! - `panels` - Main content panels (account overview, token list)
//! - `popups` - Modal dialogs (network selector, messages, help, quit)
//! - `layout` - Layout calculations and structs
//! - `header` - Header bar rendering
//! - `footer` - Footer bar rendering
//! - `helpers` - Shared helper functions for creating styled blocks

pub mod footer;
pub mod header;
pub mod helpers;
pub mod layout;
pub mod panels;
pub mod popups;

use ratatui::Frame;

use crate::state::{App, PopupState};

use layout::{calculate_app_layout, calculate_panel_layout};

// ============================================================================
// Main Render Entry Point
// ============================================================================

/// Main render function that orchestrates all UI rendering.
///
/// Handles the main layout (header, content, footer) and then layers the
/// active popup, if any, over it.
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();
    let app_layout = calculate_app_layout(size);

    header::render(frame, app_layout.header, app);
    render_main_content(app, frame, app_layout.main);
    footer::render(frame, app_layout.footer, app);

    render_popups(app, frame, size);
}

// ============================================================================
// Internal Rendering Functions
// ============================================================================

/// Render the main content area (account and token panels).
fn render_main_content(app: &App, frame: &mut Frame, area: ratatui::layout::Rect) {
    let panel_layout = calculate_panel_layout(area);
    panels::account::render(app, frame, panel_layout.account);
    panels::tokens::render(app, frame, panel_layout.tokens);
}

/// Render popup overlays based on current popup state.
fn render_popups(app: &App, frame: &mut Frame, area: ratatui::layout::Rect) {
    match &app.popup {
        PopupState::NetworkSelect(selected) => {
            popups::network::render(frame, area, &app.available_networks, *selected, app.network());
        }
        PopupState::Message(message) => {
            popups::message::render(frame, area, message);
        }
        PopupState::Help => {
            popups::help::render(frame, area);
        }
        PopupState::ConfirmQuit => {
            popups::confirm::render(frame, area);
        }
        PopupState::None => {}
    }
}
