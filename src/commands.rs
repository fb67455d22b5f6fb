//! Command pattern for key event handling in the TUI application.
//!
//! This module provides a clean separation between key input and application
//! actions, making it easy to:
//! - Test key mappings in isolation
//! - Add new keybindings
//! - Support future keybinding customization

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// ============================================================================
// Input Context
// ============================================================================

/// Represents the current input context for key mapping.
///
/// The input context determines which keybindings are active and how
/// key events should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Normal browsing mode - viewing the account and token panels.
    Main,
    /// Network selection popup is open.
    NetworkSelect,
    /// Viewing a message/notification popup.
    MessagePopup,
    /// Viewing the help overlay.
    HelpPopup,
    /// Quit confirmation popup is open.
    ConfirmQuit,
}

impl InputContext {
    /// Returns `true` if this context represents a popup/overlay state.
    #[must_use]
    pub const fn is_popup(&self) -> bool {
        !matches!(self, Self::Main)
    }
}

// ============================================================================
// App Commands
// ============================================================================

/// All possible commands the application can execute.
///
/// Commands are the result of mapping key events to application actions.
/// This enum represents the "what" of user intent, decoupled from the "how"
/// of key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    // === Application Control ===
    /// Ask for quit confirmation.
    RequestQuit,
    /// Exit the application.
    ConfirmQuit,
    /// Refresh data from the network.
    Refresh,
    /// Toggle live updates on/off.
    ToggleLive,
    /// Toggle the help overlay.
    ToggleHelp,

    // === Keyring ===
    /// Lock or unlock the session.
    ToggleLock,
    /// Cycle to the next watched account.
    CycleAccount,

    // === Popup/Modal Control ===
    /// Open the network selection popup.
    OpenNetworkSelect,
    /// Dismiss/close the current popup.
    Dismiss,

    // === Token List ===
    /// Move selection up in the token list.
    MoveUp,
    /// Move selection down in the token list.
    MoveDown,
    /// Stop tracking the selected token.
    RemoveToken,
    /// Open the selected token on the block explorer.
    OpenExplorer,

    // === Account Actions ===
    /// Copy the selected account address to the clipboard.
    CopyAddress,
    /// Toggle between jazzicon and blockie avatars.
    ToggleAvatarStyle,

    // === Network Selection Actions ===
    /// Move up in the network selection list.
    NetworkUp,
    /// Move down in the network selection list.
    NetworkDown,
    /// Select the currently highlighted network.
    SelectNetwork,

    // === No Operation ===
    /// No action to perform (unhandled key).
    Noop,
}

// ============================================================================
// Key Mapper
// ============================================================================

/// Maps a key event to an application command based on the current context.
///
/// This is a pure function with no side effects - it simply translates
/// input events to semantic commands.
#[must_use]
pub fn map_key(key: KeyEvent, context: &InputContext) -> AppCommand {
    // Ctrl+C always quits, regardless of context.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return AppCommand::ConfirmQuit;
    }

    match context {
        InputContext::Main => map_main_keys(key),
        InputContext::NetworkSelect => map_network_select_keys(key),
        InputContext::MessagePopup => map_message_popup_keys(key),
        InputContext::HelpPopup => map_help_popup_keys(key),
        InputContext::ConfirmQuit => map_confirm_quit_keys(key),
    }
}

/// Maps keys in the main browsing context.
fn map_main_keys(key: KeyEvent) -> AppCommand {
    match key.code {
        KeyCode::Char('q') => AppCommand::RequestQuit,
        KeyCode::Char('r') => AppCommand::Refresh,
        KeyCode::Char(' ') => AppCommand::ToggleLive,
        KeyCode::Char('u') => AppCommand::ToggleLock,
        KeyCode::Char('a') | KeyCode::Tab => AppCommand::CycleAccount,
        KeyCode::Char('n') => AppCommand::OpenNetworkSelect,
        KeyCode::Char('c') => AppCommand::CopyAddress,
        KeyCode::Char('b') => AppCommand::ToggleAvatarStyle,
        KeyCode::Char('o') => AppCommand::OpenExplorer,
        KeyCode::Char('x') => AppCommand::RemoveToken,
        KeyCode::Char('?') => AppCommand::ToggleHelp,
        KeyCode::Up | KeyCode::Char('k') => AppCommand::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => AppCommand::MoveDown,
        KeyCode::Esc => AppCommand::Dismiss,
        _ => AppCommand::Noop,
    }
}

/// Maps keys in the network selection popup.
fn map_network_select_keys(key: KeyEvent) -> AppCommand {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => AppCommand::Dismiss,
        KeyCode::Up | KeyCode::Char('k') => AppCommand::NetworkUp,
        KeyCode::Down | KeyCode::Char('j') => AppCommand::NetworkDown,
        KeyCode::Enter => AppCommand::SelectNetwork,
        _ => AppCommand::Noop,
    }
}

/// Maps keys in the message popup.
fn map_message_popup_keys(key: KeyEvent) -> AppCommand {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('q') => {
            AppCommand::Dismiss
        }
        _ => AppCommand::Noop,
    }
}

/// Maps keys in the help overlay.
fn map_help_popup_keys(key: KeyEvent) -> AppCommand {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('?') => {
            AppCommand::Dismiss
        }
        _ => AppCommand::Noop,
    }
}

/// Maps keys in the quit confirmation popup.
fn map_confirm_quit_keys(key: KeyEvent) -> AppCommand {
    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => AppCommand::ConfirmQuit,
        KeyCode::Char('n') | KeyCode::Esc => AppCommand::Dismiss,
        _ => AppCommand::Noop,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};
    use rstest::*;

    /// Helper to create a key event for testing.
    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[rstest]
    #[case::quit(KeyCode::Char('q'), AppCommand::RequestQuit)]
    #[case::refresh(KeyCode::Char('r'), AppCommand::Refresh)]
    #[case::live(KeyCode::Char(' '), AppCommand::ToggleLive)]
    #[case::lock(KeyCode::Char('u'), AppCommand::ToggleLock)]
    #[case::account(KeyCode::Char('a'), AppCommand::CycleAccount)]
    #[case::account_tab(KeyCode::Tab, AppCommand::CycleAccount)]
    #[case::network(KeyCode::Char('n'), AppCommand::OpenNetworkSelect)]
    #[case::copy(KeyCode::Char('c'), AppCommand::CopyAddress)]
    #[case::avatar(KeyCode::Char('b'), AppCommand::ToggleAvatarStyle)]
    #[case::explorer(KeyCode::Char('o'), AppCommand::OpenExplorer)]
    #[case::remove(KeyCode::Char('x'), AppCommand::RemoveToken)]
    #[case::help(KeyCode::Char('?'), AppCommand::ToggleHelp)]
    #[case::up(KeyCode::Up, AppCommand::MoveUp)]
    #[case::up_vim(KeyCode::Char('k'), AppCommand::MoveUp)]
    #[case::down(KeyCode::Down, AppCommand::MoveDown)]
    #[case::down_vim(KeyCode::Char('j'), AppCommand::MoveDown)]
    #[case::unhandled(KeyCode::Char('z'), AppCommand::Noop)]
    fn test_main_context_keys(#[case] code: KeyCode, #[case] expected: AppCommand) {
        assert_eq!(map_key(key_event(code), &InputContext::Main), expected);
    }

    #[rstest]
    #[case::up(KeyCode::Up, AppCommand::NetworkUp)]
    #[case::down(KeyCode::Char('j'), AppCommand::NetworkDown)]
    #[case::select(KeyCode::Enter, AppCommand::SelectNetwork)]
    #[case::dismiss(KeyCode::Esc, AppCommand::Dismiss)]
    fn test_network_select_keys(#[case] code: KeyCode, #[case] expected: AppCommand) {
        assert_eq!(
            map_key(key_event(code), &InputContext::NetworkSelect),
            expected
        );
    }

    #[rstest]
    #[case::confirm_y(KeyCode::Char('y'), AppCommand::ConfirmQuit)]
    #[case::confirm_enter(KeyCode::Enter, AppCommand::ConfirmQuit)]
    #[case::cancel_n(KeyCode::Char('n'), AppCommand::Dismiss)]
    #[case::cancel_esc(KeyCode::Esc, AppCommand::Dismiss)]
    fn test_confirm_quit_keys(#[case] code: KeyCode, #[case] expected: AppCommand) {
        assert_eq!(
            map_key(key_event(code), &InputContext::ConfirmQuit),
            expected
        );
    }

    #[test]
    fn test_message_popup_dismisses() {
        for code in [
            KeyCode::Esc,
            KeyCode::Enter,
            KeyCode::Char(' '),
            KeyCode::Char('q'),
        ] {
            assert_eq!(
                map_key(key_event(code), &InputContext::MessagePopup),
                AppCommand::Dismiss
            );
        }
    }

    #[test]
    fn test_ctrl_c_quits_in_any_context() {
        let key = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        };
        for context in [
            InputContext::Main,
            InputContext::NetworkSelect,
            InputContext::MessagePopup,
            InputContext::HelpPopup,
            InputContext::ConfirmQuit,
        ] {
            assert_eq!(map_key(key, &context), AppCommand::ConfirmQuit);
        }
    }

    #[test]
    fn test_popup_contexts() {
        assert!(!InputContext::Main.is_popup());
        assert!(InputContext::NetworkSelect.is_popup());
        assert!(InputContext::HelpPopup.is_popup());
    }
}
