//! Command execution and input handling.
//!
//! This module maps keyboard input to commands and executes those commands
//! against application state.

use color_eyre::Result;
use crossterm::event::KeyEvent;

use super::{App, PopupState};
use crate::client::EthClient;
use crate::commands::{AppCommand, InputContext, map_key};
use crate::domain::address;

impl App {
    pub(crate) fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        let context = self.get_input_context();
        let command = map_key(key_event, &context);
        self.execute_command(command)
    }

    /// Determines the current input context based on application state.
    #[must_use]
    pub fn get_input_context(&self) -> InputContext {
        match &self.popup {
            PopupState::ConfirmQuit => InputContext::ConfirmQuit,
            PopupState::NetworkSelect(_) => InputContext::NetworkSelect,
            PopupState::Message(_) => InputContext::MessagePopup,
            PopupState::Help => InputContext::HelpPopup,
            PopupState::None => InputContext::Main,
        }
    }

    /// Executes an application command.
    ///
    /// This method handles all `AppCommand` variants and performs the
    /// corresponding application state mutations.
    pub(crate) fn execute_command(&mut self, command: AppCommand) -> Result<()> {
        match command {
            // === Application Control ===
            AppCommand::RequestQuit => {
                self.popup = PopupState::ConfirmQuit;
            }
            AppCommand::ConfirmQuit => {
                self.exit = true;
            }
            AppCommand::Refresh => {
                self.initial_data_fetch();
            }
            AppCommand::ToggleLive => {
                self.toggle_live_updates();
            }
            AppCommand::ToggleHelp => {
                self.popup = PopupState::Help;
            }

            // === Keyring ===
            AppCommand::ToggleLock => {
                self.keyring.toggle_lock();
                let state = if self.keyring.is_unlocked() {
                    "unlocked"
                } else {
                    "locked"
                };
                tracing::info!("session {state}");
            }
            AppCommand::CycleAccount => {
                // The account watch channel wakes the detector for us.
                self.keyring.select_next();
                self.config.selected_account = self.keyring.selected_index();
                self.eth_balance = None;
                self.save_config();
            }

            // === Popup/Modal Control ===
            AppCommand::OpenNetworkSelect => {
                let current = self.current_network_index();
                self.popup = PopupState::NetworkSelect(current);
            }
            AppCommand::Dismiss => {
                self.popup = PopupState::None;
            }

            // === Token List ===
            AppCommand::MoveUp => {
                self.selected_token = self.selected_token.saturating_sub(1);
            }
            AppCommand::MoveDown => {
                self.selected_token += 1;
                self.clamp_token_selection();
            }
            AppCommand::RemoveToken => {
                self.remove_selected_token();
            }
            AppCommand::OpenExplorer => {
                self.open_explorer();
            }

            // === Account Actions ===
            AppCommand::CopyAddress => {
                self.copy_selected_address();
            }
            AppCommand::ToggleAvatarStyle => {
                self.config.use_blockies = !self.config.use_blockies;
                self.save_config();
            }

            // === Network Selection Actions ===
            AppCommand::NetworkUp => {
                if let PopupState::NetworkSelect(index) = &mut self.popup {
                    *index = index.saturating_sub(1);
                }
            }
            AppCommand::NetworkDown => {
                let max = self.available_networks.len().saturating_sub(1);
                if let PopupState::NetworkSelect(index) = &mut self.popup {
                    *index = (*index + 1).min(max);
                }
            }
            AppCommand::SelectNetwork => {
                if let PopupState::NetworkSelect(index) = self.popup.clone() {
                    self.switch_network(index);
                }
            }

            AppCommand::Noop => {}
        }
        Ok(())
    }

    // ========================================================================
    // Command Helpers
    // ========================================================================

    fn toggle_live_updates(&mut self) {
        self.config.show_live = !self.config.show_live;
        // Receiver may be dropped during shutdown - safe to ignore
        let _ = self.live_tx.send(self.config.show_live);
        self.save_config();
    }

    /// Index of the active network in `available_networks`.
    fn current_network_index(&self) -> usize {
        self.available_networks
            .iter()
            .position(|n| *n == self.config.network)
            .unwrap_or(0)
    }

    /// Switches to the network at `index` in the picker.
    fn switch_network(&mut self, index: usize) {
        let Some(network) = self.available_networks.get(index).cloned() else {
            self.popup = PopupState::None;
            return;
        };

        match EthClient::from_config(&network) {
            Ok(client) => {
                self.client = client;
                self.config.network = network.clone();
                self.network_ok = None;
                self.eth_balance = None;
                // Receiver may be dropped during shutdown - safe to ignore
                let _ = self.network_tx.send(network);
                self.save_config();
                self.popup = PopupState::None;
            }
            Err(err) => {
                self.show_message(format!("Failed to switch network: {err}"));
            }
        }
    }

    fn remove_selected_token(&mut self) {
        let Some(token) = self.prefs.tokens().get(self.selected_token) else {
            return;
        };
        let address = token.address.clone();
        let symbol = token.symbol.clone();

        if self.prefs.remove_token(&address) {
            if let Err(err) = self.prefs.save() {
                tracing::warn!("failed to persist tracked tokens: {err}");
            }
            self.clamp_token_selection();
            self.show_message(format!("Stopped tracking {symbol}"));
        }
    }

    /// Copies the selected account address to the clipboard, checksummed.
    fn copy_selected_address(&mut self) {
        let Some(addr) = self.keyring.selected_address() else {
            return;
        };
        let checksummed = address::to_checksum(addr);

        match arboard::Clipboard::new().and_then(|mut cb| cb.set_text(checksummed.clone())) {
            Ok(()) => {
                self.show_message(format!("Copied {checksummed}"));
            }
            Err(err) => {
                self.show_message(format!("Clipboard unavailable: {err}"));
            }
        }
    }

    /// Opens the selected token (or the account, with no tokens) on the
    /// network's block explorer.
    fn open_explorer(&mut self) {
        let Some(explorer) = self.config.network.explorer_url() else {
            self.show_message("No block explorer for this network");
            return;
        };

        let url = match self.prefs.tokens().get(self.selected_token) {
            Some(token) => format!("{explorer}/token/{}", token.address),
            None => match self.keyring.selected_address() {
                Some(addr) => format!("{explorer}/address/{addr}"),
                None => return,
            },
        };

        if let Err(err) = open::that(&url) {
            self.show_message(format!("Failed to open browser: {err}"));
        }
    }

    fn save_config(&mut self) {
        if let Err(err) = self.config.save() {
            tracing::warn!("failed to persist config: {err}");
        }
    }
}
