//! Handling of messages from background tasks.

use super::{App, AppMessage};

impl App {
    /// Drains every pending background message.
    ///
    /// Called once per tick of the main loop, before rendering.
    pub(super) fn process_messages(&mut self) {
        while let Ok(message) = self.message_rx.try_recv() {
            self.handle_message(message);
        }
    }

    pub(super) fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::DetectionFinished {
                account,
                detected,
                scanned_at,
            } => {
                self.last_scan = Some(scanned_at);

                let new_count = self.prefs.register_detected(&detected);
                if new_count > 0 {
                    if let Err(err) = self.prefs.save() {
                        tracing::warn!("failed to persist tracked tokens: {err}");
                    }
                    tracing::info!(account = %account, new_count, "registered detected tokens");
                    self.show_message(format!(
                        "Detected {new_count} new token{}",
                        if new_count == 1 { "" } else { "s" }
                    ));
                }
                self.clamp_token_selection();
            }

            AppMessage::EthBalanceUpdated { account, balance } => {
                // A stale refresh for a previously selected account is dropped.
                if self.keyring.selected_address() == Some(account.as_str()) {
                    self.eth_balance = Some(balance);
                }
            }

            AppMessage::NetworkConnected => {
                self.network_ok = Some(true);
            }

            AppMessage::NetworkError(error) => {
                self.network_ok = Some(false);
                tracing::warn!("network error: {error}");
                self.show_message(format!("Network error: {error}"));
            }
        }
    }
}
