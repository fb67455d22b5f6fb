//! Application state.
//!
//! The [`App`] struct owns everything the UI renders and every channel the
//! background tasks feed. State changes flow in as [`AppMessage`]s from the
//! detection and status tasks; user input flows in as commands. Submodules
//! split the `impl App` surface by concern.

use chrono::{DateTime, Utc};
use tokio::sync::{mpsc, watch};

use crate::client::EthClient;
use crate::domain::{DetectedToken, Network, NetworkConfig};

mod app_commands;
mod app_lifecycle;
mod app_messages;
mod config;
mod keyring;
mod preferences;


pub use config::AppConfig;
pub use keyring::KeyringState;
pub use preferences::Preferences;

// ============================================================================
// Messages
// ============================================================================

/// Messages from background tasks to the app.
#[derive(Debug)]
pub enum AppMessage {
    /// A detection pass finished for `account`.
    DetectionFinished {
        account: String,
        detected: Vec<DetectedToken>,
        scanned_at: DateTime<Utc>,
    },
    /// The native balance of `account` was refreshed.
    EthBalanceUpdated { account: String, balance: u128 },
    /// The node health check succeeded.
    NetworkConnected,
    /// The node health check or client construction failed.
    NetworkError(String),
}

// ============================================================================
// Startup
// ============================================================================

/// Command-line overrides applied on top of the persisted configuration.
#[derive(Debug, Default)]
pub struct StartupOptions {
    /// Start on this network instead of the configured one.
    pub network: Option<Network>,
    /// Add this address to the watch list and select it.
    pub watch_address: Option<String>,
    /// Override the detection interval.
    pub interval_secs: Option<u64>,
}

// ============================================================================
// Popups
// ============================================================================

/// Modal state layered over the main view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PopupState {
    #[default]
    None,
    /// Transient message with a dismiss key.
    Message(String),
    /// Network picker with the highlighted row index.
    NetworkSelect(usize),
    Help,
    ConfirmQuit,
}

// ============================================================================
// App
// ============================================================================

/// Top-level application state.
pub struct App {
    /// Persisted settings.
    pub config: AppConfig,
    /// Tracked-token store.
    pub prefs: Preferences,
    /// Accounts and lock state.
    pub keyring: KeyringState,
    /// Networks shown in the network picker.
    pub available_networks: Vec<NetworkConfig>,
    /// Whether the app should exit.
    pub exit: bool,
    /// Active popup, if any.
    pub popup: PopupState,
    /// Highlighted row in the token list.
    pub selected_token: usize,
    /// Native balance of the selected account, in wei.
    pub eth_balance: Option<u128>,
    /// When the last detection pass finished.
    pub last_scan: Option<DateTime<Utc>>,
    /// Result of the most recent node health check.
    pub network_ok: Option<bool>,
    /// JSON-RPC client for the active network.
    pub client: EthClient,

    /// Sender handed to background tasks.
    pub(crate) message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Messages from background tasks, drained every tick.
    pub(crate) message_rx: mpsc::UnboundedReceiver<AppMessage>,
    /// Publishes the live-updates flag to the detector.
    pub(crate) live_tx: watch::Sender<bool>,
    /// Publishes network switches to the detector.
    pub(crate) network_tx: watch::Sender<NetworkConfig>,
}

impl App {
    /// The active network configuration.
    #[must_use]
    pub fn network(&self) -> &NetworkConfig {
        &self.config.network
    }

    /// Whether live updates are enabled.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.config.show_live
    }

    /// Shows a transient message popup.
    pub fn show_message(&mut self, text: impl Into<String>) {
        self.popup = PopupState::Message(text.into());
    }

    /// Clamps the token-list selection to the current token count.
    pub(crate) fn clamp_token_selection(&mut self) {
        let len = self.prefs.tokens().len();
        if len == 0 {
            self.selected_token = 0;
        } else if self.selected_token >= len {
            self.selected_token = len - 1;
        }
    }
}
