//! Application lifecycle management.
//!
//! This module contains the core lifecycle methods for the `App`:
//! - `new()` - Creates a new application instance
//! - `run()` - Main event loop
//! - Background task management
//! - Initial data fetching

use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use std::time::{Duration, Instant};
use tokio::sync::{mpsc, watch};
use tokio::time::interval;

use crate::client::EthClient;
use crate::detect::{DetectorChannels, detection_task};
use crate::domain::{NetworkConfig, TokenRegistry};
use crate::tui::Tui;
use crate::ui;

use super::{App, AppConfig, AppMessage, KeyringState, PopupState, Preferences, StartupOptions};

// ============================================================================
// Lifecycle Methods
// ============================================================================

impl App {
    /// Creates a new App instance, loading configuration from disk.
    ///
    /// # Errors
    /// Returns an error if initialization fails.
    pub fn new(startup_options: StartupOptions) -> Result<Self> {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        // Load persisted state
        let mut config = AppConfig::load();
        let prefs = Preferences::load();

        // Apply startup overrides on top of the config
        if let Some(network) = startup_options.network {
            config.network = NetworkConfig::BuiltIn(network);
        }
        if let Some(secs) = startup_options.interval_secs {
            config.detect_interval_secs = secs;
        }
        if let Some(addr) = &startup_options.watch_address {
            if config.add_account(addr)? {
                config.save()?;
            }
        }

        let keyring = KeyringState::new(config.accounts.clone(), config.selected_account);
        let client = EthClient::from_config(&config.network)
            .map_err(crate::domain::WalletError::into_report)?;

        // Cache available networks
        let available_networks = config.get_all_networks();

        let (live_tx, _live_rx) = watch::channel(config.show_live);
        let (network_tx, _network_rx) = watch::channel(config.network.clone());

        Ok(Self {
            config,
            prefs,
            keyring,
            available_networks,
            exit: false,
            popup: PopupState::None,
            selected_token: 0,
            eth_balance: None,
            last_scan: None,
            network_ok: None,
            client,
            message_tx,
            message_rx,
            live_tx,
            network_tx,
        })
    }

    /// Runs the main application loop.
    ///
    /// # Errors
    /// Returns an error if the terminal operations fail.
    pub async fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        self.start_background_tasks();
        self.initial_data_fetch();

        let tick_rate = Duration::from_millis(100);
        let mut last_tick = Instant::now();

        while !self.exit {
            self.process_messages();

            let timeout = tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::from_secs(0));

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key)
                        if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                    {
                        self.handle_key_event(key)?;
                    }
                    Event::Resize(_, _) => {
                        terminal.draw(|frame| ui::render(self, frame))?;
                    }
                    _ => {}
                }
            }

            if last_tick.elapsed() >= tick_rate {
                terminal.draw(|frame| ui::render(self, frame))?;
                last_tick = Instant::now();
            }
        }

        Ok(())
    }

    // ========================================================================
    // Background Tasks
    // ========================================================================

    pub(super) fn start_background_tasks(&self) {
        let channels = DetectorChannels {
            message_tx: self.message_tx.clone(),
            live_rx: self.live_tx.subscribe(),
            unlocked_rx: self.keyring.subscribe_unlocked(),
            account_rx: self.keyring.subscribe_account(),
            network_rx: self.network_tx.subscribe(),
        };
        let candidates = TokenRegistry::embedded().candidates().to_vec();
        let interval = self.config.detect_interval();

        tokio::spawn(detection_task(
            channels,
            EthClient::from_config,
            candidates,
            interval,
        ));

        let message_tx = self.message_tx.clone();
        let live_rx = self.live_tx.subscribe();
        let account_rx = self.keyring.subscribe_account();
        let network_rx = self.network_tx.subscribe();
        let client = self.client.clone();

        tokio::spawn(async move {
            Self::status_task(message_tx, live_rx, account_rx, network_rx, client).await;
        });
    }

    /// Periodic node health check and native-balance refresh.
    async fn status_task(
        message_tx: mpsc::UnboundedSender<AppMessage>,
        live_rx: watch::Receiver<bool>,
        account_rx: watch::Receiver<Option<String>>,
        mut network_rx: watch::Receiver<NetworkConfig>,
        mut client: EthClient,
    ) {
        let mut status_interval = interval(Duration::from_secs(10));
        let mut balance_interval = interval(Duration::from_secs(15));

        let mut is_network_available = true;
        let mut network_error_shown = false;

        loop {
            tokio::select! {
                changed = network_rx.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let new_config = network_rx.borrow_and_update().clone();
                    match EthClient::from_config(&new_config) {
                        Ok(new_client) => {
                            client = new_client;
                            is_network_available = true;
                            network_error_shown = false;
                        }
                        Err(e) => {
                            let _ = message_tx.send(AppMessage::NetworkError(e.to_string()));
                            is_network_available = false;
                            network_error_shown = true;
                        }
                    }
                }

                _ = status_interval.tick() => {
                    if *live_rx.borrow() {
                        match client.get_network_status().await {
                            Ok(()) => {
                                if !is_network_available {
                                    // Receiver may be dropped during shutdown - safe to ignore
                                    let _ = message_tx.send(AppMessage::NetworkConnected);
                                }
                                is_network_available = true;
                                network_error_shown = false;
                            }
                            Err(error_msg) => {
                                if !network_error_shown {
                                    // Receiver may be dropped during shutdown - safe to ignore
                                    let _ = message_tx.send(AppMessage::NetworkError(error_msg));
                                    network_error_shown = true;
                                }
                                is_network_available = false;
                            }
                        }
                    }
                }

                _ = balance_interval.tick() => {
                    let selected = account_rx.borrow().clone();
                    if *live_rx.borrow() && is_network_available
                        && let Some(account) = selected
                    {
                        match client.eth_balance(&account).await {
                            Ok(balance) => {
                                // Receiver may be dropped during shutdown - safe to ignore
                                let _ = message_tx.send(AppMessage::EthBalanceUpdated {
                                    account,
                                    balance,
                                });
                            }
                            Err(err) => {
                                if !network_error_shown {
                                    let _ = message_tx.send(AppMessage::NetworkError(err.to_string()));
                                    network_error_shown = true;
                                }
                                is_network_available = false;
                            }
                        }
                    }
                }
            }
        }
    }

    pub(super) fn initial_data_fetch(&self) {
        let message_tx = self.message_tx.clone();
        let client = self.client.clone();
        let account = self.keyring.selected_address().map(str::to_string);

        tokio::spawn(async move {
            // Channel sends below: receiver may be dropped during shutdown - safe to ignore
            match client.get_network_status().await {
                Err(error_msg) => {
                    let _ = message_tx.send(AppMessage::NetworkError(error_msg));
                    return;
                }
                Ok(()) => {
                    let _ = message_tx.send(AppMessage::NetworkConnected);
                }
            }

            if let Some(account) = account {
                match client.eth_balance(&account).await {
                    Ok(balance) => {
                        let _ = message_tx.send(AppMessage::EthBalanceUpdated { account, balance });
                    }
                    Err(err) => {
                        let _ = message_tx.send(AppMessage::NetworkError(err.to_string()));
                    }
                }
            }
        });
    }
}
