//! Token detection engine.
//!
//! One background task owns the detection timer and every trigger that can
//! start a pass: account-selection changes, keyring unlock transitions and
//! network switches all arrive over watch channels into a single
//! `tokio::select!` loop. Passes run inline in that loop, so timer-driven and
//! event-driven passes can never overlap.
//!
//! A detection pass scans the candidate registry against the selected
//! account and reports positive balances back to the app, which registers
//! them with the preferences store.

use std::time::Duration;

use chrono::Utc;
use tokio::sync::{mpsc, watch};
use tokio::time::{self, MissedTickBehavior};

use crate::client::TokenBalanceSource;
use crate::domain::{DetectedToken, NetworkConfig, TokenCandidate, WalletError};
use crate::state::AppMessage;

// ============================================================================
// Constants
// ============================================================================

/// Default interval between timer-driven detection passes: three minutes.
pub const DEFAULT_DETECT_INTERVAL: Duration = Duration::from_secs(180);

// ============================================================================
// Detector Channels
// ============================================================================

/// Everything the detection task listens to and reports through.
///
/// The receivers are the only way state reaches the task; it keeps no
/// mutable flags of its own.
pub struct DetectorChannels {
    /// Detection results and errors flow back to the app through here.
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Whether the UI is open / live updates are enabled.
    pub live_rx: watch::Receiver<bool>,
    /// Whether the keyring is unlocked.
    pub unlocked_rx: watch::Receiver<bool>,
    /// The currently selected account, if any.
    pub account_rx: watch::Receiver<Option<String>>,
    /// The active network configuration.
    pub network_rx: watch::Receiver<NetworkConfig>,
}

// ============================================================================
// Detection Task
// ============================================================================

/// Runs the detection loop until any input channel closes.
///
/// `make_source` rebuilds the balance source when the network changes.
/// Timer firings are gated on `live && unlocked`; account changes and
/// lock-to-unlock transitions trigger an immediate pass regardless of the
/// timer. Every pass enforces the MainNet check itself.
pub async fn detection_task<S, F>(
    channels: DetectorChannels,
    make_source: F,
    candidates: Vec<TokenCandidate>,
    interval: Duration,
) where
    S: TokenBalanceSource,
    F: Fn(&NetworkConfig) -> Result<S, WalletError>,
{
    let DetectorChannels {
        message_tx,
        mut live_rx,
        mut unlocked_rx,
        mut account_rx,
        mut network_rx,
    } = channels;

    let mut network = network_rx.borrow().clone();
    let mut source = match make_source(&network) {
        Ok(source) => source,
        Err(err) => {
            let _ = message_tx.send(AppMessage::NetworkError(err.to_string()));
            return;
        }
    };

    // First fire at `interval`, then every `interval` thereafter.
    let mut ticker = time::interval_at(time::Instant::now() + interval, interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if *live_rx.borrow() && *unlocked_rx.borrow() {
                    let account = account_rx.borrow().clone();
                    run_and_report(&source, &network, account, &candidates, &message_tx).await;
                }
            }

            changed = account_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let account = account_rx.borrow_and_update().clone();
                run_and_report(&source, &network, account, &candidates, &message_tx).await;
            }

            changed = unlocked_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let unlocked = *unlocked_rx.borrow_and_update();
                if unlocked {
                    let account = account_rx.borrow().clone();
                    run_and_report(&source, &network, account, &candidates, &message_tx).await;
                }
            }

            changed = network_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                network = network_rx.borrow_and_update().clone();
                match make_source(&network) {
                    Ok(new_source) => source = new_source,
                    Err(err) => {
                        // Keep the old source; the health check will surface it too.
                        let _ = message_tx.send(AppMessage::NetworkError(err.to_string()));
                    }
                }
            }

            changed = live_rx.changed() => {
                if changed.is_err() {
                    break;
                }
            }
        }
    }

    tracing::debug!("detection task stopped: input channel closed");
}

/// Runs one pass if preconditions hold and reports the outcome.
async fn run_and_report<S: TokenBalanceSource>(
    source: &S,
    network: &NetworkConfig,
    account: Option<String>,
    candidates: &[TokenCandidate],
    message_tx: &mpsc::UnboundedSender<AppMessage>,
) {
    if !network.detection_enabled() {
        tracing::trace!(network = network.name(), "detection skipped: not MainNet");
        return;
    }
    let Some(account) = account else {
        tracing::trace!("detection skipped: no account selected");
        return;
    };

    let detected = run_detection_pass(source, &account, candidates).await;
    // Receiver may be dropped during shutdown - safe to ignore
    let _ = message_tx.send(AppMessage::DetectionFinished {
        account,
        detected,
        scanned_at: Utc::now(),
    });
}

/// Scans every candidate for a positive balance.
///
/// Single-candidate failures are logged and skipped so one bad contract or
/// flaky query never aborts the rest of the pass.
pub async fn run_detection_pass<S: TokenBalanceSource>(
    source: &S,
    account: &str,
    candidates: &[TokenCandidate],
) -> Vec<DetectedToken> {
    let mut detected = Vec::new();

    for candidate in candidates {
        match source.token_balance(&candidate.address, account).await {
            Ok(0) => {}
            Ok(balance) => {
                tracing::debug!(
                    symbol = %candidate.symbol,
                    balance,
                    "detected token with positive balance"
                );
                detected.push(DetectedToken::from_candidate(candidate, balance));
            }
            Err(err) => {
                tracing::debug!(
                    symbol = %candidate.symbol,
                    "balance query failed, skipping candidate: {err}"
                );
            }
        }
    }

    detected
}

// ============================================================================
// Tests
// ============================================================================
