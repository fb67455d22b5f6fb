//! Keyring lock-state store.
//!
//! Holds the watched accounts, the current selection and the session lock
//! flag. No key material lives here; accounts are watch-only. Lock and
//! selection changes are published on watch channels, which is the only way
//! they reach the detection task.

use tokio::sync::watch;

use crate::domain::{WalletError, address};

// ============================================================================
// KeyringState
// ============================================================================

#[derive(Debug)]
pub struct KeyringState {
    /// Watched addresses, lower-cased.
    accounts: Vec<String>,
    /// Index of the selected account.
    selected: usize,
    /// Publishes the lock flag.
    unlocked_tx: watch::Sender<bool>,
    /// Publishes the selected account.
    account_tx: watch::Sender<Option<String>>,
}

impl KeyringState {
    /// Creates a locked keyring over the given accounts.
    ///
    /// The session starts locked; detection stays idle until the user
    /// unlocks it.
    #[must_use]
    pub fn new(accounts: Vec<String>, selected: usize) -> Self {
        let accounts: Vec<String> = accounts.iter().map(|a| address::normalize(a)).collect();
        let selected = if accounts.is_empty() {
            0
        } else {
            selected.min(accounts.len() - 1)
        };

        let (unlocked_tx, _) = watch::channel(false);
        let (account_tx, _) = watch::channel(accounts.get(selected).cloned());

        Self {
            accounts,
            selected,
            unlocked_tx,
            account_tx,
        }
    }

    // ========================================================================
    // Subscriptions
    // ========================================================================

    /// Subscribe to lock-state changes.
    #[must_use]
    pub fn subscribe_unlocked(&self) -> watch::Receiver<bool> {
        self.unlocked_tx.subscribe()
    }

    /// Subscribe to account-selection changes.
    #[must_use]
    pub fn subscribe_account(&self) -> watch::Receiver<Option<String>> {
        self.account_tx.subscribe()
    }

    // ========================================================================
    // Lock State
    // ========================================================================

    /// Whether the keyring is unlocked.
    #[must_use]
    pub fn is_unlocked(&self) -> bool {
        *self.unlocked_tx.borrow()
    }

    /// Flips the lock state and publishes the transition.
    pub fn toggle_lock(&self) {
        let next = !self.is_unlocked();
        // Receiver may be dropped during shutdown - safe to ignore
        let _ = self.unlocked_tx.send(next);
    }

    // ========================================================================
    // Accounts
    // ========================================================================

    /// All watched accounts, lower-cased.
    #[must_use]
    pub fn accounts(&self) -> &[String] {
        &self.accounts
    }

    /// The selected account address, if any accounts exist.
    #[must_use]
    pub fn selected_address(&self) -> Option<&str> {
        self.accounts.get(self.selected).map(String::as_str)
    }

    /// Index of the selected account.
    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Adds an account (validated and lower-cased) and selects it.
    ///
    /// Duplicates are selected instead of re-added.
    ///
    /// # Errors
    ///
    /// Returns an error if the address is malformed.
    pub fn add_account(&mut self, addr: &str) -> Result<(), WalletError> {
        address::validate_address(addr)?;
        let normalized = address::normalize(addr);

        let index = match self.accounts.iter().position(|a| *a == normalized) {
            Some(pos) => pos,
            None => {
                self.accounts.push(normalized);
                self.accounts.len() - 1
            }
        };
        self.select(index);
        Ok(())
    }

    /// Selects the account at `index` and publishes the change.
    pub fn select(&mut self, index: usize) {
        if self.accounts.is_empty() {
            return;
        }
        self.selected = index.min(self.accounts.len() - 1);
        // Receiver may be dropped during shutdown - safe to ignore
        let _ = self
            .account_tx
            .send(self.accounts.get(self.selected).cloned());
    }

    /// Cycles to the next account, wrapping around.
    pub fn select_next(&mut self) {
        if self.accounts.len() > 1 {
            self.select((self.selected + 1) % self.accounts.len());
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR_A: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
    const ADDR_B: &str = "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359";

    #[test]
    fn test_starts_locked() {
        let keyring = KeyringState::new(vec![ADDR_A.to_string()], 0);
        assert!(!keyring.is_unlocked());
    }

    #[test]
    fn test_toggle_lock_publishes() {
        let keyring = KeyringState::new(vec![ADDR_A.to_string()], 0);
        let rx = keyring.subscribe_unlocked();

        keyring.toggle_lock();
        assert!(keyring.is_unlocked());
        assert!(*rx.borrow());

        keyring.toggle_lock();
        assert!(!keyring.is_unlocked());
    }

    #[test]
    fn test_accounts_are_normalized() {
        let keyring = KeyringState::new(vec![ADDR_A.to_string()], 0);
        assert_eq!(
            keyring.selected_address(),
            Some(ADDR_A.to_ascii_lowercase().as_str())
        );
    }

    #[test]
    fn test_selection_publishes_account() {
        let mut keyring = KeyringState::new(vec![ADDR_A.to_string(), ADDR_B.to_string()], 0);
        let rx = keyring.subscribe_account();

        keyring.select_next();
        assert_eq!(keyring.selected_index(), 1);
        assert_eq!(
            rx.borrow().as_deref(),
            Some(ADDR_B.to_ascii_lowercase().as_str())
        );

        // Wraps back around.
        keyring.select_next();
        assert_eq!(keyring.selected_index(), 0);
    }

    #[test]
    fn test_select_next_noop_with_single_account() {
        let mut keyring = KeyringState::new(vec![ADDR_A.to_string()], 0);
        keyring.select_next();
        assert_eq!(keyring.selected_index(), 0);
    }

    #[test]
    fn test_add_account_dedupes_and_selects() {
        let mut keyring = KeyringState::new(vec![ADDR_A.to_string()], 0);
        keyring.add_account(ADDR_B).unwrap();
        assert_eq!(keyring.accounts().len(), 2);
        assert_eq!(keyring.selected_index(), 1);

        keyring.add_account(ADDR_A).unwrap();
        assert_eq!(keyring.accounts().len(), 2);
        assert_eq!(keyring.selected_index(), 0);
    }

    #[test]
    fn test_add_account_rejects_malformed() {
        let mut keyring = KeyringState::new(Vec::new(), 0);
        assert!(keyring.add_account("bogus").is_err());
        assert!(keyring.accounts().is_empty());
        assert_eq!(keyring.selected_address(), None);
    }

    #[test]
    fn test_empty_keyring_has_no_selection() {
        let keyring = KeyringState::new(Vec::new(), 0);
        assert_eq!(keyring.selected_address(), None);
        assert!(keyring.subscribe_account().borrow().is_none());
    }

    #[test]
    fn test_selected_index_clamped_on_construction() {
        let keyring = KeyringState::new(vec![ADDR_A.to_string()], 99);
        assert_eq!(keyring.selected_index(), 0);
    }
}
