//! An in-process [`AssetLedger`] backed by hash maps.

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::domain::{AccountId, Amount};
use crate::traits::{AssetLedger, AssetLedgerError};

#[derive(Debug, Default)]
struct Books {
    balances: HashMap<AccountId, Amount>,
    allowances: HashMap<(AccountId, AccountId), Amount>,
    supply: Amount,
    failing: bool,
}

impl Books {
    fn balance(&self, account: &AccountId) -> Amount {
        self.balances.get(account).copied().unwrap_or(Amount::ZERO)
    }

    /// Validates both legs before touching either balance.
    fn move_funds(&mut self, from: AccountId, to: AccountId, amount: Amount) -> Result<(), AssetLedgerError> {
        if self.failing {
            return Err(AssetLedgerError::Rejected("transfers disabled".to_owned()));
        }
        let from_balance = self
            .balance(&from)
            .checked_sub(&amount)
            .ok_or(AssetLedgerError::InsufficientBalance)?;
        if from == to {
            return Ok(());
        }
        let to_balance = self
            .balance(&to)
            .checked_add(&amount)
            .ok_or(AssetLedgerError::Overflow)?;
        self.balances.insert(from, from_balance);
        self.balances.insert(to, to_balance);
        Ok(())
    }
}

/// A fungible asset held entirely in memory.
///
/// Besides the [`AssetLedger`] operations it can mint, approve spenders
/// and be switched into a mode where every transfer fails. It backs the
/// demos and tests.
///
/// # Examples
///
/// ```
/// use hydra_exchange::assets::MemoryLedger;
/// use hydra_exchange::domain::{AccountId, Amount};
/// use hydra_exchange::traits::AssetLedger;
///
/// let alice = AccountId::from_bytes([1; 32]);
/// let bob = AccountId::from_bytes([2; 32]);
///
/// let ledger = MemoryLedger::new();
/// ledger.mint(alice, Amount::new(100));
/// assert!(ledger.transfer(alice, bob, Amount::new(30)).is_ok());
/// assert_eq!(ledger.balance_of(bob), Amount::new(30));
/// assert!(ledger.transfer(bob, alice, Amount::new(31)).is_err());
/// ```
#[derive(Debug, Default)]
pub struct MemoryLedger {
    books: Mutex<Books>,
}

impl MemoryLedger {
    /// Creates a ledger with no balances.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates `amount` new units in `account`, saturating at the maximum.
    pub fn mint(&self, account: AccountId, amount: Amount) {
        let mut books = self.books.lock();
        let balance = books.balance(&account);
        books
            .balances
            .insert(account, balance.checked_add(&amount).unwrap_or(Amount::MAX));
        books.supply = books.supply.checked_add(&amount).unwrap_or(Amount::MAX);
    }

    /// Lets `spender` move up to `amount` out of `owner`.
    pub fn approve(&self, owner: AccountId, spender: AccountId, amount: Amount) {
        self.books.lock().allowances.insert((owner, spender), amount);
    }

    /// Remaining allowance `owner` has granted `spender`.
    #[must_use]
    pub fn allowance(&self, owner: AccountId, spender: AccountId) -> Amount {
        self.books
            .lock()
            .allowances
            .get(&(owner, spender))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    /// While enabled, every transfer fails with
    /// [`AssetLedgerError::Rejected`].
    pub fn fail_transfers(&self, failing: bool) {
        self.books.lock().failing = failing;
    }
}

impl AssetLedger for MemoryLedger {
    fn transfer(&self, from: AccountId, to: AccountId, amount: Amount) -> Result<(), AssetLedgerError> {
        self.books.lock().move_funds(from, to, amount)
    }

    fn transfer_from(
        &self,
        spender: AccountId,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), AssetLedgerError> {
        let mut books = self.books.lock();
        let remaining = books
            .allowances
            .get(&(from, spender))
            .copied()
            .unwrap_or(Amount::ZERO)
            .checked_sub(&amount)
            .ok_or(AssetLedgerError::InsufficientAllowance)?;

        books.move_funds(from, to, amount)?;
        books.allowances.insert((from, spender), remaining);
        Ok(())
    }

    fn balance_of(&self, account: AccountId) -> Amount {
        self.books.lock().balance(&account)
    }

    fn total_supply(&self) -> Amount {
        self.books.lock().supply
    }
}
