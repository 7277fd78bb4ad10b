use log::warn;

use crate::stores::AccountStorage;
use crate::{Account, Error};

/// Entry point for callers: opens accounts and looks them up by number.
/// All work is forwarded to the storage `S`, so the lookup strategy can be
/// swapped without touching callers.
pub struct Bank<S> {
    storage: S,
}

impl<S: AccountStorage> Bank<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Opens a zero-balance account.
    /// Returns `false` if an account with this number already exists.
    pub fn add_account(&mut self, number: impl Into<String>) -> bool {
        match self.open_account(Account::new(number)) {
            Ok(()) => true,
            Err(err) => {
                warn!("account not added: {}", err);
                false
            }
        }
    }

    pub fn open_account(&mut self, account: Account) -> Result<(), Error> {
        self.storage.add(account)
    }

    /// Must be called after loading accounts and before the first lookup.
    pub fn prepare(&mut self) {
        self.storage.prepare();
    }

    pub fn get_account(&self, number: &str) -> Result<Option<&Account>, Error> {
        self.storage.find(number)
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}
