use std::collections::HashMap;

use super::AccountStorage;
use crate::{Account, Error};

/// Account storage keyed by account number in a hash map.
/// Lookups are valid at any time, so [`AccountStorage::prepare`] is a no-op.
#[derive(Debug, Default)]
pub struct HashStore {
    accounts: HashMap<String, Account>,
}

impl HashStore {
    pub fn new() -> Self {
        Self {
            accounts: HashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            accounts: HashMap::with_capacity(capacity),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }
}

impl AccountStorage for HashStore {
    /// Stores a new account, or returns an error if the number is taken.
    fn add(&mut self, account: Account) -> Result<(), Error> {
        if self.accounts.contains_key(account.number()) {
            return Err(Error::DuplicateAccount(account.number().to_owned()));
        }
        self.accounts.insert(account.number().to_owned(), account);
        Ok(())
    }

    fn find(&self, number: &str) -> Result<Option<&Account>, Error> {
        Ok(self.accounts.get(number))
    }

    fn len(&self) -> usize {
        self.accounts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BinarySearchStore;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_store_is_empty() {
        let store = HashStore::new();
        assert!(store.is_empty());
        assert_eq!(store.find("0000000001"), Ok(None));
    }

    #[test]
    fn test_find_without_prepare() {
        let mut store = HashStore::new();
        store
            .add(Account::with_balance("0000000002", dec!(7)))
            .unwrap();
        store.add(Account::new("0000000001")).unwrap();

        let account = store.find("0000000002").unwrap().unwrap();
        assert_eq!(account.balance(), dec!(7));
        assert_eq!(store.find("9999999999"), Ok(None));
    }

    #[test]
    fn test_duplicate_account_is_rejected() {
        let mut store = HashStore::new();
        store
            .add(Account::with_balance("0000000001", dec!(1)))
            .unwrap();

        let result = store.add(Account::with_balance("0000000001", dec!(2)));
        assert!(matches!(result, Err(Error::DuplicateAccount(n)) if n == "0000000001"));

        // Verify original account remains unchanged
        assert_eq!(store.len(), 1);
        assert_eq!(
            store.find("0000000001").unwrap().unwrap().balance(),
            dec!(1)
        );
    }

    #[test]
    fn test_agrees_with_binary_search_store() {
        let mut hash = HashStore::with_capacity(100);
        let mut sorted = BinarySearchStore::with_capacity(100);
        for i in (0..100u32).rev().step_by(3) {
            let account = Account::with_balance(format!("{:010}", i), i.into());
            hash.add(account.clone()).unwrap();
            AccountStorage::add(&mut sorted, account).unwrap();
        }
        hash.prepare();
        sorted.prepare();

        assert_eq!(hash.len(), sorted.len());
        for i in 0..110u32 {
            let number = format!("{:010}", i);
            assert_eq!(
                AccountStorage::find(&hash, &number),
                AccountStorage::find(&sorted, &number),
                "account {}",
                number
            );
        }
        let mut from_hash: Vec<_> = hash.iter().cloned().collect();
        from_hash.sort_by(|a, b| a.number().cmp(b.number()));
        assert!(from_hash.iter().eq(sorted.iter()));
    }
}
