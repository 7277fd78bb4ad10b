//! Account storage backed by a vector that is sorted on demand.
//!
//! Accounts are appended in any order during loading. [`BinarySearchStore::sort`]
//! must run after the last insertion and before the first lookup; lookups on
//! a store that has been appended to since its last sort fail with
//! [`Error::StoreNotSorted`] instead of returning wrong answers.

use log::debug;
use std::cmp::Ordering;
use std::collections::HashSet;

use super::AccountStorage;
use crate::{Account, Error};

/// Result of a binary search: the index of the matching account, if any,
/// and how many account numbers were compared to find it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lookup {
    pub index: Option<usize>,
    pub probes: u32,
}

/// Accounts in a vector, searched by binary search once sorted.
///
/// Besides the accounts themselves the store keeps a hash set holding a
/// second copy of every account number, so that duplicates are rejected in
/// `add` while the vector is still unsorted. This costs one extra allocation
/// and roughly one more key's worth of memory per account, and makes `add` a
/// hash lookup plus a push.
#[derive(Debug)]
pub struct BinarySearchStore {
    accounts: Vec<Account>,
    /// Account numbers already stored, to reject duplicates on insertion
    numbers: HashSet<String>,
    sorted: bool,
}

impl Default for BinarySearchStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BinarySearchStore {
    pub fn new() -> Self {
        Self {
            accounts: Vec::new(),
            numbers: HashSet::new(),
            sorted: true,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            accounts: Vec::with_capacity(capacity),
            numbers: HashSet::with_capacity(capacity),
            sorted: true,
        }
    }

    /// Appends an account. The store is unsorted afterwards.
    /// Returns an error if an account with the same number already exists.
    pub fn add(&mut self, account: Account) -> Result<(), Error> {
        if self.numbers.contains(account.number()) {
            return Err(Error::DuplicateAccount(account.number().to_owned()));
        }
        self.numbers.insert(account.number().to_owned());
        self.accounts.push(account);
        self.sorted = false;
        Ok(())
    }

    /// Sorts accounts ascending by account number. Does nothing if the store
    /// is already sorted.
    pub fn sort(&mut self) {
        if self.sorted {
            return;
        }
        // Numbers are unique, so an unstable sort yields a single ordering.
        self.accounts.sort_unstable_by(|a, b| a.number().cmp(b.number()));
        self.sorted = true;
        debug!("sorted {} accounts", self.accounts.len());
    }

    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    /// Finds the account with the given number.
    pub fn find(&self, number: &str) -> Result<Option<&Account>, Error> {
        let lookup = self.locate(number)?;
        Ok(lookup.index.map(|index| &self.accounts[index]))
    }

    /// Binary search over the sorted accounts, returning the index of the
    /// match along with the number of comparisons made.
    pub fn locate(&self, number: &str) -> Result<Lookup, Error> {
        if !self.sorted {
            return Err(Error::StoreNotSorted);
        }

        // Half-open range [low, high)
        let mut low = 0;
        let mut high = self.accounts.len();
        let mut probes = 0;
        while low < high {
            let mid = low + (high - low) / 2;
            probes += 1;
            match self.accounts[mid].number().cmp(number) {
                Ordering::Equal => {
                    return Ok(Lookup {
                        index: Some(mid),
                        probes,
                    })
                }
                Ordering::Less => low = mid + 1,
                Ordering::Greater => high = mid,
            }
        }
        Ok(Lookup {
            index: None,
            probes,
        })
    }

    /// Resolves an index returned by [`locate`](Self::locate).
    pub fn get(&self, index: usize) -> Option<&Account> {
        self.accounts.get(index)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Account> {
        self.accounts.iter()
    }
}

impl AccountStorage for BinarySearchStore {
    fn add(&mut self, account: Account) -> Result<(), Error> {
        BinarySearchStore::add(self, account)
    }

    fn find(&self, number: &str) -> Result<Option<&Account>, Error> {
        BinarySearchStore::find(self, number)
    }

    fn prepare(&mut self) {
        self.sort();
    }

    fn len(&self) -> usize {
        self.accounts.len()
    }
}
