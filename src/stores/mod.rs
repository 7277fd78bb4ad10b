//! Storage layer for bank accounts. Provides:
//! - The [`AccountStorage`] capability that the [`Bank`](crate::Bank) talks to
//! - A sorted vector searched by binary search ([`BinarySearchStore`])
//! - A hash map keyed by account number ([`HashStore`])
//!
//! Both stores are synchronous and own their accounts directly.

mod binary_search;
mod hash;

pub use binary_search::{BinarySearchStore, Lookup};
pub use hash::HashStore;

use crate::{Account, Error};

/// Storage capability for accounts keyed by account number.
///
/// Implementations reject duplicate account numbers and report a missing
/// account as `Ok(None)`.
pub trait AccountStorage {
    fn add(&mut self, account: Account) -> Result<(), Error>;

    fn find(&self, number: &str) -> Result<Option<&Account>, Error>;

    /// Makes the storage ready for lookups after a batch of `add` calls.
    fn prepare(&mut self) {}

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
