//! Domain-specific errors for the account storage layer.
//!
//! A missing account is not an error: lookups return `Ok(None)` for it.
//! These variants cover misuse of a store rather than technical failures
//! such as I/O or CSV parsing, which the runners report separately.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("account already exists: {0}")]
    DuplicateAccount(String),
    #[error("store must be sorted before lookups")]
    StoreNotSorted,
}
