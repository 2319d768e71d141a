//! Account Domain - balance rules and append-only history
//!
//! This crate is the core of the console bank: the [`Account`]
//! aggregate, the immutable [`LedgerEntry`] records it produces, and the
//! validated holder-identity value types.
//!
//! # Key Concepts
//!
//! - **Account**: owns the balance and is the only writer of it
//! - **Ledger Entry**: an immutable record of one balance-affecting or
//!   notable event, carrying the balance after the event
//! - **Account Factory**: opens accounts and holds the atomic account
//!   number counter
//!
//! # Consistency rules
//!
//! The balance always equals the sum of signed entry amounts applied in
//! entry order, and never goes negative. A failed operation posts no
//! entry and moves no money.

pub mod account;
pub mod error;
pub mod ledger;
pub mod profile;

pub use account::{Account, AccountFactory};
pub use error::AccountError;
pub use ledger::{EntryKind, LedgerEntry};
pub use profile::{AadhaarNumber, HolderProfile, MobileNumber, PanNumber, Pin};
