//! Core Kernel - Foundational types for the console bank
//!
//! This crate provides the building blocks shared by the domain and
//! interface layers:
//! - Money with precise decimal arithmetic
//! - Account number allocation with an atomic process-wide counter

pub mod money;
pub mod sequence;

pub use money::{Money, MoneyError, CURRENCY_DECIMAL_PLACES};
pub use sequence::{AccountNumber, AccountNumberSequence, ACCOUNT_NUMBER_PREFIX, ACCOUNT_NUMBER_SEED};
