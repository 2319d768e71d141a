//! Account domain errors

use core_kernel::Money;
use thiserror::Error;

/// Errors that can occur in the account domain
///
/// Every failure here is recoverable: the operation reports the reason
/// and leaves the account untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccountError {
    /// Deposit/withdrawal/transfer amount was zero or negative
    #[error("Amount must be positive, got {0}")]
    AmountNotPositive(Money),

    /// Withdrawal or transfer exceeded the available balance
    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds { requested: Money, available: Money },

    /// Balance arithmetic left the representable decimal range
    #[error("Amount too large: the balance cannot hold it")]
    BalanceOverflow,

    /// PIN was not exactly four digits
    #[error("Invalid PIN: expected exactly 4 digits")]
    InvalidPin,

    /// Mobile number was not exactly ten digits
    #[error("Invalid mobile number {0:?}: expected exactly 10 digits")]
    InvalidMobileNumber(String),

    /// PAN did not match the 5-letters, 4-digits, 1-letter layout
    #[error("Invalid PAN {0:?}: expected format like ABCDE1234F")]
    InvalidPan(String),

    /// Aadhaar number was not exactly twelve digits
    #[error("Invalid Aadhaar number {0:?}: expected exactly 12 digits")]
    InvalidAadhaar(String),

    /// A required free-text field was empty
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
}
