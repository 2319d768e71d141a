//! The Account aggregate
//!
//! Account owns the balance, the holder profile, the PIN, and the
//! append-only ledger, and is the only place balance can change. Every
//! mutation either fully applies (balance moves and an entry is posted)
//! or fails with a reason and touches nothing.

use core_kernel::{AccountNumber, AccountNumberSequence, Money};

use crate::error::AccountError;
use crate::ledger::{EntryKind, LedgerEntry};
use crate::profile::{HolderProfile, MobileNumber, Pin};

/// Remarks recorded on a funded opening entry
const OPENING_DEPOSIT_REMARKS: &str = "Account Opening Deposit";

/// Remarks recorded when an account opens without funds
const OPENING_WITHOUT_FUNDS_REMARKS: &str = "Account Created";

/// A single customer bank account
///
/// Invariants, maintained by every operation:
/// - the balance is never negative;
/// - the balance equals the sum of signed entry amounts over the
///   history, taken in insertion order;
/// - the history is append-only, never reordered or truncated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    account_number: AccountNumber,
    profile: HolderProfile,
    pin: Pin,
    balance: Money,
    ledger: Vec<LedgerEntry>,
}

impl Account {
    /// Account number assigned at opening, immutable for life
    pub fn account_number(&self) -> AccountNumber {
        self.account_number
    }

    /// Current balance, the sole source of truth for available funds
    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Holder identity and contact details
    pub fn profile(&self) -> &HolderProfile {
        &self.profile
    }

    /// Independent snapshot of the transaction history
    ///
    /// The caller may sort, filter, or drop the returned entries without
    /// affecting the account's own ledger.
    pub fn history(&self) -> Vec<LedgerEntry> {
        self.ledger.clone()
    }

    /// Adds funds to the account
    ///
    /// `kind` is normally [`EntryKind::Deposit`]; account opening posts
    /// its first deposit as [`EntryKind::AccountOpening`]. Fails with
    /// [`AccountError::AmountNotPositive`] for zero or negative amounts.
    pub fn deposit(
        &mut self,
        amount: Money,
        remarks: &str,
        kind: EntryKind,
    ) -> Result<LedgerEntry, AccountError> {
        if !amount.is_positive() {
            tracing::debug!(%amount, "deposit rejected");
            return Err(AccountError::AmountNotPositive(amount));
        }

        // Checked: a plain `+` would panic past Decimal's range
        self.balance = self
            .balance
            .checked_add(amount)
            .map_err(|_| AccountError::BalanceOverflow)?;
        Ok(self.post(kind, amount, remarks.to_string()))
    }

    /// Removes funds from the account
    ///
    /// Fails without side effects when the amount is not positive or
    /// exceeds the current balance, so the balance can never go negative.
    pub fn withdraw(&mut self, amount: Money, remarks: &str) -> Result<LedgerEntry, AccountError> {
        self.debit_guard(amount)?;

        self.balance = self
            .balance
            .checked_sub(amount)
            .map_err(|_| AccountError::BalanceOverflow)?;
        Ok(self.post(EntryKind::Withdrawal, amount, remarks.to_string()))
    }

    /// Sends funds to another account (simulated: only the debit leg is
    /// recorded)
    ///
    /// Same guards as [`Account::withdraw`]. The recipient descriptor is
    /// folded into the entry remarks.
    pub fn transfer_funds(
        &mut self,
        amount: Money,
        recipient: &str,
        remarks: &str,
    ) -> Result<LedgerEntry, AccountError> {
        self.debit_guard(amount)?;

        self.balance = self
            .balance
            .checked_sub(amount)
            .map_err(|_| AccountError::BalanceOverflow)?;
        let remarks = format!("To: {recipient}. {remarks}");
        Ok(self.post(EntryKind::TransferDebit, amount, remarks))
    }

    /// Compares a candidate PIN against the stored one
    ///
    /// Pure check: no attempt counting, no lockout. Callers gating
    /// sensitive operations track attempts themselves.
    pub fn validate_pin(&self, candidate: &Pin) -> bool {
        &self.pin == candidate
    }

    /// Replaces the PIN; the old PIN stops validating immediately
    pub fn change_pin(&mut self, new_pin: Pin) {
        self.pin = new_pin;
    }

    /// Updates the holder name (profile changes are not ledgered)
    pub fn set_holder_name(&mut self, name: impl Into<String>) {
        self.profile.name = name.into();
    }

    /// Updates the registered mobile number
    pub fn set_mobile(&mut self, mobile: MobileNumber) {
        self.profile.mobile = mobile;
    }

    /// Updates the residential address
    pub fn set_address(&mut self, address: impl Into<String>) {
        self.profile.address = address.into();
    }

    /// Common positivity/sufficiency checks for balance-reducing ops
    fn debit_guard(&self, amount: Money) -> Result<(), AccountError> {
        if !amount.is_positive() {
            tracing::debug!(%amount, "debit rejected");
            return Err(AccountError::AmountNotPositive(amount));
        }
        if amount > self.balance {
            tracing::debug!(%amount, balance = %self.balance, "debit rejected, insufficient funds");
            return Err(AccountError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        Ok(())
    }

    /// Appends an entry carrying the post-operation balance
    fn post(&mut self, kind: EntryKind, amount: Money, remarks: String) -> LedgerEntry {
        let entry = LedgerEntry::new(kind, amount, self.balance, remarks);
        self.ledger.push(entry.clone());
        entry
    }
}

/// Opens accounts and owns the process-wide account number counter
///
/// The counter is an atomic inside the factory rather than a static, so
/// embedding the domain in a larger system (or opening accounts from
/// several threads) still never mints duplicate numbers.
#[derive(Debug, Default)]
pub struct AccountFactory {
    sequence: AccountNumberSequence,
}

impl AccountFactory {
    /// Creates a factory with a fresh number sequence
    pub fn new() -> Self {
        Self {
            sequence: AccountNumberSequence::new(),
        }
    }

    /// Opens a new account
    ///
    /// The balance starts at zero. A positive `initial_deposit` is
    /// posted through the normal deposit path as the opening entry; a
    /// zero deposit records a zero-amount opening entry and leaves the
    /// account unfunded. A negative deposit is refused outright, so the
    /// non-negative balance rule holds from the very first entry.
    pub fn open(
        &self,
        profile: HolderProfile,
        pin: Pin,
        initial_deposit: Money,
    ) -> Result<Account, AccountError> {
        if initial_deposit.is_negative() {
            return Err(AccountError::AmountNotPositive(initial_deposit));
        }

        let mut account = Account {
            account_number: self.sequence.next(),
            profile,
            pin,
            balance: Money::ZERO,
            ledger: Vec::new(),
        };

        if initial_deposit.is_positive() {
            account.deposit(initial_deposit, OPENING_DEPOSIT_REMARKS, EntryKind::AccountOpening)?;
        } else {
            account.post(
                EntryKind::AccountOpening,
                Money::ZERO,
                OPENING_WITHOUT_FUNDS_REMARKS.to_string(),
            );
        }

        tracing::info!(
            account_number = %account.account_number(),
            opening_balance = %account.balance(),
            "account opened"
        );
        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{AadhaarNumber, PanNumber};
    use rust_decimal_macros::dec;

    fn test_profile() -> HolderProfile {
        HolderProfile::new(
            "Asha Rao",
            MobileNumber::parse("9876543210").unwrap(),
            PanNumber::parse("ABCDE1234F").unwrap(),
            AadhaarNumber::parse("123456789012").unwrap(),
            "12 MG Road, Pune",
        )
        .unwrap()
    }

    fn money(value: rust_decimal::Decimal) -> Money {
        Money::new(value)
    }

    #[test]
    fn test_open_with_funds_posts_opening_deposit() {
        let factory = AccountFactory::new();
        let account = factory
            .open(test_profile(), Pin::parse("1234").unwrap(), money(dec!(1000)))
            .unwrap();

        assert_eq!(account.balance(), money(dec!(1000)));
        let history = account.history();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].kind(), EntryKind::AccountOpening);
        assert_eq!(history[0].amount(), money(dec!(1000)));
        assert_eq!(history[0].balance_after(), money(dec!(1000)));
        assert_eq!(history[0].remarks(), "Account Opening Deposit");
    }

    #[test]
    fn test_open_without_funds_records_creation_entry() {
        let factory = AccountFactory::new();
        let account = factory
            .open(test_profile(), Pin::parse("1234").unwrap(), Money::ZERO)
            .unwrap();

        assert_eq!(account.balance(), Money::ZERO);
        let history = account.history();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].kind(), EntryKind::AccountOpening);
        assert!(history[0].amount().is_zero());
        assert_eq!(history[0].remarks(), "Account Created");
    }

    #[test]
    fn test_open_with_negative_deposit_is_refused() {
        let factory = AccountFactory::new();
        let err = factory
            .open(test_profile(), Pin::parse("1234").unwrap(), money(dec!(-5)))
            .unwrap_err();
        assert_eq!(err, AccountError::AmountNotPositive(money(dec!(-5))));
    }

    #[test]
    fn test_factory_assigns_increasing_numbers() {
        let factory = AccountFactory::new();
        let first = factory
            .open(test_profile(), Pin::parse("1111").unwrap(), money(dec!(500)))
            .unwrap();
        let second = factory
            .open(test_profile(), Pin::parse("2222").unwrap(), money(dec!(500)))
            .unwrap();

        assert!(second.account_number() > first.account_number());
    }

    #[test]
    fn test_transfer_synthesizes_remarks() {
        let factory = AccountFactory::new();
        let mut account = factory
            .open(test_profile(), Pin::parse("1234").unwrap(), money(dec!(100)))
            .unwrap();

        let entry = account
            .transfer_funds(money(dec!(40)), "BB100000000002 (Ravi)", "Rent")
            .unwrap();
        assert_eq!(entry.kind(), EntryKind::TransferDebit);
        assert_eq!(entry.remarks(), "To: BB100000000002 (Ravi). Rent");
        assert_eq!(account.balance(), money(dec!(60)));
    }

    #[test]
    fn test_pin_lifecycle() {
        let factory = AccountFactory::new();
        let mut account = factory
            .open(test_profile(), Pin::parse("0012").unwrap(), money(dec!(500)))
            .unwrap();

        assert!(account.validate_pin(&Pin::parse("0012").unwrap()));
        assert!(!account.validate_pin(&Pin::parse("1200").unwrap()));

        account.change_pin(Pin::parse("4321").unwrap());
        assert!(!account.validate_pin(&Pin::parse("0012").unwrap()));
        assert!(account.validate_pin(&Pin::parse("4321").unwrap()));
    }
}
