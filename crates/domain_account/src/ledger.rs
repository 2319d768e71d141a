//! Append-only transaction history records
//!
//! A [`LedgerEntry`] is an immutable fact: once the account has posted
//! it, nothing can change it. Entries are only ever constructed by
//! account operations (the constructor is crate-private) and carry the
//! wall-clock time captured once, at construction.

use chrono::{DateTime, Utc};
use core_kernel::Money;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of ledger entry (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryKind {
    /// First entry on every account
    AccountOpening,
    /// Funds paid in
    Deposit,
    /// Funds taken out
    Withdrawal,
    /// Outgoing transfer leg
    TransferDebit,
    /// Incoming transfer leg (reserved; no operation produces it yet)
    TransferCredit,
}

impl EntryKind {
    /// Statement label for this kind
    pub fn description(&self) -> &'static str {
        match self {
            EntryKind::AccountOpening => "Account Opening",
            EntryKind::Deposit => "Deposit",
            EntryKind::Withdrawal => "Withdrawal",
            EntryKind::TransferDebit => "Fund Transfer (Dr)",
            EntryKind::TransferCredit => "Fund Transfer (Cr)",
        }
    }

    /// Returns true if this kind increases the balance
    pub fn is_credit(&self) -> bool {
        matches!(
            self,
            EntryKind::AccountOpening | EntryKind::Deposit | EntryKind::TransferCredit
        )
    }
}

/// One immutable record in an account's history
///
/// Fields are private and there are no setters; readers go through the
/// accessors. The stored amount is the unsigned magnitude of the
/// movement, with [`LedgerEntry::signed_amount`] applying the kind's
/// sign convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    id: Uuid,
    timestamp: DateTime<Utc>,
    kind: EntryKind,
    amount: Money,
    balance_after: Money,
    remarks: String,
}

impl LedgerEntry {
    /// Creates an entry, capturing the wall-clock time now
    ///
    /// Only account operations may mint entries.
    pub(crate) fn new(
        kind: EntryKind,
        amount: Money,
        balance_after: Money,
        remarks: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            kind,
            amount,
            balance_after,
            remarks: remarks.into(),
        }
    }

    /// Unique entry identifier
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Wall-clock time at which the entry was created
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Entry kind
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Unsigned magnitude of the movement
    pub fn amount(&self) -> Money {
        self.amount
    }

    /// Account balance immediately after this entry was applied
    pub fn balance_after(&self) -> Money {
        self.balance_after
    }

    /// Free-text remarks
    pub fn remarks(&self) -> &str {
        &self.remarks
    }

    /// Amount with the kind's sign convention applied
    ///
    /// Credits are positive, debits negative, so summing signed amounts
    /// over the history reproduces the balance.
    pub fn signed_amount(&self) -> Money {
        if self.kind.is_credit() {
            self.amount
        } else {
            -self.amount
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_descriptions() {
        assert_eq!(EntryKind::AccountOpening.description(), "Account Opening");
        assert_eq!(EntryKind::Deposit.description(), "Deposit");
        assert_eq!(EntryKind::Withdrawal.description(), "Withdrawal");
        assert_eq!(EntryKind::TransferDebit.description(), "Fund Transfer (Dr)");
        assert_eq!(EntryKind::TransferCredit.description(), "Fund Transfer (Cr)");
    }

    #[test]
    fn test_sign_convention() {
        let credit = LedgerEntry::new(
            EntryKind::Deposit,
            Money::new(dec!(100)),
            Money::new(dec!(100)),
            "Self Deposit",
        );
        assert_eq!(credit.signed_amount(), Money::new(dec!(100)));

        let debit = LedgerEntry::new(
            EntryKind::Withdrawal,
            Money::new(dec!(40)),
            Money::new(dec!(60)),
            "ATM Withdrawal",
        );
        assert_eq!(debit.signed_amount(), Money::new(dec!(-40)));
    }

    #[test]
    fn test_timestamp_captured_at_construction() {
        let before = Utc::now();
        let entry = LedgerEntry::new(EntryKind::Deposit, Money::ZERO, Money::ZERO, "");
        let after = Utc::now();
        assert!(entry.timestamp() >= before && entry.timestamp() <= after);
    }

    #[test]
    fn test_serializes_as_record() {
        let entry = LedgerEntry::new(
            EntryKind::TransferDebit,
            Money::new(dec!(25)),
            Money::new(dec!(75)),
            "To: BB100000000002. Rent",
        );
        let json = serde_json::to_string(&entry).unwrap();
        let back: LedgerEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
