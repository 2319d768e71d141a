//! Statement and account-detail rendering
//!
//! Pure string builders over a history snapshot and an identity/balance
//! snapshot. Keeping rendering out of the handlers makes the layout
//! testable without driving a whole session.

use std::fmt::Write;

use domain_account::{Account, LedgerEntry};

use crate::config::CliConfig;

const RULE: &str =
    "-----------------------------------------------------------------------------------------------------------";

/// Timestamp layout used on statement rows
pub const STATEMENT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders one statement row
fn statement_row(entry: &LedgerEntry) -> String {
    format!(
        "| {:<19} | {:<22} | {:>10} | {:>12} | {}",
        entry.timestamp().format(STATEMENT_TIME_FORMAT),
        entry.kind().description(),
        entry.amount().to_string(),
        entry.balance_after().to_string(),
        entry.remarks(),
    )
}

/// Renders the full account statement
pub fn statement(account: &Account, config: &CliConfig) -> String {
    let currency = &config.currency_code;
    let mut out = String::new();

    let _ = writeln!(out, "\n--- Account Statement ---");
    let _ = writeln!(out, "Account Holder: {}", account.profile().name);
    let _ = writeln!(out, "Account Number: {}", account.account_number());
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(
        out,
        "| {:<19} | {:<22} | {:<10} | {:<12} | {}",
        "Timestamp",
        "Transaction Type",
        format!("Amount ({currency})"),
        format!("Balance ({currency})"),
        "Remarks",
    );
    let _ = writeln!(out, "{RULE}");

    let history = account.history();
    if history.is_empty() {
        let _ = writeln!(out, "| No transactions found.");
    } else {
        for entry in &history {
            let _ = writeln!(out, "{}", statement_row(entry));
        }
    }

    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Current Balance: {} {currency}", account.balance());
    out
}

/// Renders the account-details panel
pub fn account_details(account: &Account, config: &CliConfig) -> String {
    let profile = account.profile();
    let mut out = String::new();

    let _ = writeln!(out, "\n--- Account Details ---");
    let _ = writeln!(out, "Bank Name:         {}", config.bank_name);
    let _ = writeln!(out, "IFSC Code:         {}", config.ifsc_code);
    let _ = writeln!(out, "Account Holder:    {}", profile.name);
    let _ = writeln!(out, "Account Number:    {}", account.account_number());
    let _ = writeln!(out, "Registered Mobile: {}", profile.mobile);
    let _ = writeln!(out, "PAN Card:          {}", profile.pan);
    let _ = writeln!(out, "Aadhaar Card:      {}", profile.aadhaar);
    let _ = writeln!(out, "Address:           {}", profile.address);
    let _ = writeln!(
        out,
        "Current Balance:   {} {}",
        account.balance(),
        config.currency_code
    );
    out
}

/// Renders the dashboard banner shown above the logged-in menu
pub fn dashboard_header(account: &Account, config: &CliConfig) -> String {
    format!(
        "\n--- {}'s Dashboard ({}) ---\nAccount No: {} | Balance: {} {}\n---------------------------------------------",
        account.profile().name,
        config.bank_name,
        account.account_number(),
        account.balance(),
        config.currency_code,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::Money;
    use domain_account::{
        AadhaarNumber, AccountFactory, EntryKind, HolderProfile, MobileNumber, PanNumber, Pin,
    };
    use rust_decimal_macros::dec;

    fn account() -> Account {
        let profile = HolderProfile::new(
            "Asha Rao",
            MobileNumber::parse("9876543210").unwrap(),
            PanNumber::parse("ABCDE1234F").unwrap(),
            AadhaarNumber::parse("123456789012").unwrap(),
            "12 MG Road, Pune",
        )
        .unwrap();
        AccountFactory::new()
            .open(profile, Pin::parse("1234").unwrap(), Money::new(dec!(1000)))
            .unwrap()
    }

    #[test]
    fn test_statement_lists_every_entry() {
        let mut account = account();
        account
            .deposit(Money::new(dec!(500)), "Self Deposit", EntryKind::Deposit)
            .unwrap();
        account.withdraw(Money::new(dec!(250)), "ATM Withdrawal").unwrap();

        let rendered = statement(&account, &CliConfig::default());
        assert!(rendered.contains("Account Opening"));
        assert!(rendered.contains("Self Deposit"));
        assert!(rendered.contains("ATM Withdrawal"));
        assert!(rendered.contains("Current Balance: 1250.00 INR"));
    }

    #[test]
    fn test_statement_amounts_use_two_decimals() {
        let rendered = statement(&account(), &CliConfig::default());
        assert!(rendered.contains("1000.00"));
        assert!(!rendered.contains("1000 |"));
    }

    #[test]
    fn test_details_show_identity_fields() {
        let rendered = account_details(&account(), &CliConfig::default());
        assert!(rendered.contains("Bharat Bank"));
        assert!(rendered.contains("BBNK0001234"));
        assert!(rendered.contains("9876543210"));
        assert!(rendered.contains("ABCDE1234F"));
        assert!(rendered.contains("123456789012"));
    }

    #[test]
    fn test_details_never_leak_the_pin() {
        let rendered = account_details(&account(), &CliConfig::default());
        assert!(!rendered.contains("1234\n"));
        assert!(!rendered.to_lowercase().contains("pin"));
    }

    #[test]
    fn test_dashboard_header() {
        let rendered = dashboard_header(&account(), &CliConfig::default());
        assert!(rendered.contains("Asha Rao's Dashboard (Bharat Bank)"));
        assert!(rendered.contains("Balance: 1000.00 INR"));
    }
}
