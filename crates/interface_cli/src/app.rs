//! Menu loops and operation handlers
//!
//! [`App`] wires the console prompts to the account domain: it collects
//! validated input, calls the aggregate, and renders the structured
//! result (or the failure reason) as a one-line message before
//! returning to the menu. Attempt counting for login and PIN
//! re-verification lives here; the domain's `validate_pin` is
//! stateless by design.

use std::io::{BufRead, Write};

use core_kernel::Money;
use domain_account::{AccountFactory, EntryKind, HolderProfile};

use crate::config::CliConfig;
use crate::console::Console;
use crate::error::CliError;
use crate::session::Session;
use crate::statement;

/// The interactive console application
pub struct App<R, W> {
    console: Console<R, W>,
    config: CliConfig,
    factory: AccountFactory,
    session: Session,
}

impl<R: BufRead, W: Write> App<R, W> {
    /// Creates an application over the given IO streams
    pub fn new(config: CliConfig, reader: R, writer: W) -> Self {
        Self {
            console: Console::new(reader, writer),
            config,
            factory: AccountFactory::new(),
            session: Session::new(),
        }
    }

    /// Runs the main menu until the user exits
    pub fn run(&mut self) -> Result<(), CliError> {
        self.console
            .say("**************************************************")?;
        self.console
            .say(format!("*          Welcome to {}             *", self.config.bank_name))?;
        self.console
            .say("**************************************************")?;

        loop {
            self.console.say("\n--- Main Menu ---")?;
            self.console.say("1. Create New Account")?;
            self.console.say("2. Login to Existing Account")?;
            self.console.say("3. Exit Application")?;

            match self.console.read_menu_choice("Choose an option: ")? {
                1 => self.handle_create_account()?,
                2 => self.handle_login()?,
                3 => break,
                _ => self.console.say("Invalid option. Please try again.")?,
            }
        }

        self.console.say(format!(
            "\nThank you for banking with {}. Have a great day!",
            self.config.bank_name
        ))
    }

    /// Collects opening details and asks the factory for an account
    fn handle_create_account(&mut self) -> Result<(), CliError> {
        self.console.say("\n--- Create New Account ---")?;
        if self.session.has_account() {
            self.console
                .say("An account already exists in this session.")?;
            self.console
                .say("Note: This demo supports one account at a time.")?;
            return Ok(());
        }

        let name = self.console.read_non_empty("Enter Full Name: ")?;
        let mobile = self
            .console
            .read_mobile("Enter 10-digit Mobile Number: ")?;
        let pan = self
            .console
            .read_pan("Enter PAN Card Number (e.g. ABCDE1234F): ")?;
        let aadhaar = self
            .console
            .read_aadhaar("Enter 12-digit Aadhaar Card Number: ")?;
        let address = self.console.read_non_empty("Enter Full Address: ")?;
        let pin = self.console.read_pin("Create a 4-digit numeric PIN: ")?;

        // The opening minimum is bank policy, enforced here and not in
        // the aggregate.
        let minimum = Money::new(self.config.min_initial_deposit);
        let initial_deposit = loop {
            let amount = self.console.read_amount(&format!(
                "Enter Initial Deposit Amount (Min {minimum}): "
            ))?;
            if amount >= minimum {
                break amount;
            }
            self.console
                .say(format!("Initial deposit must be at least {minimum}."))?;
        };

        let profile = match HolderProfile::new(name, mobile, pan, aadhaar, address) {
            Ok(profile) => profile,
            Err(reason) => return self.console.say(reason.to_string()),
        };

        match self.factory.open(profile, pin, initial_deposit) {
            Ok(account) => {
                self.console.say(format!(
                    "\nAccount created successfully for {}!",
                    account.profile().name
                ))?;
                self.console
                    .say(format!("Your Account Number: {}", account.account_number()))?;
                self.console
                    .say(format!("IFSC Code: {}", self.config.ifsc_code))?;
                self.console
                    .say("Please login to access your account services.")?;
                self.session.install(account);
                Ok(())
            }
            Err(reason) => self.console.say(reason.to_string()),
        }
    }

    /// Login with mobile + PIN, bounded by the configured attempt limit
    fn handle_login(&mut self) -> Result<(), CliError> {
        self.console.say("\n--- Account Login ---")?;
        if !self.session.has_account() {
            return self.console.say(
                "No account has been created in this session. Please create an account first.",
            );
        }

        let max_attempts = self.config.max_login_attempts;
        for attempt in 1..=max_attempts {
            self.console
                .say(format!("\nLogin Attempt {attempt} of {max_attempts}"))?;
            let mobile = self
                .console
                .read_mobile("Enter your registered Mobile Number: ")?;
            let pin = self.console.read_pin("Enter your 4-digit PIN: ")?;

            let holder = self
                .session
                .account()
                .filter(|account| account.profile().mobile == mobile && account.validate_pin(&pin))
                .map(|account| account.profile().name.clone());

            if let Some(name) = holder {
                tracing::info!(attempt, "login succeeded");
                self.console
                    .say(format!("\nLogin Successful! Welcome, {name}."))?;
                return self.dashboard_loop();
            }

            tracing::warn!(attempt, "login attempt failed");
            self.console
                .say("Invalid mobile number or PIN. Please try again.")?;
        }

        self.console
            .say("\nMaximum login attempts reached. Account access locked temporarily for security.")
    }

    /// Menu for the logged-in user; returns on logout
    fn dashboard_loop(&mut self) -> Result<(), CliError> {
        loop {
            let header = self
                .session
                .account()
                .map(|account| statement::dashboard_header(account, &self.config))
                .unwrap_or_default();
            self.console.say(header)?;
            self.console.say("1. Deposit Funds")?;
            self.console.say("2. Withdraw Funds")?;
            self.console.say("3. Fund Transfer")?;
            self.console.say("4. View Account Statement")?;
            self.console.say("5. View Account Details")?;
            self.console.say("6. Edit Profile")?;
            self.console.say("7. Logout")?;

            match self.console.read_menu_choice("Choose an option: ")? {
                1 => self.handle_deposit()?,
                2 => self.handle_withdrawal()?,
                3 => self.handle_transfer()?,
                4 => self.handle_statement()?,
                5 => self.handle_details()?,
                6 => self.handle_edit_profile()?,
                7 => {
                    return self
                        .console
                        .say("\nYou have been logged out successfully.");
                }
                _ => self.console.say("Invalid option. Please try again.")?,
            }
        }
    }

    /// Deposit requires no PIN re-verification
    fn handle_deposit(&mut self) -> Result<(), CliError> {
        self.console.say("\n--- Deposit Funds ---")?;
        let amount = self.console.read_amount("Enter amount to deposit: ")?;

        let message = match self.session.account_mut() {
            Some(account) => match account.deposit(amount, "Self Deposit", EntryKind::Deposit) {
                Ok(entry) => format!(
                    "Amount deposited successfully. Current Balance: {}",
                    entry.balance_after()
                ),
                Err(reason) => reason.to_string(),
            },
            None => return Ok(()),
        };
        self.console.say(message)
    }

    fn handle_withdrawal(&mut self) -> Result<(), CliError> {
        self.console.say("\n--- Withdraw Funds ---")?;
        if !self.verify_pin_for("withdrawal")? {
            return Ok(());
        }

        let amount = self.console.read_amount("Enter amount to withdraw: ")?;
        let message = match self.session.account_mut() {
            Some(account) => match account.withdraw(amount, "ATM Withdrawal") {
                Ok(entry) => format!(
                    "Amount withdrawn successfully. Current Balance: {}",
                    entry.balance_after()
                ),
                Err(reason) => reason.to_string(),
            },
            None => return Ok(()),
        };
        self.console.say(message)
    }

    fn handle_transfer(&mut self) -> Result<(), CliError> {
        self.console.say("\n--- Fund Transfer ---")?;
        if !self.verify_pin_for("fund transfer")? {
            return Ok(());
        }

        let recipient_number = self
            .console
            .read_non_empty("Enter Recipient's Account Number: ")?;
        let recipient_name = self
            .console
            .read_non_empty("Enter Recipient's Name (for remarks): ")?;
        let amount = self.console.read_amount("Enter amount to transfer: ")?;
        let remarks = self
            .console
            .prompt("Enter Remarks/Reason for transfer (optional): ")?;
        let remarks = if remarks.is_empty() {
            format!("Transfer to {recipient_name}")
        } else {
            remarks
        };
        let recipient = format!("{recipient_number} ({recipient_name})");

        let message = match self.session.account_mut() {
            Some(account) => match account.transfer_funds(amount, &recipient, &remarks) {
                Ok(entry) => format!(
                    "Funds transferred successfully. Current Balance: {}",
                    entry.balance_after()
                ),
                Err(reason) => reason.to_string(),
            },
            None => return Ok(()),
        };
        self.console.say(message)
    }

    fn handle_statement(&mut self) -> Result<(), CliError> {
        let rendered = self
            .session
            .account()
            .map(|account| statement::statement(account, &self.config))
            .unwrap_or_default();
        self.console.say(rendered.trim_end())
    }

    fn handle_details(&mut self) -> Result<(), CliError> {
        let rendered = self
            .session
            .account()
            .map(|account| statement::account_details(account, &self.config))
            .unwrap_or_default();
        self.console.say(rendered.trim_end())
    }

    /// Profile submenu; every change except viewing gates on the PIN
    fn handle_edit_profile(&mut self) -> Result<(), CliError> {
        loop {
            self.console.say("\n--- Edit Profile ---")?;
            self.console.say("1. Update Account Holder Name")?;
            self.console.say("2. Update Mobile Number")?;
            self.console.say("3. Update Address")?;
            self.console.say("4. Change PIN")?;
            self.console.say("5. Back to Dashboard")?;

            match self.console.read_menu_choice("Choose an option: ")? {
                1 => {
                    if self.verify_pin_for("updating the holder name")? {
                        let name = self
                            .console
                            .read_non_empty("Enter new Account Holder Name: ")?;
                        if let Some(account) = self.session.account_mut() {
                            account.set_holder_name(name);
                        }
                        self.console
                            .say("Account holder name updated successfully.")?;
                    }
                }
                2 => {
                    if self.verify_pin_for("updating the mobile number")? {
                        let mobile = self
                            .console
                            .read_mobile("Enter new 10-digit Mobile Number: ")?;
                        if let Some(account) = self.session.account_mut() {
                            account.set_mobile(mobile);
                        }
                        self.console.say("Mobile number updated successfully.")?;
                    }
                }
                3 => {
                    if self.verify_pin_for("updating the address")? {
                        let address = self.console.read_non_empty("Enter new Address: ")?;
                        if let Some(account) = self.session.account_mut() {
                            account.set_address(address);
                        }
                        self.console.say("Address updated successfully.")?;
                    }
                }
                4 => self.handle_change_pin()?,
                5 => return Ok(()),
                _ => self.console.say("Invalid option. Please try again.")?,
            }
        }
    }

    fn handle_change_pin(&mut self) -> Result<(), CliError> {
        self.console.say("\n--- Change PIN ---")?;

        let current = self.console.read_pin("Enter current 4-digit PIN: ")?;
        let current_ok = self
            .session
            .account()
            .is_some_and(|account| account.validate_pin(&current));
        if !current_ok {
            return self
                .console
                .say("Incorrect current PIN. PIN change aborted.");
        }

        let new_pin = self.console.read_pin("Enter new 4-digit numeric PIN: ")?;
        let confirmation = self
            .console
            .read_pin("Confirm new 4-digit numeric PIN: ")?;

        if new_pin == confirmation {
            if let Some(account) = self.session.account_mut() {
                account.change_pin(new_pin);
            }
            tracing::info!("pin changed");
            self.console.say("PIN changed successfully.")
        } else {
            self.console.say("New PINs do not match. PIN change aborted.")
        }
    }

    /// PIN gate for sensitive operations, bounded by the configured
    /// attempt limit
    fn verify_pin_for(&mut self, operation: &str) -> Result<bool, CliError> {
        self.console
            .say(format!("PIN verification required for {operation}."))?;

        let max_attempts = self.config.max_pin_attempts;
        for attempt in 1..=max_attempts {
            let pin = self.console.read_pin(&format!(
                "Enter your 4-digit PIN (Attempt {attempt}/{max_attempts}): "
            ))?;
            let verified = self
                .session
                .account()
                .is_some_and(|account| account.validate_pin(&pin));
            if verified {
                return Ok(true);
            }
            self.console.say("Incorrect PIN.")?;
        }

        tracing::warn!(operation, "pin verification abandoned");
        self.console.say(format!(
            "Maximum PIN verification attempts reached. The {operation} was cancelled."
        ))?;
        Ok(false)
    }
}
