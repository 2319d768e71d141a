//! Session state
//!
//! The session object carries the single account this demo supports and
//! is passed to the handlers explicitly, instead of the account living
//! in process-global state. Supporting several accounts later means
//! widening this struct, not redesigning the flow.

use domain_account::Account;

/// State for one console session
#[derive(Debug, Default)]
pub struct Session {
    account: Option<Account>,
}

impl Session {
    /// Creates an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true once an account has been created this session
    pub fn has_account(&self) -> bool {
        self.account.is_some()
    }

    /// Stores the freshly opened account
    pub fn install(&mut self, account: Account) {
        self.account = Some(account);
    }

    /// The session's account, if one was created
    pub fn account(&self) -> Option<&Account> {
        self.account.as_ref()
    }

    /// Mutable access for the operation handlers
    pub fn account_mut(&mut self) -> Option<&mut Account> {
        self.account.as_mut()
    }
}
