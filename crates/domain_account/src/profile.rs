//! Holder identity fields with parse-time validation
//!
//! Each field the bank captures at account opening is a newtype that can
//! only be constructed from well-formed input, so the aggregate never
//! holds a malformed mobile number or a PIN that lost its leading zeros.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AccountError;

/// Four-digit authorization code
///
/// Stored as a fixed-width digit string: "0012" and "12" are different
/// PINs, which an integer representation would conflate. `Display`
/// redacts the value so a PIN never lands in logs or statements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pin(String);

impl Pin {
    /// Parses a candidate PIN, requiring exactly four ASCII digits
    pub fn parse(candidate: &str) -> Result<Self, AccountError> {
        let trimmed = candidate.trim();
        if trimmed.len() == 4 && trimmed.chars().all(|c| c.is_ascii_digit()) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(AccountError::InvalidPin)
        }
    }
}

impl FromStr for Pin {
    type Err = AccountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pin::parse(s)
    }
}

impl fmt::Display for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "****")
    }
}

/// Ten-digit registered mobile number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MobileNumber(String);

impl MobileNumber {
    /// Parses a candidate mobile number, requiring exactly ten digits
    pub fn parse(candidate: &str) -> Result<Self, AccountError> {
        let trimmed = candidate.trim();
        if trimmed.len() == 10 && trimmed.chars().all(|c| c.is_ascii_digit()) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(AccountError::InvalidMobileNumber(trimmed.to_string()))
        }
    }

    /// Returns the digits as entered
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for MobileNumber {
    type Err = AccountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MobileNumber::parse(s)
    }
}

impl fmt::Display for MobileNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// PAN card number: five letters, four digits, one letter
///
/// Input is case-normalized to uppercase before storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PanNumber(String);

impl PanNumber {
    /// Parses a candidate PAN, e.g. `ABCDE1234F`
    pub fn parse(candidate: &str) -> Result<Self, AccountError> {
        let normalized = candidate.trim().to_ascii_uppercase();
        let bytes = normalized.as_bytes();
        let well_formed = bytes.len() == 10
            && bytes[..5].iter().all(u8::is_ascii_uppercase)
            && bytes[5..9].iter().all(u8::is_ascii_digit)
            && bytes[9].is_ascii_uppercase();

        if well_formed {
            Ok(Self(normalized))
        } else {
            Err(AccountError::InvalidPan(candidate.trim().to_string()))
        }
    }

    /// Returns the normalized PAN
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for PanNumber {
    type Err = AccountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PanNumber::parse(s)
    }
}

impl fmt::Display for PanNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Twelve-digit Aadhaar card number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AadhaarNumber(String);

impl AadhaarNumber {
    /// Parses a candidate Aadhaar number, requiring exactly twelve digits
    pub fn parse(candidate: &str) -> Result<Self, AccountError> {
        let trimmed = candidate.trim();
        if trimmed.len() == 12 && trimmed.chars().all(|c| c.is_ascii_digit()) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(AccountError::InvalidAadhaar(trimmed.to_string()))
        }
    }

    /// Returns the digits as entered
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for AadhaarNumber {
    type Err = AccountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AadhaarNumber::parse(s)
    }
}

impl fmt::Display for AadhaarNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identity and contact details of the account holder
///
/// All fields except the account number (which lives on the account
/// itself) can change later through the profile-edit operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolderProfile {
    /// Full name of the holder
    pub name: String,
    /// Registered mobile number, also the login identifier
    pub mobile: MobileNumber,
    /// PAN card number
    pub pan: PanNumber,
    /// Aadhaar card number
    pub aadhaar: AadhaarNumber,
    /// Residential address
    pub address: String,
}

impl HolderProfile {
    /// Assembles a profile from validated parts
    ///
    /// Name and address are trimmed and must be non-empty.
    pub fn new(
        name: impl Into<String>,
        mobile: MobileNumber,
        pan: PanNumber,
        aadhaar: AadhaarNumber,
        address: impl Into<String>,
    ) -> Result<Self, AccountError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(AccountError::EmptyField("Account holder name"));
        }
        let address = address.into().trim().to_string();
        if address.is_empty() {
            return Err(AccountError::EmptyField("Address"));
        }

        Ok(Self {
            name,
            mobile,
            pan,
            aadhaar,
            address,
        })
    }
}
