//! Prompt and input-validation loops
//!
//! [`Console`] wraps a reader/writer pair and keeps re-prompting until
//! the user supplies well-formed input, echoing a one-line reason on
//! each rejection. Parsing failures never reach the domain; it only
//! ever sees validated values. Generic over the streams so tests can
//! drive whole sessions from byte buffers.

use std::io::{BufRead, Write};

use core_kernel::Money;
use domain_account::{AadhaarNumber, AccountError, MobileNumber, PanNumber, Pin};

use crate::error::CliError;

/// Console IO with retry-until-valid prompts
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given streams
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Writes a line of output
    pub fn say(&mut self, message: impl AsRef<str>) -> Result<(), CliError> {
        writeln!(self.writer, "{}", message.as_ref())?;
        Ok(())
    }

    /// Writes a prompt (no newline) and reads one trimmed line
    pub fn prompt(&mut self, prompt: &str) -> Result<String, CliError> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(CliError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Reads a menu choice as a whole number
    pub fn read_menu_choice(&mut self, prompt: &str) -> Result<u32, CliError> {
        loop {
            let line = self.prompt(prompt)?;
            match line.parse::<u32>() {
                Ok(choice) => return Ok(choice),
                Err(_) => self.say("Invalid input. Please enter a whole number.")?,
            }
        }
    }

    /// Reads a monetary amount, any precision as typed
    pub fn read_amount(&mut self, prompt: &str) -> Result<Money, CliError> {
        loop {
            let line = self.prompt(prompt)?;
            match line.parse::<Money>() {
                Ok(amount) => return Ok(amount),
                Err(_) => self.say("Invalid input. Please enter a valid amount (e.g. 100.50).")?,
            }
        }
    }

    /// Reads a non-empty free-text value
    pub fn read_non_empty(&mut self, prompt: &str) -> Result<String, CliError> {
        loop {
            let line = self.prompt(prompt)?;
            if line.is_empty() {
                self.say("Input cannot be empty. Please try again.")?;
            } else {
                return Ok(line);
            }
        }
    }

    /// Reads a 4-digit PIN
    pub fn read_pin(&mut self, prompt: &str) -> Result<Pin, CliError> {
        self.read_validated(prompt, Pin::parse)
    }

    /// Reads a 10-digit mobile number
    pub fn read_mobile(&mut self, prompt: &str) -> Result<MobileNumber, CliError> {
        self.read_validated(prompt, MobileNumber::parse)
    }

    /// Reads a PAN card number
    pub fn read_pan(&mut self, prompt: &str) -> Result<PanNumber, CliError> {
        self.read_validated(prompt, PanNumber::parse)
    }

    /// Reads a 12-digit Aadhaar number
    pub fn read_aadhaar(&mut self, prompt: &str) -> Result<AadhaarNumber, CliError> {
        self.read_validated(prompt, AadhaarNumber::parse)
    }

    /// Loops a domain parse function until it accepts the input
    fn read_validated<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, AccountError>,
    ) -> Result<T, CliError> {
        loop {
            let line = self.prompt(prompt)?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(reason) => self.say(format!("{reason}. Please try again."))?,
            }
        }
    }
}
