//! CLI configuration

use rust_decimal::Decimal;
use serde::Deserialize;

/// Console bank configuration
///
/// Every field has a default matching the demo bank; any of them can be
/// overridden through `BANK_`-prefixed environment variables
/// (e.g. `BANK_MIN_INITIAL_DEPOSIT=1000`).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Display name of the bank
    pub bank_name: String,
    /// Branch IFSC code shown on account details
    pub ifsc_code: String,
    /// Currency code shown next to amounts
    pub currency_code: String,
    /// Minimum opening deposit, enforced here before the core is called
    pub min_initial_deposit: Decimal,
    /// Login attempts before access is abandoned
    pub max_login_attempts: u32,
    /// PIN re-verification attempts for sensitive operations
    pub max_pin_attempts: u32,
    /// Log level
    pub log_level: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            bank_name: "Bharat Bank".to_string(),
            ifsc_code: "BBNK0001234".to_string(),
            currency_code: "INR".to_string(),
            min_initial_deposit: Decimal::new(50000, 2),
            max_login_attempts: 3,
            max_pin_attempts: 3,
            log_level: "info".to_string(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from the environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("BANK"))
            .build()?
            .try_deserialize()
    }
}
