//! Console bank binary
//!
//! Starts the interactive session on stdin/stdout.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin console-bank
//!
//! # Override bank policy through the environment
//! BANK_MIN_INITIAL_DEPOSIT=1000 BANK_MAX_LOGIN_ATTEMPTS=5 cargo run --bin console-bank
//! ```
//!
//! # Environment Variables
//!
//! * `BANK_BANK_NAME` - Display name of the bank
//! * `BANK_IFSC_CODE` - Branch IFSC code
//! * `BANK_CURRENCY_CODE` - Currency code shown next to amounts
//! * `BANK_MIN_INITIAL_DEPOSIT` - Minimum opening deposit
//! * `BANK_MAX_LOGIN_ATTEMPTS` - Login attempts before giving up
//! * `BANK_MAX_PIN_ATTEMPTS` - PIN re-verification attempts
//! * `BANK_LOG_LEVEL` - Log level: trace, debug, info, warn, error

use interface_cli::{App, CliConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = CliConfig::from_env()?;
    init_tracing(&config.log_level);

    tracing::info!(bank = %config.bank_name, "starting console bank session");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut app = App::new(config, stdin.lock(), stdout.lock());
    app.run()?;

    Ok(())
}

/// Initializes the tracing subscriber
///
/// `RUST_LOG` wins when set; logs go to stderr so they never interleave
/// with the menu on stdout.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
