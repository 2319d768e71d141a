//! Console interface for the bank
//!
//! Thin glue around `domain_account`: prompt/validation loops, an
//! explicit session object, menu dispatch, and statement rendering.
//! All IO is injected (`BufRead`/`Write`), so the complete flow runs in
//! tests against byte buffers.

pub mod app;
pub mod config;
pub mod console;
pub mod error;
pub mod session;
pub mod statement;

pub use app::App;
pub use config::CliConfig;
pub use console::Console;
pub use error::CliError;
pub use session::Session;
