//! Shared configuration for the futures order client.
//!
//! Holds the pieces every other crate needs: environment selection
//! (testnet vs production base URLs) and logging initialisation for
//! binaries.

mod environment;
mod logging;

pub use environment::{BinanceEnvironment, ParseEnvironmentError};
pub use logging::init_logging;
