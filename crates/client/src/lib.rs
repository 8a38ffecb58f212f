//! Headless Uppercut City simulator.
//!
//! Loads content (built-in or from a data directory), then runs a single
//! battle or the full campaign ladder and prints the result as text or JSON.

pub mod commands;
pub mod config;
pub mod logging;
pub mod session;

pub use config::ClientConfig;
pub use session::Session;
