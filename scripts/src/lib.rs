pub mod command_line;
pub mod contracts;
pub mod credentials;
pub mod deploy;
pub mod error;
pub mod init;
pub mod ledger;
pub mod mint;
pub mod network;
pub mod prompt;
pub mod session;
mod utils;

pub use error::{Error, Result};
