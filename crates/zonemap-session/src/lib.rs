//! ZoneMap Session Management
//!
//! - One search session per window, created on demand
//! - A session is either empty or holds exactly one resolved location
//! - Only a successful search changes the location
//! - Sessions live in memory and end with their window

mod error;
mod manager;
mod session;

#[cfg(test)]
mod testing;

pub use error::{SearchError, SessionError};
pub use manager::SessionManager;
pub use session::{LocationFound, SearchSession};

pub type Result<T> = std::result::Result<T, SessionError>;
