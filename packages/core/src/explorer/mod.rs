//! Block explorer abstraction
//!
//! Typed records and the provider trait the fee pipeline reads from. The
//! production implementation lives in [`crate::services::esplora`].

pub mod error;
pub mod provider;
pub mod types;

pub use error::ExplorerError;
pub use provider::BlockExplorer;
pub use types::{Block, Transaction};
