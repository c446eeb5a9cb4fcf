//! Concrete [`BlockExplorer`](crate::explorer::BlockExplorer) implementations.

pub mod esplora;

#[cfg(test)]
pub mod mock_explorer;

pub use esplora::EsploraClient;
