//! Low-fee transaction statistics over the most recent blocks of an
//! Esplora-compatible explorer, served over HTTP.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod explorer;
pub mod logging;
pub mod report;
pub mod services;
