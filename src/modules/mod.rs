//! Modules layer - Infrastructure components behind the feature services
//!
//! Contains the key-value storage boundary the ledgers are written through.

pub mod storage;
