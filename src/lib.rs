//! Password and passphrase generation, strength estimation and a small
//! saved-password store.

pub mod cli;
pub mod core;
pub mod crypto;
pub mod generators;
pub mod logging;
pub mod models;
pub mod store;
pub mod strength;
pub mod utils;
