// pn532-mifare/src/device/mod.rs

pub mod config;
pub mod handle;

pub use handle::{Device, Initialized, Uninitialized};
