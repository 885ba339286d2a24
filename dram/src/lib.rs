//! Main memory for a simulated 64-bit machine.
//!
//! A single contiguous block of RAM sitting at a fixed physical base
//! address, with 8, 16, 32 and 64-bit little-endian loads and stores.
//! Addresses below the base belong to memory-mapped I/O and are rejected.
mod constants;
mod config;
mod error;
mod memory;
mod utils;

pub use config::MemoryConfig;
pub use constants::dram::{BASE_ADDRESS, CAPACITY};
pub use error::{MemoryError, Result};
pub use memory::{
    AccessWidth,
    DRAM,
    MemInterface64,
    SharedDRAM
};
