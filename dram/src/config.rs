/// Memory configuration.

use std::path::PathBuf;

use crate::constants;

/// Layout and initial contents of main memory.
///
/// `Default` gives the reference machine: 1 MiB at 0x8000_0000, zero-filled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryConfig {
    /// Physical address of the first byte.
    pub base_address:   u64,
    /// Size in bytes.
    pub capacity:       usize,
    /// Raw image copied to the base address on construction.
    pub image_path:     Option<PathBuf>,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            base_address:   constants::dram::BASE_ADDRESS,
            capacity:       constants::dram::CAPACITY,
            image_path:     None,
        }
    }
}
