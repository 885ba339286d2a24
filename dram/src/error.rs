/// Memory access faults.

use std::fmt;

use crate::memory::AccessWidth;

/// Why a load or store was rejected.
///
/// Faults are handed back to the caller untouched: the memory block itself
/// never decides whether one becomes a trap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemoryError {
    /// The access span `[address, address + width)` is not fully inside the block.
    /// Covers addresses below the base, spans that run off the end,
    /// and spans whose end would overflow the address space.
    OutOfRange {
        address: u64,
        width: AccessWidth,
    },
    /// Width in bits that is not one of 8, 16, 32 or 64.
    InvalidWidth(u64),
}

pub type Result<T> = std::result::Result<T, MemoryError>;

impl fmt::Display for MemoryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MemoryError::OutOfRange { address, width } =>
                write!(f, "{} access at 0x{:X} is out of range", width, address),
            MemoryError::InvalidWidth(bits) =>
                write!(f, "invalid access width: {}", bits),
        }
    }
}

impl std::error::Error for MemoryError {}
