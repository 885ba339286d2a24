/// Access widths.

use std::fmt;

use crate::error::MemoryError;

/// Size of a single load or store.
///
/// Maps onto the LB/LH/LW/LD and SB/SH/SW/SD instruction families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessWidth {
    Byte = 8,
    Halfword = 16,
    Word = 32,
    Doubleword = 64,
}

impl AccessWidth {
    pub const ALL: [AccessWidth; 4] = [
        AccessWidth::Byte,
        AccessWidth::Halfword,
        AccessWidth::Word,
        AccessWidth::Doubleword
    ];

    /// Width in bits.
    pub const fn bits(self) -> u64 {
        self as u64
    }

    /// Number of bytes moved by the access.
    pub const fn bytes(self) -> usize {
        match self {
            AccessWidth::Byte       => 1,
            AccessWidth::Halfword   => 2,
            AccessWidth::Word       => 4,
            AccessWidth::Doubleword => 8,
        }
    }

    /// Mask covering the low `bits()` bits of a value.
    pub const fn mask(self) -> u64 {
        match self {
            AccessWidth::Doubleword => u64::MAX,
            _ => (1 << self.bits()) - 1,
        }
    }
}

impl TryFrom<u64> for AccessWidth {
    type Error = MemoryError;

    fn try_from(bits: u64) -> Result<Self, Self::Error> {
        match bits {
            8 => Ok(AccessWidth::Byte),
            16 => Ok(AccessWidth::Halfword),
            32 => Ok(AccessWidth::Word),
            64 => Ok(AccessWidth::Doubleword),
            _ => Err(MemoryError::InvalidWidth(bits)),
        }
    }
}

impl fmt::Display for AccessWidth {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}
