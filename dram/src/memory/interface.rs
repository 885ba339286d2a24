/// Memory interface helpers.

use crate::error::Result;
use super::{AccessWidth, DRAM};

/// Use this for memory that is accessed with a 64-bit physical address
/// and a width parameter.
/// This has default impls for each fixed-width access, in the shape of
/// the load and store instructions (LB/LH/LW/LD, SB/SH/SW/SD).
///
/// Loaded values are zero-extended. Sign extension belongs to the CPU.
pub trait MemInterface64 {
    fn load(&mut self, addr: u64, width: AccessWidth) -> Result<u64>;
    fn store(&mut self, addr: u64, width: AccessWidth, data: u64) -> Result<()>;

    fn load_byte(&mut self, addr: u64) -> Result<u8> {
        self.load(addr, AccessWidth::Byte).map(|data| data as u8)
    }
    fn store_byte(&mut self, addr: u64, data: u8) -> Result<()> {
        self.store(addr, AccessWidth::Byte, data.into())
    }

    fn load_halfword(&mut self, addr: u64) -> Result<u16> {
        self.load(addr, AccessWidth::Halfword).map(|data| data as u16)
    }
    fn store_halfword(&mut self, addr: u64, data: u16) -> Result<()> {
        self.store(addr, AccessWidth::Halfword, data.into())
    }

    fn load_word(&mut self, addr: u64) -> Result<u32> {
        self.load(addr, AccessWidth::Word).map(|data| data as u32)
    }
    fn store_word(&mut self, addr: u64, data: u32) -> Result<()> {
        self.store(addr, AccessWidth::Word, data.into())
    }

    fn load_doubleword(&mut self, addr: u64) -> Result<u64> {
        self.load(addr, AccessWidth::Doubleword)
    }
    fn store_doubleword(&mut self, addr: u64, data: u64) -> Result<()> {
        self.store(addr, AccessWidth::Doubleword, data)
    }
}

impl MemInterface64 for DRAM {
    fn load(&mut self, addr: u64, width: AccessWidth) -> Result<u64> {
        self.load_width(addr, width)
    }
    fn store(&mut self, addr: u64, width: AccessWidth, data: u64) -> Result<()> {
        self.store_width(addr, width, data)
    }
}
