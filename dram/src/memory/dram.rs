/// Main memory block
use std::{
    io::{
        Error, ErrorKind, Read, Result as IOResult
    },
    fs::File
};

use crate::{
    config::MemoryConfig,
    constants,
    error::{MemoryError, Result}
};
use super::{AccessWidth, ram::RAM};

/// Main memory: one contiguous, zero-initialised block of RAM
/// sitting behind a base physical address.
///
/// All accesses are little-endian. A span is accepted only if every
/// byte of it lies inside the block. Nothing is written unless the
/// whole span is valid.
///
/// There is no internal locking. Use `SharedDRAM` if more than one
/// thread needs access.
pub struct DRAM {
    base:   u64,
    ram:    RAM,
}

impl Default for DRAM {
    fn default() -> Self {
        Self::with_layout(Self::BASE_ADDRESS, Self::CAPACITY)
    }
}

impl DRAM {
    pub const CAPACITY: usize = constants::dram::CAPACITY;
    pub const BASE_ADDRESS: u64 = constants::dram::BASE_ADDRESS;

    /// Build memory from a config, optionally preloaded with a raw image
    /// at the base address.
    pub fn new(config: MemoryConfig) -> IOResult<Self> {
        if config.capacity == 0 {
            return Err(Error::new(ErrorKind::InvalidInput, "memory capacity must be non-zero"));
        }
        if config.base_address.checked_add(config.capacity as u64).is_none() {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                format!("memory of {} bytes at 0x{:X} overflows the address space", config.capacity, config.base_address)
            ));
        }

        let mut dram = Self::with_layout(config.base_address, config.capacity);

        if let Some(path) = config.image_path {
            let mut image_file = File::open(&path)?;
            let mut buffer = Vec::new();
            image_file.read_to_end(&mut buffer)?;
            dram.load_image(dram.base, &buffer).map_err(|_| Error::new(
                ErrorKind::InvalidData,
                format!("image {} ({} bytes) does not fit in {} bytes of memory", path.display(), buffer.len(), config.capacity)
            ))?;
        }

        Ok(dram)
    }

    /// Build zeroed memory with a custom layout.
    ///
    /// Panics if the capacity is zero or the block would extend past
    /// the end of the 64-bit address space.
    pub fn with_layout(base_address: u64, capacity: usize) -> Self {
        assert!(capacity > 0, "memory capacity must be non-zero");
        assert!(base_address.checked_add(capacity as u64).is_some(), "memory window overflows the address space");
        log::debug!("DRAM: {} bytes at 0x{:X}", capacity, base_address);
        Self {
            base:   base_address,
            ram:    RAM::new(capacity),
        }
    }

    /// Size of the block in bytes.
    pub fn capacity(&self) -> usize {
        self.ram.len()
    }

    /// Physical address of byte 0.
    pub fn base_address(&self) -> u64 {
        self.base
    }

    pub fn ref_mem<'a>(&'a self) -> &'a [u8] {
        self.ram.ref_mem()
    }

    /// Check if a single byte address is backed by this block.
    pub fn contains(&self, address: u64) -> bool {
        self.span_offset(address, 1).is_some()
    }

    /// Translate a physical address into an offset into the block,
    /// checking the whole access span.
    pub fn translate(&self, address: u64, width: AccessWidth) -> Result<usize> {
        self.span_offset(address, width.bytes())
            .ok_or(MemoryError::OutOfRange { address, width })
    }

    /// Load `width` bits from `address`. The result is zero-extended.
    pub fn load(&self, address: u64, width: u64) -> Result<u64> {
        let width = AccessWidth::try_from(width)?;
        self.load_width(address, width)
    }

    /// Store the low `width` bits of `value` to `address`.
    /// Higher bits of `value` are ignored.
    pub fn store(&mut self, address: u64, width: u64, value: u64) -> Result<()> {
        let width = AccessWidth::try_from(width)?;
        self.store_width(address, width, value)
    }

    pub fn load_width(&self, address: u64, width: AccessWidth) -> Result<u64> {
        let offset = self.translate(address, width)?;
        Ok(self.ram.read(offset, width))
    }

    pub fn store_width(&mut self, address: u64, width: AccessWidth, value: u64) -> Result<()> {
        let offset = self.translate(address, width)?;
        self.ram.write(offset, width, value);
        Ok(())
    }

    /// Copy a raw image into memory starting at `address`.
    pub fn load_image(&mut self, address: u64, image: &[u8]) -> Result<()> {
        let offset = self.span_offset(address, image.len())
            .ok_or(MemoryError::OutOfRange { address, width: AccessWidth::Byte })?;
        self.ram.copy_in(offset, image);
        log::info!("DRAM: loaded {} bytes at 0x{:X}", image.len(), address);
        Ok(())
    }

    /// View `len` bytes starting at `address`.
    pub fn read_bytes(&self, address: u64, len: usize) -> Result<&[u8]> {
        let offset = self.span_offset(address, len)
            .ok_or(MemoryError::OutOfRange { address, width: AccessWidth::Byte })?;
        Ok(&self.ram.ref_mem()[offset..(offset + len)])
    }

    /// Offset of `address` if `[address, address + len)` fits inside the block.
    fn span_offset(&self, address: u64, len: usize) -> Option<usize> {
        let offset = address.checked_sub(self.base)?;
        let end = offset.checked_add(len as u64)?;
        if end <= (self.ram.len() as u64) {
            Some(offset as usize)
        } else {
            None
        }
    }
}
