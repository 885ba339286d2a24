/// RAM
use crate::utils::bytes;
use super::AccessWidth;

/// Fixed-size byte storage backing the memory block.
///
/// Offsets here are already translated and validated by the owner.
/// An out-of-bounds offset is a bug and will panic.
pub struct RAM(Box<[u8]>);

impl RAM {
    pub fn new(size: usize) -> Self {
        Self(vec![0; size].into_boxed_slice())
    }

    /// Get the size of the memory in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn ref_mem<'a>(&'a self) -> &'a [u8] {
        &self.0
    }

    /// Little-endian read. Byte `offset + k` lands in bits `[8k, 8k+8)`.
    #[inline]
    pub fn read(&self, offset: usize, width: AccessWidth) -> u64 {
        self.0[offset..(offset + width.bytes())].iter()
            .enumerate()
            .fold(0, |acc, (n, byte)| acc | bytes::u64::from_byte(*byte, n))
    }

    /// Little-endian write of the low `width` bits of `data`.
    #[inline]
    pub fn write(&mut self, offset: usize, width: AccessWidth, data: u64) {
        for (n, dest) in self.0[offset..(offset + width.bytes())].iter_mut().enumerate() {
            *dest = bytes::u64::byte(data, n);
        }
    }

    pub fn copy_in(&mut self, offset: usize, data: &[u8]) {
        self.0[offset..(offset + data.len())].copy_from_slice(data);
    }
}
