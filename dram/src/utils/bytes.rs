/// Byte manipulation.

pub mod u64 {
    /// Get byte `n` of the value, counting from the least significant.
    pub const fn byte(val: u64, n: usize) -> u8 {
        (val >> (8 * n)) as u8
    }

    /// Place a byte at position `n`, with every other bit zero.
    pub const fn from_byte(byte: u8, n: usize) -> u64 {
        (byte as u64) << (8 * n)
    }
}

#[cfg(test)]
mod tests {
    use super::u64;

    #[test]
    fn byte_order() {
        let val = 0x0102_0304_0506_0708;
        assert_eq!(u64::byte(val, 0), 0x08);
        assert_eq!(u64::byte(val, 7), 0x01);
    }

    #[test]
    fn byte_reassembly() {
        let val = 0xDEAD_BEEF_CAFE_F00D;
        let out = (0..8).fold(0, |acc, n| acc | u64::from_byte(u64::byte(val, n), n));
        assert_eq!(out, val);
    }
}
