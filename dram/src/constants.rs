/// Constants for the memory layout.

/// Main memory layout of the reference machine.
pub mod dram {
    /// Size of main memory in bytes.
    pub const CAPACITY: usize = 1024 * 1024;
    /// Physical address of the first byte of main memory.
    /// Everything below is reserved for memory-mapped I/O.
    pub const BASE_ADDRESS: u64 = 0x8000_0000;
}
