/// Main memory
mod ram;
mod dram;
mod width;
mod interface;
mod shared;

pub use self::dram::DRAM;
pub use width::AccessWidth;
pub use interface::MemInterface64;
pub use shared::SharedDRAM;
