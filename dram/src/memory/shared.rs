use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;

use crate::error::Result;
use super::{AccessWidth, DRAM, MemInterface64};

/// Main memory that can be shared between threads.
///
/// Every access through the interface takes the lock for exactly one
/// load or store, so a multi-byte store is never seen half-written.
/// Hold the guard from `lock` to make a sequence of accesses atomic.
#[derive(Clone)]
pub struct SharedDRAM {
    inner: Arc<Mutex<DRAM>>,
}

impl From<DRAM> for SharedDRAM {
    fn from(dram: DRAM) -> Self {
        Self {
            inner: Arc::new(Mutex::new(dram))
        }
    }
}

impl SharedDRAM {
    pub fn lock(&self) -> MutexGuard<DRAM> {
        self.inner.lock()
    }
}

impl MemInterface64 for SharedDRAM {
    fn load(&mut self, addr: u64, width: AccessWidth) -> Result<u64> {
        self.inner.lock().load_width(addr, width)
    }
    fn store(&mut self, addr: u64, width: AccessWidth, data: u64) -> Result<()> {
        self.inner.lock().store_width(addr, width, data)
    }
}
