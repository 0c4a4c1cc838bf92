use std::sync::Arc;

use parking_lot::Mutex;

use crate::{Arena, ArenaSettings, Heap};

/// A thread-safe handle to one shared [`Arena`].
///
/// Clones refer to the same storage; every access takes the lock. Cells
/// stay immutable after allocation, so readers on other threads need no
/// further synchronisation once they hold an address.
#[derive(Debug, Clone)]
pub struct SharedArena(Arc<Mutex<Arena>>);

impl SharedArena {
    #[must_use]
    pub fn new(settings: ArenaSettings) -> Self {
        Self(Arc::new(Mutex::new(Arena::new(settings))))
    }

    #[inline]
    pub fn allocated_words(&self) -> usize {
        self.0.lock().allocated_words()
    }
}

impl Default for SharedArena {
    fn default() -> Self {
        Self::new(ArenaSettings::default())
    }
}

impl Heap for SharedArena {
    #[inline]
    fn word(&self, addr: u32, byte_offset: u32) -> u32 {
        self.0.lock().word(addr, byte_offset)
    }

    #[inline]
    fn alloc(&mut self, cell: &[u32]) -> u32 {
        self.0.lock().alloc(cell)
    }
}
