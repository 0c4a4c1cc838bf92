//! Word-arena allocation for boxed numbers.
//!
//! This crate is decoupled from any specific runtime. Consumers allocate
//! through the [`Heap`] trait and read cells back by byte address; the
//! [`Arena`] here is the reference implementation (a bump allocator over a
//! 32-bit word space), with [`SharedArena`] layering a lock on top for
//! multi-threaded hosts. Cells are immutable once allocated and are never
//! reclaimed by this crate.

mod arena;
mod shared;

pub use arena::{Arena, ArenaSettings, Heap};
pub use shared::SharedArena;
