//! charla-storage
//!
//! Key-value slots for chat snapshots: an in-memory map, a directory of
//! JSON files, and the shape-checked snapshot codec on top of them.

pub mod error;
pub mod file;
pub mod memory;
pub mod slot;
pub mod state;

pub use error::StorageError;
pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use slot::KeyValueStore;
