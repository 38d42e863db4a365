//! Checkpoint storage backends. Both are dumb stores; lifecycle
//! invariants live in the manager.

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
