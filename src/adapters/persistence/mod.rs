//! Persistence Adapters - Container Storage Backends
//!
//! Implements the `ContainerStorage` port:
//! - `FileStorage`: a single JSON file replaced atomically (tmp → rename)
//! - `MemoryStorage`: an in-process buffer, used as a test double

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;
