//! Persistence adapters for the project repository port.

pub mod memory;
pub mod record;

pub use memory::MemoryProjectRepository;
