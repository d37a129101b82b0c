//! Post store implementations that do not need an external database.

mod memory;

pub use memory::InMemoryPostRepository;
