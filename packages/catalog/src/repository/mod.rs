mod memory;
mod traits;

pub use memory::InMemoryRepository;
pub use traits::Repository;
