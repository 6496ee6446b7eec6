#[path = "source/traits.rs"]
mod traits;

#[path = "source/memory.rs"]
mod memory;

pub use memory::MemoryPageSource;
pub use traits::PageSource;
