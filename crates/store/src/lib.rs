mod errors;
mod memory;
mod store;

pub use errors::StoreError;
pub use memory::MemoryStore;
pub use store::ServerStore;
