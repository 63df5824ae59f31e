pub mod json_file;
pub mod memory;
pub mod store;

pub use json_file::JsonFileCache;
pub use memory::MemoryCache;
pub use store::CacheStore;
