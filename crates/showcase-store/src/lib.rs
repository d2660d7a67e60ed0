//! Persistent key-value storage for client session state

pub mod file;
pub mod kv;
pub mod selection;

pub use file::FileStore;
pub use kv::{KeyValueStore, MemoryStore};
pub use selection::{decode_selection, encode_selection, COMPARISON_KEY, MAX_COMPARISON};
