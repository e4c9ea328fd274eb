//! Persistence layer

pub mod kv;
pub mod seed;
pub mod storage;

pub use kv::{KvBackend, MemoryKv, RedbKv, StorageError, StorageResult};
pub use storage::{ReconcileReport, Storage, keys};
