//! Persistence port and key-value store implementations.
//!
//! # Responsibility
//! - Define the key-value contract the ledger store persists through.
//! - Isolate SQLite details from service/business orchestration.
//!
//! # Invariants
//! - Each read or write is a single synchronous call with no
//!   partial-completion state visible to the caller.

pub mod kv;

pub use kv::{KvStore, MemoryKvStore, RepoError, RepoResult, SqliteKvStore};
