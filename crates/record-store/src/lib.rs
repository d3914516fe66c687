//! In-memory record store
//!
//! Owns the built-in Machico demo set plus the records created during the
//! session. The store is append-only: records are never deleted, and the
//! only mutation the edit flow performs is replacing a record's news list.
//! State is transient by design and resets with the process.

pub mod error;
pub mod seed;
pub mod store;
pub mod validate;

pub use error::StoreError;
pub use store::RecordStore;
pub use validate::NewRecord;
