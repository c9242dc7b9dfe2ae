//! Session credentials
//!
//! Token persistence for the API client: a storage capability
//! ([`KeyValueStore`]) and the [`Credentials`] handle that reads and writes
//! the token pair through it.

pub mod credentials;
pub mod store;

pub use credentials::{Credentials, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};
pub use store::{KeyValueStore, MemoryStore, SqliteStore};
