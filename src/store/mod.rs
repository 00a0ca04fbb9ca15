//! Key/value persistence for content collections.
//!
//! Every collection lives as one JSON document under a fixed key. Writers replace
//! the whole document; the last writer wins.

mod collection;
mod memory;
mod repository;
mod sqlite;

pub use collection::*;
pub use memory::MemoryStore;
pub use repository::*;
pub use sqlite::{init_database, SqliteStore};

use async_trait::async_trait;

use crate::errors::AppError;

/// Storage key of the account the dashboard is scoped to.
pub const SELECTED_ACCOUNT_KEY: &str = "selected_account_id";

/// Raw text storage behind the content repository.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the text stored under `key`.
    async fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Replace the text stored under `key`.
    async fn set(&self, key: &str, value: String) -> Result<(), AppError>;

    /// Drop `key`. Missing keys are not an error.
    async fn remove(&self, key: &str) -> Result<(), AppError>;
}
