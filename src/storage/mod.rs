/******************************************************************************
   Author: River Monitoring Authority
   Date: 16/10/26
******************************************************************************/

//! Session token storage
//!
//! The client never keeps tokens in ambient state: every [`HttpClient`](crate::model::http::HttpClient)
//! owns an `Arc<dyn TokenStore>` and reads the current tokens through it.

use crate::error::AppError;
use async_trait::async_trait;

/// JSON file backed store
pub mod file;
/// In-memory store
pub mod memory;

pub use file::FileTokenStore;
pub use memory::MemoryTokenStore;

/// Key-value storage for session tokens
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Returns the value stored under `key`
    async fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> Result<(), AppError>;

    /// Removes `key`. Removing a missing key succeeds
    async fn remove(&self, key: &str) -> Result<(), AppError>;

    /// Stores several entries at once
    ///
    /// Stores that can write every entry in one operation should override this.
    async fn set_all(&self, entries: &[(&str, &str)]) -> Result<(), AppError> {
        for (key, value) in entries {
            self.set(key, value).await?;
        }
        Ok(())
    }
}
