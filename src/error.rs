//! Error Types
//!
//! One error enum for the whole front-end. None of these are fatal:
//! callers recover locally and keep the page running.

/// Common result type for shop operations
pub type ShopResult<T> = Result<T, ShopError>;

/// Front-end errors
#[derive(Debug, Clone, PartialEq)]
pub enum ShopError {
    /// Persisted snapshot is corrupt or could not be read
    StorageRead(String),
    /// Snapshot could not be written (quota exceeded, storage disabled)
    StorageWrite(String),
    /// Browser storage is not available at all
    StorageUnavailable(String),
    /// Non-positive quantity, non-finite price and similar
    InvalidInput(String),
    /// Contact form is incomplete
    Contact(String),
}

impl std::fmt::Display for ShopError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShopError::StorageRead(msg) => write!(f, "Storage read failed: {}", msg),
            ShopError::StorageWrite(msg) => write!(f, "Storage write failed: {}", msg),
            ShopError::StorageUnavailable(msg) => write!(f, "Storage unavailable: {}", msg),
            ShopError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            ShopError::Contact(msg) => write!(f, "Contact form: {}", msg),
        }
    }
}

impl std::error::Error for ShopError {}

impl From<serde_json::Error> for ShopError {
    fn from(e: serde_json::Error) -> Self {
        ShopError::StorageRead(e.to_string())
    }
}
