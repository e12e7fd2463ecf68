use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Server not found: {0}")]
    NotFound(i64),

    #[error("Store operation failed: {0}")]
    OperationFailed(String),
}
