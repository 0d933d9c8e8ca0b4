//! Tab error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TabError {
    #[error("Tab not found: {0}")]
    NotFound(String),

    #[error("Tab cannot be removed: {0}")]
    NotRemovable(String),

    #[error("Invalid tab key: {0}")]
    InvalidKey(String),
}
