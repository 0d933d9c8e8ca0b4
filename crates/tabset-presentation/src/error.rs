//! Presentation error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PresentationError {
    #[error("Unknown {prop} value: {value}")]
    UnknownValue { prop: &'static str, value: String },
}
