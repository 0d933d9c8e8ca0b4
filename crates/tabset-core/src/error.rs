//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Tab error: {0}")]
    Tab(#[from] tabset_tabs::TabError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] tabset_presentation::PresentationError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Tabs are not editable (type: {0})")]
    NotEditable(String),

    #[error("Add button is hidden")]
    AddHidden,
}
