//! Registry error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Element not found: {0}")]
    NotFound(String),
}
