//! Tabset Element Registry
//!
//! The queryable stand-in for a live document: hosts register their tab
//! controls and panels here, and the switcher finds and flags them through
//! parameterized queries instead of selector strings.

mod element;
mod error;
mod markup;
mod registry;

pub use element::{ElementHandle, ElementKind, PanelElement};
pub use error::RegistryError;
pub use markup::{tab_pair, ACTIVE_CLASS, GROUP_ATTR, ITEM_ATTR};
pub use registry::ElementRegistry;

pub type Result<T> = std::result::Result<T, RegistryError>;
