//! Tabset Switcher
//!
//! Grouped tab panel switching: deactivate everything in a group, then
//! activate the elements matching the requested item. The host owns the
//! elements; this crate only flips their active marker.

mod switcher;

pub use switcher::TabSwitcher;

// Re-export the registry surface hosts wire their markup into
pub use tabset_registry::{
    tab_pair, ElementHandle, ElementKind, ElementRegistry, PanelElement, RegistryError,
    ACTIVE_CLASS, GROUP_ATTR, ITEM_ATTR,
};

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
