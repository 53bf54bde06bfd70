//! Tab Switcher
//!
//! The single operation of the crate: two passes over one group, clear then
//! mark. The deactivation pass finishes before any activation happens, so a
//! group never shows two items active at once.

use tabset_registry::{ElementHandle, ElementRegistry};

pub struct TabSwitcher {
    registry: ElementRegistry,
}

impl TabSwitcher {
    pub fn new(registry: ElementRegistry) -> Self {
        Self { registry }
    }

    /// Activate `item` within `group`.
    ///
    /// Clears the active marker on every element in the group, then sets it
    /// on every element matching the item. Idempotent; an item that matches
    /// nothing leaves the whole group inactive. Other groups are untouched.
    /// Never fails: unmatched values select nothing, and the values
    /// themselves are passed to the registry as data, never as selector
    /// syntax.
    pub fn activate(&self, group: &str, item: &str) {
        let all = self.registry.find_group(group);
        let target = self.registry.find(group, item);

        for handle in &all {
            self.flag(handle, false);
        }
        for handle in &target {
            self.flag(handle, true);
        }

        tracing::debug!(
            group = %group,
            item = %item,
            cleared = all.len(),
            activated = target.len(),
            "Switched tab"
        );
    }

    /// The item currently active in a group, if any.
    pub fn active_item(&self, group: &str) -> Option<String> {
        self.registry
            .active_in_group(group)
            .first()
            .and_then(|handle| self.registry.get(handle).ok())
            .map(|element| element.item)
    }

    // A handle fetched a moment ago can only go stale if the host removed
    // the element mid-switch, which the single-threaded mutation model rules
    // out. Log and keep going rather than surface an error.
    fn flag(&self, handle: &ElementHandle, active: bool) {
        if let Err(e) = self.registry.set_active(handle, active) {
            tracing::warn!(handle = %handle, "Skipped stale element: {}", e);
        }
    }
}

impl Clone for TabSwitcher {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
        }
    }
}
