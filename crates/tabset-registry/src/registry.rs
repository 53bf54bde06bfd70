//! Element registry
//!
//! Holds every element the host has registered and answers the switcher's
//! queries. Group and item values are compared as plain data, so there is no
//! selector syntax for a hostile value to escape into.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::element::{ElementHandle, ElementKind, PanelElement};
use crate::error::RegistryError;
use crate::markup::tab_pair;
use crate::Result;

pub struct ElementRegistry {
    /// Registered elements keyed by handle id
    elements: Arc<RwLock<HashMap<String, PanelElement>>>,
}

impl ElementRegistry {
    pub fn new() -> Self {
        Self {
            elements: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Register an element. Elements start inactive; the host markup decides
    /// initial activation by calling `set_active` afterwards.
    pub fn insert(&self, group: &str, item: &str, kind: ElementKind) -> ElementHandle {
        let element = PanelElement::new(group.to_string(), item.to_string(), kind);
        let handle = element.handle();

        self.elements.write().insert(element.id.clone(), element);

        tracing::debug!(handle = %handle, group = %group, item = %item, kind = %kind, "Registered element");

        handle
    }

    /// Register an element straight from its attribute map.
    ///
    /// Returns `None` when the tab attributes are absent, mirroring how the
    /// host page only wires up nodes that carry them.
    pub fn insert_from_attrs(
        &self,
        attrs: &HashMap<String, String>,
        kind: ElementKind,
    ) -> Option<ElementHandle> {
        let (group, item) = tab_pair(attrs)?;
        Some(self.insert(&group, &item, kind))
    }

    /// Every element in a group, regardless of item.
    pub fn find_group(&self, group: &str) -> Vec<ElementHandle> {
        self.elements
            .read()
            .values()
            .filter(|e| e.group == group)
            .map(PanelElement::handle)
            .collect()
    }

    /// Elements matching both group and item.
    pub fn find(&self, group: &str, item: &str) -> Vec<ElementHandle> {
        self.elements
            .read()
            .values()
            .filter(|e| e.group == group && e.item == item)
            .map(PanelElement::handle)
            .collect()
    }

    /// Flip the active marker on one element.
    pub fn set_active(&self, handle: &ElementHandle, active: bool) -> Result<()> {
        let mut elements = self.elements.write();
        let element = elements
            .get_mut(handle.as_str())
            .ok_or_else(|| RegistryError::NotFound(handle.to_string()))?;
        element.active = active;
        Ok(())
    }

    pub fn is_active(&self, handle: &ElementHandle) -> Result<bool> {
        Ok(self.get(handle)?.active)
    }

    /// Get a copy of an element's record.
    pub fn get(&self, handle: &ElementHandle) -> Result<PanelElement> {
        self.elements
            .read()
            .get(handle.as_str())
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(handle.to_string()))
    }

    /// Remove an element. Host-side lifecycle only; the switcher never
    /// creates or destroys elements.
    pub fn remove(&self, handle: &ElementHandle) -> Result<()> {
        self.elements
            .write()
            .remove(handle.as_str())
            .ok_or_else(|| RegistryError::NotFound(handle.to_string()))?;

        tracing::debug!(handle = %handle, "Removed element");

        Ok(())
    }

    /// Handles of the currently active elements in a group.
    pub fn active_in_group(&self, group: &str) -> Vec<ElementHandle> {
        self.elements
            .read()
            .values()
            .filter(|e| e.group == group && e.active)
            .map(PanelElement::handle)
            .collect()
    }

    /// Copy of every registered element, for host inspection.
    pub fn snapshot(&self) -> Vec<PanelElement> {
        self.elements.read().values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.elements.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.read().is_empty()
    }
}

impl Default for ElementRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ElementRegistry {
    fn clone(&self) -> Self {
        Self {
            elements: Arc::clone(&self.elements),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let registry = ElementRegistry::new();
        let handle = registry.insert("langs", "rust", ElementKind::Panel);

        let element = registry.get(&handle).unwrap();
        assert_eq!(element.group, "langs");
        assert_eq!(element.item, "rust");
        assert!(!element.active);
    }

    #[test]
    fn test_find_scopes_by_group_and_item() {
        let registry = ElementRegistry::new();
        let rust_btn = registry.insert("langs", "rust", ElementKind::Button);
        let rust_panel = registry.insert("langs", "rust", ElementKind::Panel);
        registry.insert("langs", "go", ElementKind::Panel);
        registry.insert("editors", "rust", ElementKind::Panel);

        assert_eq!(registry.find_group("langs").len(), 3);

        let mut found = registry.find("langs", "rust");
        found.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        let mut expected = vec![rust_btn, rust_panel];
        expected.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        assert_eq!(found, expected);
    }

    #[test]
    fn test_set_active_and_remove() {
        let registry = ElementRegistry::new();
        let handle = registry.insert("langs", "rust", ElementKind::Panel);

        registry.set_active(&handle, true).unwrap();
        assert!(registry.is_active(&handle).unwrap());
        assert_eq!(registry.active_in_group("langs"), vec![handle.clone()]);

        registry.remove(&handle).unwrap();
        assert!(registry.set_active(&handle, true).is_err());
        assert!(registry.get(&handle).is_err());
    }

    #[test]
    fn test_insert_from_attrs() {
        let registry = ElementRegistry::new();

        let mut attrs = HashMap::new();
        attrs.insert(crate::GROUP_ATTR.to_string(), "langs".to_string());
        attrs.insert(crate::ITEM_ATTR.to_string(), "rust".to_string());

        let handle = registry
            .insert_from_attrs(&attrs, ElementKind::Button)
            .unwrap();
        assert_eq!(registry.get(&handle).unwrap().item, "rust");

        attrs.remove(crate::ITEM_ATTR);
        assert!(registry.insert_from_attrs(&attrs, ElementKind::Button).is_none());
    }

    #[test]
    fn test_hostile_values_stay_data() {
        let registry = ElementRegistry::new();
        registry.insert("langs", "rust", ElementKind::Panel);
        let hostile = registry.insert("langs\"]", "rust", ElementKind::Panel);

        // A quote in the group value matches only itself
        assert_eq!(registry.find_group("langs\"]"), vec![hostile]);
        assert_eq!(registry.find_group("langs").len(), 1);
    }

    #[test]
    fn test_snapshot_serializes() {
        let registry = ElementRegistry::new();
        registry.insert("langs", "rust", ElementKind::Panel);

        let json = serde_json::to_string(&registry.snapshot()).unwrap();
        assert!(json.contains("\"kind\":\"panel\""));
        assert!(json.contains("\"active\":false"));
    }
}
