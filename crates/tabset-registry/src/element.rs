//! Registered element records
//!
//! An element is whatever the host page considers one node of a tab group:
//! the clickable control or the panel it reveals. Both roles may share the
//! same (group, item) pair; the switcher treats them uniformly.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque handle to a registered element.
///
/// Cheap to clone; stays valid until the host removes the element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementHandle(String);

impl ElementHandle {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ElementHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Role an element plays within its group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// The clickable tab control
    Button,
    /// The content panel the control reveals
    Panel,
}

impl ElementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Button => "button",
            ElementKind::Panel => "panel",
        }
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelElement {
    /// Handle id, unique across the registry
    pub id: String,
    /// Group this element belongs to
    pub group: String,
    /// Item this element represents within the group
    pub item: String,
    /// Role within the group
    pub kind: ElementKind,
    /// Presentational active marker
    pub active: bool,
}

impl PanelElement {
    pub(crate) fn new(group: String, item: String, kind: ElementKind) -> Self {
        Self {
            id: ElementHandle::generate().0,
            group,
            item,
            kind,
            active: false,
        }
    }

    pub fn handle(&self) -> ElementHandle {
        ElementHandle(self.id.clone())
    }
}
