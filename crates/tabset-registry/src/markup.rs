//! Markup contract shared with the host page
//!
//! The host tags participating elements with two data attributes and styles
//! the active class; these constants are the only strings both sides must
//! agree on.

use std::collections::HashMap;

/// Attribute naming the group an element belongs to.
pub const GROUP_ATTR: &str = "data-tab-group";

/// Attribute naming the item an element represents.
pub const ITEM_ATTR: &str = "data-tab-item";

/// Class the host's stylesheet gives visual meaning to.
pub const ACTIVE_CLASS: &str = "active";

/// Extract the (group, item) pair from an element's attribute map.
///
/// Returns `None` when either attribute is missing; such elements simply do
/// not participate in tab switching. Values are taken verbatim, quotes and
/// brackets included, since they are only ever compared as data.
pub fn tab_pair(attrs: &HashMap<String, String>) -> Option<(String, String)> {
    let group = attrs.get(GROUP_ATTR)?;
    let item = attrs.get(ITEM_ATTR)?;
    Some((group.clone(), item.clone()))
}
