mod class_list;
mod content;
mod node;

pub use class_list::ClassList;
pub use content::Content;
pub use node::Element;

use crate::selector::Selector;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    root.content
        .children()
        .iter()
        .find_map(|child| find_element(child, id))
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    root.content
        .children_mut()
        .iter_mut()
        .find_map(|child| find_element_mut(child, id))
}

/// First element matching `selector` in document order (pre-order, root first).
pub fn query_selector<'a>(root: &'a Element, selector: &Selector) -> Option<&'a Element> {
    if selector.matches(root) {
        return Some(root);
    }

    root.content
        .children()
        .iter()
        .find_map(|child| query_selector(child, selector))
}

/// First element matching `selector` strictly below `scope`.
///
/// The scope element itself is never returned.
pub fn query_selector_in<'a>(scope: &'a Element, selector: &Selector) -> Option<&'a Element> {
    scope
        .content
        .children()
        .iter()
        .find_map(|child| query_selector(child, selector))
}

/// Every element matching `selector`, in document order.
pub fn query_selector_all<'a>(root: &'a Element, selector: &Selector) -> Vec<&'a Element> {
    let mut found = Vec::new();
    collect_matching(root, selector, &mut found);
    found
}

fn collect_matching<'a>(element: &'a Element, selector: &Selector, found: &mut Vec<&'a Element>) {
    if selector.matches(element) {
        found.push(element);
    }
    for child in element.content.children() {
        collect_matching(child, selector, found);
    }
}

/// Whether `target_id` is `ancestor_id` or one of its descendants.
///
/// Returns false if the ancestor is not in the tree.
pub fn contains(root: &Element, ancestor_id: &str, target_id: &str) -> bool {
    find_element(root, ancestor_id).is_some_and(|ancestor| find_element(ancestor, target_id).is_some())
}
