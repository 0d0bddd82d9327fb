//! The slice of the DOM the widget reads and writes.
//!
//! Every method takes `&self`: a document is shared, mutable state owned by
//! the host, and handles are cheap references into it. Mutations that fail on
//! the host side (detached nodes, wrong element type) are ignored.

use std::fmt::Debug;

pub trait Dom {
    /// Handle to one element. Equality is identity.
    type Element: Clone + PartialEq + Debug;

    /// Element children, in document order.
    fn children(&self, parent: &Self::Element) -> Vec<Self::Element>;
    fn parent(&self, element: &Self::Element) -> Option<Self::Element>;
    /// Next element sibling (text nodes skipped).
    fn next_sibling(&self, element: &Self::Element) -> Option<Self::Element>;

    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;
    fn set_attribute(&self, element: &Self::Element, name: &str, value: &str);
    fn remove_attribute(&self, element: &Self::Element, name: &str);

    fn has_class(&self, element: &Self::Element, class: &str) -> bool;
    /// Add (`enabled`) or remove a class.
    fn set_class(&self, element: &Self::Element, class: &str, enabled: bool);

    /// Replace the element's contents with a single text node.
    fn set_text(&self, element: &Self::Element, text: &str);
    /// Checked state of a radio/checkbox input; `false` for anything else.
    fn is_checked(&self, element: &Self::Element) -> bool;

    /// Document-wide id lookup. Detached elements are not found.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    fn remove_child(&self, parent: &Self::Element, child: &Self::Element);
    fn append_child(&self, parent: &Self::Element, child: &Self::Element);

    fn active_element(&self) -> Option<Self::Element>;
    fn focus(&self, element: &Self::Element, prevent_scroll: bool);

    fn has_attribute(&self, element: &Self::Element, name: &str) -> bool {
        self.attribute(element, name).is_some()
    }

    /// Inclusive containment, like `Node.contains`.
    fn contains(&self, ancestor: &Self::Element, element: &Self::Element) -> bool {
        let mut current = Some(element.clone());
        while let Some(node) = current {
            if &node == ancestor {
                return true;
            }
            current = self.parent(&node);
        }
        false
    }

    /// Descendants of `root` (excluding `root`) carrying `class`, in document order.
    fn descendants_with_class(&self, root: &Self::Element, class: &str) -> Vec<Self::Element> {
        let mut found = Vec::new();
        let mut stack: Vec<Self::Element> = self.children(root).into_iter().rev().collect();
        while let Some(node) = stack.pop() {
            if self.has_class(&node, class) {
                found.push(node.clone());
            }
            stack.extend(self.children(&node).into_iter().rev());
        }
        found
    }

    fn first_with_class(&self, root: &Self::Element, class: &str) -> Option<Self::Element> {
        self.descendants_with_class(root, class).into_iter().next()
    }

    /// Nearest inclusive ancestor of `element` carrying `class`, not looking
    /// past `boundary`.
    fn closest_with_class(
        &self,
        element: &Self::Element,
        class: &str,
        boundary: &Self::Element,
    ) -> Option<Self::Element> {
        let mut current = Some(element.clone());
        while let Some(node) = current {
            if self.has_class(&node, class) {
                return Some(node);
            }
            if &node == boundary {
                return None;
            }
            current = self.parent(&node);
        }
        None
    }
}
