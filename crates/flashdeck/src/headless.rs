//! In-memory DOM for running widgets outside a browser.
//!
//! Models just enough of the browser to make the widget's behavior
//! observable: detaching a subtree that holds focus blurs it, focusing a
//! detached element does nothing, checking a radio unchecks the rest of its
//! group, and id lookup only sees connected elements.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::dom::Dom;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// One recorded `focus()` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusCall {
    pub element: NodeId,
    pub prevent_scroll: bool,
}

#[derive(Debug, Default)]
struct Node {
    tag: String,
    attributes: BTreeMap<String, String>,
    classes: Vec<String>,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
    text: String,
    checked: bool,
}

#[derive(Debug)]
struct Document {
    nodes: Vec<Node>,
    body: NodeId,
    active: Option<NodeId>,
    focus_log: Vec<FocusCall>,
}

/// Cloning shares the same document.
#[derive(Debug, Clone)]
pub struct HeadlessDom {
    inner: Rc<RefCell<Document>>,
}

impl Default for HeadlessDom {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessDom {
    /// Empty document with a `<body>`.
    pub fn new() -> Self {
        let body = Node {
            tag: "body".into(),
            ..Node::default()
        };
        Self {
            inner: Rc::new(RefCell::new(Document {
                nodes: vec![body],
                body: NodeId(0),
                active: None,
                focus_log: Vec::new(),
            })),
        }
    }

    pub fn body(&self) -> NodeId {
        self.inner.borrow().body
    }

    /// Create a detached element.
    pub fn create_element(&self, tag: &str) -> NodeId {
        let mut doc = self.inner.borrow_mut();
        doc.nodes.push(Node {
            tag: tag.to_string(),
            ..Node::default()
        });
        NodeId(doc.nodes.len() - 1)
    }

    /// Create an element with the given classes and append it to `parent`.
    pub fn element(&self, parent: NodeId, tag: &str, classes: &[&str]) -> NodeId {
        let id = self.create_element(tag);
        for class in classes {
            self.set_class(&id, class, true);
        }
        self.append_child(&parent, &id);
        id
    }

    pub fn tag(&self, element: NodeId) -> String {
        self.inner.borrow().nodes[element.0].tag.clone()
    }

    pub fn text(&self, element: NodeId) -> String {
        self.inner.borrow().nodes[element.0].text.clone()
    }

    /// Check a radio input, unchecking every connected input sharing its `name`.
    pub fn check(&self, element: NodeId) {
        let name = self.attribute(&element, "name");
        if let Some(name) = name {
            let body = self.body();
            let mut stack = vec![body];
            while let Some(node) = stack.pop() {
                if node != element && self.attribute(&node, "name").as_deref() == Some(name.as_str()) {
                    self.inner.borrow_mut().nodes[node.0].checked = false;
                }
                stack.extend(self.children(&node));
            }
        }
        self.inner.borrow_mut().nodes[element.0].checked = true;
    }

    pub fn uncheck(&self, element: NodeId) {
        self.inner.borrow_mut().nodes[element.0].checked = false;
    }

    /// Attached to the document (reachable from `<body>`).
    pub fn is_connected(&self, element: NodeId) -> bool {
        let body = self.body();
        self.contains(&body, &element)
    }

    /// Every `focus()` call made so far, including ones that had no effect.
    pub fn focus_log(&self) -> Vec<FocusCall> {
        self.inner.borrow().focus_log.clone()
    }

    fn detach(&self, child: NodeId) {
        let mut doc = self.inner.borrow_mut();
        if let Some(parent) = doc.nodes[child.0].parent.take() {
            doc.nodes[parent.0].children.retain(|c| *c != child);
        }
    }
}

impl Dom for HeadlessDom {
    type Element = NodeId;

    fn children(&self, parent: &NodeId) -> Vec<NodeId> {
        self.inner.borrow().nodes[parent.0].children.clone()
    }

    fn parent(&self, element: &NodeId) -> Option<NodeId> {
        self.inner.borrow().nodes[element.0].parent
    }

    fn next_sibling(&self, element: &NodeId) -> Option<NodeId> {
        let parent = self.parent(element)?;
        let siblings = self.children(&parent);
        let position = siblings.iter().position(|s| s == element)?;
        siblings.get(position + 1).copied()
    }

    fn attribute(&self, element: &NodeId, name: &str) -> Option<String> {
        self.inner.borrow().nodes[element.0].attributes.get(name).cloned()
    }

    fn set_attribute(&self, element: &NodeId, name: &str, value: &str) {
        self.inner.borrow_mut().nodes[element.0]
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn remove_attribute(&self, element: &NodeId, name: &str) {
        self.inner.borrow_mut().nodes[element.0].attributes.remove(name);
    }

    fn has_class(&self, element: &NodeId, class: &str) -> bool {
        self.inner.borrow().nodes[element.0].classes.iter().any(|c| c == class)
    }

    fn set_class(&self, element: &NodeId, class: &str, enabled: bool) {
        let mut doc = self.inner.borrow_mut();
        let classes = &mut doc.nodes[element.0].classes;
        let present = classes.iter().any(|c| c == class);
        if enabled && !present {
            classes.push(class.to_string());
        } else if !enabled {
            classes.retain(|c| c != class);
        }
    }

    fn set_text(&self, element: &NodeId, text: &str) {
        let removed = self.children(element);
        for child in removed {
            self.remove_child(element, &child);
        }
        self.inner.borrow_mut().nodes[element.0].text = text.to_string();
    }

    fn is_checked(&self, element: &NodeId) -> bool {
        self.inner.borrow().nodes[element.0].checked
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        let body = self.body();
        if self.attribute(&body, "id").as_deref() == Some(id) {
            return Some(body);
        }
        // Tree walk instead of an index so detached elements stay invisible.
        let mut stack = vec![body];
        while let Some(node) = stack.pop() {
            for child in self.children(&node) {
                if self.attribute(&child, "id").as_deref() == Some(id) {
                    return Some(child);
                }
                stack.push(child);
            }
        }
        None
    }

    fn remove_child(&self, parent: &NodeId, child: &NodeId) {
        if self.parent(child) != Some(*parent) {
            return;
        }
        let active = self.inner.borrow().active;
        if active.is_some_and(|active| self.contains(child, &active)) {
            self.inner.borrow_mut().active = None;
        }
        self.detach(*child);
    }

    fn append_child(&self, parent: &NodeId, child: &NodeId) {
        if self.contains(child, parent) {
            return;
        }
        self.detach(*child);
        let mut doc = self.inner.borrow_mut();
        doc.nodes[child.0].parent = Some(*parent);
        doc.nodes[parent.0].children.push(*child);
    }

    fn active_element(&self) -> Option<NodeId> {
        self.inner.borrow().active
    }

    fn focus(&self, element: &NodeId, prevent_scroll: bool) {
        let connected = self.is_connected(*element);
        let mut doc = self.inner.borrow_mut();
        doc.focus_log.push(FocusCall {
            element: *element,
            prevent_scroll,
        });
        if connected {
            doc.active = Some(*element);
        }
    }
}
