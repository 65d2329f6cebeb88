//! Element arena and mutation surface
//!
//! Elements live in a flat arena and are addressed by `NodeId`. Ids are
//! minted by the owning `Document` and stay valid for its lifetime;
//! detaching a node from its parent never invalidates its id. The
//! mutation surface is deliberately small: text, attributes, classes,
//! inline style, and child-list replacement.

use std::collections::BTreeMap;

use crate::error::SurfaceError;
use crate::Result;

/// Handle to an element inside one `Document`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct Element {
    tag: String,
    attrs: BTreeMap<String, String>,
    classes: Vec<String>,
    style: BTreeMap<String, String>,
    text: String,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
}

impl Element {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attrs: BTreeMap::new(),
            classes: Vec::new(),
            style: BTreeMap::new(),
            text: String::new(),
            children: Vec::new(),
            parent: None,
        }
    }
}

pub struct Document {
    nodes: Vec<Element>,
    root: NodeId,
}

impl Document {
    pub fn new() -> Self {
        Self {
            nodes: vec![Element::new("html")],
            root: NodeId(0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn create_element(&mut self, tag: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Element::new(tag));
        id
    }

    fn node(&self, id: NodeId) -> &Element {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Element {
        &mut self.nodes[id.0]
    }

    // === Tree structure ===

    pub fn tag(&self, id: NodeId) -> &str {
        &self.node(id).tag
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// Append `child` as the last child of `parent`, detaching it from
    /// its current parent first. Inserting a node into itself or one of
    /// its own descendants is a hierarchy violation.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        if child == parent || self.is_ancestor(child, parent) {
            return Err(SurfaceError::HierarchyViolation);
        }
        self.detach(child);
        self.node_mut(parent).children.push(child);
        self.node_mut(child).parent = Some(parent);
        Ok(())
    }

    /// Replace `parent`'s child list wholesale. Children absent from the
    /// new list are detached; the rest are reparented in the given order.
    pub fn set_children(&mut self, parent: NodeId, children: Vec<NodeId>) -> Result<()> {
        for &child in &children {
            if child == parent || self.is_ancestor(child, parent) {
                return Err(SurfaceError::HierarchyViolation);
            }
        }
        for old in std::mem::take(&mut self.node_mut(parent).children) {
            self.node_mut(old).parent = None;
        }
        for &child in &children {
            self.detach(child);
            self.node_mut(child).parent = Some(parent);
        }
        self.node_mut(parent).children = children;
        Ok(())
    }

    // Fast path for freshly created, never-attached nodes (HTML import).
    pub(crate) fn adopt(&mut self, parent: NodeId, child: NodeId) {
        self.node_mut(parent).children.push(child);
        self.node_mut(child).parent = Some(parent);
    }

    fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.node(id).parent {
            self.node_mut(parent).children.retain(|&c| c != id);
            self.node_mut(id).parent = None;
        }
    }

    fn is_ancestor(&self, candidate: NodeId, node: NodeId) -> bool {
        let mut current = self.node(node).parent;
        while let Some(id) = current {
            if id == candidate {
                return true;
            }
            current = self.node(id).parent;
        }
        false
    }

    /// Pre-order walk of the subtree under `id`, excluding `id` itself.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.node(id).children.iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.node(next).children.iter().rev());
        }
        out
    }

    // === Text ===

    pub fn text(&self, id: NodeId) -> &str {
        &self.node(id).text
    }

    pub fn set_text(&mut self, id: NodeId, text: &str) {
        self.node_mut(id).text = text.to_string();
    }

    pub(crate) fn append_text(&mut self, id: NodeId, text: &str) {
        let own = &mut self.node_mut(id).text;
        if !own.is_empty() {
            own.push(' ');
        }
        own.push_str(text);
    }

    // === Attributes ===

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.node(id).attrs.get(name).map(String::as_str)
    }

    pub fn set_attr(&mut self, id: NodeId, name: &str, value: &str) {
        self.node_mut(id)
            .attrs
            .insert(name.to_string(), value.to_string());
    }

    // === Classes ===

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.node(id).classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if !self.has_class(id, class) {
            self.node_mut(id).classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        self.node_mut(id).classes.retain(|c| c != class);
    }

    // === Inline style ===

    pub fn style(&self, id: NodeId, property: &str) -> Option<&str> {
        self.node(id).style.get(property).map(String::as_str)
    }

    pub fn set_style(&mut self, id: NodeId, property: &str, value: &str) {
        self.node_mut(id)
            .style
            .insert(property.to_string(), value.to_string());
    }

    // === Queries ===

    /// Elements under `root` (inclusive) carrying `class`, in document order.
    pub fn find_by_class(&self, root: NodeId, class: &str) -> Vec<NodeId> {
        let mut out = Vec::new();
        if self.has_class(root, class) {
            out.push(root);
        }
        out.extend(
            self.descendants(root)
                .into_iter()
                .filter(|&id| self.has_class(id, class)),
        );
        out
    }

    /// First element under `root` (inclusive) whose `id` attribute matches.
    pub fn find_by_id(&self, root: NodeId, value: &str) -> Option<NodeId> {
        if self.attr(root, "id") == Some(value) {
            return Some(root);
        }
        self.descendants(root)
            .into_iter()
            .find(|&id| self.attr(id, "id") == Some(value))
    }

    /// True when `node` is `ancestor` or sits somewhere below it.
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        node == ancestor || self.is_ancestor(ancestor, node)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
