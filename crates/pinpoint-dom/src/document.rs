use crate::error::DomError;
use crate::markup;
use crate::node::{ElementData, Node, NodeId, NodeKind};
use crate::selector::{self, SelectorList};
use pinpoint_common::{DocumentQuery, QueryError};

/// Arena-backed document tree.
///
/// Node 0 is always the document root. Detached elements live in the same
/// arena with no parent.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        let root = Node {
            parent: None,
            children: Vec::new(),
            kind: NodeKind::Document,
        };
        Self {
            nodes: vec![root],
            root: NodeId(0),
        }
    }

    /// Parse markup into a new document.
    pub fn parse(markup: &str) -> Result<Self, DomError> {
        markup::parse(markup)
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.node(id).and_then(Node::as_element)
    }

    pub fn is_element(&self, id: NodeId) -> bool {
        self.element(id).is_some()
    }

    fn create_node(&mut self, parent: Option<NodeId>, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            parent,
            children: Vec::new(),
            kind,
        });
        if let Some(parent_id) = parent {
            self.nodes[parent_id.0].children.push(id);
        }
        id
    }

    /// Append an element as the last child of `parent`.
    pub fn create_element(&mut self, parent: NodeId, element: ElementData) -> NodeId {
        let parent = self.node(parent).map(|_| parent);
        self.create_node(parent, NodeKind::Element(element))
    }

    /// Create an element that is not attached to the tree.
    pub fn create_detached_element(&mut self, element: ElementData) -> NodeId {
        self.create_node(None, NodeKind::Element(element))
    }

    pub fn append_text(&mut self, parent: NodeId, text: impl Into<String>) -> NodeId {
        let parent = self.node(parent).map(|_| parent);
        self.create_node(parent, NodeKind::Text(text.into()))
    }

    pub(crate) fn append_comment(&mut self, parent: NodeId, text: impl Into<String>) -> NodeId {
        self.create_node(Some(parent), NodeKind::Comment(text.into()))
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(Node::parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(Node::children).unwrap_or(&[])
    }

    pub fn element_children(&self, id: NodeId) -> Vec<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .filter(|child| self.is_element(*child))
            .collect()
    }

    /// Every connected element in document order.
    pub fn elements(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect_elements(self.root, &mut out);
        out
    }

    fn collect_elements(&self, id: NodeId, out: &mut Vec<NodeId>) {
        for child in self.children(id) {
            if self.is_element(*child) {
                out.push(*child);
            }
            self.collect_elements(*child, out);
        }
    }

    /// First connected element whose `id` attribute equals `id`.
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.elements().into_iter().find(|node| {
            self.element(*node)
                .and_then(|e| e.attribute("id"))
                .is_some_and(|value| value == id)
        })
    }

    /// Concatenated text of the node and all of its descendants.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        match self.node(id).map(Node::kind) {
            Some(NodeKind::Text(text)) => out.push_str(text),
            Some(NodeKind::Document | NodeKind::Element(_)) => {
                for child in self.children(id) {
                    self.collect_text(*child, out);
                }
            }
            _ => {}
        }
    }

    pub fn is_connected(&self, id: NodeId) -> bool {
        let mut cursor = Some(id);
        while let Some(node) = cursor {
            if node == self.root {
                return true;
            }
            cursor = self.parent(node);
        }
        false
    }

    pub fn previous_element_sibling(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.parent(id)?;
        let siblings = self.children(parent);
        let pos = siblings.iter().position(|s| *s == id)?;
        siblings[..pos]
            .iter()
            .rev()
            .copied()
            .find(|s| self.is_element(*s))
    }

    pub fn next_element_sibling(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.parent(id)?;
        let siblings = self.children(parent);
        let pos = siblings.iter().position(|s| *s == id)?;
        siblings[pos + 1..]
            .iter()
            .copied()
            .find(|s| self.is_element(*s))
    }

    pub fn query_selector(&self, selector: &str) -> Result<Option<NodeId>, QueryError> {
        Ok(self.query_selector_all(selector)?.into_iter().next())
    }

    pub fn query_selector_all(&self, selector: &str) -> Result<Vec<NodeId>, QueryError> {
        let list = selector::parse_selector(selector)?;
        Ok(self.select(&list))
    }

    /// Evaluate an already parsed selector list.
    pub fn select(&self, list: &SelectorList) -> Vec<NodeId> {
        self.elements()
            .into_iter()
            .filter(|node| selector::matches(self, *node, list))
            .collect()
    }

    pub fn matches(&self, id: NodeId, selector: &str) -> Result<bool, QueryError> {
        if !self.is_element(id) {
            return Ok(false);
        }
        let list = selector::parse_selector(selector)?;
        Ok(selector::matches(self, id, &list))
    }
}

impl DocumentQuery for Document {
    type Node = NodeId;

    fn query_selector_all(&self, selector: &str) -> Result<Vec<NodeId>, QueryError> {
        Document::query_selector_all(self, selector)
    }

    fn tag_name(&self, node: NodeId) -> String {
        self.element(node)
            .map(|e| e.tag_name.clone())
            .unwrap_or_default()
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.element(node)
            .and_then(|e| e.attribute(name))
            .map(str::to_string)
    }

    fn parent_element(&self, node: NodeId) -> Option<NodeId> {
        self.parent(node).filter(|parent| self.is_element(*parent))
    }

    fn previous_element_sibling(&self, node: NodeId) -> Option<NodeId> {
        Document::previous_element_sibling(self, node)
    }

    fn next_element_sibling(&self, node: NodeId) -> Option<NodeId> {
        Document::next_element_sibling(self, node)
    }

    fn is_connected(&self, node: NodeId) -> bool {
        Document::is_connected(self, node)
    }
}
