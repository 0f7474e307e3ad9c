//! The node tree of a document, and the attributes set on its nodes.
use crate::error::{XmlError, XmlResult};

mod attribute;
pub use attribute::*;

/// A node in the document tree, with a name, a text value, attributes, and children:
/// `<name attr="value">...</name>`
///
/// A node with children is written as a container and its value is ignored.
/// A node without children is written as a leaf, `<name>value</name>`.
///
/// Each node owns its whole subtree; cloning a node deep-copies it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    name: String,
    value: String,
    attributes: Vec<Attribute>,
    children: Vec<Node>,
}
impl Node {
    /// Create a new node with an empty value.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Create a new node with the given text value.
    ///
    /// # Example
    /// ```rust
    /// use xmldoc::Node;
    ///
    /// let node = Node::with_value("title", "Dune");
    /// assert_eq!(node.name(), "title");
    /// assert_eq!(node.value(), "Dune");
    /// ```
    pub fn with_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            ..Self::default()
        }
    }

    /// Get the name of the node.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the name of the node.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Get the text value of the node.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the text value of the node.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Returns true if the node has no children, and will be written with its value inline.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Get the attributes of the node.
    #[must_use]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Get the attributes of the node, for in-place editing.
    pub fn attributes_mut(&mut self) -> &mut Vec<Attribute> {
        &mut self.attributes
    }

    /// Get the children of the node.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Get the children of the node, for in-place editing.
    pub fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }

    /// Append an attribute, and return a reference to the stored copy.
    pub fn add_attribute(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Attribute {
        self.emplace_attribute(Attribute::new(name, value))
    }

    /// Append an already built attribute, and return a reference to it.
    pub fn emplace_attribute(&mut self, attribute: Attribute) -> &mut Attribute {
        self.attributes.push(attribute);
        let last = self.attributes.len() - 1;
        &mut self.attributes[last]
    }

    /// Position of the first attribute with the given name.
    ///
    /// Names are compared exactly, with no case folding.
    #[must_use]
    pub fn find_attribute(&self, name: &str) -> Option<usize> {
        self.attributes.iter().position(|a| a.name == name)
    }

    /// Get the first attribute with the given name.
    ///
    /// # Errors
    /// Returns [`XmlError::NotFound`] if no attribute has that name.
    pub fn get_attribute(&self, name: &str) -> XmlResult<&Attribute> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .ok_or_else(|| XmlError::attribute_not_found(name))
    }

    /// Get the first attribute with the given name, mutably.
    ///
    /// # Errors
    /// Returns [`XmlError::NotFound`] if no attribute has that name.
    pub fn get_attribute_mut(&mut self, name: &str) -> XmlResult<&mut Attribute> {
        self.attributes
            .iter_mut()
            .find(|a| a.name == name)
            .ok_or_else(|| XmlError::attribute_not_found(name))
    }

    /// Deep-copy a node into the children of this one, and return a reference to the stored copy.
    ///
    /// Later changes to `child` do not affect the stored copy.
    pub fn add_child(&mut self, child: &Node) -> &mut Node {
        self.emplace_child(child.clone())
    }

    /// Move a node into the children of this one, and return a reference to it.
    ///
    /// # Example
    /// ```rust
    /// use xmldoc::Node;
    ///
    /// let mut shelf = Node::new("shelf");
    /// let book = shelf.emplace_child(Node::new("book"));
    /// book.add_attribute("isbn", "0441013597");
    ///
    /// assert_eq!(shelf.children().len(), 1);
    /// assert_eq!(shelf.get_child("book").unwrap().attributes().len(), 1);
    /// ```
    pub fn emplace_child(&mut self, child: Node) -> &mut Node {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Position of the first child with the given name.
    #[must_use]
    pub fn find_child(&self, name: &str) -> Option<usize> {
        self.children.iter().position(|c| c.name == name)
    }

    /// Get the first child with the given name.
    ///
    /// # Errors
    /// Returns [`XmlError::NotFound`] if no child has that name.
    pub fn get_child(&self, name: &str) -> XmlResult<&Node> {
        self.children
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| XmlError::child_not_found(name))
    }

    /// Get the first child with the given name, mutably.
    ///
    /// # Errors
    /// Returns [`XmlError::NotFound`] if no child has that name.
    pub fn get_child_mut(&mut self, name: &str) -> XmlResult<&mut Node> {
        self.children
            .iter_mut()
            .find(|c| c.name == name)
            .ok_or_else(|| XmlError::child_not_found(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node() {
        let node = Node::new("root");
        assert_eq!(node.name(), "root");
        assert_eq!(node.value(), "");
        assert!(node.is_leaf());
        assert!(node.attributes().is_empty());
    }

    #[test]
    fn test_attributes_keep_insertion_order() {
        let mut node = Node::new("root");
        node.add_attribute("b", "2");
        node.add_attribute("a", "1");
        node.emplace_attribute(("c", "3").into());

        let names: Vec<_> = node.attributes().iter().map(Attribute::name).collect();
        assert_eq!(names, ["b", "a", "c"]);
    }

    #[test]
    fn test_add_attribute_returns_stored() {
        let mut node = Node::new("root");
        node.add_attribute("id", "1").value = "2".to_string();
        assert_eq!(node.get_attribute("id").unwrap().value(), "2");
    }

    #[test]
    fn test_duplicate_attributes_first_wins() {
        let mut node = Node::new("root");
        node.add_attribute("id", "first");
        node.add_attribute("id", "second");

        assert_eq!(node.attributes().len(), 2);
        assert_eq!(node.find_attribute("id"), Some(0));
        assert_eq!(node.get_attribute("id").unwrap().value(), "first");
    }

    #[test]
    fn test_find_attribute_is_case_sensitive() {
        let mut node = Node::new("root");
        node.add_attribute("Id", "1");
        assert_eq!(node.find_attribute("id"), None);
        assert_eq!(node.find_attribute("Id"), Some(0));
    }

    #[test]
    fn test_missing_attribute_is_not_found() {
        let mut node = Node::new("root");
        assert!(node.get_attribute("id").unwrap_err().is_not_found());
        assert!(node.get_attribute_mut("id").unwrap_err().is_not_found());
    }

    #[test]
    fn test_add_child_deep_copies() {
        let mut child = Node::new("child");
        child.add_attribute("k", "v");
        child.emplace_child(Node::with_value("grandchild", "x"));

        let mut root = Node::new("root");
        root.add_child(&child);

        // Changes to `child` do not reach the stored copy
        child.set_value("changed");
        child.children_mut().clear();

        let stored = root.get_child("child").unwrap();
        assert_eq!(stored.value(), "");
        assert_eq!(stored.children().len(), 1);
        assert_eq!(stored.get_attribute("k").unwrap().value(), "v");
    }

    #[test]
    fn test_add_child_returns_stored() {
        let mut root = Node::new("root");
        root.add_child(&Node::new("child"))
            .add_attribute("id", "7");

        assert_eq!(
            root.get_child("child")
                .unwrap()
                .get_attribute("id")
                .unwrap()
                .value(),
            "7"
        );
    }

    #[test]
    fn test_child_lookup() {
        let mut root = Node::new("root");
        root.emplace_child(Node::with_value("a", "1"));
        root.emplace_child(Node::with_value("b", "2"));
        root.emplace_child(Node::with_value("a", "3"));

        assert!(!root.is_leaf());
        assert_eq!(root.find_child("a"), Some(0));
        assert_eq!(root.find_child("b"), Some(1));
        assert_eq!(root.find_child("c"), None);
        assert_eq!(root.get_child("a").unwrap().value(), "1");

        root.get_child_mut("b").unwrap().set_value("22");
        assert_eq!(root.children()[1].value(), "22");

        let err = root.get_child("c").unwrap_err();
        assert!(matches!(err, XmlError::NotFound { kind: "child", .. }));
    }

    #[test]
    fn test_clone_is_deep() {
        let mut root = Node::new("root");
        root.emplace_child(Node::with_value("leaf", "hello"));

        let mut copy = root.clone();
        copy.get_child_mut("leaf").unwrap().set_value("bye");

        assert_eq!(root.get_child("leaf").unwrap().value(), "hello");
        assert_ne!(root, copy);
    }
}
