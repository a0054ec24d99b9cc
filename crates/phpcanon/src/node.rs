//! The canonical tree handed to consumers

use indexmap::IndexMap;

/// A uniform view of one syntax node.
///
/// Nodes are built bottom up: a parent is only created once all of its children and
/// attributes are finished, and nothing can be changed afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalNode {
    label: String,
    attributes: IndexMap<String, AttrValue>,
    children: Vec<CanonicalNode>,
}

impl CanonicalNode {
    /// Creates a node with no attributes or children
    pub fn leaf(label: impl Into<String>) -> Self {
        Self::with_children(label, vec![])
    }

    /// Creates a node with the given children, in order
    pub fn with_children(label: impl Into<String>, children: Vec<CanonicalNode>) -> Self {
        let label = label.into();
        debug_assert!(!label.is_empty(), "canonical nodes must have a label");
        Self {
            label,
            attributes: IndexMap::new(),
            children,
        }
    }

    /// Sets an attribute, replacing any previous value with the same name
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_attributes<S: Into<String>>(
        mut self,
        attributes: impl IntoIterator<Item = (S, AttrValue)>,
    ) -> Self {
        self.attributes
            .extend(attributes.into_iter().map(|(name, value)| (name.into(), value)));
        self
    }

    /// The kind name of the source node, or the token name for named declarations
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Attributes in the order they were set
    pub fn attributes(&self) -> &IndexMap<String, AttrValue> {
        &self.attributes
    }

    /// Gets a single attribute
    pub fn attribute(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(name)
    }

    pub fn children(&self) -> &[CanonicalNode] {
        &self.children
    }

    /// Counts this node and all of its descendants. Nodes nested inside attributes are not
    /// counted.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(|child| child.count()).sum::<usize>()
    }

    /// The number of nodes on the longest path from this node down to a leaf
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(|child| child.depth())
            .max()
            .unwrap_or(0)
    }

    /// Iterates over this node and its descendants in pre-order
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }

    /// Takes this node apart
    pub fn into_parts(self) -> (String, IndexMap<String, AttrValue>, Vec<CanonicalNode>) {
        (self.label, self.attributes, self.children)
    }
}

/// Pre-order iterator over a canonical tree
#[derive(Debug)]
pub struct Walk<'a> {
    stack: Vec<&'a CanonicalNode>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a CanonicalNode;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.stack.pop()?;
        self.stack.extend(next.children.iter().rev());
        Some(next)
    }
}

/// The value of a canonical attribute
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    List(Vec<CanonicalNode>),
}

impl AttrValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            AttrValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            AttrValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[CanonicalNode]> {
        match self {
            AttrValue::List(list) => Some(list),
            _ => None,
        }
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Str(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Str(value.to_string())
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Int(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Float(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<Vec<CanonicalNode>> for AttrValue {
    fn from(value: Vec<CanonicalNode>) -> Self {
        AttrValue::List(value)
    }
}
