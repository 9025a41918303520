use serde::{Deserialize, Serialize};

use crate::compose::prefix::Prefix;

/// A node in a declarative view tree, as read from YAML or JSON.
///
/// `id` requests a nested identifier composed with the inherited prefix;
/// `root` starts a fresh namespace. A node may carry at most one of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewNode {
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ViewNode>,

    /// Filled in by propagation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,

    /// Set alongside `identifier`: the node groups its children for accessibility.
    #[serde(default, skip_serializing_if = "is_false")]
    pub container: bool,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl ViewNode {
    pub fn new(kind: &str) -> Self {
        ViewNode {
            kind: kind.to_string(),
            ..Default::default()
        }
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_root(mut self, root: &str) -> Self {
        self.root = Some(root.to_string());
        self
    }

    pub fn with_child(mut self, child: ViewNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: Vec<ViewNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Total node count including self.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(ViewNode::node_count).sum::<usize>()
    }
}

/// What a node asks the propagation layer to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentifierModifier {
    /// Compose with the inherited prefix.
    Nested(String),
    /// Use verbatim, ignoring any inherited prefix.
    Root(String),
}

impl IdentifierModifier {
    /// An empty modifier applies nothing and leaves propagation untouched.
    pub fn is_empty(&self) -> bool {
        match self {
            IdentifierModifier::Nested(s) | IdentifierModifier::Root(s) => s.is_empty(),
        }
    }

    pub fn apply(&self, inherited: &Prefix) -> Prefix {
        match self {
            IdentifierModifier::Nested(fragment) => inherited.compose(fragment),
            IdentifierModifier::Root(identifier) => Prefix::root(identifier.as_str()),
        }
    }
}

/// One identifier applied during propagation, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedIdentifier {
    pub identifier: String,
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub depth: usize,
}
