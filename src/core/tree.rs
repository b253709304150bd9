//! Translation tree model and depth-first traversal.
//!
//! A translation tree is an insertion-ordered JSON object whose values are either
//! nested objects or strings. There is no type tag: a node whose values are all
//! strings is a locale leaf (`{"en": "Add", "ja": "追加"}`), a node whose values
//! are all objects is interior. Every traversal in the crate classifies nodes
//! through [`classify_node`] so flattening and locale extraction never disagree.
//!
//! `null` marks a value left blank in the source. Inside a leaf it is an absent
//! locale; in place of a sub-tree it is a message with no translations at all.

use indexmap::IndexMap;
use serde_json::{Map, Value};

/// An ordered translation tree (one parsed source file).
pub type Tree = Map<String, Value>;

/// The full set of translations for one message, keyed by locale.
pub type LocaleLeaf = IndexMap<String, String>;

/// Structural kind of a tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// At least one string, every other value blank.
    Leaf,
    /// Empty, or every value is a sub-tree or blank.
    Interior,
    /// Not a leaf, but some values are not sub-trees.
    /// Walked like an interior node; the scalar children are skipped.
    Mixed,
}

pub fn classify_node(node: &Tree) -> NodeKind {
    if node.values().any(Value::is_string)
        && node.values().all(|value| value.is_string() || value.is_null())
    {
        NodeKind::Leaf
    } else if node.values().all(|value| value.is_object() || value.is_null()) {
        NodeKind::Interior
    } else {
        NodeKind::Mixed
    }
}

/// Collect a leaf node's locale map. Callers must have classified it as a leaf.
fn leaf_translations(node: &Tree) -> LocaleLeaf {
    node.iter()
        .filter_map(|(locale, value)| value.as_str().map(|s| (locale.clone(), s.to_string())))
        .collect()
}

/// One step of a tree walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Visit<'a> {
    Leaf {
        path: Vec<&'a str>,
        translations: LocaleLeaf,
    },
    /// A mixed node was entered; `skipped` lists its non-object children.
    Mixed {
        path: Vec<&'a str>,
        skipped: Vec<&'a str>,
    },
}

/// Lazy depth-first walker over a [`Tree`].
///
/// Children are visited in key insertion order. The walker keeps an explicit
/// stack instead of recursing, so deep trees cannot overflow the call stack.
#[derive(Debug)]
pub struct TreeWalker<'a> {
    stack: Vec<(Vec<&'a str>, Frame<'a>)>,
}

#[derive(Debug)]
enum Frame<'a> {
    Node(&'a Tree),
    /// A blank message: yielded as a leaf without translations.
    Blank,
}

impl<'a> TreeWalker<'a> {
    pub fn new(root: &'a Tree) -> Self {
        Self {
            stack: vec![(Vec::new(), Frame::Node(root))],
        }
    }

    /// Only the leaves, as `(path, translations)` pairs.
    pub fn leaves(self) -> impl Iterator<Item = (Vec<&'a str>, LocaleLeaf)> {
        self.filter_map(|visit| match visit {
            Visit::Leaf { path, translations } => Some((path, translations)),
            Visit::Mixed { .. } => None,
        })
    }

    /// Blank children are only messages under interior nodes; a mixed node skips them.
    fn push_children(&mut self, path: &[&'a str], node: &'a Tree, with_blanks: bool) {
        // Reverse so the first child is popped first.
        for (key, value) in node.iter().rev() {
            let frame = match value {
                Value::Object(child) => Frame::Node(child),
                Value::Null if with_blanks => Frame::Blank,
                _ => continue,
            };
            let mut child_path = path.to_vec();
            child_path.push(key.as_str());
            self.stack.push((child_path, frame));
        }
    }
}

impl<'a> Iterator for TreeWalker<'a> {
    type Item = Visit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((path, frame)) = self.stack.pop() {
            let node = match frame {
                Frame::Node(node) => node,
                Frame::Blank => {
                    return Some(Visit::Leaf {
                        path,
                        translations: LocaleLeaf::new(),
                    });
                }
            };
            match classify_node(node) {
                NodeKind::Leaf => {
                    return Some(Visit::Leaf {
                        path,
                        translations: leaf_translations(node),
                    });
                }
                NodeKind::Interior => self.push_children(&path, node, true),
                NodeKind::Mixed => {
                    self.push_children(&path, node, false);
                    let skipped = node
                        .iter()
                        .filter(|(_, value)| !value.is_object())
                        .map(|(key, _)| key.as_str())
                        .collect();
                    return Some(Visit::Mixed { path, skipped });
                }
            }
        }
        None
    }
}
