//! The detective's notebook
//!
//! Collected clues go into an unbalanced binary search tree ordered by the raw
//! bytes of the clue text. The shape depends on the order clues were found in
//! and is kept as is; listing always walks it in order.

use std::cmp::Ordering;

#[derive(Debug, Clone)]
struct ClueNode {
    text: String,
    left: Option<usize>,
    right: Option<usize>,
}

/// Ordered set of clue texts
#[derive(Debug, Clone, Default)]
pub struct ClueStore {
    nodes: Vec<ClueNode>,
    root: Option<usize>,
}

impl ClueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a clue. Returns `false` if the same text is already there.
    pub fn insert(&mut self, text: &str) -> bool {
        let Some(mut at) = self.root else {
            self.root = Some(self.alloc(text));
            return true;
        };

        loop {
            let node = &self.nodes[at];
            let side = text.cmp(node.text.as_str());
            let next = match side {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return false,
            };

            match next {
                Some(child) => at = child,
                None => {
                    let fresh = self.alloc(text);
                    let node = &mut self.nodes[at];
                    if side == Ordering::Less {
                        node.left = Some(fresh);
                    } else {
                        node.right = Some(fresh);
                    }
                    return true;
                }
            }
        }
    }

    pub fn contains(&self, text: &str) -> bool {
        let mut cursor = self.root;
        while let Some(at) = cursor {
            let node = &self.nodes[at];
            cursor = match text.cmp(node.text.as_str()) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Clues in ascending byte order
    pub fn inorder(&self) -> Inorder<'_> {
        Inorder {
            nodes: &self.nodes,
            stack: Vec::new(),
            cursor: self.root,
        }
    }

    pub fn iter(&self) -> Inorder<'_> {
        self.inorder()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes on the longest root-to-leaf chain
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(usize, usize)> = self.root.map(|r| (r, 1)).into_iter().collect();
        while let Some((at, depth)) = stack.pop() {
            height = height.max(depth);
            let node = &self.nodes[at];
            stack.extend(node.left.map(|l| (l, depth + 1)));
            stack.extend(node.right.map(|r| (r, depth + 1)));
        }
        height
    }

    fn alloc(&mut self, text: &str) -> usize {
        self.nodes.push(ClueNode {
            text: text.to_string(),
            left: None,
            right: None,
        });
        self.nodes.len() - 1
    }
}

/// In-order walk over a `ClueStore`
pub struct Inorder<'a> {
    nodes: &'a [ClueNode],
    stack: Vec<usize>,
    cursor: Option<usize>,
}

impl<'a> Iterator for Inorder<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(at) = self.cursor {
            self.stack.push(at);
            self.cursor = self.nodes[at].left;
        }
        let at = self.stack.pop()?;
        self.cursor = self.nodes[at].right;
        Some(self.nodes[at].text.as_str())
    }
}

impl<'a> IntoIterator for &'a ClueStore {
    type Item = &'a str;
    type IntoIter = Inorder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.inorder()
    }
}
