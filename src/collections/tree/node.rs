use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};

use tracing::trace;

use crate::value::Tofu;

pub(crate) struct Branch(pub Option<Box<Node>>);

pub(crate) struct Node {
    pub left: Branch,
    pub right: Branch,
    pub value: Tofu,
}

impl Node {
    pub const fn leaf(value: Tofu) -> Node {
        Node {
            left: Branch(None),
            right: Branch(None),
            value,
        }
    }
}

impl Branch {
    /// Places `value` as a new leaf, returning false if an equal value is already present.
    pub fn insert(&mut self, value: Tofu) -> bool {
        let mut slot = &mut self.0;
        while let Some(node) = slot {
            slot = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left.0,
                Ordering::Greater => &mut node.right.0,
                Ordering::Equal => return false,
            };
        }
        *slot = Some(Box::new(Node::leaf(value)));
        true
    }

    /// Removes the node equal to `value`. A node with two children is replaced by its in-order
    /// successor, the minimum of its right subtree.
    pub fn remove(&mut self, value: &Tofu) -> Option<Tofu> {
        let mut slot = &mut self.0;
        loop {
            let ordering = value.cmp(&slot.as_ref()?.value);
            slot = match ordering {
                Ordering::Less => &mut slot.as_mut()?.left.0,
                Ordering::Greater => &mut slot.as_mut()?.right.0,
                Ordering::Equal => break,
            };
        }

        let mut node = slot.take()?;
        match (node.left.0.take(), node.right.0.take()) {
            (None, None) => {},
            (Some(child), None) | (None, Some(child)) => *slot = Some(child),
            (Some(left), Some(right)) => {
                let mut right = Branch(Some(right));
                let successor = right.take_first()?;
                trace!(%successor, "replacing removed node with its successor");
                *slot = Some(Box::new(Node {
                    left: Branch(Some(left)),
                    right,
                    value: successor,
                }));
            },
        }
        Some(node.value)
    }

    pub fn contains(&self, value: &Tofu) -> bool {
        let mut branch = self;
        while let Some(node) = &branch.0 {
            branch = match value.cmp(&node.value) {
                Ordering::Less => &node.left,
                Ordering::Greater => &node.right,
                Ordering::Equal => return true,
            };
        }
        false
    }

    pub fn first(&self) -> Option<&Tofu> {
        let mut node = self.0.as_deref()?;
        while let Some(left) = node.left.0.as_deref() {
            node = left;
        }
        Some(&node.value)
    }

    pub fn last(&self) -> Option<&Tofu> {
        let mut node = self.0.as_deref()?;
        while let Some(right) = node.right.0.as_deref() {
            node = right;
        }
        Some(&node.value)
    }

    /// Detaches the minimum node, moving its right subtree into its place.
    pub fn take_first(&mut self) -> Option<Tofu> {
        let mut slot = &mut self.0;
        while slot.as_ref()?.left.0.is_some() {
            slot = &mut slot.as_mut()?.left.0;
        }

        let mut node = slot.take()?;
        *slot = node.right.0.take();
        Some(node.value)
    }

    /// Returns the number of nodes on the longest path from this branch to a leaf.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node, usize)> =
            self.0.as_deref().map(|node| (node, 1)).into_iter().collect();

        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.0.as_deref().map(|left| (left, depth + 1)));
            stack.extend(node.right.0.as_deref().map(|right| (right, depth + 1)));
        }
        height
    }

    /// Drops every node without recursing, so a degenerate tree can't overflow the stack.
    pub fn clear(&mut self) {
        let mut stack: Vec<Box<Node>> = self.0.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.0.take());
            stack.extend(node.right.0.take());
        }
    }
}

/// Copies the tree node by node from an explicit stack, so the depth of the tree doesn't matter.
impl Clone for Branch {
    fn clone(&self) -> Self {
        let mut root = Branch(None);
        {
            let mut stack: Vec<(&Node, &mut Branch)> = Vec::new();
            if let Some(node) = self.0.as_deref() {
                stack.push((node, &mut root));
            }

            while let Some((source, target)) = stack.pop() {
                let node: &mut Node = target.0.insert(Box::new(Node::leaf(source.value.clone())));
                if let Some(left) = source.left.0.as_deref() {
                    stack.push((left, &mut node.left));
                }
                if let Some(right) = source.right.0.as_deref() {
                    stack.push((right, &mut node.right));
                }
            }
        }
        root
    }
}

impl Debug for Branch {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(node) => write!(
                f,
                "{}\n({:?})\n{}",
                format!("{:?}", node.left)
                    .lines()
                    .map(|l| String::from("┌    ") + l)
                    .collect::<Vec<_>>()
                    .join("\n"),
                node.value,
                format!("{:?}", node.right)
                    .lines()
                    .map(|l| String::from("└    ") + l)
                    .collect::<Vec<_>>()
                    .join("\n")
            ),
            None => write!(f, "-"),
        }
    }
}
