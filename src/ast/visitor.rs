//! Enter / child-visitor / leave traversal.
//!
//! [`walk`] drives a [`Visitor`] over one node:
//!
//! 1. `enter_node(node)`; on `false` the node's children and its
//!    `leave_node` are skipped.
//! 2. For each filled slot, in the kind's order, `children_visitor(key)` is
//!    asked once and the whole slot (every element of a sequence) is walked
//!    with the visitor it returns.
//! 3. `leave_node(node)`.
//!
//! Returning `false` from `enter_node` only prunes a subtree. A visitor that
//! wants to stop everything has to remember that and keep returning `false`.
//!
//! `walk` recurses once per tree level on the calling thread's stack. Trees
//! from the parser are bounded by its nesting limit
//! ([`ParserOptions::DEFAULT_MAX_DEPTH`]) and walk on a default 2 MiB thread;
//! hand-built trees thousands of levels deep need a thread spawned with a
//! larger stack.
//!
//! [`ParserOptions::DEFAULT_MAX_DEPTH`]: crate::ParserOptions::DEFAULT_MAX_DEPTH

use super::{Child, Children, Node};

pub trait Visitor<'ast> {
    fn enter_node(&mut self, node: &'ast Node) -> bool {
        let _ = node;
        true
    }

    /// The visitor to use for the slot named `key`. Override to hand out a
    /// scoped visitor that knows which slot it is in.
    fn children_visitor(&mut self, key: &'static str) -> Box<dyn Visitor<'ast> + '_> {
        let _ = key;
        Box::new(self)
    }

    fn leave_node(&mut self, node: &'ast Node) {
        let _ = node;
    }
}

impl<'ast, V: Visitor<'ast> + ?Sized> Visitor<'ast> for &mut V {
    fn enter_node(&mut self, node: &'ast Node) -> bool {
        (**self).enter_node(node)
    }

    fn children_visitor(&mut self, key: &'static str) -> Box<dyn Visitor<'ast> + '_> {
        (**self).children_visitor(key)
    }

    fn leave_node(&mut self, node: &'ast Node) {
        (**self).leave_node(node)
    }
}

pub fn walk<'ast>(node: &'ast Node, visitor: &mut dyn Visitor<'ast>) {
    if !visitor.enter_node(node) {
        return;
    }

    node.for_each_child(&mut |key, child| {
        let mut child_visitor = visitor.children_visitor(key);
        match child {
            Child::Node(n) => walk(n, &mut *child_visitor),
            Child::List(nodes) => {
                for n in nodes {
                    walk(n, &mut *child_visitor);
                }
            }
        }
    });

    visitor.leave_node(node);
}
