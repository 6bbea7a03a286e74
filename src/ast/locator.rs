use crate::ast::Node;
use crate::ast::visitor::Visitor;

/// Collects the chain of nodes whose extent covers a byte offset, outermost
/// first.
///
/// Subtrees that end before or start after the offset are pruned. A node
/// without a position is taken to span its parent, so it is descended into
/// but not reported.
pub struct Locator<'ast> {
    target: usize,
    path: Vec<&'ast Node>,
}

impl<'ast> Locator<'ast> {
    pub fn new(target: usize) -> Self {
        Self {
            target,
            path: Vec::new(),
        }
    }

    pub fn find(root: &'ast Node, target: usize) -> Vec<&'ast Node> {
        let mut locator = Self::new(target);
        root.walk(&mut locator);
        locator.path
    }

    /// Innermost node at the offset.
    pub fn innermost(root: &'ast Node, target: usize) -> Option<&'ast Node> {
        Self::find(root, target).pop()
    }
}

impl<'ast> Visitor<'ast> for Locator<'ast> {
    fn enter_node(&mut self, node: &'ast Node) -> bool {
        match node.position() {
            Some(position) if position.contains(self.target) => {
                self.path.push(node);
                true
            }
            Some(_) => false,
            None => true,
        }
    }
}
