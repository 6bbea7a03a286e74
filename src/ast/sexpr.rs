use crate::ast::visitor::Visitor;
use crate::ast::{AttrValue, Node};

/// Renders a tree as an indented S-expression:
///
/// ```text
/// (Assign
///   :variable
///     (Variable
///       :varName
///         (Identifier "$foo"))
///   :expression
///     (Lnumber "1"))
/// ```
///
/// Each slot gets its own scoped visitor carrying the indentation, so the
/// formatter never has to track depth itself.
pub struct SExprFormatter {
    output: String,
    positions: bool,
    comments: bool,
}

impl SExprFormatter {
    pub fn new() -> Self {
        Self {
            output: String::new(),
            positions: false,
            comments: true,
        }
    }

    pub fn with_positions(mut self, positions: bool) -> Self {
        self.positions = positions;
        self
    }

    pub fn with_comments(mut self, comments: bool) -> Self {
        self.comments = comments;
        self
    }

    pub fn finish(self) -> String {
        self.output
    }

    /// Shorthand for formatting a whole tree.
    pub fn format(node: &Node) -> String {
        let mut formatter = Self::new();
        node.walk(&mut formatter);
        formatter.finish()
    }

    fn write(&mut self, s: &str) {
        self.output.push_str(s);
    }

    fn newline(&mut self, indent: usize) {
        self.output.push('\n');
        for _ in 0..indent {
            self.output.push_str("  ");
        }
    }

    fn open(&mut self, node: &Node, indent: usize) {
        if !self.output.is_empty() {
            self.newline(indent);
        }
        self.write("(");
        self.write(node.kind_name());

        if let Some(value) = node.value() {
            self.write(" \"");
            self.write(&value.replace('\\', "\\\\").replace('"', "\\\""));
            self.write("\"");
        }

        for (key, value) in node.attributes().iter() {
            match value {
                AttrValue::Bool(b) => {
                    self.write(&format!(" [{key}={b}]"));
                }
                AttrValue::Str(s) => {
                    self.write(&format!(" [{key}={s:?}]"));
                }
                AttrValue::Comments(comments) if self.comments => {
                    for comment in comments {
                        self.write(&format!(" [comment={:?}]", comment.value));
                    }
                }
                AttrValue::Comments(_) => {}
            }
        }

        if self.positions && let Some(position) = node.position() {
            self.write(&format!(" @{position}"));
        }
    }

    fn slot(&mut self, key: &str, indent: usize) {
        self.newline(indent + 1);
        self.write(":");
        self.write(key);
    }

    fn close(&mut self) {
        self.write(")");
    }
}

impl Default for SExprFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl<'ast> Visitor<'ast> for SExprFormatter {
    fn enter_node(&mut self, node: &'ast Node) -> bool {
        self.open(node, 0);
        true
    }

    fn children_visitor(&mut self, key: &'static str) -> Box<dyn Visitor<'ast> + '_> {
        self.slot(key, 0);
        Box::new(Scoped {
            formatter: self,
            indent: 2,
        })
    }

    fn leave_node(&mut self, _node: &'ast Node) {
        self.close();
    }
}

/// The formatter as seen from inside a slot.
struct Scoped<'f> {
    formatter: &'f mut SExprFormatter,
    indent: usize,
}

impl<'ast> Visitor<'ast> for Scoped<'_> {
    fn enter_node(&mut self, node: &'ast Node) -> bool {
        self.formatter.open(node, self.indent);
        true
    }

    fn children_visitor(&mut self, key: &'static str) -> Box<dyn Visitor<'ast> + '_> {
        self.formatter.slot(key, self.indent);
        Box::new(Scoped {
            formatter: &mut *self.formatter,
            indent: self.indent + 2,
        })
    }

    fn leave_node(&mut self, _node: &'ast Node) {
        self.formatter.close();
    }
}
