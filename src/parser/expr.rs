use super::Parser;
use crate::ast::{AssignOpKind, Node, builder};
use crate::lexer::token::TokenKind;

fn compound_assign_op(kind: TokenKind) -> Option<AssignOpKind> {
    let op = match kind {
        TokenKind::AndEq => AssignOpKind::BitwiseAnd,
        TokenKind::OrEq => AssignOpKind::BitwiseOr,
        TokenKind::XorEq => AssignOpKind::BitwiseXor,
        TokenKind::CoalesceEq => AssignOpKind::Coalesce,
        TokenKind::ConcatEq => AssignOpKind::Concat,
        TokenKind::DivEq => AssignOpKind::Div,
        TokenKind::MinusEq => AssignOpKind::Minus,
        TokenKind::ModEq => AssignOpKind::Mod,
        TokenKind::MulEq => AssignOpKind::Mul,
        TokenKind::PlusEq => AssignOpKind::Plus,
        TokenKind::PowEq => AssignOpKind::Pow,
        TokenKind::SlEq => AssignOpKind::ShiftLeft,
        TokenKind::SrEq => AssignOpKind::ShiftRight,
        _ => return None,
    };
    Some(op)
}

impl<'src> Parser<'src> {
    /// Returns `None` after recording an error when no expression starts at
    /// the current token.
    pub(super) fn parse_expr(&mut self) -> Option<Node> {
        self.nested(|p| {
            let start = p.current_token.span.start;
            let lhs = p.parse_postfix_expr()?;
            Some(p.parse_assignment(lhs, start))
        })
    }

    /// Assignments are right associative: `$a = $b = 1` assigns `$b = 1` to `$a`.
    fn parse_assignment(&mut self, lhs: Node, start: usize) -> Node {
        let kind = self.current_token.kind;

        if kind == TokenKind::Eq {
            self.bump();
            if self.eat(TokenKind::Ampersand) {
                let rhs = self.parse_expr();
                return self.finish(builder::assign_ref(lhs, rhs), start);
            }
            let rhs = self.parse_expr();
            return self.finish(builder::assign(lhs, rhs), start);
        }

        if let Some(op) = compound_assign_op(kind) {
            self.bump();
            let rhs = self.parse_expr();
            return self.finish(builder::compound_assign(op, lhs, rhs), start);
        }

        lhs
    }

    pub(super) fn parse_expr_list(&mut self) -> Vec<Node> {
        let mut exprs = Vec::new();
        loop {
            match self.parse_expr() {
                Some(expr) => exprs.push(expr),
                None => break,
            }
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        exprs
    }

    fn parse_postfix_expr(&mut self) -> Option<Node> {
        let start = self.current_token.span.start;
        let mut expr = self.parse_primary()?;

        loop {
            match self.current_token.kind {
                TokenKind::OpenParen => {
                    let arguments = self.parse_argument_list();
                    expr = self.finish(builder::function_call(expr, arguments), start);
                }
                // ?-> has no node of its own and reads like ->
                TokenKind::Arrow | TokenKind::NullSafeArrow => {
                    self.bump();
                    let member = self.parse_member_name();
                    expr = if self.current_token.kind == TokenKind::OpenParen {
                        let arguments = self.parse_argument_list();
                        self.finish(builder::method_call(expr, member, arguments), start)
                    } else {
                        self.finish(builder::property_fetch(expr, member), start)
                    };
                }
                TokenKind::DoubleColon => {
                    self.bump();
                    expr = if self.current_token.kind == TokenKind::Variable {
                        let property = self.parse_simple_variable();
                        if self.current_token.kind == TokenKind::OpenParen {
                            let arguments = self.parse_argument_list();
                            self.finish(builder::static_call(expr, property, arguments), start)
                        } else {
                            self.finish(builder::static_property_fetch(expr, property), start)
                        }
                    } else {
                        let name = self.parse_identifier("identifier");
                        if self.current_token.kind == TokenKind::OpenParen {
                            let arguments = self.parse_argument_list();
                            self.finish(builder::static_call(expr, name, arguments), start)
                        } else {
                            self.finish(builder::class_const_fetch(expr, name), start)
                        }
                    };
                }
                _ => break,
            }
        }

        Some(expr)
    }

    fn parse_member_name(&mut self) -> Option<Node> {
        if self.current_token.kind == TokenKind::Variable {
            self.parse_simple_variable()
        } else {
            self.parse_identifier("member name")
        }
    }

    fn parse_primary(&mut self) -> Option<Node> {
        let start = self.current_token.span.start;

        match self.current_token.kind {
            TokenKind::Variable => self.parse_simple_variable(),
            TokenKind::Dollar => {
                self.bump();
                // $$a and ${expr}
                let inner = if self.eat(TokenKind::OpenBrace) {
                    let inner = self.parse_expr();
                    self.expect(TokenKind::CloseBrace, "'}'");
                    inner
                } else {
                    self.nested(Self::parse_primary)
                };
                Some(self.finish(builder::variable(inner), start))
            }
            TokenKind::LNumber => Some(self.leaf(builder::lnumber)),
            TokenKind::DNumber => Some(self.leaf(builder::dnumber)),
            TokenKind::StringLiteral => Some(self.leaf(builder::string)),
            TokenKind::Identifier | TokenKind::NsSeparator => self.parse_name_expr(start),
            TokenKind::Namespace if self.next_token.kind == TokenKind::NsSeparator => {
                self.parse_name_expr(start)
            }
            TokenKind::Static if self.next_token.kind == TokenKind::Function => {
                self.parse_closure()
            }
            TokenKind::Static => Some(self.leaf(builder::identifier)),
            TokenKind::Function => self.parse_closure(),
            TokenKind::New => self.parse_new(),
            TokenKind::OpenParen => {
                self.bump();
                let expr = self.parse_expr();
                self.expect(TokenKind::CloseParen, "')'");
                expr
            }
            _ => {
                self.error("expression");
                None
            }
        }
    }

    /// A bare name is a constant unless a call or `::` follows it.
    fn parse_name_expr(&mut self, start: usize) -> Option<Node> {
        let name = self.parse_name()?;
        if matches!(
            self.current_token.kind,
            TokenKind::OpenParen | TokenKind::DoubleColon
        ) {
            Some(name)
        } else {
            Some(self.finish(builder::const_fetch(name), start))
        }
    }

    fn parse_argument_list(&mut self) -> Vec<Node> {
        let mut arguments = Vec::new();
        if !self.expect(TokenKind::OpenParen, "'('") {
            return arguments;
        }

        while !matches!(self.current_token.kind, TokenKind::CloseParen | TokenKind::Eof) {
            let start = self.current_token.span.start;
            let variadic = self.eat(TokenKind::Ellipsis);
            let Some(expr) = self.parse_expr() else {
                break;
            };
            arguments.push(self.finish(builder::argument(expr, variadic), start));
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }

        self.expect(TokenKind::CloseParen, "')'");
        arguments
    }

    /// `new Foo(...)`, `new $class(...)` or `new class (...) extends A {}`.
    fn parse_new(&mut self) -> Option<Node> {
        let start = self.current_token.span.start;
        self.bump(); // new

        if self.current_token.kind == TokenKind::Class {
            let class_start = self.current_token.span.start;
            let doc = self.doc_comment.take();
            self.bump();

            let args = if self.current_token.kind == TokenKind::OpenParen {
                self.parse_argument_list()
            } else {
                Vec::new()
            };
            let (extends, implements) = self.parse_class_relations();
            let stmts = self.parse_class_body();

            let mut class = builder::class(None::<Node>, Vec::new(), args, extends, implements, stmts);
            Self::attach_doc_comment(&mut class, doc);
            let class = self.finish(class, class_start);
            return Some(self.finish(builder::new(class, Vec::new()), start));
        }

        let class = match self.current_token.kind {
            TokenKind::Identifier | TokenKind::NsSeparator | TokenKind::Namespace => {
                self.parse_name()
            }
            TokenKind::Static => Some(self.leaf(builder::identifier)),
            TokenKind::Variable => self.parse_simple_variable(),
            _ => {
                self.error("class name");
                None
            }
        };

        let arguments = if self.current_token.kind == TokenKind::OpenParen {
            self.parse_argument_list()
        } else {
            Vec::new()
        };

        Some(self.finish(builder::new(class, arguments), start))
    }

    /// `[static] function [&] (params) [use (...)] [: type] { ... }`
    fn parse_closure(&mut self) -> Option<Node> {
        let start = self.current_token.span.start;
        let doc = self.doc_comment.take();
        let is_static = self.eat(TokenKind::Static);
        self.expect(TokenKind::Function, "'function'");
        let returns_ref = self.eat(TokenKind::Ampersand);
        Some(self.parse_closure_tail(start, doc, is_static, returns_ref))
    }

    pub(super) fn parse_closure_tail(
        &mut self,
        start: usize,
        doc: Option<String>,
        is_static: bool,
        returns_ref: bool,
    ) -> Node {
        let params = self.parse_parameter_list();
        let uses = if self.eat(TokenKind::Use) {
            self.parse_closure_uses()
        } else {
            Vec::new()
        };
        let return_type = self.parse_return_type();
        let stmts = self.parse_block();

        let mut closure =
            builder::closure(params, uses, return_type, stmts, is_static, returns_ref);
        Self::attach_doc_comment(&mut closure, doc);
        self.finish(closure, start)
    }

    fn parse_closure_uses(&mut self) -> Vec<Node> {
        let mut uses = Vec::new();
        if !self.expect(TokenKind::OpenParen, "'('") {
            return uses;
        }

        while !matches!(self.current_token.kind, TokenKind::CloseParen | TokenKind::Eof) {
            let start = self.current_token.span.start;
            let by_ref = self.eat(TokenKind::Ampersand);
            let variable = self.parse_simple_variable();
            if variable.is_none() && !by_ref {
                break;
            }
            uses.push(self.finish(builder::closure_use(variable, by_ref), start));
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }

        self.expect(TokenKind::CloseParen, "')'");
        uses
    }
}
