pub mod error;
mod expr;

pub use error::ParseError;

use tracing::{debug, trace};

use crate::ast::{Comment, Node, builder};
use crate::lexer::{
    Lexer,
    token::{Token, TokenKind},
};
use crate::line_index::LineIndex;
use crate::options::ParserOptions;
use crate::position::Position;
use crate::span::Span;

/// A parsed file: the root `StmtList` and every error recorded on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub root: Node,
    pub errors: Vec<ParseError>,
}

impl Program {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Parses `source` with default options.
pub fn parse(source: &[u8]) -> Program {
    Parser::new(source).parse_program()
}

pub struct Parser<'src> {
    lexer: Lexer<'src>,
    lines: LineIndex,
    options: ParserOptions,
    current_token: Token,
    next_token: Token,
    /// Comments between the previous token and `current_token`.
    current_trivia: Vec<Token>,
    next_trivia: Vec<Token>,
    /// Last doc comment seen and not yet claimed by a declaration.
    doc_comment: Option<String>,
    /// End offset of the last consumed token.
    prev_end: usize,
    /// Statements and expressions currently being parsed, innermost last.
    depth: usize,
    errors: Vec<ParseError>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src [u8]) -> Self {
        Self::with_options(source, ParserOptions::default())
    }

    pub fn with_options(source: &'src [u8], options: ParserOptions) -> Self {
        let eof = Token {
            kind: TokenKind::Eof,
            span: Span::default(),
        };
        let mut parser = Self {
            lexer: Lexer::with_options(source, &options),
            lines: LineIndex::new(source),
            options,
            current_token: eof,
            next_token: eof,
            current_trivia: Vec::new(),
            next_trivia: Vec::new(),
            doc_comment: None,
            prev_end: 0,
            depth: 0,
            errors: Vec::new(),
        };
        parser.bump();
        parser.bump();
        parser.prev_end = 0;
        parser
    }

    fn bump(&mut self) {
        self.prev_end = self.current_token.span.end;
        self.current_token = self.next_token;
        self.current_trivia = std::mem::take(&mut self.next_trivia);

        let doc = self
            .current_trivia
            .iter()
            .rev()
            .find(|t| t.kind == TokenKind::DocComment)
            .copied();
        if let Some(doc) = doc {
            self.doc_comment = Some(self.text(doc.span));
        }

        loop {
            let end = self.lexer.source().len();
            let token = self.lexer.next().unwrap_or(Token {
                kind: TokenKind::Eof,
                span: Span::new(end, end),
            });
            match token.kind {
                TokenKind::Comment | TokenKind::DocComment => self.next_trivia.push(token),
                TokenKind::Error if self.lexer.input_slice(token.span).starts_with(b"/*") => {
                    let position = self.lines.position(token.span);
                    debug!(%position, "unterminated comment");
                    self.errors.push(ParseError::UnterminatedComment { position });
                }
                _ => {
                    self.next_token = token;
                    break;
                }
            }
        }
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.current_token.kind == kind {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind, expected: &'static str) -> bool {
        if self.eat(kind) {
            true
        } else {
            self.error(expected);
            false
        }
    }

    fn text(&self, span: Span) -> String {
        String::from_utf8_lossy(self.lexer.input_slice(span)).into_owned()
    }

    /// Records an error at the current token. Only the first error at any
    /// given offset is kept.
    fn error(&mut self, expected: &'static str) {
        let token = self.current_token;
        let position = self.lines.position(token.span);
        let error = if token.kind == TokenKind::Eof {
            ParseError::UnexpectedEndOfFile { expected, position }
        } else {
            ParseError::UnexpectedToken {
                found: format!("'{}'", self.text(token.span)),
                expected,
                position,
            }
        };
        self.push_error(error);
    }

    fn push_error(&mut self, error: ParseError) {
        if self
            .errors
            .last()
            .is_some_and(|e| e.position().start_pos == error.position().start_pos)
        {
            return;
        }
        debug!(%error, "parse error");
        self.errors.push(error);
    }

    /// Runs `parse` one nesting level deeper, or records
    /// [`ParseError::NestingTooDeep`] and returns `None` at the limit.
    fn nested<T>(&mut self, parse: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        if self.depth >= self.options.max_depth {
            self.nesting_too_deep();
            return None;
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    fn nesting_too_deep(&mut self) {
        let position = self.lines.position(self.current_token.span);
        self.push_error(ParseError::NestingTooDeep {
            limit: self.options.max_depth,
            position,
        });
    }

    /// Skips a statement without descending into it: brackets are counted
    /// until the statement's `;` or the `}` closing the enclosing block.
    fn skip_statement(&mut self) {
        trace!(offset = self.current_token.span.start, "skipping nested statement");
        let mut open = 0usize;
        loop {
            match self.current_token.kind {
                TokenKind::Eof => break,
                TokenKind::CloseBrace | TokenKind::CloseTag if open == 0 => break,
                TokenKind::SemiColon if open == 0 => {
                    self.bump();
                    break;
                }
                TokenKind::OpenBrace | TokenKind::OpenParen | TokenKind::OpenBracket => open += 1,
                TokenKind::CloseBrace | TokenKind::CloseParen | TokenKind::CloseBracket => {
                    open = open.saturating_sub(1);
                    if open == 0 && self.current_token.kind == TokenKind::CloseBrace {
                        self.bump();
                        break;
                    }
                }
                _ => {}
            }
            self.bump();
        }
        self.doc_comment = None;
    }

    fn expect_semicolon(&mut self) {
        self.doc_comment = None;
        match self.current_token.kind {
            TokenKind::SemiColon => self.bump(),
            // Implicit semicolon at close tag or EOF
            TokenKind::CloseTag | TokenKind::Eof => {}
            _ => {
                self.error("';'");
                self.sync_to_statement_end();
            }
        }
    }

    fn sync_to_statement_end(&mut self) {
        trace!(offset = self.current_token.span.start, "skipping to end of statement");
        while !matches!(
            self.current_token.kind,
            TokenKind::SemiColon | TokenKind::CloseBrace | TokenKind::CloseTag | TokenKind::Eof
        ) {
            self.bump();
        }
        self.eat(TokenKind::SemiColon);
        self.doc_comment = None;
    }

    fn position_from(&self, start: usize) -> Position {
        self.lines.position(Span::new(start, self.prev_end.max(start)))
    }

    /// Positions `node` from `start` to the end of the last consumed token.
    fn finish(&self, node: Node, start: usize) -> Node {
        node.set_position(self.position_from(start))
    }

    /// Turns the current token into a positioned leaf and consumes it.
    fn leaf(&mut self, build: impl FnOnce(String) -> Node) -> Node {
        let span = self.current_token.span;
        let node = build(self.text(span)).set_position(self.lines.position(span));
        self.bump();
        node
    }

    /// Drains the comments in front of the current token.
    fn take_comments(&mut self) -> Vec<Comment> {
        let trivia = std::mem::take(&mut self.current_trivia);
        if !self.options.attach_comments {
            return Vec::new();
        }
        trivia
            .into_iter()
            .map(|t| Comment::new(self.text(t.span)).with_position(self.lines.position(t.span)))
            .collect()
    }

    fn attach_doc_comment(node: &mut Node, doc: Option<String>) {
        if let Some(doc) = doc {
            node.attributes_mut().set_php_doc_comment(doc);
        }
    }

    pub fn parse_program(&mut self) -> Program {
        let mut stmts = Vec::new();

        while self.current_token.kind != TokenKind::Eof {
            if self.current_token.kind == TokenKind::CloseBrace {
                self.error("statement");
                self.bump();
                continue;
            }
            if let Some(stmt) = self.parse_stmt() {
                stmts.push(stmt);
            }
        }

        let position = match (
            stmts.first().and_then(Node::position),
            stmts.last().and_then(Node::position),
        ) {
            (Some(first), Some(last)) => Some(Position::new(
                first.start_line,
                last.end_line,
                first.start_pos,
                last.end_pos,
            )),
            _ => None,
        };

        let mut root = builder::stmt_list(stmts);
        if let Some(position) = position {
            root = root.set_position(position);
        }
        // comments after the last statement
        for comment in self.take_comments() {
            root.attributes_mut().push_comment(comment);
        }

        Program {
            root,
            errors: std::mem::take(&mut self.errors),
        }
    }

    fn parse_stmt(&mut self) -> Option<Node> {
        match self.current_token.kind {
            TokenKind::OpenTag | TokenKind::CloseTag => {
                self.bump();
                return None;
            }
            TokenKind::InlineHtml => {
                trace!(span = ?self.current_token.span, "skipping inline html");
                self.bump();
                return None;
            }
            TokenKind::SemiColon => {
                self.bump();
                self.doc_comment = None;
                return None;
            }
            _ => {}
        }

        if self.depth >= self.options.max_depth {
            self.nesting_too_deep();
            self.skip_statement();
            return None;
        }
        self.depth += 1;
        let stmt = self.parse_nested_stmt();
        self.depth -= 1;
        Some(stmt)
    }

    fn parse_nested_stmt(&mut self) -> Node {
        let start = self.current_token.span.start;
        let comments = self.take_comments();

        let mut stmt = match self.current_token.kind {
            TokenKind::OpenTagEcho => {
                self.bump();
                let exprs = self.parse_expr_list();
                self.expect_semicolon();
                self.finish(builder::echo(exprs), start)
            }
            TokenKind::Echo => {
                self.bump();
                let exprs = self.parse_expr_list();
                self.expect_semicolon();
                self.finish(builder::echo(exprs), start)
            }
            TokenKind::Throw => {
                self.bump();
                let expr = self.parse_expr();
                self.expect_semicolon();
                self.finish(builder::throw(expr), start)
            }
            TokenKind::Return => {
                self.bump();
                let expr = if matches!(
                    self.current_token.kind,
                    TokenKind::SemiColon | TokenKind::CloseTag | TokenKind::Eof
                ) {
                    None
                } else {
                    self.parse_expr()
                };
                self.expect_semicolon();
                self.finish(builder::return_stmt(expr), start)
            }
            TokenKind::OpenBrace => {
                let stmts = self.parse_block();
                self.finish(builder::stmt_list(stmts), start)
            }
            TokenKind::Function if self.next_token.kind != TokenKind::OpenParen => {
                self.parse_function()
            }
            TokenKind::Class | TokenKind::Abstract | TokenKind::Final | TokenKind::Readonly => {
                self.parse_class_declaration()
            }
            _ => {
                let expr = self.parse_expr();
                if expr.is_some() {
                    self.expect_semicolon();
                } else {
                    self.sync_to_statement_end();
                }
                self.finish(builder::expression(expr), start)
            }
        };

        stmt.attributes_mut().prepend_comments(comments);
        stmt
    }

    /// `{ stmt* }`; the statements of function, method and closure bodies.
    fn parse_block(&mut self) -> Vec<Node> {
        let mut stmts = Vec::new();
        if !self.expect(TokenKind::OpenBrace, "'{'") {
            return stmts;
        }

        while !matches!(self.current_token.kind, TokenKind::CloseBrace | TokenKind::Eof) {
            if let Some(stmt) = self.parse_stmt() {
                stmts.push(stmt);
            }
        }

        self.expect(TokenKind::CloseBrace, "'}'");
        self.doc_comment = None;
        stmts
    }

    fn parse_function(&mut self) -> Node {
        let start = self.current_token.span.start;
        let doc = self.doc_comment.take();
        self.bump(); // function

        let returns_ref = self.eat(TokenKind::Ampersand);
        if self.current_token.kind == TokenKind::OpenParen {
            // `function &() {}` in statement position
            let closure = self.parse_closure_tail(start, doc, false, returns_ref);
            self.expect_semicolon();
            return self.finish(builder::expression(closure), start);
        }

        let name = self.parse_identifier("function name");
        let params = self.parse_parameter_list();
        let return_type = self.parse_return_type();
        let stmts = self.parse_block();

        let mut function = builder::function(name, returns_ref, params, return_type, stmts);
        Self::attach_doc_comment(&mut function, doc);
        self.finish(function, start)
    }

    fn parse_class_declaration(&mut self) -> Node {
        let start = self.current_token.span.start;
        let doc = self.doc_comment.take();

        let mut modifiers = Vec::new();
        while matches!(
            self.current_token.kind,
            TokenKind::Abstract | TokenKind::Final | TokenKind::Readonly
        ) {
            modifiers.push(self.leaf(builder::identifier));
        }

        self.expect(TokenKind::Class, "'class'");
        let name = self.parse_identifier("class name");
        let (extends, implements) = self.parse_class_relations();
        let stmts = self.parse_class_body();

        let mut class = builder::class(name, modifiers, Vec::new(), extends, implements, stmts);
        Self::attach_doc_comment(&mut class, doc);
        self.finish(class, start)
    }

    /// `[extends Name] [implements Name, ...]`
    fn parse_class_relations(&mut self) -> (Option<Node>, Vec<Node>) {
        let extends = if self.eat(TokenKind::Extends) {
            self.parse_class_name()
        } else {
            None
        };

        let mut implements = Vec::new();
        if self.eat(TokenKind::Implements) {
            loop {
                if let Some(name) = self.parse_class_name() {
                    implements.push(name);
                }
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
        }

        (extends, implements)
    }

    fn parse_class_name(&mut self) -> Option<Node> {
        if matches!(
            self.current_token.kind,
            TokenKind::Identifier | TokenKind::NsSeparator | TokenKind::Namespace
        ) {
            self.parse_name()
        } else {
            self.error("class name");
            None
        }
    }

    pub(crate) fn parse_class_body(&mut self) -> Vec<Node> {
        let mut members = Vec::new();
        if !self.expect(TokenKind::OpenBrace, "'{'") {
            return members;
        }

        while !matches!(self.current_token.kind, TokenKind::CloseBrace | TokenKind::Eof) {
            if let Some(member) = self.parse_class_member() {
                members.push(member);
            }
        }

        self.expect(TokenKind::CloseBrace, "'}'");
        self.doc_comment = None;
        members
    }

    fn parse_class_member(&mut self) -> Option<Node> {
        let start = self.current_token.span.start;
        let comments = self.take_comments();

        let mut modifiers = Vec::new();
        while self.current_token.kind.is_modifier() {
            modifiers.push(self.leaf(builder::identifier));
        }

        if self.current_token.kind != TokenKind::Function {
            // properties, constants and trait uses have no node kind
            self.error("'function'");
            self.sync_to_statement_end();
            return None;
        }

        let doc = self.doc_comment.take();
        self.bump(); // function
        let returns_ref = self.eat(TokenKind::Ampersand);
        let name = self.parse_identifier("method name");
        let params = self.parse_parameter_list();
        let return_type = self.parse_return_type();
        let stmts = if self.eat(TokenKind::SemiColon) {
            Vec::new()
        } else {
            self.parse_block()
        };

        let mut method =
            builder::class_method(name, modifiers, returns_ref, params, return_type, stmts);
        Self::attach_doc_comment(&mut method, doc);
        method.attributes_mut().prepend_comments(comments);
        Some(self.finish(method, start))
    }

    fn parse_parameter_list(&mut self) -> Vec<Node> {
        let mut params = Vec::new();
        if !self.expect(TokenKind::OpenParen, "'('") {
            return params;
        }

        while !matches!(self.current_token.kind, TokenKind::CloseParen | TokenKind::Eof) {
            params.push(self.parse_parameter());
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }

        self.expect(TokenKind::CloseParen, "')'");
        params
    }

    /// `[?Type] [&] [...] $name [= default]`
    fn parse_parameter(&mut self) -> Node {
        let start = self.current_token.span.start;

        let variable_type = if matches!(
            self.current_token.kind,
            TokenKind::Question
                | TokenKind::Identifier
                | TokenKind::NsSeparator
                | TokenKind::Namespace
                | TokenKind::Static
        ) {
            self.parse_type()
        } else {
            None
        };

        let by_ref = self.eat(TokenKind::Ampersand);
        let variadic = self.eat(TokenKind::Ellipsis);
        let variable = self.parse_simple_variable();
        let default_value = if self.eat(TokenKind::Eq) {
            self.parse_expr()
        } else {
            None
        };

        let param = builder::parameter(variable_type, variable, default_value, by_ref, variadic);
        self.finish(param, start)
    }

    fn parse_return_type(&mut self) -> Option<Node> {
        if self.eat(TokenKind::Colon) {
            self.parse_type()
        } else {
            None
        }
    }

    /// `Name` or `?Name`. `static` is kept as an identifier.
    fn parse_type(&mut self) -> Option<Node> {
        let start = self.current_token.span.start;
        if self.eat(TokenKind::Question) {
            let inner = self.parse_type_name();
            return Some(self.finish(builder::nullable(inner), start));
        }
        self.parse_type_name()
    }

    fn parse_type_name(&mut self) -> Option<Node> {
        match self.current_token.kind {
            TokenKind::Static => Some(self.leaf(builder::identifier)),
            TokenKind::Identifier | TokenKind::NsSeparator | TokenKind::Namespace => {
                self.parse_name()
            }
            _ => {
                self.error("type");
                None
            }
        }
    }

    fn parse_identifier(&mut self, expected: &'static str) -> Option<Node> {
        let kind = self.current_token.kind;
        if kind == TokenKind::Identifier || kind.is_semi_reserved() {
            Some(self.leaf(builder::identifier))
        } else {
            self.error(expected);
            None
        }
    }

    /// `$name`, as a `Variable` wrapping an `Identifier` with the same extent.
    fn parse_simple_variable(&mut self) -> Option<Node> {
        if self.current_token.kind != TokenKind::Variable {
            self.error("variable");
            return None;
        }
        let span = self.current_token.span;
        let name = self.leaf(builder::identifier);
        Some(builder::variable(name).set_position(self.lines.position(span)))
    }

    /// Names: `Foo\Bar`, `\Foo\Bar`, `namespace\Foo`.
    fn parse_name(&mut self) -> Option<Node> {
        enum Qualification {
            Unqualified,
            FullyQualified,
            Relative,
        }

        let start = self.current_token.span.start;
        let qualification = match self.current_token.kind {
            TokenKind::NsSeparator => {
                self.bump();
                Qualification::FullyQualified
            }
            TokenKind::Namespace if self.next_token.kind == TokenKind::NsSeparator => {
                self.bump();
                self.bump();
                Qualification::Relative
            }
            _ => Qualification::Unqualified,
        };

        let mut parts = Vec::new();
        loop {
            let kind = self.current_token.kind;
            if kind == TokenKind::Identifier || (!parts.is_empty() && kind.is_semi_reserved()) {
                parts.push(self.leaf(builder::name_part));
            } else {
                self.error("identifier");
                break;
            }

            let next = self.next_token.kind;
            if self.current_token.kind == TokenKind::NsSeparator
                && (next == TokenKind::Identifier || next.is_semi_reserved())
            {
                self.bump();
            } else {
                break;
            }
        }

        if parts.is_empty() {
            return None;
        }

        let name = match qualification {
            Qualification::Unqualified => builder::name(parts),
            Qualification::FullyQualified => builder::fully_qualified(parts),
            Qualification::Relative => builder::relative(parts),
        };
        Some(self.finish(name, start))
    }
}
