use crate::span::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq, Copy, Hash)]
pub enum TokenKind {
    // Keywords
    Function, Fn, Class, Interface, Trait, Extends, Implements,
    If, Else, Return, Echo, While, For, Foreach,
    Try, Catch, Finally, Throw,
    Public, Protected, Private, Static, Abstract, Final, Readonly,
    Namespace, Use, Global,
    New, Clone, InstanceOf,
    Const,

    // Identifiers & Literals
    Identifier,
    LNumber,
    DNumber,
    StringLiteral,
    Variable,
    InlineHtml,
    Dollar, // $ (for variable variables like $$a)
    NsSeparator, // \

    // Comments
    Comment,
    DocComment,

    // Symbols
    Arrow, // ->
    NullSafeArrow, // ?->
    DoubleArrow, // =>
    DoubleColon, // ::
    Ellipsis, // ...

    Plus, Minus, Asterisk, Slash, Percent, Dot,
    Pow, // **
    Inc, Dec, // ++, --

    Eq, // =
    PlusEq, MinusEq, MulEq, DivEq, ModEq, ConcatEq, PowEq,
    AndEq, OrEq, XorEq, SlEq, SrEq, CoalesceEq,

    EqEq, // ==
    EqEqEq, // ===
    Bang, // !
    BangEq, // !=
    BangEqEq, // !==
    Lt, // <
    LtEq, // <=
    Gt, // >
    GtEq, // >=
    Spaceship, // <=>

    Ampersand, // &
    Pipe, // |
    Caret, // ^
    BitNot, // ~
    Sl, // <<
    Sr, // >>

    AmpersandAmpersand, // &&
    PipePipe, // ||
    Question, // ?
    Coalesce, // ??
    At, // @

    SemiColon,
    Colon,
    Comma,
    OpenBrace,
    CloseBrace,
    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,

    OpenTag, // <?php or <?
    OpenTagEcho, // <?=
    CloseTag, // ?>

    Eof,

    // Error token for lexing failures
    Error,
}

impl TokenKind {
    /// Keywords that may still appear where PHP expects an identifier, such as
    /// method names and the member after `::` or `->`.
    pub fn is_semi_reserved(self) -> bool {
        matches!(
            self,
            TokenKind::Function
                | TokenKind::Fn
                | TokenKind::Class
                | TokenKind::Interface
                | TokenKind::Trait
                | TokenKind::Extends
                | TokenKind::Implements
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::Return
                | TokenKind::Echo
                | TokenKind::While
                | TokenKind::For
                | TokenKind::Foreach
                | TokenKind::Try
                | TokenKind::Catch
                | TokenKind::Finally
                | TokenKind::Throw
                | TokenKind::Public
                | TokenKind::Protected
                | TokenKind::Private
                | TokenKind::Static
                | TokenKind::Abstract
                | TokenKind::Final
                | TokenKind::Readonly
                | TokenKind::Namespace
                | TokenKind::Use
                | TokenKind::Global
                | TokenKind::New
                | TokenKind::Clone
                | TokenKind::InstanceOf
                | TokenKind::Const
        )
    }

    pub fn is_modifier(self) -> bool {
        matches!(
            self,
            TokenKind::Public
                | TokenKind::Protected
                | TokenKind::Private
                | TokenKind::Static
                | TokenKind::Abstract
                | TokenKind::Final
                | TokenKind::Readonly
        )
    }

    pub fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Comment | TokenKind::DocComment)
    }
}
