use php_ast::lexer::Lexer;
use php_ast::lexer::token::TokenKind;
use php_ast::ParserOptions;

fn kinds(code: &str, options: &ParserOptions) -> Vec<TokenKind> {
    let mut lexer = Lexer::with_options(code.as_bytes(), options);

    let mut kinds = Vec::new();
    while let Some(tok) = lexer.next() {
        kinds.push(tok.kind);
        if tok.kind == TokenKind::Eof {
            break;
        }
    }
    kinds
}

#[test]
fn lexes_compound_assignment_operators() {
    let code = "<?php $a &= |= ^= <<= >>= **= .= %= ??= =&";
    assert_eq!(
        kinds(code, &ParserOptions::default()),
        vec![
            TokenKind::OpenTag,
            TokenKind::Variable,
            TokenKind::AndEq,
            TokenKind::OrEq,
            TokenKind::XorEq,
            TokenKind::SlEq,
            TokenKind::SrEq,
            TokenKind::PowEq,
            TokenKind::ConcatEq,
            TokenKind::ModEq,
            TokenKind::CoalesceEq,
            TokenKind::Eq,
            TokenKind::Ampersand,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn lexes_comments_as_trivia() {
    let code = "<?php // line\n# hash\n/* block */ /** doc */ /**/";
    let kinds = kinds(code, &ParserOptions::default());
    assert_eq!(
        kinds,
        vec![
            TokenKind::OpenTag,
            TokenKind::Comment,
            TokenKind::Comment,
            TokenKind::Comment,
            TokenKind::DocComment,
            TokenKind::Comment,
            TokenKind::Eof,
        ]
    );
    assert!(kinds.iter().filter(|k| k.is_trivia()).count() == 5);
}

#[test]
fn short_open_tag_follows_options() {
    let code = "<? $foo;";

    assert_eq!(
        kinds(code, &ParserOptions::new().short_open_tag(true)),
        vec![
            TokenKind::OpenTag,
            TokenKind::Variable,
            TokenKind::SemiColon,
            TokenKind::Eof,
        ]
    );
    assert_eq!(
        kinds(code, &ParserOptions::new().short_open_tag(false)),
        vec![TokenKind::InlineHtml, TokenKind::Eof]
    );
}

#[test]
fn lexes_inline_html_around_tags() {
    let code = "<p><?= $a ?>\n</p>";
    assert_eq!(
        kinds(code, &ParserOptions::default()),
        vec![
            TokenKind::InlineHtml,
            TokenKind::OpenTagEcho,
            TokenKind::Variable,
            TokenKind::CloseTag,
            TokenKind::InlineHtml,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn keywords_are_case_insensitive_and_types_are_identifiers() {
    let code = "<?php FUNCTION Static int null self";
    assert_eq!(
        kinds(code, &ParserOptions::default()),
        vec![
            TokenKind::OpenTag,
            TokenKind::Function,
            TokenKind::Static,
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn lexes_numbers_and_strings() {
    let code = r#"<?php 42 0x1F 0b101 1_000 1.5 .5 1e3 'it\'s' "say \"hi\"""#;
    assert_eq!(
        kinds(code, &ParserOptions::default()),
        vec![
            TokenKind::OpenTag,
            TokenKind::LNumber,
            TokenKind::LNumber,
            TokenKind::LNumber,
            TokenKind::LNumber,
            TokenKind::DNumber,
            TokenKind::DNumber,
            TokenKind::DNumber,
            TokenKind::StringLiteral,
            TokenKind::StringLiteral,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn eof_repeats() {
    let mut lexer = Lexer::new(b"<?php");
    assert_eq!(lexer.next().map(|t| t.kind), Some(TokenKind::OpenTag));
    assert_eq!(lexer.next().map(|t| t.kind), Some(TokenKind::Eof));
    assert_eq!(lexer.next().map(|t| t.kind), Some(TokenKind::Eof));
}
