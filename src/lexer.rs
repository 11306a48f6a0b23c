//! Logos-based lexer for the Thrift IDL.
//!
//! Fast tokenization using the `logos` crate, following the same shape as
//! the teacher's own lexer: a raw, logos-generated token enum feeds a thin
//! wrapper that resolves contextual decisions logos can't express statically
//! (keyword-vs-identifier, the `true`/`false` rewrite, the disallow-list).
//!
//! See `SPEC_FULL.md` §4.2 for the full rule set and its precedence.

use logos::Logos;
use smol_str::SmolStr;

use crate::base::Span;
use crate::error::LexError;
use crate::keywords;

/// The fully resolved kind of a token, as seen by the parser. One variant
/// per reserved word (`SPEC_FULL.md` §3.2), plus the literal/numeric/name
/// kinds and single-character punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    IntConstant,
    DubConstant,
    Literal,
    Identifier,
    StIdentifier,

    // Namespace directives
    NamespaceKw,
    CppNamespaceKw,
    CppIncludeKw,
    PhpNamespaceKw,
    PyModuleKw,
    PerlPackageKw,
    RubyNamespaceKw,
    SmalltalkCategoryKw,
    SmalltalkPrefixKw,
    JavaPackageKw,
    CocoaPrefixKw,
    XsdNamespaceKw,
    CsharpNamespaceKw,
    DelphiNamespaceKw,

    // Base/container types
    StringKw,
    BinaryKw,
    SlistKw,
    BoolKw,
    ByteKw,
    I16Kw,
    I32Kw,
    I64Kw,
    DoubleKw,
    MapKw,
    SetKw,
    ListKw,

    // Structural keywords
    RequiredKw,
    OptionalKw,
    OnewayKw,
    VoidKw,
    ThrowsKw,
    ExtendsKw,
    ServiceKw,
    StructKw,
    UnionKw,
    EnumKw,
    SenumKw,
    ExceptionKw,
    TypedefKw,
    ConstKw,
    IncludeKw,
    XsdAllKw,
    XsdOptionalKw,
    XsdNillableKw,
    XsdAttrsKw,
    CppTypeKw,

    // Punctuation
    Colon,
    Semicolon,
    Comma,
    LBrace,
    RBrace,
    LParen,
    RParen,
    Eq,
    Lt,
    Gt,
    LBracket,
    RBracket,
    Star,
    Minus,

    Eof,
}

fn keyword_kind(text: &str) -> Option<TokenKind> {
    use TokenKind::*;
    Some(match text {
        "namespace" => NamespaceKw,
        "cpp_namespace" => CppNamespaceKw,
        "cpp_include" => CppIncludeKw,
        "php_namespace" => PhpNamespaceKw,
        "py_module" => PyModuleKw,
        "perl_package" => PerlPackageKw,
        "ruby_namespace" => RubyNamespaceKw,
        "smalltalk_category" => SmalltalkCategoryKw,
        "smalltalk_prefix" => SmalltalkPrefixKw,
        "java_package" => JavaPackageKw,
        "cocoa_prefix" => CocoaPrefixKw,
        "xsd_namespace" => XsdNamespaceKw,
        "csharp_namespace" => CsharpNamespaceKw,
        "delphi_namespace" => DelphiNamespaceKw,
        "string" => StringKw,
        "binary" => BinaryKw,
        "slist" => SlistKw,
        "bool" => BoolKw,
        "byte" => ByteKw,
        "i16" => I16Kw,
        "i32" => I32Kw,
        "i64" => I64Kw,
        "double" => DoubleKw,
        "map" => MapKw,
        "set" => SetKw,
        "list" => ListKw,
        "required" => RequiredKw,
        "optional" => OptionalKw,
        "oneway" => OnewayKw,
        "void" => VoidKw,
        "throws" => ThrowsKw,
        "extends" => ExtendsKw,
        "service" => ServiceKw,
        "struct" => StructKw,
        "union" => UnionKw,
        "enum" => EnumKw,
        "senum" => SenumKw,
        "exception" => ExceptionKw,
        "typedef" => TypedefKw,
        "const" => ConstKw,
        "include" => IncludeKw,
        "xsd_all" => XsdAllKw,
        "xsd_optional" => XsdOptionalKw,
        "xsd_nillable" => XsdNillableKw,
        "xsd_attrs" => XsdAttrsKw,
        "cpp_type" => CppTypeKw,
        _ => return None,
    })
}

/// The value carried by a token, distinguished by kind (`SPEC_FULL.md` §3.2).
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    None,
    Int(i64),
    Float(f64),
    Str(SmolStr),
}

impl TokenValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TokenValue::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            TokenValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            TokenValue::Float(v) => Some(*v),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    pub span: Span,
}

/// Raw, logos-driven tokenization. Reserved-word resolution, the
/// `true`/`false` rewrite and the disallow-list check all happen in the
/// wrapper below, on top of a single `Name` token — logos's static matching
/// can't express "look this text up in a runtime table".
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
enum RawToken {
    #[regex(r"[ \t\r]+")]
    Whitespace,

    #[regex(r"\n+")]
    Newline,

    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    BlockComment,

    #[regex(r"//[^\n]*")]
    LineComment,

    #[regex(r"#[^\n]*")]
    UnixComment,

    #[regex(r#""([^\\"\n]|\\.)*""#)]
    #[regex(r"'([^\\'\n]|\\.)*'")]
    Literal,

    // Quirk preserved from the reference grammar: the hex literal is matched
    // with its surrounding quotes as part of the token text (`"0x"` then the
    // hex digits *outside* the quotes). See SPEC_FULL.md §9.
    #[regex(r#""0x"[0-9A-Fa-f]+"#)]
    HexConstant,

    // Unsigned: a leading sign is handled by the parser via the `Minus`
    // token below, not baked into the numeric regex. Baking `[+-]?` in here
    // made this variant and the hyphen-led `Name` alternative (see below)
    // both reach an accepting state on inputs like `-5`, which logos
    // rejects at derive time as an unresolvable ambiguity.
    #[regex(r"[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?")]
    DubConstant,

    #[regex(r"[0-9]+")]
    IntConstant,

    // Union of the IDENTIFIER and ST_IDENTIFIER lexical classes; which one
    // a given match resolves to is decided in `Lexer::next` by checking for
    // a hyphen (plain identifiers never contain one). The leading-hyphen
    // alternative requires a letter right after the hyphen so it can never
    // match a negative numeral (`-5`, `-5.0`) — those lex as `Minus` followed
    // by an unsigned numeric token instead.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_0-9][A-Za-z0-9_]*)*")]
    #[regex(r"-[A-Za-z][A-Za-z0-9_.-]*")]
    #[regex(r"[A-Za-z_][A-Za-z0-9_.-]*-[A-Za-z0-9_.-]*")]
    Name,

    #[token("-")]
    Minus,

    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("=")]
    Eq,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("*")]
    Star,
}

/// Tokenizes an entire Thrift source file.
///
/// Returns every non-trivia token followed by a trailing `Eof` token, or the
/// first `LexError` encountered (lexing aborts on the first bad token, per
/// `SPEC_FULL.md` §7).
pub fn tokenize(src: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = RawToken::lexer(src);
    let mut line: u32 = 0;
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let text = lexer.slice();
        let range = lexer.span();
        let start = range.start as u32;
        let end = range.end as u32;
        let span = Span::new(line, line, start, end);

        let raw = match result {
            Ok(raw) => raw,
            Err(()) => {
                return Err(LexError::new(
                    format!("unrecognized character sequence: {text:?}"),
                    Some(span),
                ));
            }
        };

        let (kind, value) = match raw {
            RawToken::Whitespace | RawToken::BlockComment => continue,
            RawToken::Newline => {
                line += text.matches('\n').count() as u32;
                continue;
            }
            RawToken::LineComment | RawToken::UnixComment => continue,
            RawToken::Literal => {
                let inner = &text[1..text.len() - 1];
                (TokenKind::Literal, TokenValue::Str(SmolStr::new(inner)))
            }
            RawToken::HexConstant => {
                // text looks like `"0x"1A2B`; skip the four quote+0x chars.
                let digits = &text[4..];
                let value = i64::from_str_radix(digits, 16).map_err(|e| {
                    LexError::new(format!("invalid hex constant {text:?}: {e}"), Some(span))
                })?;
                (TokenKind::IntConstant, TokenValue::Int(value))
            }
            RawToken::DubConstant => {
                let value = text.parse::<f64>().map_err(|e| {
                    LexError::new(format!("invalid double constant {text:?}: {e}"), Some(span))
                })?;
                (TokenKind::DubConstant, TokenValue::Float(value))
            }
            RawToken::IntConstant => {
                let value = text.parse::<i64>().map_err(|e| {
                    LexError::new(format!("invalid integer constant {text:?}: {e}"), Some(span))
                })?;
                (TokenKind::IntConstant, TokenValue::Int(value))
            }
            RawToken::Name => {
                if text.contains('-') {
                    (TokenKind::StIdentifier, TokenValue::Str(SmolStr::new(text)))
                } else if let Some(kw) = keyword_kind(text) {
                    (kw, TokenValue::None)
                } else if keywords::is_disallowed(text) {
                    return Err(LexError::new(
                        format!("found invalid reserved word: {text}"),
                        Some(span),
                    ));
                } else if text == "true" {
                    (TokenKind::IntConstant, TokenValue::Int(1))
                } else if text == "false" {
                    (TokenKind::IntConstant, TokenValue::Int(0))
                } else {
                    (TokenKind::Identifier, TokenValue::Str(SmolStr::new(text)))
                }
            }
            RawToken::Colon => (TokenKind::Colon, TokenValue::None),
            RawToken::Semicolon => (TokenKind::Semicolon, TokenValue::None),
            RawToken::Comma => (TokenKind::Comma, TokenValue::None),
            RawToken::LBrace => (TokenKind::LBrace, TokenValue::None),
            RawToken::RBrace => (TokenKind::RBrace, TokenValue::None),
            RawToken::LParen => (TokenKind::LParen, TokenValue::None),
            RawToken::RParen => (TokenKind::RParen, TokenValue::None),
            RawToken::Eq => (TokenKind::Eq, TokenValue::None),
            RawToken::Lt => (TokenKind::Lt, TokenValue::None),
            RawToken::Gt => (TokenKind::Gt, TokenValue::None),
            RawToken::LBracket => (TokenKind::LBracket, TokenValue::None),
            RawToken::RBracket => (TokenKind::RBracket, TokenValue::None),
            RawToken::Star => (TokenKind::Star, TokenValue::None),
            RawToken::Minus => (TokenKind::Minus, TokenValue::None),
        };

        tokens.push(Token { kind, value, span });
    }

    let eof_at = src.len() as u32;
    tokens.push(Token {
        kind: TokenKind::Eof,
        value: TokenValue::None,
        span: Span::new(line, line, eof_at, eof_at),
    });

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        tokenize(src).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[rstest]
    #[case("string", TokenKind::StringKw)]
    #[case("map", TokenKind::MapKw)]
    #[case("required", TokenKind::RequiredKw)]
    #[case("oneway", TokenKind::OnewayKw)]
    #[case("xsd_attrs", TokenKind::XsdAttrsKw)]
    #[case("namespace", TokenKind::NamespaceKw)]
    fn keywords_lex_to_their_own_kind(#[case] text: &str, #[case] expected: TokenKind) {
        assert_eq!(kinds(text), vec![expected, TokenKind::Eof]);
    }

    #[test]
    fn lexes_struct_header() {
        let ks = kinds("struct Foo {");
        assert_eq!(
            ks,
            vec![
                TokenKind::StructKw,
                TokenKind::Identifier,
                TokenKind::LBrace,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn true_false_rewrite_to_int_literals() {
        let tokens = tokenize("true false").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::IntConstant);
        assert_eq!(tokens[0].value.as_int(), Some(1));
        assert_eq!(tokens[1].kind, TokenKind::IntConstant);
        assert_eq!(tokens[1].value.as_int(), Some(0));
    }

    #[test]
    fn disallowed_identifier_is_a_lex_error() {
        let err = tokenize("struct class {").unwrap_err();
        assert!(err.message.contains("class"));
    }

    #[test]
    fn dotted_identifier_lexes_as_one_token() {
        let tokens = tokenize("shared.Foo").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].value.as_str(), Some("shared.Foo"));
    }

    #[test]
    fn quoted_hex_constant_quirk() {
        let tokens = tokenize(r#""0x"FF"#).unwrap();
        assert_eq!(tokens[0].kind, TokenKind::IntConstant);
        assert_eq!(tokens[0].value.as_int(), Some(255));
    }

    #[test]
    fn bare_hex_literal_is_not_a_hex_constant() {
        // Documented quirk: `0xFF` without quotes lexes as `0` then the
        // identifier `xFF`, not as a hex integer.
        let tokens = tokenize("0xFF").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::IntConstant);
        assert_eq!(tokens[0].value.as_int(), Some(0));
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
    }

    #[test]
    fn negative_integer_lexes_as_minus_then_int() {
        let tokens = tokenize("-1").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Minus);
        assert_eq!(tokens[1].kind, TokenKind::IntConstant);
        assert_eq!(tokens[1].value.as_int(), Some(1));
        assert_eq!(tokens[2].kind, TokenKind::Eof);
    }

    #[test]
    fn negative_double_lexes_as_minus_then_double() {
        let tokens = tokenize("-5.0").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Minus);
        assert_eq!(tokens[1].kind, TokenKind::DubConstant);
        assert_eq!(tokens[1].value.as_float(), Some(5.0));
    }

    #[test]
    fn smalltalk_identifier_allows_hyphens() {
        let tokens = tokenize("smalltalk_category -my-category").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::SmalltalkCategoryKw);
        assert_eq!(tokens[1].kind, TokenKind::StIdentifier);
        assert_eq!(tokens[1].value.as_str(), Some("-my-category"));
    }

    #[test]
    fn line_comments_and_block_comments_are_trivia() {
        let ks = kinds("// line\nstruct /* block */ Foo {}");
        assert_eq!(
            ks,
            vec![
                TokenKind::StructKw,
                TokenKind::Identifier,
                TokenKind::LBrace,
                TokenKind::RBrace,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn tracks_line_numbers_across_newlines() {
        let tokens = tokenize("struct\nFoo {}").unwrap();
        assert_eq!(tokens[0].span.start_line, 0);
        assert_eq!(tokens[1].span.start_line, 1);
    }
}
