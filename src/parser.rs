//! Hand-written recursive-descent parser over a buffered token stream.
//!
//! One function per grammar production, mirroring the production-per-method
//! organization of the teacher's own grammar submodules, driven by a single
//! token of lookahead (`SPEC_FULL.md` §4.3).

use smol_str::SmolStr;

use crate::ast::*;
use crate::base::Span;
use crate::error::ParseError;
use crate::lexer::{self, Token, TokenKind, TokenValue};

/// Parses a single file's contents into a [`Thrift`] AST root.
pub fn parse(text: &str) -> Result<Thrift, ParseError> {
    let tokens = lexer::tokenize(text).map_err(ParseError::from_lex)?;
    Parser::new(tokens).parse_thrift()
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

enum Header {
    Include(Include),
    Namespace(Namespace),
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    fn bump(&mut self) -> Token {
        let tok = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.at(kind) {
            Ok(self.bump())
        } else {
            Err(self.unexpected(&format!("{kind:?}")))
        }
    }

    fn unexpected(&self, expected: &str) -> ParseError {
        ParseError::new(
            format!(
                "unexpected token {:?} (expected {expected})",
                self.current().kind
            ),
            Some(self.current().span),
        )
    }

    fn eat_sep(&mut self) {
        if self.at(TokenKind::Comma) || self.at(TokenKind::Semicolon) {
            self.bump();
        }
    }

    fn parse_identifier(&mut self) -> Result<Identifier, ParseError> {
        let tok = self.expect(TokenKind::Identifier)?;
        let name = match tok.value {
            TokenValue::Str(s) => s,
            _ => unreachable!("Identifier token always carries a Str value"),
        };
        Ok(Identifier::new(name, tok.span))
    }

    fn parse_st_identifier(&mut self) -> Result<SmolStr, ParseError> {
        let tok = self.expect(TokenKind::StIdentifier)?;
        match tok.value {
            TokenValue::Str(s) => Ok(s),
            _ => unreachable!("StIdentifier token always carries a Str value"),
        }
    }

    fn parse_literal(&mut self) -> Result<(SmolStr, Span), ParseError> {
        let tok = self.expect(TokenKind::Literal)?;
        match tok.value {
            TokenValue::Str(s) => Ok((s, tok.span)),
            _ => unreachable!("Literal token always carries a Str value"),
        }
    }

    /// An `INTCONSTANT`, with an optional leading `Minus` consumed first.
    /// The lexer only ever emits unsigned numeric tokens; sign is applied
    /// here (see `lexer`'s `Minus` token docs).
    fn parse_int_constant(&mut self) -> Result<(i64, Span), ParseError> {
        let start = self.current().span;
        let negative = self.eat_minus();
        let tok = self.expect(TokenKind::IntConstant)?;
        let value = tok.value.as_int().expect("IntConstant carries Int value");
        Ok((if negative { -value } else { value }, start.cover(tok.span)))
    }

    fn eat_minus(&mut self) -> bool {
        if self.at(TokenKind::Minus) {
            self.bump();
            true
        } else {
            false
        }
    }

    // thrift := header_list definition_list
    fn parse_thrift(&mut self) -> Result<Thrift, ParseError> {
        let start_span = self.current().span;
        let mut includes = Vec::new();
        let mut namespaces = Vec::new();

        while self.is_header_start() {
            match self.parse_header()? {
                Header::Include(inc) => includes.push(inc),
                Header::Namespace(ns) => namespaces.push(ns),
            }
        }

        let mut definitions = Vec::new();
        while self.is_definition_start() {
            definitions.push(self.parse_definition()?);
        }

        if !self.at(TokenKind::Eof) {
            return Err(self.unexpected("end of input"));
        }

        let end_span = self.current().span;
        Ok(Thrift {
            includes,
            namespaces,
            definitions,
            span: start_span.cover(end_span),
        })
    }

    fn is_header_start(&self) -> bool {
        matches!(
            self.current().kind,
            TokenKind::IncludeKw
                | TokenKind::NamespaceKw
                | TokenKind::CppNamespaceKw
                | TokenKind::CppIncludeKw
                | TokenKind::PhpNamespaceKw
                | TokenKind::PyModuleKw
                | TokenKind::PerlPackageKw
                | TokenKind::RubyNamespaceKw
                | TokenKind::SmalltalkPrefixKw
                | TokenKind::SmalltalkCategoryKw
                | TokenKind::JavaPackageKw
                | TokenKind::CocoaPrefixKw
                | TokenKind::XsdNamespaceKw
                | TokenKind::CsharpNamespaceKw
                | TokenKind::DelphiNamespaceKw
        )
    }

    fn is_definition_start(&self) -> bool {
        matches!(
            self.current().kind,
            TokenKind::ConstKw
                | TokenKind::TypedefKw
                | TokenKind::EnumKw
                | TokenKind::SenumKw
                | TokenKind::StructKw
                | TokenKind::UnionKw
                | TokenKind::ExceptionKw
                | TokenKind::ServiceKw
        )
    }

    fn parse_header(&mut self) -> Result<Header, ParseError> {
        let start = self.current().span;
        match self.current().kind {
            TokenKind::IncludeKw => {
                self.bump();
                let (path, lit_span) = self.parse_literal()?;
                Ok(Header::Include(Include {
                    path,
                    span: start.cover(lit_span),
                }))
            }
            TokenKind::NamespaceKw => {
                self.bump();
                if self.at(TokenKind::Star) {
                    self.bump();
                    let name = self.parse_identifier()?;
                    let span = start.cover(name.span);
                    Ok(Header::Namespace(Namespace {
                        language: SmolStr::new("*"),
                        name: name.name,
                        form: NamespaceForm::Modern,
                        span,
                    }))
                } else {
                    let lang = self.parse_identifier()?;
                    let name = self.parse_identifier()?;
                    let span = start.cover(name.span);
                    Ok(Header::Namespace(Namespace {
                        language: lang.name,
                        name: name.name,
                        form: NamespaceForm::Modern,
                        span,
                    }))
                }
            }
            TokenKind::SmalltalkCategoryKw => {
                self.bump();
                let name = self.parse_st_identifier()?;
                let span = start.cover(self.tokens[self.pos - 1].span);
                Ok(Header::Namespace(Namespace {
                    language: SmolStr::new("smalltalk.category"),
                    name,
                    form: NamespaceForm::Legacy,
                    span,
                }))
            }
            TokenKind::CppIncludeKw | TokenKind::XsdNamespaceKw => {
                let language = legacy_language(self.current().kind);
                self.bump();
                let (name, lit_span) = self.parse_literal()?;
                Ok(Header::Namespace(Namespace {
                    language: SmolStr::new(language),
                    name,
                    form: NamespaceForm::Legacy,
                    span: start.cover(lit_span),
                }))
            }
            kind => {
                let language = legacy_language(kind);
                self.bump();
                let name = self.parse_identifier()?;
                let span = start.cover(name.span);
                Ok(Header::Namespace(Namespace {
                    language: SmolStr::new(language),
                    name: name.name,
                    form: NamespaceForm::Legacy,
                    span,
                }))
            }
        }
    }

    fn parse_definition(&mut self) -> Result<Definition, ParseError> {
        match self.current().kind {
            TokenKind::ConstKw => self.parse_const().map(Definition::Const),
            TokenKind::TypedefKw => self.parse_typedef().map(Definition::Typedef),
            TokenKind::EnumKw => self.parse_enum().map(Definition::Enum),
            TokenKind::SenumKw => self.parse_senum().map(Definition::Senum),
            TokenKind::StructKw | TokenKind::UnionKw => self.parse_struct().map(Definition::Struct),
            TokenKind::ExceptionKw => self.parse_exception().map(Definition::Exception),
            TokenKind::ServiceKw => self.parse_service().map(Definition::Service),
            _ => Err(self.unexpected("a definition")),
        }
    }

    fn parse_typedef(&mut self) -> Result<Typedef, ParseError> {
        let start = self.expect(TokenKind::TypedefKw)?.span;
        let ty = self.parse_field_type()?;
        let name = self.parse_identifier()?;
        let annotations = self.parse_type_annotations()?;
        let span = start.cover(name.span);
        Ok(Typedef {
            ty,
            name,
            annotations,
            span,
        })
    }

    fn parse_enum(&mut self) -> Result<Enum, ParseError> {
        let start = self.expect(TokenKind::EnumKw)?.span;
        let name = self.parse_identifier()?;
        self.expect(TokenKind::LBrace)?;

        let mut values = Vec::new();
        let mut counter: i64 = -1;
        while !self.at(TokenKind::RBrace) {
            let def_start = self.current().span;
            let def_name = self.parse_identifier()?;
            if self.at(TokenKind::Eq) {
                self.bump();
                let (value, _) = self.parse_int_constant()?;
                counter = value;
            } else {
                counter += 1;
            }
            let annotations = self.parse_type_annotations()?;
            let def_span = def_start.cover(def_name.span);
            values.push(EnumDef {
                name: def_name,
                tag: counter,
                annotations,
                span: def_span,
            });
            self.eat_sep();
        }
        let end = self.expect(TokenKind::RBrace)?.span;
        let annotations = self.parse_type_annotations()?;
        Ok(Enum {
            name,
            values,
            annotations,
            span: start.cover(end),
        })
    }

    fn parse_senum(&mut self) -> Result<Senum, ParseError> {
        let start = self.expect(TokenKind::SenumKw)?.span;
        let name = self.parse_identifier()?;
        self.expect(TokenKind::LBrace)?;
        let mut values = Vec::new();
        while !self.at(TokenKind::RBrace) {
            let (lit, _) = self.parse_literal()?;
            values.push(lit);
            self.eat_sep();
        }
        let end = self.expect(TokenKind::RBrace)?.span;
        let annotations = self.parse_type_annotations()?;
        Ok(Senum {
            name,
            values,
            annotations,
            span: start.cover(end),
        })
    }

    fn parse_const(&mut self) -> Result<Const, ParseError> {
        let start = self.expect(TokenKind::ConstKw)?.span;
        let ty = self.parse_field_type()?;
        let name = self.parse_identifier()?;
        self.expect(TokenKind::Eq)?;
        let value = self.parse_const_value()?;
        self.eat_sep();
        let span = start.cover(name.span);
        Ok(Const {
            ty,
            name,
            value,
            span,
        })
    }

    fn parse_const_value(&mut self) -> Result<ConstValue, ParseError> {
        match self.current().kind {
            TokenKind::Minus => {
                self.bump();
                match self.current().kind {
                    TokenKind::IntConstant => {
                        let tok = self.bump();
                        Ok(ConstValue::Int(-tok.value.as_int().unwrap()))
                    }
                    TokenKind::DubConstant => {
                        let tok = self.bump();
                        Ok(ConstValue::Double(-tok.value.as_float().unwrap()))
                    }
                    _ => Err(self.unexpected("a numeric constant after '-'")),
                }
            }
            TokenKind::IntConstant => {
                let tok = self.bump();
                Ok(ConstValue::Int(tok.value.as_int().unwrap()))
            }
            TokenKind::DubConstant => {
                let tok = self.bump();
                Ok(ConstValue::Double(tok.value.as_float().unwrap()))
            }
            TokenKind::Literal => {
                let (lit, _) = self.parse_literal()?;
                Ok(ConstValue::Literal(lit))
            }
            TokenKind::Identifier => {
                let id = self.parse_identifier()?;
                Ok(ConstValue::Identifier(id))
            }
            TokenKind::LBracket => {
                self.bump();
                let mut items = Vec::new();
                while !self.at(TokenKind::RBracket) {
                    items.push(self.parse_const_value()?);
                    self.eat_sep();
                }
                self.expect(TokenKind::RBracket)?;
                Ok(ConstValue::List(items))
            }
            TokenKind::LBrace => {
                self.bump();
                let mut items = Vec::new();
                while !self.at(TokenKind::RBrace) {
                    let key = self.parse_const_value()?;
                    self.expect(TokenKind::Colon)?;
                    let value = self.parse_const_value()?;
                    items.push((key, value));
                    self.eat_sep();
                }
                self.expect(TokenKind::RBrace)?;
                Ok(ConstValue::Map(items))
            }
            _ => Err(self.unexpected("a constant value")),
        }
    }

    fn parse_struct(&mut self) -> Result<Struct, ParseError> {
        let is_union = self.at(TokenKind::UnionKw);
        let start = self.bump().span;
        let name = self.parse_identifier()?;
        let xsd_all = if self.at(TokenKind::XsdAllKw) {
            self.bump();
            true
        } else {
            false
        };
        self.expect(TokenKind::LBrace)?;
        let fields = self.parse_field_list(TokenKind::RBrace)?;
        let end = self.expect(TokenKind::RBrace)?.span;
        let annotations = self.parse_type_annotations()?;
        Ok(Struct {
            is_union,
            name,
            xsd_all,
            fields,
            annotations,
            span: start.cover(end),
        })
    }

    fn parse_exception(&mut self) -> Result<Exception, ParseError> {
        let start = self.expect(TokenKind::ExceptionKw)?.span;
        let name = self.parse_identifier()?;
        self.expect(TokenKind::LBrace)?;
        let fields = self.parse_field_list(TokenKind::RBrace)?;
        let end = self.expect(TokenKind::RBrace)?.span;
        let annotations = self.parse_type_annotations()?;
        Ok(Exception {
            name,
            fields,
            annotations,
            span: start.cover(end),
        })
    }

    fn parse_service(&mut self) -> Result<Service, ParseError> {
        let start = self.expect(TokenKind::ServiceKw)?.span;
        let name = self.parse_identifier()?;
        let extends = if self.at(TokenKind::ExtendsKw) {
            self.bump();
            Some(self.parse_identifier()?)
        } else {
            None
        };
        self.expect(TokenKind::LBrace)?;
        let mut functions = Vec::new();
        while !self.at(TokenKind::RBrace) {
            functions.push(self.parse_function()?);
        }
        let end = self.expect(TokenKind::RBrace)?.span;
        let annotations = self.parse_type_annotations()?;
        Ok(Service {
            name,
            extends,
            functions,
            annotations,
            span: start.cover(end),
        })
    }

    fn parse_function(&mut self) -> Result<Function, ParseError> {
        let start = self.current().span;
        let oneway = if self.at(TokenKind::OnewayKw) {
            self.bump();
            true
        } else {
            false
        };
        let return_type = if self.at(TokenKind::VoidKw) {
            let span = self.bump().span;
            FunctionType::Void(span)
        } else {
            FunctionType::Type(self.parse_field_type()?)
        };
        let name = self.parse_identifier()?;
        self.expect(TokenKind::LParen)?;
        let arguments = self.parse_field_list(TokenKind::RParen)?;
        self.expect(TokenKind::RParen)?;
        let throws = if self.at(TokenKind::ThrowsKw) {
            self.bump();
            self.expect(TokenKind::LParen)?;
            let fields = self.parse_field_list(TokenKind::RParen)?;
            self.expect(TokenKind::RParen)?;
            fields
        } else {
            Vec::new()
        };
        let annotations = self.parse_type_annotations()?;
        self.eat_sep();
        let end = self.tokens[self.pos.saturating_sub(1)].span;
        Ok(Function {
            oneway,
            return_type,
            name,
            arguments,
            throws,
            annotations,
            span: start.cover(end),
        })
    }

    fn parse_field_list(&mut self, stop: TokenKind) -> Result<Vec<Field>, ParseError> {
        let mut fields = Vec::new();
        while !self.at(stop) {
            fields.push(self.parse_field()?);
        }
        Ok(fields)
    }

    fn parse_field(&mut self) -> Result<Field, ParseError> {
        let start = self.current().span;
        let tag = if self.at(TokenKind::IntConstant) || self.at(TokenKind::Minus) {
            let (value, _) = self.parse_int_constant()?;
            self.expect(TokenKind::Colon)?;
            Some(value)
        } else {
            None
        };

        let required = match self.current().kind {
            TokenKind::RequiredKw => {
                self.bump();
                true
            }
            TokenKind::OptionalKw => {
                self.bump();
                false
            }
            _ => false,
        };

        let ty = self.parse_field_type()?;
        let name = self.parse_identifier()?;

        let default = if self.at(TokenKind::Eq) {
            self.bump();
            Some(self.parse_const_value()?)
        } else {
            None
        };

        let xsd_optional = if self.at(TokenKind::XsdOptionalKw) {
            self.bump();
            true
        } else {
            false
        };
        let xsd_nillable = if self.at(TokenKind::XsdNillableKw) {
            self.bump();
            true
        } else {
            false
        };
        let xsd_attrs = if self.at(TokenKind::XsdAttrsKw) {
            self.bump();
            self.expect(TokenKind::LBrace)?;
            let fields = self.parse_field_list(TokenKind::RBrace)?;
            self.expect(TokenKind::RBrace)?;
            fields
        } else {
            Vec::new()
        };

        let annotations = self.parse_type_annotations()?;
        let end = self.tokens[self.pos.saturating_sub(1)].span;
        self.eat_sep();

        Ok(Field {
            tag,
            required,
            ty,
            name,
            default,
            xsd_optional,
            xsd_nillable,
            xsd_attrs,
            annotations,
            span: start.cover(end),
        })
    }

    fn parse_field_type(&mut self) -> Result<FieldType, ParseError> {
        match self.current().kind {
            TokenKind::StringKw => self.parse_base_type(FieldType::String as fn(Annotated) -> FieldType),
            TokenKind::BinaryKw => self.parse_base_type(FieldType::Binary as fn(Annotated) -> FieldType),
            TokenKind::SlistKw => self.parse_base_type(FieldType::Slist as fn(Annotated) -> FieldType),
            TokenKind::BoolKw => self.parse_base_type(FieldType::Bool as fn(Annotated) -> FieldType),
            TokenKind::ByteKw => self.parse_base_type(FieldType::Byte as fn(Annotated) -> FieldType),
            TokenKind::I16Kw => self.parse_base_type(FieldType::I16 as fn(Annotated) -> FieldType),
            TokenKind::I32Kw => self.parse_base_type(FieldType::I32 as fn(Annotated) -> FieldType),
            TokenKind::I64Kw => self.parse_base_type(FieldType::I64 as fn(Annotated) -> FieldType),
            TokenKind::DoubleKw => self.parse_base_type(FieldType::Double as fn(Annotated) -> FieldType),
            TokenKind::MapKw => self.parse_map_type(),
            TokenKind::SetKw => self.parse_set_type(),
            TokenKind::ListKw => self.parse_list_type(),
            TokenKind::Identifier => self.parse_identifier().map(FieldType::Named),
            _ => Err(self.unexpected("a field type")),
        }
    }

    fn parse_base_type(
        &mut self,
        ctor: fn(Annotated) -> FieldType,
    ) -> Result<FieldType, ParseError> {
        let span = self.bump().span;
        let mut ty = ctor(Annotated::new(span));
        let annotations = self.parse_type_annotations()?;
        ty.add_annotations(annotations);
        Ok(ty)
    }

    fn parse_cpp_type(&mut self) -> Result<Option<SmolStr>, ParseError> {
        if self.at(TokenKind::CppTypeKw) {
            self.bump();
            let (lit, _) = self.parse_literal()?;
            Ok(Some(lit))
        } else {
            Ok(None)
        }
    }

    fn parse_map_type(&mut self) -> Result<FieldType, ParseError> {
        let start = self.expect(TokenKind::MapKw)?.span;
        let cpp_type = self.parse_cpp_type()?;
        self.expect(TokenKind::Lt)?;
        let key = self.parse_field_type()?;
        self.expect(TokenKind::Comma)?;
        let value = self.parse_field_type()?;
        let end = self.expect(TokenKind::Gt)?.span;
        let mut ty = FieldType::Map {
            key: Box::new(key),
            value: Box::new(value),
            cpp_type,
            annotated: Annotated::new(start.cover(end)),
        };
        let annotations = self.parse_type_annotations()?;
        ty.add_annotations(annotations);
        Ok(ty)
    }

    fn parse_set_type(&mut self) -> Result<FieldType, ParseError> {
        let start = self.expect(TokenKind::SetKw)?.span;
        let cpp_type = self.parse_cpp_type()?;
        self.expect(TokenKind::Lt)?;
        let value = self.parse_field_type()?;
        let end = self.expect(TokenKind::Gt)?.span;
        let mut ty = FieldType::Set {
            value: Box::new(value),
            cpp_type,
            annotated: Annotated::new(start.cover(end)),
        };
        let annotations = self.parse_type_annotations()?;
        ty.add_annotations(annotations);
        Ok(ty)
    }

    fn parse_list_type(&mut self) -> Result<FieldType, ParseError> {
        let start = self.expect(TokenKind::ListKw)?.span;
        self.expect(TokenKind::Lt)?;
        let value = self.parse_field_type()?;
        let end = self.expect(TokenKind::Gt)?.span;
        let cpp_type = self.parse_cpp_type()?;
        let mut ty = FieldType::List {
            value: Box::new(value),
            cpp_type,
            annotated: Annotated::new(start.cover(end)),
        };
        let annotations = self.parse_type_annotations()?;
        ty.add_annotations(annotations);
        Ok(ty)
    }

    fn parse_type_annotations(&mut self) -> Result<Vec<TypeAnnotation>, ParseError> {
        if !self.at(TokenKind::LParen) {
            return Ok(Vec::new());
        }
        self.bump();
        let mut annotations = Vec::new();
        while !self.at(TokenKind::RParen) {
            let start = self.current().span;
            let name = self.parse_identifier()?;
            self.expect(TokenKind::Eq)?;
            let (value, lit_span) = self.parse_literal()?;
            annotations.push(TypeAnnotation {
                name: name.name,
                value,
                span: start.cover(lit_span),
            });
            self.eat_sep();
        }
        self.expect(TokenKind::RParen)?;
        Ok(annotations)
    }
}

fn legacy_language(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::CppNamespaceKw => "cpp",
        TokenKind::CppIncludeKw => "cpp_include",
        TokenKind::PhpNamespaceKw => "php",
        TokenKind::PyModuleKw => "py",
        TokenKind::PerlPackageKw => "perl",
        TokenKind::RubyNamespaceKw => "rb",
        TokenKind::SmalltalkPrefixKw => "smalltalk.prefix",
        TokenKind::JavaPackageKw => "java",
        TokenKind::CocoaPrefixKw => "cocoa",
        TokenKind::XsdNamespaceKw => "xsd_namespace",
        TokenKind::CsharpNamespaceKw => "csharp",
        TokenKind::DelphiNamespaceKw => "delphi",
        _ => unreachable!("legacy_language called with a non-namespace keyword"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn s1_enum_tag_assignment() {
        let thrift = parse("enum E { A, B, C = 5, D }").unwrap();
        let Definition::Enum(e) = &thrift.definitions[0] else {
            panic!("expected an enum");
        };
        let tags: Vec<i64> = e.values.iter().map(|d| d.tag).collect();
        assert_eq!(tags, vec![0, 1, 5, 6]);
    }

    #[test]
    fn enum_accepts_a_negative_explicit_tag() {
        let thrift = parse("enum E { A = -1, B }").unwrap();
        let Definition::Enum(e) = &thrift.definitions[0] else {
            panic!("expected an enum");
        };
        let tags: Vec<i64> = e.values.iter().map(|d| d.tag).collect();
        assert_eq!(tags, vec![-1, 0]);
    }

    #[test]
    fn const_accepts_negative_int_and_double() {
        let thrift = parse("const i32 X = -1\nconst double Y = -5.0\n").unwrap();
        let Definition::Const(x) = &thrift.definitions[0] else {
            panic!("expected a const");
        };
        assert_eq!(x.value, ConstValue::Int(-1));
        let Definition::Const(y) = &thrift.definitions[1] else {
            panic!("expected a const");
        };
        assert_eq!(y.value, ConstValue::Double(-5.0));
    }

    #[test]
    fn s2_field_tags_and_requiredness() {
        let thrift = parse(r#"struct S { 1: required i32 x; 2: string y = "hi" }"#).unwrap();
        let Definition::Struct(s) = &thrift.definitions[0] else {
            panic!("expected a struct");
        };
        assert_eq!(s.fields[0].tag, Some(1));
        assert!(s.fields[0].required);
        assert!(matches!(s.fields[0].ty, FieldType::I32(_)));
        assert_eq!(s.fields[0].default, None);

        assert_eq!(s.fields[1].tag, Some(2));
        assert!(!s.fields[1].required);
        assert!(matches!(s.fields[1].ty, FieldType::String(_)));
        assert_eq!(
            s.fields[1].default,
            Some(ConstValue::Literal("hi".into()))
        );
    }

    #[test]
    fn s5_nested_container_types() {
        let thrift = parse("struct U {\n 1: list<map<string, i32>> m\n}").unwrap();
        let Definition::Struct(s) = &thrift.definitions[0] else {
            panic!("expected a struct");
        };
        match &s.fields[0].ty {
            FieldType::List { value, .. } => match value.as_ref() {
                FieldType::Map { key, value, .. } => {
                    assert!(matches!(key.as_ref(), FieldType::String(_)));
                    assert!(matches!(value.as_ref(), FieldType::I32(_)));
                }
                _ => panic!("expected a map"),
            },
            _ => panic!("expected a list"),
        }
    }

    #[test]
    fn s6_true_default_becomes_int_one() {
        let thrift = parse("struct X { 1: bool b = true }").unwrap();
        let Definition::Struct(s) = &thrift.definitions[0] else {
            panic!("expected a struct");
        };
        assert_eq!(s.fields[0].default, Some(ConstValue::Int(1)));
    }

    #[test]
    fn senum_accepts_multiple_values() {
        let thrift = parse(r#"senum Suit { "Clubs", "Diamonds", "Hearts", "Spades" }"#).unwrap();
        let Definition::Senum(se) = &thrift.definitions[0] else {
            panic!("expected a senum");
        };
        assert_eq!(se.values.len(), 4);
    }

    #[test]
    fn include_and_namespace_headers() {
        let thrift = parse("include \"shared.thrift\"\nnamespace py my.pkg\n").unwrap();
        assert_eq!(thrift.includes[0].path.as_str(), "shared.thrift");
        assert_eq!(thrift.namespaces[0].language.as_str(), "py");
        assert_eq!(thrift.namespaces[0].name.as_str(), "my.pkg");
    }

    #[test]
    fn service_with_extends_and_throws() {
        let thrift = parse(
            "exception Bad {}\nservice Base {}\nservice Derived extends Base {\n  void ping() throws (1: Bad e)\n}",
        )
        .unwrap();
        let Definition::Service(svc) = &thrift.definitions[2] else {
            panic!("expected a service");
        };
        assert_eq!(svc.extends.as_ref().unwrap().name.as_str(), "Base");
        assert_eq!(svc.functions[0].throws.len(), 1);
        assert!(matches!(svc.functions[0].return_type, FunctionType::Void(_)));
    }

    #[test]
    fn unexpected_token_is_a_parse_error() {
        let err = parse("struct {").unwrap_err();
        assert!(err.span.is_some());
    }
}
