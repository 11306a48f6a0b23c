//! The Thrift AST: a closed sum of node variants, each carrying a [`Span`]
//! (`SPEC_FULL.md` §3.3).
//!
//! Grounded on the owned, `Option<Span>`-bearing struct/enum shape of the
//! teacher's `syntax::sysml::ast` layer rather than its rowan/CST wrapper —
//! this front-end never needs a lossless concrete syntax tree, only a typed
//! AST plus spans for diagnostics.

use smol_str::SmolStr;

use crate::base::Span;

/// An annotation attached to a type, field, or declaration: `(name = "value")`.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeAnnotation {
    pub name: SmolStr,
    pub value: SmolStr,
    pub span: Span,
}

/// A bare name reference, wherever the grammar allows a user-named type or
/// value (`SPEC_FULL.md` §3.3, "Identifier reference").
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub name: SmolStr,
    pub span: Span,
}

impl Identifier {
    pub fn new(name: impl Into<SmolStr>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}

/// Base and container field types (`SPEC_FULL.md` §3.3).
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    String(Annotated),
    Binary(Annotated),
    Slist(Annotated),
    Bool(Annotated),
    Byte(Annotated),
    I16(Annotated),
    I32(Annotated),
    I64(Annotated),
    Double(Annotated),
    Map {
        key: Box<FieldType>,
        value: Box<FieldType>,
        cpp_type: Option<SmolStr>,
        annotated: Annotated,
    },
    Set {
        value: Box<FieldType>,
        cpp_type: Option<SmolStr>,
        annotated: Annotated,
    },
    List {
        value: Box<FieldType>,
        cpp_type: Option<SmolStr>,
        annotated: Annotated,
    },
    /// A user-declared name: a typedef, struct, enum, exception, or a
    /// forward reference resolved later by the symbol table.
    Named(Identifier),
}

impl FieldType {
    pub fn span(&self) -> Span {
        match self {
            FieldType::String(a)
            | FieldType::Binary(a)
            | FieldType::Slist(a)
            | FieldType::Bool(a)
            | FieldType::Byte(a)
            | FieldType::I16(a)
            | FieldType::I32(a)
            | FieldType::I64(a)
            | FieldType::Double(a) => a.span,
            FieldType::Map { annotated, .. }
            | FieldType::Set { annotated, .. }
            | FieldType::List { annotated, .. } => annotated.span,
            FieldType::Named(id) => id.span,
        }
    }

    pub fn add_annotations(&mut self, annotations: Vec<TypeAnnotation>) {
        match self {
            FieldType::String(a)
            | FieldType::Binary(a)
            | FieldType::Slist(a)
            | FieldType::Bool(a)
            | FieldType::Byte(a)
            | FieldType::I16(a)
            | FieldType::I32(a)
            | FieldType::I64(a)
            | FieldType::Double(a) => a.annotations = annotations,
            FieldType::Map { annotated, .. }
            | FieldType::Set { annotated, .. }
            | FieldType::List { annotated, .. } => annotated.annotations = annotations,
            FieldType::Named(_) => {}
        }
    }
}

/// Shared fields for every "annotated, spanned" base-type variant. Collapses
/// the source's `Node` + `Annotated` + `BaseType` mixin hierarchy into plain
/// fields, per `SPEC_FULL.md` §9.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotated {
    pub annotations: Vec<TypeAnnotation>,
    pub span: Span,
}

impl Annotated {
    pub fn new(span: Span) -> Self {
        Self {
            annotations: Vec::new(),
            span,
        }
    }
}

/// A constant value (`SPEC_FULL.md` §3.4). Maps are represented as an
/// insertion-ordered `Vec` of pairs rather than a hash map, since constant
/// values need not be hashable (§9).
#[derive(Debug, Clone, PartialEq)]
pub enum ConstValue {
    Int(i64),
    Double(f64),
    Literal(SmolStr),
    Identifier(Identifier),
    List(Vec<ConstValue>),
    Map(Vec<(ConstValue, ConstValue)>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub tag: Option<i64>,
    pub required: bool,
    pub ty: FieldType,
    pub name: Identifier,
    pub default: Option<ConstValue>,
    pub xsd_optional: bool,
    pub xsd_nillable: bool,
    pub xsd_attrs: Vec<Field>,
    pub annotations: Vec<TypeAnnotation>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Typedef {
    pub ty: FieldType,
    pub name: Identifier,
    pub annotations: Vec<TypeAnnotation>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumDef {
    pub name: Identifier,
    pub tag: i64,
    pub annotations: Vec<TypeAnnotation>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Enum {
    pub name: Identifier,
    pub values: Vec<EnumDef>,
    pub annotations: Vec<TypeAnnotation>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Senum {
    pub name: Identifier,
    pub values: Vec<SmolStr>,
    pub annotations: Vec<TypeAnnotation>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Const {
    pub ty: FieldType,
    pub name: Identifier,
    pub value: ConstValue,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Struct {
    pub is_union: bool,
    pub name: Identifier,
    pub xsd_all: bool,
    pub fields: Vec<Field>,
    pub annotations: Vec<TypeAnnotation>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Exception {
    pub name: Identifier,
    pub fields: Vec<Field>,
    pub annotations: Vec<TypeAnnotation>,
    pub span: Span,
}

/// A function's return type: either a real field type or the distinguished
/// `void` result (`SPEC_FULL.md` §3.3, `Function`).
#[derive(Debug, Clone, PartialEq)]
pub enum FunctionType {
    Void(Span),
    Type(FieldType),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub oneway: bool,
    pub return_type: FunctionType,
    pub name: Identifier,
    pub arguments: Vec<Field>,
    pub throws: Vec<Field>,
    pub annotations: Vec<TypeAnnotation>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    pub name: Identifier,
    pub extends: Option<Identifier>,
    pub functions: Vec<Function>,
    pub annotations: Vec<TypeAnnotation>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Include {
    pub path: SmolStr,
    pub span: Span,
}

/// Whether a `Namespace` node came from the modern `namespace LANG NAME`
/// production or a legacy single-language directive (`cpp_namespace`, etc.),
/// per `SPEC_FULL.md` §3.3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamespaceForm {
    Modern,
    Legacy,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Namespace {
    pub language: SmolStr,
    pub name: SmolStr,
    pub form: NamespaceForm,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Definition {
    Typedef(Typedef),
    Enum(Enum),
    Senum(Senum),
    Struct(Struct),
    Exception(Exception),
    Service(Service),
    Const(Const),
}

impl Definition {
    pub fn name(&self) -> &str {
        match self {
            Definition::Typedef(d) => &d.name.name,
            Definition::Enum(d) => &d.name.name,
            Definition::Senum(d) => &d.name.name,
            Definition::Struct(d) => &d.name.name,
            Definition::Exception(d) => &d.name.name,
            Definition::Service(d) => &d.name.name,
            Definition::Const(d) => &d.name.name,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Definition::Typedef(d) => d.span,
            Definition::Enum(d) => d.span,
            Definition::Senum(d) => d.span,
            Definition::Struct(d) => d.span,
            Definition::Exception(d) => d.span,
            Definition::Service(d) => d.span,
            Definition::Const(d) => d.span,
        }
    }
}

/// The root node of a single parsed file (`SPEC_FULL.md` §3.3, "Thrift").
#[derive(Debug, Clone, PartialEq)]
pub struct Thrift {
    pub includes: Vec<Include>,
    pub namespaces: Vec<Namespace>,
    pub definitions: Vec<Definition>,
    pub span: Span,
}

impl Thrift {
    /// All span-bearing nodes rooted at this file, in source order, for the
    /// symbol-table walk's pre-order traversal (`SPEC_FULL.md` §4.6).
    pub fn definitions(&self) -> &[Definition] {
        &self.definitions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span() -> Span {
        Span::new(0, 0, 0, 1)
    }

    #[test]
    fn definition_name_reaches_through_variants() {
        let d = Definition::Const(Const {
            ty: FieldType::I64(Annotated::new(span())),
            name: Identifier::new("T", span()),
            value: ConstValue::Int(42),
            span: span(),
        });
        assert_eq!(d.name(), "T");
    }
}
