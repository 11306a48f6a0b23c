//! Pretty-printing: a `Display` impl per AST variant that renders valid IDL
//! text semantically equivalent to the parsed input (`SPEC_FULL.md` §6, §8
//! round-trip property).
//!
//! Grounded on the original source's per-node `__str__` methods
//! (`ptsd/ast.py`), reimplemented as idiomatic `Display` impls rather than
//! string concatenation.

use std::fmt;

use crate::ast::*;

fn fmt_annotations(f: &mut fmt::Formatter<'_>, annotations: &[TypeAnnotation]) -> fmt::Result {
    if annotations.is_empty() {
        return Ok(());
    }
    write!(f, " (")?;
    for (i, a) in annotations.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{} = \"{}\"", a.name, a.value)?;
    }
    write!(f, ")")
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::String(a) => write!(f, "string{}", Annotations(&a.annotations)),
            FieldType::Binary(a) => write!(f, "binary{}", Annotations(&a.annotations)),
            FieldType::Slist(a) => write!(f, "slist{}", Annotations(&a.annotations)),
            FieldType::Bool(a) => write!(f, "bool{}", Annotations(&a.annotations)),
            FieldType::Byte(a) => write!(f, "byte{}", Annotations(&a.annotations)),
            FieldType::I16(a) => write!(f, "i16{}", Annotations(&a.annotations)),
            FieldType::I32(a) => write!(f, "i32{}", Annotations(&a.annotations)),
            FieldType::I64(a) => write!(f, "i64{}", Annotations(&a.annotations)),
            FieldType::Double(a) => write!(f, "double{}", Annotations(&a.annotations)),
            FieldType::Map {
                key,
                value,
                cpp_type,
                annotated,
            } => {
                write!(f, "map")?;
                if let Some(ct) = cpp_type {
                    write!(f, " (cpp_type = \"{ct}\")")?;
                }
                write!(f, "<{key}, {value}>{}", Annotations(&annotated.annotations))
            }
            FieldType::Set {
                value,
                cpp_type,
                annotated,
            } => {
                write!(f, "set")?;
                if let Some(ct) = cpp_type {
                    write!(f, " (cpp_type = \"{ct}\")")?;
                }
                write!(f, "<{value}>{}", Annotations(&annotated.annotations))
            }
            FieldType::List {
                value,
                cpp_type,
                annotated,
            } => {
                write!(f, "list<{value}>")?;
                if let Some(ct) = cpp_type {
                    write!(f, " (cpp_type = \"{ct}\")")?;
                }
                write!(f, "{}", Annotations(&annotated.annotations))
            }
            FieldType::Named(id) => write!(f, "{}", id.name),
        }
    }
}

struct Annotations<'a>(&'a [TypeAnnotation]);

impl fmt::Display for Annotations<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_annotations(f, self.0)
    }
}

impl fmt::Display for ConstValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstValue::Int(v) => write!(f, "{v}"),
            // `Display` drops the `.0` on an integral double, which then
            // re-lexes as an IntConstant; `Debug` always keeps the point.
            ConstValue::Double(v) => write!(f, "{v:?}"),
            ConstValue::Literal(s) => write!(f, "\"{s}\""),
            ConstValue::Identifier(id) => write!(f, "{}", id.name),
            ConstValue::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            ConstValue::Map(pairs) => {
                write!(f, "{{")?;
                for (i, (k, v)) in pairs.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(tag) = self.tag {
            write!(f, "{tag}: ")?;
        }
        if self.required {
            write!(f, "required ")?;
        }
        write!(f, "{} {}", self.ty, self.name.name)?;
        if let Some(default) = &self.default {
            write!(f, " = {default}")?;
        }
        if self.xsd_optional {
            write!(f, " xsd_optional")?;
        }
        if self.xsd_nillable {
            write!(f, " xsd_nillable")?;
        }
        if !self.xsd_attrs.is_empty() {
            write!(f, " xsd_attrs {{\n")?;
            for attr in &self.xsd_attrs {
                write!(f, "  {attr};\n")?;
            }
            write!(f, "}}")?;
        }
        fmt_annotations(f, &self.annotations)
    }
}

impl fmt::Display for Typedef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "typedef {} {}", self.ty, self.name.name)?;
        fmt_annotations(f, &self.annotations)
    }
}

impl fmt::Display for EnumDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name.name, self.tag)?;
        fmt_annotations(f, &self.annotations)
    }
}

impl fmt::Display for Enum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "enum {} {{", self.name.name)?;
        for v in &self.values {
            writeln!(f, "  {v};")?;
        }
        write!(f, "}}")?;
        fmt_annotations(f, &self.annotations)
    }
}

impl fmt::Display for Senum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "senum {} {{", self.name.name)?;
        for v in &self.values {
            writeln!(f, "  \"{v}\";")?;
        }
        write!(f, "}}")?;
        fmt_annotations(f, &self.annotations)
    }
}

impl fmt::Display for Const {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "const {} {} = {}", self.ty, self.name.name, self.value)
    }
}

impl fmt::Display for Struct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kw = if self.is_union { "union" } else { "struct" };
        write!(f, "{kw} {}", self.name.name)?;
        if self.xsd_all {
            write!(f, " xsd_all")?;
        }
        writeln!(f, " {{")?;
        for field in &self.fields {
            writeln!(f, "  {field};")?;
        }
        write!(f, "}}")?;
        fmt_annotations(f, &self.annotations)
    }
}

impl fmt::Display for Exception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "exception {} {{", self.name.name)?;
        for field in &self.fields {
            writeln!(f, "  {field};")?;
        }
        write!(f, "}}")?;
        fmt_annotations(f, &self.annotations)
    }
}

impl fmt::Display for FunctionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FunctionType::Void(_) => write!(f, "void"),
            FunctionType::Type(ty) => write!(f, "{ty}"),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.oneway {
            write!(f, "oneway ")?;
        }
        write!(f, "{} {}(", self.return_type, self.name.name)?;
        for (i, arg) in self.arguments.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{arg}")?;
        }
        write!(f, ")")?;
        if !self.throws.is_empty() {
            write!(f, " throws (")?;
            for (i, t) in self.throws.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{t}")?;
            }
            write!(f, ")")?;
        }
        fmt_annotations(f, &self.annotations)
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "service {}", self.name.name)?;
        if let Some(extends) = &self.extends {
            write!(f, " extends {}", extends.name)?;
        }
        writeln!(f, " {{")?;
        for function in &self.functions {
            writeln!(f, "  {function};")?;
        }
        write!(f, "}}")?;
        fmt_annotations(f, &self.annotations)
    }
}

impl fmt::Display for Include {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "include \"{}\"", self.path)
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.form {
            NamespaceForm::Modern => write!(f, "namespace {} {}", self.language, self.name),
            NamespaceForm::Legacy => match self.language.as_str() {
                "cpp_include" | "xsd_namespace" => {
                    write!(f, "{} \"{}\"", self.language, self.name)
                }
                "smalltalk.category" => write!(f, "smalltalk_category {}", self.name),
                other => {
                    let keyword = match other {
                        "cpp" => "cpp_namespace",
                        "php" => "php_namespace",
                        "py" => "py_module",
                        "perl" => "perl_package",
                        "rb" => "ruby_namespace",
                        "smalltalk.prefix" => "smalltalk_prefix",
                        "java" => "java_package",
                        "cocoa" => "cocoa_prefix",
                        "csharp" => "csharp_namespace",
                        "delphi" => "delphi_namespace",
                        _ => other,
                    };
                    write!(f, "{keyword} {}", self.name)
                }
            },
        }
    }
}

impl fmt::Display for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Definition::Typedef(d) => write!(f, "{d}"),
            Definition::Enum(d) => write!(f, "{d}"),
            Definition::Senum(d) => write!(f, "{d}"),
            Definition::Struct(d) => write!(f, "{d}"),
            Definition::Exception(d) => write!(f, "{d}"),
            Definition::Service(d) => write!(f, "{d}"),
            Definition::Const(d) => write!(f, "{d}"),
        }
    }
}

impl fmt::Display for Thrift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for include in &self.includes {
            writeln!(f, "{include}")?;
        }
        for namespace in &self.namespaces {
            writeln!(f, "{namespace}")?;
        }
        for definition in &self.definitions {
            writeln!(f, "{definition}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::parse;

    #[test]
    fn round_trips_a_struct() {
        let text = "struct S {\n  1: required i32 x;\n  2: string y;\n}\n";
        let first = parse(text).unwrap();
        let printed = first.to_string();
        let second = parse(&printed).unwrap();
        assert_eq!(first.definitions, second.definitions);
    }

    #[test]
    fn round_trips_enum_tags() {
        let text = "enum E {\n  A = 0;\n  B = 1;\n  C = 5;\n  D = 6;\n}\n";
        let first = parse(text).unwrap();
        let printed = first.to_string();
        let second = parse(&printed).unwrap();
        assert_eq!(first.definitions, second.definitions);
    }

    #[test]
    fn round_trips_service_with_throws() {
        let text = "exception Bad {\n}\nservice Svc {\n  void ping() throws (1: Bad e);\n}\n";
        let first = parse(text).unwrap();
        let printed = first.to_string();
        let second = parse(&printed).unwrap();
        assert_eq!(first.definitions, second.definitions);
    }

    #[test]
    fn round_trips_a_whole_number_double_constant() {
        // A naive `Display` on f64 drops the `.0`, which then re-lexes as an
        // IntConstant instead of a DubConstant.
        let text = "const double x = 1.0\n";
        let first = parse(text).unwrap();
        let printed = first.to_string();
        assert!(printed.contains("1.0"));
        let second = parse(&printed).unwrap();
        assert_eq!(first.definitions, second.definitions);
    }

    #[test]
    fn round_trips_a_negative_double_constant() {
        let text = "const double x = -5.0\n";
        let first = parse(text).unwrap();
        let printed = first.to_string();
        let second = parse(&printed).unwrap();
        assert_eq!(first.definitions, second.definitions);
    }
}
