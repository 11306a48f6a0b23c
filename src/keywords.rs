//! Reserved-word tables (`SPEC_FULL.md` §4.1).
//!
//! Four flat sets, grouped by role exactly as the distilled grammar groups
//! them: namespace directives, base/container type names, remaining
//! structural keywords, and a disallow-list of words that may never be used
//! as an identifier. `true`/`false` are intentionally absent from every set
//! below — the lexer rewrites them to integer literals instead of treating
//! them as keywords (§4.1, §4.2 rule 8).

/// Namespace-directive keywords: `namespace` plus every legacy
/// single-language directive.
pub const NAMESPACES: &[&str] = &[
    "namespace",
    "cpp_namespace",
    "cpp_include",
    "php_namespace",
    "py_module",
    "perl_package",
    "ruby_namespace",
    "smalltalk_category",
    "smalltalk_prefix",
    "java_package",
    "cocoa_prefix",
    "xsd_namespace",
    "csharp_namespace",
    "delphi_namespace",
];

/// Base-type and container-type keywords.
pub const TYPES: &[&str] = &[
    "string", "binary", "slist", "bool", "byte", "i16", "i32", "i64", "double", "map", "set",
    "list",
];

/// Remaining structural and grammar keywords, including the `xsd_*`
/// modifiers.
pub const ACTIONS: &[&str] = &[
    "required",
    "optional",
    "oneway",
    "void",
    "throws",
    "extends",
    "service",
    "struct",
    "union",
    "enum",
    "senum",
    "exception",
    "typedef",
    "const",
    "include",
    "xsd_all",
    "xsd_optional",
    "xsd_nillable",
    "xsd_attrs",
    "cpp_type",
];

/// Identifiers that must be rejected outright by the lexer. These are words
/// reserved by one or more Thrift target languages that the reference
/// implementation forbids globally so generated code never collides with a
/// host-language keyword.
pub const DISALLOW: &[&str] = &[
    "BEGIN", "END", "__CLASS__", "__DIR__", "__FILE__", "__FUNCTION__", "__LINE__", "__METHOD__",
    "__NAMESPACE__", "abstract", "alias", "and", "args", "as", "assert", "begin", "break", "case",
    "catch", "class", "clone", "continue", "declare", "def", "default", "del", "delete", "do",
    "dynamic", "elif", "else", "elseif", "elsif", "end", "enddeclare", "endfor", "endforeach",
    "endif", "endswitch", "endwhile", "ensure", "except", "exec", "finally", "float", "for",
    "foreach", "function", "global", "goto", "if", "implements", "import", "in", "inline",
    "instanceof", "interface", "is", "lambda", "module", "native", "new", "next", "nil", "not",
    "or", "pass", "public", "print", "private", "protected", "raise", "redo", "rescue", "retry",
    "register", "return", "self", "sizeof", "static", "super", "switch", "synchronized", "then",
    "this", "throw", "transient", "try", "undef", "unless", "unsigned", "until", "use", "var",
    "virtual", "volatile", "when", "while", "with", "xor", "yield",
];

use std::sync::LazyLock;

use rustc_hash::FxHashSet;

static RESERVED_SET: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| {
    NAMESPACES
        .iter()
        .chain(TYPES)
        .chain(ACTIONS)
        .copied()
        .collect()
});

static DISALLOW_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| DISALLOW.iter().copied().collect());

/// `RESERVED = BOOL + NAMESPACES + TYPES + ACTIONS` in the original grammar;
/// `true`/`false` are handled specially by the lexer (see module docs), so
/// this crate's `RESERVED` omits them and the lexer checks them separately.
pub fn is_reserved(text: &str) -> bool {
    RESERVED_SET.contains(text)
}

pub fn is_disallowed(text: &str) -> bool {
    DISALLOW_SET.contains(text)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use once_cell::sync::Lazy;

    use super::*;

    static ALL_RESERVED: Lazy<HashSet<&'static str>> = Lazy::new(|| {
        NAMESPACES
            .iter()
            .chain(TYPES)
            .chain(ACTIONS)
            .copied()
            .collect()
    });

    #[test]
    fn reserved_groups_do_not_overlap_each_other() {
        assert_eq!(ALL_RESERVED.len(), NAMESPACES.len() + TYPES.len() + ACTIONS.len());
    }

    #[test]
    fn reserved_and_disallow_are_disjoint() {
        for word in DISALLOW {
            assert!(
                !is_reserved(word),
                "'{word}' appears in both RESERVED and DISALLOW"
            );
        }
    }

    #[test]
    fn booleans_are_not_reserved() {
        assert!(!is_reserved("true"));
        assert!(!is_reserved("false"));
        assert!(!is_disallowed("true"));
        assert!(!is_disallowed("false"));
    }

    #[test]
    fn struct_is_reserved() {
        assert!(is_reserved("struct"));
        assert!(is_reserved("namespace"));
        assert!(is_reserved("map"));
    }
}
