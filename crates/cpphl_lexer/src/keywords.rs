//! Reserved words.
use phf::{Set, phf_set};

static KEYWORDS: Set<&'static str> = phf_set! {
    // storage class
    "auto", "register", "static", "extern", "mutable", "thread_local",
    // qualifiers
    "const", "volatile", "constexpr", "consteval", "constinit",
    // fundamental types
    "void", "bool", "char", "short", "int", "long", "float", "double",
    "signed", "unsigned", "wchar_t", "char8_t", "char16_t", "char32_t",
    // compound types
    "class", "struct", "union", "enum", "typename", "typedef",
    // control flow
    "if", "else", "switch", "case", "default", "for", "while", "do",
    "break", "continue", "return", "goto",
    // exceptions
    "try", "catch", "throw", "noexcept",
    // classes
    "public", "private", "protected", "virtual", "override", "final",
    "friend", "this", "operator", "new", "delete",
    // templates
    "template", "concept", "requires",
    // namespaces
    "namespace", "using",
    "sizeof", "alignof", "alignas", "decltype", "typeid",
    "static_cast", "dynamic_cast", "const_cast", "reinterpret_cast",
    "static_assert", "inline", "explicit", "export", "module", "import",
    "co_await", "co_yield", "co_return",
    // literal keywords
    "true", "false", "nullptr", "NULL",
};

/// Exact, case-sensitive membership test.
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(word)
}

/// All reserved words, in no particular order.
pub fn keywords() -> impl Iterator<Item = &'static str> {
    KEYWORDS.iter().copied()
}
