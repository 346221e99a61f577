// Lexical structure detection over submitted source text
use coach_common::types::{Tag, TagSet};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// One pattern set per tag, tested against the lower-cased source.
    /// Purely lexical: no parsing, no AST. False positives and negatives
    /// are accepted imprecision, not defects.
    static ref TAG_PATTERNS: Vec<(Tag, Regex)> = vec![
        (
            Tag::Array,
            Regex::new(r"\barray\b|\[\]|\bpush\b|\bpop\b|\bshift\b|\bunshift\b")
                .expect("array pattern"),
        ),
        (
            Tag::Hashmap,
            Regex::new(r"\bmap\b|\bobject\b|\bdict\b|\bhash\b|\{\}").expect("hashmap pattern"),
        ),
        (
            Tag::Stack,
            Regex::new(r"\bstack\b|\bpush\b.*\bpop\b").expect("stack pattern"),
        ),
        (
            Tag::Queue,
            Regex::new(r"\bqueue\b|\benqueue\b|\bdequeue\b").expect("queue pattern"),
        ),
        (
            Tag::Tree,
            Regex::new(r"\btree\b|\bnode\b.*\bleft\b.*\bright\b").expect("tree pattern"),
        ),
        (
            Tag::Graph,
            Regex::new(r"\bgraph\b|\badjacency\b").expect("graph pattern"),
        ),
        (
            Tag::Recursion,
            Regex::new(r"\brecursion\b|\brecursive\b").expect("recursion pattern"),
        ),
        (
            Tag::Loop,
            Regex::new(r"\bfor\s*\(.*\)|\bwhile\s*\(.*\)").expect("loop pattern"),
        ),
        // A loop whose body opens another loop before the next closing brace.
        // The body scope deliberately stops at the first `}`; see DESIGN.md.
        (
            Tag::NestedLoop,
            Regex::new(r"for\s*\([^)]*\)\s*\{[^}]*for\s*\([^)]*\)").expect("nested loop pattern"),
        ),
        (
            Tag::Sorting,
            Regex::new(r"\bsort\b|\bquicksort\b|\bmergesort\b|\bheapsort\b")
                .expect("sorting pattern"),
        ),
    ];
}

/// Detect data structures and algorithm patterns used in `code`.
///
/// Deterministic and case-insensitive. Patterns are independent, so one
/// snippet may yield several tags; unmatched patterns simply leave their
/// tag absent. Empty or unparseable input yields an empty set.
pub fn classify(code: &str) -> TagSet {
    let lowered = code.to_lowercase();

    TAG_PATTERNS
        .iter()
        .filter(|(_, pattern)| pattern.is_match(&lowered))
        .map(|(tag, _)| *tag)
        .collect()
}
