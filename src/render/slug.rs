//! Title to slug conversion.
//!
//! The slug is produced by an ordered list of literal substitutions applied
//! to the lowercased title. Order matters: whitespace is turned into hyphens
//! before punctuation is stripped, and the `--` collapse runs once, after the
//! multi-character tokens (`-dot-`, `-por-cento-`) have been inserted.

/// Ordered (pattern, replacement) rules applied after lowercasing
const RULES: &[(&str, &str)] = &[
    ("- ", ""),
    (", ", "-"),
    (" ", "-"),
    ("ç", "c"),
    ("á", "a"),
    ("ã", "a"),
    ("é", "e"),
    ("ê", "e"),
    ("í", "i"),
    ("ó", "o"),
    ("õ", "o"),
    ("ú", "u"),
    ("ñ", "n"),
    ("ü", "u"),
    (".", "-dot-"),
    ("/", "-"),
    ("!", ""),
    ("?", ""),
    ("(", ""),
    (")", ""),
    ("[", ""),
    ("]", ""),
    ("{", ""),
    ("}", ""),
    ("=", ""),
    ("+", ""),
    ("*", ""),
    ("&", ""),
    ("#", ""),
    ("$", ""),
    ("%", "-por-cento-"),
    ("'", ""),
    (":", ""),
    // Single pass: "---" becomes "--", not "-".
    ("--", "-"),
    ("_", "-"),
];

/// Convert a talk title into a filename and URL slug.
///
/// No trimming and no collision handling is done; two titles that map to
/// the same slug will write the same file.
pub fn slugify(title: &str) -> String {
    RULES
        .iter()
        .fold(title.to_lowercase(), |slug, &(pattern, replacement)| {
            slug.replace(pattern, replacement)
        })
}
