use unicode_general_category::{GeneralCategory, get_general_category};

/// Go's reserved words. Identifiers matching one of these exactly are rejected.
const GO_KEYWORDS: [&str; 25] = [
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

/// Checks whether `name` can be used as a Go identifier: a letter or `_`
/// followed by letters, decimal digits and underscores, and not a keyword.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if is_letter(first) || first == '_' => {}
        _ => return false,
    }
    if !chars.all(|c| is_letter(c) || is_decimal_digit(c) || c == '_') {
        return false;
    }
    !GO_KEYWORDS.contains(&name)
}

/// Unicode category L.
fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Unicode category Nd.
fn is_decimal_digit(c: char) -> bool {
    get_general_category(c) == GeneralCategory::DecimalNumber
}
