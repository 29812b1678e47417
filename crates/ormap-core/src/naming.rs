//! Default table naming.

/// Simple name of a possibly qualified class name.
///
/// Qualifiers may be separated by `::`, `\` or `.`. Empty trailing segments are
/// skipped; a name made only of separators is returned as is.
pub fn simple_name(class_name: &str) -> &str {
    class_name
        .rsplit(|c: char| c == ':' || c == '\\' || c == '.')
        .find(|segment| !segment.is_empty())
        .unwrap_or(class_name)
}

/// Derive the default table name of a class.
///
/// Lowercases the simple name and puts an underscore before every uppercase letter
/// that follows a word character.
pub fn tableize(class_name: &str) -> String {
    let name = simple_name(class_name);
    let mut table = String::with_capacity(name.len() + 4);
    let mut prev: Option<char> = None;

    for c in name.chars() {
        if c.is_uppercase() && prev.is_some_and(|p| p.is_alphanumeric() || p == '_') {
            table.push('_');
        }
        table.extend(c.to_lowercase());
        prev = Some(c);
    }

    table
}
