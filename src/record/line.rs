use crate::record::Separator;

/// Splits a line on every occurrence of the separator and returns the first
/// two tokens, or `None` if fewer than two tokens result.
///
/// There is no limit on the split count; tokens past the first two are
/// produced and discarded. Empty tokens (from adjacent or trailing
/// separators) count toward the two-token threshold. An empty line yields
/// `None`.
pub fn split_projection(line: &str, separator: &Separator) -> Option<(String, String)> {
    if line.is_empty() {
        return None;
    }
    let mut tokens = line.split(separator.as_str());
    let first = tokens.next()?;
    let second = tokens.next()?;
    Some((first.to_string(), second.to_string()))
}

/// Joins fields with the separator into a single line, without a terminator.
///
/// Zero fields produce the empty string.
pub fn join_fields(fields: &[&str], separator: &Separator) -> String {
    fields.join(separator.as_str())
}
