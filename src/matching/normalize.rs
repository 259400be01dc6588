// Tag normalization shared by the loader and the matcher.
//
// Symptoms are compared in exactly one form: surrounding whitespace trimmed,
// lowercased. Everything that stores or compares a tag goes through here.

/// Separator between symptoms inside a single database field.
pub const TAG_DELIMITER: char = ';';

/// Normalize a single tag: trim surrounding whitespace and lowercase.
pub fn normalize_tag(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Split a delimited tag field into normalized tags, in source order.
///
/// Pieces that are empty after trimming (`"a;;b"`, a trailing `;`) are dropped.
pub fn split_tags(field: &str, delimiter: char) -> Vec<String> {
    field
        .split(delimiter)
        .map(normalize_tag)
        .filter(|tag| !tag.is_empty())
        .collect()
}
