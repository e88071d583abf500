//! Tag helpers
//!
//! Tags are free-form strings owned by each note. Matching is
//! case-insensitive, but stored tags keep the casing the user typed.

/// Tag filter value meaning "no tag restriction"
pub const TAG_ALL: &str = "All";

/// Fixed tag menu offered by the filter panel, `All` first
pub const TAG_CATALOG: [&str; 5] = [TAG_ALL, "Work", "Personal", "Ideas", "Todo"];

/// Parse a comma-separated tag field.
///
/// Segments are trimmed and empty ones dropped. Order and duplicates are kept.
///
/// # Examples
///
/// ```
/// use ocean_core::models::parse_tags;
///
/// let tags = parse_tags(" work,  Personal ,,todo ");
/// assert_eq!(tags, vec!["work", "Personal", "todo"]);
/// ```
#[must_use]
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Case-insensitive membership test
#[must_use]
pub fn has_tag(tags: &[String], tag: &str) -> bool {
    let wanted = tag.to_lowercase();
    tags.iter().any(|candidate| candidate.to_lowercase() == wanted)
}

/// Whether a tag filter value imposes no restriction.
///
/// An empty value counts as `All`.
#[must_use]
pub fn is_all_tag(tag: &str) -> bool {
    tag.is_empty() || tag == TAG_ALL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags_trims_and_drops_empty() {
        assert_eq!(
            parse_tags(" work,  Personal ,,todo "),
            vec!["work", "Personal", "todo"]
        );
    }

    #[test]
    fn test_parse_tags_keeps_duplicates_and_order() {
        assert_eq!(parse_tags("b, a, b"), vec!["b", "a", "b"]);
    }

    #[test]
    fn test_parse_tags_empty_input() {
        assert!(parse_tags("").is_empty());
        assert!(parse_tags(" , ,").is_empty());
    }

    #[test]
    fn test_has_tag_ignores_case() {
        let tags = vec!["Work".to_string(), "ideas".to_string()];
        assert!(has_tag(&tags, "work"));
        assert!(has_tag(&tags, "IDEAS"));
        assert!(!has_tag(&tags, "todo"));
    }

    #[test]
    fn test_catalog_starts_with_all() {
        assert_eq!(TAG_CATALOG[0], TAG_ALL);
        assert!(is_all_tag(TAG_CATALOG[0]));
        assert!(!is_all_tag("all"));
    }

    #[test]
    fn test_empty_tag_means_all() {
        assert!(is_all_tag(""));
        assert!(!is_all_tag("Work"));
    }
}
