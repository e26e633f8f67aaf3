//! Page presentation logic.
//!
//! Pure, synchronous transforms applied to records already fetched through the
//! CRUD layer: chronological sorting, facet filters and text search. Each
//! takes a list and returns a list; none of them touch the store.

mod events;
mod members;
mod projects;
mod roadmap;
mod timeline;

pub use events::*;
pub use members::*;
pub use projects::*;
pub use roadmap::*;
pub use timeline::*;

/// The facet option that disables a filter.
pub const ALL: &str = "all";

/// Filter options for a free-text field: `"all"` followed by the distinct
/// non-empty values, in first-seen order.
pub fn facet_options<'a, T, F>(items: &'a [T], field: F) -> Vec<String>
where
    F: Fn(&'a T) -> Option<&'a str>,
{
    let mut options = vec![ALL.to_string()];
    for value in items.iter().filter_map(field) {
        if !value.is_empty() && !options.iter().any(|o| o == value) {
            options.push(value.to_string());
        }
    }
    options
}

/// Keep the items whose field equals `selected`; `"all"` (or no selection) keeps everything.
pub fn filter_by_facet<T, F>(items: Vec<T>, selected: Option<&str>, field: F) -> Vec<T>
where
    F: Fn(&T) -> Option<&str>,
{
    match selected {
        None | Some(ALL) => items,
        Some(wanted) => items
            .into_iter()
            .filter(|item| field(item) == Some(wanted))
            .collect(),
    }
}

/// Case-insensitive substring match; an empty query matches everything.
pub fn contains_ignore_case(haystack: Option<&str>, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    haystack
        .map(|h| h.to_lowercase().contains(&query.to_lowercase()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facet_options_distinct_in_first_seen_order() {
        let statuses = [Some("Active"), None, Some("Archived"), Some(""), Some("Active")];
        let options = facet_options(&statuses, |s| *s);
        assert_eq!(options, vec!["all", "Active", "Archived"]);
    }

    #[test]
    fn test_facet_options_empty_list() {
        let none: [Option<&str>; 0] = [];
        assert_eq!(facet_options(&none, |s| *s), vec!["all"]);
    }

    #[test]
    fn test_filter_by_facet() {
        let items = vec![("a", Some("Infra")), ("b", Some("Community")), ("c", None)];

        let all = filter_by_facet(items.clone(), Some(ALL), |i| i.1);
        assert_eq!(all.len(), 3);

        let infra = filter_by_facet(items.clone(), Some("Infra"), |i| i.1);
        assert_eq!(infra, vec![("a", Some("Infra"))]);

        let unknown = filter_by_facet(items, Some("Nope"), |i| i.1);
        assert!(unknown.is_empty());
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case(Some("Staff Engineer"), "ENGINE"));
        assert!(!contains_ignore_case(Some("Designer"), "engine"));
        assert!(!contains_ignore_case(None, "x"));
        assert!(contains_ignore_case(None, ""));
    }
}
