//! Case-insensitive matching shared by the catalog rules and the filter.

/// Check whether `haystack` contains `needle`, ignoring case.
///
/// An empty needle always matches.
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
