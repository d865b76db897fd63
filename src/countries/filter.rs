//! Country autocomplete filter.
//!
//! Pure, synchronous, restartable: every call computes the full result over
//! the given list. No fuzzy matching, no ranking — original list order is
//! preserved.

use crate::core::CountryRecord;

/// Maximum number of suggestions returned per call.
pub const MAX_RESULTS: usize = 10;

/// Filter a country list by a search term.
///
/// An empty (after trimming) term returns the first [`MAX_RESULTS`] records
/// unmodified. Otherwise returns the first [`MAX_RESULTS`] records whose
/// name or alpha-2 code contains the term case-insensitively.
pub fn filter_countries<'a>(list: &'a [CountryRecord], term: &str) -> Vec<&'a CountryRecord> {
    let term = term.trim();
    if term.is_empty() {
        return list.iter().take(MAX_RESULTS).collect();
    }

    let needle = term.to_lowercase();
    list.iter()
        .filter(|c| {
            c.name.to_lowercase().contains(&needle)
                || c.alpha2_code.to_lowercase().contains(&needle)
        })
        .take(MAX_RESULTS)
        .collect()
}
