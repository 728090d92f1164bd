//! Entity comparator implementations.
//!
//! Each comparator handles one family of differences:
//! - [`ClassComparator`]: class presence on each side
//! - [`AttributeComparator`]: field consistency within shared classes
//! - [`MethodComparator`]: method consistency with overload matching
//! - [`RelationshipComparator`]: inheritance, ownership and dependency edges

mod attributes;
mod classes;
mod methods;
mod relationships;

pub use attributes::AttributeComparator;
pub use classes::ClassComparator;
pub use methods::MethodComparator;
pub use relationships::RelationshipComparator;

use strsim::jaro_winkler;

/// Minimum Jaro-Winkler similarity for a "did you mean" hint.
pub const HINT_SIMILARITY_THRESHOLD: f64 = 0.85;

/// Find the most similar candidate name, if any is close enough.
///
/// Exact matches are ignored; they would already have matched.
pub(crate) fn closest_name<'a, I>(name: &str, candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<(&str, f64)> = None;
    for candidate in candidates {
        if candidate == name {
            continue;
        }
        let score = jaro_winkler(name, candidate);
        if score < HINT_SIMILARITY_THRESHOLD {
            continue;
        }
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((candidate, score));
        }
    }
    best.map(|(candidate, _)| candidate)
}

/// Append a "did you mean" hint to a tip when one is available.
pub(crate) fn tip_with_hint(tip: String, hint: Option<&str>) -> String {
    match hint {
        Some(candidate) => format!("{tip} (did you mean '{candidate}'?)"),
        None => tip,
    }
}

/// Visibility symbol for display, or the missing placeholder.
pub(crate) fn visibility_value(visibility: Option<crate::model::Visibility>) -> String {
    visibility.map_or_else(
        || super::MISSING.to_string(),
        |v| v.symbol().to_string(),
    )
}
