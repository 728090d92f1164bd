//! Type, visibility and signature equivalence rules.
//!
//! Every comparator goes through these functions so the notion of "same
//! type" or "at least as visible" is defined in exactly one place.

use crate::model::{Method, Visibility};

/// Primitive / boxed-wrapper pairs treated as equal under relaxed rules.
const BOXED_PAIRS: &[(&str, &str)] = &[
    ("int", "Integer"),
    ("long", "Long"),
    ("short", "Short"),
    ("byte", "Byte"),
    ("char", "Character"),
    ("boolean", "Boolean"),
    ("float", "Float"),
    ("double", "Double"),
];

/// Rank given to an omitted or unrecognized visibility.
pub const UNKNOWN_VISIBILITY_RANK: u8 = 4;

/// Collapse whitespace runs to a single space and trim.
#[must_use]
pub fn normalize_whitespace(ty: &str) -> String {
    ty.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strict type equality: whitespace-normalized verbatim comparison.
#[must_use]
pub fn types_equal_strict(a: &str, b: &str) -> bool {
    normalize_whitespace(a) == normalize_whitespace(b)
}

/// Normalize a type for relaxed comparison.
///
/// Whitespace is collapsed, `T...` becomes `T[]`, generic argument lists are
/// erased and spaces around array brackets are dropped. Qualification is
/// kept; [`types_equal_relaxed`] handles simple names separately.
#[must_use]
pub fn relaxed_normalize(ty: &str) -> String {
    let collapsed = normalize_whitespace(ty).replace("...", "[]");
    let erased = erase_generics(&collapsed);
    tighten_brackets(&erased)
}

/// Relaxed type equality.
///
/// True if any of these hold, checked in order: the relaxed normal forms are
/// identical; or both have the same array depth and their base types agree
/// by simple (unqualified) name or form a primitive/wrapper pair.
///
/// The relation is reflexive and symmetric.
#[must_use]
pub fn types_equal_relaxed(a: &str, b: &str) -> bool {
    let (na, nb) = (relaxed_normalize(a), relaxed_normalize(b));
    if na == nb {
        return true;
    }

    let (base_a, depth_a) = split_array(&na);
    let (base_b, depth_b) = split_array(&nb);
    if depth_a != depth_b {
        return false;
    }

    let (simple_a, simple_b) = (simple_name(base_a), simple_name(base_b));
    simple_a == simple_b || is_boxed_pair(simple_a, simple_b)
}

/// Map a visibility to its rank, most open first.
///
/// `+` = 0, `#` = 1, `~` = 2, `-` = 3, omitted = 4.
#[must_use]
pub const fn visibility_rank(visibility: Option<Visibility>) -> u8 {
    match visibility {
        Some(Visibility::Public) => 0,
        Some(Visibility::Protected) => 1,
        Some(Visibility::Package) => 2,
        Some(Visibility::Private) => 3,
        None => UNKNOWN_VISIBILITY_RANK,
    }
}

/// Whether `a` is at least as visible as `b`.
#[must_use]
pub const fn at_least_as_visible(a: Option<Visibility>, b: Option<Visibility>) -> bool {
    visibility_rank(a) <= visibility_rank(b)
}

/// Exact-match lookup key: `name(p1,p2)` with relaxed-normalized parameters.
///
/// Only used for lookup, never shown to users.
#[must_use]
pub fn signature_key(name: &str, parameters: &[String]) -> String {
    let params: Vec<String> = parameters.iter().map(|p| relaxed_normalize(p)).collect();
    format!("{}({})", name.trim(), params.join(","))
}

/// [`signature_key`] for a method; name-only entries key as zero parameters.
#[must_use]
pub fn method_key(method: &Method) -> String {
    signature_key(&method.name, method.parameter_types())
}

/// Whether two methods match under relaxed rules: same name, same arity,
/// and every parameter pair relaxed-equal.
#[must_use]
pub fn parameters_match_relaxed(a: &Method, b: &Method) -> bool {
    a.name == b.name
        && a.arity() == b.arity()
        && a
            .parameter_types()
            .iter()
            .zip(b.parameter_types())
            .all(|(pa, pb)| types_equal_relaxed(pa, pb))
}

fn erase_generics(ty: &str) -> String {
    let mut out = String::with_capacity(ty.len());
    let mut depth = 0usize;
    for c in ty.chars() {
        match c {
            '<' => depth += 1,
            '>' if depth > 0 => depth -= 1,
            _ if depth > 0 => {}
            _ => out.push(c),
        }
    }
    out
}

fn tighten_brackets(ty: &str) -> String {
    let chars: Vec<char> = ty.chars().collect();
    let mut out = String::with_capacity(ty.len());
    for (i, &c) in chars.iter().enumerate() {
        if c == ' ' {
            let prev = i.checked_sub(1).map(|j| chars[j]);
            let next = chars.get(i + 1).copied();
            if matches!(next, Some('[' | ']')) || matches!(prev, Some('[')) {
                continue;
            }
        }
        out.push(c);
    }
    out.trim().to_string()
}

fn split_array(ty: &str) -> (&str, usize) {
    let mut base = ty;
    let mut depth = 0;
    while let Some(stripped) = base.strip_suffix("[]") {
        base = stripped.trim_end();
        depth += 1;
    }
    (base, depth)
}

fn simple_name(ty: &str) -> &str {
    ty.rsplit(['.', ':']).next().unwrap_or(ty).trim()
}

fn is_boxed_pair(a: &str, b: &str) -> bool {
    BOXED_PAIRS
        .iter()
        .any(|&(p, w)| (a == p && b == w) || (a == w && b == p))
}
