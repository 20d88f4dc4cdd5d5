//! Dotted-numeric version comparison
//!
//! Documentation versions are short dotted strings (`4.2`, `5.8`, `11.x`).
//! Comparison is permissive: anything that cannot be compared numerically is
//! treated as equal so a translation is never hidden because of an odd token.

use std::cmp::Ordering;

/// Components that stand for "any release of this line"
const WILDCARDS: [&str; 3] = ["x", "X", "*"];

/// Split a version into its dot-separated components.
///
/// A leading `v` is dropped, so `v5.8` and `5.8` are the same version.
fn components(version: &str) -> Vec<&str> {
    let trimmed = version.trim();
    let trimmed = trimmed.strip_prefix(['v', 'V']).unwrap_or(trimmed);
    trimmed.split('.').map(str::trim).collect()
}

fn numeric(component: &str) -> Option<u64> {
    if WILDCARDS.contains(&component) {
        return None;
    }
    component.parse().ok()
}

/// Compare two versions component by component.
///
/// Examples:
/// - "5.3" < "5.9"
/// - "5.9" < "8.x" < "10.0" < "11.x"
/// - "8.x" == "8.5" (wildcard)
/// - "8" == "8.4" (missing trailing component)
/// - "5.beta" == "5.1" (unparseable component)
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let left = components(a);
    let right = components(b);

    for (l, r) in left.iter().zip(right.iter()) {
        let (Some(l), Some(r)) = (numeric(l), numeric(r)) else {
            continue;
        };
        match l.cmp(&r) {
            Ordering::Equal => {}
            ord => return ord,
        }
    }

    Ordering::Equal
}
