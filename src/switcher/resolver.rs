//! Compatible locale resolution
//!
//! For the page being viewed, decide which locales have a translation of the
//! same version and where that translation lives.

use std::cmp::Ordering;

use serde::Serialize;
use tracing::{debug, trace};

use crate::locale::{LocaleDescriptor, LocaleTable};
use crate::page::PageContext;
use crate::version::{VersionToken, compare_versions};

/// A locale that covers the current page, with the URL of its translation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibleTarget<'a> {
    pub locale: &'a LocaleDescriptor,
    pub target_url: String,
}

impl CompatibleTarget<'_> {
    pub fn title(&self) -> &str {
        &self.locale.title
    }
}

/// Resolve the version the viewer is actually looking at.
///
/// `master` means the current locale's newest translation, and when the current
/// locale is itself the canonical one (`master` again) it means `global_latest`.
fn effective_current_version<'a>(
    version: &'a VersionToken,
    current_locale: Option<&'a LocaleDescriptor>,
    global_latest: &'a str,
) -> &'a str {
    match version {
        VersionToken::Literal(version) => version,
        VersionToken::Latest => current_locale
            .map(|locale| locale.effective_latest(global_latest))
            .unwrap_or(global_latest),
    }
}

/// Check whether `candidate` has a translation of `current_version`.
///
/// True iff `min_version <= current_version <= effective latest`.
pub fn is_compatible(
    candidate: &LocaleDescriptor,
    current_version: &str,
    global_latest: &str,
) -> bool {
    let candidate_latest = candidate.effective_latest(global_latest);

    let reached = compare_versions(candidate_latest, current_version) != Ordering::Less;
    let covered = compare_versions(&candidate.min_version, current_version) != Ordering::Greater;

    trace!(
        locale = %candidate.code,
        candidate_latest,
        min_version = %candidate.min_version,
        current_version,
        reached,
        covered,
        "Checked locale compatibility"
    );

    reached && covered
}

/// Every locale, in table order, whose documentation covers the page's version.
///
/// Returns an empty list when the page has no recognizable version.
pub fn resolve_compatible_locales<'a>(
    context: &PageContext,
    locales: &'a LocaleTable,
    global_latest: &str,
) -> Vec<CompatibleTarget<'a>> {
    let Some(version) = &context.version else {
        debug!(locale = %context.current_locale, "No version in page URL, offering no locales");
        return Vec::new();
    };

    let current_locale = locales.get(&context.current_locale);
    let current_version = effective_current_version(version, current_locale, global_latest);

    let targets: Vec<CompatibleTarget<'a>> = locales
        .iter()
        .filter(|candidate| is_compatible(candidate, current_version, global_latest))
        .map(|locale| CompatibleTarget {
            locale,
            target_url: build_target_url(context, locale),
        })
        .collect();

    debug!(
        current_version,
        count = targets.len(),
        "Resolved compatible locales"
    );

    targets
}

/// URL of the same page in `locale`.
///
/// `master` is replaced with the locale's own latest token; the section is
/// appended without encoding. A context without version yields the bare prefix.
pub fn build_target_url(context: &PageContext, locale: &LocaleDescriptor) -> String {
    let segment = match &context.version {
        Some(VersionToken::Latest) => locale.latest.to_string(),
        Some(VersionToken::Literal(version)) => version.clone(),
        None => return locale.url_prefix.clone(),
    };

    match &context.section {
        Some(section) => format!("{}{}/{}", locale.url_prefix, segment, section),
        None => format!("{}{}", locale.url_prefix, segment),
    }
}
