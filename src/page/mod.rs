//! Page context extraction
//!
//! Pulls the version token and section out of a documentation URL:
//!
//! ```text
//! https://laravel.com/docs/5.8/installation
//!                          ^^^ ^^^^^^^^^^^^
//!                      version  section
//! ```

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::trace;

use crate::locale::LocaleDescriptor;
use crate::version::VersionToken;

/// `master`, `5.8` or `11.x`, optionally followed by `/section-name`
static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(master|\d+\.(?:\d+|x))(?:/([A-Za-z-]+))?").expect("version pattern is valid")
});

/// What is known about the page being viewed. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageContext {
    /// Locale code of the site the page belongs to
    pub current_locale: String,
    /// Version segment of the URL, if the URL has one
    pub version: Option<VersionToken>,
    /// Page name following the version, if any
    pub section: Option<String>,
}

impl PageContext {
    pub fn new(
        current_locale: impl Into<String>,
        version: Option<VersionToken>,
        section: Option<String>,
    ) -> Self {
        Self {
            current_locale: current_locale.into(),
            version,
            section,
        }
    }

    /// Extract the context from `url` on `locale`'s site.
    ///
    /// Only the part after the locale's `url_prefix` is searched, so digits in
    /// the host or prefix are never taken for the version. Never fails;
    /// unmatched parts are `None`.
    pub fn from_url(url: &str, locale: &LocaleDescriptor) -> Self {
        let path = url.strip_prefix(locale.url_prefix.as_str()).unwrap_or(url);
        let (version, section) = match VERSION_RE.captures(path) {
            Some(caps) => {
                let version = caps
                    .get(1)
                    .and_then(|m| m.as_str().parse::<VersionToken>().ok());
                let section = caps.get(2).map(|m| m.as_str().to_string());
                (version, section)
            }
            None => (None, None),
        };

        let context = Self::new(locale.code.as_str(), version, section);
        trace!(url, ?context, "Extracted page context");
        context
    }
}
