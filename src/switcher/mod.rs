//! Language switcher
//!
//! Ties the pieces together for one page view:
//!
//! ```text
//! PageLocation ──▶ LocaleTable::detect ──▶ PageContext::from_url
//!                                                 │
//!                                                 ▼
//!             Injection ◀── Dropdown ◀── resolve_compatible_locales
//! ```
//!
//! Nothing is cached between calls. A host that navigates client-side (learnku
//! fires `pjax:end`) calls [`Switcher::mount`] again with the new location.

pub mod render;
pub mod resolver;

use std::sync::Arc;

#[cfg(test)]
use mockall::automock;
use serde::Serialize;
use tracing::{debug, info};

use crate::locale::{LocaleDescriptor, LocaleTable};
use crate::page::PageContext;
use crate::switcher::render::{ParentRestyle, dropdown_for};

pub use resolver::{CompatibleTarget, build_target_url, resolve_compatible_locales};

/// Read access to the host page's location
#[cfg_attr(test, automock)]
pub trait PageLocation {
    /// Full URL of the current document
    fn href(&self) -> String;
}

impl PageLocation for str {
    fn href(&self) -> String {
        self.to_string()
    }
}

impl PageLocation for String {
    fn href(&self) -> String {
        self.clone()
    }
}

/// Markup to attach next to one anchor element
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Injection {
    /// CSS selector of the anchor; a missing anchor means skip this injection
    pub selector: String,
    pub html: String,
    /// Style for the dropdown's neighbours, applied after insertion
    pub parent_restyle: Option<ParentRestyle>,
}

/// Result of mounting the switcher on a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Mount<'a> {
    pub locale: &'a LocaleDescriptor,
    pub context: PageContext,
    pub targets: Vec<CompatibleTarget<'a>>,
    pub injections: Vec<Injection>,
}

pub struct Switcher {
    locales: Arc<LocaleTable>,
}

impl Switcher {
    pub fn new(locales: Arc<LocaleTable>) -> Self {
        Self { locales }
    }

    pub fn locales(&self) -> &LocaleTable {
        &self.locales
    }

    /// Build the context for `url` without rendering anything.
    ///
    /// Returns `None` if the URL is not a page of any known locale.
    pub fn context(&self, url: &str) -> Option<PageContext> {
        let locale = self.locales.detect(url)?;
        Some(PageContext::from_url(url, locale))
    }

    /// Compatible targets for `url`, empty for unknown pages.
    pub fn targets(&self, url: &str) -> Vec<CompatibleTarget<'_>> {
        match self.context(url) {
            Some(context) => {
                resolve_compatible_locales(&context, &self.locales, self.locales.latest_version())
            }
            None => Vec::new(),
        }
    }

    /// Compute everything needed to show the switcher on the current page.
    ///
    /// Returns `None` when the page belongs to no known locale, in which case
    /// the host page is left untouched.
    pub fn mount<L: PageLocation + ?Sized>(&self, location: &L) -> Option<Mount<'_>> {
        let url = location.href();
        let Some(locale) = self.locales.detect(&url) else {
            debug!(url = %url, "Page is not part of any known documentation site");
            return None;
        };

        let context = PageContext::from_url(&url, locale);
        let targets =
            resolve_compatible_locales(&context, &self.locales, self.locales.latest_version());

        let dropdown = dropdown_for(locale.style);
        let injections = locale
            .mounts
            .iter()
            .map(|mount| Injection {
                selector: mount.selector.clone(),
                html: dropdown.render(&locale.title, &targets, mount.emphasized),
                parent_restyle: dropdown.parent_restyle(),
            })
            .collect::<Vec<_>>();

        info!(
            url = %url,
            locale = %locale.code,
            targets = targets.len(),
            injections = injections.len(),
            "Mounted language switcher"
        );

        Some(Mount {
            locale,
            context,
            targets,
            injections,
        })
    }
}
