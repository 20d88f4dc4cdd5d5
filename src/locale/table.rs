//! Immutable locale table
//!
//! Built once at startup (from the built-in defaults or a config file) and
//! shared behind an `Arc`. Declaration order is preserved and is the order
//! targets are offered in.

use indexmap::IndexMap;
use tracing::debug;

use crate::config::{ConfigError, DEFAULT_LATEST_VERSION};
use crate::locale::types::{DropdownStyle, LocaleDescriptor, MountPoint};
use crate::version::VersionToken;

/// Selector of the version switcher in the laravel.com / laravel.tw docs nav
const DOCS_NAV_SWITCHER: &str = ".docs nav.main .switcher";
/// Version dropdown in the learnku book sidebar
const LEARNKU_BOOK_DROPDOWN: &str = ".book .ui.dropdown";
/// Version dropdown in the learnku article header
const LEARNKU_HEADER_DROPDOWN: &str = ".book-main-column .extra-padding > h1 .ui.dropdown";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleTable {
    latest_version: String,
    locales: IndexMap<String, LocaleDescriptor>,
}

impl LocaleTable {
    /// Build a table from locales in declaration order.
    ///
    /// Fails if two locales share a code.
    pub fn new(
        latest_version: impl Into<String>,
        locales: impl IntoIterator<Item = LocaleDescriptor>,
    ) -> Result<Self, ConfigError> {
        let mut map = IndexMap::new();
        for locale in locales {
            let code = locale.code.clone();
            if map.insert(code.clone(), locale).is_some() {
                return Err(ConfigError::DuplicateLocale(code));
            }
        }

        Ok(Self {
            latest_version: latest_version.into(),
            locales: map,
        })
    }

    /// The English, Traditional Chinese and Simplified Chinese Laravel docs
    pub fn builtin() -> Self {
        let locales = builtin_locales()
            .into_iter()
            .map(|locale| (locale.code.clone(), locale))
            .collect();

        Self {
            latest_version: DEFAULT_LATEST_VERSION.to_string(),
            locales,
        }
    }

    /// Newest release line across all locales; what `master` means for the canonical locale
    pub fn latest_version(&self) -> &str {
        &self.latest_version
    }

    pub fn get(&self, code: &str) -> Option<&LocaleDescriptor> {
        self.locales.get(code)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LocaleDescriptor> {
        self.locales.values()
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    /// Find the locale whose documentation `url` belongs to.
    pub fn detect(&self, url: &str) -> Option<&LocaleDescriptor> {
        let found = self
            .locales
            .values()
            .find(|locale| url.starts_with(&locale.url_prefix));
        debug!(url, locale = found.map(|l| l.code.as_str()), "Detected locale");
        found
    }
}

impl Default for LocaleTable {
    fn default() -> Self {
        Self::builtin()
    }
}

pub(crate) fn builtin_locales() -> Vec<LocaleDescriptor> {
    vec![
        LocaleDescriptor::new(
            "en",
            "English",
            "https://laravel.com/docs/",
            VersionToken::Latest,
            "4.2",
        )
        .with_style(DropdownStyle::Tailwind)
        .with_mount(MountPoint::new(DOCS_NAV_SWITCHER)),
        LocaleDescriptor::new(
            "zh_tw",
            "繁體中文",
            "https://laravel.tw/docs/",
            VersionToken::literal("5.3"),
            "4.2",
        )
        .with_style(DropdownStyle::Bootstrap4)
        .with_mount(MountPoint::new(DOCS_NAV_SWITCHER)),
        LocaleDescriptor::new(
            "zh_cn",
            "简体中文",
            "https://learnku.com/docs/laravel/",
            VersionToken::literal("5.8"),
            "5.1",
        )
        .with_style(DropdownStyle::Fomantic)
        .with_mount(MountPoint::emphasized(LEARNKU_BOOK_DROPDOWN))
        .with_mount(MountPoint::new(LEARNKU_HEADER_DROPDOWN)),
    ]
}
