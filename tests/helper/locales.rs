//! Locale table fixtures

use std::sync::Arc;

use docs_lang_switch::locale::{DropdownStyle, LocaleDescriptor, LocaleTable, MountPoint};
use docs_lang_switch::version::VersionToken;

/// Builder for small locale tables used across tests
pub struct TableBuilder {
    latest_version: String,
    locales: Vec<LocaleDescriptor>,
}

impl TableBuilder {
    pub fn new(latest_version: &str) -> Self {
        Self {
            latest_version: latest_version.to_string(),
            locales: Vec::new(),
        }
    }

    pub fn with_locale(mut self, code: &str, latest: &str, min_version: &str) -> Self {
        let locale = LocaleDescriptor::new(
            code,
            code.to_uppercase(),
            format!("https://{code}.example.com/docs/"),
            latest.parse::<VersionToken>().unwrap(),
            min_version,
        )
        .with_style(DropdownStyle::Bootstrap4)
        .with_mount(MountPoint::new(".switcher"));
        self.locales.push(locale);
        self
    }

    pub fn build(self) -> Arc<LocaleTable> {
        Arc::new(LocaleTable::new(self.latest_version, self.locales).unwrap())
    }
}

/// Canonical locale tracking `master` plus two translations lagging behind
pub fn modern_table() -> Arc<LocaleTable> {
    TableBuilder::new("11.x")
        .with_locale("en", "master", "4.2")
        .with_locale("ja", "10.0", "5.0")
        .with_locale("ko", "11.x", "8.x")
        .build()
}
