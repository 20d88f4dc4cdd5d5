//! Locale descriptors

use serde::{Deserialize, Serialize};

use crate::version::VersionToken;

/// CSS framework the host site is built with, which decides the dropdown markup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DropdownStyle {
    /// Bootstrap 4 (`.dropdown` / `.dropdown-menu`)
    #[default]
    Bootstrap4,
    /// Fomantic-UI (`.ui.dropdown` / `.menu`)
    Fomantic,
    /// Tailwind utility classes
    Tailwind,
}

/// Where a switcher is attached on the host page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MountPoint {
    /// CSS selector of the anchor element
    pub selector: String,
    /// Render the highlighted variant (learnku's book sidebar uses a green label)
    #[serde(default)]
    pub emphasized: bool,
}

impl MountPoint {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            emphasized: false,
        }
    }

    pub fn emphasized(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            emphasized: true,
        }
    }
}

/// One supported documentation language and the site that hosts it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleDescriptor {
    /// Unique locale code (e.g., "en", "zh_tw")
    pub code: String,
    /// Label shown in the dropdown
    pub title: String,
    /// Base URL the version segment is appended to
    pub url_prefix: String,
    /// Newest version this locale has translated; `master` mirrors the global latest
    pub latest: VersionToken,
    /// Oldest version this locale has any translation for
    pub min_version: String,
    #[serde(default)]
    pub style: DropdownStyle,
    #[serde(default)]
    pub mounts: Vec<MountPoint>,
}

impl LocaleDescriptor {
    pub fn new(
        code: impl Into<String>,
        title: impl Into<String>,
        url_prefix: impl Into<String>,
        latest: VersionToken,
        min_version: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
            url_prefix: url_prefix.into(),
            latest,
            min_version: min_version.into(),
            style: DropdownStyle::default(),
            mounts: Vec::new(),
        }
    }

    pub fn with_style(mut self, style: DropdownStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_mount(mut self, mount: MountPoint) -> Self {
        self.mounts.push(mount);
        self
    }

    /// The newest version this locale covers, with `master` replaced by `global_latest`
    pub fn effective_latest<'a>(&'a self, global_latest: &'a str) -> &'a str {
        self.latest.resolve(global_latest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_with_default_style_and_mounts() {
        let locale: LocaleDescriptor = serde_json::from_value(json!({
            "code": "ja",
            "title": "日本語",
            "urlPrefix": "https://example.jp/docs/",
            "latest": "10.x",
            "minVersion": "8.x"
        }))
        .unwrap();

        assert_eq!(locale.latest, VersionToken::literal("10.x"));
        assert_eq!(locale.style, DropdownStyle::Bootstrap4);
        assert!(locale.mounts.is_empty());
    }

    #[test]
    fn deserializes_style_and_mounts() {
        let locale: LocaleDescriptor = serde_json::from_value(json!({
            "code": "zh_cn",
            "title": "简体中文",
            "urlPrefix": "https://learnku.com/docs/laravel/",
            "latest": "master",
            "minVersion": "5.1",
            "style": "fomantic",
            "mounts": [
                { "selector": ".book .ui.dropdown", "emphasized": true },
                { "selector": "h1 .ui.dropdown" }
            ]
        }))
        .unwrap();

        assert_eq!(locale.latest, VersionToken::Latest);
        assert_eq!(locale.style, DropdownStyle::Fomantic);
        assert_eq!(
            locale.mounts,
            vec![
                MountPoint::emphasized(".book .ui.dropdown"),
                MountPoint::new("h1 .ui.dropdown"),
            ]
        );
    }

    #[test]
    fn effective_latest_resolves_master() {
        let en = LocaleDescriptor::new("en", "English", "https://a/", VersionToken::Latest, "4.2");
        let tw = LocaleDescriptor::new(
            "zh_tw",
            "繁體中文",
            "https://b/",
            VersionToken::literal("5.3"),
            "4.2",
        );

        assert_eq!(en.effective_latest("5.9"), "5.9");
        assert_eq!(tw.effective_latest("5.9"), "5.3");
    }
}
