//! End-to-end switcher tests against the public API

mod helper;

use std::cmp::Ordering;
use std::io::Write;
use std::sync::Arc;

use rstest::rstest;
use tempfile::NamedTempFile;

use docs_lang_switch::config::load_table;
use docs_lang_switch::locale::LocaleTable;
use docs_lang_switch::page::PageContext;
use docs_lang_switch::switcher::{Switcher, build_target_url, resolve_compatible_locales};
use docs_lang_switch::version::compare_versions;

use helper::locales::{TableBuilder, modern_table};

fn codes(switcher: &Switcher, url: &str) -> Vec<String> {
    switcher
        .targets(url)
        .iter()
        .map(|t| t.locale.code.clone())
        .collect()
}

#[rstest]
#[case("https://en.example.com/docs/master/installation", &["en", "ko"])]
#[case("https://en.example.com/docs/11.x/installation", &["en", "ko"])]
#[case("https://en.example.com/docs/10.0/installation", &["en", "ja", "ko"])]
#[case("https://en.example.com/docs/5.8/installation", &["en", "ja"])]
#[case("https://ja.example.com/docs/master/installation", &["en", "ja", "ko"])]
#[case("https://en.example.com/docs/4.1/installation", &[])]
#[case("https://en.example.com/docs/installation", &[])]
fn resolves_targets_for_url(#[case] url: &str, #[case] expected: &[&str]) {
    let switcher = Switcher::new(modern_table());
    assert_eq!(codes(&switcher, url), expected);
}

#[test]
fn current_locale_is_offered_when_its_own_range_covers_the_page() {
    let table = modern_table();
    let switcher = Switcher::new(Arc::clone(&table));

    for locale in table.iter() {
        let version = locale.effective_latest(table.latest_version());
        let url = format!("{}{}/routing", locale.url_prefix, version);
        assert!(
            codes(&switcher, &url).contains(&locale.code),
            "{} missing from its own page {}",
            locale.code,
            url
        );
    }
}

#[test]
fn every_target_covers_the_viewed_version() {
    let table = modern_table();
    let latest = table.latest_version();

    for version in ["4.2", "5.0", "5.8", "8.x", "9.x", "10.0", "11.x"] {
        let context = PageContext::new("en", Some(version.parse().unwrap()), None);
        for target in resolve_compatible_locales(&context, &table, latest) {
            let locale = target.locale;
            assert_ne!(
                compare_versions(&locale.min_version, version),
                Ordering::Greater
            );
            assert_ne!(
                compare_versions(locale.effective_latest(latest), version),
                Ordering::Less
            );
        }
    }
}

#[test]
fn master_page_links_each_locale_at_its_latest() {
    let switcher = Switcher::new(modern_table());
    let context = switcher
        .context("https://ja.example.com/docs/master/queues")
        .unwrap();
    let table = switcher.locales();

    let urls: Vec<String> = table
        .iter()
        .map(|locale| build_target_url(&context, locale))
        .collect();

    assert_eq!(
        urls,
        vec![
            "https://en.example.com/docs/master/queues",
            "https://ja.example.com/docs/10.0/queues",
            "https://ko.example.com/docs/11.x/queues",
        ]
    );
}

#[test]
fn builtin_table_round_trip_through_laravel_urls() {
    let switcher = Switcher::new(Arc::new(LocaleTable::builtin()));
    let targets = switcher.targets("https://laravel.tw/docs/5.3/validation");
    let urls: Vec<&str> = targets.iter().map(|t| t.target_url.as_str()).collect();

    assert_eq!(
        urls,
        vec![
            "https://laravel.com/docs/5.3/validation",
            "https://laravel.tw/docs/5.3/validation",
            "https://learnku.com/docs/laravel/5.3/validation",
        ]
    );
}

#[test]
fn mount_renders_configured_style() {
    let switcher = Switcher::new(modern_table());
    let mount = switcher
        .mount("https://ko.example.com/docs/11.x/installation")
        .unwrap();

    assert_eq!(mount.injections.len(), 1);
    assert_eq!(mount.injections[0].selector, ".switcher");
    assert!(mount.injections[0].html.starts_with(r#"<div class="dropdown dropdown-lang""#));
    assert!(
        mount.injections[0]
            .html
            .contains(r#"href="https://en.example.com/docs/11.x/installation""#)
    );
}

#[test]
fn table_from_config_file_drives_resolution() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "latestVersion": "2.0",
            "locales": [
                {{ "code": "a", "title": "A", "urlPrefix": "https://a.test/", "latest": "master", "minVersion": "1.0" }},
                {{ "code": "b", "title": "B", "urlPrefix": "https://b.test/", "latest": "1.5", "minVersion": "1.0", "style": "tailwind" }}
            ]
        }}"#
    )
    .unwrap();

    let switcher = Switcher::new(Arc::new(load_table(Some(file.path())).unwrap()));

    assert_eq!(codes(&switcher, "https://b.test/1.2/intro"), vec!["a", "b"]);
    assert_eq!(codes(&switcher, "https://a.test/master/intro"), vec!["a"]);

    let mount = switcher.mount("https://b.test/1.2/intro").unwrap();
    assert!(mount.injections.is_empty());
}

#[test]
fn duplicate_locale_codes_are_rejected() {
    let result = LocaleTable::new(
        "1.0",
        TableBuilder::new("1.0")
            .with_locale("en", "master", "1.0")
            .build()
            .iter()
            .cloned()
            .chain(modern_table().iter().cloned())
            .collect::<Vec<_>>(),
    );

    assert!(result.is_err());
}
