use std::collections::BTreeSet;

use chrono::NaiveDate;
use clinic_site_engine::{
    ChangeFrequency, LocaleSet, LocalizedUrlEntry, PageDescriptor, PublicationDates, SiteCatalog,
    build_url_set, render_sitemap,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn two_locale_article_index() {
    let locales = LocaleSet::parse(&["en", "ja"], "en").unwrap();
    let dates = PublicationDates::new(ymd(2025, 2, 10));
    let pages = vec![PageDescriptor::page(
        "/articles",
        ChangeFrequency::Weekly,
        0.8,
        Some(ymd(2025, 2, 10)),
    )];

    let entries = build_url_set("https://x.jp", &locales, &pages, &dates);

    assert_eq!(entries.len(), 2);
    let en = &entries[0];
    assert_eq!(en.canonical_url, "https://x.jp/en/articles");
    let alternates: Vec<(&str, &str)> = en.alternate_languages.iter().collect();
    assert_eq!(
        alternates,
        vec![
            ("en", "https://x.jp/en/articles"),
            ("ja", "https://x.jp/ja/articles"),
            ("x-default", "https://x.jp/en/articles"),
        ]
    );
    assert_eq!(entries[1].canonical_url, "https://x.jp/ja/articles");
    assert_eq!(entries[1].alternate_languages, en.alternate_languages);
}

#[test]
fn metadata_is_copied_from_descriptor() {
    let locales = LocaleSet::parse(&["en"], "en").unwrap();
    let dates = PublicationDates::new(ymd(2025, 2, 10)).with_date("cost", ymd(2024, 2, 10));
    let pages = vec![
        PageDescriptor::page("/treatments", ChangeFrequency::Monthly, 0.9, None),
        PageDescriptor::article("cost"),
        PageDescriptor::article("not-in-table"),
    ];

    let entries = build_url_set("https://x.jp", &locales, &pages, &dates);

    assert_eq!(entries[0].change_frequency, ChangeFrequency::Monthly);
    assert_eq!(entries[0].priority.to_string(), "0.9");
    assert_eq!(entries[0].last_modified, ymd(2025, 2, 10));
    assert_eq!(entries[1].last_modified, ymd(2024, 2, 10));
    assert_eq!(entries[1].change_frequency, ChangeFrequency::Yearly);
    assert_eq!(entries[2].last_modified, ymd(2025, 2, 10));
}

#[test]
fn pages_are_outer_loop_locales_inner() {
    let locales = LocaleSet::parse(&["en", "ja", "ar"], "en").unwrap();
    let dates = PublicationDates::new(ymd(2025, 2, 10));
    let pages = vec![PageDescriptor::article("a"), PageDescriptor::article("b")];

    let urls: Vec<String> = build_url_set("https://x.jp", &locales, &pages, &dates)
        .into_iter()
        .map(|e| e.canonical_url)
        .collect();

    assert_eq!(
        urls,
        vec![
            "https://x.jp/en/articles/a",
            "https://x.jp/ja/articles/a",
            "https://x.jp/ar/articles/a",
            "https://x.jp/en/articles/b",
            "https://x.jp/ja/articles/b",
            "https://x.jp/ar/articles/b",
        ]
    );
}

#[test]
fn shipped_site_sitemap() {
    let locales = LocaleSet::default_site();
    let dates = SiteCatalog::publication_dates();
    let entries = build_url_set(
        "https://global.rakanclinic-tokyo.jp",
        &locales,
        &SiteCatalog::pages(),
        &dates,
    );

    assert_eq!(entries.len(), 25 * 8);
    assert_eq!(entries[0].canonical_url, "https://global.rakanclinic-tokyo.jp/en");
    assert!(entries.iter().all(|e| e.alternate_languages.len() == 9));

    let xml = render_sitemap(&entries).unwrap();
    assert_eq!(xml.matches("<url>").count(), 200);
    assert!(xml.contains(
        "<loc>https://global.rakanclinic-tokyo.jp/zh/articles/choose-safe-stem-cell-clinic-tokyo</loc>"
    ));
}

// Property tests

const CODES: [&str; 8] = ["en", "ja", "ar", "es", "fr", "de", "ru", "zh"];

fn locale_sets() -> impl Strategy<Value = LocaleSet> {
    (1..=CODES.len())
        .prop_flat_map(|n| (Just(n), 0..n))
        .prop_map(|(n, default)| LocaleSet::parse(&CODES[..n], CODES[default]).unwrap())
}

fn page() -> impl Strategy<Value = PageDescriptor> {
    prop_oneof![
        "(/[a-z]{1,8}){0,2}".prop_map(|path| PageDescriptor::page(
            path,
            ChangeFrequency::Monthly,
            0.5,
            None
        )),
        "[a-z][a-z-]{0,20}".prop_map(|slug| PageDescriptor::article(slug)),
    ]
}

fn group_by_page(entries: &[LocalizedUrlEntry]) -> Vec<&[LocalizedUrlEntry]> {
    let mut groups = Vec::new();
    let mut start = 0;
    for i in 1..=entries.len() {
        if i == entries.len() || entries[i].page_key != entries[start].page_key {
            groups.push(&entries[start..i]);
            start = i;
        }
    }
    groups
}

proptest! {
    #[test]
    fn n_entries_with_n_plus_one_alternates(
        locales in locale_sets(),
        page in page(),
    ) {
        let dates = PublicationDates::new(ymd(2025, 2, 10));
        let entries = build_url_set("https://x.jp", &locales, std::slice::from_ref(&page), &dates);

        prop_assert_eq!(entries.len(), locales.len());
        for entry in &entries {
            prop_assert_eq!(entry.alternate_languages.len(), locales.len() + 1);
            prop_assert!(entry.alternate_languages.x_default().is_some());
        }
    }

    #[test]
    fn alternates_match_sibling_canonicals(
        locales in locale_sets(),
        pages in prop::collection::vec(page(), 1..6),
    ) {
        let dates = PublicationDates::new(ymd(2025, 2, 10));
        let entries = build_url_set("https://x.jp", &locales, &pages, &dates);

        for group in group_by_page(&entries) {
            let canonicals: BTreeSet<&str> =
                group.iter().map(|e| e.canonical_url.as_str()).collect();
            for entry in group {
                let alternates: BTreeSet<&str> =
                    entry.alternate_languages.locale_urls().collect();
                prop_assert_eq!(&alternates, &canonicals);
            }
        }
    }

    #[test]
    fn x_default_points_at_default_locale(
        locales in locale_sets(),
        page in page(),
    ) {
        let dates = PublicationDates::new(ymd(2025, 2, 10));
        let entries = build_url_set("https://x.jp", &locales, std::slice::from_ref(&page), &dates);
        let default = locales.default_locale();
        let default_url = entries
            .iter()
            .find(|e| &e.locale == default)
            .map(|e| e.canonical_url.as_str());

        for entry in &entries {
            prop_assert_eq!(entry.alternate_languages.x_default(), default_url);
        }
    }

    #[test]
    fn build_is_deterministic(
        locales in locale_sets(),
        pages in prop::collection::vec(page(), 0..6),
    ) {
        let dates = PublicationDates::new(ymd(2025, 2, 10));
        let first = build_url_set("https://x.jp", &locales, &pages, &dates);
        let second = build_url_set("https://x.jp", &locales, &pages, &dates);
        prop_assert_eq!(
            render_sitemap(&first).unwrap(),
            render_sitemap(&second).unwrap()
        );
        prop_assert_eq!(first, second);
    }
}
