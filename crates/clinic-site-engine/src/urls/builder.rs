use chrono::NaiveDate;
use serde::Serialize;

use crate::locale::{Locale, LocaleSet};
use crate::pages::{ChangeFrequency, PageDescriptor, Priority, PublicationDates};

use super::alternates::AlternateLanguages;

/// Formats the URL of `route` in `locale`: `{base}/{locale}{route}`.
///
/// `base_url` is expected without a trailing slash.
pub fn localized_url(base_url: &str, locale: &Locale, route: &str) -> String {
    format!("{base_url}/{locale}{route}")
}

/// One sitemap row: a page rendered in one locale.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedUrlEntry {
    /// Route shared by every locale variant of the same page.
    pub page_key: String,
    pub locale: Locale,
    pub canonical_url: String,
    pub last_modified: NaiveDate,
    pub change_frequency: ChangeFrequency,
    pub priority: Priority,
    pub alternate_languages: AlternateLanguages,
}

/// Expands pages into one entry per locale with full hreflang maps.
///
/// Pure over its inputs: the same pages always produce the same entries in
/// the same order.
#[derive(Debug, Clone)]
pub struct LocalizedUrlSetBuilder<'a> {
    base_url: String,
    locales: &'a LocaleSet,
    dates: &'a PublicationDates,
}

impl<'a> LocalizedUrlSetBuilder<'a> {
    pub fn new(base_url: &str, locales: &'a LocaleSet, dates: &'a PublicationDates) -> Self {
        let base_url = base_url.trim().strip_suffix('/').unwrap_or(base_url.trim());
        Self {
            base_url: base_url.to_string(),
            locales,
            dates,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn locales(&self) -> &LocaleSet {
        self.locales
    }

    pub fn url(&self, locale: &Locale, route: &str) -> String {
        localized_url(&self.base_url, locale, route)
    }

    /// hreflang map for a route: every locale, then `x-default` pointing at
    /// the default locale.
    pub fn alternates(&self, route: &str) -> AlternateLanguages {
        let mut alternates = AlternateLanguages::new();
        for locale in self.locales {
            alternates.insert(locale.as_str(), self.url(locale, route));
        }
        alternates.insert(
            AlternateLanguages::X_DEFAULT,
            self.url(self.locales.default_locale(), route),
        );
        alternates
    }

    /// The entry for `page` in one locale.
    pub fn entry(&self, page: &PageDescriptor, locale: &Locale) -> LocalizedUrlEntry {
        let route = page.route();
        LocalizedUrlEntry {
            canonical_url: self.url(locale, &route),
            alternate_languages: self.alternates(&route),
            locale: locale.clone(),
            last_modified: page.last_modified(self.dates),
            change_frequency: page.change_frequency(),
            priority: page.priority(),
            page_key: route,
        }
    }

    /// All locale variants of one page, in locale order.
    pub fn entries_for(&self, page: &PageDescriptor) -> Vec<LocalizedUrlEntry> {
        self.locales
            .iter()
            .map(|locale| self.entry(page, locale))
            .collect()
    }

    /// Pages in the outer loop, locales in the inner loop.
    pub fn build(&self, pages: &[PageDescriptor]) -> Vec<LocalizedUrlEntry> {
        let entries: Vec<_> = pages.iter().flat_map(|p| self.entries_for(p)).collect();
        log::debug!(
            "built {} localized URLs for {} pages in {} locales",
            entries.len(),
            pages.len(),
            self.locales.len()
        );
        entries
    }
}

/// Convenience wrapper around [`LocalizedUrlSetBuilder::build`].
pub fn build_url_set(
    base_url: &str,
    locales: &LocaleSet,
    pages: &[PageDescriptor],
    dates: &PublicationDates,
) -> Vec<LocalizedUrlEntry> {
    LocalizedUrlSetBuilder::new(base_url, locales, dates).build(pages)
}
