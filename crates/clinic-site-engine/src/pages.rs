use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid change frequency: {0:?}")]
pub struct InvalidChangeFrequency(pub String);

/// How often a page is expected to change, as advertised in the sitemap.
///
/// Serializes lower case; parsing ignores case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

impl FromStr for ChangeFrequency {
    type Err = InvalidChangeFrequency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "always" => Ok(Self::Always),
            "hourly" => Ok(Self::Hourly),
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            "never" => Ok(Self::Never),
            _ => Err(InvalidChangeFrequency(s.to_string())),
        }
    }
}

impl TryFrom<String> for ChangeFrequency {
    type Error = InvalidChangeFrequency;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sitemap priority, clamped to `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f32", into = "f32")]
pub struct Priority(f32);

impl Priority {
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self(0.5);
        }
        Self(value.clamp(0.0, 1.0))
    }

    pub fn value(self) -> f32 {
        self.0
    }
}

impl From<f32> for Priority {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

impl From<Priority> for f32 {
    fn from(priority: Priority) -> Self {
        priority.0
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// A static route such as `/treatments`. The home page has an empty path.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticPage {
    pub path: String,
    pub change_frequency: ChangeFrequency,
    pub priority: Priority,
    pub last_modified: Option<NaiveDate>,
}

/// An article, addressed by its locale-independent slug.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticlePage {
    pub slug: String,
    pub change_frequency: ChangeFrequency,
    pub priority: Priority,
}

impl ArticlePage {
    pub const CHANGE_FREQUENCY: ChangeFrequency = ChangeFrequency::Yearly;
    pub const PRIORITY: f32 = 0.7;

    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            change_frequency: Self::CHANGE_FREQUENCY,
            priority: Priority::new(Self::PRIORITY),
        }
    }
}

/// A logical routable unit, rendered once per locale.
#[derive(Debug, Clone, PartialEq)]
pub enum PageDescriptor {
    Static(StaticPage),
    Article(ArticlePage),
}

impl PageDescriptor {
    pub fn page(
        path: impl Into<String>,
        change_frequency: ChangeFrequency,
        priority: f32,
        last_modified: Option<NaiveDate>,
    ) -> Self {
        Self::Static(StaticPage {
            path: path.into(),
            change_frequency,
            priority: Priority::new(priority),
            last_modified,
        })
    }

    pub fn article(slug: impl Into<String>) -> Self {
        Self::Article(ArticlePage::new(slug))
    }

    /// Locale-independent route appended after `/{locale}`.
    pub fn route(&self) -> String {
        match self {
            Self::Static(page) => page.path.clone(),
            Self::Article(article) => format!("/articles/{}", article.slug),
        }
    }

    pub fn change_frequency(&self) -> ChangeFrequency {
        match self {
            Self::Static(page) => page.change_frequency,
            Self::Article(article) => article.change_frequency,
        }
    }

    pub fn priority(&self) -> Priority {
        match self {
            Self::Static(page) => page.priority,
            Self::Article(article) => article.priority,
        }
    }

    pub fn is_article(&self) -> bool {
        matches!(self, Self::Article(_))
    }

    /// Last modification date, falling back to the table's default.
    pub fn last_modified(&self, dates: &PublicationDates) -> NaiveDate {
        match self {
            Self::Static(page) => page.last_modified.unwrap_or(dates.fallback()),
            Self::Article(article) => dates.date_for(&article.slug),
        }
    }
}

/// Article publication dates keyed by slug, with a fallback for the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicationDates {
    dates: BTreeMap<String, NaiveDate>,
    fallback: NaiveDate,
}

impl PublicationDates {
    pub fn new(fallback: NaiveDate) -> Self {
        Self {
            dates: BTreeMap::new(),
            fallback,
        }
    }

    pub fn with_date(mut self, slug: impl Into<String>, date: NaiveDate) -> Self {
        self.insert(slug, date);
        self
    }

    pub fn insert(&mut self, slug: impl Into<String>, date: NaiveDate) {
        self.dates.insert(slug.into(), date);
    }

    /// Never fails: unknown slugs get the fallback date.
    pub fn date_for(&self, slug: &str) -> NaiveDate {
        self.dates.get(slug).copied().unwrap_or(self.fallback)
    }

    pub fn fallback(&self) -> NaiveDate {
        self.fallback
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// The site's shipped pages and articles.
pub struct SiteCatalog;

impl SiteCatalog {
    /// Date every main page was last revised, also used as the fallback.
    pub const MAIN_PAGES_DATE: (i32, u32, u32) = (2025, 2, 10);

    pub const ARTICLES: [(&'static str, (i32, u32, u32)); 21] = [
        ("what-is-stem-cell-therapy", (2024, 1, 15)),
        ("does-stem-cell-therapy-work", (2024, 1, 20)),
        ("stem-cell-therapy-for-joint-pain", (2024, 1, 25)),
        ("stem-cell-therapy-vs-surgery", (2024, 2, 1)),
        ("stem-cell-therapy-recovery-time", (2024, 2, 5)),
        ("stem-cell-therapy-cost", (2024, 2, 10)),
        ("stem-cell-therapy-japan-safety", (2024, 2, 18)),
        ("stem-cell-therapy-results-timeline", (2024, 2, 19)),
        ("anti-aging-stem-cell-therapy-tokyo", (2024, 2, 20)),
        ("cpc-cell-processing-center-japan", (2024, 2, 21)),
        ("azabudai-hills-stem-table", (2024, 2, 21)),
        ("knee-osteoarthritis-stem-cells-tokyo", (2024, 2, 22)),
        ("adipose-vs-bone-marrow-stem-cells", (2024, 2, 22)),
        ("conditions-stem-cell-therapy", (2024, 2, 23)),
        ("stem-cell-therapy-exclusions", (2024, 2, 23)),
        ("culture-supernatant-explained", (2024, 2, 24)),
        ("best-stem-cell-clinics-tokyo", (2025, 2, 10)),
        ("stem-cell-therapy-cost-tokyo", (2025, 2, 10)),
        ("medical-tourism-tokyo-stem-cell", (2025, 2, 10)),
        ("stem-cell-therapy-legal-japan", (2025, 2, 10)),
        ("choose-safe-stem-cell-clinic-tokyo", (2025, 2, 10)),
    ];

    fn date((y, m, d): (i32, u32, u32)) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
    }

    pub fn fallback_date() -> NaiveDate {
        Self::date(Self::MAIN_PAGES_DATE)
    }

    /// Home, treatments, facilities and the article index.
    pub fn main_pages() -> Vec<PageDescriptor> {
        let date = Some(Self::fallback_date());
        vec![
            PageDescriptor::page("", ChangeFrequency::Weekly, 1.0, date),
            PageDescriptor::page("/treatments", ChangeFrequency::Monthly, 0.9, date),
            PageDescriptor::page("/facilities", ChangeFrequency::Monthly, 0.8, date),
            PageDescriptor::page("/articles", ChangeFrequency::Weekly, 0.8, date),
        ]
    }

    pub fn article_pages() -> Vec<PageDescriptor> {
        Self::ARTICLES
            .iter()
            .map(|(slug, _)| PageDescriptor::article(*slug))
            .collect()
    }

    /// Main pages first, then articles, the order the sitemap lists them.
    pub fn pages() -> Vec<PageDescriptor> {
        let mut pages = Self::main_pages();
        pages.extend(Self::article_pages());
        pages
    }

    pub fn publication_dates() -> PublicationDates {
        Self::ARTICLES.iter().fold(
            PublicationDates::new(Self::fallback_date()),
            |dates, (slug, ymd)| dates.with_date(*slug, Self::date(*ymd)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case("weekly", ChangeFrequency::Weekly)]
    #[case("Monthly", ChangeFrequency::Monthly)]
    #[case("YEARLY", ChangeFrequency::Yearly)]
    fn parses_change_frequency(#[case] input: &str, #[case] expected: ChangeFrequency) {
        assert_eq!(input.parse::<ChangeFrequency>().unwrap(), expected);
        assert_eq!(expected.to_string(), input.to_lowercase());
    }

    #[rstest]
    #[case("\"weekly\"", ChangeFrequency::Weekly)]
    #[case("\"Monthly\"", ChangeFrequency::Monthly)]
    #[case("\"YEARLY\"", ChangeFrequency::Yearly)]
    fn deserializes_change_frequency_ignoring_case(
        #[case] json: &str,
        #[case] expected: ChangeFrequency,
    ) {
        let parsed: ChangeFrequency = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, expected);
        assert_eq!(
            serde_json::to_string(&parsed).unwrap(),
            json.to_lowercase()
        );
    }

    #[test]
    fn deserializing_unknown_change_frequency_fails() {
        assert!(serde_json::from_str::<ChangeFrequency>("\"sometimes\"").is_err());
    }

    #[test]
    fn rejects_unknown_change_frequency() {
        assert!("fortnightly".parse::<ChangeFrequency>().is_err());
    }

    #[rstest]
    #[case(1.0, "1.0")]
    #[case(0.8, "0.8")]
    #[case(0.7, "0.7")]
    #[case(1.5, "1.0")]
    #[case(-0.2, "0.0")]
    fn priority_is_clamped_and_formatted(#[case] value: f32, #[case] expected: &str) {
        assert_eq!(Priority::new(value).to_string(), expected);
    }

    #[test]
    fn routes() {
        assert_eq!(
            PageDescriptor::page("", ChangeFrequency::Weekly, 1.0, None).route(),
            ""
        );
        assert_eq!(
            PageDescriptor::page("/facilities", ChangeFrequency::Monthly, 0.8, None).route(),
            "/facilities"
        );
        assert_eq!(
            PageDescriptor::article("stem-cell-therapy-cost").route(),
            "/articles/stem-cell-therapy-cost"
        );
    }

    #[test]
    fn article_defaults() {
        let article = PageDescriptor::article("x");
        assert_eq!(article.change_frequency(), ChangeFrequency::Yearly);
        assert_eq!(article.priority().to_string(), "0.7");
        assert!(article.is_article());
    }

    #[test]
    fn unknown_slug_uses_fallback_date() {
        let dates = PublicationDates::new(ymd(2025, 2, 10)).with_date("known", ymd(2024, 1, 15));
        assert_eq!(dates.date_for("known"), ymd(2024, 1, 15));
        assert_eq!(dates.date_for("unknown"), ymd(2025, 2, 10));
    }

    #[test]
    fn static_page_without_date_uses_fallback() {
        let dates = PublicationDates::new(ymd(2025, 2, 10));
        let page = PageDescriptor::page("/x", ChangeFrequency::Monthly, 0.5, None);
        assert_eq!(page.last_modified(&dates), ymd(2025, 2, 10));

        let dated =
            PageDescriptor::page("/x", ChangeFrequency::Monthly, 0.5, Some(ymd(2023, 5, 1)));
        assert_eq!(dated.last_modified(&dates), ymd(2023, 5, 1));
    }

    #[test]
    fn site_catalog_is_complete() {
        let pages = SiteCatalog::pages();
        assert_eq!(pages.len(), 4 + 21);
        assert_eq!(SiteCatalog::publication_dates().len(), 21);
        assert_eq!(
            SiteCatalog::publication_dates().date_for("what-is-stem-cell-therapy"),
            ymd(2024, 1, 15)
        );
    }
}
