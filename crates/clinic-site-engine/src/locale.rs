use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocaleError {
    #[error("Invalid locale code: {0:?}")]
    Invalid(String),
    #[error("Locale list is empty")]
    Empty,
    #[error("Locale listed twice: {0}")]
    Duplicate(Locale),
    #[error("Default locale {0} is not in the supported list")]
    DefaultNotSupported(Locale),
}

/// A supported UI/content language code such as `en` or `zh-tw`.
///
/// Always lower case. Used verbatim as the first URL path segment and as
/// the hreflang key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale(String);

impl Locale {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Open Graph `og:locale` value for this language.
    pub fn open_graph_locale(&self) -> &'static str {
        match self.language() {
            "ja" => "ja_JP",
            "zh" => "zh_CN",
            "ar" => "ar_SA",
            "es" => "es_ES",
            "fr" => "fr_FR",
            "de" => "de_DE",
            "ru" => "ru_RU",
            _ => "en_US",
        }
    }

    /// The language's name in that language, for the language switcher.
    pub fn native_name(&self) -> Option<&'static str> {
        let name = match self.as_str() {
            "en" => "English",
            "ja" => "日本語",
            "ar" => "العربية",
            "es" => "Español",
            "fr" => "Français",
            "de" => "Deutsch",
            "ru" => "Русский",
            "zh" => "中文",
            _ => return None,
        };
        Some(name)
    }

    /// Whether pages in this language are laid out right to left.
    pub fn is_rtl(&self) -> bool {
        matches!(self.language(), "ar" | "fa" | "he" | "ur")
    }

    /// `dir` attribute value for the document root.
    pub fn text_direction(&self) -> &'static str {
        if self.is_rtl() { "rtl" } else { "ltr" }
    }

    /// Language part without any region suffix.
    fn language(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase();
        let (language, region) = match code.split_once('-') {
            Some((language, region)) => (language, Some(region)),
            None => (code.as_str(), None),
        };

        let language_ok =
            (2..=3).contains(&language.len()) && language.bytes().all(|b| b.is_ascii_lowercase());
        let region_ok = region.is_none_or(|r| {
            (2..=4).contains(&r.len()) && r.bytes().all(|b| b.is_ascii_alphanumeric())
        });

        if language_ok && region_ok {
            Ok(Self(code))
        } else {
            Err(LocaleError::Invalid(s.to_string()))
        }
    }
}

impl TryFrom<String> for Locale {
    type Error = LocaleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.0
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered, duplicate-free set of supported locales with a default.
///
/// Iteration order is the configured order and drives the order of
/// generated URLs and hreflang maps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleSet {
    locales: Vec<Locale>,
    default: Locale,
}

impl LocaleSet {
    pub fn new(locales: Vec<Locale>, default: Locale) -> Result<Self, LocaleError> {
        if locales.is_empty() {
            return Err(LocaleError::Empty);
        }
        for (i, locale) in locales.iter().enumerate() {
            if locales[..i].contains(locale) {
                return Err(LocaleError::Duplicate(locale.clone()));
            }
        }
        if !locales.contains(&default) {
            return Err(LocaleError::DefaultNotSupported(default));
        }
        Ok(Self { locales, default })
    }

    /// Parses codes into a set; convenient for tests and config.
    pub fn parse<S: AsRef<str>>(codes: &[S], default: &str) -> Result<Self, LocaleError> {
        let locales = codes
            .iter()
            .map(|c| c.as_ref().parse())
            .collect::<Result<Vec<Locale>, _>>()?;
        Self::new(locales, default.parse()?)
    }

    /// The eight languages the site ships with, English first and default.
    pub fn default_site() -> Self {
        let locales = ["en", "ja", "ar", "es", "fr", "de", "ru", "zh"]
            .into_iter()
            .map(|c| Locale(c.to_string()))
            .collect();
        Self {
            locales,
            default: Locale("en".to_string()),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Locale> {
        self.locales.iter()
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    pub fn default_locale(&self) -> &Locale {
        &self.default
    }

    pub fn get(&self, code: &str) -> Option<&Locale> {
        let wanted: Locale = code.parse().ok()?;
        self.locales.iter().find(|l| **l == wanted)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// Resolves a requested locale, falling back to the default when it is
    /// missing or unsupported.
    pub fn resolve(&self, requested: Option<&str>) -> &Locale {
        requested
            .and_then(|code| self.get(code))
            .unwrap_or(&self.default)
    }
}

impl<'a> IntoIterator for &'a LocaleSet {
    type Item = &'a Locale;
    type IntoIter = std::slice::Iter<'a, Locale>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
