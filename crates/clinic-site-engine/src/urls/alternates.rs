use serde::ser::{Serialize, SerializeMap, Serializer};

/// Per-language alternate URLs for one logical page.
///
/// Keys are hreflang values in insertion order: every supported locale in
/// configured order, then `x-default`. Iteration and serialization follow
/// that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlternateLanguages(Vec<(String, String)>);

impl AlternateLanguages {
    /// hreflang key for the language-neutral fallback URL.
    pub const X_DEFAULT: &'static str = "x-default";

    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a key, replacing the URL in place if the key already exists.
    pub fn insert(&mut self, hreflang: impl Into<String>, url: impl Into<String>) {
        let hreflang = hreflang.into();
        let url = url.into();
        match self.0.iter_mut().find(|(k, _)| *k == hreflang) {
            Some(slot) => slot.1 = url,
            None => self.0.push((hreflang, url)),
        }
    }

    pub fn get(&self, hreflang: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == hreflang)
            .map(|(_, url)| url.as_str())
    }

    pub fn x_default(&self) -> Option<&str> {
        self.get(Self::X_DEFAULT)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// URLs of the per-locale keys, `x-default` excluded.
    pub fn locale_urls(&self) -> impl Iterator<Item = &str> {
        self.iter()
            .filter(|(k, _)| *k != Self::X_DEFAULT)
            .map(|(_, url)| url)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for AlternateLanguages {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (hreflang, url) in &self.0 {
            map.serialize_entry(hreflang, url)?;
        }
        map.end()
    }
}
