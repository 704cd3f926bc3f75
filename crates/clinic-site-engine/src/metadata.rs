use serde::Serialize;

use crate::pages::PageDescriptor;
use crate::urls::{AlternateLanguages, LocalizedUrlSetBuilder};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OpenGraphKind {
    Website,
    Article,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    #[serde(rename = "type")]
    pub kind: OpenGraphKind,
    pub locale: &'static str,
    pub url: String,
    pub site_name: String,
}

/// Head metadata for a page in one locale: canonical URL, hreflang
/// alternates and Open Graph basics.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub canonical: String,
    pub languages: AlternateLanguages,
    pub open_graph: OpenGraph,
}

/// Builds metadata for `page`, resolving `requested` against the supported
/// locales and falling back to the default.
pub fn page_metadata(
    builder: &LocalizedUrlSetBuilder<'_>,
    page: &PageDescriptor,
    requested: Option<&str>,
    site_name: &str,
) -> PageMetadata {
    let locale = builder.locales().resolve(requested);
    let entry = builder.entry(page, locale);
    let kind = if page.is_article() {
        OpenGraphKind::Article
    } else {
        OpenGraphKind::Website
    };

    PageMetadata {
        open_graph: OpenGraph {
            kind,
            locale: locale.open_graph_locale(),
            url: entry.canonical_url.clone(),
            site_name: site_name.to_string(),
        },
        canonical: entry.canonical_url,
        languages: entry.alternate_languages,
    }
}

/// Finds the page whose route is `route`. `/` and the empty route both
/// mean the home page.
pub fn page_for_route<'p>(pages: &'p [PageDescriptor], route: &str) -> Option<&'p PageDescriptor> {
    let route = route.trim_end_matches('/');
    pages.iter().find(|p| p.route() == route)
}
