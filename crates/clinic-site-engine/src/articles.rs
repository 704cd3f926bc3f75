use std::collections::BTreeMap;

/// Slug → hero image path, relative to the site root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleImages {
    images: BTreeMap<String, String>,
    fallback: String,
}

impl ArticleImages {
    pub const DEFAULT_FALLBACK: &'static str = "/images/facilities/lab.webp";

    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            images: BTreeMap::new(),
            fallback: fallback.into(),
        }
    }

    /// Hero images of the shipped articles.
    pub fn default_site() -> Self {
        [
            ("what-is-stem-cell-therapy", "/images/facilities/stemcells.webp"),
            ("does-stem-cell-therapy-work", "/images/facilities/inverted_microscope.jpg"),
            ("stem-cell-therapy-for-joint-pain", "/images/reuseable/4.png"),
            ("stem-cell-therapy-vs-surgery", "/images/injection.png"),
            ("stem-cell-therapy-recovery-time", "/images/reuseable/2.png"),
            ("stem-cell-therapy-cost", "/images/azabudai_hills.png"),
            ("stem-cell-therapy-japan-safety", "/images/facilities/biological_safety_cabinet.jpg"),
            ("stem-cell-therapy-results-timeline", "/images/facilities/working.gif"),
            ("anti-aging-stem-cell-therapy-tokyo", "/images/reuseable/1.png"),
            ("cpc-cell-processing-center-japan", "/images/facilities/lab.webp"),
            ("azabudai-hills-stem-table", "/images/rakan_entrance.png"),
            ("knee-osteoarthritis-stem-cells-tokyo", "/images/reuseable/3.png"),
            ("adipose-vs-bone-marrow-stem-cells", "/images/facilities/stemcells.webp"),
            ("conditions-stem-cell-therapy", "/images/reuseable/5.png"),
            ("stem-cell-therapy-exclusions", "/images/facilities/co2incubator.webp"),
            ("culture-supernatant-explained", "/images/facilities/centrifuge.webp"),
            ("best-stem-cell-clinics-tokyo", "/images/azabudai_hills.png"),
            ("stem-cell-therapy-cost-tokyo", "/images/facilities/passbox.jpg"),
            ("medical-tourism-tokyo-stem-cell", "/images/azabudai_hills.png"),
            ("stem-cell-therapy-legal-japan", "/images/rakan_entrance.png"),
            ("choose-safe-stem-cell-clinic-tokyo", "/images/facilities/lab.webp"),
        ]
        .into_iter()
        .fold(Self::default(), |images, (slug, path)| images.with_image(slug, path))
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn get(&self, slug: &str) -> Option<&str> {
        self.images.get(slug).map(String::as_str)
    }

    pub fn insert(&mut self, slug: impl Into<String>, path: impl Into<String>) {
        self.images.insert(slug.into(), path.into());
    }

    pub fn with_image(mut self, slug: impl Into<String>, path: impl Into<String>) -> Self {
        self.insert(slug, path);
        self
    }

    /// Image path for `slug`, or the fallback image.
    pub fn image_for(&self, slug: &str) -> &str {
        self.get(slug).unwrap_or(&self.fallback)
    }

    /// Absolute image URL for Open Graph and structured data.
    pub fn absolute_image_for(&self, slug: &str, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.image_for(slug))
    }
}

impl Default for ArticleImages {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FALLBACK)
    }
}

/// The fields of an article needed to pick related reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleSummary {
    pub slug: String,
    pub category: String,
}

impl ArticleSummary {
    pub fn new(slug: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            category: category.into(),
        }
    }
}

/// Up to `limit` other articles, same category first.
///
/// Order within each group is the input order.
pub fn related_articles<'a>(
    current: &ArticleSummary,
    all: &'a [ArticleSummary],
    limit: usize,
) -> Vec<&'a ArticleSummary> {
    let mut related: Vec<&ArticleSummary> =
        all.iter().filter(|a| a.slug != current.slug).collect();
    // Stable sort keeps input order inside each group.
    related.sort_by_key(|a| a.category != current.category);
    related.truncate(limit);
    related
}

/// Word count as published in the article's structured data.
///
/// Lines are joined with one space and split on single spaces, so blank
/// spacer lines and double spaces count as (empty) words.
pub fn word_count<S: AsRef<str>>(lines: &[S]) -> usize {
    let joined = lines
        .iter()
        .map(|line| line.as_ref())
        .collect::<Vec<&str>>()
        .join(" ");
    joined.split(' ').count()
}
