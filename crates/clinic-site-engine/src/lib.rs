pub mod articles;
pub mod catalog;
pub mod contact;
pub mod content;
pub mod locale;
pub mod metadata;
pub mod pages;
pub mod sitemap;
pub mod urls;

// Re-export key types for easier usage
pub use articles::{ArticleImages, ArticleSummary, related_articles, word_count};
pub use catalog::{CatalogError, JsonCatalog, MessageCatalog, article_content};
pub use contact::{ContactError, ContactSubmission, LogSink, SubmissionSink, submit};
pub use content::{ContentBlock, HeadingPolicy, classify_content, classify_content_with};
pub use locale::{Locale, LocaleError, LocaleSet};
pub use metadata::{PageMetadata, page_for_route, page_metadata};
pub use pages::{ChangeFrequency, PageDescriptor, Priority, PublicationDates, SiteCatalog};
pub use sitemap::{SitemapError, render_sitemap};
pub use urls::{AlternateLanguages, LocalizedUrlEntry, LocalizedUrlSetBuilder, build_url_set};
