//! # Localized URL Sets
//!
//! Expands logical pages into one URL per supported locale, each carrying
//! the complete hreflang map of its siblings. Page metadata and the sitemap
//! both read from these entries, so the two never disagree.
//!
//! ## Key Invariants
//!
//! - N locales give exactly N entries per page
//! - Every alternates map has N + 1 keys, `x-default` last
//! - The non-`x-default` URLs of a page's map are exactly the canonical URLs
//!   of that page's entries

pub mod alternates;
pub mod builder;

pub use alternates::AlternateLanguages;
pub use builder::{LocalizedUrlEntry, LocalizedUrlSetBuilder, build_url_set, localized_url};
