use std::io::Write;

use anyhow::{Result, bail};
use clinic_site_config::Config;
use clinic_site_engine::{JsonCatalog, article_content};

/// Reports locales without a message catalog and articles without content
/// in a catalog. Fails when any locale is missing its catalog.
pub fn execute(config: &Config, out: &mut impl Write) -> Result<()> {
    let missing = config.missing_catalogs()?;
    for locale in &missing {
        writeln!(
            out,
            "missing catalog: {}",
            config.message_file(locale).display()
        )?;
    }

    let mut unreadable = 0;
    for path in config.message_files()? {
        let catalog = match JsonCatalog::from_path(&path) {
            Ok(catalog) => catalog,
            Err(e) => {
                writeln!(out, "unreadable catalog: {e}")?;
                unreadable += 1;
                continue;
            }
        };
        for article in &config.articles {
            if article_content(&catalog, &article.slug).is_empty() {
                log::warn!("{} has no content for '{}'", path.display(), article.slug);
            }
        }
    }

    if !missing.is_empty() || unreadable > 0 {
        bail!(
            "{} of {} locales missing a catalog, {} unreadable",
            missing.len(),
            config.locales.len(),
            unreadable
        );
    }
    writeln!(out, "all {} locales have a catalog", config.locales.len())?;
    Ok(())
}
