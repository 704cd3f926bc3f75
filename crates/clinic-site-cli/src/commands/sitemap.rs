use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use clinic_site_config::Config;
use clinic_site_engine::{build_url_set, render_sitemap};

#[derive(Args, Debug, Clone)]
pub struct SitemapArgs {
    /// Write the sitemap here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn execute(config: &Config, args: &SitemapArgs, out: &mut impl Write) -> Result<()> {
    let locales = config.locale_set()?;
    let dates = config.publication_dates();
    let pages = config.pages();

    let entries = build_url_set(&config.base_url, &locales, &pages, &dates);
    let xml = render_sitemap(&entries).context("Failed to render sitemap")?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &xml)
                .with_context(|| format!("Failed to write sitemap to '{}'", path.display()))?;
            log::info!(
                "Wrote {} URLs ({} pages x {} locales) to {}",
                entries.len(),
                pages.len(),
                locales.len(),
                path.display()
            );
        }
        None => out.write_all(xml.as_bytes())?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn small_config() -> Config {
        Config {
            base_url: "https://x.jp/".to_string(),
            locales: vec!["en".to_string(), "ja".to_string()],
            pages: Config::default().pages.into_iter().take(1).collect(),
            articles: Vec::new(),
            ..Config::default()
        }
    }

    #[test]
    fn writes_to_stdout() {
        let mut out = Vec::new();
        execute(&small_config(), &SitemapArgs { output: None }, &mut out).unwrap();

        let xml = String::from_utf8(out).unwrap();
        assert_eq!(xml.matches("<url>").count(), 2);
        assert!(xml.contains("<loc>https://x.jp/en</loc>"));
        assert!(xml.contains(r#"hreflang="x-default" href="https://x.jp/en""#));
    }

    #[test]
    fn writes_to_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sitemap.xml");
        let mut out = Vec::new();

        execute(
            &small_config(),
            &SitemapArgs {
                output: Some(path.clone()),
            },
            &mut out,
        )
        .unwrap();

        assert!(out.is_empty());
        let xml = std::fs::read_to_string(path).unwrap();
        assert!(xml.starts_with("<?xml"));
    }
}
