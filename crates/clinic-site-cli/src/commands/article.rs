use std::io::Write;

use anyhow::{Context, Result, bail};
use clap::Args;
use clinic_site_config::Config;
use clinic_site_engine::{
    ContentBlock, JsonCatalog, MessageCatalog, article_content, classify_content, word_count,
};
use serde::Serialize;

#[derive(Args, Debug, Clone)]
pub struct ArticleArgs {
    /// Article slug, e.g. `stem-cell-therapy-cost`
    #[arg(long)]
    pub slug: String,

    /// Requested locale; unsupported or missing codes use the default locale
    #[arg(long)]
    pub locale: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ArticleOutput<'a> {
    slug: &'a str,
    locale: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    image: String,
    word_count: usize,
    blocks: Vec<ContentBlock>,
}

pub fn execute(config: &Config, args: &ArticleArgs, out: &mut impl Write) -> Result<()> {
    let locales = config.locale_set()?;
    let locale = locales.resolve(args.locale.as_deref());

    let path = config.message_file(locale.as_str());
    let catalog = JsonCatalog::from_path(&path)
        .with_context(|| format!("No message catalog for locale '{locale}'"))?;

    let lines = article_content(&catalog, &args.slug);
    if lines.is_empty() {
        bail!(
            "Article '{}' has no content in {}",
            args.slug,
            path.display()
        );
    }
    log::debug!("Classifying {} lines of '{}'", lines.len(), args.slug);

    let output = ArticleOutput {
        slug: &args.slug,
        locale: locale.as_str(),
        title: catalog.text(&format!("articles.articles.{}.title", args.slug)),
        image: config
            .article_images()
            .absolute_image_for(&args.slug, &config.base_url),
        word_count: word_count(&lines),
        blocks: classify_content(&lines),
    };

    serde_json::to_writer_pretty(&mut *out, &output)?;
    writeln!(out)?;
    Ok(())
}
