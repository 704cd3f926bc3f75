use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use clinic_site_config::Config;
use clinic_site_engine::{LocalizedUrlSetBuilder, page_for_route, page_metadata};

#[derive(Args, Debug, Clone)]
pub struct MetadataArgs {
    /// Route without the locale prefix, e.g. `/treatments` or `/articles/<slug>`
    #[arg(long)]
    pub page: String,

    /// Requested locale; unsupported or missing codes use the default locale
    #[arg(long)]
    pub locale: Option<String>,
}

pub fn execute(config: &Config, args: &MetadataArgs, out: &mut impl Write) -> Result<()> {
    let locales = config.locale_set()?;
    let dates = config.publication_dates();
    let pages = config.pages();

    let page = page_for_route(&pages, &args.page)
        .with_context(|| format!("No page with route '{}'", args.page))?;
    let builder = LocalizedUrlSetBuilder::new(&config.base_url, &locales, &dates);
    let metadata = page_metadata(&builder, page, args.locale.as_deref(), &config.site_name);

    serde_json::to_writer_pretty(&mut *out, &metadata)?;
    writeln!(out)?;
    Ok(())
}
