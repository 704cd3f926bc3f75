//! Sitemap XML rendering.
//!
//! Writes a sitemaps.org 0.9 `urlset` with `xhtml:link` hreflang
//! alternates, one `<url>` per [`LocalizedUrlEntry`].

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::urls::LocalizedUrlEntry;

pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
pub const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";

#[derive(Debug, thiserror::Error)]
pub enum SitemapError {
    #[error("XML write error: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Sitemap is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Renders entries as sitemap XML, in entry order.
pub fn render_sitemap(entries: &[LocalizedUrlEntry]) -> Result<String, SitemapError> {
    let mut w = Writer::new_with_indent(Vec::new(), b' ', 2);

    w.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    w.write_event(Event::Start(BytesStart::new("urlset").with_attributes([
        ("xmlns", SITEMAP_NS),
        ("xmlns:xhtml", XHTML_NS),
    ])))?;

    for entry in entries {
        write_url(&mut w, entry)?;
    }

    w.write_event(Event::End(BytesEnd::new("urlset")))?;

    let mut xml = String::from_utf8(w.into_inner())?;
    xml.push('\n');
    log::debug!("rendered sitemap with {} urls", entries.len());
    Ok(xml)
}

fn write_url(w: &mut Writer<Vec<u8>>, entry: &LocalizedUrlEntry) -> Result<(), SitemapError> {
    w.write_event(Event::Start(BytesStart::new("url")))?;

    write_text_element(w, "loc", &entry.canonical_url)?;
    for (hreflang, href) in entry.alternate_languages.iter() {
        w.write_event(Event::Empty(BytesStart::new("xhtml:link").with_attributes([
            ("rel", "alternate"),
            ("hreflang", hreflang),
            ("href", href),
        ])))?;
    }
    write_text_element(w, "lastmod", &entry.last_modified.format("%Y-%m-%d").to_string())?;
    write_text_element(w, "changefreq", entry.change_frequency.as_str())?;
    write_text_element(w, "priority", &entry.priority.to_string())?;

    w.write_event(Event::End(BytesEnd::new("url")))?;
    Ok(())
}

fn write_text_element(w: &mut Writer<Vec<u8>>, tag: &str, text: &str) -> Result<(), SitemapError> {
    w.write_event(Event::Start(BytesStart::new(tag)))?;
    w.write_event(Event::Text(BytesText::new(text)))?;
    w.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}
