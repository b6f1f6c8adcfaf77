//! Sitemap ingestion: pull every `<loc>` out of sitemap XML

use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SitemapError {
    #[error("malformed sitemap XML: {0}")]
    Xml(#[from] quick_xml::Error),
}

/// Extract every `<loc>` element's trimmed text content, preserving
/// document order. Namespace prefixes on the tag are tolerated.
pub fn extract_sitemap_urls(xml: &str) -> Result<Vec<String>, SitemapError> {
    let mut reader = Reader::from_str(xml);
    let mut urls = Vec::new();
    let mut in_loc = false;
    let mut current = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.local_name().as_ref() == b"loc" => {
                in_loc = true;
                current.clear();
            }
            Event::Text(t) if in_loc => {
                current.push_str(&t.unescape()?);
            }
            Event::CData(t) if in_loc => {
                current.push_str(&String::from_utf8_lossy(&t.into_inner()));
            }
            Event::End(e) if e.local_name().as_ref() == b"loc" => {
                if in_loc {
                    urls.push(current.trim().to_string());
                    in_loc = false;
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(urls)
}
