use dom_query::Document;
use dom_smoothie::{Config, Readability};
use gist_core::{ArticleExtractor, Error, ExtractedArticle, Result};

const MAX_ELEMENTS_TO_PARSE: usize = 9000;

/// Readability-based main-content extraction.
///
/// The markup is parsed with a tolerant html5ever tree builder; parse errors
/// in malformed pages are collected silently rather than reported.
#[derive(Debug, Clone)]
pub struct ReadabilityExtractor {
    max_elements_to_parse: usize,
}

impl Default for ReadabilityExtractor {
    fn default() -> Self {
        Self {
            max_elements_to_parse: MAX_ELEMENTS_TO_PARSE,
        }
    }
}

impl ReadabilityExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    fn config(&self) -> Config {
        Config {
            max_elements_to_parse: self.max_elements_to_parse,
            ..Default::default()
        }
    }
}

impl ArticleExtractor for ReadabilityExtractor {
    fn extract(&self, html: &str, url: &str) -> Result<ExtractedArticle> {
        let document = Document::from(html.to_string());

        let mut reader = Readability::with_document(document, Some(url), Some(self.config()))
            .map_err(|e| Error::Extraction(format!("Failed to prepare document: {}", e)))?;

        let article = reader
            .parse()
            .map_err(|e| Error::Extraction(format!("No readable article found: {}", e)))?;

        if article.text_content.trim().is_empty() {
            return Err(Error::Extraction("No readable article found".to_string()));
        }

        Ok(ExtractedArticle {
            title: article.title,
            content_html: article.content.to_string(),
        })
    }
}
