use crate::domain::model::RawListing;
use crate::domain::ports::{Extraction, Extractor, RenderedPage};
use crate::utils::error::{Result, WatchError};
use scraper::{Html, Selector};

const CARD_SELECTOR: &str = "div.want-card.want-card--list.want-card--hover";
const TITLE_SELECTOR: &str = ".wants-card__header-title a";
const PRICE_SELECTOR: &str = ".wants-card__price";
const PRICE_PREFIX: &str = "Желаемый бюджет: до";

/// Extracts listing cards from the Kwork projects page. A card missing any of
/// the expected pieces is skipped and counted, never fatal.
pub struct KworkExtractor {
    base_url: String,
    card: Selector,
    title: Selector,
    price: Selector,
}

impl KworkExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            base_url: "https://kwork.ru".to_string(),
            card: parse_selector(CARD_SELECTOR)?,
            title: parse_selector(TITLE_SELECTOR)?,
            price: parse_selector(PRICE_SELECTOR)?,
        })
    }

    fn absolute_url(&self, href: &str) -> String {
        if href.starts_with("http://") || href.starts_with("https://") {
            href.to_string()
        } else {
            format!("{}{}", self.base_url, href)
        }
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| WatchError::Selector {
        message: format!("{}: {}", selector, e),
    })
}

impl Extractor for KworkExtractor {
    fn extract(&self, page: &RenderedPage) -> Extraction {
        let document = Html::parse_document(page.html());
        let mut extraction = Extraction::default();

        for card in document.select(&self.card) {
            let Some(anchor) = card.select(&self.title).next() else {
                tracing::warn!("Listing card without a title element, skipping");
                extraction.skipped += 1;
                continue;
            };
            let title = anchor.text().collect::<String>().trim().to_string();

            let Some(href) = anchor.value().attr("href") else {
                tracing::warn!("Title anchor without href, skipping: {}", title);
                extraction.skipped += 1;
                continue;
            };

            let Some(price_element) = card.select(&self.price).next() else {
                tracing::warn!("No price element for listing, skipping: {}", title);
                extraction.skipped += 1;
                continue;
            };
            let price_text = price_element
                .text()
                .collect::<String>()
                .trim()
                .trim_start_matches(PRICE_PREFIX)
                .trim()
                .to_string();

            extraction.listings.push(RawListing {
                title,
                price_text,
                url: self.absolute_url(href),
            });
        }

        extraction
    }
}
