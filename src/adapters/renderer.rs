use crate::domain::ports::{RenderedPage, Renderer};
use crate::utils::error::{Result, WatchError};
use async_trait::async_trait;
use reqwest::Client;

/// Plain HTTP renderer. The listing cards are present in the initial document
/// body, so fetching the page is enough; a scripted-browser renderer would
/// implement the same trait.
pub struct HttpRenderer {
    client: Client,
}

impl HttpRenderer {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Renderer for HttpRenderer {
    async fn render(&self, url: &str) -> Result<RenderedPage> {
        tracing::debug!("Fetching {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WatchError::Render {
                message: format!("{} returned {}", url, status),
            });
        }

        let html = response.text().await?;
        Ok(RenderedPage::new(html))
    }
}
