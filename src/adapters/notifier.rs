use crate::domain::ports::Notifier;
use crate::utils::error::{Result, WatchError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// Telegram Bot API adapter: one `sendMessage` call per notification, HTML
/// parse mode. Any 2xx response counts as delivered; nothing is retried
/// within a single attempt.
pub struct TelegramNotifier {
    client: Client,
    api_base: String,
    token: String,
    chat_id: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    description: Option<String>,
}

impl TelegramNotifier {
    pub fn new(client: Client, token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self {
            client,
            api_base: "https://api.telegram.org".to_string(),
            token: token.into(),
            chat_id: chat_id.into(),
        }
    }

    /// Point the adapter at a different API host (tests).
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, text: &str) -> Result<()> {
        let url = format!("{}/bot{}/sendMessage", self.api_base, self.token);
        let response = self
            .client
            .post(&url)
            .form(&[
                ("chat_id", self.chat_id.as_str()),
                ("text", text),
                ("parse_mode", "HTML"),
            ])
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::info!("Notification delivered");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        let description = serde_json::from_str::<ApiErrorBody>(&body)
            .ok()
            .and_then(|b| b.description)
            .unwrap_or(body);
        Err(WatchError::Delivery {
            status: status.as_u16(),
            description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn notifier(server: &MockServer) -> TelegramNotifier {
        TelegramNotifier::new(Client::new(), "123:token", "42").with_api_base(server.base_url())
    }

    #[tokio::test]
    async fn test_notify_posts_form_fields() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/bot123:token/sendMessage")
                .body_contains("chat_id=42")
                .body_contains("parse_mode=HTML");
            then.status(200)
                .header("Content-Type", "application/json")
                .body(r#"{"ok":true}"#);
        });

        notifier(&server).notify("hello").await.unwrap();

        api_mock.assert();
    }

    #[tokio::test]
    async fn test_notify_non_success_is_delivery_failure() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/bot123:token/sendMessage");
            then.status(403)
                .header("Content-Type", "application/json")
                .body(r#"{"ok":false,"error_code":403,"description":"Forbidden: bot was blocked"}"#);
        });

        let result = notifier(&server).notify("hello").await;

        match result {
            Err(WatchError::Delivery {
                status,
                description,
            }) => {
                assert_eq!(status, 403);
                assert_eq!(description, "Forbidden: bot was blocked");
            }
            other => panic!("expected delivery failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_notify_plain_text_error_body_is_kept() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/bot123:token/sendMessage");
            then.status(502).body("bad gateway");
        });

        let result = notifier(&server).notify("hello").await;

        match result {
            Err(WatchError::Delivery { description, .. }) => {
                assert_eq!(description, "bad gateway");
            }
            other => panic!("expected delivery failure, got {:?}", other),
        }
    }
}
