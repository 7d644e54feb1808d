use async_trait::async_trait;
use serde_json::json;
use tracing::info;

use crate::configuration::EmailSettings;
use crate::error::Error;
use crate::notify::Notifier;
use crate::types::Listing;

/// Sends the noteworthy listings as an HTML table through a transactional
/// mail HTTP API (Brevo-shaped payload).
pub struct EmailNotifier {
    settings: EmailSettings,
    client: reqwest::Client,
}

impl EmailNotifier {
    pub fn new(settings: EmailSettings) -> Self {
        Self {
            settings,
            client: reqwest::Client::new(),
        }
    }

    fn render_body(items: &[Listing]) -> String {
        let rows: String = items
            .iter()
            .map(|item| {
                format!(
                    r#"<tr>
                        <td class="price"><a href="{link}" target="_blank">{price}</a></td>
                        <td class="title"><a href="{link}" target="_blank">{title}</a></td>
                    </tr>"#,
                    link = item.link,
                    price = item.price,
                    title = item.title,
                )
            })
            .collect();

        format!(
            r#"<html><body style="font-family: Arial, sans-serif; color: #333;">
                <p>New offers ({count})</p>
                <table border="1" style="border-collapse: collapse;">
                    <tr><th class="price">Price</th><th>Title</th></tr>
                    {rows}
                </table>
            </body></html>"#,
            count = items.len(),
        )
    }
}

#[async_trait]
impl Notifier for EmailNotifier {
    async fn notify(&self, items: &[Listing]) -> Result<(), Error> {
        let subject = format!("[Avito Notifier]: new offers ({})", items.len());
        let payload = json!({
            "sender": {
                "name": self.settings.from_name,
                "email": self.settings.from_email,
            },
            "to": [
                { "email": self.settings.to_email }
            ],
            "subject": subject,
            "htmlContent": Self::render_body(items),
        });

        let response = self
            .client
            .post(&self.settings.api_url)
            .header("api-key", &self.settings.api_key)
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Notify(format!("mail API returned {status}")));
        }
        info!("notification mail sent to {}", self.settings.to_email);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_links_every_listing() {
        let items = vec![
            Listing {
                id: "1".into(),
                title: "First".into(),
                link: "https://www.avito.ru/a/1".into(),
                price: 100,
            },
            Listing {
                id: "2".into(),
                title: "Second".into(),
                link: "https://www.avito.ru/a/2".into(),
                price: 200,
            },
        ];

        let body = EmailNotifier::render_body(&items);

        assert!(body.contains("New offers (2)"));
        assert!(body.contains("https://www.avito.ru/a/1"));
        assert!(body.contains("https://www.avito.ru/a/2"));
        assert!(body.contains(">First<"));
        assert!(body.contains(">200<"));
    }
}
