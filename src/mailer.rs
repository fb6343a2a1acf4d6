use log::error;
use serde::Serialize;

use crate::config::AppConfig;

/// Outbound mail through the provider's HTTP API. When no API key is
/// configured the mailer reports itself unconfigured and callers decide what
/// that means for their response.
#[derive(Clone)]
pub struct Mailer {
    client: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
    from: String,
}

#[derive(Serialize)]
struct SendMailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: &'a str,
}

impl Mailer {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: config.mail_api_url.clone(),
            api_key: config.mail_api_key.clone(),
            from: config.mail_from.clone(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    pub async fn send(&self, to: &str, subject: &str, html: &str) -> Result<(), reqwest::Error> {
        let api_key = self.api_key.as_deref().unwrap_or_default();
        let payload = SendMailRequest {
            from: &self.from,
            to,
            subject,
            html,
        };
        let result = self
            .client
            .post(&self.api_url)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await
            .and_then(|resp| resp.error_for_status());
        match result {
            Ok(_) => Ok(()),
            Err(e) => {
                error!("mail send failed: {}", e);
                Err(e)
            }
        }
    }
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
