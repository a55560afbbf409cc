use async_trait::async_trait;
use lazy_static::lazy_static;
use reqwest::header::{HeaderMap, AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use std::time::Duration;

use super::{CodeMailer, OtpEmail};
use crate::constants::*;

lazy_static! {
    pub static ref MAILER_ENV: MailerEnv = MailerEnv::new();
}

/// Mail provider parameters, read once from environment
pub struct MailerEnv {
    pub endpoint: String,
    pub api_key: String,
    pub sender: String,
}

impl MailerEnv {
    fn new() -> Self {
        let endpoint = std::env::var("MAIL_API_ENDPOINT").unwrap_or_default();
        let api_key = std::env::var("MAIL_API_KEY").unwrap_or_default();
        let sender = std::env::var("MAIL_SENDER").unwrap_or("no-reply@localhost".to_owned());
        Self {
            endpoint,
            api_key,
            sender,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MailPayload<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text_body: &'a str,
}

/// Mailer which posts the rendered email to the HTTP mail provider
pub struct ApiMailer {
    client: reqwest::Client,
}

impl ApiMailer {
    pub fn new() -> anyhow::Result<Self> {
        if MAILER_ENV.endpoint.is_empty() {
            anyhow::bail!("MAIL_API_ENDPOINT not found in .env file");
        }
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(MAIL_API_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl CodeMailer for ApiMailer {
    async fn send(&self, email: &OtpEmail) -> anyhow::Result<()> {
        let bearer_token = format!("Bearer {}", MAILER_ENV.api_key);
        let payload = MailPayload {
            from: MAILER_ENV.sender.as_str(),
            to: email.to.as_str(),
            subject: email.subject.as_str(),
            text_body: email.body.as_str(),
        };
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, bearer_token.as_str().parse()?);
        headers.insert(CONTENT_TYPE, "application/json".parse()?);
        let res = self
            .client
            .post(MAILER_ENV.endpoint.as_str())
            .headers(headers)
            .json(&payload)
            .send()
            .await?;
        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            anyhow::bail!("mail provider returned {status}: {body}");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mail_payload_serializes_camel_case() {
        let payload = MailPayload {
            from: "no-reply@localhost",
            to: "alice@example.com",
            subject: "Verify your email address",
            text_body: "Hi, your code is 4821",
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["from"], "no-reply@localhost");
        assert_eq!(value["to"], "alice@example.com");
        assert_eq!(value["textBody"], "Hi, your code is 4821");
    }
}
