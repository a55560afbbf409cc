use async_trait::async_trait;
use std::collections::HashMap;

use crate::constants::*;
use crate::models::otp::OtpPurpose;
use crate::utils::replace_placeholders;

pub mod api_mailer;

pub use api_mailer::ApiMailer;

/// A fully rendered verification email, ready for the dispatch provider
#[derive(Debug, Clone)]
pub struct OtpEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl OtpEmail {
    /// Render the email for a purpose from its template. Branding hints
    /// like the store name come from the opaque context supplied by the
    /// caller.
    pub fn render(
        recipient: &str,
        purpose: OtpPurpose,
        otp: &str,
        context: &HashMap<String, String>,
    ) -> anyhow::Result<Self> {
        let (subject, template) = match purpose {
            OtpPurpose::Registration => (REGISTRATION_EMAIL_SUBJECT, REGISTRATION_EMAIL_TEMPLATE),
            OtpPurpose::PasswordReset => {
                (PASSWORD_RESET_EMAIL_SUBJECT, PASSWORD_RESET_EMAIL_TEMPLATE)
            }
        };
        let store = context
            .get("storeName")
            .cloned()
            .unwrap_or(DEFAULT_STORE_NAME.to_owned());
        let mut options = HashMap::new();
        options.insert("code".to_owned(), otp.to_owned());
        options.insert("store".to_owned(), store);
        options.insert("validity".to_owned(), OTP_VALIDITY_MINS.to_string());
        let body = replace_placeholders(template, options)?;
        Ok(Self {
            to: recipient.to_owned(),
            subject: subject.to_owned(),
            body,
        })
    }
}

/// Dispatch boundary for rendered otp emails. Transport and provider
/// templating live behind this trait.
#[async_trait]
pub trait CodeMailer: Send + Sync {
    async fn send(&self, email: &OtpEmail) -> anyhow::Result<()>;
}

/// Mailer which only logs the outgoing email. Useful for local runs
/// where no mail provider is configured.
pub struct LogMailer;

#[async_trait]
impl CodeMailer for LogMailer {
    async fn send(&self, email: &OtpEmail) -> anyhow::Result<()> {
        tracing::debug!("Send otp email to {}: {}", email.to, email.body);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_registration_email() {
        let mut context = HashMap::new();
        context.insert("storeName".to_owned(), "Trail Gear".to_owned());
        let email =
            OtpEmail::render("alice@example.com", OtpPurpose::Registration, "4821", &context)
                .unwrap();
        assert_eq!(email.to, "alice@example.com");
        assert_eq!(email.subject, REGISTRATION_EMAIL_SUBJECT);
        assert_eq!(email.body.contains("4821"), true);
        assert_eq!(email.body.contains("Trail Gear"), true);
        assert_eq!(email.body.contains("5 minutes"), true);
        assert_eq!(email.body.contains("{{"), false);
    }

    #[test]
    fn test_render_password_reset_email_with_default_store() {
        let context = HashMap::new();
        let email =
            OtpEmail::render("alice@example.com", OtpPurpose::PasswordReset, "0093", &context)
                .unwrap();
        assert_eq!(email.subject, PASSWORD_RESET_EMAIL_SUBJECT);
        assert_eq!(email.body.contains("0093"), true);
        assert_eq!(email.body.contains(DEFAULT_STORE_NAME), true);
    }
}
