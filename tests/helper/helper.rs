use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use storefront_otp_rust::mailer::{CodeMailer, OtpEmail};
use storefront_otp_rust::models::otp::OtpPurpose;
use storefront_otp_rust::service::{IssueCodeReq, OtpService, VerifyCodeReq};
use storefront_otp_rust::store::MemoryOtpStore;

/// Mailer double recording every dispatched email
pub struct RecordingMailer {
    pub sent: Mutex<Vec<OtpEmail>>,
    pub should_fail: bool,
}

impl RecordingMailer {
    pub fn new(should_fail: bool) -> Self {
        Self {
            sent: Mutex::new(vec![]),
            should_fail,
        }
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn last_email(&self) -> Option<OtpEmail> {
        self.sent.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl CodeMailer for RecordingMailer {
    async fn send(&self, email: &OtpEmail) -> anyhow::Result<()> {
        if self.should_fail {
            anyhow::bail!("mail provider unavailable");
        }
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}

pub struct TestService {
    pub service: OtpService<MemoryOtpStore, RecordingMailer>,
    pub store: Arc<MemoryOtpStore>,
    pub mailer: Arc<RecordingMailer>,
}

pub fn get_service() -> TestService {
    build_service(false)
}

pub fn get_service_with_failing_mailer() -> TestService {
    build_service(true)
}

fn build_service(mailer_fails: bool) -> TestService {
    let store = Arc::new(MemoryOtpStore::new());
    let mailer = Arc::new(RecordingMailer::new(mailer_fails));
    let service = OtpService::new(store.clone(), mailer.clone());
    TestService {
        service,
        store,
        mailer,
    }
}

pub fn issue_req(recipient: &str, purpose: OtpPurpose) -> IssueCodeReq {
    let mut context = HashMap::new();
    context.insert("storeName".to_owned(), "Trail Gear".to_owned());
    context.insert("businessId".to_owned(), "b-1001".to_owned());
    IssueCodeReq {
        recipient: recipient.to_owned(),
        purpose,
        context,
    }
}

pub fn verify_req(recipient: &str, purpose: OtpPurpose, otp: &str) -> VerifyCodeReq {
    VerifyCodeReq {
        recipient: recipient.to_owned(),
        purpose,
        otp: otp.to_owned(),
    }
}
