use std::sync::Arc;

use self::cleanup::cleanup_job;
use crate::mailer::CodeMailer;
use crate::service::OtpService;
use crate::store::OtpStore;

pub mod cleanup;

pub fn spawn_all_jobs<S, M>(service: Arc<OtpService<S, M>>)
where
    S: OtpStore + 'static,
    M: CodeMailer + 'static,
{
    // spawn job to cleanup used & expired otp records
    tokio::spawn(async {
        cleanup_job(service).await;
    });
}
