use std::{sync::Arc, time::Duration};
use tokio::time::interval;

use crate::constants::*;
use crate::mailer::CodeMailer;
use crate::service::OtpService;
use crate::store::OtpStore;

/// This function periodically deletes the used & expired otp records
/// from the record store
pub async fn cleanup_job<S, M>(service: Arc<OtpService<S, M>>)
where
    S: OtpStore,
    M: CodeMailer,
{
    tracing::debug!("initializing cleanup scheduler job");
    // CLEANUP_JOB_INTERVAL is mentioned in seconds
    let mut interval = interval(Duration::from_secs(CLEANUP_JOB_INTERVAL));
    loop {
        interval.tick().await;
        if let Err(err) = service.sweep().await {
            tracing::debug!("Error in otp cleanup: {:?}", err);
        }
    }
}
