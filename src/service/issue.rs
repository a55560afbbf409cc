use serde::Deserialize;
use std::collections::HashMap;
use validator::Validate;

use super::OtpService;
use crate::constants::*;
use crate::mailer::{CodeMailer, OtpEmail};
use crate::models::otp::{OtpPurpose, OtpRecord};
use crate::models::GenericResponse;
use crate::store::OtpStore;
use crate::utils::{generate_otp, get_epoch_ts, normalize_recipient, validate_recipient, AppError};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct IssueCodeReq {
    #[validate(custom(function = "validate_recipient"))]
    pub recipient: String,
    pub purpose: OtpPurpose,
    #[serde(default)]
    pub context: HashMap<String, String>,
}

impl<S: OtpStore, M: CodeMailer> OtpService<S, M> {
    /// Issue or refresh a verification code for the recipient.
    /// Re-invoking this is also the resend primitive.
    pub async fn issue(&self, req: &IssueCodeReq) -> Result<GenericResponse, AppError> {
        req.validate()
            .map_err(|err| AppError::BadRequestErr(err.to_string()))?;
        let recipient = normalize_recipient(&req.recipient);
        let now = get_epoch_ts();
        let records = self
            .store
            .find_for_recipient(&recipient, req.purpose, OTP_FETCH_LIMIT)
            .await?;

        // a still-active code issued inside the resend window blocks reissue
        let recent = records
            .iter()
            .filter(|r| r.is_active(now) && r.in_resend_window(now))
            .max_by_key(|r| r.issued_ts);
        if let Some(recent) = recent {
            let wait_secs = recent.issued_ts + req.purpose.resend_window_secs() - now;
            tracing::debug!("otp reissue for {recipient} blocked for {wait_secs}s");
            return Err(AppError::RateLimited { wait_secs });
        }

        // reap used or expired records for this recipient before issuing
        for stale in records.iter().filter(|r| !r.is_active(now)) {
            if let Some(id) = stale.id {
                self.store.delete_by_id(id).await?;
            }
        }

        let otp = generate_otp(OTP_LENGTH);
        let fresh = OtpRecord::new(&recipient, req.purpose, &otp, req.context.clone());

        // overwrite the newest still-valid record in place once its window
        // has elapsed, so steady reissue does not pile up rows; older valid
        // siblings stay redeemable until one of them verifies
        let open = records
            .iter()
            .filter(|r| r.is_active(now))
            .max_by_key(|r| r.issued_ts);
        match open.and_then(|r| r.id) {
            Some(id) => {
                if !self.store.refresh_by_id(id, &fresh).await? {
                    // the record vanished between fetch and refresh
                    self.store.insert(&fresh).await?;
                }
            }
            None => self.store.insert(&fresh).await?,
        }

        if let Err(err) = self.dispatch_code(&recipient, req.purpose, &otp, &req.context).await {
            // delivery failure does not invalidate the stored code, the
            // user can still request a resend once the window elapses
            tracing::error!("otp email dispatch to {recipient} failed: {err:?}");
        }

        Ok(GenericResponse {
            success: true,
            message: format!("Verification code sent to {recipient}"),
        })
    }

    async fn dispatch_code(
        &self,
        recipient: &str,
        purpose: OtpPurpose,
        otp: &str,
        context: &HashMap<String, String>,
    ) -> anyhow::Result<()> {
        let email = OtpEmail::render(recipient, purpose, otp, context)?;
        self.mailer.send(&email).await
    }
}
