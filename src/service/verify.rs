use serde::Deserialize;
use validator::Validate;

use super::OtpService;
use crate::constants::*;
use crate::mailer::CodeMailer;
use crate::models::otp::OtpPurpose;
use crate::models::GenericResponse;
use crate::store::OtpStore;
use crate::utils::{get_epoch_ts, normalize_recipient, validate_otp, validate_recipient, AppError};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VerifyCodeReq {
    #[validate(custom(function = "validate_recipient"))]
    pub recipient: String,
    pub purpose: OtpPurpose,
    #[validate(length(equal = "OTP_LENGTH"), custom(function = "validate_otp"))]
    pub otp: String,
}

impl<S: OtpStore, M: CodeMailer> OtpService<S, M> {
    /// Verify a submitted code. On success the matched record and every
    /// sibling for the recipient are removed, so nothing issued earlier
    /// stays redeemable. Failed attempts leave the records untouched.
    pub async fn verify(&self, req: &VerifyCodeReq) -> Result<GenericResponse, AppError> {
        req.validate()
            .map_err(|err| AppError::BadRequestErr(err.to_string()))?;
        let recipient = normalize_recipient(&req.recipient);
        let now = get_epoch_ts();
        let records = self
            .store
            .find_for_recipient(&recipient, req.purpose, OTP_FETCH_LIMIT)
            .await?;
        if records.is_empty() {
            let msg = format!("No verification code found for {recipient}. Please request a new one");
            return Err(AppError::NotFound(msg));
        }

        // several codes may be valid at once after repeated resends, any
        // one of them is accepted
        let matched = records
            .iter()
            .filter(|r| r.is_active(now))
            .find(|r| r.otp == req.otp);
        let Some(matched) = matched else {
            // expired and wrong-code are deliberately indistinguishable
            let msg = "Invalid or expired verification code".to_owned();
            return Err(AppError::InvalidOtp(msg));
        };

        if let Some(id) = matched.id {
            self.store.delete_by_id(id).await?;
        }
        // a success closes the multi-code window for this recipient
        self.store
            .purge_for_recipient(&recipient, req.purpose)
            .await?;
        tracing::debug!("otp verified for {recipient}");

        Ok(GenericResponse {
            success: true,
            message: "Verification successful".to_owned(),
        })
    }
}
