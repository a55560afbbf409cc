use mongodb::bson::{oid::ObjectId, Bson};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::{constants::*, utils::get_epoch_ts};

/// Flows sharing the otp mechanism. A code issued for one purpose never
/// validates against another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OtpPurpose {
    Registration,
    PasswordReset,
}

impl OtpPurpose {
    pub fn to_bson(&self) -> anyhow::Result<Bson> {
        let bson = mongodb::bson::to_bson(self)?;
        Ok(bson)
    }

    /// Minimum gap between two code issuances for the same recipient
    pub fn resend_window_secs(&self) -> u64 {
        match self {
            Self::Registration => REGISTRATION_RESEND_WINDOW_SECS,
            Self::PasswordReset => PASSWORD_RESET_RESEND_WINDOW_SECS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtpRecord {
    #[serde(rename = "_id")]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub id: Option<ObjectId>,
    pub recipient: String,
    pub purpose: OtpPurpose,
    pub otp: String,
    pub issued_ts: u64,
    pub valid_till: u64,
    pub is_used: bool,
    pub attempts: u32,
    // opaque tenant metadata, carried through to the mail dispatch and
    // never interpreted here
    #[serde(default)]
    pub context: HashMap<String, String>,
}

impl OtpRecord {
    pub fn new(
        recipient: &str,
        purpose: OtpPurpose,
        otp: &str,
        context: HashMap<String, String>,
    ) -> Self {
        let ts = get_epoch_ts();
        Self {
            id: None,
            recipient: recipient.to_string(),
            purpose,
            otp: otp.to_string(),
            issued_ts: ts,
            valid_till: ts + OTP_VALIDITY_MINS * 60,
            is_used: false,
            attempts: 0,
            context,
        }
    }

    /// Only an active record may satisfy a verification
    pub fn is_active(&self, now: u64) -> bool {
        !self.is_used && self.valid_till > now
    }

    /// Whether the record was issued recently enough to block a reissue
    pub fn in_resend_window(&self, now: u64) -> bool {
        self.issued_ts + self.purpose.resend_window_secs() > now
    }
}
