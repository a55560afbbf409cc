use std::collections::HashMap;

use storefront_otp_rust::constants::*;
use storefront_otp_rust::models::otp::{OtpPurpose, OtpRecord};
use storefront_otp_rust::store::{MemoryOtpStore, OtpStore};
use storefront_otp_rust::utils::get_epoch_ts;

/// Insert a still-valid record issued `age_secs` ago
pub async fn seed_code(
    store: &MemoryOtpStore,
    recipient: &str,
    purpose: OtpPurpose,
    otp: &str,
    age_secs: u64,
) {
    let now = get_epoch_ts();
    let mut record = OtpRecord::new(recipient, purpose, otp, HashMap::new());
    record.issued_ts = now - age_secs;
    record.valid_till = now + OTP_VALIDITY_MINS * 60 - age_secs;
    store.insert(&record).await.unwrap();
}

/// Insert a record whose validity has already elapsed
pub async fn seed_expired_code(
    store: &MemoryOtpStore,
    recipient: &str,
    purpose: OtpPurpose,
    otp: &str,
) {
    let now = get_epoch_ts();
    let mut record = OtpRecord::new(recipient, purpose, otp, HashMap::new());
    record.issued_ts = now - OTP_VALIDITY_MINS * 60 - 10;
    record.valid_till = now - 10;
    store.insert(&record).await.unwrap();
}

/// Insert a record already consumed by a past verification
pub async fn seed_used_code(
    store: &MemoryOtpStore,
    recipient: &str,
    purpose: OtpPurpose,
    otp: &str,
) {
    let mut record = OtpRecord::new(recipient, purpose, otp, HashMap::new());
    record.is_used = true;
    store.insert(&record).await.unwrap();
}

pub async fn records_for(
    store: &MemoryOtpStore,
    recipient: &str,
    purpose: OtpPurpose,
) -> Vec<OtpRecord> {
    store
        .find_for_recipient(recipient, purpose, OTP_FETCH_LIMIT)
        .await
        .unwrap()
}

/// Code of the newest record currently stored for the recipient
pub async fn newest_code(store: &MemoryOtpStore, recipient: &str, purpose: OtpPurpose) -> String {
    let records = records_for(store, recipient, purpose).await;
    let newest = records
        .iter()
        .max_by_key(|r| r.issued_ts)
        .expect("no otp record stored for recipient");
    newest.otp.clone()
}
