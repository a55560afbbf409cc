use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::sync::{Mutex, MutexGuard};

use super::OtpStore;
use crate::models::otp::{OtpPurpose, OtpRecord};

/// In-process record store. Backs local development and tests where no
/// mongodb instance is available.
#[derive(Default)]
pub struct MemoryOtpStore {
    records: Mutex<Vec<OtpRecord>>,
}

impl MemoryOtpStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently held, across all recipients
    pub fn len(&self) -> usize {
        self.records.lock().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> anyhow::Result<MutexGuard<'_, Vec<OtpRecord>>> {
        self.records
            .lock()
            .map_err(|_| anyhow::anyhow!("otp record lock poisoned"))
    }
}

#[async_trait]
impl OtpStore for MemoryOtpStore {
    async fn find_for_recipient(
        &self,
        recipient: &str,
        purpose: OtpPurpose,
        limit: i64,
    ) -> anyhow::Result<Vec<OtpRecord>> {
        let records = self.lock()?;
        let mut matched = records
            .iter()
            .filter(|r| r.recipient == recipient && r.purpose == purpose)
            .cloned()
            .collect::<Vec<_>>();
        matched.sort_by_key(|r| r.issued_ts);
        matched.truncate(limit as usize);
        Ok(matched)
    }

    async fn insert(&self, record: &OtpRecord) -> anyhow::Result<()> {
        let mut records = self.lock()?;
        let mut record = record.clone();
        record.id.get_or_insert_with(ObjectId::new);
        records.push(record);
        Ok(())
    }

    async fn refresh_by_id(&self, id: ObjectId, fresh: &OtpRecord) -> anyhow::Result<bool> {
        let mut records = self.lock()?;
        let Some(record) = records.iter_mut().find(|r| r.id == Some(id)) else {
            return Ok(false);
        };
        record.otp = fresh.otp.clone();
        record.issued_ts = fresh.issued_ts;
        record.valid_till = fresh.valid_till;
        record.is_used = false;
        record.attempts = 0;
        record.context = fresh.context.clone();
        Ok(true)
    }

    async fn delete_by_id(&self, id: ObjectId) -> anyhow::Result<bool> {
        let mut records = self.lock()?;
        let before = records.len();
        records.retain(|r| r.id != Some(id));
        Ok(records.len() < before)
    }

    async fn purge_for_recipient(
        &self,
        recipient: &str,
        purpose: OtpPurpose,
    ) -> anyhow::Result<u64> {
        let mut records = self.lock()?;
        let before = records.len();
        records.retain(|r| !(r.recipient == recipient && r.purpose == purpose));
        Ok((before - records.len()) as u64)
    }

    async fn sweep(&self, now: u64) -> anyhow::Result<u64> {
        let mut records = self.lock()?;
        let before = records.len();
        records.retain(|r| r.is_active(now));
        Ok((before - records.len()) as u64)
    }
}
