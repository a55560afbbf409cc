use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::models::otp::{OtpPurpose, OtpRecord};

pub mod memory;
pub mod mongo;

pub use memory::MemoryOtpStore;
pub use mongo::MongoOtpStore;

/// Persistence boundary for otp records. Implementations must support
/// lookup by recipient and purpose plus identity-keyed writes.
#[async_trait]
pub trait OtpStore: Send + Sync {
    /// Fetch up to `limit` records for the given recipient and purpose
    async fn find_for_recipient(
        &self,
        recipient: &str,
        purpose: OtpPurpose,
        limit: i64,
    ) -> anyhow::Result<Vec<OtpRecord>>;

    /// Insert a freshly issued record
    async fn insert(&self, record: &OtpRecord) -> anyhow::Result<()>;

    /// Overwrite an existing record in place with fresh code, expiry and
    /// context. Returns false when no record matched the given id.
    async fn refresh_by_id(&self, id: ObjectId, fresh: &OtpRecord) -> anyhow::Result<bool>;

    /// Delete a single record. Returns false when nothing matched.
    async fn delete_by_id(&self, id: ObjectId) -> anyhow::Result<bool>;

    /// Delete every record for the recipient and purpose regardless of
    /// state. Returns the number of records removed.
    async fn purge_for_recipient(&self, recipient: &str, purpose: OtpPurpose)
        -> anyhow::Result<u64>;

    /// Delete all used or expired records across recipients
    async fn sweep(&self, now: u64) -> anyhow::Result<u64>;
}
