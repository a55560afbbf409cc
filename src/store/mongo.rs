use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::FindOptions;
use std::sync::Arc;

use super::OtpStore;
use crate::{
    constants::*,
    database::AppDatabase,
    models::otp::{OtpPurpose, OtpRecord},
};

/// Otp record store backed by the app mongodb database
pub struct MongoOtpStore {
    db: Arc<AppDatabase>,
}

impl MongoOtpStore {
    pub fn new(db: Arc<AppDatabase>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OtpStore for MongoOtpStore {
    async fn find_for_recipient(
        &self,
        recipient: &str,
        purpose: OtpPurpose,
        limit: i64,
    ) -> anyhow::Result<Vec<OtpRecord>> {
        let filter = doc! {"recipient": recipient, "purpose": purpose.to_bson()?};
        let options = FindOptions::builder()
            .sort(Some(doc! {"issuedTs": 1}))
            .limit(Some(limit))
            .build();
        let records = self
            .db
            .find::<OtpRecord>(DB_NAME, COLL_OTP, Some(filter), Some(options))
            .await?;
        Ok(records)
    }

    async fn insert(&self, record: &OtpRecord) -> anyhow::Result<()> {
        self.db
            .insert_one::<OtpRecord>(DB_NAME, COLL_OTP, record, None)
            .await?;
        Ok(())
    }

    async fn refresh_by_id(&self, id: ObjectId, fresh: &OtpRecord) -> anyhow::Result<bool> {
        let filter = doc! {"_id": id};
        let update = doc! {
            "$set": {
                "otp": &fresh.otp,
                "issuedTs": fresh.issued_ts as i64,
                "validTill": fresh.valid_till as i64,
                "isUsed": false,
                "attempts": 0,
                "context": mongodb::bson::to_bson(&fresh.context)?,
            }
        };
        let result = self
            .db
            .update_one(DB_NAME, COLL_OTP, filter, update, None)
            .await?;
        Ok(result.matched_count > 0)
    }

    async fn delete_by_id(&self, id: ObjectId) -> anyhow::Result<bool> {
        let query = doc! {"_id": id};
        let result = self.db.delete_one(DB_NAME, COLL_OTP, query, None).await?;
        Ok(result.deleted_count > 0)
    }

    async fn purge_for_recipient(
        &self,
        recipient: &str,
        purpose: OtpPurpose,
    ) -> anyhow::Result<u64> {
        let query = doc! {"recipient": recipient, "purpose": purpose.to_bson()?};
        let result = self.db.delete_many(DB_NAME, COLL_OTP, query, None).await?;
        Ok(result.deleted_count)
    }

    async fn sweep(&self, now: u64) -> anyhow::Result<u64> {
        let query = doc! {"$or": [{"isUsed": true}, {"validTill": {"$lte": now as i64}}]};
        let result = self.db.delete_many(DB_NAME, COLL_OTP, query, None).await?;
        Ok(result.deleted_count)
    }
}
